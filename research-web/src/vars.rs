pub const CREATE_STUDY_LABEL: &str = "Create Research Study";
pub const CREATING_STUDY_LABEL: &str = "Creating Study...";
pub const STUDY_CREATED_MESSAGE: &str = "Study created";

pub const NEW_STUDY_PATH: &str = "/studies/new";

// session state is resolved outside this app, the flag only gates the form
pub const AUTH_RESOLVE_DELAY_MS: u64 = 300;

pub const LOG_LEVEL: log::Level = log::Level::Debug;
