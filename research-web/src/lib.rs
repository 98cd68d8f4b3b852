pub(crate) mod base;
pub(crate) mod components;
pub(crate) mod routes;
pub(crate) mod vars;

pub mod app;

pub use base::state::GlobalState;
pub use components::create_study_form::{
    MemorySubmitter, StudyDraft, StudySubmitter,
};
pub use components::forms::{
    FormError, SubmissionStatus, SubmissionStatusView,
};
pub use vars::LOG_LEVEL;
