mod study_form;
mod submitter;

pub use study_form::CreateStudyForm;
pub use submitter::{MemorySubmitter, StudyDraft, StudySubmitter};
