use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use leptos::logging::log;
use serde::{Deserialize, Serialize};

use crate::components::forms::FormError;
use crate::vars::STUDY_CREATED_MESSAGE;

const TITLE_REQUIRED: &str = "study title is required";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyDraft {
    pub title: String,
    pub description: String,
}

/// Sends a create-study request on behalf of the form.
///
/// Resolves to the message shown in the success alert, or to the error
/// whose text is shown in the error alert.
pub trait StudySubmitter {
    fn submit(
        &self,
        draft: StudyDraft,
    ) -> LocalBoxFuture<'_, Result<String, FormError>>;
}

#[derive(Clone, Default)]
pub struct MemorySubmitter {
    // drafts are kept as json, the same shape a backend would receive
    records: Arc<Mutex<Vec<String>>>,
}

impl MemorySubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drafts stored so far, in submission order.
    pub fn drafts(&self) -> Result<Vec<StudyDraft>, FormError> {
        let records = self.records()?;
        records
            .iter()
            .map(|record| serde_json::from_str(record).map_err(FormError::from))
            .collect()
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<String>>, FormError> {
        self.records
            .lock()
            .map_err(|err| FormError::SubmitError(err.to_string()))
    }

    fn store(&self, draft: StudyDraft) -> Result<String, FormError> {
        if draft.title.trim().is_empty() {
            return Err(FormError::SubmitError(TITLE_REQUIRED.to_string()));
        }
        let record = serde_json::to_string(&draft)?;
        log!("Storing study: {}", record);

        self.records()?.push(record);
        Ok(STUDY_CREATED_MESSAGE.to_string())
    }
}

impl StudySubmitter for MemorySubmitter {
    fn submit(
        &self,
        draft: StudyDraft,
    ) -> LocalBoxFuture<'_, Result<String, FormError>> {
        future::ready(self.store(draft)).boxed_local()
    }
}
