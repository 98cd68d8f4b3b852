use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::html::{Input, Textarea};
use leptos::logging::{error, log};
use leptos::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use super::{StudyDraft, StudySubmitter};
use crate::components::forms::{FormError, SubmissionStatusView};

const TITLE_MISSING: &str = "title input does not exist";
const INPUT_CLASS: &str = "shadow appearance-none border rounded w-full py-2 \
                           px-3 text-gray-700 leading-tight \
                           focus:outline-none focus:shadow-outline";

/// Owns the view-state rendered by [`SubmissionStatusView`] and drives it
/// through one create-study submission at a time.
#[derive(Clone)]
pub struct StudyCreation {
    submitter: Rc<dyn StudySubmitter>,
    loading_auth: Signal<bool>,
    is_submitting: RwSignal<bool>,
    api_error: RwSignal<Option<String>>,
    success_message: RwSignal<Option<String>>,
}

impl StudyCreation {
    pub fn new(
        submitter: Rc<dyn StudySubmitter>,
        loading_auth: Signal<bool>,
    ) -> Self {
        Self {
            submitter,
            loading_auth,
            is_submitting: create_rw_signal(false),
            api_error: create_rw_signal(None::<String>),
            success_message: create_rw_signal(None::<String>),
        }
    }

    pub fn is_submitting(&self) -> RwSignal<bool> {
        self.is_submitting
    }

    pub fn api_error(&self) -> RwSignal<Option<String>> {
        self.api_error
    }

    pub fn success_message(&self) -> RwSignal<Option<String>> {
        self.success_message
    }

    /// Returns false when the submission was not started.
    pub fn begin(&self) -> bool {
        if self.is_submitting.get_untracked() {
            return false;
        }
        if self.loading_auth.get_untracked() {
            self.reject(FormError::AuthPending);
            return false;
        }
        self.api_error.set(None);
        self.success_message.set(None);
        self.is_submitting.set(true);
        true
    }

    /// Shows `err` as the only message without starting a submission.
    pub fn reject(&self, err: FormError) {
        self.success_message.set(None);
        self.api_error.set(Some(err.to_string()));
    }

    pub fn finish(&self, result: Result<String, FormError>) {
        match result {
            Ok(message) => {
                log!("Study submitted: {}", message);
                self.success_message.set(Some(message));
            }
            Err(err) => {
                let msg = err.to_string();
                error!("Error creating study: {}", msg);
                self.api_error.set(Some(msg));
            }
        }
        self.is_submitting.set(false);
    }

    pub fn submit(&self, draft: StudyDraft) {
        if !self.begin() {
            return;
        }
        let creation = self.clone();
        spawn_local(async move {
            let result = creation.submitter.submit(draft).await;
            creation.finish(result);
        });
    }
}

#[component]
pub fn CreateStudyForm(
    submitter: Rc<dyn StudySubmitter>,
    #[prop(into)] loading_auth: Signal<bool>,
) -> impl IntoView {
    let creation = StudyCreation::new(submitter, loading_auth);
    let title_ref: NodeRef<Input> = create_node_ref();
    let description_ref: NodeRef<Textarea> = create_node_ref();

    let form_id = Uuid::new_v4().to_string();
    let title_id = format!("{}-title", form_id);
    let description_id = format!("{}-description", form_id);

    let on_submit = {
        let creation = creation.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            match read_draft(title_ref, description_ref) {
                Ok(draft) => creation.submit(draft),
                Err(err) => creation.reject(err),
            }
        }
    };

    view! {
        <form id=form_id class="flex flex-col w-96" on:submit=on_submit>
            <div class="flex flex-col mb-4">
                <label class="mb-2" for=title_id.clone()>"Study title"</label>
                <input id=title_id type="text" class=INPUT_CLASS node_ref=title_ref />
            </div>
            <div class="flex flex-col mb-4">
                <label class="mb-2" for=description_id.clone()>"Description"</label>
                <textarea id=description_id rows="4" class=INPUT_CLASS node_ref=description_ref></textarea>
            </div>
            <SubmissionStatusView
                is_submitting=creation.is_submitting()
                loading_auth
                api_error=creation.api_error()
                success_message=creation.success_message()
            />
        </form>
    }
}

fn read_draft(
    title_ref: NodeRef<Input>,
    description_ref: NodeRef<Textarea>,
) -> Result<StudyDraft, FormError> {
    let title = title_ref
        .get_untracked()
        .map(|input| input.value())
        .ok_or_else(|| FormError::SubmitError(TITLE_MISSING.to_string()))?;
    let description = description_ref
        .get_untracked()
        .map(|text_area| text_area.value())
        .unwrap_or_default();
    Ok(StudyDraft { title, description })
}
