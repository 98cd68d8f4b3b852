use std::rc::Rc;

use leptos::*;

use crate::components::create_study_form::{CreateStudyForm, StudySubmitter};
use crate::GlobalState;

#[component]
pub fn NewStudy() -> impl IntoView {
    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");

    let loading_auth = create_read_slice(state, |state| state.is_auth_loading());
    let submitter: Rc<dyn StudySubmitter> =
        Rc::new(state.with_untracked(|state| state.submitter.clone()));

    view! {
        <h1 class="text-2xl font-light py-4">"New Research Study"</h1>
        <CreateStudyForm submitter loading_auth />
    }
}
