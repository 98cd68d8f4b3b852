use leptos::*;

use crate::vars::NEW_STUDY_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="py-4">
            <p>"Page not found."</p>
            <a href=NEW_STUDY_PATH class="text-blue-600 hover:underline">
                "Create a research study"
            </a>
        </div>
    }
}
