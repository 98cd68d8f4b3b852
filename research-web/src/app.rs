use std::time::Duration;

use leptos::logging::log;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::routes::studies::NewStudy;
use crate::routes::NotFound;
use crate::vars::{AUTH_RESOLVE_DELAY_MS, NEW_STUDY_PATH};
use crate::GlobalState;

#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(GlobalState::default());
    provide_meta_context();
    provide_context(state);

    let set_auth_loading = create_write_slice(state, |state, loading: bool| {
        state.set_auth_loading(loading)
    });

    // session resolution lives outside this app, only the flag is tracked
    set_timeout(
        move || {
            log!("Session state resolved");
            set_auth_loading.set(false);
        },
        Duration::from_millis(AUTH_RESOLVE_DELAY_MS),
    );

    view! {
        <Stylesheet id="research-web" href="/pkg/tailwind.css"/>
        <Title text="Research Studies"/>
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <Router fallback=|| view! { <NotFound/> }.into_view()>
                <nav class="py-2 px-4 text-lg font-medium h-12 bg-customBlue flex items-center">
                    <a href=NEW_STUDY_PATH class="text-white hover:text-green-500">
                        "Research Studies"
                    </a>
                </nav>
                <main>
                    <Routes>
                        // serve the form directly on first page load
                        <Route path="/" view=|| view! { <NewStudy/> }/>
                        <Route path=NEW_STUDY_PATH view=|| view! { <NewStudy/> }/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
