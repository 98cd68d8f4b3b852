use leptos::*;

use crate::components::buttons::{ButtonType, FormButton};
use crate::components::icons::LoadingSpinnerIcon;
use crate::vars::{CREATE_STUDY_LABEL, CREATING_STUDY_LABEL};

const ERROR_ALERT_CLASS: &str =
    "alert-error border border-red-400 bg-red-100 text-red-700 px-4 py-3 \
     rounded";
const SUCCESS_ALERT_CLASS: &str =
    "alert-success border border-green-400 bg-green-100 text-green-700 px-4 \
     py-3 rounded";

/// Snapshot of the view-state a parent form passes into
/// [`SubmissionStatusView`] on every render.
///
/// Everything the panel shows is derived from these four values; the panel
/// itself never writes back to them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionStatus {
    pub is_submitting: bool,
    pub loading_auth: bool,
    pub api_error: Option<String>,
    pub success_message: Option<String>,
}

impl SubmissionStatus {
    pub fn new(
        is_submitting: bool,
        loading_auth: bool,
        api_error: Option<String>,
        success_message: Option<String>,
    ) -> Self {
        Self {
            is_submitting,
            loading_auth,
            api_error,
            success_message,
        }
    }

    /// Error text to show, `None` when absent or empty.
    pub fn error_alert(&self) -> Option<&str> {
        non_empty(&self.api_error)
    }

    /// Success text to show, `None` when absent or empty.
    pub fn success_alert(&self) -> Option<&str> {
        non_empty(&self.success_message)
    }

    pub fn is_button_disabled(&self) -> bool {
        self.is_submitting || self.loading_auth
    }

    pub fn shows_loading_indicator(&self) -> bool {
        self.is_submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting {
            CREATING_STUDY_LABEL
        } else {
            CREATE_STUDY_LABEL
        }
    }

    pub fn submit_button(&self) -> FormButton {
        FormButton::new(ButtonType::Create, self.button_label())
            .set_enabled(!self.is_button_disabled())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[component]
pub fn SubmissionStatusView(
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] loading_auth: Signal<bool>,
    #[prop(into)] api_error: Signal<Option<String>>,
    #[prop(into)] success_message: Signal<Option<String>>,
) -> impl IntoView {
    let status = create_memo(move |_| {
        SubmissionStatus::new(
            is_submitting.get(),
            loading_auth.get(),
            api_error.get(),
            success_message.get(),
        )
    });

    view! {
        <div class="flex flex-col space-y-3 mt-4">
            // error from the last submission, verbatim
            { move || status
                .with(|s| s.error_alert().map(str::to_string))
                .map(|error| view! {
                    <div role="alert" class=ERROR_ALERT_CLASS>{error}</div>
                })
            }

            { move || status
                .with(|s| s.success_alert().map(str::to_string))
                .map(|message| view! {
                    <div role="alert" class=SUCCESS_ALERT_CLASS>{message}</div>
                })
            }

            // submit is handled by the enclosing form
            <button
                type="submit"
                class=move || status.with(|s| s.submit_button().button_class())
                disabled=move || status.with(SubmissionStatus::is_button_disabled)
            >
                { move || {
                    let button = status.with(SubmissionStatus::submit_button);
                    if status.with(SubmissionStatus::shows_loading_indicator) {
                        view! {
                            <LoadingSpinnerIcon />
                            <span>{button.text().to_string()}</span>
                        }.into_view()
                    } else {
                        view! { <span>{button.text().to_string()}</span> }.into_view()
                    }
                }}
            </button>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlButtonElement, HtmlElement};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn render(status: SubmissionStatus) -> HtmlElement {
        let container = document()
            .create_element("div")
            .unwrap()
            .unchecked_into::<HtmlElement>();
        document().body().unwrap().append_child(&container).unwrap();

        let SubmissionStatus {
            is_submitting,
            loading_auth,
            api_error,
            success_message,
        } = status;
        mount_to(container.clone(), move || {
            view! {
                <SubmissionStatusView
                    is_submitting=Signal::derive(move || is_submitting)
                    loading_auth=Signal::derive(move || loading_auth)
                    api_error=Signal::derive(move || api_error.clone())
                    success_message=Signal::derive(move || success_message.clone())
                />
            }
        });
        container
    }

    fn text_of(container: &HtmlElement, selector: &str) -> Option<String> {
        container
            .query_selector(selector)
            .unwrap()
            .and_then(|element| element.text_content())
    }

    fn button(container: &HtmlElement) -> HtmlButtonElement {
        container
            .query_selector("button")
            .unwrap()
            .unwrap()
            .unchecked_into::<HtmlButtonElement>()
    }

    #[wasm_bindgen_test]
    fn test_renders_idle() {
        let container = render(SubmissionStatus::default());
        let button = button(&container);

        assert_eq!(button.type_(), "submit");
        assert!(!button.disabled());
        assert_eq!(button.text_content().unwrap(), "Create Research Study");
        assert!(container.query_selector("svg.animate-spin").unwrap().is_none());
        assert!(container.query_selector("[role=alert]").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_renders_submitting() {
        let container =
            render(SubmissionStatus::new(true, false, None, None));
        let button = button(&container);

        assert!(button.disabled());
        assert!(button.query_selector("svg.animate-spin").unwrap().is_some());
        assert_eq!(button.text_content().unwrap(), "Creating Study...");
    }

    #[wasm_bindgen_test]
    fn test_renders_disabled_while_auth_loading() {
        let container =
            render(SubmissionStatus::new(false, true, None, None));
        let button = button(&container);

        assert!(button.disabled());
        assert_eq!(button.text_content().unwrap(), "Create Research Study");
    }

    #[wasm_bindgen_test]
    fn test_renders_error_alert() {
        let container = render(SubmissionStatus::new(
            false,
            false,
            Some("Network error".to_string()),
            None,
        ));

        assert_eq!(
            text_of(&container, ".alert-error").as_deref(),
            Some("Network error")
        );
        assert!(text_of(&container, ".alert-success").is_none());
        assert!(!button(&container).disabled());
    }

    #[wasm_bindgen_test]
    fn test_renders_success_alert() {
        let container = render(SubmissionStatus::new(
            false,
            false,
            None,
            Some("Study created".to_string()),
        ));

        assert_eq!(
            text_of(&container, ".alert-success").as_deref(),
            Some("Study created")
        );
        assert!(text_of(&container, ".alert-error").is_none());
    }

    #[wasm_bindgen_test]
    fn test_empty_messages_render_no_alerts() {
        let container = render(SubmissionStatus::new(
            false,
            false,
            Some(String::new()),
            Some(String::new()),
        ));
        assert!(container.query_selector("[role=alert]").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_alerts_precede_button() {
        let container = render(SubmissionStatus::new(
            false,
            false,
            Some("Network error".to_string()),
            Some("Study created".to_string()),
        ));
        let panel = container.first_element_child().unwrap();
        let children = panel.children();
        let classes: Vec<String> = (0..children.length())
            .filter_map(|i| children.item(i))
            .map(|child| {
                format!("{}.{}", child.tag_name().to_lowercase(), child.class_name())
            })
            .collect();

        assert_eq!(classes.len(), 3);
        assert!(classes[0].starts_with("div.alert-error"));
        assert!(classes[1].starts_with("div.alert-success"));
        assert!(classes[2].starts_with("button."));
    }
}
