use super::button_type::ButtonType;

#[derive(Clone, Debug)]
pub struct FormButton {
    button_type: ButtonType,
    enabled: bool,
    text: String,
}

impl FormButton {
    pub fn new(button_type: ButtonType, text: &str) -> Self {
        Self {
            button_type,
            enabled: true, // default
            text: text.to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn button_class(&self) -> String {
        self.button_type.button_class(!self.is_enabled())
    }
}
