#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    SubmitError(String),
    AuthPending,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::SubmitError(msg) => write!(f, "Submit error: {}", msg),
            FormError::AuthPending => {
                write!(f, "Session is still loading, please try again")
            }
        }
    }
}

impl From<String> for FormError {
    fn from(s: String) -> Self {
        FormError::SubmitError(s)
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::SubmitError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FormError::from("Network error".to_string());
        assert_eq!(err, FormError::SubmitError("Network error".to_string()));
        assert_eq!(err.to_string(), "Submit error: Network error");
        assert_eq!(
            FormError::AuthPending.to_string(),
            "Session is still loading, please try again"
        );
    }
}
