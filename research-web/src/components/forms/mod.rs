mod form_error;
mod helpers;

pub use form_error::FormError;
pub use helpers::{SubmissionStatus, SubmissionStatusView};
