pub const SUCCESS_MESSAGE: &str =
    "✨ Thank you! Your message has been sent successfully. We'll get back to you within 24 hours.";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to send message. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    None,
    Success,
    Error,
}

/// The message shown above the form. Lives only until the next submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            FormStatus::None => StatusKind::None,
            FormStatus::Success(_) => StatusKind::Success,
            FormStatus::Error(_) => StatusKind::Error,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FormStatus::None => "",
            FormStatus::Success(message) | FormStatus::Error(message) => message,
        }
    }
}
