use crate::form::status::{NETWORK_ERROR_MESSAGE, REJECTED_FALLBACK_MESSAGE, SUCCESS_MESSAGE};
use crate::form::{
    ContactApiClient, ContactApiError, FormField, FormFields, FormStatus, SubmissionRequest,
    SubmissionResult,
};

const SUBMIT_LABEL: &str = "Schedule a Consultation";
const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    /// Validation passed and a request has been handed out, but not yet sent.
    Submitting,
    AwaitingResult,
}

/// Owns one contact form: the draft, the workflow state and the visible status.
///
/// At most one submission is in flight per controller. Every exit from a submission returns
/// to [`FormState::Editing`], whatever the outcome.
#[derive(Debug)]
pub struct ContactFormController {
    fields: FormFields,
    status: FormStatus,
    state: FormState,
}

impl Default for ContactFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormController {
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            status: FormStatus::None,
            state: FormState::Editing,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state != FormState::Editing
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Updates exactly one field. The status is left alone.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Validates the draft and, if it passes, enters [`FormState::Submitting`] and returns the
    /// request to send. Returns `None` without any visible change while a submission is already
    /// in flight.
    pub fn begin_submission(&mut self) -> Option<SubmissionRequest> {
        if self.is_submitting() {
            tracing::debug!("Ignoring a submit attempt while a submission is in flight");
            return None;
        }
        match self.fields.validate() {
            Ok(request) => {
                self.status = FormStatus::None;
                self.state = FormState::Submitting;
                Some(request)
            }
            Err(e) => {
                self.status = FormStatus::Error(e.to_string());
                None
            }
        }
    }

    /// Applies the outcome of the in-flight submission. Outcomes arriving while nothing is in
    /// flight are stale and dropped.
    pub fn finish_submission(&mut self, outcome: Result<SubmissionResult, ContactApiError>) {
        if !self.is_submitting() {
            tracing::debug!("Dropping the outcome of a submission that is no longer in flight");
            return;
        }
        self.state = FormState::Editing;
        self.status = match outcome {
            Ok(SubmissionResult::Delivered(_)) => {
                self.fields = FormFields::default();
                FormStatus::Success(SUCCESS_MESSAGE.to_string())
            }
            Ok(SubmissionResult::Rejected { error, .. }) => FormStatus::Error(
                error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string()),
            ),
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to submit the contact form"
                );
                FormStatus::Error(NETWORK_ERROR_MESSAGE.to_string())
            }
        };
    }

    /// Runs one full submission: validate, send exactly once, apply the outcome. Never retries.
    pub async fn submit(&mut self, client: &ContactApiClient) {
        let request = match self.begin_submission() {
            Some(request) => request,
            None => return,
        };
        self.state = FormState::AwaitingResult;
        let outcome = client.submit(&request).await;
        self.finish_submission(outcome);
    }
}
