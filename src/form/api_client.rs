use std::fmt::{Debug, Formatter};

use reqwest::{Client, Url};

use crate::email_client::{with_trailing_slash, DeliveryReceipt};
use crate::error_handling::error_chain_fmt;
use crate::form::SubmissionRequest;
use crate::routes::SendEmailResponse;

/// How the endpoint answered a submission that reached it.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Delivered(DeliveryReceipt),
    Rejected {
        error: Option<String>,
        details: Option<String>,
    },
}

#[derive(thiserror::Error)]
pub enum ContactApiError {
    #[error("Failed to reach the contact endpoint")]
    Transport(#[source] reqwest::Error),
    #[error("The contact endpoint sent a response that could not be read")]
    UnreadableResponse(#[source] reqwest::Error),
}

impl Debug for ContactApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// Failure bodies are read leniently: a missing `error` falls back to a generic message upstream.
#[derive(serde::Deserialize)]
struct RejectionBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Talks to `POST /api/send-email` on behalf of the contact form.
///
/// No timeout is configured: a submission runs until the transport gives up.
#[derive(Debug)]
pub struct ContactApiClient {
    http_client: Client,
    endpoint: Url,
}

impl ContactApiClient {
    pub fn new(base_url: &str) -> Result<Self, anyhow::Error> {
        let endpoint = with_trailing_slash(Url::parse(base_url)?).join("api/send-email")?;
        Ok(Self {
            http_client: Client::new(),
            endpoint,
        })
    }

    #[tracing::instrument(name = "Submitting the contact form", skip_all)]
    pub async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResult, ContactApiError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(ContactApiError::Transport)?;

        if response.status().is_success() {
            let body: SendEmailResponse = response
                .json()
                .await
                .map_err(ContactApiError::UnreadableResponse)?;
            Ok(SubmissionResult::Delivered(body.data))
        } else {
            let status = response.status();
            let body: RejectionBody = response
                .json()
                .await
                .map_err(ContactApiError::UnreadableResponse)?;
            tracing::warn!(
                %status,
                error = ?body.error,
                details = ?body.details,
                "The contact endpoint rejected the submission"
            );
            Ok(SubmissionResult::Rejected {
                error: body.error,
                details: body.details,
            })
        }
    }
}
