use std::fmt::{Debug, Formatter};

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::domain::{ConsultationEmail, ConsultationRequest};
use crate::email_client::{DeliveryReceipt, EmailClient};
use crate::error_handling::{error_chain_fmt, json_error};
use crate::startup::ConsultationInbox;

/// The raw submission. Every field is optional here so that an absent field is reported as
/// missing rather than as a malformed body.
#[derive(Debug, serde::Deserialize)]
pub struct SendEmailBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub data: DeliveryReceipt,
}

#[derive(thiserror::Error)]
pub enum SendEmailError {
    #[error("Invalid request body")]
    MalformedBody(#[source] JsonPayloadError),
    #[error("Missing required fields")]
    ValidationError(String),
    #[error("Failed to send email")]
    DeliveryError(#[source] reqwest::Error),
}

impl Debug for SendEmailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SendEmailError {
    fn status_code(&self) -> StatusCode {
        match self {
            SendEmailError::MalformedBody(_) | SendEmailError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            SendEmailError::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            SendEmailError::MalformedBody(e) => Some(e.to_string()),
            SendEmailError::ValidationError(_) => None,
            SendEmailError::DeliveryError(e) => Some(e.to_string()),
        };
        json_error(self.status_code(), self, details)
    }
}

/// Routes body extraction failures (bad JSON, wrong content type, oversized payload) through
/// `SendEmailError` so they get the same JSON error shape as every other failure.
pub fn send_email_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|error, _request| SendEmailError::MalformedBody(error).into())
}

#[tracing::instrument(
    name = "Forwarding a consultation request",
    skip(body, email_client, inbox),
    fields(
        requester_email = tracing::field::Empty,
        requester_name = tracing::field::Empty
    )
)]
pub async fn send_email(
    body: web::Json<SendEmailBody>,
    email_client: web::Data<EmailClient>,
    inbox: web::Data<ConsultationInbox>,
) -> Result<HttpResponse, SendEmailError> {
    let request = ConsultationRequest::try_from(body.into_inner()).map_err(|e| {
        tracing::warn!(reason = %e, "Rejecting an incomplete consultation request");
        SendEmailError::ValidationError(e)
    })?;
    tracing::Span::current()
        .record("requester_email", &tracing::field::display(&request.reply_to))
        .record("requester_name", &tracing::field::display(&request.name));

    let email = ConsultationEmail::compose(&request);
    let receipt = email_client
        .send_email(
            &inbox.0,
            request.reply_to.as_ref(),
            &email.subject,
            &email.html,
        )
        .await
        .map_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to deliver a consultation request"
            );
            SendEmailError::DeliveryError(e)
        })?;

    Ok(HttpResponse::Ok().json(SendEmailResponse {
        success: true,
        data: receipt,
    }))
}
