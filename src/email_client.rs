use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use crate::domain::EmailAddress;

/// The mailbox notifications are sent from, e.g. `AI Integration Labs <onboarding@resend.dev>`.
#[derive(Debug, Clone)]
pub struct Sender {
    pub name: String,
    pub email: EmailAddress,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{} <{}>", self.name, self.email)
        }
    }
}

/// Whatever the provider hands back for an accepted email, kept verbatim and never inspected.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DeliveryReceipt(pub serde_json::Value);

#[derive(Debug)]
pub struct EmailClient {
    sender: String,
    http_client: Client,
    emails_url: Url,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: Url,
        sender: Sender,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, anyhow::Error> {
        let emails_url = with_trailing_slash(base_url).join("emails")?;
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            sender: sender.to_string(),
            http_client,
            emails_url,
            authorization_token,
        })
    }

    /// Hands one email over to the provider. Never retried: a failure is returned to the caller as is.
    #[tracing::instrument(name = "Delegating an email to the provider", skip_all)]
    pub async fn send_email(
        &self,
        recipient: &EmailAddress,
        reply_to: &str,
        subject: &str,
        html_content: &str,
    ) -> Result<DeliveryReceipt, reqwest::Error> {
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: recipient.as_ref(),
            reply_to,
            subject,
            html: html_content,
        };

        let receipt = self
            .http_client
            .post(self.emails_url.clone())
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            // `send` only fails on transport problems; status codes have to be checked here.
            .error_for_status()?
            .json::<DeliveryReceipt>()
            .await?;

        tracing::info!("Email accepted by the provider");
        Ok(receipt)
    }
}

/// Makes `join` append to the last path segment instead of replacing it, so a base url like
/// `https://host/v1` keeps its prefix.
pub(crate) fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
}
