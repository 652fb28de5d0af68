use anyhow::Context;
use reqwest::Url;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::EmailAddress;
use crate::email_client::{EmailClient, Sender};

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    // environment variables are always strings, so the port has to accept both forms
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub sender_name: String,
    /// Where consultation requests are delivered. Never taken from a submission.
    pub recipient_email: String,
    pub authorization_token: Secret<String>,
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<Sender, String> {
        let email = EmailAddress::parse(self.sender_email.clone())?;
        Ok(Sender {
            name: self.sender_name.clone(),
            email,
        })
    }

    pub fn recipient(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.recipient_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> Result<EmailClient, anyhow::Error> {
        let base_url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid email provider base url: {}", self.base_url))?;
        let sender = self
            .sender()
            .map_err(anyhow::Error::msg)
            .context("Invalid sender email address.")?;
        EmailClient::new(
            base_url,
            sender,
            self.authorization_token.clone(),
            self.timeout(),
        )
    }
}

/// Loads `configuration/base.yaml`, layers the environment-specific file on top, then applies
/// `APP_`-prefixed environment variables (e.g. `APP_EMAIL_CLIENT__AUTHORIZATION_TOKEN`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environments for the application
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
