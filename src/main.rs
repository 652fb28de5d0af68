use anyhow::Context;

use contact_form::configuration::get_configuration;
use contact_form::startup::Application;
use contact_form::telemetry::{get_tracing_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_tracing_subscriber("contact-form", "info", std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let application = Application::build(configuration)?;
    tracing::info!(port = application.port(), "Accepting consultation requests");
    application.run_until_stopped().await?;
    Ok(())
}
