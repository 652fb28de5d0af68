use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::domain::EmailAddress;
use crate::email_client::EmailClient;
use crate::routes::{health_check, send_email, send_email_json_config};

/// The inbox every consultation request is delivered to.
pub struct ConsultationInbox(pub EmailAddress);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration.email_client.client()?;
        let inbox = configuration
            .email_client
            .recipient()
            .map_err(anyhow::Error::msg)
            .context("Invalid recipient email address.")?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
        // the configured port may be 0, so ask the listener which one the OS picked
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, inbox)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    inbox: EmailAddress,
) -> Result<Server, std::io::Error> {
    // wrap in `web::Data` (an `Arc`) so every worker shares one client and its connection pool
    let email_client = web::Data::new(email_client);
    let inbox = web::Data::new(ConsultationInbox(inbox));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource("/api/send-email")
                    .app_data(send_email_json_config())
                    .route(web::post().to(send_email)),
            )
            .app_data(email_client.clone())
            .app_data(inbox.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
