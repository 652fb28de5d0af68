pub mod configuration;
pub mod domain;
pub mod email_client;
mod error_handling;
pub mod form;
pub mod routes;
pub mod startup;
pub mod telemetry;

pub use error_handling::ErrorResponse;
