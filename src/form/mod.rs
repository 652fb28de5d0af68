//! The contact form as the page drives it: draft fields, local validation, one in-flight
//! submission at a time and the status message shown to the visitor.

mod api_client;
mod controller;
mod fields;
mod status;

pub use api_client::{ContactApiClient, ContactApiError, SubmissionResult};
pub use controller::{ContactFormController, FormState};
pub use fields::{FormField, FormFields, SubmissionRequest, ValidationError};
pub use status::{FormStatus, StatusKind};
