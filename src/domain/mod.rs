mod consultation_email;
mod consultation_request;
mod email_address;
mod required_field;

pub use consultation_email::ConsultationEmail;
pub use consultation_request::ConsultationRequest;
pub use email_address::EmailAddress;
pub use required_field::RequiredField;
