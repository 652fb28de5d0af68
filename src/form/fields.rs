use std::str::FromStr;

use crate::domain::EmailAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FromStr for FormField {
    type Err = String;

    /// Maps the `name` attribute of a form input to the field it edits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "company" => Ok(Self::Company),
            "message" => Ok(Self::Message),
            other => Err(format!("{} is not a contact form field.", other)),
        }
    }
}

/// The draft the visitor is typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Checks presence first, then the address format, and snapshots the four fields.
    pub fn validate(&self) -> Result<SubmissionRequest, ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if !EmailAddress::is_well_formed(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(SubmissionRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            message: self.message.clone(),
        })
    }
}

/// What goes over the wire: exactly the four form fields, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
