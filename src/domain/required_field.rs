/// Text that must be present and non-empty.
///
/// Only emptiness is checked: whitespace-only input is accepted, mirroring the contact form.
#[derive(Debug, Clone)]
pub struct RequiredField(String);

impl RequiredField {
    pub fn parse(value: Option<String>, field_name: &str) -> Result<RequiredField, String> {
        match value {
            Some(value) if !value.is_empty() => Ok(Self(value)),
            _ => Err(format!("The `{}` field is missing or empty.", field_name)),
        }
    }
}

impl AsRef<str> for RequiredField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
