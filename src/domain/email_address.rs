use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately loose: one `@`, no whitespace, and a dot somewhere after the `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern is valid"));

#[derive(Debug, Clone)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Returns an instance of `EmailAddress` if the input looks like `local@domain.tld`.
    /// This is a syntactic heuristic only; it makes no attempt at RFC 5322 compliance.
    pub fn parse(s: String) -> Result<EmailAddress, String> {
        if Self::is_well_formed(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid email address.", s))
        }
    }

    pub fn is_well_formed(s: &str) -> bool {
        EMAIL_PATTERN.is_match(s)
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
