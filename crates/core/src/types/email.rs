//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("email must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input does not contain an @ symbol.
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    /// One side of the @ symbol is empty.
    #[error("email needs text on both sides of the @ symbol")]
    EmptyPart,
}

/// An email address attached to a session user.
///
/// Only the shape is checked: a non-empty local part and domain separated by
/// an @ symbol, at most 254 characters (RFC 5321). Surrounding whitespace is
/// trimmed.
///
/// ```
/// use miapp_core::Email;
///
/// let email = Email::parse("demo@miapp.com").unwrap();
/// assert_eq!(email.domain(), "miapp.com");
/// assert!(Email::parse("demo.miapp.com").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Address of the built-in demo user.
    pub const DEMO: &'static str = "demo@miapp.com";

    /// The built-in demo user's address.
    #[must_use]
    pub fn demo() -> Self {
        Self(Self::DEMO.to_owned())
    }

    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, too long, has no @
    /// symbol, or has nothing before or after it.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAtSymbol)?;
        if local.is_empty() || domain.is_empty() {
            return Err(EmailError::EmptyPart);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the domain part of the email (after the @).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let email = Email::parse("  demo@miapp.com ").unwrap();
        assert_eq!(email.as_str(), "demo@miapp.com");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
        assert_eq!(Email::parse("nobody"), Err(EmailError::MissingAtSymbol));
        assert_eq!(Email::parse("@miapp.com"), Err(EmailError::EmptyPart));
        assert_eq!(Email::parse("demo@"), Err(EmailError::EmptyPart));
    }

    #[test]
    fn test_parse_too_long() {
        let long = format!("{}@miapp.com", "a".repeat(250));
        assert!(matches!(
            Email::parse(&long),
            Err(EmailError::TooLong { max: 254 })
        ));
    }

    #[test]
    fn test_demo_is_well_formed() {
        assert_eq!(Email::parse(Email::DEMO).unwrap(), Email::demo());
    }

    #[test]
    fn test_domain() {
        let email: Email = "usuario@correo.example.es".parse().unwrap();
        assert_eq!(email.domain(), "correo.example.es");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let email = Email::parse("demo@miapp.com").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"demo@miapp.com\"");
        assert_eq!(format!("{email}"), "demo@miapp.com");
    }
}
