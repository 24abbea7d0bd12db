//! Contact form state and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// One or more required fields are empty.
    #[error("Por favor completa todos los campos")]
    MissingFields {
        /// The empty fields, in form order.
        fields: Vec<ContactField>,
    },
}

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// All fields, in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Message => write!(f, "message"),
        }
    }
}

impl std::str::FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(format!("invalid contact field: {s}")),
        }
    }
}

/// Contact form contents as typed so far.
///
/// Values are kept verbatim; the only check is that each field is non-empty
/// on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Current value of a field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Check that every field has a value.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] listing every empty field.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect();

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields { fields })
        }
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Hola".to_string(),
        }
    }

    #[test]
    fn test_validate_complete_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_validate_lists_every_missing_field() {
        let mut form = filled();
        form.set(ContactField::Name, "");
        form.set(ContactField::Message, "");

        assert_eq!(
            form.validate(),
            Err(ContactError::MissingFields {
                fields: vec![ContactField::Name, ContactField::Message],
            })
        );
    }

    #[test]
    fn test_empty_form_reports_all_fields() {
        let Err(ContactError::MissingFields { fields }) = ContactForm::default().validate() else {
            panic!("empty form must not validate");
        };
        assert_eq!(fields, ContactField::ALL.to_vec());
    }

    #[test]
    fn test_set_and_clear() {
        let mut form = ContactForm::default();
        form.set(ContactField::Email, "ana@example.com");
        assert_eq!(form.get(ContactField::Email), "ana@example.com");

        form.clear();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_error_message() {
        let err = ContactError::MissingFields {
            fields: vec![ContactField::Email],
        };
        assert_eq!(err.to_string(), "Por favor completa todos los campos");
    }
}
