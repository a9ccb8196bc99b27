// SPDX-License-Identifier: MPL-2.0
//! Client-side checks run before anything leaves the form.

use super::{FormField, FormFields, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns `true` when `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Validates a complete form: every field filled, then the email shape.
///
/// Whitespace-only input counts as empty.
pub fn validate(fields: &FormFields) -> Result<(), ValidationError> {
    if let Some(field) = FormField::ALL
        .into_iter()
        .find(|field| fields.get(*field).trim().is_empty())
    {
        return Err(ValidationError::MissingField(field));
    }

    if !is_valid_email(fields.get(FormField::Email).trim()) {
        return Err(ValidationError::MalformedEmail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Let's build something.".into(),
        }
    }

    #[test]
    fn accepts_standard_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["not-an-email", "a@b", "@example.com", "a b@example.com", "a@@b.c"] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn reports_first_missing_field_in_form_order() {
        let mut fields = filled();
        fields.subject.clear();
        fields.message.clear();
        assert_eq!(
            validate(&fields),
            Err(ValidationError::MissingField(FormField::Subject))
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut fields = filled();
        fields.name = "   ".into();
        assert_eq!(
            validate(&fields),
            Err(ValidationError::MissingField(FormField::Name))
        );
    }

    #[test]
    fn surrounding_whitespace_on_email_is_ignored() {
        let mut fields = filled();
        fields.email = "  ada@example.com \n".into();
        assert_eq!(validate(&fields), Ok(()));
    }

    #[test]
    fn missing_field_wins_over_malformed_email() {
        let mut fields = filled();
        fields.email = "nope".into();
        fields.message.clear();
        assert_eq!(
            validate(&fields),
            Err(ValidationError::MissingField(FormField::Message))
        );
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate(&filled()), Ok(()));
    }
}
