use crate::form::{FieldRule, FormSpec};
use crate::FieldMapping;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Reason a form cannot be submitted, detected before any network call.
/// Displays as the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{message}")]
    MissingField { field: String, message: String },
    #[error("{message}")]
    MalformedField { field: String, message: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field, .. }
            | ValidationError::MalformedField { field, .. } => field,
        }
    }
}

/// Check collected values against the form's rules and build the request
/// mapping. `values[i]` belongs to `spec.fields[i]`; a missing slot counts as
/// an absent value. Fields are checked in declaration order and the first
/// failure wins.
pub fn validate(
    spec: &FormSpec,
    values: &[Option<String>],
) -> Result<FieldMapping, ValidationError> {
    let mut mapping = FieldMapping::new();

    for (index, field) in spec.fields.iter().enumerate() {
        let value = match values.get(index).and_then(|v| v.as_deref()) {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(ValidationError::MissingField {
                    field: field.key.to_string(),
                    message: spec.missing_message.to_string(),
                })
            }
        };

        if field.rule == FieldRule::Email && !value.contains('@') {
            return Err(ValidationError::MalformedField {
                field: field.key.to_string(),
                message: INVALID_EMAIL_MESSAGE.to_string(),
            });
        }

        mapping.insert(field.key, value);
    }

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms;

    fn some(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn test_all_fields_present_builds_mapping() {
        let spec = forms::contact();
        let mapping = validate(&spec, &some(&["Ann", "ann@example.com", "Hello"])).unwrap();

        assert_eq!(mapping.get("name"), Some("Ann"));
        assert_eq!(mapping.get("email"), Some("ann@example.com"));
        assert_eq!(mapping.get("message"), Some("Hello"));
    }

    #[test]
    fn test_empty_or_absent_field_fails_for_every_form() {
        for spec in [forms::sign_in(), forms::contact(), forms::newsletter()] {
            let full: Vec<Option<String>> = spec
                .fields
                .iter()
                .map(|_| Some("someone@example.com".to_string()))
                .collect();
            assert!(validate(&spec, &full).is_ok(), "{} should accept full input", spec.name);

            for index in 0..spec.fields.len() {
                let mut empty = full.clone();
                empty[index] = Some(String::new());
                let err = validate(&spec, &empty).unwrap_err();
                assert_eq!(err.field(), spec.fields[index].key);
                assert_eq!(err.to_string(), spec.missing_message);

                let mut absent = full.clone();
                absent[index] = None;
                assert!(matches!(
                    validate(&spec, &absent),
                    Err(ValidationError::MissingField { .. })
                ));
            }
        }
    }

    #[test]
    fn test_short_value_list_counts_as_absent() {
        let spec = forms::contact();
        let err = validate(&spec, &some(&["Ann"])).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn test_newsletter_email_requires_at_sign() {
        let spec = forms::newsletter();
        let err = validate(&spec, &some(&["not-an-email"])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MalformedField {
                field: "email".to_string(),
                message: INVALID_EMAIL_MESSAGE.to_string(),
            }
        );
        assert!(validate(&spec, &some(&["reader@example.com"])).is_ok());
    }

    #[test]
    fn test_whitespace_is_a_value() {
        let spec = forms::sign_in();
        assert!(validate(&spec, &some(&[" ", " "])).is_ok());
    }
}
