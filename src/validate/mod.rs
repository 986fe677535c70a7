//! Schema checks for untyped JSON request bodies.

use crate::models::track::{contact_form::ContactForm, track_request::TrackRequest};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    Missing(&'static str),
    #[error("field `{0}` must be a string")]
    NotAString(&'static str),
    #[error("field `{0}` must not be empty")]
    Empty(&'static str),
    #[error("field `{field}` must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("field `{field}` must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("field `email` is not a valid email address")]
    InvalidEmail,
}

/// Accept `{subject, source_page}` with both non-empty strings. Any other
/// fields are dropped.
pub fn validate_track_request(value: &Value) -> Result<TrackRequest, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;
    Ok(TrackRequest {
        subject: required_str(obj, "subject")?,
        source_page: required_str(obj, "source_page")?,
    })
}

pub fn validate_contact_form(value: &Value) -> Result<ContactForm, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let name = required_str(obj, "name")?;
    check_len("name", &name, 2, 50)?;

    let email = required_str(obj, "email")?;
    if !looks_like_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }

    let message = required_str(obj, "message")?;
    check_len("message", &message, 10, 1000)?;

    let source_page = match obj.get("source_page") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(ValidationError::NotAString("source_page")),
    };

    Ok(ContactForm {
        name,
        email,
        message,
        source_page,
    })
}

fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match obj.get(field) {
        None => Err(ValidationError::Missing(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::Empty(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::NotAString(field)),
    }
}

fn check_len(field: &'static str, s: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let n = s.chars().count();
    if n < min {
        return Err(ValidationError::TooShort { field, min });
    }
    if n > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace and a dot inside the domain.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_request_and_drops_extras() {
        let v = json!({ "subject": "Консультация", "source_page": "home", "utm": "x" });
        let req = validate_track_request(&v).unwrap();
        assert_eq!(
            req,
            TrackRequest {
                subject: "Консультация".into(),
                source_page: "home".into(),
            }
        );
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            validate_track_request(&json!({})),
            Err(ValidationError::Missing("subject"))
        );
        assert_eq!(
            validate_track_request(&json!({ "subject": "a" })),
            Err(ValidationError::Missing("source_page"))
        );
        assert_eq!(
            validate_track_request(&json!({ "source_page": "home" })),
            Err(ValidationError::Missing("subject"))
        );
    }

    #[test]
    fn rejects_empty_strings() {
        assert_eq!(
            validate_track_request(&json!({ "subject": "", "source_page": "home" })),
            Err(ValidationError::Empty("subject"))
        );
        assert_eq!(
            validate_track_request(&json!({ "subject": "a", "source_page": "" })),
            Err(ValidationError::Empty("source_page"))
        );
    }

    #[test]
    fn rejects_wrong_types() {
        assert_eq!(
            validate_track_request(&json!({ "subject": 5, "source_page": "home" })),
            Err(ValidationError::NotAString("subject"))
        );
        assert_eq!(
            validate_track_request(&json!({ "subject": "a", "source_page": null })),
            Err(ValidationError::NotAString("source_page"))
        );
        assert_eq!(
            validate_track_request(&json!(["subject", "source_page"])),
            Err(ValidationError::NotAnObject)
        );
        assert_eq!(
            validate_track_request(&json!("subject")),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn whitespace_only_subject_is_accepted() {
        // Only emptiness is checked.
        let req = validate_track_request(&json!({ "subject": " ", "source_page": "home" })).unwrap();
        assert_eq!(req.subject, " ");
    }

    fn contact(name: &str, email: &str, message: &str) -> Value {
        json!({ "name": name, "email": email, "message": message })
    }

    #[test]
    fn contact_form_happy_path() {
        let v = json!({
            "name": "Анна",
            "email": "anna@example.com",
            "message": "Хочу обсудить финансовую модель",
            "source_page": "contact",
        });
        let form = validate_contact_form(&v).unwrap();
        assert_eq!(form.name, "Анна");
        assert_eq!(form.source_page.as_deref(), Some("contact"));
    }

    #[test]
    fn contact_form_counts_characters_not_bytes() {
        // Two Cyrillic characters are four bytes but still a valid name.
        assert!(validate_contact_form(&contact("Ян", "a@b.co", "0123456789")).is_ok());
        assert_eq!(
            validate_contact_form(&contact("Я", "a@b.co", "0123456789")),
            Err(ValidationError::TooShort { field: "name", min: 2 })
        );
    }

    #[test]
    fn contact_form_length_limits() {
        let long_name = "x".repeat(51);
        assert_eq!(
            validate_contact_form(&contact(&long_name, "a@b.co", "0123456789")),
            Err(ValidationError::TooLong { field: "name", max: 50 })
        );
        assert_eq!(
            validate_contact_form(&contact("Bob", "a@b.co", "short")),
            Err(ValidationError::TooShort { field: "message", min: 10 })
        );
        let long_message = "y".repeat(1001);
        assert_eq!(
            validate_contact_form(&contact("Bob", "a@b.co", &long_message)),
            Err(ValidationError::TooLong { field: "message", max: 1000 })
        );
    }

    #[test]
    fn contact_form_rejects_bad_email() {
        for bad in ["plain", "@example.com", "a@", "a@example", "a b@example.com", "a@@b.co", "a@.co"] {
            assert_eq!(
                validate_contact_form(&contact("Bob", bad, "0123456789")),
                Err(ValidationError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn contact_form_source_page_must_be_string() {
        let mut v = contact("Bob", "bob@example.com", "0123456789");
        v["source_page"] = json!(7);
        assert_eq!(
            validate_contact_form(&v),
            Err(ValidationError::NotAString("source_page"))
        );
    }
}
