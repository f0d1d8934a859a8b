use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// Moroccan numbers: +212 or 0, then a 5/6/7 prefix and eight digits
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+212|0)[5-7]\d{8}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name.")]
    Name,
    #[error("Please enter a valid Moroccan phone number (e.g., 0612345678 or +212612345678).")]
    Phone,
    #[error("Please enter a valid email address.")]
    Email,
    #[error("Please select a service type.")]
    Service,
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldFeedback {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl FieldFeedback {
    fn from_valid(valid: bool) -> Self {
        if valid {
            FieldFeedback::Valid
        } else {
            FieldFeedback::Invalid
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            FieldFeedback::Neutral => None,
            FieldFeedback::Valid => Some("field-valid"),
            FieldFeedback::Invalid => Some("field-invalid"),
        }
    }
}

pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

// Length in UTF-16 code units, the way the browser counts input length.
pub fn is_valid_name(name: &str) -> bool {
    name.trim().encode_utf16().count() >= MIN_NAME_LEN
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(phone))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl ContactFields {
    /// Checks every field and reports all failures at once, in form order.
    pub fn validate(&self) -> Result<ContactSubmission, Vec<ValidationError>> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let mut errors = Vec::new();
        if !is_valid_name(name) {
            errors.push(ValidationError::Name);
        }
        if !is_valid_phone(phone) {
            errors.push(ValidationError::Phone);
        }
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(ValidationError::Email);
        }
        if self.service.is_empty() {
            errors.push(ValidationError::Service);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactSubmission {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            service: self.service.clone(),
            message: message.to_string(),
        })
    }
}

/// One line per error, the way the alert shows them.
pub fn error_report(errors: &[ValidationError]) -> String {
    errors.iter().map(|e| format!("{}\n", e)).collect()
}

pub fn name_feedback(value: &str) -> FieldFeedback {
    FieldFeedback::from_valid(is_valid_name(value))
}

pub fn phone_feedback(value: &str) -> FieldFeedback {
    FieldFeedback::from_valid(is_valid_phone(value))
}

// An empty email is optional, so it goes back to neutral instead of red.
pub fn email_feedback(value: &str) -> FieldFeedback {
    if value.trim().is_empty() {
        return FieldFeedback::Neutral;
    }
    FieldFeedback::from_valid(is_valid_email(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "  Amina  ".into(),
            phone: "06 12-34 56 78".into(),
            email: "".into(),
            service: "termites".into(),
            message: " Kitchen ants ".into(),
        }
    }

    #[test]
    fn accepts_moroccan_numbers() {
        for phone in ["0612345678", "+212612345678", "0512345678", "07 12 34 56 78", "06-12-34-56-78"] {
            assert!(is_valid_phone(phone), "{}", phone);
        }
    }

    #[test]
    fn rejects_other_numbers() {
        for phone in ["", "0812345678", "061234567", "06123456789", "+33612345678", "212612345678", "06123a5678"] {
            assert!(!is_valid_phone(phone), "{}", phone);
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("contact@home-shield.ma"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn name_needs_two_chars_after_trim() {
        assert!(!is_valid_name(" a "));
        assert!(is_valid_name("Al"));
        assert!(is_valid_name("Éa"));
    }

    #[test]
    fn name_length_counts_utf16_units() {
        // one astral character is two code units
        assert!(is_valid_name("😀"));
        assert!(is_valid_name(" 😀 "));
        assert!(!is_valid_name("é"));
    }

    #[test]
    fn valid_form_is_trimmed() {
        let submission = filled().validate().expect("valid form");
        assert_eq!(submission.name, "Amina");
        assert_eq!(submission.phone, "06 12-34 56 78");
        assert_eq!(submission.message, "Kitchen ants");
        assert_eq!(submission.email, "");
    }

    #[test]
    fn reports_every_failure_in_order() {
        let fields = ContactFields {
            name: "A".into(),
            phone: "123".into(),
            email: "nope".into(),
            service: "".into(),
            message: "".into(),
        };
        let errors = fields.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Name,
                ValidationError::Phone,
                ValidationError::Email,
                ValidationError::Service,
            ]
        );
        let report = error_report(&errors);
        assert!(report.starts_with("Please enter a valid name.\n"));
        assert!(report.ends_with("Please select a service type.\n"));
        assert_eq!(report.lines().count(), 4);
    }

    #[test]
    fn optional_email_only_checked_when_present() {
        let mut fields = filled();
        fields.email = "   ".into();
        assert!(fields.validate().is_ok());
        fields.email = "client@example.com".into();
        assert!(fields.validate().is_ok());
        fields.email = "client@example".into();
        assert_eq!(fields.validate().unwrap_err(), vec![ValidationError::Email]);
    }

    #[test]
    fn blur_feedback() {
        assert_eq!(name_feedback("x"), FieldFeedback::Invalid);
        assert_eq!(name_feedback("Omar"), FieldFeedback::Valid);
        assert_eq!(phone_feedback("0612 345 678"), FieldFeedback::Valid);
        assert_eq!(phone_feedback("12"), FieldFeedback::Invalid);
        assert_eq!(email_feedback("  "), FieldFeedback::Neutral);
        assert_eq!(email_feedback("x@y.z"), FieldFeedback::Valid);
        assert_eq!(email_feedback("x@y"), FieldFeedback::Invalid);
    }
}
