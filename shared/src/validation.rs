use once_cell::sync::Lazy;
use regex::Regex;

use crate::dto::EnquiryRequest;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    /// Form control name, matching the JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
        }
    }
}

/// Validation messages keyed by field. Only `Name` and `Email` ever appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(Field, &'static str)>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    /// First error in form order, used where a single message is needed.
    pub fn first(&self) -> Option<&'static str> {
        self.errors.first().map(|(_, message)| *message)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().copied()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.retain(|(f, _)| *f != field);
        self.errors.push((field, message));
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Runs the enquiry rules: a non-blank name and a well-formed email.
pub fn validate(request: &EnquiryRequest) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if request.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if request.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&request.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str) -> EnquiryRequest {
        EnquiryRequest {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_request_has_no_errors() {
        assert!(validate(&request("Ada", "ada@example.com")).is_empty());
    }

    #[test]
    fn blank_names_are_rejected() {
        for name in ["", " ", "\t", "  \n "] {
            let errors = validate(&request(name, "ada@example.com"));
            assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED), "name {:?}", name);
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn empty_email_is_required_not_invalid() {
        let errors = validate(&request("Ada", "   "));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn malformed_emails_are_invalid() {
        for email in [
            "ada",
            "ada@",
            "@example.com",
            "ada@example",
            "ada@@example.com",
            "ada lovelace@example.com",
            "ada@example.com ",
            "ada@exa mple.com",
        ] {
            let errors = validate(&request("Ada", email));
            assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID), "email {:?}", email);
        }
    }

    #[test]
    fn accepts_simple_addresses() {
        for email in ["ada@example.com", "a.b+c@sub.example.co.uk", "x@y.z"] {
            assert!(is_valid_email(email), "email {:?}", email);
        }
    }

    #[test]
    fn company_and_message_are_never_checked() {
        let mut req = request("", "");
        req.company = "   ".to_string();
        req.message = "   ".to_string();
        let errors = validate(&req);
        assert_eq!(errors.get(Field::Company), None);
        assert_eq!(errors.get(Field::Message), None);
        assert_eq!(errors.first(), Some(NAME_REQUIRED));
        assert_eq!(errors.iter().count(), 2);
    }
}
