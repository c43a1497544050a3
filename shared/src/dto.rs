use serde::{Deserialize, Serialize};

use crate::validation::Field;

/// A contact / demo request as typed into the booking modal.
///
/// `company` and `message` are optional in the form, they travel as empty
/// strings rather than being omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
}

impl EnquiryRequest {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Body returned by the backend on a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub message: String,
}
