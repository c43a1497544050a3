//! Types shared by the Omnituple frontend and backend.
//!
//! - [`dto`]: JSON bodies exchanged on `POST /api/send-email`
//! - [`validation`]: the field rules both sides apply to an enquiry

pub mod dto;
pub mod validation;

pub use dto::{EnquiryRequest, ErrorResponse, SendEmailResponse};
pub use validation::{is_valid_email, validate, Field, FieldErrors};

/// Path of the enquiry endpoint, relative to the backend origin.
pub const SEND_EMAIL_PATH: &str = "/api/send-email";
