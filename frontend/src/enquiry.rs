use std::fmt;

use gloo_net::http::Request;
use log::{info, warn};
use shared::{validate, EnquiryRequest, ErrorResponse, Field, FieldErrors};

use crate::config;

pub const SUCCESS_MESSAGE: &str = "Thanks! We'll be in touch soon.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Outcome of the last submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Success(String),
    Error(String),
}

/// Why a send did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// The backend answered with a non-ok status; `body` is the raw response text.
    Rejected { status: u16, body: String },
    /// No response at all.
    Transport(String),
}

impl fmt::Display for SubmitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitFailure::Rejected { status, .. } => write!(f, "server answered {}", status),
            SubmitFailure::Transport(reason) => write!(f, "request failed: {}", reason),
        }
    }
}

impl SubmitFailure {
    /// Text shown in the banner: the server's `error` field if it sent one.
    pub fn user_message(&self) -> String {
        match self {
            SubmitFailure::Rejected { body, .. } => serde_json::from_str::<ErrorResponse>(body)
                .map(|resp| resp.error)
                .unwrap_or_else(|_| GENERIC_FAILURE_MESSAGE.to_string()),
            SubmitFailure::Transport(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Draft, errors and submission lifecycle of the booking form.
///
/// The component owns one of these and feeds it messages; sending happens
/// outside, between `begin_submit` and `finish`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryForm {
    draft: EnquiryRequest,
    errors: FieldErrors,
    status: SubmitStatus,
    submitting: bool,
}

impl Default for EnquiryForm {
    fn default() -> Self {
        Self {
            draft: EnquiryRequest::default(),
            errors: FieldErrors::default(),
            status: SubmitStatus::Idle,
            submitting: false,
        }
    }
}

impl EnquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.field(field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set_field(field, value);
    }

    /// Validates the draft and, when it passes, marks the form as sending and
    /// returns the payload to post. Returns `None` while a send is in flight
    /// or when there are field errors.
    pub fn begin_submit(&mut self) -> Option<EnquiryRequest> {
        if self.submitting {
            return None;
        }

        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;
        Some(self.draft.clone())
    }

    pub fn finish(&mut self, outcome: Result<(), SubmitFailure>) {
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success(SUCCESS_MESSAGE.to_string());
                self.draft.clear();
            }
            Err(failure) => {
                warn!("Enquiry not sent: {}", failure);
                self.status = SubmitStatus::Error(failure.user_message());
            }
        }
        self.submitting = false;
    }
}

/// Posts the enquiry to the backend's email function.
pub async fn send_enquiry(request: EnquiryRequest) -> Result<(), SubmitFailure> {
    let url = config::enquiry_url();
    let req = Request::post(&url)
        .json(&request)
        .map_err(|e| SubmitFailure::Transport(e.to_string()))?;

    match req.send().await {
        Ok(response) => {
            if response.ok() {
                info!("Enquiry sent");
                Ok(())
            } else {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(SubmitFailure::Rejected { status, body })
            }
        }
        Err(e) => Err(SubmitFailure::Transport(e.to_string())),
    }
}
