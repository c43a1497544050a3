use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use shared::EnquiryRequest;
use thiserror::Error;

use crate::config::app_config::Config;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Mail forwarded to the sales inbox for one enquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryEmail {
    pub reply_to_name: String,
    pub reply_to_email: String,
    pub subject: String,
    pub body: String,
}

pub fn compose_enquiry_email(request: &EnquiryRequest) -> EnquiryEmail {
    let name = request.name.trim();
    let company = request.company.trim();
    let message = request.message.trim();

    let subject = if company.is_empty() {
        format!("New demo request from {}", name)
    } else {
        format!("New demo request from {} ({})", name, company)
    };

    let body = format!(
        "Name: {}\nEmail: {}\nCompany: {}\n\nMessage:\n{}\n",
        name,
        request.email,
        if company.is_empty() { "-" } else { company },
        if message.is_empty() { "(no message)" } else { message },
    );

    EnquiryEmail {
        reply_to_name: header_safe(name),
        reply_to_email: request.email.clone(),
        subject,
        body,
    }
}

/// Control characters cannot appear in a header display name.
fn header_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: EnquiryEmail) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp.host)?
            .credentials(Credentials::new(
                config.smtp.username.clone(),
                config.smtp.password.clone(),
            ));
        if let Some(port) = config.smtp.port {
            builder = builder.port(port);
        }

        Ok(Self {
            transport: builder.build(),
            from: config.contact_from.parse()?,
            to: config.contact_to.parse()?,
        })
    }

    fn build_message(&self, email: EnquiryEmail) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN);

        // lettre is stricter than the form's pattern; fall back to no Reply-To
        match email.reply_to_email.parse::<Address>() {
            Ok(address) => {
                builder = builder.reply_to(Mailbox::new(Some(email.reply_to_name), address));
            }
            Err(e) => {
                tracing::warn!("Skipping Reply-To for {}: {}", email.reply_to_email, e);
            }
        }

        Ok(builder.body(email.body)?)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: EnquiryEmail) -> Result<(), MailError> {
        let message = self.build_message(email)?;
        self.transport.send(message).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enquiry(company: &str, message: &str) -> EnquiryRequest {
        EnquiryRequest {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            company: company.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn subject_mentions_company_when_given() {
        let email = compose_enquiry_email(&enquiry("Analytical Engines", ""));
        assert_eq!(email.subject, "New demo request from Ada (Analytical Engines)");

        let email = compose_enquiry_email(&enquiry("  ", ""));
        assert_eq!(email.subject, "New demo request from Ada");
    }

    #[test]
    fn body_lists_every_field() {
        let email = compose_enquiry_email(&enquiry("Analytical Engines", "Show me churn by region"));
        assert_eq!(
            email.body,
            "Name: Ada\nEmail: ada@example.com\nCompany: Analytical Engines\n\nMessage:\nShow me churn by region\n"
        );
        assert_eq!(email.reply_to_name, "Ada");
        assert_eq!(email.reply_to_email, "ada@example.com");
    }

    #[test]
    fn empty_optional_fields_get_placeholders() {
        let email = compose_enquiry_email(&enquiry("", ""));
        assert!(email.body.contains("Company: -\n"));
        assert!(email.body.ends_with("Message:\n(no message)\n"));
    }

    #[test]
    fn reply_to_name_has_no_line_breaks() {
        let mut request = enquiry("", "");
        request.name = "Ada\r\nLovelace\tBcc: x@y.z".to_string();
        let email = compose_enquiry_email(&request);
        assert_eq!(email.reply_to_name, "Ada  Lovelace Bcc: x@y.z");
        assert!(!email.reply_to_name.chars().any(char::is_control));
    }

    fn smtp_config() -> Config {
        Config::from_lookup(|key| {
            match key {
                "SMTP_HOST" => Some("smtp.example.com"),
                "SMTP_USERNAME" => Some("mailer"),
                "SMTP_PASSWORD" => Some("secret"),
                "CONTACT_TO" => Some("sales@omnituple.com"),
                "CONTACT_FROM" => Some("Omnituple <noreply@omnituple.com>"),
                _ => None,
            }
            .map(str::to_string)
        })
        .unwrap()
    }

    #[tokio::test]
    async fn message_carries_reply_to() {
        let mailer = SmtpMailer::new(&smtp_config()).unwrap();
        let message = mailer
            .build_message(compose_enquiry_email(&enquiry("", "")))
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        let header = |name: &str| {
            raw.lines()
                .find(|line| line.starts_with(name))
                .map(str::to_string)
                .unwrap_or_default()
        };
        assert!(header("Reply-To:").contains("Ada"));
        assert!(header("Reply-To:").contains("<ada@example.com>"));
        assert!(header("To:").contains("sales@omnituple.com"));
        assert_eq!(header("Subject:"), "Subject: New demo request from Ada");
    }

    #[tokio::test]
    async fn multiline_name_still_builds_a_message() {
        let mailer = SmtpMailer::new(&smtp_config()).unwrap();
        let mut request = enquiry("", "");
        request.name = "Ada\r\nLovelace".to_string();
        let message = mailer.build_message(compose_enquiry_email(&request)).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        let reply_to = raw
            .lines()
            .find(|line| line.starts_with("Reply-To:"))
            .unwrap_or_default();
        assert!(reply_to.contains("<ada@example.com>"));
    }
}
