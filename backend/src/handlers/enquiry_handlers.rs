use crate::AppState;
use crate::utils::mailer::compose_enquiry_email;
use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde_json::json;
use shared::{validate, EnquiryRequest, SendEmailResponse};

pub async fn send_email(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EnquiryRequest>,
) -> Result<Json<SendEmailResponse>, (StatusCode, Json<serde_json::Value>)> {
    let errors = validate(&req);
    if let Some(message) = errors.first() {
        tracing::debug!("Rejected enquiry: {}", message);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": message}))
        ));
    }

    let email = compose_enquiry_email(&req);
    match state.mailer.send(email).await {
        Ok(()) => {
            tracing::info!("Forwarded enquiry from {}", req.email);
            Ok(Json(SendEmailResponse {
                message: "Email sent".to_string(),
            }))
        }
        Err(e) => {
            tracing::error!("Failed to send enquiry email for {}: {}", req.email, e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "Failed to send email"}))
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::mailer::{EnquiryEmail, MailError, Mailer};
    use crate::{api_router, AppState};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use lettre::Address;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<EnquiryEmail>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: EnquiryEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _email: EnquiryEmail) -> Result<(), MailError> {
            Err(MailError::Address("relay down".parse::<Address>().unwrap_err()))
        }
    }

    async fn post(mailer: Arc<dyn Mailer>, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let app = api_router(Arc::new(AppState { mailer }));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(shared::SEND_EMAIL_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn valid_enquiry_sends_one_email() {
        let mailer = Arc::new(RecordingMailer::default());
        let (status, body) = post(
            mailer.clone(),
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "company": "",
                "message": ""
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"message": "Email sent"}));

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to_email, "ada@example.com");
        assert_eq!(sent[0].subject, "New demo request from Ada");
    }

    #[tokio::test]
    async fn multiline_name_gets_a_normal_reply() {
        let mailer = Arc::new(RecordingMailer::default());
        let (status, body) = post(
            mailer.clone(),
            serde_json::json!({"name": "Ada\r\nLovelace", "email": "ada@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"message": "Email sent"}));
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].reply_to_name, "Ada  Lovelace");
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_sending() {
        let mailer = Arc::new(RecordingMailer::default());
        let (status, body) = post(
            mailer.clone(),
            serde_json::json!({"name": "  ", "email": "ada@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "Name is required"}));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let mailer = Arc::new(RecordingMailer::default());
        let (status, body) = post(
            mailer.clone(),
            serde_json::json!({"name": "Ada", "email": "ada@example"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email");
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_payload_is_rejected() {
        let mailer = Arc::new(RecordingMailer::default());
        let (status, _) = post(mailer.clone(), serde_json::json!({"email": "ada@example.com"})).await;

        assert!(status.is_client_error());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn mail_failure_reports_error_body() {
        let (status, body) = post(
            Arc::new(FailingMailer),
            serde_json::json!({"name": "Ada", "email": "ada@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, serde_json::json!({"error": "Failed to send email"}));
    }

    #[tokio::test]
    async fn health_check_responds() {
        let app = api_router(Arc::new(AppState {
            mailer: Arc::new(RecordingMailer::default()),
        }));
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }
}
