//! Landing page handler.

use axum::Json;
use serde::Serialize;

/// Root banner payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET / - Service banner
pub async fn landing_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Köppen-Geiger climate service is running.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_landing_message() {
        let response = landing_handler().await;
        assert!(response.message.contains("running"));
    }
}
