use axum::{response::Json, routing::get, Router};
use serde::Serialize;

pub const GREETING: &str = "Hi, Amazon Web Service";

/// Body returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub response: String,
}

impl Payload {
    #[must_use]
    pub fn greeting() -> Self {
        Self {
            response: GREETING.to_string(),
        }
    }
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}

/// Handles `GET /`, logging the payload before it is returned.
async fn root() -> Json<Payload> {
    let payload = Payload::greeting();
    tracing::info!(?payload);
    Json(payload)
}
