use crate::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use neko_core::{AssistantReply, ChatMessage, DispatchError, ErrorReply};

/// Liveness probe
pub async fn index() -> &'static str {
    "neko-rs backend for OpenAI + TheCatAPI is up and running!"
}

/// Main chat endpoint: forwards the message to the dispatcher and returns
/// either the model's text or the tool reply with image URLs.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatMessage>,
) -> Result<Json<AssistantReply>, ApiError> {
    let reply = state.dispatcher.handle(&body.message).await?;
    Ok(Json(reply))
}

/// Dispatcher failure carried out to the HTTP surface
pub struct ApiError(DispatchError);

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DispatchError::Provider(_) => StatusCode::BAD_REQUEST,
            DispatchError::Tool(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorReply {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
