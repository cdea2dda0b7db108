use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::intake::fields::{extract_candidate_fields, CandidateFields};
use crate::intake::orchestrator::{TurnOptions, TurnOutcome};
use crate::models::conversation::History;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub history: History,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: History,
    #[serde(default = "default_detect_language")]
    pub detect_language: bool,
    /// ISO 639-1 code of the message, when the client already knows it.
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: String,
}

fn default_detect_language() -> bool {
    true
}

/// POST /api/v1/chat/start
pub async fn handle_start(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Json<TurnOutcome> {
    Json(state.orchestrator.start(req.history).await)
}

/// POST /api/v1/chat/message
pub async fn handle_message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<TurnOutcome>, AppError> {
    check_length(&req.message, state.config.max_message_chars)?;
    let options = TurnOptions {
        detect_language: req.detect_language,
        language: req.language,
    };
    let outcome = state
        .orchestrator
        .process(&req.message, req.history, &options)
        .await;
    Ok(Json(outcome))
}

/// POST /api/v1/candidate/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<CandidateFields>, AppError> {
    check_length(&req.text, state.config.max_message_chars)?;
    Ok(Json(extract_candidate_fields(&req.text)))
}

fn check_length(text: &str, max_chars: usize) -> Result<(), AppError> {
    let len = text.chars().count();
    if len > max_chars {
        return Err(AppError::Validation(format!(
            "Message is {len} characters; the limit is {max_chars}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::capabilities::sentiment::HeuristicSentimentScorer;
    use crate::capabilities::translation::NoopTranslator;
    use crate::config::Config;
    use crate::intake::model_caller::ModelCaller;
    use crate::intake::orchestrator::Orchestrator;
    use crate::intake::prompts::{CLOSING_REPLY, MODEL_UNAVAILABLE_REPLY};
    use crate::llm_client::testing::ScriptedModel;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn app(model: ScriptedModel) -> Router {
        let config = Config {
            max_message_chars: 64,
            ..Config::default()
        };
        let orchestrator = Orchestrator::new(
            ModelCaller::new(Arc::new(model), config.llm_temperature),
            Arc::new(NoopTranslator),
            Arc::new(HeuristicSentimentScorer),
        );
        build_router(AppState {
            orchestrator: Arc::new(orchestrator),
            config,
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(ScriptedModel::replying("x"))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_start_returns_greeting_history() {
        let (status, body) = post_json(
            app(ScriptedModel::replying("Welcome to TalentScout!")),
            "/api/v1/chat/start",
            json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "Welcome to TalentScout!");
        assert_eq!(body["history"][0]["user"], "__system__");
        assert_eq!(body["ended"], false);
    }

    #[tokio::test]
    async fn test_message_round_trip_carries_history() {
        let (status, body) = post_json(
            app(ScriptedModel::replying("Which role are you after?")),
            "/api/v1/chat/message",
            json!({
                "message": "Name: Jane Doe",
                "history": [{"user": "__system__", "assistant": "Hi, your name?"}]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["history"].as_array().unwrap().len(), 2);
        assert_eq!(body["candidate"]["full_name"], "Jane Doe");
        assert!(body["reply"]
            .as_str()
            .unwrap()
            .starts_with("Which role are you after?"));
        assert!(body.get("tech_stack").is_none());
    }

    #[tokio::test]
    async fn test_tech_stack_message_reports_stack() {
        let (_, body) = post_json(
            app(ScriptedModel::replying("## Go\n1. ...")),
            "/api/v1/chat/message",
            json!({"message": "Tech stack: Go, Rust"}),
        )
        .await;
        assert_eq!(body["tech_stack"], json!(["Go", "Rust"]));
        assert_eq!(body["reply"], "## Go\n1. ...");
    }

    #[tokio::test]
    async fn test_exit_message_ends_without_recording() {
        let (_, body) = post_json(
            app(ScriptedModel::failing()),
            "/api/v1/chat/message",
            json!({"message": "quit", "history": []}),
        )
        .await;
        assert_eq!(body["ended"], true);
        assert_eq!(body["reply"], CLOSING_REPLY);
        assert_eq!(body["history"], json!([]));
    }

    #[tokio::test]
    async fn test_model_outage_is_masked() {
        let (status, body) = post_json(
            app(ScriptedModel::failing()),
            "/api/v1/chat/message",
            json!({"message": "Tech stack: Python"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], MODEL_UNAVAILABLE_REPLY);
    }

    #[tokio::test]
    async fn test_oversize_message_rejected() {
        let (status, body) = post_json(
            app(ScriptedModel::replying("x")),
            "/api/v1/chat/message",
            json!({"message": "a".repeat(65)}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_extract_without_text_is_empty_record() {
        let (status, body) = post_json(
            app(ScriptedModel::failing()),
            "/api/v1/candidate/extract",
            json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn test_extract_endpoint() {
        let (status, body) = post_json(
            app(ScriptedModel::failing()),
            "/api/v1/candidate/extract",
            json!({"text": "email: jane@x.com, phone: +1 555-123-4567"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"email": "jane@x.com", "phone": "+1 555-123-4567"})
        );
    }
}
