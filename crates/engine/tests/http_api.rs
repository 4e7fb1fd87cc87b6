//! Router tests driving the HTTP API end to end with a scripted LLM.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use toothtutor_engine::api::http::routes;
use toothtutor_engine::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};
use toothtutor_engine::App;

/// LLM double answering every request with the same payload
struct ScriptedLlm {
    reply: Result<String, LlmError>,
    calls: AtomicUsize,
}

impl ScriptedLlm {
    fn answering(content: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(content.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err(LlmError::RequestFailed("503 Service Unavailable".to_string())),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl LlmPort for ScriptedLlm {
    async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map(LlmResponse::new)
    }
}

const RELIEF: &str = r#"{"painLevel": 2, "sensationDescription": "Cool and calm.", "scientificEffect": "Osmotic cleansing.", "verdict": "Highly Recommended", "mood": "relief"}"#;

fn router(llm: Arc<ScriptedLlm>) -> (Arc<App>, Router) {
    let app = Arc::new(App::new(llm, 0.4));
    (app.clone(), routes().with_state(app))
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Poll the session until the pending reaction has landed.
async fn settled_session(router: &Router) -> Value {
    for _ in 0..100 {
        let (_, session) = send(router, "GET", "/api/session", None).await;
        if session["loading"] == json!(false) {
            return session;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("reaction never landed");
}

#[tokio::test]
async fn test_health() {
    let (_, router) = router(ScriptedLlm::answering(RELIEF));
    let response = router
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_known_remedy_returns_optimistic_then_reconciled_state() {
    let (_, router) = router(ScriptedLlm::answering(RELIEF));

    let (status, snapshot) = send(
        &router,
        "POST",
        "/api/remedy",
        Some(json!({ "remedy": "Warm Salt Water" })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(snapshot["loading"], true);
    assert_eq!(snapshot["selectedRemedy"], "Warm Salt Water");
    assert_eq!(snapshot["visualState"]["mood"], "relief");
    assert_eq!(snapshot["visualState"]["animation"], "float");
    assert_eq!(snapshot["visualState"]["visualEffect"], "sparkles");

    let session = settled_session(&router).await;
    assert_eq!(session["visualState"]["painLevel"], 2);
    assert_eq!(session["visualState"]["animation"], "float");
    assert_eq!(session["reaction"]["verdict"], "Highly Recommended");
    assert_eq!(session["reaction"]["verdictTone"], "positive");
    assert_eq!(session["reaction"]["painMeterPercent"], 20);
}

#[tokio::test]
async fn test_custom_remedy_motion_follows_mood() {
    let (_, router) = router(ScriptedLlm::answering(RELIEF));

    let (status, snapshot) = send(
        &router,
        "POST",
        "/api/remedy/custom",
        Some(json!({ "text": "  Ice Cream " })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(snapshot["selectedRemedy"], "Ice Cream");
    assert_eq!(snapshot["visualState"]["mood"], "shock");
    assert_eq!(snapshot["visualState"]["animation"], "shiver");

    let session = settled_session(&router).await;
    assert_eq!(session["visualState"]["animation"], "float");
    assert_eq!(session["visualState"]["visualEffect"], "sparkles");
    assert_eq!(session["character"]["eyes"], "closed");
}

#[tokio::test]
async fn test_blank_custom_remedy_is_rejected() {
    let llm = ScriptedLlm::answering(RELIEF);
    let (_, router) = router(llm.clone());

    let (status, _) = send(
        &router,
        "POST",
        "/api/remedy/custom",
        Some(json!({ "text": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_backend_failure_shows_fallback() {
    let (_, router) = router(ScriptedLlm::failing());

    send(&router, "POST", "/api/remedy", Some(json!({ "remedy": "Vinegar" }))).await;
    let session = settled_session(&router).await;

    assert_eq!(session["reaction"]["painLevel"], 5);
    assert_eq!(session["reaction"]["mood"], "neutral");
    assert_eq!(
        session["reaction"]["sensationDescription"],
        "The tooth is unsure how to react to Vinegar."
    );
}

#[tokio::test]
async fn test_condition_switch_resets_without_backend_call() {
    let llm = ScriptedLlm::answering(RELIEF);
    let (_, router) = router(llm.clone());

    let (status, snapshot) = send(
        &router,
        "POST",
        "/api/condition",
        Some(json!({ "condition": "CAVITY" })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(snapshot["condition"]["exposedTissue"], "Decayed Dentin");

    let session = settled_session(&router).await;
    assert_eq!(session["selectedRemedy"], "None");
    assert_eq!(session["reaction"]["painLevel"], 3);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);

    let (status, _) = send(
        &router,
        "POST",
        "/api/condition",
        Some(json!({ "condition": "CAVITY" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_dropdown_and_remedy_search() {
    let (app, router) = router(ScriptedLlm::answering(RELIEF));

    let (status, snapshot) = send(&router, "POST", "/api/dropdown/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["dropdownOpen"], true);

    let (_, snapshot) = send(&router, "POST", "/api/dropdown/close", None).await;
    assert_eq!(snapshot["dropdownOpen"], false);
    assert!(!app.session.snapshot().await.is_dropdown_open());

    let (status, options) = send(&router, "GET", "/api/remedies?query=pero", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(options, json!([{ "name": "Hydrogen Peroxide" }]));

    let (_, options) = send(&router, "GET", "/api/remedies", None).await;
    assert_eq!(options.as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (_, router) = router(ScriptedLlm::answering(RELIEF));
    let (status, _) = send(&router, "GET", "/api/teeth", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
