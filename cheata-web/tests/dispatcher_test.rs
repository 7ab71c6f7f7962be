use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use cheata_core::AnalysisPipeline;
use cheata_web::{AnalysisSource, DispatchError, Dispatcher, RemoteClient};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Sobe um upstream descartável e devolve a URL do endpoint `/analyze`.
async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/analyze", addr)
}

/// Endereço em que ninguém escuta.
fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/analyze", addr)
}

/// Upstream que envia cabeçalhos 2xx e fecha a conexão antes do fim do corpo.
async fn spawn_truncating_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 200\r\n\r\n{\"isFake\":",
                )
                .await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{}/analyze", addr)
}

fn dispatcher_for(endpoint: String) -> Dispatcher {
    Dispatcher::new(Some(RemoteClient::new(endpoint, None).unwrap()))
}

#[tokio::test]
async fn remote_success_is_returned_as_is() {
    let app = Router::new().route(
        "/analyze",
        post(|Json(body): Json<Value>| async move {
            let text = body["text"].as_str().unwrap_or_default().to_string();
            Json(json!({
                "isFake": false,
                "confidence": 81,
                "explanation": "remote says fine",
                "evidences": ["remote evidence"],
                "analyzedText": text,
                "suspiciousSegments": [{ "start": 0, "end": 4, "reason": "date" }]
            }))
        }),
    );
    let dispatcher = dispatcher_for(spawn_upstream(app).await);

    let dispatched = dispatcher.analyze("2024 was a year").await.unwrap();
    assert_eq!(dispatched.source, AnalysisSource::Remote);
    assert_eq!(dispatched.result.confidence, 81);
    assert_eq!(dispatched.result.explanation, "remote says fine");
    // O upstream ecoa o campo `text` do corpo JSON enviado.
    assert_eq!(dispatched.result.analyzed_text, "2024 was a year");
    assert_eq!(dispatched.result.suspicious_segments.len(), 1);
}

#[tokio::test]
async fn minimal_backend_body_is_accepted() {
    let app = Router::new().route(
        "/analyze",
        post(|| async {
            Json(json!({ "isFake": true, "confidence": 75.0, "explanation": "mock response" }))
        }),
    );
    let dispatcher = dispatcher_for(spawn_upstream(app).await);

    let dispatched = dispatcher.analyze("some selected text").await.unwrap();
    assert_eq!(dispatched.source, AnalysisSource::Remote);
    assert!(dispatched.result.is_fake);
    assert_eq!(dispatched.result.confidence, 75);
    assert_eq!(dispatched.result.analyzed_text, "some selected text");
}

#[tokio::test]
async fn unreachable_server_falls_back_to_local_patterns() {
    let dispatcher = dispatcher_for(unreachable_endpoint());
    let text = "확실히 모든 사람이 전례 없는 성과";

    let dispatched = dispatcher.analyze(text).await.unwrap();
    assert_eq!(dispatched.source, AnalysisSource::LocalFallback);
    assert_eq!(dispatched.result.analyzed_text, text);
    assert!(dispatched.result.is_fake);
    assert_eq!(dispatched.result.confidence, 66);
    assert_eq!(dispatched.result, AnalysisPipeline::new().analyze(text));
}

#[tokio::test]
async fn connection_dropped_mid_body_falls_back() {
    let dispatcher = dispatcher_for(spawn_truncating_upstream().await);
    let text = "확실히 모든 사람이 전례 없는 성과";

    let dispatched = dispatcher.analyze(text).await.unwrap();
    assert_eq!(dispatched.source, AnalysisSource::LocalFallback);
    assert_eq!(dispatched.result, AnalysisPipeline::new().analyze(text));
}

#[tokio::test]
async fn fallback_handles_empty_text() {
    let dispatcher = dispatcher_for(unreachable_endpoint());
    let dispatched = dispatcher.analyze("").await.unwrap();
    assert_eq!(dispatched.source, AnalysisSource::LocalFallback);
    assert_eq!(dispatched.result.confidence, 50);
    assert!(!dispatched.result.is_fake);
}

#[tokio::test]
async fn rejection_surfaces_server_message() {
    let app = Router::new().route(
        "/analyze",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Text must be at least 10 characters long" })),
            )
        }),
    );
    let dispatcher = dispatcher_for(spawn_upstream(app).await);

    match dispatcher.analyze("short").await {
        Err(DispatchError::Rejected { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Text must be at least 10 characters long");
        }
        other => panic!("esperava rejeição, veio {:?}", other),
    }
}

#[tokio::test]
async fn rejection_reads_fastapi_detail() {
    let app = Router::new().route(
        "/analyze",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Error processing text analysis" })),
            )
        }),
    );
    let dispatcher = dispatcher_for(spawn_upstream(app).await);

    let err = dispatcher.analyze("some selected text").await.unwrap_err();
    assert_eq!(err.to_string(), "Error processing text analysis");
}

#[tokio::test]
async fn rejection_without_body_uses_generic_message() {
    let app = Router::new().route(
        "/analyze",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance").into_response() }),
    );
    let dispatcher = dispatcher_for(spawn_upstream(app).await);

    match dispatcher.analyze("some selected text").await {
        Err(DispatchError::Rejected { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, cheata_web::client::GENERIC_FAILURE);
        }
        other => panic!("esperava rejeição, veio {:?}", other),
    }
}

#[tokio::test]
async fn garbage_success_body_is_not_a_fallback() {
    let app = Router::new().route("/analyze", post(|| async { "not json at all" }));
    let dispatcher = dispatcher_for(spawn_upstream(app).await);

    let err = dispatcher.analyze("some selected text").await.unwrap_err();
    assert!(matches!(err, DispatchError::InvalidResponse(_)));
}

#[tokio::test]
async fn local_only_dispatcher_never_calls_out() {
    let dispatcher = Dispatcher::local_only();
    assert!(dispatcher.remote().is_none());

    let dispatched = dispatcher
        .analyze("2023년 5월 1일 서울대학교 연구 결과 발표")
        .await
        .unwrap();
    assert_eq!(dispatched.source, AnalysisSource::Local);
    assert!(!dispatched.result.is_fake);
    assert_eq!(dispatched.result.confidence, 74);
}
