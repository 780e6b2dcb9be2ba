//! Client tests against a live router bound to an ephemeral port.

use axum::{Json, Router, http::StatusCode, routing::get};
use domain_translation::{
    EchoTranslator, Language, LanguagesResponse, TranslateRequest, TranslationService, handlers,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use translator_client::{ClientConfig, ClientError, TranslatorClient};

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, stale_time: Duration) -> TranslatorClient {
    let config = ClientConfig::new(format!("http://{}", addr)).with_stale_time(stale_time);
    TranslatorClient::new(&config).unwrap()
}

async fn translation_api() -> SocketAddr {
    let service = TranslationService::new(EchoTranslator::new());
    serve(Router::new().nest("/translation", handlers::router(service))).await
}

/// Languages endpoint that counts how often it is hit.
async fn counting_languages_api(hits: Arc<AtomicUsize>) -> SocketAddr {
    let router = Router::new().route(
        "/translation/languages",
        get(move || {
            let hits = Arc::clone(&hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(LanguagesResponse {
                    languages: vec![Language::new("en", "English")],
                })
            }
        }),
    );
    serve(router).await
}

#[tokio::test]
async fn test_translate_round_trip() {
    let addr = translation_api().await;
    let client = client_for(addr, Duration::from_secs(300));

    let response = client
        .translate(&TranslateRequest::new("Hello world", "en", "es"))
        .await
        .unwrap();

    assert!(response.translated_text.contains("Hello world"));
    assert_eq!(response.source_language, "en");
    assert_eq!(response.target_language, "es");
    assert_eq!(response.confidence, Some(0.95));
}

#[tokio::test]
async fn test_languages_returns_catalog() {
    let addr = translation_api().await;
    let client = client_for(addr, Duration::from_secs(300));

    let languages = client.languages().await.unwrap().languages;
    assert_eq!(languages.len(), 6);
    assert_eq!(languages[0], Language::new("en", "English"));
    assert_eq!(languages[1], Language::new("es", "Spanish"));
}

#[tokio::test]
async fn test_languages_are_cached_within_stale_window() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = counting_languages_api(Arc::clone(&hits)).await;
    let client = client_for(addr, Duration::from_secs(300));

    client.languages().await.unwrap();
    client.clone().languages().await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);

    client.refresh_languages().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_zero_stale_time_always_refetches() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = counting_languages_api(Arc::clone(&hits)).await;
    let client = client_for(addr, Duration::ZERO);

    client.languages().await.unwrap();
    client.languages().await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_validation_failure_surfaces_as_api_error() {
    let addr = translation_api().await;
    let client = client_for(addr, Duration::from_secs(300));

    let err = client
        .translate(&TranslateRequest::new("Hello", "en", ""))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    match err {
        ClientError::Api { body: Some(body), .. } => assert_eq!(body.error, "VALIDATION_ERROR"),
        other => panic!("expected decoded API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_message() {
    let router = Router::new().route(
        "/translation/languages",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let addr = serve(router).await;
    let client = client_for(addr, Duration::from_secs(300));

    match client.languages().await.unwrap_err() {
        ClientError::Api {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream down");
            assert!(body.is_none());
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, Duration::from_secs(300));
    let err = client.languages().await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(err.status(), None);
}
