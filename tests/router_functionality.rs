use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use reqdoc::{DocsConfig, DocsRouter, EndpointDocument, HttpMethod};
use serde_json::Value;
use tower::util::ServiceExt;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn app() -> Router {
    init_tracing();

    let documents = vec![
        EndpointDocument::new(
            "/users",
            HttpMethod::Post,
            true,
            "@LRDresponse 200 {\"id\": 1}\n@LRDexample create {\"name\": \"John\"}\n@LRDdeprecated Use v2 instead",
        ),
        EndpointDocument::new("/users/{id}", HttpMethod::Get, false, "@LRDresponse 200 {\"id\": 1}"),
    ];

    DocsRouter::new(documents)
        .with_config(
            DocsConfig::new()
                .with_title("Test API")
                .with_base_url("https://api.example.com"),
        )
        .finish()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_lists_documents() {
    let (status, _, body) = get(app(), "/docs").await;
    assert_eq!(status, StatusCode::OK);

    let documents: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(documents.as_array().unwrap().len(), 2);
    assert_eq!(documents[0]["uri"], "/users");
    assert_eq!(documents[0]["http_method"], "POST");
    assert_eq!(documents[0]["deprecation"]["message"], "Use v2 instead");
    assert_eq!(documents[1]["path_parameters"][0], "id");
}

#[tokio::test]
async fn test_serves_openapi_json() {
    let (status, content_type, body) = get(app(), "/docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let api: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(api["info"]["title"], "Test API");
    assert_eq!(api["paths"]["/users"]["post"]["deprecated"], true);
}

#[tokio::test]
async fn test_serves_openapi_yaml() {
    let (status, content_type, body) = get(app(), "/docs/openapi.yaml").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/yaml"));
    assert!(body.contains("title: Test API"));
}

#[tokio::test]
async fn test_serves_snippet() {
    let (status, content_type, body) =
        get(app(), "/docs/snippets/curl?method=POST&uri=/users").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert!(body.starts_with("# POST https://api.example.com/users"));
    assert!(body.contains("Bearer {token}"));
}

#[tokio::test]
async fn test_snippet_lookup_normalizes_method_and_uri() {
    let (status, _, body) = get(app(), "/docs/snippets/py?method=get&uri=users/%7Bid%7D/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("url = 'https://api.example.com/users/:id'"));
}

#[tokio::test]
async fn test_snippet_rejects_unknown_language() {
    let (status, _, body) = get(app(), "/docs/snippets/ruby?method=GET&uri=/users").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Unsupported snippet language 'ruby'"));
}

#[tokio::test]
async fn test_snippet_rejects_invalid_method() {
    let (status, _, body) = get(app(), "/docs/snippets/curl?method=TRACE&uri=/users").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid HTTP method 'TRACE'"));
}

#[tokio::test]
async fn test_snippet_for_unknown_endpoint() {
    let (status, _, _) = get(app(), "/docs/snippets/curl?method=GET&uri=/orders").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Documented path, undocumented method
    let (status, _, _) = get(app(), "/docs/snippets/curl?method=DELETE&uri=/users").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_custom_paths_and_nesting_state() {
    #[derive(Clone)]
    struct AppState;

    let docs: Router<AppState> = DocsRouter::new(vec![EndpointDocument::new(
        "/ping",
        HttpMethod::Get,
        false,
        "",
    )])
    .with_config(
        DocsConfig::new()
            .with_docs_path("/api-docs")
            .with_openapi_path("/api-docs/api.json"),
    )
    .finish();
    let app = Router::new().merge(docs).with_state(AppState);

    let (status, _, _) = get(app.clone(), "/api-docs").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = get(app.clone(), "/api-docs/api.json").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = get(app, "/docs/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
