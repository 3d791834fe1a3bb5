use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde::Deserialize;

use crate::config::DocsConfig;
use crate::error::Result;
use crate::model::{normalize_uri, EndpointDocument, HttpMethod};
use crate::openapi;
use crate::snippets::{self, Language};

/// Serves endpoint documents, their OpenAPI export and client snippets.
///
/// # Example
/// ```ignore
/// use reqdoc::{DocsConfig, DocsRouter};
///
/// let docs = DocsRouter::new(documents)
///     .with_config(DocsConfig::new().with_base_url("https://api.example.com"))
///     .finish();
///
/// let app = axum::Router::new().merge(docs);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocsRouter {
    documents: Vec<EndpointDocument>,
    config: DocsConfig,
}

struct DocsState {
    documents: Vec<EndpointDocument>,
    config: DocsConfig,
    openapi: OpenApi,
    openapi_yaml: Result<String>,
}

/// Query of the snippet route, e.g. `?method=POST&uri=/users`
#[derive(Debug, Deserialize)]
pub struct SnippetQuery {
    pub method: String,
    pub uri: String,
}

impl DocsRouter {
    pub fn new(documents: Vec<EndpointDocument>) -> Self {
        Self {
            documents,
            config: DocsConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DocsConfig) -> Self {
        self.config = config;
        self
    }

    /// Add one more document
    pub fn document(mut self, document: EndpointDocument) -> Self {
        self.documents.push(document);
        self
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    pub fn documents(&self) -> &[EndpointDocument] {
        &self.documents
    }

    /// Build the axum router; the OpenAPI document is rendered once here
    pub fn finish<S>(self) -> axum::Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let openapi = openapi::to_openapi(&self.documents, &self.config);
        let yaml = openapi::render_yaml(&openapi);
        if let Err(err) = &yaml {
            tracing::warn!(error = %err, "OpenAPI YAML route will answer with 500");
        }

        let snippet_path = format!(
            "{}/{{language}}",
            self.config.snippets_path.trim_end_matches('/')
        );
        let state = Arc::new(DocsState {
            openapi,
            openapi_yaml: yaml,
            documents: self.documents,
            config: self.config,
        });

        axum::Router::new()
            .route(&state.config.docs_path, get(list_documents))
            .route(&state.config.openapi_path, get(openapi_json))
            .route(&state.config.openapi_yaml_path, get(openapi_yaml))
            .route(&snippet_path, get(snippet))
            .with_state(state)
    }
}

async fn list_documents(State(state): State<Arc<DocsState>>) -> Json<Vec<EndpointDocument>> {
    tracing::debug!(count = state.documents.len(), "serving endpoint documents");
    Json(state.documents.clone())
}

async fn openapi_json(State(state): State<Arc<DocsState>>) -> Json<OpenApi> {
    tracing::debug!("serving OpenAPI JSON");
    Json(state.openapi.clone())
}

async fn openapi_yaml(State(state): State<Arc<DocsState>>) -> Response {
    tracing::debug!("serving OpenAPI YAML");
    match &state.openapi_yaml {
        Ok(yaml) => ([(header::CONTENT_TYPE, "application/yaml")], yaml.clone()).into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}

async fn snippet(
    State(state): State<Arc<DocsState>>,
    Path(language): Path<String>,
    Query(query): Query<SnippetQuery>,
) -> Response {
    tracing::debug!(%language, method = %query.method, uri = %query.uri, "serving snippet");

    let language = match language.parse::<Language>() {
        Ok(language) => language,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };
    let method = match query.method.parse::<HttpMethod>() {
        Ok(method) => method,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };
    let uri = normalize_uri(&query.uri);

    let Some(document) = state
        .documents
        .iter()
        .find(|doc| doc.http_method() == method && doc.uri() == uri)
    else {
        return (
            StatusCode::NOT_FOUND,
            format!("No documented endpoint for {method} {uri}"),
        )
            .into_response();
    };

    snippets::generate(document, &state.config.base_url, language).into_response()
}
