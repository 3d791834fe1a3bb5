use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::handlers;

pub struct Backend {
    client: Client,
    document_map: Arc<RwLock<HashMap<String, String>>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            document_map: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn on_change(&self, uri: Url, text: String, version: i32) {
        let diagnostics = handlers::text_document_did_change(&text, uri.clone());
        tracing::debug!(%uri, version, count = diagnostics.len(), "publishing diagnostics");

        self.document_map.write().await.insert(uri.to_string(), text);

        self.client
            .publish_diagnostics(uri, diagnostics, Some(version))
            .await;
    }

    async fn document(&self, uri: &Url) -> Option<String> {
        self.document_map.read().await.get(uri.as_str()).cloned()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!(
            client = ?params.client_info.as_ref().map(|info| &info.name),
            "initializing"
        );

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "reqdoc-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec!["@".to_string(), " ".to_string()]),
                    ..Default::default()
                }),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                ..Default::default()
            },
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "reqdoc LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.on_change(
            params.text_document.uri,
            params.text_document.text,
            params.text_document.version,
        )
        .await;
    }

    async fn did_change(&self, mut params: DidChangeTextDocumentParams) {
        // Full sync: the last change carries the whole document
        if let Some(change) = params.content_changes.pop() {
            self.on_change(
                params.text_document.uri,
                change.text,
                params.text_document.version,
            )
            .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.document_map
            .write()
            .await
            .remove(params.text_document.uri.as_str());
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let position = params.text_document_position.position;
        let Some(content) = self.document(&params.text_document_position.text_document.uri).await
        else {
            return Ok(None);
        };

        Ok(handlers::text_document_completion(&content, position))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let position = params.text_document_position_params.position;
        let Some(content) = self
            .document(&params.text_document_position_params.text_document.uri)
            .await
        else {
            return Ok(None);
        };

        Ok(handlers::text_document_hover(&content, position))
    }
}
