use serde::{Deserialize, Serialize};

/// Settings for the OpenAPI export and the documentation router.
///
/// Deserializable so applications can embed it in their own configuration
/// files; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    /// Base URL snippets and the OpenAPI server entry point at
    pub base_url: String,
    pub docs_path: String,
    pub openapi_path: String,
    pub openapi_yaml_path: String,
    pub snippets_path: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: "API Documentation".to_string(),
            version: "1.0.0".to_string(),
            description: None,
            base_url: "http://localhost".to_string(),
            docs_path: "/docs".to_string(),
            openapi_path: "/docs/openapi.json".to_string(),
            openapi_yaml_path: "/docs/openapi.yaml".to_string(),
            snippets_path: "/docs/snippets".to_string(),
        }
    }
}

impl DocsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_docs_path(mut self, path: impl Into<String>) -> Self {
        self.docs_path = path.into();
        self
    }

    pub fn with_openapi_path(mut self, path: impl Into<String>) -> Self {
        self.openapi_path = path.into();
        self
    }

    pub fn with_openapi_yaml_path(mut self, path: impl Into<String>) -> Self {
        self.openapi_yaml_path = path.into();
        self
    }

    pub fn with_snippets_path(mut self, path: impl Into<String>) -> Self {
        self.snippets_path = path.into();
        self
    }
}
