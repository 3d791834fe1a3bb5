//! Request documentation from `@LRD` comment tags.
//!
//! Route introspection hands over one [`EndpointInput`] per endpoint. Each
//! becomes an [`EndpointDocument`] whose comment block has been parsed into
//! response, error, example, enum and deprecation entries. Documents can be
//! rendered as client snippets ([`snippets`]), exported as OpenAPI
//! ([`openapi`]) or served over HTTP with [`DocsRouter`].
//!
//! # Example
//! ```ignore
//! use reqdoc::{DocsRouter, EndpointDocument, HttpMethod};
//! use reqdoc::snippets::{self, Language};
//!
//! let doc = EndpointDocument::new(
//!     "/users",
//!     HttpMethod::Post,
//!     true,
//!     r#"@LRDexample create {"name": "John"}"#,
//! );
//! let curl = snippets::generate(&doc, "https://api.example.com", Language::Curl);
//!
//! let app = axum::Router::new().merge(DocsRouter::new(vec![doc]).finish());
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod openapi;
pub mod parser;
pub mod router;
pub mod snippets;

// Re-export aide for access to the OpenAPI types
pub use aide;

pub use config::DocsConfig;
pub use error::{Error, Result};
pub use model::{
    document_all, normalize_uri, DeprecationInfo, EndpointDocument, EndpointInput,
    EnumValueEntry, ErrorSchemaEntry, HttpMethod, RequestExampleEntry, ResponseSchemaEntry,
};
pub use router::DocsRouter;
