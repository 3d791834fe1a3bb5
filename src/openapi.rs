//! Export of endpoint documents as an OpenAPI document.
//!
//! Annotated response and error bodies become `application/json` examples of
//! the matching status code; request examples become request-body examples.

use aide::openapi::{
    Components, Example, Info, MediaType, OpenApi, Operation, PathItem, Paths, ReferenceOr,
    RequestBody, Response, Responses, Server, StatusCode,
};
use serde_json::{json, Map, Value};

use crate::config::DocsConfig;
use crate::error::{Error, Result};
use crate::model::{EndpointDocument, HttpMethod, ResponseSchemaEntry};

const JSON_MEDIA_TYPE: &str = "application/json";
const BEARER_SCHEME: &str = "bearerAuth";

/// Build an OpenAPI document describing every endpoint
pub fn to_openapi(documents: &[EndpointDocument], config: &DocsConfig) -> OpenApi {
    let mut api = OpenApi {
        info: Info {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
            ..Default::default()
        },
        ..Default::default()
    };

    if !config.base_url.is_empty() {
        api.servers.push(Server {
            url: config.base_url.clone(),
            ..Default::default()
        });
    }

    let paths = api.paths.get_or_insert_with(Paths::default);
    for document in documents {
        let item = paths
            .paths
            .entry(document.uri().to_string())
            .or_insert_with(|| ReferenceOr::Item(PathItem::default()));

        if let ReferenceOr::Item(item) = item {
            let slot = operation_slot(item, document.http_method());
            if slot.is_some() {
                tracing::debug!(
                    uri = document.uri(),
                    method = %document.http_method(),
                    "duplicate endpoint replaces earlier operation"
                );
            }
            *slot = Some(operation(document));
        }
    }

    if documents.iter().any(EndpointDocument::requires_auth) {
        api.components = bearer_components();
    }

    api
}

/// The OpenAPI document rendered as YAML
pub fn to_openapi_yaml(documents: &[EndpointDocument], config: &DocsConfig) -> Result<String> {
    render_yaml(&to_openapi(documents, config))
}

/// Render an already built OpenAPI document as YAML
pub fn render_yaml(api: &OpenApi) -> Result<String> {
    serde_yaml::to_string(api).map_err(|err| Error::Serialization(err.to_string()))
}

/// Stable operation id, e.g. `post_users_id` for `POST /users/{id}`
pub fn operation_id(method: HttpMethod, uri: &str) -> String {
    let slug = uri
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if slug.is_empty() {
        format!("{}_root", method.as_lowercase())
    } else {
        format!("{}_{slug}", method.as_lowercase())
    }
}

fn operation(document: &EndpointDocument) -> Operation {
    let mut operation = Operation {
        operation_id: Some(operation_id(document.http_method(), document.uri())),
        deprecated: document.is_deprecated(),
        description: document
            .deprecation()
            .filter(|info| info.is_deprecated)
            .map(|info| info.message.clone()),
        ..Default::default()
    };

    let mut responses = Responses::default();
    for entry in document.response_schemas().iter().chain(document.error_schemas()) {
        add_response(&mut responses, entry);
    }
    if !responses.responses.is_empty() {
        operation.responses = Some(responses);
    }

    if document.http_method().carries_body() && !document.request_examples().is_empty() {
        let mut media = MediaType::default();
        for (name, example) in document.request_examples() {
            media
                .examples
                .insert(name.clone(), ReferenceOr::Item(example_of(&example.value)));
        }

        let mut body = RequestBody {
            required: true,
            ..Default::default()
        };
        body.content.insert(JSON_MEDIA_TYPE.to_string(), media);
        operation.request_body = Some(ReferenceOr::Item(body));
    }

    if document.requires_auth() {
        operation
            .security
            .push([(BEARER_SCHEME.to_string(), Vec::new())].into_iter().collect());
    }

    if !document.enum_values().is_empty() {
        let enums: Map<String, Value> = document
            .enum_values()
            .values()
            .map(|entry| {
                (
                    entry.field.clone(),
                    json!({"values": entry.values, "description": entry.description}),
                )
            })
            .collect();
        operation
            .extensions
            .insert("x-enum-values".to_string(), Value::Object(enums));
    }

    operation
}

// A repeated status code keeps the first schema as the example and files
// later ones as named variants
fn add_response(responses: &mut Responses, entry: &ResponseSchemaEntry) {
    let status = StatusCode::Code(entry.status_code);

    match responses.responses.get_mut(&status) {
        Some(ReferenceOr::Item(existing)) => {
            let media = existing
                .content
                .entry(JSON_MEDIA_TYPE.to_string())
                .or_default();
            let variant = media
                .examples
                .keys()
                .filter(|name| name.starts_with("variant_"))
                .count()
                + 2;
            media.examples.insert(
                format!("variant_{variant}"),
                ReferenceOr::Item(example_of(&entry.schema)),
            );
        }
        Some(_) => {}
        None => {
            responses
                .responses
                .insert(status, ReferenceOr::Item(json_response(entry)));
        }
    }
}

fn json_response(entry: &ResponseSchemaEntry) -> Response {
    let mut media = MediaType {
        example: Some(entry.schema.clone()),
        ..Default::default()
    };
    if let Some(examples) = &entry.examples {
        for (name, value) in examples {
            media
                .examples
                .insert(name.clone(), ReferenceOr::Item(example_of(value)));
        }
    }

    let mut response = Response {
        description: entry.description.clone(),
        ..Default::default()
    };
    response.content.insert(JSON_MEDIA_TYPE.to_string(), media);
    response
}

fn example_of(value: &Value) -> Example {
    Example {
        value: Some(value.clone()),
        ..Default::default()
    }
}

fn bearer_components() -> Option<Components> {
    let components = json!({
        "securitySchemes": {
            BEARER_SCHEME: {"type": "http", "scheme": "bearer"}
        }
    });

    match serde_json::from_value(components) {
        Ok(components) => Some(components),
        Err(err) => {
            tracing::debug!(error = %err, "could not describe bearer security scheme");
            None
        }
    }
}

fn operation_slot(item: &mut PathItem, method: HttpMethod) -> &mut Option<Operation> {
    match method {
        HttpMethod::Get => &mut item.get,
        HttpMethod::Post => &mut item.post,
        HttpMethod::Put => &mut item.put,
        HttpMethod::Patch => &mut item.patch,
        HttpMethod::Delete => &mut item.delete,
        HttpMethod::Head => &mut item.head,
    }
}
