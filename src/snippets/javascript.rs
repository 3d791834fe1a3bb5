use super::literal::{indent_continuation, pretty_json, single_quoted};
use super::{Language, SnippetGenerator, SnippetRequest, TOKEN_PLACEHOLDER};

/// `fetch` call with promise continuations
pub struct JavaScript;

impl SnippetGenerator for JavaScript {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn generate(&self, request: &SnippetRequest<'_>) -> String {
        let mut headers = vec![
            "    'Content-Type': 'application/json'".to_string(),
            "    'Accept': 'application/json'".to_string(),
        ];
        if request.requires_auth {
            headers.push(format!("    'Authorization': 'Bearer {TOKEN_PLACEHOLDER}'"));
        }

        let mut options = vec![
            format!("  method: '{}'", request.method.as_str()),
            format!("  headers: {{\n{}\n  }}", headers.join(",\n")),
        ];
        if let Some(body) = request.body {
            options.push(format!(
                "  body: JSON.stringify({})",
                indent_continuation(&pretty_json(body), 2)
            ));
        }

        format!(
            "fetch({}, {{\n{}\n}})\n\
             \x20 .then(response => response.json())\n\
             \x20 .then(data => console.log(data))\n\
             \x20 .catch(error => console.error('Error:', error));",
            single_quoted(&request.url),
            options.join(",\n")
        )
    }
}
