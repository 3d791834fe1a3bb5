use super::literal::{pretty_json, shell_quoted};
use super::{Language, SnippetGenerator, SnippetRequest, TOKEN_PLACEHOLDER};

/// Shell snippet invoking `curl`.
///
/// A leading comment states the request line so the snippet reads like the
/// raw HTTP request it performs.
pub struct Curl;

impl SnippetGenerator for Curl {
    fn language(&self) -> Language {
        Language::Curl
    }

    fn generate(&self, request: &SnippetRequest<'_>) -> String {
        let method = request.method.as_str();

        let mut args = vec![
            format!("curl -X {method}"),
            format!("  {}", shell_quoted(&request.url)),
            "  -H 'Content-Type: application/json'".to_string(),
            "  -H 'Accept: application/json'".to_string(),
        ];

        if request.requires_auth {
            args.push(format!("  -H 'Authorization: Bearer {TOKEN_PLACEHOLDER}'"));
        }

        if let Some(body) = request.body {
            args.push(format!("  -d {}", shell_quoted(&pretty_json(body))));
        }

        format!("# {method} {}\n{}", request.url, args.join(" \\\n"))
    }
}
