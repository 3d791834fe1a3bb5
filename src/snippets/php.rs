use super::literal::{php_literal, php_quoted};
use super::{Language, SnippetGenerator, SnippetRequest, TOKEN_PLACEHOLDER};

/// Laravel `Http` facade call
pub struct Php;

impl SnippetGenerator for Php {
    fn language(&self) -> Language {
        Language::Php
    }

    fn generate(&self, request: &SnippetRequest<'_>) -> String {
        // With a token the method call moves onto an indented continuation line
        let (receiver, indent) = if request.requires_auth {
            (format!("Http::withToken('{TOKEN_PLACEHOLDER}')\n    ->"), 4)
        } else {
            ("Http::".to_string(), 0)
        };

        let mut arguments = php_quoted(&request.url);
        if let Some(body) = request.body {
            arguments.push_str(", ");
            arguments.push_str(&php_literal(body, indent));
        }

        format!(
            "use Illuminate\\Support\\Facades\\Http;\n\n\
             $response = {receiver}{}({arguments});\n\n\
             $data = $response->json();",
            request.method.as_lowercase()
        )
    }
}
