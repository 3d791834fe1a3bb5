use super::literal::{python_literal, single_quoted};
use super::{Language, SnippetGenerator, SnippetRequest, TOKEN_PLACEHOLDER};

/// `requests` script printing the decoded response
pub struct Python;

impl SnippetGenerator for Python {
    fn language(&self) -> Language {
        Language::Python
    }

    fn generate(&self, request: &SnippetRequest<'_>) -> String {
        let mut headers = vec![
            "    'Content-Type': 'application/json'".to_string(),
            "    'Accept': 'application/json'".to_string(),
        ];
        if request.requires_auth {
            headers.push(format!("    'Authorization': 'Bearer {TOKEN_PLACEHOLDER}'"));
        }

        let method = request.method.as_lowercase();
        let mut snippet = format!(
            "import requests\n\nurl = {}\nheaders = {{\n{}\n}}\n\n",
            single_quoted(&request.url),
            headers.join(",\n")
        );

        match request.body {
            Some(body) => {
                snippet.push_str(&format!("data = {}\n\n", python_literal(body, 0)));
                snippet.push_str(&format!(
                    "response = requests.{method}(url, headers=headers, json=data)\n"
                ));
            }
            None => {
                snippet.push_str(&format!("response = requests.{method}(url, headers=headers)\n"));
            }
        }

        snippet.push_str("print(response.json())");
        snippet
    }
}
