use reqdoc::snippets::{self, generate, generate_all, generate_for, Language, TOKEN_PLACEHOLDER};
use reqdoc::{EndpointDocument, Error, HttpMethod};

const BASE_URL: &str = "https://api.example.com";

fn users_endpoint(method: HttpMethod, requires_auth: bool) -> EndpointDocument {
    EndpointDocument::new(
        "/users",
        method,
        requires_auth,
        "@LRDexample create {\"name\": \"John\"}\n@LRDexample other {\"name\": \"Jane\"}",
    )
}

#[test]
fn test_concrete_scenario_curl() {
    let doc = EndpointDocument::new(
        "/users",
        HttpMethod::Post,
        true,
        "@LRDresponse 200 {\"id\": 1}\n@LRDexample create {\"name\": \"John\"}\n@LRDdeprecated Use v2 instead",
    );
    let snippet = generate(&doc, BASE_URL, Language::Curl);

    assert!(snippet.starts_with("# POST https://api.example.com/users\n"));
    assert!(snippet.contains("POST https://api.example.com/users"));
    assert!(snippet.contains("Authorization: Bearer {token}"));
    assert!(snippet.contains("\"name\": \"John\""));
}

#[test]
fn test_unauthenticated_get_has_no_token() {
    let doc = users_endpoint(HttpMethod::Get, false);
    for (language, snippet) in generate_all(&doc, BASE_URL) {
        assert!(
            !snippet.contains(TOKEN_PLACEHOLDER),
            "{language} snippet must not mention a token:\n{snippet}"
        );
    }
}

#[test]
fn test_authenticated_endpoints_have_exactly_one_token() {
    for method in HttpMethod::ALL {
        let doc = users_endpoint(method, true);
        for (language, snippet) in generate_all(&doc, BASE_URL) {
            assert_eq!(
                snippet.matches(TOKEN_PLACEHOLDER).count(),
                1,
                "{language} snippet for {method}:\n{snippet}"
            );
        }
    }
}

#[test]
fn test_token_route_parameter_is_not_the_credential() {
    let anonymous = EndpointDocument::new("/password/reset/{token}", HttpMethod::Get, false, "");
    for (language, snippet) in generate_all(&anonymous, BASE_URL) {
        assert_eq!(snippet.matches(TOKEN_PLACEHOLDER).count(), 0, "{language}:\n{snippet}");
        assert!(snippet.contains("/password/reset/:token"), "{language}:\n{snippet}");
    }

    let authenticated = EndpointDocument::new("/password/reset/{token}", HttpMethod::Post, true, "");
    for (language, snippet) in generate_all(&authenticated, BASE_URL) {
        assert_eq!(snippet.matches(TOKEN_PLACEHOLDER).count(), 1, "{language}:\n{snippet}");
    }
}

#[test]
fn test_body_uses_first_example() {
    let doc = users_endpoint(HttpMethod::Post, false);
    for (language, snippet) in generate_all(&doc, BASE_URL) {
        assert!(snippet.contains("John"), "{language}:\n{snippet}");
        assert!(!snippet.contains("Jane"), "{language}:\n{snippet}");
    }
}

#[test]
fn test_curl_body_is_pretty_json_of_first_example() {
    let doc = users_endpoint(HttpMethod::Put, false);
    let snippet = generate(&doc, BASE_URL, Language::Curl);
    let expected = serde_json::to_string_pretty(&doc.first_request_example().unwrap().value)
        .unwrap();
    assert!(snippet.ends_with(&format!("-d '{expected}'")));
}

#[test]
fn test_get_ignores_examples() {
    let doc = users_endpoint(HttpMethod::Get, false);
    for (language, snippet) in generate_all(&doc, BASE_URL) {
        assert!(!snippet.contains("John"), "{language}:\n{snippet}");
    }
}

#[test]
fn test_no_examples_means_no_body() {
    let doc = EndpointDocument::new("/users", HttpMethod::Post, false, "");
    assert!(!generate(&doc, BASE_URL, Language::Curl).contains(" -d "));
    assert!(!generate(&doc, BASE_URL, Language::JavaScript).contains("body:"));
    assert!(!generate(&doc, BASE_URL, Language::Python).contains("json=data"));
    assert!(generate(&doc, BASE_URL, Language::Php).contains("Http::post('https://api.example.com/users');"));
}

#[test]
fn test_base_url_with_trailing_slash() {
    let doc = EndpointDocument::new("users/{id}", HttpMethod::Delete, false, "");
    let snippet = generate(&doc, "https://api.example.com/", Language::JavaScript);
    assert!(snippet.starts_with("fetch('https://api.example.com/users/:id', {"));
}

#[test]
fn test_language_by_name() {
    let doc = users_endpoint(HttpMethod::Post, true);
    let python = generate_for(&doc, BASE_URL, "python").unwrap();
    assert!(python.starts_with("import requests"));
    assert!(python.contains("requests.post(url, headers=headers, json=data)"));

    let php = generate_for(&doc, BASE_URL, "PHP").unwrap();
    assert!(php.contains("Http::withToken('{token}')"));

    assert_eq!(
        generate_for(&doc, BASE_URL, "ruby"),
        Err(Error::UnsupportedLanguage("ruby".to_string()))
    );
}

#[test]
fn test_generator_lookup_matches_generate() {
    let doc = users_endpoint(HttpMethod::Patch, true);
    let request = snippets::SnippetRequest::new(&doc, BASE_URL);
    for language in Language::ALL {
        assert_eq!(
            snippets::generator(language).generate(&request),
            generate(&doc, BASE_URL, language)
        );
    }
}

#[test]
fn test_php_body_keeps_multiline_strings() {
    let doc = EndpointDocument::new(
        "/notes",
        HttpMethod::Post,
        false,
        "@LRDexample create {\"body\": \"line1\\nline2\"}",
    );
    let php = generate(&doc, BASE_URL, Language::Php);
    assert!(php.contains("'body' => 'line1\nline2',"), "{php}");
    assert!(!php.contains(r"line1\nline2"), "{php}");
}
