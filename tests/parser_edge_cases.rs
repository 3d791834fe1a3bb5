use reqdoc::parser::{
    parse_comment_block, parse_deprecation, parse_enums, parse_error_schemas, parse_examples,
    parse_response_schemas, scan_annotations, TagKind,
};
use reqdoc::{EndpointDocument, HttpMethod};
use serde_json::json;

const PHPDOC_BLOCK: &str = r#"/**
 * Create a user.
 *
 * @LRDresponse 201 {
 *     "id": 1,
 *     "name": "John",
 *     "roles": ["admin", "editor"]
 * }
 * @LRDerror 422 {"message": "The name field is required."}
 * @LRDexample minimal {"name": "John"}
 * @LRDexample full {
 *     "name": "John",
 *     "email": "john@example.com"
 * }
 * @LRDenum role admin|editor|viewer Role assigned on creation
 * @LRDdeprecated Use /v2/users instead
 */"#;

#[test]
fn test_concrete_scenario() {
    let doc = EndpointDocument::new(
        "/users",
        HttpMethod::Post,
        true,
        "@LRDresponse 200 {\"id\": 1}\n@LRDexample create {\"name\": \"John\"}\n@LRDdeprecated Use v2 instead",
    );

    assert_eq!(doc.response_schemas().len(), 1);
    let response = &doc.response_schemas()[0];
    assert_eq!(response.status_code, 200);
    assert_eq!(response.description, "OK");
    assert_eq!(response.schema, json!({"id": 1}));

    assert_eq!(doc.request_examples().len(), 1);
    assert_eq!(doc.request_examples()["create"].value, json!({"name": "John"}));

    let deprecation = doc.deprecation().unwrap();
    assert!(deprecation.is_deprecated);
    assert_eq!(deprecation.message, "Use v2 instead");
}

#[test]
fn test_multiline_phpdoc_block() {
    let parsed = parse_comment_block(PHPDOC_BLOCK);

    assert_eq!(parsed.response_schemas.len(), 1);
    assert_eq!(parsed.response_schemas[0].status_code, 201);
    assert_eq!(parsed.response_schemas[0].description, "Created");
    assert_eq!(
        parsed.response_schemas[0].schema,
        json!({"id": 1, "name": "John", "roles": ["admin", "editor"]})
    );

    assert_eq!(parsed.error_schemas.len(), 1);
    assert_eq!(parsed.error_schemas[0].status_code, 422);
    assert_eq!(parsed.error_schemas[0].description, "Unprocessable Entity");

    let names: Vec<_> = parsed.request_examples.keys().map(String::as_str).collect();
    assert_eq!(names, ["minimal", "full"]);
    assert_eq!(
        parsed.request_examples["full"].value,
        json!({"name": "John", "email": "john@example.com"})
    );

    let role = &parsed.enum_values["role"];
    assert_eq!(role.values, ["admin", "editor", "viewer"]);
    assert_eq!(role.description, "Role assigned on creation");

    assert_eq!(parsed.deprecation.unwrap().message, "Use /v2/users instead");
}

#[test]
fn test_line_comment_block() {
    let block = "/// @LRDresponse 200 {\n///     \"ok\": true\n/// }\n// @LRDenum sort asc|desc";
    let parsed = parse_comment_block(block);

    assert_eq!(parsed.response_schemas[0].schema, json!({"ok": true}));
    assert_eq!(parsed.enum_values["sort"].values, ["asc", "desc"]);
}

#[test]
fn test_responses_keep_source_order_and_duplicates() {
    let block = r#"
        @LRDresponse 200 {"page": 1}
        @LRDresponse 404 {"error": "not found"}
        @LRDresponse 200 {"page": 2}
    "#;
    let schemas = parse_response_schemas(block);
    let codes: Vec<_> = schemas.iter().map(|s| s.status_code).collect();
    assert_eq!(codes, [200, 404, 200]);
    assert_eq!(schemas[2].schema, json!({"page": 2}));
}

#[test]
fn test_duplicate_example_keeps_last_value() {
    let block = r#"
        @LRDexample create {"name": "first"}
        @LRDexample create {"name": "second"}
    "#;
    let examples = parse_examples(block);
    assert_eq!(examples.len(), 1);
    assert_eq!(examples["create"].value, json!({"name": "second"}));
}

#[test]
fn test_enum_values_keep_duplicates() {
    let enums = parse_enums("@LRDenum grade a|a|b");
    assert_eq!(enums["grade"].values, ["a", "a", "b"]);
    assert_eq!(enums["grade"].description, "");
}

#[test]
fn test_enum_empty_segment_keeps_rest_of_tag() {
    let enums = parse_enums("@LRDenum status a||b Some text");
    assert_eq!(enums["status"].values, ["a", "", "b"]);
    assert_eq!(enums["status"].description, "Some text");
}

#[test]
fn test_enum_field_overwrites_earlier_definition() {
    let enums = parse_enums("@LRDenum status open|closed\n@LRDenum status draft|live Final set");
    assert_eq!(enums.len(), 1);
    assert_eq!(enums["status"].values, ["draft", "live"]);
    assert_eq!(enums["status"].description, "Final set");
}

#[test]
fn test_deprecation_absent_and_default() {
    assert!(parse_deprecation("@LRDresponse 200 {}").is_none());

    let info = parse_deprecation("/** @LRDdeprecated */").unwrap();
    assert!(info.is_deprecated);
    assert_eq!(info.message, "This endpoint is deprecated");
}

#[test]
fn test_unknown_status_code_gets_generic_description() {
    let schemas = parse_error_schemas(r#"@LRDerror 418 {"error": "teapot"}"#);
    assert_eq!(schemas[0].description, "Response");
}

#[test]
fn test_malformed_tags_are_skipped() {
    let block = r#"
        @LRDresponse abc {"a": 1}
        @LRDresponse 700 {"a": 1}
        @LRDresponse 200 [1, 2]
        @LRDresponse 200 {not json}
        @LRDexample {"a": 1}
        @LRDenum onlyfield
        @LRDerror 500 {"error": "server"}
    "#;
    let parsed = parse_comment_block(block);

    assert!(parsed.response_schemas.is_empty());
    assert!(parsed.request_examples.is_empty());
    assert!(parsed.enum_values.is_empty());
    assert_eq!(parsed.error_schemas.len(), 1);
    assert_eq!(parsed.error_schemas[0].status_code, 500);
}

#[test]
fn test_unclosed_object_does_not_swallow_next_tag() {
    let block = "@LRDexample broken {\"name\": \"x\"\n@LRDexample ok {\"name\": \"y\"}";
    let examples = parse_examples(block);
    assert_eq!(examples.len(), 1);
    assert_eq!(examples["ok"].value, json!({"name": "y"}));
}

#[test]
fn test_braces_inside_strings() {
    let block = r#"@LRDresponse 200 {"template": "Hello {name}}", "ok": true}"#;
    let schemas = parse_response_schemas(block);
    assert_eq!(
        schemas[0].schema,
        json!({"template": "Hello {name}}", "ok": true})
    );
}

#[test]
fn test_trailing_prose_after_object() {
    let schemas = parse_response_schemas(r#"@LRDresponse 200 {"id": 1} returned on success"#);
    assert_eq!(schemas.len(), 1);
    assert_eq!(schemas[0].schema, json!({"id": 1}));
}

#[test]
fn test_extracted_object_reparses_to_same_tree() {
    let schemas = parse_response_schemas(PHPDOC_BLOCK);
    let text = serde_json::to_string(&schemas[0].schema).unwrap();
    let block = format!("@LRDresponse 201 {text}");
    assert_eq!(parse_response_schemas(&block)[0].schema, schemas[0].schema);
}

#[test]
fn test_scan_reports_every_occurrence() {
    let occurrences = scan_annotations(PHPDOC_BLOCK);
    let kinds: Vec<_> = occurrences.iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        [
            Some(TagKind::Response),
            Some(TagKind::Error),
            Some(TagKind::Example),
            Some(TagKind::Example),
            Some(TagKind::Enum),
            Some(TagKind::Deprecated),
        ]
    );
    assert!(occurrences.iter().all(|o| o.result.is_ok()));
}
