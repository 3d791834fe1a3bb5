/// Shared documentation for `@LRD` annotations
use reqdoc::parser::{status_description, TagKind};

/// Get detailed documentation for an annotation
///
/// # Returns
/// Markdown-formatted documentation string
pub fn get_annotation_documentation(kind: TagKind) -> &'static str {
    match kind {
        TagKind::Response => {
            r#"# @LRDresponse

Document a success response body for a status code.

## Syntax
```
@LRDresponse STATUS {JSON}
```

## Parameters
- `STATUS`: HTTP status code (100-599)
- `JSON`: Example response body, a JSON object that may span several comment lines

## Examples
```
/**
 * @LRDresponse 200 {"id": 1, "name": "John"}
 * @LRDresponse 201 {
 *     "id": 2
 * }
 */
```

The same status code may be documented more than once; every entry is kept.
"#
        }
        TagKind::Example => {
            r#"# @LRDexample

Provide a named request body example.

## Syntax
```
@LRDexample NAME {JSON}
```

## Parameters
- `NAME`: Identifier made of letters, digits and underscores
- `JSON`: Request body, a JSON object

## Example
```
/**
 * @LRDexample create {"name": "John", "email": "john@example.com"}
 */
```

The first example is used as the body of generated client snippets.
A later example with the same name replaces the earlier one.
"#
        }
        TagKind::Error => {
            r#"# @LRDerror

Document an error response body for a status code.

## Syntax
```
@LRDerror STATUS {JSON}
```

## Parameters
- `STATUS`: HTTP status code (100-599)
- `JSON`: Example error body, a JSON object

## Example
```
/**
 * @LRDerror 422 {"message": "The name field is required."}
 * @LRDerror 404 {"message": "User not found"}
 */
```
"#
        }
        TagKind::Enum => {
            r#"# @LRDenum

List the allowed values of a request field.

## Syntax
```
@LRDenum FIELD VALUE|VALUE|... [DESCRIPTION]
```

## Parameters
- `FIELD`: Field name
- `VALUE`: Allowed values separated by `|`
- `DESCRIPTION`: Optional text up to the end of the line

## Example
```
/**
 * @LRDenum status pending|approved|rejected Review state of the order
 */
```

A later definition of the same field replaces the earlier one.
"#
        }
        TagKind::Deprecated => {
            r#"# @LRDdeprecated

Mark the endpoint as deprecated.

## Syntax
```
@LRDdeprecated [MESSAGE]
```

## Parameters
- `MESSAGE`: Optional notice up to the end of the line.
  Defaults to "This endpoint is deprecated".

## Example
```
/**
 * @LRDdeprecated Use /api/v2/users instead
 */
```
"#
        }
    }
}

/// Get a short summary for an annotation
pub fn get_annotation_summary(kind: TagKind) -> &'static str {
    match kind {
        TagKind::Response => "Document a success response body for a status code",
        TagKind::Example => "Provide a named request body example",
        TagKind::Error => "Document an error response body for a status code",
        TagKind::Enum => "List the allowed values of a request field",
        TagKind::Deprecated => "Mark the endpoint as deprecated",
    }
}

/// Markdown hover text for a status code
pub fn get_status_code_documentation(code: u16) -> String {
    let class = match code {
        100..=199 => "Informational",
        200..=299 => "Success",
        300..=399 => "Redirection",
        400..=499 => "Client error",
        _ => "Server error",
    };

    format!(
        "**{code} {}**\n\n{class} response",
        status_description(code)
    )
}
