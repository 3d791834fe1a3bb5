//! Rendering of JSON trees and strings as source literals of the target languages.

use serde_json::Value;

/// Pretty-printed JSON, as sent on the wire
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Indent every line but the first by `spaces`
pub fn indent_continuation(text: &str, spaces: usize) -> String {
    let indent = " ".repeat(spaces);
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single-quoted string for JavaScript and Python sources
pub fn single_quoted(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}

/// Single-quoted PHP string; only `\\` and `\'` are escapes there, newlines stay raw
pub fn php_quoted(text: &str) -> String {
    format!("'{}'", text.replace('\\', r"\\").replace('\'', r"\'"))
}

/// Single-quoted shell word; embedded quotes close, escape and reopen the quoting
pub fn shell_quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// PHP short-array literal
pub fn php_literal(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let inner = " ".repeat(indent + 4);

    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => php_quoted(s),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let body: String = items
                .iter()
                .map(|item| format!("{inner}{},\n", php_literal(item, indent + 4)))
                .collect();
            format!("[\n{body}{pad}]")
        }
        Value::Object(map) if map.is_empty() => "[]".to_string(),
        Value::Object(map) => {
            let body: String = map
                .iter()
                .map(|(key, item)| {
                    format!(
                        "{inner}{} => {},\n",
                        php_quoted(key),
                        php_literal(item, indent + 4)
                    )
                })
                .collect();
            format!("[\n{body}{pad}]")
        }
    }
}

/// Python literal (dict/list/str/int/float/bool/None)
pub fn python_literal(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let inner = " ".repeat(indent + 4);

    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        // JSON string escapes are valid Python string escapes
        Value::String(s) => Value::String(s.clone()).to_string(),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let body = items
                .iter()
                .map(|item| format!("{inner}{}", python_literal(item, indent + 4)))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("[\n{body}\n{pad}]")
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let body = map
                .iter()
                .map(|(key, item)| {
                    format!(
                        "{inner}{}: {}",
                        Value::String(key.clone()),
                        python_literal(item, indent + 4)
                    )
                })
                .collect::<Vec<_>>()
                .join(",\n");
            format!("{{\n{body}\n{pad}}}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indents_continuation_lines_only() {
        assert_eq!(indent_continuation("{\n  \"a\": 1\n}", 2), "{\n    \"a\": 1\n  }");
        assert_eq!(indent_continuation("single", 4), "single");
    }

    #[test]
    fn quotes_for_source_languages() {
        assert_eq!(single_quoted("it's"), r"'it\'s'");
        assert_eq!(single_quoted(r"C:\tmp"), r"'C:\\tmp'");
    }

    #[test]
    fn php_strings_keep_newlines_raw() {
        assert_eq!(php_quoted("line1\nline2"), "'line1\nline2'");
        assert_eq!(php_quoted(r"it's C:\tmp"), r"'it\'s C:\\tmp'");
        assert_eq!(
            php_literal(&json!({"body": "line1\nline2"}), 0),
            "[\n    'body' => 'line1\nline2',\n]"
        );
    }

    #[test]
    fn quotes_for_shell() {
        assert_eq!(shell_quoted("it's"), r"'it'\''s'");
        assert_eq!(shell_quoted("plain"), "'plain'");
    }

    #[test]
    fn renders_php_arrays() {
        let value = json!({"name": "O'Brien", "tags": ["a", 1], "active": true, "meta": null});
        assert_eq!(
            php_literal(&value, 0),
            "[\n    'name' => 'O\\'Brien',\n    'tags' => [\n        'a',\n        1,\n    ],\n    'active' => true,\n    'meta' => null,\n]"
        );
        assert_eq!(php_literal(&json!({}), 0), "[]");
    }

    #[test]
    fn renders_python_literals() {
        let value = json!({"ok": false, "missing": null, "items": [1.5], "name": "Zoë"});
        assert_eq!(
            python_literal(&value, 0),
            "{\n    \"ok\": False,\n    \"missing\": None,\n    \"items\": [\n        1.5\n    ],\n    \"name\": \"Zoë\"\n}"
        );
        assert_eq!(python_literal(&json!([]), 0), "[]");
    }
}
