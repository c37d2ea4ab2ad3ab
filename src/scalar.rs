//! Scalar token classification.
//!
//! Both the parser's right-hand sides (`key: value`, `- value`, bare
//! documents) and the serializer's quoting decision go through this module.
//!
//! [`classify`] maps a trimmed token to a [`Value`] by an ordered decision
//! rule; the order is the tie-break policy, so `true` is a boolean and
//! `"true"` is a string. Classification never fails: anything unrecognized
//! falls through to a verbatim string.

use crate::{Map, Value};

/// Classifies a trimmed textual token as a scalar [`Value`].
///
/// Decision order, first match wins:
///
/// 1. empty, `null`, or `~` — null
/// 2. `true` / `false` — boolean
/// 3. integer lexical form (`-?digits`) — number
/// 4. decimal lexical form (`-?digits.digits`) — number
/// 5. surrounded by matching `"` or `'` — string with the quotes stripped
///    (no escape decoding)
/// 6. `[]` — empty sequence; `{}` — empty mapping
/// 7. anything else — string, verbatim
///
/// # Examples
///
/// ```rust
/// use yamlite::{scalar::classify, Value};
///
/// assert_eq!(classify("~"), Value::Null);
/// assert_eq!(classify("true"), Value::Bool(true));
/// assert_eq!(classify("-12"), Value::Number(-12.0));
/// assert_eq!(classify("'true'"), Value::String("true".to_string()));
/// assert_eq!(classify("hello world"), Value::String("hello world".to_string()));
/// ```
#[must_use]
pub fn classify(token: &str) -> Value {
    if token.is_empty() || token == "null" || token == "~" {
        return Value::Null;
    }
    if token == "true" {
        return Value::Bool(true);
    }
    if token == "false" {
        return Value::Bool(false);
    }
    if is_integer_literal(token) || is_decimal_literal(token) {
        if let Ok(n) = token.parse::<f64>() {
            return Value::Number(n);
        }
    }
    if let Some(inner) = unquote(token) {
        return Value::String(inner.to_string());
    }
    if token == "[]" {
        return Value::Sequence(Vec::new());
    }
    if token == "{}" {
        return Value::Mapping(Map::new());
    }
    Value::String(token.to_string())
}

/// Matches `-?\d+`.
fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Matches `-?\d+\.\d+`.
fn is_decimal_literal(token: &str) -> bool {
    let body = token.strip_prefix('-').unwrap_or(token);
    match body.split_once('.') {
        Some((int, frac)) => {
            !int.is_empty()
                && !frac.is_empty()
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// If the token is wrapped in matching single or double quotes, returns the
/// content between them.
pub(crate) fn unquote(token: &str) -> Option<&str> {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return Some(&token[1..token.len() - 1]);
        }
    }
    None
}

/// Whether a string must be double-quoted when serialized, to keep the text
/// unambiguous with mapping-entry and comment syntax on re-parse.
pub(crate) fn needs_quoting(s: &str) -> bool {
    s.contains('\n') || s.contains(':') || s.contains('#')
}

/// Wraps a string in double quotes, escaping embedded quotes and newlines.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls() {
        assert_eq!(classify(""), Value::Null);
        assert_eq!(classify("null"), Value::Null);
        assert_eq!(classify("~"), Value::Null);
    }

    #[test]
    fn booleans_are_exact_literals() {
        assert_eq!(classify("true"), Value::Bool(true));
        assert_eq!(classify("false"), Value::Bool(false));
        assert_eq!(classify("True"), Value::String("True".to_string()));
        assert_eq!(classify("FALSE"), Value::String("FALSE".to_string()));
    }

    #[test]
    fn integers() {
        assert_eq!(classify("0"), Value::Number(0.0));
        assert_eq!(classify("42"), Value::Number(42.0));
        assert_eq!(classify("-7"), Value::Number(-7.0));
    }

    #[test]
    fn decimals() {
        assert_eq!(classify("3.14"), Value::Number(3.14));
        assert_eq!(classify("-0.5"), Value::Number(-0.5));
    }

    #[test]
    fn non_numbers_stay_strings() {
        // only the two lexical forms count as numbers
        assert_eq!(classify("1e5"), Value::String("1e5".to_string()));
        assert_eq!(classify(".5"), Value::String(".5".to_string()));
        assert_eq!(classify("1."), Value::String("1.".to_string()));
        assert_eq!(classify("-"), Value::String("-".to_string()));
        assert_eq!(classify("12px"), Value::String("12px".to_string()));
    }

    #[test]
    fn quoted_tokens_are_strings_with_quotes_stripped() {
        assert_eq!(classify("\"42\""), Value::String("42".to_string()));
        assert_eq!(classify("'null'"), Value::String("null".to_string()));
        assert_eq!(classify("\"a: b\""), Value::String("a: b".to_string()));
        // mismatched quotes fall through to verbatim string
        assert_eq!(classify("\"x'"), Value::String("\"x'".to_string()));
        // a lone quote is not a quoted token
        assert_eq!(classify("\""), Value::String("\"".to_string()));
    }

    #[test]
    fn empty_containers() {
        assert_eq!(classify("[]"), Value::Sequence(vec![]));
        assert_eq!(classify("{}"), Value::Mapping(Map::new()));
    }

    #[test]
    fn fallback_is_verbatim_string() {
        assert_eq!(classify("hello"), Value::String("hello".to_string()));
        assert_eq!(
            classify("http://x.com"),
            Value::String("http://x.com".to_string())
        );
        assert_eq!(classify("[1, 2]"), Value::String("[1, 2]".to_string()));
    }

    #[test]
    fn quoting_predicate_matches_the_three_triggers() {
        assert!(needs_quoting("a: b"));
        assert!(needs_quoting("a#b"));
        assert!(needs_quoting("a\nb"));
        assert!(!needs_quoting("plain"));
        assert!(!needs_quoting("with \"quotes\""));
    }

    #[test]
    fn quote_escapes_quotes_and_newlines() {
        assert_eq!(quote("a: b"), "\"a: b\"");
        assert_eq!(quote("say \"hi\"\nbye"), "\"say \\\"hi\\\"\\nbye\"");
    }
}
