//! # yamlite
//!
//! A bidirectional transcoder between JSON text and a block-style YAML
//! subset, built on a shared ordered value model.
//!
//! ## What it does
//!
//! Two purely functional components operate over one [`Value`] tree:
//!
//! - the **serializer** renders a tree as indented block-style text, one
//!   entry per line;
//! - the **parser** reconstructs a tree from such text, line by line, using
//!   an explicit indentation stack.
//!
//! JSON is handled by `serde_json` through `Value`'s serde implementations,
//! so mapping key order and sequence order survive a full round trip.
//!
//! ## Quick start
//!
//! ```rust
//! use yamlite::{json_to_yaml, yaml_to_json};
//!
//! let yaml = json_to_yaml(r#"{"name":"Ada","active":true}"#).unwrap();
//! assert_eq!(yaml, "name: Ada\nactive: true");
//!
//! let json = yaml_to_json("name: Ada\nactive: true").unwrap();
//! assert_eq!(json, "{\n  \"name\": \"Ada\",\n  \"active\": true\n}");
//! ```
//!
//! Or work with the value model directly:
//!
//! ```rust
//! use yamlite::{yaml, to_yaml, from_yaml};
//!
//! let doc = yaml!({"items": [{"id": 1}, {"id": 2}]});
//! let text = to_yaml(&doc);
//! assert_eq!(text, "items:\n  - id: 1\n  - id: 2");
//! assert_eq!(from_yaml(&text), doc);
//! ```
//!
//! ## Error behavior
//!
//! The JSON direction fails on syntactically invalid JSON, carrying the
//! decoder's message verbatim. The YAML direction is lenient by default and
//! never fails: unsupported constructs degrade to a best-effort partial
//! structure (see [`format`] for the exact subset). Strict parsing is
//! available behind [`Options::with_strict`].
//!
//! ## Scope
//!
//! Not a YAML 1.2 implementation: no anchors, aliases, tags, multi-document
//! streams, or non-empty flow collections. The supported subset is what the
//! serializer produces plus common hand-authored block YAML.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod scalar;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use error::{Error, Result};
pub use map::Map;
pub use options::Options;
pub use ser::Serializer;
pub use value::Value;

/// Which way [`convert`] transcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Parse JSON text, render block-style YAML.
    JsonToYaml,
    /// Parse block-style YAML, render pretty-printed JSON.
    YamlToJson,
}

/// Renders a [`Value`] tree as block-style YAML text.
///
/// # Examples
///
/// ```rust
/// use yamlite::{yaml, to_yaml};
///
/// let doc = yaml!({"name": "Ada"});
/// assert_eq!(to_yaml(&doc), "name: Ada");
/// ```
#[must_use]
pub fn to_yaml(value: &Value) -> String {
    to_yaml_with_options(value, Options::default())
}

/// Renders a [`Value`] tree as block-style YAML text with custom options.
#[must_use]
pub fn to_yaml_with_options(value: &Value, options: Options) -> String {
    Serializer::new(options).to_text(value)
}

/// Parses block-style YAML text into a [`Value`] tree.
///
/// Lenient: never fails. Malformed or unsupported constructs degrade to a
/// best-effort partial structure; a document with no recognizable structure
/// collapses to a single scalar.
///
/// # Examples
///
/// ```rust
/// use yamlite::{from_yaml, yaml};
///
/// assert_eq!(from_yaml("nums:\n  - 3\n  - 1"), yaml!({"nums": [3, 1]}));
/// assert_eq!(from_yaml("42"), yaml!(42));
/// ```
#[must_use]
pub fn from_yaml(input: &str) -> Value {
    // the lenient parser has no failure paths
    Parser::new(Options::default())
        .parse(input)
        .unwrap_or_default()
}

/// Parses block-style YAML text with custom options.
///
/// # Errors
///
/// Only with [`Options::with_strict`]: tab indentation, unrecognized lines,
/// or items attached to a container of the wrong kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_yaml_with_options(input: &str, options: Options) -> Result<Value> {
    Parser::new(options).parse(input)
}

/// Converts JSON text to block-style YAML text.
///
/// # Examples
///
/// ```rust
/// use yamlite::json_to_yaml;
///
/// let yaml = json_to_yaml(r#"{"items":[{"id":1},{"id":2}]}"#).unwrap();
/// assert_eq!(yaml, "items:\n  - id: 1\n  - id: 2");
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`] when the input is not valid JSON; the underlying
/// decoder's message (with position information) is preserved.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn json_to_yaml(input: &str) -> Result<String> {
    json_to_yaml_with_options(input, Options::default())
}

/// Converts JSON text to block-style YAML text with custom options.
///
/// # Errors
///
/// Returns [`Error::Json`] when the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn json_to_yaml_with_options(input: &str, options: Options) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;
    Ok(to_yaml_with_options(&value, options))
}

/// Converts block-style YAML text to pretty-printed JSON text (2-space
/// indent).
///
/// # Examples
///
/// ```rust
/// use yamlite::yaml_to_json;
///
/// let json = yaml_to_json("nums:\n  - 3\n  - 1").unwrap();
/// assert_eq!(json, "{\n  \"nums\": [\n    3,\n    1\n  ]\n}");
/// ```
///
/// # Errors
///
/// With default options, none in practice: lenient parsing cannot fail and
/// every tree encodes as JSON. Strict options surface parse errors.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn yaml_to_json(input: &str) -> Result<String> {
    yaml_to_json_with_options(input, Options::default())
}

/// Converts block-style YAML text to pretty-printed JSON text with custom
/// options.
///
/// # Errors
///
/// Strict options surface parse errors; see [`from_yaml_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn yaml_to_json_with_options(input: &str, options: Options) -> Result<String> {
    let value = Parser::new(options).parse(input)?;
    serde_json::to_string_pretty(&value).map_err(Error::from)
}

/// Converts between JSON and block-style YAML in the given [`Direction`].
///
/// This is the single entry point a host front end needs: it takes the raw
/// input text and a direction flag, and returns either the output text or a
/// structured error.
///
/// # Examples
///
/// ```rust
/// use yamlite::{convert, Direction};
///
/// let yaml = convert(r#"{"a":1}"#, Direction::JsonToYaml).unwrap();
/// assert_eq!(yaml, "a: 1");
///
/// assert!(convert(r#"{"a":}"#, Direction::JsonToYaml).is_err());
/// ```
///
/// # Errors
///
/// [`Error::Json`] for invalid JSON input in the JSON-to-YAML direction;
/// the YAML-to-JSON direction is lenient and does not fail with default
/// options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn convert(input: &str, direction: Direction) -> Result<String> {
    convert_with_options(input, direction, Options::default())
}

/// [`convert`] with custom options.
///
/// # Errors
///
/// As [`convert`]; strict options additionally surface YAML parse errors.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn convert_with_options(input: &str, direction: Direction, options: Options) -> Result<String> {
    match direction {
        Direction::JsonToYaml => json_to_yaml_with_options(input, options),
        Direction::YamlToJson => yaml_to_json_with_options(input, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_then_parse_is_identity() {
        let doc = yaml!({
            "name": "Ada",
            "active": true,
            "scores": [3, 1, 2],
            "meta": {"depth": 2}
        });
        assert_eq!(from_yaml(&to_yaml(&doc)), doc);
    }

    #[test]
    fn convert_both_directions() {
        let json = r#"{"name":"Ada","active":true}"#;
        let yaml = convert(json, Direction::JsonToYaml).unwrap();
        assert_eq!(yaml, "name: Ada\nactive: true");

        let back = convert(&yaml, Direction::YamlToJson).unwrap();
        let a: serde_json::Value = serde_json::from_str(json).unwrap();
        let b: serde_json::Value = serde_json::from_str(&back).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = convert(r#"{"a":}"#, Direction::JsonToYaml).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn value_display_is_block_yaml() {
        let doc = yaml!({"a": 1});
        assert_eq!(doc.to_string(), "a: 1");
    }
}
