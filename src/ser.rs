//! Block-style YAML serialization.
//!
//! This module renders a [`Value`] tree as indented block-style text, one
//! entry per line. Rendering is a pure recursive walk: every tree
//! serializes, so there is no error path.
//!
//! ## Layout rules
//!
//! - Scalars render as bare tokens; strings are double-quoted only when they
//!   contain a newline, a colon, or a `#`.
//! - Non-empty mappings render one `key: value` line per entry; a container
//!   value moves to its own block one level deeper under a bare `key:` line.
//! - Non-empty sequences render one `- item` line per element; a container
//!   element has its first line spliced after the dash and its remaining
//!   lines kept one level deeper, so nested content aligns under the dash
//!   continuation.
//! - Empty containers render inline as `[]` / `{}`.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use yamlite::{yaml, to_yaml};
//!
//! let doc = yaml!({"items": [{"id": 1}, {"id": 2}]});
//! assert_eq!(to_yaml(&doc), "items:\n  - id: 1\n  - id: 2");
//! ```

use crate::scalar::{needs_quoting, quote};
use crate::value::EXACT_INT_MAX;
use crate::{Map, Options, Value};

/// The block-style serializer.
///
/// Holds the formatting [`Options`]; each [`to_text`](Serializer::to_text)
/// call is independent and side-effect free.
///
/// ```rust
/// use yamlite::{yaml, Options, Serializer};
///
/// let serializer = Serializer::new(Options::new().with_indent(4));
/// let text = serializer.to_text(&yaml!({"a": {"b": 1}}));
/// assert_eq!(text, "a:\n    b: 1");
/// ```
pub struct Serializer {
    options: Options,
}

impl Serializer {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Serializer { options }
    }

    /// Renders a value tree as block-style text, without a trailing newline.
    #[must_use]
    pub fn to_text(&self, value: &Value) -> String {
        self.render(value, 0)
    }

    fn pad(&self, depth: usize) -> String {
        " ".repeat(depth * self.options.indent)
    }

    fn render(&self, value: &Value, depth: usize) -> String {
        match value {
            Value::Sequence(items) if !items.is_empty() => self.render_sequence(items, depth),
            Value::Mapping(map) if !map.is_empty() => self.render_mapping(map, depth),
            scalar => render_scalar(scalar),
        }
    }

    fn render_sequence(&self, items: &[Value], depth: usize) -> String {
        let pad = self.pad(depth);
        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            if is_block(item) {
                let block = self.render(item, depth + 1);
                // splice the first line in after the dash; the rest stays one
                // level deeper so it lines up under the dash continuation
                match block.split_once('\n') {
                    Some((first, rest)) => {
                        lines.push(format!("{}- {}", pad, first.trim_start()));
                        lines.push(rest.to_string());
                    }
                    None => lines.push(format!("{}- {}", pad, block.trim_start())),
                }
            } else {
                lines.push(format!("{}- {}", pad, render_scalar(item)));
            }
        }
        lines.join("\n")
    }

    fn render_mapping(&self, map: &Map, depth: usize) -> String {
        let pad = self.pad(depth);
        let mut lines = Vec::with_capacity(map.len());
        for (key, value) in map {
            if is_block(value) {
                lines.push(format!("{}{}:", pad, key));
                lines.push(self.render(value, depth + 1));
            } else {
                lines.push(format!("{}{}: {}", pad, key, render_scalar(value)));
            }
        }
        lines.join("\n")
    }
}

/// A value that needs its own indented block (a non-empty container).
fn is_block(value: &Value) -> bool {
    match value {
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        _ => false,
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => {
            if needs_quoting(s) {
                quote(s)
            } else {
                s.clone()
            }
        }
        // only empty containers reach here
        Value::Sequence(_) => "[]".to_string(),
        Value::Mapping(_) => "{}".to_string(),
    }
}

/// Canonical decimal text: whole numbers drop the fractional part, other
/// finite numbers use the shortest round-trip form, non-finite numbers have
/// no textual form and fall back to `null`.
fn format_number(n: f64) -> String {
    if !n.is_finite() {
        "null".to_string()
    } else if n.fract() == 0.0 && n.abs() <= EXACT_INT_MAX {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}
