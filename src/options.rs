//! Configuration for transcoding.
//!
//! [`Options`] controls the serializer's indentation width and the parser's
//! strictness. The defaults (2-space indent, lenient parsing) match the
//! block-style text the serializer produces and the permissive behavior the
//! parser guarantees.
//!
//! ## Examples
//!
//! ```rust
//! use yamlite::{yaml, to_yaml_with_options, Options};
//!
//! let doc = yaml!({"outer": {"inner": 1}});
//! let wide = to_yaml_with_options(&doc, Options::new().with_indent(4));
//! assert_eq!(wide, "outer:\n    inner: 1");
//! ```

/// Configuration options for serialization and parsing.
///
/// # Examples
///
/// ```rust
/// use yamlite::Options;
///
/// let options = Options::new();
/// assert_eq!(options.indent, 2);
/// assert!(!options.strict);
///
/// let strict = Options::new().with_strict(true);
/// assert!(strict.strict);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Spaces per nesting level in serializer output.
    pub indent: usize,
    /// When set, the parser reports malformed lines instead of silently
    /// degrading. Off by default: lenient, best-effort parsing is the
    /// documented contract.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent: 2,
            strict: false,
        }
    }
}

impl Options {
    /// Creates default options (2-space indent, lenient parsing).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width (number of spaces per nesting level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables strict parsing.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
