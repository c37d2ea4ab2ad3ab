//! The block-style YAML subset this crate reads and writes.
//!
//! This module is documentation only: it pins down exactly which textual
//! forms the serializer produces and the parser understands. The subset is
//! the block style the serializer emits plus common hand-authored block
//! YAML; it is deliberately not YAML 1.2.
//!
//! # Mappings
//!
//! One `key: value` line per entry; a container value moves to its own block
//! one indent unit (default two spaces) deeper:
//!
//! ```text
//! name: Ada
//! server:
//!   host: localhost
//!   port: 8080
//! ```
//!
//! Lines are split at the **first** colon: in `url: http://x.com` the value
//! is everything after the first colon, trimmed. Keys are taken verbatim;
//! quoted keys containing colons are not special-cased.
//!
//! # Sequences
//!
//! One `- item` line per element. A container element carries its first line
//! inline after the dash, with continuation lines aligned underneath:
//!
//! ```text
//! items:
//!   - id: 1
//!     name: widget
//!   - id: 2
//! ```
//!
//! # Scalars
//!
//! | Kind    | Forms                                        |
//! |---------|----------------------------------------------|
//! | Null    | empty value, `null`, `~`                     |
//! | Boolean | `true`, `false` (exact, lowercase)           |
//! | Number  | `-?digits` or `-?digits.digits`              |
//! | String  | anything else, optionally `"…"` / `'…'`      |
//!
//! Strings serialize unquoted unless they contain a newline, a colon, or a
//! `#`; those are double-quoted with `"` and newlines escaped. The parser
//! strips surrounding quotes but does not decode escapes.
//!
//! Empty containers are the only inline collection forms: `[]` and `{}`.
//!
//! # Comments and blank lines
//!
//! Lines that are blank after trimming, or whose first non-blank character
//! is `#`, are skipped. Trailing same-line comments are **not** recognized.
//!
//! # Known limitations
//!
//! The parser is best-effort and, by default, never fails. Constructs
//! outside the subset degrade to a partial structure rather than raising:
//!
//! - anchors, aliases, tags, and directives are treated as plain text;
//! - `---` / `...` document markers are ignored lines;
//! - non-empty flow collections (`[1, 2]`, `{a: 1}`) parse as strings or
//!   split like ordinary mapping entries;
//! - block scalars (`|`, `>`) and multi-line strings are not supported;
//! - round trips are structurally faithful only for trees the serializer
//!   itself produces, and only when strings do not need quoting and do not
//!   collide with scalar literal forms (`"true"`, `"42"`).
//!
//! [`Options::with_strict`](crate::Options::with_strict) upgrades the
//! silently ignored cases to errors with line numbers; it does not extend
//! the subset.
