//! Block-style YAML parsing.
//!
//! This module reconstructs a [`Value`] tree from indented block-style text.
//! The parser is line oriented: each physical line is classified as blank,
//! comment, sequence item, or mapping entry, and nesting is recovered from
//! leading whitespace with an explicit stack of [`ParseFrame`]s.
//!
//! ## Frame stack
//!
//! Each frame records the in-progress container, the indentation column of
//! the line that opened it, and how the finished container joins its parent
//! (document root, under a pending mapping key, or appended as a sequence
//! element). A line at column `n` first pops every frame whose recorded
//! indent is `>= n`; the surviving top frame is the container the line
//! belongs to. Document-root frames record a sentinel indent of `-1`, so
//! sibling lines at column 0 never pop them.
//!
//! ## Leniency
//!
//! By default the parser never fails: unsupported constructs (multi-document
//! markers, flow collections beyond empty `[]`/`{}`, multi-line scalars)
//! degrade to a best-effort partial structure rather than raising. This is
//! the documented contract, not an accident. Setting
//! [`Options::with_strict`](crate::Options::with_strict) turns the silently
//! ignored cases into [`Error::Parse`] reports with line numbers.
//!
//! ## Usage
//!
//! ```rust
//! use yamlite::{from_yaml, yaml};
//!
//! let doc = from_yaml("name: Ada\nactive: true");
//! assert_eq!(doc, yaml!({"name": "Ada", "active": true}));
//! ```

use crate::scalar::{classify, unquote};
use crate::{Error, Map, Options, Result, Value};

/// Sentinel indent for document-root frames, below any real column.
const ROOT_INDENT: isize = -1;

/// The block-style parser.
///
/// Holds the parsing [`Options`]; each [`parse`](Parser::parse) call
/// allocates its own frame stack and tree, so a `Parser` is freely reusable.
pub struct Parser {
    options: Options,
}

impl Parser {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Parser { options }
    }

    /// Parses block-style text into a [`Value`] tree.
    ///
    /// With default (lenient) options this never returns an error; documents
    /// with no recognizable structure collapse to a single scalar.
    ///
    /// # Errors
    ///
    /// In strict mode only: tab characters in indentation, lines that match
    /// no production, and items attached to a container of the wrong kind.
    pub fn parse(&self, input: &str) -> Result<Value> {
        let mut run = ParseRun {
            stack: Vec::new(),
            root: None,
            strict: self.options.strict,
            line_no: 0,
        };
        for raw in input.lines() {
            run.line_no += 1;
            run.line(raw)?;
        }
        run.finish(input)
    }
}

/// How a finished container joins its parent when its frame is popped.
enum Attach {
    /// Becomes the document root.
    Root,
    /// Inserted into the parent mapping under this pending key.
    Key(String),
    /// Appended to the parent sequence.
    Element,
}

/// An in-progress container. `Pending` is the deferred-value placeholder: a
/// `key:` line (or bare `-`) opens one, and the first deeper line
/// discriminates it into a mapping or sequence. Left undiscriminated, it
/// resolves to null.
enum Container {
    Pending,
    Sequence(Vec<Value>),
    Mapping(Map),
}

impl Container {
    fn into_value(self) -> Value {
        match self {
            Container::Pending => Value::Null,
            Container::Sequence(items) => Value::Sequence(items),
            Container::Mapping(map) => Value::Mapping(map),
        }
    }
}

/// One level of open nesting.
struct ParseFrame {
    /// Indent column of the line that opened this container (`ROOT_INDENT`
    /// for the document root).
    indent: isize,
    container: Container,
    attach: Attach,
}

/// Per-call parser state: the frame stack and the finished root.
struct ParseRun {
    stack: Vec<ParseFrame>,
    root: Option<Value>,
    strict: bool,
    line_no: usize,
}

impl ParseRun {
    fn line(&mut self, raw: &str) -> Result<()> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }
        let indent = leading_whitespace(raw);
        if self.strict && raw[..indent].contains('\t') {
            return Err(Error::parse(self.line_no, "tab character in indentation"));
        }
        self.pop_outdented(indent as isize);
        self.content(indent as isize, trimmed)
    }

    /// The one pop predicate: a line at `indent` closes every container
    /// opened at that column or deeper.
    fn pop_outdented(&mut self, indent: isize) {
        while self.stack.last().map_or(false, |f| f.indent >= indent) {
            self.pop_frame();
        }
    }

    /// Closes the top frame and attaches its finished value to the parent.
    fn pop_frame(&mut self) {
        if let Some(frame) = self.stack.pop() {
            let value = frame.container.into_value();
            match frame.attach {
                Attach::Root => self.root = Some(value),
                Attach::Key(key) => {
                    if let Some(ParseFrame {
                        container: Container::Mapping(map),
                        ..
                    }) = self.stack.last_mut()
                    {
                        map.insert(key, value);
                    }
                }
                Attach::Element => {
                    if let Some(ParseFrame {
                        container: Container::Sequence(items),
                        ..
                    }) = self.stack.last_mut()
                    {
                        items.push(value);
                    }
                }
            }
        }
    }

    /// Dispatches a trimmed line (or a dash remainder re-processed at a
    /// virtual indent) to the sequence-item or mapping-entry production.
    fn content(&mut self, indent: isize, trimmed: &str) -> Result<()> {
        if trimmed == "-" || trimmed.starts_with("- ") {
            return self.sequence_item(indent, trimmed);
        }
        if trimmed.contains(':') {
            return self.mapping_entry(indent, trimmed);
        }
        // a lone line with no structure may still be a scalar document
        if self.strict && !self.stack.is_empty() {
            return Err(Error::parse(
                self.line_no,
                format!("unrecognized line: {}", trimmed),
            ));
        }
        Ok(())
    }

    fn sequence_item(&mut self, indent: isize, trimmed: &str) -> Result<()> {
        match self.stack.last_mut() {
            Some(frame) => match frame.container {
                Container::Pending => frame.container = Container::Sequence(Vec::new()),
                Container::Sequence(_) => {}
                Container::Mapping(_) => {
                    if self.strict {
                        return Err(Error::parse(
                            self.line_no,
                            "sequence item where a mapping entry was expected",
                        ));
                    }
                    return Ok(());
                }
            },
            None => self.stack.push(ParseFrame {
                indent: ROOT_INDENT,
                container: Container::Sequence(Vec::new()),
                attach: Attach::Root,
            }),
        }

        let rest = trimmed[1..].trim_start();
        if rest.is_empty() {
            // value deferred to deeper lines; resolves to null if none follow
            self.stack.push(ParseFrame {
                indent,
                container: Container::Pending,
                attach: Attach::Element,
            });
            return Ok(());
        }
        if opens_inline_container(rest) {
            // `- key: value` or `- - x`: the element is itself a container
            // whose first entry sits on this line; re-process the remainder
            // at the column just past the dash
            self.stack.push(ParseFrame {
                indent,
                container: Container::Pending,
                attach: Attach::Element,
            });
            return self.content(indent + 2, rest);
        }
        self.append_element(classify(rest));
        Ok(())
    }

    fn mapping_entry(&mut self, indent: isize, trimmed: &str) -> Result<()> {
        match self.stack.last_mut() {
            Some(frame) => match frame.container {
                Container::Pending => frame.container = Container::Mapping(Map::new()),
                Container::Mapping(_) => {}
                Container::Sequence(_) => {
                    if self.strict {
                        return Err(Error::parse(
                            self.line_no,
                            "mapping entry where a sequence item was expected",
                        ));
                    }
                    return Ok(());
                }
            },
            None => self.stack.push(ParseFrame {
                indent: ROOT_INDENT,
                container: Container::Mapping(Map::new()),
                attach: Attach::Root,
            }),
        }

        // split at the first colon; quoted keys are not special-cased
        let (key, rhs) = match trimmed.split_once(':') {
            Some(parts) => parts,
            None => return Ok(()),
        };
        let key = key.trim().to_string();
        let rhs = rhs.trim();
        if rhs.is_empty() {
            // value deferred to deeper-indented lines
            self.stack.push(ParseFrame {
                indent,
                container: Container::Pending,
                attach: Attach::Key(key),
            });
        } else {
            self.insert_entry(key, classify(rhs));
        }
        Ok(())
    }

    fn append_element(&mut self, value: Value) {
        if let Some(ParseFrame {
            container: Container::Sequence(items),
            ..
        }) = self.stack.last_mut()
        {
            items.push(value);
        }
    }

    fn insert_entry(&mut self, key: String, value: Value) {
        if let Some(ParseFrame {
            container: Container::Mapping(map),
            ..
        }) = self.stack.last_mut()
        {
            map.insert(key, value);
        }
    }

    fn finish(mut self, input: &str) -> Result<Value> {
        while !self.stack.is_empty() {
            self.pop_frame();
        }
        match self.root {
            Some(value) => Ok(value),
            // no container was ever opened: the document is a single scalar
            None => Ok(classify(input.trim())),
        }
    }
}

/// Count of leading whitespace characters (the line's indent).
fn leading_whitespace(raw: &str) -> usize {
    raw.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// Whether a dash remainder is itself a nested entry rather than a scalar:
/// an unquoted `key: value` / `key:` opens an inline mapping element, a
/// further dash opens a nested sequence. A quoted remainder is always a
/// scalar, so `- "a: b"` stays a string.
fn opens_inline_container(rest: &str) -> bool {
    if unquote(rest).is_some() {
        return false;
    }
    rest == "-" || rest.starts_with("- ") || rest.ends_with(':') || rest.contains(": ")
}
