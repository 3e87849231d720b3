extern crate self as vaultfile;

#[macro_use]
mod macros;
mod api;
pub mod codec;
pub mod coerce;
mod engine;
mod error;
pub mod schemas;
pub mod tables;

pub use api::{
    Context, LoadDetails, LoadResult, LoadResultVerbose, Options, load_features, load_verbose_with, load_with,
};
pub use codec::{Codec, EncodingCodec};
pub use engine::{KeywordCount, LoadMetrics, Parser, Schema};
pub use error::{ErrorKind, LoadError, SchemaError};

use crate::tables::{FlagTable, SymbolTable};

// --- Directive shapes --------------------------------------------------------

/// Delimiter between a keyword and its values, and between values.
pub const DELIMITER: char = ':';

/// How a raw value field is coerced before a handler sees it.
#[derive(Debug, Clone, Copy)]
pub enum ArgKind {
    /// Verbatim text. A trailing text argument also takes any delimiters
    /// left on the line.
    Text,
    /// Base-10 signed integer.
    Int,
    /// A single codepoint, decoded through the session's codec. An empty
    /// field means "keep the current glyph".
    Glyph,
    /// A colour name or colour letter.
    Colour,
    /// `|`-separated flag names from the given table.
    Flags(&'static FlagTable),
    /// One symbol name from the given table.
    Symbol(&'static SymbolTable),
}

/// One declared argument of a directive.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    /// Optional arguments may be left off the end of the line.
    pub optional: bool,
}

impl ArgSpec {
    pub const fn new(name: &'static str, kind: ArgKind) -> Self {
        ArgSpec { name, kind, optional: false }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, ArgKind::Text)
    }

    pub const fn int(name: &'static str) -> Self {
        Self::new(name, ArgKind::Int)
    }

    pub const fn glyph(name: &'static str) -> Self {
        Self::new(name, ArgKind::Glyph)
    }

    pub const fn colour(name: &'static str) -> Self {
        Self::new(name, ArgKind::Colour)
    }

    pub const fn flags(name: &'static str, table: &'static FlagTable) -> Self {
        Self::new(name, ArgKind::Flags(table))
    }

    pub const fn symbol(name: &'static str, table: &'static SymbolTable) -> Self {
        Self::new(name, ArgKind::Symbol(table))
    }

    /// Mark the argument as optional.
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A coerced argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i32),
    /// `None` for an empty glyph field.
    Glyph(Option<char>),
    Colour(u8),
    /// OR of every named flag's bits.
    Flags(u64),
    Symbol(u32),
}

/// Coerced arguments handed to a directive handler, addressed by name.
///
/// Accessors fail with [`ErrorKind::MissingField`] when the argument is
/// absent (an optional argument left off the line) or has another kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    values: Vec<(&'static str, Value)>,
}

impl Args {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Args { values: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: Value) {
        self.values.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn text(&self, name: &str) -> Result<&str, ErrorKind> {
        match self.get(name) {
            Some(Value::Text(s)) => Ok(s),
            _ => Err(ErrorKind::MissingField),
        }
    }

    pub fn int(&self, name: &str) -> Result<i32, ErrorKind> {
        match self.get(name) {
            Some(Value::Int(n)) => Ok(*n),
            _ => Err(ErrorKind::MissingField),
        }
    }

    pub fn glyph(&self, name: &str) -> Result<Option<char>, ErrorKind> {
        match self.get(name) {
            Some(Value::Glyph(c)) => Ok(*c),
            _ => Err(ErrorKind::MissingField),
        }
    }

    pub fn colour(&self, name: &str) -> Result<u8, ErrorKind> {
        match self.get(name) {
            Some(Value::Colour(c)) => Ok(*c),
            _ => Err(ErrorKind::MissingField),
        }
    }

    pub fn flags(&self, name: &str) -> Result<u64, ErrorKind> {
        match self.get(name) {
            Some(Value::Flags(bits)) => Ok(*bits),
            _ => Err(ErrorKind::MissingField),
        }
    }

    pub fn symbol(&self, name: &str) -> Result<u32, ErrorKind> {
        match self.get(name) {
            Some(Value::Symbol(code)) => Ok(*code),
            _ => Err(ErrorKind::MissingField),
        }
    }
}

/// What a directive does once its arguments are coerced.
pub enum Handler<R> {
    /// Start a new record. Only the schema's header directive has one.
    Header(fn(&Args) -> Result<R, ErrorKind>),
    /// Mutate the record under construction.
    Field(fn(&mut R, &Args) -> Result<(), ErrorKind>),
}

impl<R> Clone for Handler<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Handler<R> {}

/// A recognised directive: keyword, argument shape and handler.
pub struct DirectiveSpec<R> {
    pub keyword: &'static str,
    pub args: Vec<ArgSpec>,
    pub handler: Handler<R>,
}

impl<R> DirectiveSpec<R> {
    pub fn is_header(&self) -> bool {
        matches!(self.handler, Handler::Header(_))
    }
}

impl<R> std::fmt::Debug for DirectiveSpec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handler = match self.handler {
            Handler::Header(_) => "<header>",
            Handler::Field(_) => "<field>",
        };
        f.debug_struct("DirectiveSpec")
            .field("keyword", &self.keyword)
            .field("args", &self.args)
            .field("handler", &handler)
            .finish()
    }
}
