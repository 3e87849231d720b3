//! Error types for directive parsing and file loading.

use thiserror::Error;

/// Classification of a failed directive.
///
/// Every failure the engine reports for a single line is one of these. Success
/// is `Ok(())`; there is no "none" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// A non-header directive arrived while no record was under construction.
    #[error("missing record header")]
    MissingRecordHeader,

    /// The header directive arrived while a record was still under construction.
    #[error("record in progress; finalize it before starting another")]
    RecordInProgress,

    /// The keyword is not part of the active schema.
    #[error("unknown directive")]
    UnknownDirective,

    /// The line carried fewer value fields than the directive requires.
    #[error("too few arguments")]
    TooFewArgs,

    /// The line carried more value fields than the directive declares.
    #[error("too many arguments")]
    TooManyArgs,

    /// A numeric field did not hold a base-10 integer.
    #[error("malformed numeric value")]
    BadValue,

    /// Neither a colour name nor a colour letter.
    #[error("invalid colour")]
    InvalidColour,

    /// A flag or symbol name is not in its table.
    #[error("invalid flag")]
    InvalidFlag,

    /// A glyph field decoded to zero or more than one codepoint.
    #[error("glyph must decode to exactly one codepoint")]
    DecodingFailure,

    /// A handler asked for an argument the line did not provide.
    #[error("missing field")]
    MissingField,
}

/// A directive failure tied to the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {kind}: {line:?}")]
pub struct LoadError {
    /// 1-based line number within the loaded text.
    pub line_number: usize,
    /// The offending line, verbatim.
    pub line: String,
    pub kind: ErrorKind,
}

/// Problems found while assembling a [`Schema`](crate::Schema).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema has no header directive")]
    NoHeader,

    #[error("schema declares more than one header directive: `{first}` and `{second}`")]
    MultipleHeaders { first: &'static str, second: &'static str },

    #[error("duplicate directive keyword `{0}`")]
    DuplicateKeyword(&'static str),

    #[error("invalid directive keyword `{0}`")]
    InvalidKeyword(&'static str),

    /// A free-text argument swallows the rest of the line, so nothing may follow it.
    #[error("directive `{keyword}` declares argument `{arg}` after trailing free text")]
    ArgumentAfterText { keyword: &'static str, arg: &'static str },

    #[error("directive `{keyword}` declares required argument `{arg}` after an optional one")]
    RequiredAfterOptional { keyword: &'static str, arg: &'static str },
}
