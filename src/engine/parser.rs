//! Directive dispatch and record lifecycle.
//!
//! [`Parser`] is the per-session state: the schema in use, the codec for glyph
//! fields, the record under construction and the result of the last line.
//!
//! ## Processing one line
//!
//! ```text
//! "info:9:2"
//!   │ split_directive         -> "info", Some("9:2")
//!   │ header check            -> MissingRecordHeader if no record and not a header
//!   │ schema lookup           -> UnknownDirective
//!   │ split_fields            -> ["9", "2"]     (TooFewArgs / TooManyArgs)
//!   │ coerce_all              -> Args { shopnum: 9, dig: 2 }
//!   └ handler(record, args)   -> Ok(()) or the handler's error
//! ```
//!
//! All coercion happens before the handler runs, so a failing line never
//! mutates the record.

use super::schema::Schema;
use super::split::{split_directive, split_fields};
use crate::codec::{Codec, EncodingCodec};
use crate::coerce::coerce_all;
use crate::{ErrorKind, Handler};
use once_cell::sync::Lazy;

static DEFAULT_CODEC: Lazy<EncodingCodec> = Lazy::new(EncodingCodec::utf8);

/// One parse session over a [`Schema`].
///
/// Usage: create with [`Parser::new`], feed lines to [`Parser::process`], and
/// take each completed record with [`Parser::finalize`].
pub struct Parser<'s, R> {
    schema: &'s Schema<R>,
    codec: &'s dyn Codec,
    /// Record under construction.
    record: Option<R>,
    /// Outcome of the most recent [`Parser::process`].
    last_error: Option<ErrorKind>,
}

impl<'s, R> Parser<'s, R> {
    /// Create a session that decodes glyphs as UTF-8.
    pub fn new(schema: &'s Schema<R>) -> Self {
        Self::with_codec(schema, &*DEFAULT_CODEC)
    }

    pub fn with_codec(schema: &'s Schema<R>, codec: &'s dyn Codec) -> Self {
        Parser { schema, codec, record: None, last_error: None }
    }

    pub fn schema(&self) -> &'s Schema<R> {
        self.schema
    }

    /// Feed one directive line.
    pub fn process(&mut self, line: &str) -> Result<(), ErrorKind> {
        let result = self.dispatch(line);
        self.last_error = result.err();
        result
    }

    fn dispatch(&mut self, line: &str) -> Result<(), ErrorKind> {
        let (keyword, rest) = split_directive(line);
        let is_header = keyword == self.schema.header_keyword();

        if self.record.is_none() && !is_header {
            return Err(ErrorKind::MissingRecordHeader);
        }
        if self.record.is_some() && is_header {
            return Err(ErrorKind::RecordInProgress);
        }

        let spec = self.schema.get(keyword).ok_or(ErrorKind::UnknownDirective)?;
        let fields = split_fields(rest, &spec.args)?;
        let args = coerce_all(&spec.args, &fields, self.codec)?;
        log::trace!("{} `{}` -> {:?}", self.schema.name(), keyword, args);

        match spec.handler {
            Handler::Header(start) => {
                self.record = Some(start(&args)?);
                log::debug!("{}: new record from `{}`", self.schema.name(), line);
            }
            Handler::Field(apply) => {
                let record = self.record.as_mut().ok_or(ErrorKind::MissingRecordHeader)?;
                apply(record, &args)?;
            }
        }
        Ok(())
    }

    /// Whether `line` is the schema's header directive, i.e. would start a
    /// new record.
    pub fn starts_record(&self, line: &str) -> bool {
        split_directive(line).0 == self.schema.header_keyword()
    }

    pub fn has_record(&self) -> bool {
        self.record.is_some()
    }

    /// The record under construction, if any.
    pub fn current_record(&self) -> Option<&R> {
        self.record.as_ref()
    }

    /// Hand the record under construction to the caller, leaving the session
    /// with no record.
    pub fn finalize(&mut self) -> Option<R> {
        let record = self.record.take();
        if record.is_some() {
            log::debug!("{}: record finalized", self.schema.name());
        }
        record
    }

    /// Error from the most recent line, `None` if it succeeded.
    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for Parser<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("schema", &self.schema.name())
            .field("codec", &self.codec.name())
            .field("record", &self.record)
            .field("last_error", &self.last_error)
            .finish()
    }
}
