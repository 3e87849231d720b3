//! Glyph decoding.
//!
//! The engine never interprets glyph bytes itself. A [`Codec`] turns the raw
//! bytes of a glyph field into exactly one codepoint, which keeps character set
//! concerns in one place: a data file written for a single-byte code page can
//! be loaded by swapping the codec, without touching any schema.

use crate::ErrorKind;
use encoding_rs::Encoding;

/// Decodes the raw bytes of a glyph field into a single codepoint.
///
/// Implementations must be immutable once built so that one codec can be
/// shared by parse sessions running on different threads.
pub trait Codec: Send + Sync + std::fmt::Debug {
    /// Human readable name, used in reports.
    fn name(&self) -> &str;

    /// Decode `raw` into exactly one codepoint.
    ///
    /// Malformed input, empty input and input holding more than one
    /// codepoint all fail with [`ErrorKind::DecodingFailure`].
    fn decode_one(&self, raw: &[u8]) -> Result<char, ErrorKind>;
}

/// A [`Codec`] backed by an `encoding_rs` encoding.
#[derive(Debug, Clone, Copy)]
pub struct EncodingCodec {
    encoding: &'static Encoding,
}

impl EncodingCodec {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// The default codec.
    pub fn utf8() -> Self {
        Self::new(encoding_rs::UTF_8)
    }

    /// Look up a codec by WHATWG label (`"utf-8"`, `"latin1"`, `"windows-1252"`, ...).
    pub fn for_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.trim().as_bytes()).map(Self::new)
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

impl Default for EncodingCodec {
    fn default() -> Self {
        Self::utf8()
    }
}

impl Codec for EncodingCodec {
    fn name(&self) -> &str {
        self.encoding.name()
    }

    fn decode_one(&self, raw: &[u8]) -> Result<char, ErrorKind> {
        let decoded = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(raw)
            .ok_or(ErrorKind::DecodingFailure)?;

        let mut chars = decoded.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ErrorKind::DecodingFailure),
        }
    }
}
