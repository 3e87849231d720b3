//! Argument coercion.
//!
//! Turns the raw value fields of a directive into typed [`Value`]s. Every
//! field of a line is coerced before any handler runs, so a bad field leaves
//! the record untouched.

use crate::codec::Codec;
use crate::tables::{COLOURS, ColourTable, FlagTable, SymbolTable};
use crate::{ArgKind, ArgSpec, Args, ErrorKind, Value};

/// Separator between names in a flag list.
pub const FLAG_SEPARATOR: char = '|';

/// Coerce `fields` (already split, one per present argument) against `specs`.
pub(crate) fn coerce_all(specs: &[ArgSpec], fields: &[&str], codec: &dyn Codec) -> Result<Args, ErrorKind> {
    let mut args = Args::with_capacity(fields.len());
    for (spec, raw) in specs.iter().zip(fields) {
        args.push(spec.name, coerce(spec.kind, raw, codec)?);
    }
    Ok(args)
}

/// Coerce one raw field.
pub fn coerce(kind: ArgKind, raw: &str, codec: &dyn Codec) -> Result<Value, ErrorKind> {
    match kind {
        ArgKind::Text => Ok(Value::Text(raw.to_string())),
        ArgKind::Int => parse_int(raw).map(Value::Int),
        ArgKind::Glyph => parse_glyph(raw, codec).map(Value::Glyph),
        ArgKind::Colour => parse_colour(raw, &COLOURS).map(Value::Colour),
        ArgKind::Flags(table) => parse_flags(raw, table).map(Value::Flags),
        ArgKind::Symbol(table) => parse_symbol(raw, table).map(Value::Symbol),
    }
}

/// Base-10 signed integer; surrounding whitespace is ignored.
pub fn parse_int(raw: &str) -> Result<i32, ErrorKind> {
    raw.trim().parse::<i32>().map_err(|_| ErrorKind::BadValue)
}

/// Exactly one codepoint, or `None` for an empty field.
pub fn parse_glyph(raw: &str, codec: &dyn Codec) -> Result<Option<char>, ErrorKind> {
    if raw.is_empty() {
        return Ok(None);
    }
    codec.decode_one(raw.as_bytes()).map(Some)
}

pub fn parse_colour(raw: &str, table: &ColourTable) -> Result<u8, ErrorKind> {
    table.lookup(raw).ok_or(ErrorKind::InvalidColour)
}

/// OR together the bits of every `|`-separated name in `raw`.
///
/// An empty (or all-whitespace) list yields no bits. Inside a non-empty list
/// every token must name a flag: a stray separator (`LOS |`, `LOS || WALL`)
/// leaves an empty token, which fails with `InvalidFlag` like any unknown
/// name. All names are checked before anything is returned, so a failing
/// list contributes nothing.
pub fn parse_flags(raw: &str, table: &FlagTable) -> Result<u64, ErrorKind> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    raw.split(FLAG_SEPARATOR).map(str::trim).try_fold(0u64, |bits, name| {
        table.get(name).map(|flag| bits | flag).ok_or_else(|| {
            log::debug!("unknown {} flag {:?}", table.kind(), name);
            ErrorKind::InvalidFlag
        })
    })
}

pub fn parse_symbol(raw: &str, table: &SymbolTable) -> Result<u32, ErrorKind> {
    let name = raw.trim();
    table.code(name).ok_or_else(|| {
        log::debug!("unknown {} symbol {:?}", table.kind(), name);
        ErrorKind::InvalidFlag
    })
}

/// Append `text` to a text field with no separator; an empty field takes
/// `text` as its value.
pub fn append_text(field: &mut Option<String>, text: &str) {
    match field {
        Some(existing) => existing.push_str(text),
        None => *field = Some(text.to_string()),
    }
}
