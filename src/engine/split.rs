//! Line splitting.
//!
//! Splits a directive line into keyword and value fields according to the
//! argument shape of the directive. Nothing here trims: whitespace inside a
//! field is significant (free text keeps it; coercions that do not care trim
//! for themselves).
//!
//! ```text
//! "info:9:2"                 -> "info", ["9", "2"]
//! "desc:It opens: slowly."   -> "desc", ["It opens: slowly."]   (trailing text)
//! "graphics:::Light Green"   -> "graphics", [":", "Light Green"] (glyph ':')
//! "graphics::w"              -> "graphics", ["", "w"]           (glyph kept)
//! ```

use crate::{ArgKind, ArgSpec, DELIMITER, ErrorKind};

/// Split `line` at the first delimiter. `rest` is `None` when the line has no
/// delimiter at all, which is different from an empty value.
pub(crate) fn split_directive(line: &str) -> (&str, Option<&str>) {
    match line.split_once(DELIMITER) {
        Some((keyword, rest)) => (keyword, Some(rest)),
        None => (line, None),
    }
}

/// Split `rest` into one field per argument in `args`.
///
/// Missing required arguments fail with `TooFewArgs`; anything left over once
/// every argument has a field fails with `TooManyArgs`. Optional arguments
/// may be left off the end.
pub(crate) fn split_fields<'l>(rest: Option<&'l str>, args: &[ArgSpec]) -> Result<Vec<&'l str>, ErrorKind> {
    let mut fields = Vec::with_capacity(args.len());
    let mut cursor = rest;

    for (pos, arg) in args.iter().enumerate() {
        let Some(remaining) = cursor else {
            if arg.optional {
                break;
            }
            return Err(ErrorKind::TooFewArgs);
        };

        let last = pos + 1 == args.len();
        let (field, next) = match arg.kind {
            ArgKind::Text if last => (remaining, None),
            ArgKind::Glyph => take_glyph(remaining),
            _ => take_field(remaining),
        };
        fields.push(field);
        cursor = next;
    }

    if cursor.is_some() {
        return Err(ErrorKind::TooManyArgs);
    }
    Ok(fields)
}

fn take_field(s: &str) -> (&str, Option<&str>) {
    match s.split_once(DELIMITER) {
        Some((field, rest)) => (field, Some(rest)),
        None => (s, None),
    }
}

/// A glyph may itself be the delimiter: when the first character is followed
/// by a delimiter (or the end of the line) it is the whole field.
fn take_glyph(s: &str) -> (&str, Option<&str>) {
    if let Some(first) = s.chars().next() {
        let end = first.len_utf8();
        let tail = &s[end..];
        if tail.is_empty() {
            return (s, None);
        }
        if let Some(after) = tail.strip_prefix(DELIMITER) {
            return (&s[..end], Some(after));
        }
    }
    take_field(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAPHICS: &[ArgSpec] = &[ArgSpec::glyph("glyph"), ArgSpec::colour("colour")];
    const INFO: &[ArgSpec] = &[ArgSpec::int("shopnum"), ArgSpec::int("dig")];
    const DESC: &[ArgSpec] = &[ArgSpec::text("text")];

    #[test]
    fn splits_keyword_at_first_delimiter() {
        assert_eq!(split_directive("name:Test Feature"), ("name", Some("Test Feature")));
        assert_eq!(split_directive("flags:"), ("flags", Some("")));
        assert_eq!(split_directive("flags"), ("flags", None));
        assert_eq!(split_directive("info:9:2"), ("info", Some("9:2")));
    }

    #[test]
    fn arity_is_checked() {
        assert_eq!(split_fields(Some("9:2"), INFO), Ok(vec!["9", "2"]));
        assert_eq!(split_fields(Some("9"), INFO), Err(ErrorKind::TooFewArgs));
        assert_eq!(split_fields(None, INFO), Err(ErrorKind::TooFewArgs));
        assert_eq!(split_fields(Some("9:2:3"), INFO), Err(ErrorKind::TooManyArgs));
        assert_eq!(split_fields(Some("9:2:"), INFO), Err(ErrorKind::TooManyArgs));
    }

    #[test]
    fn trailing_text_keeps_delimiters_and_whitespace() {
        assert_eq!(split_fields(Some("  It opens: slowly. "), DESC), Ok(vec!["  It opens: slowly. "]));
        assert_eq!(split_fields(Some(""), DESC), Ok(vec![""]));
    }

    #[test]
    fn glyph_may_be_the_delimiter() {
        assert_eq!(split_fields(Some("::Light Green"), GRAPHICS), Ok(vec![":", "Light Green"]));
        assert_eq!(split_fields(Some(" :w"), GRAPHICS), Ok(vec![" ", "w"]));
        assert_eq!(split_fields(Some("¥:red"), GRAPHICS), Ok(vec!["¥", "red"]));
        assert_eq!(split_fields(Some(":w"), GRAPHICS), Ok(vec!["", "w"]));
        assert_eq!(split_fields(Some("ab:r"), GRAPHICS), Ok(vec!["ab", "r"]));
        assert_eq!(split_fields(Some("#"), GRAPHICS), Err(ErrorKind::TooFewArgs));
    }

    #[test]
    fn optional_arguments_may_be_absent() {
        let args = [ArgSpec::int("min"), ArgSpec::int("max").optional()];
        assert_eq!(split_fields(Some("1"), &args), Ok(vec!["1"]));
        assert_eq!(split_fields(Some("1:5"), &args), Ok(vec!["1", "5"]));

        let only_optional = [ArgSpec::text("flags").optional()];
        assert_eq!(split_fields(None, &only_optional), Ok(vec![]));
        assert_eq!(split_fields(Some(""), &only_optional), Ok(vec![""]));
    }
}
