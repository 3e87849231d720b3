//! Schema assembly and keyword indexing.
//!
//! A [`Schema`] is the static side of the engine: the ordered directive list
//! for one entity kind plus a keyword index built once at construction.
//!
//! ## Invariants
//!
//! - Keywords are unique and match `[a-z][a-z0-9_-]*`, so they can never
//!   contain the field delimiter.
//! - Exactly one directive has a [`Handler::Header`](crate::Handler::Header); its keyword is the
//!   header keyword.
//! - A free-text argument can only be last (it takes the rest of the line),
//!   and required arguments never follow optional ones.
//! - `index` values are positions in `directives`; both are fixed after
//!   construction.

use crate::{ArgKind, DirectiveSpec, SchemaError};
use std::collections::HashMap;

/// The recognised directives for one entity kind.
#[derive(Debug)]
pub struct Schema<R> {
    name: &'static str,
    directives: Vec<DirectiveSpec<R>>,
    index: HashMap<&'static str, usize>,
    header: usize,
}

impl<R> Schema<R> {
    /// Validate `directives` and index them by keyword.
    pub fn new(name: &'static str, directives: Vec<DirectiveSpec<R>>) -> Result<Self, SchemaError> {
        let mut index = HashMap::with_capacity(directives.len());
        let mut header: Option<usize> = None;

        for (id, spec) in directives.iter().enumerate() {
            if !regex!(r"^[a-z][a-z0-9_-]*$").is_match(spec.keyword) {
                return Err(SchemaError::InvalidKeyword(spec.keyword));
            }
            if index.insert(spec.keyword, id).is_some() {
                return Err(SchemaError::DuplicateKeyword(spec.keyword));
            }
            if spec.is_header() {
                if let Some(first) = header {
                    return Err(SchemaError::MultipleHeaders {
                        first: directives[first].keyword,
                        second: spec.keyword,
                    });
                }
                header = Some(id);
            }
            check_args(spec)?;
        }

        let header = header.ok_or(SchemaError::NoHeader)?;
        log::debug!("schema `{}`: {} directives, header `{}`", name, directives.len(), directives[header].keyword);

        Ok(Schema { name, directives, index, header })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Keyword of the directive that starts a record.
    pub fn header_keyword(&self) -> &'static str {
        self.directives[self.header].keyword
    }

    pub fn get(&self, keyword: &str) -> Option<&DirectiveSpec<R>> {
        self.index.get(keyword).map(|&id| &self.directives[id])
    }
}

fn check_args<R>(spec: &DirectiveSpec<R>) -> Result<(), SchemaError> {
    let mut seen_optional = false;
    for (pos, arg) in spec.args.iter().enumerate() {
        if pos > 0 && matches!(spec.args[pos - 1].kind, ArgKind::Text) {
            return Err(SchemaError::ArgumentAfterText { keyword: spec.keyword, arg: arg.name });
        }
        if seen_optional && !arg.optional {
            return Err(SchemaError::RequiredAfterOptional { keyword: spec.keyword, arg: arg.name });
        }
        seen_optional |= arg.optional;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArgSpec, Args, ErrorKind};

    #[derive(Debug, Default)]
    struct Thing {
        name: String,
        size: i32,
    }

    fn new_thing(args: &Args) -> Result<Thing, ErrorKind> {
        Ok(Thing { name: args.text("name")?.to_string(), ..Thing::default() })
    }

    fn set_size(thing: &mut Thing, args: &Args) -> Result<(), ErrorKind> {
        thing.size = args.int("size")?;
        Ok(())
    }

    fn name_directive() -> DirectiveSpec<Thing> {
        directive! { keyword: "name", args: [ArgSpec::text("name")], header: new_thing }
    }

    fn size_directive() -> DirectiveSpec<Thing> {
        directive! { keyword: "size", args: [ArgSpec::int("size")], field: set_size }
    }

    #[test]
    fn indexes_keywords_and_header() {
        let schema = Schema::new("thing", vec![name_directive(), size_directive()]).unwrap();
        assert_eq!(schema.name(), "thing");
        assert_eq!(schema.header_keyword(), "name");
        assert!(schema.get("size").is_some());
        assert!(schema.get("Size").is_none());
        assert!(schema.get("name").is_some_and(|d| d.is_header()));
        assert!(schema.get("size").is_some_and(|d| !d.is_header()));
    }

    #[test]
    fn handlers_read_arguments_by_name() {
        let mut args = Args::default();
        args.push("name", crate::Value::Text("Rock".to_string()));
        args.push("size", crate::Value::Int(4));

        let mut thing = new_thing(&args).unwrap();
        set_size(&mut thing, &args).unwrap();
        assert_eq!((thing.name.as_str(), thing.size), ("Rock", 4));
        assert_eq!(new_thing(&Args::default()).unwrap_err(), ErrorKind::MissingField);
    }

    #[test]
    fn rejects_missing_or_duplicate_headers() {
        assert_eq!(Schema::new("thing", vec![size_directive()]).unwrap_err(), SchemaError::NoHeader);

        let mut second = name_directive();
        second.keyword = "title";
        let err = Schema::new("thing", vec![name_directive(), second]).unwrap_err();
        assert_eq!(err, SchemaError::MultipleHeaders { first: "name", second: "title" });
    }

    #[test]
    fn rejects_bad_keywords() {
        let err = Schema::new("thing", vec![name_directive(), size_directive(), size_directive()]).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateKeyword("size"));

        let mut bad = size_directive();
        bad.keyword = "si:ze";
        let err = Schema::new("thing", vec![name_directive(), bad]).unwrap_err();
        assert_eq!(err, SchemaError::InvalidKeyword("si:ze"));
    }

    #[test]
    fn rejects_bad_argument_shapes() {
        let mut after_text = size_directive();
        after_text.args = vec![ArgSpec::text("note"), ArgSpec::int("size")];
        let err = Schema::new("thing", vec![name_directive(), after_text]).unwrap_err();
        assert_eq!(err, SchemaError::ArgumentAfterText { keyword: "size", arg: "size" });

        let mut after_optional = size_directive();
        after_optional.args = vec![ArgSpec::int("min").optional(), ArgSpec::int("size")];
        let err = Schema::new("thing", vec![name_directive(), after_optional]).unwrap_err();
        assert_eq!(err, SchemaError::RequiredAfterOptional { keyword: "size", arg: "size" });
    }
}
