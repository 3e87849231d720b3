#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`DirectiveSpec`](crate::DirectiveSpec).
///
/// ```ignore
/// directive! {
///     keyword: "info",
///     args: [ArgSpec::int("shopnum"), ArgSpec::int("dig")],
///     field: parse_info,
/// }
/// ```
///
/// Use `header:` instead of `field:` for the directive that starts a record.
#[macro_export]
macro_rules! directive {
    (
        keyword: $keyword:expr,
        args: [ $($arg:expr),* $(,)? ],
        header: $handler:expr
        $(,)?
    ) => {
        $crate::DirectiveSpec { keyword: $keyword, args: vec![ $($arg),* ], handler: $crate::Handler::Header($handler) }
    };
    (
        keyword: $keyword:expr,
        args: [ $($arg:expr),* $(,)? ],
        field: $handler:expr
        $(,)?
    ) => {
        $crate::DirectiveSpec { keyword: $keyword, args: vec![ $($arg),* ], handler: $crate::Handler::Field($handler) }
    };
}

/// Define a field handler that appends a text argument to an optional text
/// field of the record.
#[macro_export]
macro_rules! text_handler {
    ($fn_name:ident, $record:ty, $field:ident, $arg:literal) => {
        fn $fn_name(record: &mut $record, args: &$crate::Args) -> Result<(), $crate::ErrorKind> {
            $crate::coerce::append_text(&mut record.$field, args.text($arg)?);
            Ok(())
        }
    };
}
