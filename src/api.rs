use crate::codec::{Codec, EncodingCodec};
use crate::engine::{KeywordCount, LoadMetrics, Loader, Schema};
use crate::LoadError;
use crate::schemas::feature::{self, Feature};
use std::sync::Arc;
use std::time::Duration;

/// Loading context.
///
/// Holds the environment a load needs beyond the text itself.
#[derive(Debug, Clone)]
pub struct Context {
    /// Decodes glyph fields.
    pub codec: Arc<dyn Codec>,
}

impl Default for Context {
    fn default() -> Self {
        Self { codec: Arc::new(EncodingCodec::utf8()) }
    }
}

/// Options that affect how a text is read.
#[derive(Debug, Clone)]
pub struct Options {
    /// Lines whose first non-blank character is this are skipped.
    pub comment_prefix: char,
    /// Stop at the first failing line. When off, failing lines are reported
    /// and skipped.
    pub stop_on_error: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { comment_prefix: '#', stop_on_error: true }
    }
}

/// Result from [`load_with`].
#[derive(Debug, Clone)]
pub struct LoadResult<R> {
    /// Finalized records, in file order.
    pub records: Vec<R>,
    /// Failing lines. At most one unless `Options::stop_on_error` is off.
    pub errors: Vec<LoadError>,
    /// Total elapsed time spent loading.
    pub elapsed: Duration,
}

impl<R> LoadResult<R> {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Additional details returned by [`load_verbose_with`].
#[derive(Debug, Clone)]
pub struct LoadDetails {
    /// Name of the schema used.
    pub schema: String,
    /// Name of the glyph codec used.
    pub codec: String,
    pub metrics: LoadMetrics,
    /// Successful directives per keyword, most frequent first.
    pub keywords: Vec<KeywordCount>,
}

/// Result from [`load_verbose_with`].
#[derive(Debug, Clone)]
pub struct LoadResultVerbose<R> {
    pub records: Vec<R>,
    pub errors: Vec<LoadError>,
    pub elapsed: Duration,
    pub details: LoadDetails,
}

/// Load terrain features from `text` with the default context and options.
///
/// Any failing line is fatal.
///
/// # Example
/// ```
/// use vaultfile::load_features;
///
/// let features = load_features("name:open floor\ngraphics:.:w\nflags:LOS | PROJECT | PASSABLE\n").unwrap();
/// assert_eq!(features[0].name, "open floor");
/// ```
pub fn load_features(text: &str) -> Result<Vec<Feature>, LoadError> {
    let mut out = load_with(feature::schema(), text, &Context::default(), &Options::default());
    match out.errors.pop() {
        Some(err) => Err(err),
        None => Ok(out.records),
    }
}

/// Load records of any schema from `text` using the provided `context`/`options`.
pub fn load_with<R>(schema: &Schema<R>, text: &str, context: &Context, options: &Options) -> LoadResult<R> {
    let run = Loader::new(schema, &*context.codec, options).run(text);
    LoadResult { records: run.records, errors: run.errors, elapsed: run.metrics.total }
}

/// Like [`load_with`], also returning counters for reports and debugging.
pub fn load_verbose_with<R>(
    schema: &Schema<R>,
    text: &str,
    context: &Context,
    options: &Options,
) -> LoadResultVerbose<R> {
    let run = Loader::new(schema, &*context.codec, options).run(text);

    let details = LoadDetails {
        schema: schema.name().to_string(),
        codec: context.codec.name().to_string(),
        keywords: run.metrics.keyword_counts(),
        metrics: run.metrics,
    };

    LoadResultVerbose { records: run.records, errors: run.errors, elapsed: details.metrics.total, details }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::schemas::feature::TerrainFlags;
    use crate::tables::{COLOUR_L_GREEN, COLOUR_WHITE};

    const SAMPLE: &str = include_str!("../data/terrain.txt");

    #[test]
    fn load_features_reads_the_sample_file() {
        let features = load_features(SAMPLE).unwrap();
        assert!(features.len() >= 5);

        let floor = &features[0];
        assert_eq!(floor.name, "open floor");
        assert_eq!(floor.glyph, '.');
        assert_eq!(floor.colour, COLOUR_WHITE);
        assert!(floor.flags.contains(TerrainFlags::LOS | TerrainFlags::PASSABLE | TerrainFlags::FLOOR));

        let lava = features.iter().find(|f| f.name == "lava").unwrap();
        assert_eq!(lava.resist_flag_name(), Some("IM_FIRE"));
        assert!(lava.walk_msg.as_deref().unwrap().ends_with("Really enter?"));
    }

    #[test]
    fn load_features_reports_the_failing_line() {
        let err = load_features("name:rock\ngraphics:#:plaid\n").unwrap_err();
        assert_eq!(err, LoadError { line_number: 2, line: "graphics:#:plaid".to_string(), kind: ErrorKind::InvalidColour });
        assert_eq!(err.to_string(), "line 2: invalid colour: \"graphics:#:plaid\"");
    }

    #[test]
    fn load_with_keeps_going_when_asked() {
        let options = Options { stop_on_error: false, ..Options::default() };
        let text = "name:moss\ngraphics:\":Light Green\nflags:SOGGY\nflags:PASSABLE\n";
        let out = load_with(feature::schema(), text, &Context::default(), &options);

        assert!(!out.is_ok());
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].kind, ErrorKind::InvalidFlag);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].colour, COLOUR_L_GREEN);
        assert_eq!(out.records[0].flags, TerrainFlags::PASSABLE);
    }

    #[test]
    fn load_verbose_includes_metrics() {
        let out = load_verbose_with(feature::schema(), SAMPLE, &Context::default(), &Options::default());

        assert!(out.errors.is_empty());
        assert_eq!(out.details.schema, "terrain");
        assert_eq!(out.details.codec, "UTF-8");
        assert_eq!(out.elapsed, out.details.metrics.total);
        assert_eq!(out.details.metrics.records, out.records.len());
        let names = out.details.keywords.iter().find(|k| k.keyword == "name").unwrap();
        assert_eq!(names.count, out.records.len());
    }

    #[test]
    fn context_codec_is_used() {
        let context = Context { codec: Arc::new(EncodingCodec::for_label("windows-1252").unwrap()) };
        let out = load_with(feature::schema(), "name:coin\ngraphics:¥:y\n", &context, &Options::default());
        assert_eq!(out.errors[0].kind, ErrorKind::DecodingFailure);
    }
}
