//! The read loop around a parse session.
//!
//! The engine handles one line at a time and leaves record hand-off to its
//! caller. `Loader` is that caller for whole texts:
//!
//! - skip blank lines and comments;
//! - finalize the active record before each header line;
//! - stop at the first failure, or record it and carry on when
//!   `Options::stop_on_error` is off;
//! - finalize the last record at end of input.
//!
//! In lenient mode a failing header leaves the loader without a record, so
//! the field lines that follow it fail with `MissingRecordHeader` until the
//! next good header.

use super::metrics::LoadMetrics;
use super::parser::Parser;
use super::schema::Schema;
use super::split::split_directive;
use crate::codec::Codec;
use crate::{LoadError, Options};
use std::time::Instant;

/// Records, errors and counters from one load.
#[derive(Debug)]
pub(crate) struct LoadRun<R> {
    pub records: Vec<R>,
    pub errors: Vec<LoadError>,
    pub metrics: LoadMetrics,
}

pub(crate) struct Loader<'s, R> {
    parser: Parser<'s, R>,
    options: &'s Options,
}

impl<'s, R> Loader<'s, R> {
    pub fn new(schema: &'s Schema<R>, codec: &'s dyn Codec, options: &'s Options) -> Self {
        Loader { parser: Parser::with_codec(schema, codec), options }
    }

    pub fn run(mut self, text: &str) -> LoadRun<R> {
        let start = Instant::now();
        let mut records = Vec::new();
        let mut errors = Vec::new();
        let mut metrics = LoadMetrics::default();

        for (idx, line) in text.lines().enumerate() {
            metrics.lines += 1;
            if self.is_skippable(line) {
                metrics.skipped += 1;
                continue;
            }

            if self.parser.starts_record(line) {
                if let Some(record) = self.parser.finalize() {
                    records.push(record);
                }
            }

            metrics.directives += 1;
            match self.parser.process(line) {
                Ok(()) => metrics.count_keyword(split_directive(line).0),
                Err(kind) => {
                    metrics.failed += 1;
                    let error = LoadError { line_number: idx + 1, line: line.to_string(), kind };
                    if self.options.stop_on_error {
                        log::debug!("{}: stopping at {}", self.parser.schema().name(), error);
                        errors.push(error);
                        break;
                    }
                    log::warn!("{}: skipping {}", self.parser.schema().name(), error);
                    errors.push(error);
                }
            }
        }

        if errors.is_empty() || !self.options.stop_on_error {
            if let Some(record) = self.parser.finalize() {
                records.push(record);
            }
        }

        metrics.records = records.len();
        metrics.total = start.elapsed();
        LoadRun { records, errors, metrics }
    }

    fn is_skippable(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        trimmed.is_empty() || trimmed.starts_with(self.options.comment_prefix)
    }
}
