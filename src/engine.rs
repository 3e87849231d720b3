//! Directive engine.
//!
//! The engine turns one directive line at a time into mutations of the record
//! under construction. It knows nothing about any particular entity kind: a
//! [`Schema`] supplies the keywords, argument shapes and handlers.
//!
//! ## How the parts work together
//!
//! ```text
//! DirectiveSpecs ──┐
//!                  │  Schema::new                 (schema.rs)
//!                  └──────────────┬─────────────
//!                                 │
//! line ── split_directive ────────┼─ keyword + rest        (split.rs)
//!                                 │
//!                                 v
//!                      Parser::process (parser.rs)
//!                        - header check (MissingRecordHeader)
//!                        - keyword lookup (UnknownDirective)
//!                        - split_fields (TooFewArgs / TooManyArgs)
//!                        - coerce every field     (coerce.rs)
//!                        - run handler on the record
//!                                 │
//!                                 v
//!                      Parser::finalize -> R
//! ```
//!
//! `loader.rs` is the caller side of that contract: it owns the read loop,
//! skips comments, finalizes a record whenever the next header arrives, and
//! collects [`LoadMetrics`] (`metrics.rs`).
//!
//! ## Record lifecycle
//!
//! ```text
//! NoRecord ──header──▶ RecordActive ──finalize──▶ NoRecord
//!                         │    ▲
//!                         └────┘ field directives
//! ```
//!
//! A header directive arriving in `RecordActive` fails with
//! `RecordInProgress`; the caller must finalize first.
//!
//! ## Debugging
//!
//! The engine logs through the `log` facade: `trace` for every directive,
//! `debug` for record lifecycle events and rejected lines.

#[path = "engine/loader.rs"]
mod loader;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/schema.rs"]
mod schema;
#[path = "engine/split.rs"]
mod split;

pub(crate) use loader::Loader;
pub use metrics::{KeywordCount, LoadMetrics};
pub use parser::Parser;
pub use schema::Schema;
