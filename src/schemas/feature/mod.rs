//! Terrain features (`terrain.txt`).
//!
//! ```text
//! name:lava
//! graphics:#:r
//! priority:10
//! flags:LOS | PROJECT | FIERY | PASSABLE | NO_SCENT | BRIGHT
//! walk-msg:The lava will burn you!
//! walk-msg:  Really enter?
//! resist-flag:IM_FIRE
//! desc:A fiery pool of glowing lava.
//! ```
//!
//! `name` starts a record. Text directives may repeat and are concatenated
//! verbatim; `flags` may repeat and is unioned.

mod directives;
mod flags;
mod record;

#[cfg(test)]
mod tests;

pub use flags::{RACE_FLAGS, TERRAIN_FLAGS, TerrainFlags};
pub use record::Feature;

use crate::Schema;
use once_cell::sync::Lazy;

static SCHEMA: Lazy<Schema<Feature>> =
    Lazy::new(|| Schema::new("terrain", directives::directives()).expect("terrain directives form a valid schema"));

/// The terrain feature schema, built on first use.
pub fn schema() -> &'static Schema<Feature> {
    &SCHEMA
}
