use super::flags::{RACE_FLAGS, TerrainFlags};

/// A terrain feature.
///
/// `name` is set when the record is created; every other field starts empty
/// and fills in as its directive is seen. Text fields accumulate across
/// repeated directives and `flags` accumulates by union.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    pub desc: Option<String>,
    /// Name of the feature this one looks like until discovered.
    pub mimic: Option<String>,
    /// Display priority on the small-scale map.
    pub priority: i32,
    pub shopnum: i32,
    /// Digging difficulty.
    pub dig: i32,
    pub flags: TerrainFlags,
    /// Display glyph; `'\0'` until `graphics:` sets one.
    pub glyph: char,
    pub colour: u8,
    pub walk_msg: Option<String>,
    pub run_msg: Option<String>,
    pub hurt_msg: Option<String>,
    pub die_msg: Option<String>,
    pub confused_msg: Option<String>,
    pub look_prefix: Option<String>,
    pub look_in_preposition: Option<String>,
    /// Race flag code (see [`RACE_FLAGS`]) a monster needs to enter safely.
    pub resist_flag: Option<u32>,
}

impl Feature {
    /// A fresh feature with only its name set.
    pub fn named(name: impl Into<String>) -> Self {
        Feature { name: name.into(), ..Feature::default() }
    }

    pub fn resist_flag_name(&self) -> Option<&'static str> {
        self.resist_flag.and_then(|code| RACE_FLAGS.name_of(code))
    }

    /// Names of the set flags, in bit order.
    pub fn flag_names(&self) -> Vec<&'static str> {
        self.flags.iter_names().map(|(name, _)| name).collect()
    }
}
