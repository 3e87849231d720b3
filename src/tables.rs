//! Immutable lookup tables used by argument coercion.
//!
//! Tables are built once (usually inside a `once_cell::sync::Lazy`) and only
//! read afterwards, so any number of parse sessions may share them.
//!
//! - [`FlagTable`]: flag name -> bits, derived from a `bitflags` type.
//! - [`SymbolTable`]: symbol name -> numeric code, for single-valued fields.
//! - [`ColourTable`]: colour name or colour letter -> colour code.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// --- Flags -------------------------------------------------------------------

/// Case-sensitive map from flag name to its bit value.
#[derive(Debug, Clone)]
pub struct FlagTable {
    kind: &'static str,
    by_name: HashMap<&'static str, u64>,
}

impl FlagTable {
    /// Build a table from the named flags of a `bitflags` type.
    pub fn of<F>(kind: &'static str) -> Self
    where
        F: bitflags::Flags,
        F::Bits: Into<u64>,
    {
        let by_name = F::FLAGS
            .iter()
            .filter(|flag| !flag.name().is_empty())
            .map(|flag| (flag.name(), flag.value().bits().into()))
            .collect();
        FlagTable { kind, by_name }
    }

    /// What the flags describe, e.g. `"terrain"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.by_name.get(name).copied()
    }
}

// --- Symbols -----------------------------------------------------------------

/// Case-sensitive map from a symbol name to a small numeric code.
///
/// Codes start at 1 in declaration order; 0 never names a symbol.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    kind: &'static str,
    names: Vec<&'static str>,
    by_name: HashMap<&'static str, u32>,
}

impl SymbolTable {
    pub fn from_names(kind: &'static str, names: &[&'static str]) -> Self {
        let by_name = names.iter().enumerate().map(|(idx, name)| (*name, idx as u32 + 1)).collect();
        SymbolTable { kind, names: names.to_vec(), by_name }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn code(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    pub fn name_of(&self, code: u32) -> Option<&'static str> {
        let idx = usize::try_from(code).ok()?.checked_sub(1)?;
        self.names.get(idx).copied()
    }
}

// --- Colours -----------------------------------------------------------------

pub const COLOUR_DARK: u8 = 0;
pub const COLOUR_WHITE: u8 = 1;
pub const COLOUR_SLATE: u8 = 2;
pub const COLOUR_ORANGE: u8 = 3;
pub const COLOUR_RED: u8 = 4;
pub const COLOUR_GREEN: u8 = 5;
pub const COLOUR_BLUE: u8 = 6;
pub const COLOUR_UMBER: u8 = 7;
pub const COLOUR_L_DARK: u8 = 8;
pub const COLOUR_L_WHITE: u8 = 9;
pub const COLOUR_L_PURPLE: u8 = 10;
pub const COLOUR_YELLOW: u8 = 11;
pub const COLOUR_L_RED: u8 = 12;
pub const COLOUR_L_GREEN: u8 = 13;
pub const COLOUR_L_BLUE: u8 = 14;
pub const COLOUR_L_UMBER: u8 = 15;
pub const COLOUR_PURPLE: u8 = 16;
pub const COLOUR_VIOLET: u8 = 17;
pub const COLOUR_TEAL: u8 = 18;
pub const COLOUR_MUD: u8 = 19;
pub const COLOUR_L_YELLOW: u8 = 20;
pub const COLOUR_MAGENTA: u8 = 21;
pub const COLOUR_L_TEAL: u8 = 22;
pub const COLOUR_L_VIOLET: u8 = 23;
pub const COLOUR_L_PINK: u8 = 24;
pub const COLOUR_MUSTARD: u8 = 25;
pub const COLOUR_BLUE_SLATE: u8 = 26;
pub const COLOUR_DEEP_L_BLUE: u8 = 27;
pub const COLOUR_SHADE: u8 = 28;

/// (code, letter, full name)
const COLOUR_ENTRIES: &[(u8, char, &str)] = &[
    (COLOUR_DARK, 'd', "Dark"),
    (COLOUR_WHITE, 'w', "White"),
    (COLOUR_SLATE, 's', "Slate"),
    (COLOUR_ORANGE, 'o', "Orange"),
    (COLOUR_RED, 'r', "Red"),
    (COLOUR_GREEN, 'g', "Green"),
    (COLOUR_BLUE, 'b', "Blue"),
    (COLOUR_UMBER, 'u', "Umber"),
    (COLOUR_L_DARK, 'D', "Light Dark"),
    (COLOUR_L_WHITE, 'W', "Light Slate"),
    (COLOUR_L_PURPLE, 'P', "Light Purple"),
    (COLOUR_YELLOW, 'y', "Yellow"),
    (COLOUR_L_RED, 'R', "Light Red"),
    (COLOUR_L_GREEN, 'G', "Light Green"),
    (COLOUR_L_BLUE, 'B', "Light Blue"),
    (COLOUR_L_UMBER, 'U', "Light Umber"),
    (COLOUR_PURPLE, 'p', "Purple"),
    (COLOUR_VIOLET, 'v', "Violet"),
    (COLOUR_TEAL, 't', "Teal"),
    (COLOUR_MUD, 'm', "Mud"),
    (COLOUR_L_YELLOW, 'Y', "Light Yellow"),
    (COLOUR_MAGENTA, 'i', "Magenta-Pink"),
    (COLOUR_L_TEAL, 'T', "Light Teal"),
    (COLOUR_L_VIOLET, 'V', "Light Violet"),
    (COLOUR_L_PINK, 'I', "Light Pink"),
    (COLOUR_MUSTARD, 'M', "Mustard"),
    (COLOUR_BLUE_SLATE, 'z', "Blue Slate"),
    (COLOUR_DEEP_L_BLUE, 'Z', "Deep Light Blue"),
    (COLOUR_SHADE, 'S', "Shade"),
];

/// The shared colour table.
pub static COLOURS: Lazy<ColourTable> = Lazy::new(|| ColourTable::new(COLOUR_ENTRIES));

/// Colour names (case-insensitive) and colour letters (case-sensitive).
#[derive(Debug, Clone)]
pub struct ColourTable {
    by_name: HashMap<String, u8>,
    by_letter: HashMap<char, u8>,
    names: HashMap<u8, (char, &'static str)>,
}

impl ColourTable {
    pub fn new(entries: &[(u8, char, &'static str)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_letter = HashMap::with_capacity(entries.len());
        let mut names = HashMap::with_capacity(entries.len());
        for &(code, letter, name) in entries {
            by_name.insert(name.to_lowercase(), code);
            by_letter.insert(letter, code);
            names.insert(code, (letter, name));
        }
        ColourTable { by_name, by_letter, names }
    }

    /// Resolve a colour: full name first, then (for one-character values) the
    /// letter shorthand.
    ///
    /// ```text
    /// "Light Green" / "light green" -> COLOUR_L_GREEN
    /// "b"                           -> COLOUR_BLUE
    /// "B"                           -> COLOUR_L_BLUE
    /// ```
    pub fn lookup(&self, value: &str) -> Option<u8> {
        if let Some(code) = self.by_name.get(&value.to_lowercase()) {
            return Some(*code);
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.by_letter.get(&letter).copied(),
            _ => None,
        }
    }

    pub fn name_of(&self, code: u8) -> Option<&'static str> {
        self.names.get(&code).map(|(_, name)| *name)
    }

    pub fn letter_of(&self, code: u8) -> Option<char> {
        self.names.get(&code).map(|(letter, _)| *letter)
    }
}
