use crate::tables::{FlagTable, SymbolTable};
use once_cell::sync::Lazy;

bitflags::bitflags! {
    /// Terrain feature flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TerrainFlags: u64 {
        const LOS         = 1 << 0;
        const PROJECT     = 1 << 1;
        const PASSABLE    = 1 << 2;
        const INTERESTING = 1 << 3;
        const PERMANENT   = 1 << 4;
        const EASY        = 1 << 5;
        const TRAP        = 1 << 6;
        const NO_SCENT    = 1 << 7;
        const NO_FLOW     = 1 << 8;
        const OBJECT      = 1 << 9;
        const TORCH       = 1 << 10;
        const HIDDEN      = 1 << 11;
        const GOLD        = 1 << 12;
        const CLOSABLE    = 1 << 13;
        const FLOOR       = 1 << 14;
        const WALL        = 1 << 15;
        const ROCK        = 1 << 16;
        const GRANITE     = 1 << 17;
        const DOOR_ANY    = 1 << 18;
        const DOOR_CLOSED = 1 << 19;
        const SHOP        = 1 << 20;
        const DOOR_JAMMED = 1 << 21;
        const DOOR_LOCKED = 1 << 22;
        const MAGMA       = 1 << 23;
        const QUARTZ      = 1 << 24;
        const STAIR       = 1 << 25;
        const UPSTAIR     = 1 << 26;
        const DOWNSTAIR   = 1 << 27;
        const SMOOTH      = 1 << 28;
        const BRIGHT      = 1 << 29;
        const FIERY       = 1 << 30;
        const PASS_RUBBLE = 1 << 31;
    }
}

impl Default for TerrainFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Flag names accepted by `flags:`.
pub static TERRAIN_FLAGS: Lazy<FlagTable> = Lazy::new(|| FlagTable::of::<TerrainFlags>("terrain"));

/// Monster race flags a terrain can require resistance to, in code order.
const RACE_FLAG_NAMES: &[&str] = &[
    "UNIQUE",
    "QUESTOR",
    "MALE",
    "FEMALE",
    "NEVER_BLOW",
    "NEVER_MOVE",
    "FORCE_SLEEP",
    "COLD_BLOOD",
    "EMPTY_MIND",
    "WEIRD_MIND",
    "STUPID",
    "SMART",
    "INVISIBLE",
    "PASS_WALL",
    "KILL_WALL",
    "MOVE_BODY",
    "KILL_BODY",
    "TAKE_ITEM",
    "KILL_ITEM",
    "ORC",
    "TROLL",
    "GIANT",
    "DRAGON",
    "DEMON",
    "UNDEAD",
    "EVIL",
    "ANIMAL",
    "HURT_LIGHT",
    "HURT_ROCK",
    "HURT_FIRE",
    "HURT_COLD",
    "IM_ACID",
    "IM_ELEC",
    "IM_FIRE",
    "IM_COLD",
    "IM_POIS",
    "IM_NETHER",
    "IM_WATER",
    "IM_PLASMA",
    "IM_NEXUS",
    "IM_DISEN",
    "NO_FEAR",
    "NO_STUN",
    "NO_CONF",
    "NO_SLEEP",
    "NO_HOLD",
];

/// Symbol names accepted by `resist-flag:`.
pub static RACE_FLAGS: Lazy<SymbolTable> = Lazy::new(|| SymbolTable::from_names("race", RACE_FLAG_NAMES));
