//! The 3.4.3 → 3.6.0 tile layout change as data
//!
//! All positions are indices into the 3.4.3 sheet. The plan is applied in
//! three stages: monster relocations, insertions of new tiles before fixed
//! source positions, then the statue block appended after everything else.

use crate::transform::derive::EXTRA_SCROLL_APPEARANCES;

/// Tiles in a complete 3.4.3 sheet
pub const SOURCE_TILE_COUNT: usize = 1057;
/// Monsters occupy the first tiles of the sheet
pub const MONSTER_COUNT: usize = 394;
/// Last object before the 3.6.0 glob slots
pub const MEAT_RING: usize = 641;
/// First of the random scroll appearances
pub const FIRST_SCROLL_APPEARANCE: usize = 690;
/// Number of 3.4.3 random scroll appearances
pub const SCROLL_APPEARANCE_COUNT: usize = 25;
/// Last spellbook before the Book of the Dead
pub const LAST_ORDINARY_SPELLBOOK: usize = 757;
/// The generic statue glyph
pub const STATUE: usize = 824;
/// Floor of a room
pub const ROOM_FLOOR: usize = 848;
/// Last trap glyph
pub const LAST_TRAP: usize = 891;
/// Last sparkle effect tile
pub const LAST_SPARKLE: usize = 903;

/// Move one tile so that it ends up at `to`
///
/// Applied as remove-then-insert, so tiles between the two positions shift by
/// one towards `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    /// Current position
    pub from: usize,
    /// Position after the move
    pub to: usize,
}

/// How inserted tiles are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `count` placeholder tiles
    Placeholder {
        /// Number of placeholders
        count: usize,
    },
    /// Half-intensity copy of the source tile
    Darkened {
        /// Source position of the floor to darken
        source: usize,
    },
    /// The repeats of [`derive_scroll_appearances`](crate::transform::derive::derive_scroll_appearances)
    /// over `count` source tiles starting at `first`
    ScrollAppearances {
        /// Source position of the first appearance
        first: usize,
        /// Number of existing appearances
        count: usize,
    },
}

/// New tiles placed immediately before source position `before`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// Source position the new tiles precede; the grid length appends
    pub before: usize,
    /// Producer of the new tiles
    pub rule: Rule,
}

/// Layout of the statue block appended after the spliced grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatueBlock {
    /// Statues are made for the first `monsters` tiles of the new layout
    pub monsters: usize,
    /// Source position of the background used to separate the monster
    pub floor: usize,
    /// Source position of the glyph copied when statues are not derived
    pub generic: usize,
}

/// Complete description of a layout conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPlan {
    /// Number of source tiles the layout covers; later tiles are row padding
    pub source_tiles: usize,
    /// Moves applied before any insertion
    pub relocations: Vec<Relocation>,
    /// New tiles, in any order
    pub insertions: Vec<Insertion>,
    /// Statues appended at the end
    pub statues: StatueBlock,
}

const NETHACK_360_RELOCATIONS: [Relocation; 10] = [
    // dingo before dog
    Relocation { from: 19, to: 17 },
    // winter wolf cub before warg
    Relocation { from: 23, to: 22 },
    // pony before white unicorn
    Relocation { from: 104, to: 101 },
    // ettin before storm giant
    Relocation { from: 176, to: 175 },
    // green slime before black pudding
    Relocation { from: 211, to: 210 },
    // python before pit viper
    Relocation { from: 219, to: 218 },
    // ghoul before giant zombie
    Relocation { from: 249, to: 248 },
    // nurse after sergeant
    Relocation { from: 273, to: 281 },
    // succubus before horned devil
    Relocation { from: 294, to: 293 },
    // sandestin before balrog
    Relocation { from: 319, to: 305 },
];

const NETHACK_360_INSERTIONS: [Insertion; 6] = [
    // globs of gray ooze, brown pudding, green slime and black pudding
    Insertion {
        before: MEAT_RING + 1,
        rule: Rule::Placeholder { count: 4 },
    },
    Insertion {
        before: FIRST_SCROLL_APPEARANCE + SCROLL_APPEARANCE_COUNT,
        rule: Rule::ScrollAppearances {
            first: FIRST_SCROLL_APPEARANCE,
            count: SCROLL_APPEARANCE_COUNT,
        },
    },
    // novel
    Insertion {
        before: LAST_ORDINARY_SPELLBOOK + 1,
        rule: Rule::Placeholder { count: 1 },
    },
    // dark part of a room
    Insertion {
        before: ROOM_FLOOR + 1,
        rule: Rule::Darkened { source: ROOM_FLOOR },
    },
    // vibrating square
    Insertion {
        before: LAST_TRAP + 1,
        rule: Rule::Placeholder { count: 1 },
    },
    // poison cloud and valid position
    Insertion {
        before: LAST_SPARKLE + 1,
        rule: Rule::Placeholder { count: 2 },
    },
];

impl InsertionPlan {
    /// Conversion from the NetHack 3.4.3 tile order to the 3.6.0 one
    pub fn nethack_360() -> Self {
        Self {
            source_tiles: SOURCE_TILE_COUNT,
            relocations: NETHACK_360_RELOCATIONS.to_vec(),
            insertions: NETHACK_360_INSERTIONS.to_vec(),
            statues: StatueBlock {
                monsters: MONSTER_COUNT,
                floor: ROOM_FLOOR,
                generic: STATUE,
            },
        }
    }

    /// Insertions sorted by ascending source position
    ///
    /// Insertions sharing a position keep their declared order.
    pub fn ordered_insertions(&self) -> Vec<Insertion> {
        let mut ordered = self.insertions.clone();
        ordered.sort_by_key(|insertion| insertion.before);
        ordered
    }

    /// Number of tiles the spliced layout holds, statues excluded
    pub fn spliced_len(&self) -> usize {
        self.source_tiles
            + self
                .insertions
                .iter()
                .map(|insertion| insertion.rule.produced())
                .sum::<usize>()
    }

    /// Number of tiles in the converted sheet
    pub fn output_len(&self) -> usize {
        self.spliced_len() + self.statues.monsters
    }
}

impl Rule {
    /// Number of tiles this rule inserts
    pub const fn produced(self) -> usize {
        match self {
            Self::Placeholder { count } => count,
            Self::Darkened { .. } => 1,
            Self::ScrollAppearances { .. } => EXTRA_SCROLL_APPEARANCES,
        }
    }
}
