/// Board variant configuration module

use std::fmt;
use std::str::FromStr;
use crate::error::BoardError;
use crate::hex_utils::SideLengths;
use crate::types::{ColorPoolSpec, ForcedTile, LabelPoolSpec, Terrain};

/// Selectable board layouts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Base,
    NewShores,
    FullRandom,
    FullRandomMega,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Base,
        Variant::NewShores,
        Variant::FullRandom,
        Variant::FullRandomMega,
    ];

    /// Name used by the page's game-type selector
    pub fn key(self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::NewShores => "seafarers-newshores",
            Variant::FullRandom => "seafarers-fullrandom",
            Variant::FullRandomMega => "seafarers-fullrandommega",
        }
    }

    /// Sea-bordering layouts get automatic water on their horizontal tips
    pub fn is_coastal(self) -> bool {
        self.key().starts_with("seafarers-")
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Variant {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.key() == s)
            .ok_or_else(|| BoardError::UnknownVariant(s.to_string()))
    }
}

/// Player-count selection; only "four" versus "anything else" matters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerCount {
    #[default]
    Four,
    Other,
}

impl PlayerCount {
    pub fn from_count(players: u32) -> Self {
        if players == 4 {
            PlayerCount::Four
        } else {
            PlayerCount::Other
        }
    }
}

/// Static description of one board: shape, pools and fixed cells
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    pub sides: SideLengths,
    pub labels: &'static [LabelPoolSpec],
    pub colors: &'static [ColorPoolSpec],
    pub forced: &'static [ForcedTile],
}

impl BoardConfig {
    /// Pick the configuration for a variant and player count
    ///
    /// Only new shores has distinct four-player and other-player boards;
    /// every other variant ignores `players`.
    pub fn for_variant(variant: Variant, players: PlayerCount) -> Self {
        match (variant, players) {
            (Variant::Base, _) => BoardConfig {
                sides: SideLengths::new(3, 3, 3),
                labels: BASE_LABELS,
                colors: BASE_COLORS,
                forced: &[],
            },
            (Variant::NewShores, PlayerCount::Four) => BoardConfig {
                sides: SideLengths::new(4, 5, 4),
                labels: NEW_SHORES_FOUR_LABELS,
                colors: NEW_SHORES_FOUR_COLORS,
                forced: NEW_SHORES_FOUR_WATER,
            },
            (Variant::NewShores, PlayerCount::Other) => BoardConfig {
                sides: SideLengths::new(4, 4, 4),
                labels: NEW_SHORES_OTHER_LABELS,
                colors: NEW_SHORES_OTHER_COLORS,
                forced: NEW_SHORES_OTHER_WATER,
            },
            (Variant::FullRandom, _) => BoardConfig {
                sides: SideLengths::new(4, 5, 4),
                labels: FULL_RANDOM_LABELS,
                colors: FULL_RANDOM_COLORS,
                forced: &[],
            },
            (Variant::FullRandomMega, _) => BoardConfig {
                sides: SideLengths::new(4, 6, 4),
                labels: MEGA_LABELS,
                colors: MEGA_COLORS,
                forced: &[],
            },
        }
    }
}

const fn labels(counts: [usize; 10]) -> [LabelPoolSpec; 10] {
    [
        LabelPoolSpec::new("2", counts[0]),
        LabelPoolSpec::new("3", counts[1]),
        LabelPoolSpec::new("4", counts[2]),
        LabelPoolSpec::new("5", counts[3]),
        LabelPoolSpec::new("6", counts[4]),
        LabelPoolSpec::new("8", counts[5]),
        LabelPoolSpec::new("9", counts[6]),
        LabelPoolSpec::new("10", counts[7]),
        LabelPoolSpec::new("11", counts[8]),
        LabelPoolSpec::new("12", counts[9]),
    ]
}

const BASE_LABELS: &[LabelPoolSpec] = &labels([1, 2, 2, 2, 2, 2, 2, 2, 2, 1]);
const BASE_COLORS: &[ColorPoolSpec] = &[
    ColorPoolSpec::new(Terrain::Pasture, 4),
    ColorPoolSpec::new(Terrain::Forest, 4),
    ColorPoolSpec::new(Terrain::Hills, 3),
    ColorPoolSpec::new(Terrain::Mountain, 3),
    ColorPoolSpec::new(Terrain::Wheat, 4),
    ColorPoolSpec::fixed(Terrain::Desert, 1),
];

const NEW_SHORES_FOUR_LABELS: &[LabelPoolSpec] = &labels([2, 3, 3, 3, 3, 3, 3, 3, 3, 1]);
const NEW_SHORES_FOUR_COLORS: &[ColorPoolSpec] = &[
    ColorPoolSpec::new(Terrain::Pasture, 5),
    ColorPoolSpec::new(Terrain::Forest, 5),
    ColorPoolSpec::new(Terrain::Hills, 5),
    ColorPoolSpec::new(Terrain::Mountain, 5),
    ColorPoolSpec::new(Terrain::Wheat, 5),
    ColorPoolSpec::fixed(Terrain::Desert, 1),
    ColorPoolSpec::new(Terrain::Gold, 2),
];
// (3, 1) is listed twice on the printed layout; the lookup collapses it
const NEW_SHORES_FOUR_WATER: &[ForcedTile] = &[
    ForcedTile::water(3, 1),
    ForcedTile::water(2, 1),
    ForcedTile::water(1, 2),
    ForcedTile::water(0, 3),
    ForcedTile::water(2, 0),
    ForcedTile::water(3, 1),
    ForcedTile::water(4, -1),
    ForcedTile::water(2, -1),
    ForcedTile::water(2, -2),
    ForcedTile::water(2, -3),
    ForcedTile::water(4, -3),
    ForcedTile::water(1, -2),
    ForcedTile::water(-1, -2),
    ForcedTile::water(0, -2),
    ForcedTile::water(-2, -1),
];

const NEW_SHORES_OTHER_LABELS: &[LabelPoolSpec] = &labels([1, 2, 3, 3, 2, 3, 2, 3, 2, 1]);
const NEW_SHORES_OTHER_COLORS: &[ColorPoolSpec] = &[
    ColorPoolSpec::new(Terrain::Pasture, 5),
    ColorPoolSpec::new(Terrain::Forest, 3),
    ColorPoolSpec::new(Terrain::Hills, 4),
    ColorPoolSpec::new(Terrain::Mountain, 4),
    ColorPoolSpec::new(Terrain::Wheat, 4),
    ColorPoolSpec::new(Terrain::Gold, 2),
];
const NEW_SHORES_OTHER_WATER: &[ForcedTile] = &[
    ForcedTile::water(1, 0),
    ForcedTile::water(1, 1),
    ForcedTile::water(2, 1),
    ForcedTile::water(0, 2),
    ForcedTile::water(-1, 3),
    ForcedTile::water(1, 0),
    ForcedTile::water(1, -1),
    ForcedTile::water(1, -2),
    ForcedTile::water(0, -2),
    ForcedTile::water(-1, -2),
    ForcedTile::water(-2, -1),
    ForcedTile::water(-1, -2),
    ForcedTile::water(3, -1),
    ForcedTile::water(2, -3),
    ForcedTile::water(3, -3),
];

const FULL_RANDOM_LABELS: &[LabelPoolSpec] = &labels([1, 3, 3, 3, 2, 2, 3, 3, 2, 1]);
const FULL_RANDOM_COLORS: &[ColorPoolSpec] = &[
    ColorPoolSpec::new(Terrain::Pasture, 5),
    ColorPoolSpec::new(Terrain::Forest, 5),
    ColorPoolSpec::new(Terrain::Hills, 4),
    ColorPoolSpec::new(Terrain::Mountain, 4),
    ColorPoolSpec::new(Terrain::Wheat, 5),
    ColorPoolSpec::fixed(Terrain::Water, 19),
];

const MEGA_LABELS: &[LabelPoolSpec] = &labels([2, 3, 3, 3, 3, 3, 3, 3, 2, 2]);
const MEGA_COLORS: &[ColorPoolSpec] = &[
    ColorPoolSpec::new(Terrain::Pasture, 5),
    ColorPoolSpec::new(Terrain::Forest, 5),
    ColorPoolSpec::new(Terrain::Hills, 5),
    ColorPoolSpec::new(Terrain::Mountain, 5),
    ColorPoolSpec::new(Terrain::Wheat, 5),
    ColorPoolSpec::fixed(Terrain::Desert, 3),
    ColorPoolSpec::fixed(Terrain::Water, 19),
    ColorPoolSpec::new(Terrain::Gold, 2),
];
