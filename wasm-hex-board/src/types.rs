/// Core type definitions for the WASM module

/// Terrain enumeration for every tile a board can hold
///
/// **Learning Point**: The discriminant is what crosses the WASM boundary
/// (see `get_cell_at`), while `css_color` is what the canvas paints.
/// `Unassigned` is only produced when the colour pool runs dry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Terrain {
    Pasture = 0,
    Forest = 1,
    Hills = 2,
    Mountain = 3,
    Wheat = 4,
    Desert = 5,
    Water = 6,
    Gold = 7,
    Unassigned = 8,
}

impl Terrain {
    pub const ALL: [Terrain; 9] = [
        Terrain::Pasture,
        Terrain::Forest,
        Terrain::Hills,
        Terrain::Mountain,
        Terrain::Wheat,
        Terrain::Desert,
        Terrain::Water,
        Terrain::Gold,
        Terrain::Unassigned,
    ];

    /// Fill colour used when painting the tile
    pub fn css_color(self) -> &'static str {
        match self {
            Terrain::Pasture => "#00ac48ff",
            Terrain::Forest => "#005716ff",
            Terrain::Hills => "#a67700ff",
            Terrain::Mountain => "#797979ff",
            Terrain::Wheat => "#f6ff00ff",
            Terrain::Desert => "#f4ffccff",
            Terrain::Water => "#28a0ebff",
            Terrain::Gold => "#ffae00ff",
            Terrain::Unassigned => "#cccccc",
        }
    }

    /// Lower-case key used in the stats JSON
    pub fn name(self) -> &'static str {
        match self {
            Terrain::Pasture => "pasture",
            Terrain::Forest => "forest",
            Terrain::Hills => "hills",
            Terrain::Mountain => "mountain",
            Terrain::Wheat => "wheat",
            Terrain::Desert => "desert",
            Terrain::Water => "water",
            Terrain::Gold => "gold",
            Terrain::Unassigned => "unassigned",
        }
    }
}

/// Axial hex coordinate
///
/// q grows to the right, r grows diagonally down and to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        AxialCoord { q, r }
    }
}

/// Planar center of a cell in logical canvas units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Compact colour pool entry: `count` tiles of `terrain`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPoolSpec {
    pub terrain: Terrain,
    pub count: usize,
    pub can_assign: bool,
}

impl ColorPoolSpec {
    /// Entry whose tiles may receive a number label
    pub const fn new(terrain: Terrain, count: usize) -> Self {
        ColorPoolSpec { terrain, count, can_assign: true }
    }

    /// Entry whose tiles never receive a number label (desert, open sea)
    pub const fn fixed(terrain: Terrain, count: usize) -> Self {
        ColorPoolSpec { terrain, count, can_assign: false }
    }
}

/// Compact label pool entry: `count` copies of `text`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelPoolSpec {
    pub text: &'static str,
    pub count: usize,
}

impl LabelPoolSpec {
    pub const fn new(text: &'static str, count: usize) -> Self {
        LabelPoolSpec { text, count }
    }
}

/// One expanded colour pool element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPoolItem {
    pub terrain: Terrain,
    pub can_assign: bool,
}

/// One expanded label pool element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelPoolItem {
    pub text: String,
}

/// Cell whose terrain is fixed by the board configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForcedTile {
    pub coord: AxialCoord,
    pub terrain: Terrain,
    pub allow_label: bool,
}

impl ForcedTile {
    /// Fixed coastline water, never labelled
    pub const fn water(q: i32, r: i32) -> Self {
        ForcedTile {
            coord: AxialCoord::new(q, r),
            terrain: Terrain::Water,
            allow_label: false,
        }
    }
}

/// Final result for one lattice cell
#[derive(Clone, Debug, PartialEq)]
pub struct CellAssignment {
    pub coord: AxialCoord,
    pub center: PixelPoint,
    pub terrain: Terrain,
    pub label: Option<String>,
}
