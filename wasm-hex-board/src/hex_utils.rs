/// Hex coordinate utilities module

use crate::types::{AxialCoord, PixelPoint};

/// Side lengths of a (possibly stretched) hexagonal board, in cells per side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideLengths {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl SideLengths {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        SideLengths { a, b, c }
    }

    /// Zero-based radius bounds, or `None` when any side is empty
    fn radii(self) -> Option<(i32, i32, i32)> {
        if self.a == 0 || self.b == 0 || self.c == 0 {
            return None;
        }
        Some((self.a as i32 - 1, self.b as i32 - 1, self.c as i32 - 1))
    }
}

/// Enumerate every axial coordinate of the board region
///
/// **Learning Point**: For q in [-A, B] the valid r range is clipped by
/// both the r bounds and the q+r bounds:
/// rMin = max(-C, -C - q), rMax = min(A, B - q).
/// Varying A, B, C independently yields the stretched expansion boards.
/// Output order is column-major and fully deterministic.
pub fn build_lattice(sides: SideLengths) -> Vec<AxialCoord> {
    let Some((a, b, c)) = sides.radii() else {
        return Vec::new();
    };

    let mut coords = Vec::with_capacity(region_size(sides));
    for q in -a..=b {
        let r_min = (-c).max(-c - q);
        let r_max = a.min(b - q);
        for r in r_min..=r_max {
            coords.push(AxialCoord::new(q, r));
        }
    }
    coords
}

/// Closed-form cell count of the region built by `build_lattice`
///
/// With zero-based radii (a, b, c) the region holds ab + bc + ca + a + b + c + 1
/// cells, which is 3n² + 3n + 1 for a regular hexagon of radius n.
pub fn region_size(sides: SideLengths) -> usize {
    match sides.radii() {
        Some((a, b, c)) => (a * b + b * c + c * a + a + b + c + 1) as usize,
        None => 0,
    }
}

/// Project an axial coordinate onto the plane (pointy-top layout)
/// Formula: x = size * √3 * (q + r/2), y = size * 3/2 * r
pub fn axial_to_pixel(coord: AxialCoord, size: f64) -> PixelPoint {
    let q = coord.q as f64;
    let r = coord.r as f64;
    PixelPoint {
        x: size * 3.0_f64.sqrt() * (q + r / 2.0),
        y: size * 1.5 * r,
    }
}

/// Centers for a whole lattice, parallel to `coords`
pub fn lattice_centers(coords: &[AxialCoord], size: f64) -> Vec<PixelPoint> {
    coords.iter().map(|&coord| axial_to_pixel(coord, size)).collect()
}

/// Six corner points of a pointy-top hexagon around `center`
/// Corner i sits at angle 60*i - 30 degrees.
pub fn hex_corners(center: PixelPoint, radius: f64) -> [PixelPoint; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        PixelPoint {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    })
}
