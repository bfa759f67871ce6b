/// Geometry and styling knobs shared by generation and painting
#[derive(Clone, Debug, PartialEq)]
pub struct BoardSettings {
    /// Hex radius in logical pixels
    pub hex_size: f64,
    /// Empty margin around the board
    pub padding: f64,
    /// Pixel-x tolerance when matching the board's horizontal extremes
    pub tip_tolerance: f64,
    /// Gap between neighbouring hexes, subtracted from the drawn radius
    pub cell_inset: f64,
    pub stroke_color: &'static str,
    pub label_color: &'static str,
    pub label_font: &'static str,
}

impl Default for BoardSettings {
    fn default() -> Self {
        BoardSettings {
            hex_size: 40.0,
            padding: 20.0,
            tip_tolerance: 0.1,
            cell_inset: 1.0,
            stroke_color: "#444",
            label_color: "#222",
            label_font: "14px sans-serif",
        }
    }
}

impl BoardSettings {
    pub fn draw_radius(&self) -> f64 {
        (self.hex_size - self.cell_inset).max(0.0)
    }
}
