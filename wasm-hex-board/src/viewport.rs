/// Canvas sizing module

use crate::types::PixelPoint;

/// Surface dimensions and the transform that centers the board on it
///
/// **Learning Point**: Logical (CSS) size stays unscaled while the backing
/// buffer is multiplied by the device pixel ratio. Drawing code applies
/// `scale` and then `translate_x/translate_y` so every draw call can stay
/// in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: u32,
    pub css_height: u32,
    pub buffer_width: u32,
    pub buffer_height: u32,
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Viewport {
    /// Fit a surface around every cell center
    ///
    /// The board gets one hex half-width/half-height plus `padding` on each
    /// side. An empty board is sized as a single cell at the origin.
    pub fn fit(
        centers: &[PixelPoint],
        hex_size: f64,
        padding: f64,
        device_pixel_ratio: f64,
    ) -> Self {
        let scale = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };

        let (min_x, max_x, min_y, max_y) = bounds(centers).unwrap_or((0.0, 0.0, 0.0, 0.0));

        let hex_width = hex_size * 3.0_f64.sqrt();
        let css_width = (max_x - min_x + hex_width + padding * 2.0).ceil().max(0.0);
        let css_height = (max_y - min_y + hex_size * 2.0 + padding * 2.0).ceil().max(0.0);

        Viewport {
            css_width: css_width as u32,
            css_height: css_height as u32,
            buffer_width: (css_width * scale).round() as u32,
            buffer_height: (css_height * scale).round() as u32,
            scale,
            translate_x: padding - min_x + hex_width / 2.0,
            translate_y: padding - min_y + hex_size,
        }
    }
}

/// (min_x, max_x, min_y, max_y) of all centers, `None` when empty
fn bounds(centers: &[PixelPoint]) -> Option<(f64, f64, f64, f64)> {
    let first = centers.first()?;
    Some(centers.iter().fold(
        (first.x, first.x, first.y, first.y),
        |(lo_x, hi_x, lo_y, hi_y), c| (lo_x.min(c.x), hi_x.max(c.x), lo_y.min(c.y), hi_y.max(c.y)),
    ))
}
