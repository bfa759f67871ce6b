/// Board painting module

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use crate::board::Board;
use crate::config::BoardSettings;
use crate::error::BoardError;
use crate::hex_utils::hex_corners;
use crate::types::PixelPoint;
use crate::viewport::Viewport;

/// Drawing surface the board is painted onto
///
/// All coordinates are logical board units; `prepare` is responsible for
/// sizing the surface and installing the viewport transform.
pub trait Renderer {
    fn prepare(&mut self, viewport: &Viewport) -> Result<(), BoardError>;
    fn draw_hex(
        &mut self,
        center: PixelPoint,
        radius: f64,
        fill: &str,
        stroke: &str,
    ) -> Result<(), BoardError>;
    fn draw_label(&mut self, center: PixelPoint, text: &str) -> Result<(), BoardError>;
}

/// Size the surface, then draw every cell and its label in lattice order
pub fn paint_board<R: Renderer + ?Sized>(
    board: &Board,
    settings: &BoardSettings,
    renderer: &mut R,
) -> Result<(), BoardError> {
    renderer.prepare(&board.viewport)?;
    let radius = settings.draw_radius();
    for cell in &board.cells {
        renderer.draw_hex(cell.center, radius, cell.terrain.css_color(), settings.stroke_color)?;
        if let Some(label) = &cell.label {
            renderer.draw_label(cell.center, label)?;
        }
    }
    Ok(())
}

/// `Renderer` backed by an HTML canvas 2D context
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    label_color: &'static str,
    label_font: &'static str,
}

impl CanvasRenderer {
    /// Look up `<canvas id=...>` and grab its 2D context
    pub fn from_element_id(canvas_id: &str, settings: &BoardSettings) -> Result<Self, BoardError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(BoardError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| BoardError::CanvasNotFound(canvas_id.to_string()))?;
        let ctx = canvas
            .get_context("2d")?
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(BoardError::ContextUnavailable)?;

        Ok(CanvasRenderer {
            canvas,
            ctx,
            label_color: settings.label_color,
            label_font: settings.label_font,
        })
    }

    /// Current device pixel ratio, 1.0 outside a browser window
    pub fn device_pixel_ratio() -> f64 {
        web_sys::window().map_or(1.0, |window| window.device_pixel_ratio())
    }
}

impl Renderer for CanvasRenderer {
    fn prepare(&mut self, viewport: &Viewport) -> Result<(), BoardError> {
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.css_width))?;
        style.set_property("height", &format!("{}px", viewport.css_height))?;
        // resizing the buffer also clears the previous board
        self.canvas.set_width(viewport.buffer_width);
        self.canvas.set_height(viewport.buffer_height);

        self.ctx.set_transform(viewport.scale, 0.0, 0.0, viewport.scale, 0.0, 0.0)?;
        self.ctx.translate(viewport.translate_x, viewport.translate_y)?;
        Ok(())
    }

    fn draw_hex(
        &mut self,
        center: PixelPoint,
        radius: f64,
        fill: &str,
        stroke: &str,
    ) -> Result<(), BoardError> {
        let corners = hex_corners(center, radius);
        self.ctx.begin_path();
        self.ctx.move_to(corners[0].x, corners[0].y);
        for corner in &corners[1..] {
            self.ctx.line_to(corner.x, corner.y);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.stroke();
        Ok(())
    }

    fn draw_label(&mut self, center: PixelPoint, text: &str) -> Result<(), BoardError> {
        self.ctx.set_fill_style_str(self.label_color);
        self.ctx.set_font(self.label_font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.fill_text(text, center.x, center.y)?;
        Ok(())
    }
}
