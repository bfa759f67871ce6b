/// Board generation module

use rand::Rng;
use wasm_bindgen::prelude::*;
use crate::config::BoardSettings;
use crate::error::BoardError;
use crate::hex_utils::{build_lattice, lattice_centers};
use crate::layout::{assign_cells, LayoutInput};
use crate::logging::init_logging;
use crate::pool::{expand_color_pool, expand_label_pool, shuffle};
use crate::render::{paint_board, CanvasRenderer, Renderer};
use crate::state::{lock_state, BoardState};
use crate::types::{AxialCoord, CellAssignment, Terrain};
use crate::variants::{BoardConfig, PlayerCount, Variant};
use crate::viewport::Viewport;

/// One generated board, ready to paint
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub variant: Variant,
    pub cells: Vec<CellAssignment>,
    pub viewport: Viewport,
}

impl Board {
    pub fn cell_at(&self, coord: AxialCoord) -> Option<&CellAssignment> {
        self.cells.iter().find(|cell| cell.coord == coord)
    }

    pub fn stats(&self) -> BoardStats {
        let mut stats = BoardStats {
            counts: [0; Terrain::ALL.len()],
            labelled: 0,
            total: self.cells.len(),
        };
        for cell in &self.cells {
            stats.counts[cell.terrain as usize] += 1;
            if cell.label.is_some() {
                stats.labelled += 1;
            }
        }
        stats
    }
}

/// Per-terrain tile counts for a board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardStats {
    counts: [usize; Terrain::ALL.len()],
    pub labelled: usize,
    pub total: usize,
}

impl BoardStats {
    pub fn count(&self, terrain: Terrain) -> usize {
        self.counts[terrain as usize]
    }

    /// Hand-built JSON, same shape as the rest of the WASM API (no serde)
    pub fn to_json(&self) -> String {
        let mut parts: Vec<String> = Terrain::ALL
            .iter()
            .map(|&terrain| format!(r#""{}":{}"#, terrain.name(), self.count(terrain)))
            .collect();
        parts.push(format!(r#""labelled":{}"#, self.labelled));
        parts.push(format!(r#""total":{}"#, self.total));
        format!("{{{}}}", parts.join(","))
    }
}

/// Run the full pipeline: lattice, shuffled pools, assignment, viewport
///
/// **Learning Point**: The lattice is deterministic; all randomness comes
/// from shuffling the two pools, so a seeded `rng` reproduces a board exactly.
pub fn generate_board<R: Rng + ?Sized>(
    variant: Variant,
    players: PlayerCount,
    settings: &BoardSettings,
    device_pixel_ratio: f64,
    rng: &mut R,
) -> Board {
    let config = BoardConfig::for_variant(variant, players);

    let coords = build_lattice(config.sides);
    let centers = lattice_centers(&coords, settings.hex_size);
    let labels = shuffle(&expand_label_pool(config.labels), rng);
    let colors = shuffle(&expand_color_pool(config.colors), rng);

    let cells = assign_cells(&LayoutInput {
        coords: &coords,
        centers: &centers,
        labels: &labels,
        colors: &colors,
        forced: config.forced,
        coastal_auto_water: variant.is_coastal(),
        tip_tolerance: settings.tip_tolerance,
    });
    let viewport = Viewport::fit(&centers, settings.hex_size, settings.padding, device_pixel_ratio);

    log::debug!(
        "generated {variant} board: {} cells, {} of {} labels used, {} of {} colours used",
        cells.len(),
        cells.iter().filter(|cell| cell.label.is_some()).count(),
        labels.len(),
        cells.iter().filter(|cell| cell.terrain != Terrain::Unassigned).count(),
        colors.len(),
    );

    Board { variant, cells, viewport }
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_logging(log::LevelFilter::Info);
}

/// Get WASM module version for debugging and cache verification
#[wasm_bindgen]
pub fn get_wasm_version() -> String {
    concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string()
}

/// Record the player-count selection; takes effect on the next render
///
/// @param players - Selected number of players (4 picks the four-player boards)
#[wasm_bindgen]
pub fn set_player_count(players: u32) {
    lock_state().set_player_count(PlayerCount::from_count(players));
}

/// Generate and draw a fresh board
///
/// **Learning Point**: Called for a variant change and for a re-roll alike.
/// The variant is validated before the canvas is touched, so an unknown
/// game mode logs an error and leaves the previous board on screen.
///
/// @param canvas_id - DOM id of the target `<canvas>`
/// @param variant - Game type selector value, e.g. "base" or "seafarers-newshores"
/// @returns true if a board was drawn
#[wasm_bindgen]
pub fn render_board(canvas_id: &str, variant: &str) -> bool {
    match try_render_board(canvas_id, variant) {
        Ok(()) => true,
        Err(err) => {
            log::error!("{err}");
            false
        }
    }
}

fn try_render_board(canvas_id: &str, variant: &str) -> Result<(), BoardError> {
    let variant: Variant = variant.parse()?;
    let players = lock_state().player_count();

    let settings = BoardSettings::default();
    let mut renderer = CanvasRenderer::from_element_id(canvas_id, &settings)?;
    let board = generate_board(
        variant,
        players,
        &settings,
        CanvasRenderer::device_pixel_ratio(),
        &mut rand::thread_rng(),
    );
    paint_and_store(board, &settings, &mut renderer, &mut lock_state())
}

/// Paint `board` and make it the stored board
///
/// A failed paint has already cleared the surface, so the stored board is
/// dropped too and queries never describe a board that is not on screen.
fn paint_and_store<R: Renderer + ?Sized>(
    board: Board,
    settings: &BoardSettings,
    renderer: &mut R,
    state: &mut BoardState,
) -> Result<(), BoardError> {
    match paint_board(&board, settings, renderer) {
        Ok(()) => {
            state.set_board(board);
            Ok(())
        }
        Err(err) => {
            state.clear_board();
            Err(err)
        }
    }
}

/// Terrain at a cell of the last drawn board
///
/// @returns Terrain as i32 (see `Terrain`), or -1 if no board or no such cell
#[wasm_bindgen]
pub fn get_cell_at(q: i32, r: i32) -> i32 {
    let state = lock_state();
    state
        .board()
        .and_then(|board| board.cell_at(AxialCoord::new(q, r)))
        .map_or(-1, |cell| cell.terrain as i32)
}

/// Number label at a cell of the last drawn board, empty when unlabelled
#[wasm_bindgen]
pub fn get_cell_label(q: i32, r: i32) -> String {
    let state = lock_state();
    state
        .board()
        .and_then(|board| board.cell_at(AxialCoord::new(q, r)))
        .and_then(|cell| cell.label.clone())
        .unwrap_or_default()
}

/// Statistics about the last drawn board
///
/// @returns JSON string: {"pasture":X,...,"unassigned":Y,"labelled":Z,"total":N}, or "{}" before the first render
#[wasm_bindgen]
pub fn get_stats() -> String {
    let state = lock_state();
    state
        .board()
        .map_or_else(|| "{}".to_string(), |board| board.stats().to_json())
}
