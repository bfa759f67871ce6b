/// Main library entry point for wasm-hex-board
///
/// This module organizes the WASM crate into logical sub-modules:
/// - types: Core type definitions
/// - config: Rendering settings
/// - error: Error type shared by generation and painting
/// - logging: Console backend for the `log` facade
/// - pool: Pool expansion and shuffling
/// - hex_utils: Hex lattice and coordinate utilities
/// - layout: Per-cell terrain and label assignment
/// - viewport: Canvas sizing
/// - variants: Board variants and their static tables
/// - render: Renderer seam and canvas painting
/// - state: Process-wide UI state
/// - board: Generation pipeline and the WASM entry points

// Module declarations
mod types;
mod config;
mod error;
mod logging;
mod pool;
mod hex_utils;
mod layout;
mod viewport;
mod variants;
mod render;
mod state;
mod board;

// WASM entry points
pub use board::{
    init, get_wasm_version, set_player_count, render_board, get_cell_at, get_cell_label, get_stats,
};

// Rust API for hosts that bring their own renderer
pub use board::{generate_board, Board, BoardStats};
pub use config::BoardSettings;
pub use error::BoardError;
pub use render::{paint_board, CanvasRenderer, Renderer};
pub use types::{AxialCoord, CellAssignment, PixelPoint, Terrain};
pub use variants::{PlayerCount, Variant};
pub use viewport::Viewport;
