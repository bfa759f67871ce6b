/// Process-wide UI state

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use crate::board::Board;
use crate::variants::PlayerCount;

/// Selection and output that outlive a single generation call
///
/// **Learning Point**: Only the player-count selection feeds generation,
/// and it is read once and passed down explicitly. The last board is kept
/// purely so the page can query cells and stats after drawing.
pub struct BoardState {
    player_count: PlayerCount,
    board: Option<Board>,
}

impl BoardState {
    pub fn new() -> Self {
        BoardState {
            player_count: PlayerCount::default(),
            board: None,
        }
    }

    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    pub fn set_player_count(&mut self, players: PlayerCount) {
        self.player_count = players;
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Forget the stored board
    pub fn clear_board(&mut self) {
        self.board = None;
    }

    /// Replace the previous board wholesale
    pub fn set_board(&mut self, board: Board) {
        self.board = Some(board);
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Global board state (the page is single-threaded; the mutex only satisfies `Sync`)
pub static BOARD_STATE: LazyLock<Mutex<BoardState>> =
    LazyLock::new(|| Mutex::new(BoardState::new()));

/// Lock the global state, recovering from a poisoned lock
pub fn lock_state() -> MutexGuard<'static, BoardState> {
    BOARD_STATE.lock().unwrap_or_else(PoisonError::into_inner)
}
