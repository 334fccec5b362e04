use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceClass, PieceRecord, PieceTeam};

/// Bundled game state consumed and maintained by the surrounding harness.
///
/// Move generation only ever reads `board`; the turn, capture lists, and
/// check flags are inert bookkeeping that the harness updates as it applies
/// moves. Nothing in this crate mutates them.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub turn: PieceTeam,
    pub captured_light: Vec<PieceRecord>,
    pub captured_dark: Vec<PieceRecord>,
    pub light_in_check: bool,
    pub dark_in_check: bool,
    pub checkmate: bool,
}

impl GameState {
    /// Starting state: Light to move, each side's pawns across their home
    /// rank, and nothing else on the board.
    pub fn new() -> Self {
        let mut board = Board::new();
        for file in 0..8 {
            *board.at(&(file, PieceTeam::Light.pawn_home_rank())) = Some(PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::Light,
            });
            *board.at(&(file, PieceTeam::Dark.pawn_home_rank())) = Some(PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::Dark,
            });
        }
        GameState {
            board,
            turn: PieceTeam::Light,
            captured_light: Vec::new(),
            captured_dark: Vec::new(),
            light_in_check: false,
            dark_in_check: false,
            checkmate: false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_state_has_pawns_on_home_ranks() {
        let game = GameState::new();
        for file in 0..8 {
            let light = game.board.view(&(file, 1)).unwrap();
            assert_eq!(light.class, PieceClass::Pawn);
            assert_eq!(light.team, PieceTeam::Light);

            let dark = game.board.view(&(file, 6)).unwrap();
            assert_eq!(dark.class, PieceClass::Pawn);
            assert_eq!(dark.team, PieceTeam::Dark);
        }
        for file in 0..8 {
            for rank in [0, 2, 3, 4, 5, 7] {
                assert!(game.board.view(&(file, rank)).is_none());
            }
        }
    }

    #[test]
    fn starting_state_bookkeeping_is_clear() {
        let game = GameState::new();
        assert_eq!(game.turn, PieceTeam::Light);
        assert!(game.captured_light.is_empty());
        assert!(game.captured_dark.is_empty());
        assert!(!game.light_in_check);
        assert!(!game.dark_in_check);
        assert!(!game.checkmate);
    }
}
