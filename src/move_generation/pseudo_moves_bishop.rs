use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::{PieceClass, PieceTeam};
use crate::move_generation::movement_offsets::BISHOP_DIRECTIONS;
use crate::move_generation::pseudo_move_shared::{slide_moves, verify_piece_at};

/// Generates the pseudo-legal destinations for the bishop on `origin` by
/// sliding along the four diagonals until blocked.
pub fn generate_bishop_pseudo_moves(
    board: &Board,
    origin: &BoardLocation,
    team: PieceTeam,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    verify_piece_at(board, origin, PieceClass::Bishop, team)?;
    Ok(slide_moves(board, origin, team, &BISHOP_DIRECTIONS))
}
