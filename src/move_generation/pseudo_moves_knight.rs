use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::{move_board_location, BoardLocation};
use crate::game_state::chess_types::{PieceClass, PieceTeam};
use crate::move_generation::movement_offsets::KNIGHT_JUMPS;
use crate::move_generation::pseudo_move_shared::{
    classify_occupancy, verify_piece_at, SquareOccupancy,
};

/// Generates the pseudo-legal destinations for the knight on `origin`.
///
/// Knights jump, so intervening pieces are never consulted; a target is kept
/// whenever it is on the board and not held by a friendly piece.
pub fn generate_knight_pseudo_moves(
    board: &Board,
    origin: &BoardLocation,
    team: PieceTeam,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    verify_piece_at(board, origin, PieceClass::Knight, team)?;
    let mut result = Vec::new();
    for &(d_file, d_rank) in &KNIGHT_JUMPS {
        if let Ok(x) = move_board_location(origin, d_file, d_rank) {
            if classify_occupancy(board, &x, team) != SquareOccupancy::Friendly {
                result.push(x);
            }
        }
    }
    Ok(result)
}
