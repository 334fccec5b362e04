use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::{PieceClass, PieceTeam};
use crate::move_generation::movement_offsets::{
    pawn_capture_target, pawn_double_step_target, pawn_single_step_target,
};
use crate::move_generation::pseudo_move_shared::{
    classify_occupancy, verify_piece_at, SquareOccupancy,
};

/// Generates the pseudo-legal destinations for the pawn on `origin`.
///
/// Forward moves only exist while the square directly ahead is empty; a
/// blocked single step suppresses the double step as well. The double step
/// additionally requires the pawn to still be on its home rank. Diagonal
/// squares are destinations only when an enemy piece stands on them.
pub fn generate_pawn_pseudo_moves(
    board: &Board,
    origin: &BoardLocation,
    team: PieceTeam,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    verify_piece_at(board, origin, PieceClass::Pawn, team)?;
    let mut result = Vec::new();

    // Check first movement
    if let Ok(x) = pawn_single_step_target(origin, team) {
        if classify_occupancy(board, &x, team) == SquareOccupancy::Empty {
            result.push(x);
            // Check second movement if on the starting rank and the path is open
            if origin.1 == team.pawn_home_rank() {
                if let Ok(y) = pawn_double_step_target(origin, team) {
                    if classify_occupancy(board, &y, team) == SquareOccupancy::Empty {
                        result.push(y);
                    }
                }
            }
        }
    }

    // Diagonal captures require an enemy occupant; an empty diagonal is never
    // a destination
    for d_file in [-1, 1] {
        if let Ok(x) = pawn_capture_target(origin, team, d_file) {
            if classify_occupancy(board, &x, team) == SquareOccupancy::Enemy {
                result.push(x);
            }
        }
    }

    Ok(result)
}
