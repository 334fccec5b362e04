//! Helpers shared by the per-piece pseudo-legal move generators: occupancy
//! classification, the common origin precondition gate, and the ray-casting
//! loop used by both sliding pieces.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::{
    move_board_location, validate_board_location, BoardLocation,
};
use crate::game_state::chess_types::{PieceClass, PieceTeam};

/// What a generator found on a candidate square, relative to the moving team.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SquareOccupancy {
    Empty,
    Friendly,
    Enemy,
}

/// Classifies the occupant of a location already known to be on the board.
#[inline]
pub fn classify_occupancy(board: &Board, x: &BoardLocation, team: PieceTeam) -> SquareOccupancy {
    match board.view(x) {
        None => SquareOccupancy::Empty,
        Some(record) if record.team == team => SquareOccupancy::Friendly,
        Some(_) => SquareOccupancy::Enemy,
    }
}

/// Verifies that `origin` is on the board and holds a piece of the expected
/// class and the declared team.
///
/// # Returns
///
/// * `Ok(())` if the piece matches.
/// * `Err(ChessErrors::OutOfBounds)` for an off-board origin.
/// * `Err(ChessErrors::TryToViewOrEditEmptySquare)` for an empty origin.
/// * `Err(ChessErrors::GeneratingWrongMovementForPieceClass)` for a class
///   mismatch.
/// * `Err(ChessErrors::DeclaredTeamMismatch)` for a team mismatch.
pub fn verify_piece_at(
    board: &Board,
    origin: &BoardLocation,
    class: PieceClass,
    team: PieceTeam,
) -> Result<(), ChessErrors> {
    validate_board_location(origin)?;
    match board.view(origin) {
        None => Err(ChessErrors::TryToViewOrEditEmptySquare(*origin)),
        Some(record) => {
            if record.class != class {
                return Err(ChessErrors::GeneratingWrongMovementForPieceClass(
                    record.class,
                ));
            }
            if record.team != team {
                return Err(ChessErrors::DeclaredTeamMismatch((*origin, team)));
            }
            Ok(())
        }
    }
}

/// Walks each direction outward from `origin` until the board edge or the
/// first occupant. Empty squares are kept, an enemy occupant is kept and ends
/// the ray, a friendly occupant ends the ray without being kept.
pub fn slide_moves(
    board: &Board,
    origin: &BoardLocation,
    team: PieceTeam,
    directions: &[(i8, i8); 4],
) -> Vec<BoardLocation> {
    let mut result = Vec::new();
    for &(d_file, d_rank) in directions {
        'ray: for distance in 1..8 {
            let target = match move_board_location(origin, d_file * distance, d_rank * distance) {
                Ok(x) => x,
                Err(_) => break 'ray,
            };
            match classify_occupancy(board, &target, team) {
                SquareOccupancy::Empty => result.push(target),
                SquareOccupancy::Enemy => {
                    result.push(target);
                    break 'ray;
                }
                SquareOccupancy::Friendly => break 'ray,
            }
        }
    }
    result
}
