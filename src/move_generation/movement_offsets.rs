use crate::chess_errors::ChessErrors;
use crate::game_state::board_location::{move_board_location, BoardLocation};
use crate::game_state::chess_types::PieceTeam;

/// Diagonal step vectors, counter-clockwise from north-east.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Orthogonal step vectors, counter-clockwise from east.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Knight jump offsets, counter-clockwise from east-north-east.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Generates the target for a pawn single step.
pub fn pawn_single_step_target(
    origin: &BoardLocation,
    team: PieceTeam,
) -> Result<BoardLocation, ChessErrors> {
    move_board_location(origin, 0, team.forward_direction())
}

/// Generates the target for a pawn double step.
pub fn pawn_double_step_target(
    origin: &BoardLocation,
    team: PieceTeam,
) -> Result<BoardLocation, ChessErrors> {
    move_board_location(origin, 0, 2 * team.forward_direction())
}

/// Generates the target for a pawn capture toward `d_file` (-1 or 1).
pub fn pawn_capture_target(
    origin: &BoardLocation,
    team: PieceTeam,
    d_file: i8,
) -> Result<BoardLocation, ChessErrors> {
    move_board_location(origin, d_file, team.forward_direction())
}
