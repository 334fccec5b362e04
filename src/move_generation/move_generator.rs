use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::{validate_board_location, BoardLocation};
use crate::game_state::chess_types::{PieceClass, PieceTeam};
use crate::move_generation::pseudo_moves_bishop::generate_bishop_pseudo_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_pseudo_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_pseudo_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_pseudo_moves;

/// Generates the pseudo-legal destinations for the piece on `origin`.
///
/// The declared `team` must agree with the occupant stored on the board; a
/// disagreement is a precondition violation, never silently reconciled. The
/// returned order is the generators' deterministic emission order and carries
/// no meaning. Legality against check is the caller's concern.
///
/// # Arguments
///
/// * `board` - The board snapshot to read. Never mutated.
/// * `origin` - The square holding the piece to move.
/// * `team` - The team the caller believes is moving.
///
/// # Returns
///
/// * `Ok(Vec<BoardLocation>)` - The destinations, possibly empty.
/// * `Err(ChessErrors)` - A violated precondition; see `chess_errors`.
pub fn generate_pseudo_moves(
    board: &Board,
    origin: &BoardLocation,
    team: PieceTeam,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    validate_board_location(origin)?;
    let record = match board.view(origin) {
        Some(record) => *record,
        None => return Err(ChessErrors::TryToViewOrEditEmptySquare(*origin)),
    };
    if record.team != team {
        return Err(ChessErrors::DeclaredTeamMismatch((*origin, team)));
    }
    match record.class {
        PieceClass::Pawn => generate_pawn_pseudo_moves(board, origin, team),
        PieceClass::Bishop => generate_bishop_pseudo_moves(board, origin, team),
        PieceClass::Rook => generate_rook_pseudo_moves(board, origin, team),
        PieceClass::Knight => generate_knight_pseudo_moves(board, origin, team),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceRecord;

    fn place(board: &mut Board, class: PieceClass, team: PieceTeam, x: BoardLocation) {
        board
            .add_piece_record(PieceRecord { class, team }, x)
            .unwrap();
    }

    #[test]
    fn dispatch_selects_the_matching_generator() {
        let mut board = Board::new();
        place(&mut board, PieceClass::Pawn, PieceTeam::Light, (0, 1));
        place(&mut board, PieceClass::Knight, PieceTeam::Light, (3, 3));
        place(&mut board, PieceClass::Bishop, PieceTeam::Dark, (7, 7));
        place(&mut board, PieceClass::Rook, PieceTeam::Dark, (7, 0));

        let pawn = generate_pseudo_moves(&board, &(0, 1), PieceTeam::Light).unwrap();
        assert_eq!(pawn, vec![(0, 2), (0, 3)]);

        let knight = generate_pseudo_moves(&board, &(3, 3), PieceTeam::Light).unwrap();
        assert_eq!(knight.len(), 8);

        let bishop = generate_pseudo_moves(&board, &(7, 7), PieceTeam::Dark).unwrap();
        assert_eq!(bishop.len(), 4);

        // Six squares up the file to the friendly bishop, seven along the rank
        let rook = generate_pseudo_moves(&board, &(7, 0), PieceTeam::Dark).unwrap();
        assert_eq!(rook.len(), 13);
    }

    #[test]
    fn out_of_range_origin_fails_fast() {
        let board = Board::new();
        assert!(matches!(
            generate_pseudo_moves(&board, &(8, 3), PieceTeam::Light),
            Err(ChessErrors::OutOfBounds((8, 3)))
        ));
        assert!(matches!(
            generate_pseudo_moves(&board, &(-1, 0), PieceTeam::Dark),
            Err(ChessErrors::OutOfBounds((-1, 0)))
        ));
    }

    #[test]
    fn empty_origin_is_an_error_not_an_empty_move_set() {
        let board = Board::new();
        assert!(matches!(
            generate_pseudo_moves(&board, &(4, 4), PieceTeam::Light),
            Err(ChessErrors::TryToViewOrEditEmptySquare((4, 4)))
        ));
    }

    #[test]
    fn declared_team_mismatch_is_rejected() {
        let mut board = Board::new();
        place(&mut board, PieceClass::Bishop, PieceTeam::Dark, (2, 5));
        assert!(matches!(
            generate_pseudo_moves(&board, &(2, 5), PieceTeam::Light),
            Err(ChessErrors::DeclaredTeamMismatch(((2, 5), PieceTeam::Light)))
        ));
    }

    fn random_location() -> BoardLocation {
        (
            (rand::random::<u8>() % 8) as i8,
            (rand::random::<u8>() % 8) as i8,
        )
    }

    fn random_record() -> PieceRecord {
        let class = match rand::random::<u8>() % 4 {
            0 => PieceClass::Pawn,
            1 => PieceClass::Bishop,
            2 => PieceClass::Rook,
            _ => PieceClass::Knight,
        };
        let team = if rand::random::<bool>() {
            PieceTeam::Light
        } else {
            PieceTeam::Dark
        };
        PieceRecord { class, team }
    }

    /// Scatters pieces on a random board and returns one of them as the mover.
    fn random_board() -> (Board, BoardLocation, PieceRecord) {
        let mut board = Board::new();
        let mover_location = random_location();
        let mover = random_record();
        board.add_piece_record(mover, mover_location).unwrap();
        for _ in 0..(rand::random::<u8>() % 12) {
            // Collisions with already placed pieces are simply skipped
            let _ = board.add_piece_record(random_record(), random_location());
        }
        (board, mover_location, mover)
    }

    #[test]
    fn destinations_are_in_bounds_and_never_the_origin() {
        for _ in 0..500 {
            let (board, origin, mover) = random_board();
            let moves = generate_pseudo_moves(&board, &origin, mover.team).unwrap();
            for destination in &moves {
                assert!(validate_board_location(destination).is_ok());
                assert_ne!(*destination, origin);
            }
        }
    }

    #[test]
    fn destinations_are_duplicate_free() {
        for _ in 0..500 {
            let (board, origin, mover) = random_board();
            let moves = generate_pseudo_moves(&board, &origin, mover.team).unwrap();
            for (i, a) in moves.iter().enumerate() {
                for b in &moves[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn generation_is_idempotent_over_an_unchanged_board() {
        for _ in 0..500 {
            let (board, origin, mover) = random_board();
            let first = generate_pseudo_moves(&board, &origin, mover.team).unwrap();
            let second = generate_pseudo_moves(&board, &origin, mover.team).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn destinations_never_hold_a_friendly_piece() {
        for _ in 0..500 {
            let (board, origin, mover) = random_board();
            let moves = generate_pseudo_moves(&board, &origin, mover.team).unwrap();
            for destination in &moves {
                if let Some(occupant) = board.view(destination) {
                    assert_eq!(occupant.team, mover.team.opposite());
                }
            }
        }
    }
}
