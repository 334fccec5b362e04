use crate::chess_errors::ChessErrors;

/// A board square as a `(file, rank)` pair, each coordinate in `0..=7` when
/// the location is valid.
pub type BoardLocation = (i8, i8);

/// Moves a board location by a specified file and rank offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_file` - The file offset.
/// * `d_rank` - The rank offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - Returns the new board location if
///   within bounds, otherwise returns an error.
pub fn move_board_location(
    x: &BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::TriedToMoveOutOfBounds((*x, d_file, d_rank)))
    } else {
        Ok(y)
    }
}

/// Checks that a caller-supplied location is on the board.
///
/// Generation never clamps an out-of-range origin; it is rejected here so a
/// wrapped index can never corrupt a move set.
pub fn validate_board_location(x: &BoardLocation) -> Result<(), ChessErrors> {
    if (x.0 < 0) | (x.0 > 7) | (x.1 < 0) | (x.1 > 7) {
        Err(ChessErrors::OutOfBounds(*x))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_within_bounds() {
        let moved = move_board_location(&(4, 3), 1, 2).unwrap();
        assert_eq!(moved, (5, 5));
    }

    #[test]
    fn move_off_any_edge_is_rejected() {
        assert!(move_board_location(&(0, 0), -1, 0).is_err());
        assert!(move_board_location(&(0, 0), 0, -1).is_err());
        assert!(move_board_location(&(7, 7), 1, 0).is_err());
        assert!(move_board_location(&(7, 7), 0, 1).is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_origins() {
        assert!(validate_board_location(&(0, 0)).is_ok());
        assert!(validate_board_location(&(7, 7)).is_ok());
        assert!(matches!(
            validate_board_location(&(8, 0)),
            Err(ChessErrors::OutOfBounds((8, 0)))
        ));
        assert!(matches!(
            validate_board_location(&(3, -1)),
            Err(ChessErrors::OutOfBounds((3, -1)))
        ));
    }
}
