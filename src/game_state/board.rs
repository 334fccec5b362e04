use crate::chess_errors::ChessErrors;
use crate::game_state::board_location::{validate_board_location, BoardLocation};
use crate::game_state::chess_types::PieceRecord;

/// An 8x8 grid of optional piece records, indexed `[file][rank]`.
///
/// Each square owns its occupant by value; there is no sharing between
/// squares. Generators only ever read the board, so a `&Board` may be handed
/// to any number of concurrent generation calls.
#[derive(Default, Clone, Debug)]
pub struct Board {
    squares: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant read for a location already known to be on the board.
    ///
    /// Callers must bounds-check first; generators only index squares that
    /// came out of checked offset arithmetic.
    #[inline]
    pub fn view(&self, x: &BoardLocation) -> &Option<PieceRecord> {
        &self.squares[x.0 as usize][x.1 as usize]
    }

    /// Mutable occupant access for a location already known to be on the board.
    #[inline]
    pub fn at(&mut self, x: &BoardLocation) -> &mut Option<PieceRecord> {
        &mut self.squares[x.0 as usize][x.1 as usize]
    }

    /// Bounds-checked occupant read for caller-supplied locations.
    pub fn occupant(&self, x: &BoardLocation) -> Result<&Option<PieceRecord>, ChessErrors> {
        validate_board_location(x)?;
        Ok(self.view(x))
    }

    /// Places a piece on an empty square. Setup concern; generation never
    /// places pieces.
    pub fn add_piece_record(
        &mut self,
        record: PieceRecord,
        x: BoardLocation,
    ) -> Result<(), ChessErrors> {
        validate_board_location(&x)?;
        if self.view(&x).is_some() {
            return Err(ChessErrors::BoardLocationOccupied(x));
        }
        *self.at(&x) = Some(record);
        Ok(())
    }

    /// Removes and returns the piece on a square.
    pub fn remove_piece_record(&mut self, x: BoardLocation) -> Result<PieceRecord, ChessErrors> {
        validate_board_location(&x)?;
        match self.at(&x).take() {
            Some(record) => Ok(record),
            None => Err(ChessErrors::CannotRemoveFromEmptyLocation(x)),
        }
    }
}
