//! Errors used throughout the move generation crate.
//!
//! This module defines the canonical error type returned by the board model
//! and the pseudo-legal move generators. The enum `ChessErrors` is used as
//! the single error type across the crate to simplify propagation and
//! matching. Each variant carries contextual information where appropriate.
//!
//! Every variant is a precondition violation surfaced to the immediate
//! caller; nothing in this crate retries or recovers internally. Board-edge
//! clipping during generation is ordinary control flow, not an error, and an
//! empty move list is a valid result, never an error signal.

use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::{PieceClass, PieceTeam};

/// Unified error type for the move generation crate.
#[derive(Debug)]
pub enum ChessErrors {
    /// A caller-supplied board location lies outside the 8x8 board.
    ///
    /// Payload: the offending location.
    OutOfBounds(BoardLocation),

    /// Attempted to move from `BoardLocation` by the delta `(d_file, d_rank)`
    /// which would place the result off the board.
    ///
    /// Payload: (origin_location, d_file, d_rank)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// The team declared by the caller disagrees with the team of the piece
    /// actually stored at the origin square.
    ///
    /// Payload: (origin_location, declared_team)
    DeclaredTeamMismatch((BoardLocation, PieceTeam)),

    /// Attempted to view or edit a square that is empty (no piece present).
    ///
    /// Payload: the empty square's location.
    TryToViewOrEditEmptySquare(BoardLocation),

    /// A piece-specific movement generator was invoked for the wrong piece
    /// class (for example generating pawn moves for a rook).
    ///
    /// Payload: the class of the piece actually found at the origin.
    GeneratingWrongMovementForPieceClass(PieceClass),

    /// Attempted to place a piece on a square that is already occupied.
    ///
    /// Payload: the occupied square's location.
    BoardLocationOccupied(BoardLocation),

    /// Attempted to remove a piece from an empty square.
    ///
    /// Payload: the location that was expected to contain a piece.
    CannotRemoveFromEmptyLocation(BoardLocation),
}
