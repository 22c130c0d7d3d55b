//! Game state types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has started yet.
    WaitingForPlayers,
    /// Collecting bets for the next round.
    Betting,
    /// Bets are placed; initial cards are due.
    Dealing,
    /// Seats are playing out their hands.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are compared and paid.
    Settlement,
    /// Round has ended; a reshuffle or a new round may follow.
    RoundOver,
}

/// The worklist cursor: which seat and which of its hands is being played.
///
/// Only meaningful while hands are being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Seat index.
    pub player_index: usize,
    /// Index into the seat's hands (for splits).
    pub hand_index: usize,
}
