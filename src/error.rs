//! Error types for game operations.

use thiserror::Error;

use crate::Chips;

/// Errors raised when validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OptionsError {
    /// The shoe must hold at least one deck.
    #[error("shoe must contain at least one deck")]
    NoDecks,
    /// Penetration must lie in `(0, 1]`.
    #[error("penetration {0} is outside (0, 1]")]
    InvalidPenetration(f64),
}

/// Errors raised by a [`Shoe`](crate::Shoe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A card was drawn after the last card of the shoe.
    ///
    /// This only happens when the reshuffle policy was not honored.
    #[error("shoe exhausted after {dealt} cards")]
    Exhausted {
        /// Cards dealt before the failed draw.
        dealt: usize,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// A strategy returned a negative bet.
    #[error("seat {seat} placed a negative bet of {bet}")]
    NegativeBet {
        /// Seat that placed the bet.
        seat: usize,
        /// The offending bet.
        bet: Chips,
    },
    /// A strategy bet more than its budget.
    #[error("seat {seat} bet {bet} with a budget of {budget}")]
    ExceedsBudget {
        /// Seat that placed the bet.
        seat: usize,
        /// The offending bet.
        bet: Chips,
        /// Budget before the bet.
        budget: Chips,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The shoe ran out of cards.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur while playing out player hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for player actions.
    #[error("invalid game state for player actions")]
    InvalidState,
    /// The shoe ran out of cards.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The shoe ran out of cards.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Any error that aborts a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Playing out player hands failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// Reshuffling failed.
    #[error(transparent)]
    Reshuffle(#[from] ReshuffleError),
}
