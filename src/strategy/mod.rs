//! Decision-making strategies that occupy seats at the table.
//!
//! The round engine talks to every seat through the [`Strategy`] trait. A
//! strategy sizes its bet, watches cards dealt to other seats, picks an
//! [`Action`] for each unresolved hand, and hears the payout of each
//! settled hand. The engine owns the budget and debits and credits it; a
//! strategy only reads it when betting.

use crate::Chips;
use crate::card::Card;

mod basic;
mod counting;
mod random;
mod streak;

pub use basic::{BasicStrategy, basic_decision};
pub use counting::{CardCounter, CountSystem};
pub use random::RandomStrategy;
pub use streak::StreakStrategy;

/// A playing decision for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Action {
    /// Take one more card.
    Hit,
    /// Keep the hand as it is.
    Stand,
    /// Double the bet, take exactly one card, then stand.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// All four actions.
    pub const ALL: [Self; 4] = [Self::Hit, Self::Stand, Self::DoubleDown, Self::Split];
}

/// A seat's decision-making policy.
///
/// Illegal requests are never errors: the engine replaces a double it
/// cannot honor with [`Action::Hit`] and a split it cannot honor with
/// [`Action::Stand`].
pub trait Strategy {
    /// Returns the bet for the next round, between 0 and `budget` inclusive.
    ///
    /// A bet of 0 sits the seat out of the round.
    fn place_bet(&mut self, budget: Chips) -> Chips;

    /// Observes a card dealt anywhere at the table.
    ///
    /// `owner` is the seat that received the card, or `None` for the dealer.
    /// Cards dealt to this strategy's own seat are not reported, and the
    /// dealer's hole card is reported only when it is revealed.
    fn observe_card(&mut self, _card: Card, _owner: Option<usize>) {}

    /// Chooses how to play `hand` against the dealer's `dealer_upcard`.
    fn decide(&mut self, hand: &[Card], dealer_upcard: Card) -> Action;

    /// Hears the payout of one settled hand.
    ///
    /// The engine has already credited `payout` to the budget.
    fn settle(&mut self, _payout: Chips, _hand: &[Card], _dealer_hand: &[Card]) {}

    /// Called after the shoe was reshuffled.
    fn on_shuffle(&mut self) {}
}
