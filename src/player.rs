//! A seat at the table: a name, a budget and the strategy playing it.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Chips;
use crate::card::Card;
use crate::strategy::{Action, Strategy};

/// A seat at the table.
///
/// The budget is owned here and changed only by the engine: debited when a
/// bet, double or split is placed and credited when a hand is settled.
pub struct Player {
    name: String,
    budget: Chips,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Creates a seat with a starting budget.
    pub fn new(name: impl Into<String>, budget: Chips, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            budget,
            strategy,
        }
    }

    /// Returns the seat's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current budget.
    #[must_use]
    pub const fn budget(&self) -> Chips {
        self.budget
    }

    pub(crate) const fn debit(&mut self, amount: Chips) {
        self.budget -= amount;
    }

    pub(crate) fn place_bet(&mut self) -> Chips {
        self.strategy.place_bet(self.budget)
    }

    pub(crate) fn observe_card(&mut self, card: Card, owner: Option<usize>) {
        self.strategy.observe_card(card, owner);
    }

    pub(crate) fn decide(&mut self, hand: &[Card], dealer_upcard: Card) -> Action {
        self.strategy.decide(hand, dealer_upcard)
    }

    pub(crate) fn settle(&mut self, payout: Chips, hand: &[Card], dealer_hand: &[Card]) {
        self.budget += payout;
        self.strategy.settle(payout, hand, dealer_hand);
    }

    pub(crate) fn on_shuffle(&mut self) {
        self.strategy.on_shuffle();
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("budget", &self.budget)
            .finish_non_exhaustive()
    }
}
