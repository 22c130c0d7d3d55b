//! Round result types for showdown.

use alloc::vec::Vec;

use crate::Chips;

/// Result of a single hand after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher value).
    PlayerWins,
    /// Dealer wins (player busts, dealer natural, or dealer has the higher value).
    DealerWins,
    /// Push (tie); the bet is returned.
    Push,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The amount wagered on this hand, including a double.
    pub bet: Chips,
    /// The amount credited back to the player.
    pub payout: Chips,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
    /// Whether the hand was a natural.
    pub natural: bool,
}

/// Result for a single seat after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerResult {
    /// The seat index.
    pub seat: usize,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Total wagered across all hands.
    pub total_bet: Chips,
    /// Total payout for all hands.
    pub total_payout: Chips,
    /// Net result (positive = profit, negative = loss).
    pub net: Chips,
}

/// Result of the entire round after showdown.
///
/// Seats that sat the round out have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundResult {
    /// Results for each betting seat, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Returns the result for `seat`, if it played the round.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.seat == seat)
    }
}
