use crate::Chips;
use crate::card::Card;
use crate::hand::{is_soft, score};

use super::{Action, Strategy};

fn pair_decision(pair_value: u8, up: u8) -> Option<Action> {
    let split = match pair_value {
        11 | 8 => true,
        9 => matches!(up, 2..=6 | 8 | 9),
        7 | 3 | 2 => (2..=7).contains(&up),
        6 => (2..=6).contains(&up),
        4 => matches!(up, 5 | 6),
        _ => false,
    };
    split.then_some(Action::Split)
}

fn soft_decision(total: u8, up: u8, can_double: bool) -> Action {
    let double_or = |fallback| {
        if can_double {
            Action::DoubleDown
        } else {
            fallback
        }
    };

    match total {
        13 | 14 if matches!(up, 5 | 6) => double_or(Action::Hit),
        15 | 16 if (4..=6).contains(&up) => double_or(Action::Hit),
        17 if (3..=6).contains(&up) => double_or(Action::Hit),
        18 if (2..=6).contains(&up) => double_or(Action::Stand),
        18 if matches!(up, 7 | 8) => Action::Stand,
        19..=21 => Action::Stand,
        _ => Action::Hit,
    }
}

fn hard_decision(total: u8, up: u8, can_double: bool) -> Action {
    let double_or_hit = if can_double {
        Action::DoubleDown
    } else {
        Action::Hit
    };

    match total {
        9 if (3..=6).contains(&up) => double_or_hit,
        10 if (2..=9).contains(&up) => double_or_hit,
        11 if up != 11 => double_or_hit,
        12 if (4..=6).contains(&up) => Action::Stand,
        13..=16 if (2..=6).contains(&up) => Action::Stand,
        17.. => Action::Stand,
        _ => Action::Hit,
    }
}

/// Returns the basic-strategy play for `hand` against `dealer_upcard`.
///
/// The table covers every pair, soft total and hard total, so any hand gets
/// an answer. Doubles are only suggested on two-card hands and splits only
/// on pairs.
///
/// ```
/// use bjsim::{Action, Card, Rank, Suit, basic_decision};
///
/// let hand = [Card::new(Suit::Clubs, Rank::Six), Card::new(Suit::Hearts, Rank::Five)];
/// let up = Card::new(Suit::Spades, Rank::Nine);
/// assert_eq!(basic_decision(&hand, up), Action::DoubleDown);
/// ```
#[must_use]
pub fn basic_decision(hand: &[Card], dealer_upcard: Card) -> Action {
    let up = dealer_upcard.point_value();
    let two_cards = hand.len() == 2;

    if two_cards && hand[0].point_value() == hand[1].point_value() {
        if let Some(action) = pair_decision(hand[0].point_value(), up) {
            return action;
        }
    }

    let total = score(hand);
    if is_soft(hand) {
        soft_decision(total, up, two_cards)
    } else {
        hard_decision(total, up, two_cards)
    }
}

/// Flat bettor that plays basic strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicStrategy {
    bet: Chips,
}

impl BasicStrategy {
    /// Creates a basic-strategy player that always bets `bet`.
    #[must_use]
    pub const fn new(bet: Chips) -> Self {
        Self { bet }
    }
}

impl Strategy for BasicStrategy {
    fn place_bet(&mut self, budget: Chips) -> Chips {
        if budget >= self.bet { self.bet } else { 0 }
    }

    fn decide(&mut self, hand: &[Card], dealer_upcard: Card) -> Action {
        basic_decision(hand, dealer_upcard)
    }
}
