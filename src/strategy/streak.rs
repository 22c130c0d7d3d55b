use crate::Chips;
use crate::card::Card;
use crate::hand::score;

use super::{Action, Strategy};

/// A gambler's-fallacy player.
///
/// Every lost hand makes a win feel "due", so the bet doubles after each
/// loss up to `max_bet` and falls back to `base_bet` after a win. Plays like
/// the dealer: hit below 17, stand otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakStrategy {
    base_bet: Chips,
    max_bet: Chips,
    next_bet: Chips,
    losing_streak: u32,
}

impl StreakStrategy {
    /// Creates a streak player.
    #[must_use]
    pub fn new(base_bet: Chips, max_bet: Chips) -> Self {
        Self {
            base_bet,
            max_bet: max_bet.max(base_bet),
            next_bet: base_bet,
            losing_streak: 0,
        }
    }

    /// Returns the number of hands lost in a row.
    #[must_use]
    pub const fn losing_streak(&self) -> u32 {
        self.losing_streak
    }
}

impl Strategy for StreakStrategy {
    fn place_bet(&mut self, budget: Chips) -> Chips {
        if budget < self.base_bet {
            return 0;
        }
        self.next_bet.min(budget)
    }

    fn decide(&mut self, hand: &[Card], _dealer_upcard: Card) -> Action {
        if score(hand) < 17 {
            Action::Hit
        } else {
            Action::Stand
        }
    }

    fn settle(&mut self, payout: Chips, hand: &[Card], dealer_hand: &[Card]) {
        let own = score(hand);
        let dealer = score(dealer_hand);
        if payout == 0 {
            self.losing_streak += 1;
            self.next_bet = (self.next_bet * 2).min(self.max_bet);
        } else if own <= 21 && (dealer > 21 || own > dealer) {
            self.losing_streak = 0;
            self.next_bet = self.base_bet;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const fn c(rank: Rank) -> Card {
        Card::new(Suit::Hearts, rank)
    }

    #[test]
    fn doubles_after_losses_and_resets_after_win() {
        let mut strategy = StreakStrategy::new(5, 30);
        let bust = [c(Rank::Ten), c(Rank::Six), c(Rank::Nine)];
        let dealer = [c(Rank::Ten), c(Rank::Seven)];

        assert_eq!(strategy.place_bet(100), 5);
        strategy.settle(0, &bust, &dealer);
        assert_eq!(strategy.place_bet(100), 10);
        strategy.settle(0, &bust, &dealer);
        strategy.settle(0, &bust, &dealer);
        assert_eq!(strategy.place_bet(100), 30);
        assert_eq!(strategy.losing_streak(), 3);
        assert_eq!(strategy.place_bet(12), 12);

        let twenty = [c(Rank::King), c(Rank::Queen)];
        strategy.settle(60, &twenty, &dealer);
        assert_eq!(strategy.place_bet(100), 5);
        assert_eq!(strategy.losing_streak(), 0);
    }

    #[test]
    fn push_keeps_the_streak() {
        let mut strategy = StreakStrategy::new(5, 40);
        let seventeen = [c(Rank::Ten), c(Rank::Seven)];
        strategy.settle(0, &[c(Rank::Ten), c(Rank::Two), c(Rank::King)], &seventeen);
        strategy.settle(10, &seventeen, &seventeen);
        assert_eq!(strategy.losing_streak(), 1);
        assert_eq!(strategy.place_bet(100), 10);
    }

    #[test]
    fn plays_like_the_dealer() {
        let mut strategy = StreakStrategy::new(5, 40);
        let up = c(Rank::Six);
        assert_eq!(strategy.decide(&[c(Rank::Ten), c(Rank::Six)], up), Action::Hit);
        assert_eq!(strategy.decide(&[c(Rank::Ten), c(Rank::Seven)], up), Action::Stand);
    }
}
