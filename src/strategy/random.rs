use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Chips;
use crate::card::Card;

use super::{Action, Strategy};

/// Bets a random amount and picks a uniformly random action.
///
/// Seeded so that simulations stay reproducible.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
    min_bet: Chips,
    max_bet: Chips,
}

impl RandomStrategy {
    /// Creates a random player betting between `min_bet` and `max_bet`.
    #[must_use]
    pub fn new(min_bet: Chips, max_bet: Chips, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            min_bet,
            max_bet: max_bet.max(min_bet),
        }
    }
}

impl Strategy for RandomStrategy {
    fn place_bet(&mut self, budget: Chips) -> Chips {
        if budget < self.min_bet {
            return 0;
        }
        let high = self.max_bet.min(budget);
        self.rng.random_range(self.min_bet..=high)
    }

    fn decide(&mut self, _hand: &[Card], _dealer_upcard: Card) -> Action {
        *Action::ALL.choose(&mut self.rng).unwrap_or(&Action::Stand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn bets_stay_in_range_and_budget() {
        let mut strategy = RandomStrategy::new(5, 50, 9);
        for _ in 0..200 {
            let bet = strategy.place_bet(20);
            assert!((5..=20).contains(&bet));
        }
        assert_eq!(strategy.place_bet(4), 0);
    }

    #[test]
    fn seeded_decisions_repeat() {
        let hand = [
            Card::new(Suit::Clubs, Rank::Nine),
            Card::new(Suit::Hearts, Rank::Four),
        ];
        let up = Card::new(Suit::Spades, Rank::Ten);
        let mut a = RandomStrategy::new(1, 10, 77);
        let mut b = RandomStrategy::new(1, 10, 77);
        for _ in 0..50 {
            assert_eq!(a.decide(&hand, up), b.decide(&hand, up));
        }
    }
}
