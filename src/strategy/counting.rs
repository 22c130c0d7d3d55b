use crate::Chips;
use crate::card::{Card, DECK_SIZE, Rank};

use super::{Action, Strategy, basic_decision};

/// A named card-counting system: one weight per rank.
///
/// Weights are indexed in [`Rank::ALL`] order (Ace first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSystem {
    name: &'static str,
    weights: [i32; 13],
}

impl CountSystem {
    /// Hi-Lo.
    pub const HI_LO: Self = Self::new("Hi-Lo", [-1, 1, 1, 1, 1, 1, 0, 0, 0, -1, -1, -1, -1]);
    /// Hi-Opt I.
    pub const HI_OPT_I: Self = Self::new("Hi-Opt I", [0, 0, 1, 1, 1, 1, 0, 0, 0, -1, -1, -1, -1]);
    /// Hi-Opt II.
    pub const HI_OPT_II: Self =
        Self::new("Hi-Opt II", [0, 1, 1, 2, 2, 1, 1, 0, 0, -2, -2, -2, -2]);
    /// Knock-Out, an unbalanced count.
    pub const KO: Self = Self::new("KO", [-1, 1, 1, 1, 1, 1, 1, 0, 0, -1, -1, -1, -1]);
    /// Omega II.
    pub const OMEGA_II: Self =
        Self::new("Omega II", [0, 1, 1, 2, 2, 2, 1, 0, -1, -2, -2, -2, -2]);
    /// Zen Count.
    pub const ZEN: Self = Self::new("Zen Count", [-1, 1, 1, 2, 2, 2, 1, 0, 0, -2, -2, -2, -2]);
    /// Thorp's Ten Count.
    pub const TEN_COUNT: Self =
        Self::new("10 Count", [4, 4, 4, 4, 4, 4, 4, 4, 4, -9, -9, -9, -9]);

    /// Every built-in system.
    pub const ALL: [Self; 7] = [
        Self::HI_LO,
        Self::HI_OPT_I,
        Self::HI_OPT_II,
        Self::KO,
        Self::OMEGA_II,
        Self::ZEN,
        Self::TEN_COUNT,
    ];

    /// Creates a custom system.
    #[must_use]
    pub const fn new(name: &'static str, weights: [i32; 13]) -> Self {
        Self { name, weights }
    }

    /// Returns the system's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the count adjustment for `rank`.
    #[must_use]
    pub const fn weight(&self, rank: Rank) -> i32 {
        self.weights[rank.index()]
    }
}

/// A counting player: keeps a running count with a [`CountSystem`], sizes
/// bets by the true count, and plays basic strategy.
///
/// The bet is `base_bet` times the true count rounded up, clamped to
/// `1..=max_units` units and to the budget.
#[derive(Debug, Clone)]
pub struct CardCounter {
    system: CountSystem,
    decks: u8,
    base_bet: Chips,
    max_units: Chips,
    running_count: i32,
    cards_seen: usize,
}

impl CardCounter {
    /// Creates a counter for a shoe of `decks` decks.
    #[must_use]
    pub const fn new(system: CountSystem, decks: u8, base_bet: Chips, max_units: Chips) -> Self {
        Self {
            system,
            decks,
            base_bet,
            max_units,
            running_count: 0,
            cards_seen: 0,
        }
    }

    /// Returns the counting system in use.
    #[must_use]
    pub const fn system(&self) -> &CountSystem {
        &self.system
    }

    /// Returns the running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Returns the number of cards counted since the last shuffle.
    #[must_use]
    pub const fn cards_seen(&self) -> usize {
        self.cards_seen
    }

    /// Estimated cards left in the shoe, never below half a deck.
    fn cards_left(&self) -> usize {
        (self.decks as usize * DECK_SIZE)
            .saturating_sub(self.cards_seen)
            .max(DECK_SIZE / 2)
    }

    /// Returns the running count divided by the estimated decks remaining.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let decks_left = self.cards_left() as f64 / DECK_SIZE as f64;
        f64::from(self.running_count) / decks_left
    }

    /// Returns the bet multiplier for the current count.
    #[must_use]
    pub fn bet_units(&self) -> Chips {
        if self.running_count <= 0 {
            return 1;
        }
        let scaled = Chips::from(self.running_count) * DECK_SIZE as Chips;
        let cards_left = self.cards_left() as Chips;
        let ceil_true_count = (scaled + cards_left - 1) / cards_left;
        ceil_true_count.clamp(1, self.max_units.max(1))
    }
}

impl Strategy for CardCounter {
    fn place_bet(&mut self, budget: Chips) -> Chips {
        if budget < self.base_bet {
            return 0;
        }
        (self.base_bet * self.bet_units()).min(budget)
    }

    fn observe_card(&mut self, card: Card, _owner: Option<usize>) {
        self.running_count += self.system.weight(card.rank);
        self.cards_seen += 1;
    }

    fn decide(&mut self, hand: &[Card], dealer_upcard: Card) -> Action {
        basic_decision(hand, dealer_upcard)
    }

    fn on_shuffle(&mut self) {
        self.running_count = 0;
        self.cards_seen = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::shoe::standard_cards;

    #[test]
    fn balanced_systems_sum_to_zero_over_a_deck() {
        for system in CountSystem::ALL {
            let total: i32 = standard_cards(1)
                .iter()
                .map(|card| system.weight(card.rank))
                .sum();
            if system == CountSystem::KO {
                assert_eq!(total, 4, "{}", system.name());
            } else {
                assert_eq!(total, 0, "{}", system.name());
            }
        }
    }

    #[test]
    fn counts_and_resets_on_shuffle() {
        let mut counter = CardCounter::new(CountSystem::HI_LO, 6, 10, 8);
        for rank in [Rank::Two, Rank::Five, Rank::Six, Rank::King] {
            counter.observe_card(Card::new(Suit::Hearts, rank), None);
        }
        assert_eq!(counter.running_count(), 2);
        assert_eq!(counter.cards_seen(), 4);

        counter.on_shuffle();
        assert_eq!(counter.running_count(), 0);
        assert_eq!(counter.cards_seen(), 0);
        assert!(counter.true_count().abs() < f64::EPSILON);
    }

    #[test]
    fn bets_scale_with_true_count() {
        let mut counter = CardCounter::new(CountSystem::HI_LO, 1, 10, 4);
        assert_eq!(counter.place_bet(1000), 10);

        // Running count +3 after 26 cards: half a deck left, true count +6.
        for _ in 0..3 {
            counter.observe_card(Card::new(Suit::Clubs, Rank::Five), Some(0));
        }
        for _ in 0..23 {
            counter.observe_card(Card::new(Suit::Clubs, Rank::Eight), Some(0));
        }
        assert!((counter.true_count() - 6.0).abs() < 1e-9);
        assert_eq!(counter.bet_units(), 4);
        assert_eq!(counter.place_bet(1000), 40);
        assert_eq!(counter.place_bet(25), 25);
        assert_eq!(counter.place_bet(5), 0);
    }

    #[test]
    fn negative_count_bets_minimum() {
        let mut counter = CardCounter::new(CountSystem::ZEN, 6, 5, 10);
        counter.observe_card(Card::new(Suit::Spades, Rank::Ten), None);
        assert_eq!(counter.running_count(), -2);
        assert_eq!(counter.place_bet(100), 5);
    }
}
