//! Game configuration options.

use crate::Chips;
use crate::error::OptionsError;

/// Rounding mode for the 3:2 blackjack bonus on odd bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round the half chip up.
    Up,
    /// Round the half chip down.
    #[default]
    Down,
}

impl RoundingMode {
    /// Returns the amount returned for a winning natural on `bet`.
    ///
    /// The stake comes back together with a 3:2 bonus.
    ///
    /// ```
    /// use bjsim::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::Down.natural_payout(10), 25);
    /// assert_eq!(RoundingMode::Down.natural_payout(5), 12);
    /// assert_eq!(RoundingMode::Up.natural_payout(5), 13);
    /// ```
    #[must_use]
    pub const fn natural_payout(self, bet: Chips) -> Chips {
        let bonus = match self {
            Self::Up => (bet * 3 + 1) / 2,
            Self::Down => bet * 3 / 2,
        };
        bet + bonus
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_penetration(0.5)
///     .with_double_after_split(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Fraction of the shoe dealt before a reshuffle is due.
    pub penetration: f64,
    /// Whether a hand produced by a split may double down.
    pub double_after_split: bool,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            penetration: 0.75,
            double_after_split: true,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets whether double down is allowed after split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Checks that the options describe a playable shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks or the penetration is outside
    /// `(0, 1]`.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::NoDecks);
        }
        if !(self.penetration > 0.0 && self.penetration <= 1.0) {
            return Err(OptionsError::InvalidPenetration(self.penetration));
        }
        Ok(())
    }
}
