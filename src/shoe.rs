//! The shoe cards are dealt from.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{OptionsError, ShoeError};

/// A source of cards for the round engine.
pub trait Shoe {
    /// Deals the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] when no card is left. Callers treat
    /// this as fatal.
    fn draw_card(&mut self) -> Result<Card, ShoeError>;

    /// Returns whether the penetration threshold has been passed.
    fn needs_reshuffle(&self) -> bool;

    /// Restores every card to the shoe and shuffles it.
    fn shuffle(&mut self);

    /// Returns the number of undealt cards.
    fn cards_remaining(&self) -> usize;
}

/// Builds `decks` standard 52-card decks in suit and rank order.
#[must_use]
pub fn standard_cards(decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

    for _ in 0..decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards
}

/// A multi-deck shoe dealt from a cursor until its cut card is passed.
///
/// Shuffling restores every card and rewinds the cursor; there is no
/// discard tray.
#[derive(Debug, Clone)]
pub struct MultiDeckShoe {
    cards: Vec<Card>,
    top: usize,
    reshuffle_index: usize,
    rng: ChaCha8Rng,
}

impl MultiDeckShoe {
    /// Creates a shuffled shoe of `decks` decks.
    ///
    /// # Errors
    ///
    /// Returns an error if `decks` is zero or `penetration` is outside `(0, 1]`.
    pub fn new(decks: u8, penetration: f64, seed: u64) -> Result<Self, OptionsError> {
        if decks == 0 {
            return Err(OptionsError::NoDecks);
        }
        let mut shoe = Self::from_cards(standard_cards(decks), penetration, seed)?;
        shoe.shuffle();
        Ok(shoe)
    }

    /// Creates a shoe that deals `cards` in order, first card first.
    ///
    /// The cards are only permuted by a later [`Shoe::shuffle`].
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is empty or `penetration` is outside `(0, 1]`.
    pub fn from_cards(cards: Vec<Card>, penetration: f64, seed: u64) -> Result<Self, OptionsError> {
        if cards.is_empty() {
            return Err(OptionsError::NoDecks);
        }
        if !(penetration > 0.0 && penetration <= 1.0) {
            return Err(OptionsError::InvalidPenetration(penetration));
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let reshuffle_index = (penetration * cards.len() as f64) as usize;

        Ok(Self {
            cards,
            top: 0,
            reshuffle_index,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the index of the next card to deal.
    #[must_use]
    pub const fn top(&self) -> usize {
        self.top
    }

    /// Returns the cursor position past which a reshuffle is due.
    #[must_use]
    pub const fn reshuffle_index(&self) -> usize {
        self.reshuffle_index
    }
}

impl Shoe for MultiDeckShoe {
    fn draw_card(&mut self) -> Result<Card, ShoeError> {
        let card = *self
            .cards
            .get(self.top)
            .ok_or(ShoeError::Exhausted { dealt: self.top })?;
        self.top += 1;
        log::trace!("drew {card} ({} left)", self.cards.len() - self.top);
        Ok(card)
    }

    fn needs_reshuffle(&self) -> bool {
        self.top > self.reshuffle_index
    }

    fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.top = 0;
    }

    fn cards_remaining(&self) -> usize {
        self.cards.len() - self.top
    }
}
