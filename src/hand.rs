//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::Chips;
use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u16::from(card.point_value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value.min(u16::from(u8::MAX)) as u8, is_soft)
}

/// Scores a sequence of cards.
///
/// Every ace starts at 11 and is recounted as 1 while the total exceeds 21,
/// so the result is the highest total not above 21 when one exists, and the
/// lowest achievable total otherwise.
///
/// ```
/// use bjsim::{Card, Rank, Suit, score};
///
/// let hand = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
/// ];
/// assert_eq!(score(&hand), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards hold an ace currently counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood, or the hand was closed by a double or an ace split.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural (two-card 21, never split).
    Blackjack,
}

/// A player's hand.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
    /// Amount wagered on this hand.
    bet: Chips,
    /// Amount returned to the player if the hand beats the dealer.
    payout_on_win: Chips,
    /// Whether this hand is part of a split.
    from_split: bool,
    /// Whether the hand was doubled down.
    doubled: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: Chips) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            payout_on_win: bet * 2,
            from_split: false,
            doubled: false,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, bet: Chips) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            bet,
            payout_on_win: bet * 2,
            from_split: true,
            doubled: false,
        }
    }

    /// Adds a card to the hand, marking it bust when it goes over 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if self.value() > 21 {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the amount wagered on this hand.
    #[must_use]
    pub const fn bet(&self) -> Chips {
        self.bet
    }

    /// Returns the amount paid back if this hand wins.
    #[must_use]
    pub const fn payout_on_win(&self) -> Chips {
        self.payout_on_win
    }

    /// Doubles the bet and the amount paid on a win.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.payout_on_win *= 2;
        self.doubled = true;
    }

    /// Marks the hand as a natural that returns `payout` on a win.
    pub const fn mark_natural(&mut self, payout: Chips) {
        self.status = HandStatus::Blackjack;
        self.payout_on_win = payout;
    }

    /// Returns whether this hand is part of a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Marks the hand as part of a split.
    pub const fn mark_split(&mut self) {
        self.from_split = true;
    }

    /// Returns whether the hand was doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a two-card 21 that was never split.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        !self.from_split && self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is a pair of equal point values.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].point_value() == self.cards[1].point_value()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand: the up card first, then the hole card, then every
/// card drawn during the dealer's turn.
///
/// The hole card is kept secret by the engine, which only shows it to the
/// seats once the dealer plays.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the hole card.
    #[must_use]
    pub fn hole_card(&self) -> Option<Card> {
        self.cards.get(1).copied()
    }

    /// Returns the value of every card in the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the first two cards make 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no card has been dealt yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const fn c(rank: Rank) -> Card {
        Card::new(Suit::Clubs, rank)
    }

    #[test]
    fn aces_are_recounted_until_not_bust() {
        assert_eq!(score(&[c(Rank::Ace), c(Rank::Ace), c(Rank::Nine)]), 21);
        assert_eq!(score(&[c(Rank::Ace), c(Rank::King), c(Rank::Ace)]), 12);
        assert_eq!(score(&[c(Rank::Ace), c(Rank::Ace)]), 12);
        assert!(is_soft(&[c(Rank::Ace), c(Rank::Six)]));
        assert!(!is_soft(&[c(Rank::Ace), c(Rank::Six), c(Rank::King)]));
    }

    #[test]
    fn bust_without_aces() {
        assert_eq!(score(&[c(Rank::King), c(Rank::Queen), c(Rank::Two)]), 22);
        assert_eq!(score(&[c(Rank::King), c(Rank::Ace)]), 21);
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn split_hand_is_never_natural() {
        let mut hand = Hand::from_split(c(Rank::Ace), 10);
        hand.add_card(c(Rank::King));
        assert_eq!(hand.value(), 21);
        assert!(!hand.is_natural());

        let mut hand = Hand::new(10);
        hand.add_card(c(Rank::Ace));
        hand.add_card(c(Rank::Jack));
        assert!(hand.is_natural());
        hand.mark_split();
        assert!(!hand.is_natural());
    }

    #[test]
    fn pairs_split_on_point_value() {
        let mut hand = Hand::new(5);
        hand.add_card(c(Rank::Ten));
        hand.add_card(c(Rank::King));
        assert!(hand.can_split());

        let mut hand = Hand::new(5);
        hand.add_card(c(Rank::Seven));
        hand.add_card(c(Rank::Eight));
        assert!(!hand.can_split());
    }

    #[test]
    fn double_bet_doubles_payout() {
        let mut hand = Hand::new(10);
        hand.double_bet();
        assert_eq!(hand.bet(), 20);
        assert_eq!(hand.payout_on_win(), 40);
        assert!(hand.is_doubled());
    }

    #[test]
    fn dealer_twenty_one_is_natural_only_on_two_cards() {
        let mut dealer = DealerHand::new();
        dealer.add_card(c(Rank::Ten));
        dealer.add_card(c(Rank::Six));
        assert_eq!(dealer.up_card(), Some(c(Rank::Ten)));
        assert_eq!(dealer.hole_card(), Some(c(Rank::Six)));

        dealer.add_card(c(Rank::Five));
        assert_eq!(dealer.value(), 21);
        assert!(!dealer.is_blackjack());

        dealer.clear();
        dealer.add_card(c(Rank::Ace));
        dealer.add_card(c(Rank::Queen));
        assert!(dealer.is_blackjack());
    }
}
