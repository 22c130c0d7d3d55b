use alloc::vec::Vec;

use crate::Chips;
use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::result::{HandOutcome, HandResult, PlayerResult, RoundResult};
use crate::shoe::Shoe;

use super::{Game, GameState};

/// Value the dealer stands on, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

/// Compares one hand against the dealer and returns the outcome and the
/// amount credited back.
///
/// A natural collects its 3:2 payout only by beating the dealer's total; a
/// dealer 21 drawn with three or more cards pushes it.
fn settle_hand(hand: &Hand, dealer: &DealerHand) -> (HandOutcome, Chips) {
    let value = hand.value();
    let natural = hand.status() == HandStatus::Blackjack;

    if value > 21 {
        (HandOutcome::DealerWins, 0)
    } else if dealer.is_blackjack() {
        if natural {
            (HandOutcome::Push, hand.bet())
        } else {
            (HandOutcome::DealerWins, 0)
        }
    } else if dealer.is_bust() || value > dealer.value() {
        (HandOutcome::PlayerWins, hand.payout_on_win())
    } else if value == dealer.value() {
        (HandOutcome::Push, hand.bet())
    } else {
        (HandOutcome::DealerWins, 0)
    }
}

impl<S: Shoe> Game<S> {
    /// Dealer turns the hole card over and draws to 17 or more.
    ///
    /// A soft 17 stands. The hole card and every drawn card are shown to all
    /// seats. The dealer plays even when no hand is left
    /// standing.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe
    /// runs out of cards.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if let Some(hole_card) = self.dealer_hand.hole_card() {
            self.broadcast(hole_card, None);
        }

        let mut drawn_cards = Vec::new();
        while self.dealer_hand.value() < DEALER_STANDS_ON {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            self.broadcast(card, None);
            drawn_cards.push(card);
        }

        self.state = GameState::Settlement;
        Ok(drawn_cards)
    }

    /// Compares every hand with the dealer's and pays it out.
    ///
    /// Each hand is settled on its own, so a split seat can win one hand and
    /// lose another. The payout of each hand is credited to the seat's
    /// budget before its strategy hears about it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();
        let dealer_blackjack = self.dealer_hand.is_blackjack();

        let mut player_results = Vec::new();

        for seat in 0..self.players.len() {
            if self.hands[seat].is_empty() {
                continue;
            }

            let mut hand_results = Vec::with_capacity(self.hands[seat].len());
            let mut total_bet: Chips = 0;
            let mut total_payout: Chips = 0;

            for (hand_index, hand) in self.hands[seat].iter().enumerate() {
                let (outcome, payout) = settle_hand(hand, &self.dealer_hand);
                self.players[seat].settle(payout, hand.cards(), self.dealer_hand.cards());

                total_bet += hand.bet();
                total_payout += payout;
                hand_results.push(HandResult {
                    hand_index,
                    outcome,
                    bet: hand.bet(),
                    payout,
                    player_value: hand.value(),
                    dealer_value,
                    natural: hand.status() == HandStatus::Blackjack,
                });
            }

            log::debug!(
                "seat {seat} ({}): bet {total_bet}, paid {total_payout}",
                self.players[seat].name()
            );

            player_results.push(PlayerResult {
                seat,
                hands: hand_results,
                total_bet,
                total_payout,
                net: total_payout - total_bet,
            });
        }

        self.state = GameState::RoundOver;

        Ok(RoundResult {
            players: player_results,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
        })
    }
}
