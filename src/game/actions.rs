use crate::Chips;
use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};
use crate::shoe::Shoe;
use crate::strategy::Action;

use super::{Game, GameState, TurnPosition};

impl<S: Shoe> Game<S> {
    /// Plays out every seat's hands, seat by seat.
    ///
    /// Each seat's hands form a worklist walked by the turn cursor. A hand
    /// at 21 or more is closed without asking the strategy; otherwise the
    /// strategy decides until the hand stands, busts, doubles, or is closed
    /// by an ace split. A split inserts the new hand right after the current
    /// one.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the shoe
    /// runs out of cards.
    pub fn play_hands(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        let up_card = self
            .dealer_hand
            .up_card()
            .ok_or(ActionError::InvalidState)?;

        for seat in 0..self.players.len() {
            self.current_turn = TurnPosition {
                player_index: seat,
                hand_index: 0,
            };
            while self.current_turn.hand_index < self.hands[seat].len() {
                self.play_step(up_card)?;
            }
        }

        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Resolves one decision point of the hand under the cursor.
    fn play_step(&mut self, up_card: Card) -> Result<(), ActionError> {
        let TurnPosition {
            player_index: seat,
            hand_index: index,
        } = self.current_turn;

        let hand = &self.hands[seat][index];
        if hand.status() != HandStatus::Active {
            self.current_turn.hand_index += 1;
            return Ok(());
        }

        if hand.value() >= 21 {
            self.close_hand(seat, index);
            self.current_turn.hand_index += 1;
            return Ok(());
        }

        let requested = self.players[seat].decide(self.hands[seat][index].cards(), up_card);
        match self.legal_action(seat, index, requested) {
            Action::Hit => self.hit(seat, index)?,
            Action::Stand => self.hands[seat][index].set_status(HandStatus::Stand),
            Action::DoubleDown => self.double_down(seat, index)?,
            Action::Split => self.split(seat, index)?,
        }

        Ok(())
    }

    /// Closes a hand that reached 21 before any decision.
    ///
    /// Only the seat's sole, unsplit two-card hand counts as a natural.
    fn close_hand(&mut self, seat: usize, index: usize) {
        let sole_hand = self.hands[seat].len() == 1;
        let rounding = self.options.rounding_blackjack;
        let hand = &mut self.hands[seat][index];

        if sole_hand && hand.is_natural() {
            let payout = rounding.natural_payout(hand.bet());
            hand.mark_natural(payout);
        } else if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
    }

    /// Replaces a double or split the hand cannot take with the fallback
    /// action: hit for a double, stand for a split.
    fn legal_action(&self, seat: usize, index: usize, requested: Action) -> Action {
        let hand = &self.hands[seat][index];
        let budget = self.players[seat].budget();

        match requested {
            Action::DoubleDown if self.can_double(hand, budget) => Action::DoubleDown,
            Action::DoubleDown => {
                log::debug!("seat {seat} hand {index}: double not allowed, hitting");
                Action::Hit
            }
            Action::Split if hand.can_split() && budget >= hand.bet() => Action::Split,
            Action::Split => {
                log::debug!("seat {seat} hand {index}: split not allowed, standing");
                Action::Stand
            }
            other => other,
        }
    }

    fn can_double(&self, hand: &Hand, budget: Chips) -> bool {
        hand.len() == 2
            && budget >= hand.bet()
            && (self.options.double_after_split || !hand.is_from_split())
    }

    /// Draws one card into the hand.
    fn hit(&mut self, seat: usize, index: usize) -> Result<(), ActionError> {
        let card = self.draw()?;
        self.hands[seat][index].add_card(card);
        self.broadcast(card, Some(seat));
        Ok(())
    }

    /// Doubles the bet, draws exactly one card and closes the hand.
    fn double_down(&mut self, seat: usize, index: usize) -> Result<(), ActionError> {
        let bet = self.hands[seat][index].bet();
        self.players[seat].debit(bet);
        self.hands[seat][index].double_bet();

        let card = self.draw()?;
        let hand = &mut self.hands[seat][index];
        hand.add_card(card);
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
        self.broadcast(card, Some(seat));

        Ok(())
    }

    /// Splits a pair into two hands and deals one card to each.
    ///
    /// Split aces receive that single card and are closed at once.
    fn split(&mut self, seat: usize, index: usize) -> Result<(), ActionError> {
        let hand = &mut self.hands[seat][index];
        let is_ace = hand.cards().first().is_some_and(|c| c.is_ace());
        let bet = hand.bet();
        let Some(split_card) = hand.take_split_card() else {
            return Ok(());
        };
        hand.mark_split();

        self.players[seat].debit(bet);
        self.hands[seat].insert(index + 1, Hand::from_split(split_card, bet));
        log::debug!("seat {seat} split hand {index}");

        for target in [index, index + 1] {
            let card = self.draw()?;
            let hand = &mut self.hands[seat][target];
            hand.add_card(card);
            if is_ace && hand.status() == HandStatus::Active {
                hand.set_status(HandStatus::Stand);
            }
            self.broadcast(card, Some(seat));
        }

        Ok(())
    }
}
