use alloc::vec::Vec;

use crate::error::{BetError, DealError};
use crate::hand::Hand;
use crate::shoe::Shoe;

use super::{Game, GameState, TurnPosition};

impl<S: Shoe> Game<S> {
    /// Starts a new round and opens betting.
    ///
    /// # Errors
    ///
    /// Returns an error if the previous round has not finished.
    pub fn start_round(&mut self) -> Result<(), BetError> {
        if !matches!(
            self.state,
            GameState::WaitingForPlayers | GameState::RoundOver
        ) {
            return Err(BetError::InvalidState);
        }

        self.clear_round();
        self.state = GameState::Betting;
        Ok(())
    }

    /// Asks every seat for its bet and debits it.
    ///
    /// A bet of 0 sits the seat out of the round, even for a seat in debt.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, or a strategy
    /// returned a negative bet or one larger than its budget. No budget is
    /// debited in that case.
    pub fn place_bets(&mut self) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let mut bets = Vec::with_capacity(self.players.len());
        for (seat, player) in self.players.iter_mut().enumerate() {
            let budget = player.budget();
            let bet = player.place_bet();
            if bet < 0 {
                return Err(BetError::NegativeBet { seat, bet });
            }
            if bet != 0 && bet > budget {
                return Err(BetError::ExceedsBudget { seat, bet, budget });
            }
            bets.push(bet);
        }

        for (seat, bet) in bets.into_iter().enumerate() {
            self.players[seat].debit(bet);
            self.bets[seat] = bet;
        }

        self.state = GameState::Dealing;
        Ok(())
    }

    /// Deals the dealer's up and hole cards, then two cards to each betting
    /// seat.
    ///
    /// The up card is shown to every seat. The hole card stays hidden until
    /// the dealer plays. Each seat's cards are shown to every other seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or the shoe runs
    /// out of cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        self.dealer_hand.clear();

        let up_card = self.draw()?;
        self.dealer_hand.add_card(up_card);
        self.broadcast(up_card, None);

        let hole_card = self.draw()?;
        self.dealer_hand.add_card(hole_card);

        for seat in 0..self.players.len() {
            let bet = self.bets[seat];
            if bet == 0 {
                continue;
            }

            let mut hand = Hand::new(bet);
            for _ in 0..2 {
                let card = self.draw()?;
                hand.add_card(card);
                self.broadcast(card, Some(seat));
            }
            self.hands[seat] = alloc::vec![hand];
        }

        self.current_turn = TurnPosition {
            player_index: 0,
            hand_index: 0,
        };
        self.state = GameState::PlayerTurn;

        Ok(())
    }
}
