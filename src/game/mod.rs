//! Round engine and table state.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Chips;
use crate::card::Card;
use crate::error::{OptionsError, ReshuffleError, RoundError, ShoeError};
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;
use crate::shoe::{MultiDeckShoe, Shoe};
use crate::strategy::Strategy;

mod actions;
mod bet;
mod dealer;
mod state;

pub use state::GameState;
use state::TurnPosition;

/// A blackjack table that plays complete rounds for a set of seats.
///
/// The game owns the shoe, the seats and the dealer's hand. A round runs
/// through [`GameState`] in order; each phase method checks the state and
/// refuses to run out of turn. [`Game::play_round`] chains all phases.
pub struct Game<S: Shoe = MultiDeckShoe> {
    /// Cards in the shoe.
    shoe: S,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Seats in play order.
    players: Vec<Player>,
    /// Bet placed by each seat this round (0 = sitting out).
    bets: Vec<Chips>,
    /// Hands of each seat this round (several after splits).
    hands: Vec<Vec<Hand>>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Current turn position.
    current_turn: TurnPosition,
}

impl Game<MultiDeckShoe> {
    /// Creates a game with a freshly shuffled shoe seeded by `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options describe no decks or an invalid
    /// penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{BasicStrategy, Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42).unwrap();
    /// game.join("basic", 1_000, Box::new(BasicStrategy::new(10)));
    /// let result = game.play_round().unwrap();
    /// assert_eq!(result.players.len(), 1);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;
        let shoe = MultiDeckShoe::new(options.decks, options.penetration, seed)?;
        Ok(Self::with_shoe(options, shoe))
    }
}

impl<S: Shoe> Game<S> {
    /// Creates a game dealing from `shoe`.
    #[must_use]
    pub const fn with_shoe(options: GameOptions, shoe: S) -> Self {
        Self {
            shoe,
            options,
            state: GameState::WaitingForPlayers,
            players: Vec::new(),
            bets: Vec::new(),
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            current_turn: TurnPosition {
                player_index: 0,
                hand_index: 0,
            },
        }
    }

    /// Seats a new player and returns its seat index.
    pub fn join(
        &mut self,
        name: impl Into<String>,
        budget: Chips,
        strategy: Box<dyn Strategy>,
    ) -> usize {
        self.players.push(Player::new(name, budget, strategy));
        self.bets.push(0);
        self.hands.push(Vec::new());
        self.players.len() - 1
    }

    /// Returns every seat in play order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the seat at `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &S {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.cards_remaining()
    }

    /// Returns whether the shoe has passed its penetration threshold.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.shoe.needs_reshuffle()
    }

    /// Reshuffles the shoe and tells every seat about it.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if !matches!(
            self.state,
            GameState::WaitingForPlayers | GameState::RoundOver
        ) {
            return Err(ReshuffleError::InvalidState);
        }

        self.shoe.shuffle();
        for player in &mut self.players {
            player.on_shuffle();
        }
        log::debug!("shoe reshuffled, {} cards", self.shoe.cards_remaining());

        Ok(())
    }

    /// Checks penetration and reshuffles if needed.
    ///
    /// Call this between rounds. Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the bet `seat` placed this round.
    #[must_use]
    pub fn get_bet(&self, seat: usize) -> Option<Chips> {
        self.bets.get(seat).copied()
    }

    /// Returns the hands of `seat` this round.
    #[must_use]
    pub fn hands(&self, seat: usize) -> Option<&[Hand]> {
        self.hands.get(seat).map(Vec::as_slice)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Plays one full round: bets, deal, player hands, dealer, showdown.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, a strategy bets
    /// outside its budget, or the shoe runs out of cards. Each of these
    /// leaves the round unfinished.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.start_round()?;
        self.place_bets()?;
        self.deal()?;
        self.play_hands()?;
        self.dealer_play()?;
        Ok(self.showdown()?)
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, ShoeError> {
        self.shoe.draw_card()
    }

    /// Shows `card` to every seat except its owner.
    fn broadcast(&mut self, card: Card, owner: Option<usize>) {
        for (seat, player) in self.players.iter_mut().enumerate() {
            if owner != Some(seat) {
                player.observe_card(card, owner);
            }
        }
    }

    /// Clears all hands and bets ahead of a new round.
    fn clear_round(&mut self) {
        self.bets.iter_mut().for_each(|bet| *bet = 0);
        self.hands.iter_mut().for_each(Vec::clear);
        self.dealer_hand.clear();
        self.current_turn = TurnPosition {
            player_index: 0,
            hand_index: 0,
        };
    }
}
