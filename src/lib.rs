//! A blackjack round engine and strategy simulator with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that runs the full round flow
//! (betting, dealing, player hands, dealer play and showdown) for any number
//! of seats, each played by a [`Strategy`]. A [`Session`] drives many rounds
//! back to back and collects per-seat statistics.
//!
//! # Example
//!
//! ```
//! use bjsim::{BasicStrategy, CardCounter, CountSystem, Game, GameOptions, Session};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42).unwrap();
//! game.join("basic", 10_000, Box::new(BasicStrategy::new(10)));
//! game.join(
//!     "hi-lo",
//!     10_000,
//!     Box::new(CardCounter::new(CountSystem::HI_LO, options.decks, 10, 8)),
//! );
//!
//! let mut session = Session::new(game);
//! session.run(100).unwrap();
//! assert_eq!(session.report().rounds, 100);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod session;
pub mod shoe;
pub mod strategy;

/// Amount of money, in whole chips.
pub type Chips = i64;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BetError, DealError, OptionsError, ReshuffleError, RoundError, ShoeError,
    ShowdownError,
};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand, HandStatus, is_soft, score};
pub use options::{GameOptions, RoundingMode};
pub use player::Player;
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use session::{PlayerReport, Session, SessionReport};
pub use shoe::{MultiDeckShoe, Shoe, standard_cards};
pub use strategy::{
    Action, BasicStrategy, CardCounter, CountSystem, RandomStrategy, StreakStrategy, Strategy,
    basic_decision,
};
