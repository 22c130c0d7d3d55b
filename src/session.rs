//! Multi-round session driver and per-seat statistics.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Chips;
use crate::error::RoundError;
use crate::game::Game;
use crate::result::{HandOutcome, RoundResult};
use crate::shoe::{MultiDeckShoe, Shoe};

/// Statistics gathered for one seat over a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerReport {
    /// Seat name.
    pub name: String,
    /// Hands won.
    pub wins: u32,
    /// Hands pushed.
    pub draws: u32,
    /// Hands lost.
    pub losses: u32,
    /// Naturals dealt.
    pub blackjacks: u32,
    /// Rounds the seat sat out with a zero bet.
    pub rounds_sat_out: u32,
    /// Budget before each round's bet, one sample per round.
    pub budget_history: Vec<Chips>,
    /// Budget after the last round.
    pub final_budget: Chips,
}

impl PlayerReport {
    /// Total hands settled.
    #[must_use]
    pub const fn hands(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// Outcome of a whole session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SessionReport {
    /// Rounds played.
    pub rounds: usize,
    /// Times the shoe was reshuffled.
    pub reshuffles: usize,
    /// One report per seat, in seat order.
    pub players: Vec<PlayerReport>,
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 80;
        const NAME_WIDTH: usize = 20;
        const COL_WIDTH: usize = (WIDTH - NAME_WIDTH) / 6;

        writeln!(
            f,
            "{:-^WIDTH$}",
            alloc::format!(" {} rounds, {} reshuffles ", self.rounds, self.reshuffles)
        )?;
        writeln!(
            f,
            "{:<NAME_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}",
            "strategy", "wins", "draws", "losses", "naturals", "sat out", "budget"
        )?;
        for player in &self.players {
            writeln!(
                f,
                "{:<NAME_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}",
                player.name,
                player.wins,
                player.draws,
                player.losses,
                player.blackjacks,
                player.rounds_sat_out,
                player.final_budget
            )?;
        }
        write!(f, "{}", "-".repeat(WIDTH))
    }
}

/// Runs rounds back to back, reshuffling when the shoe asks for it, and
/// keeps statistics for every seat.
pub struct Session<S: Shoe = MultiDeckShoe> {
    game: Game<S>,
    report: SessionReport,
}

impl<S: Shoe> Session<S> {
    /// Creates a session around a seated game.
    #[must_use]
    pub fn new(game: Game<S>) -> Self {
        let mut session = Self {
            game,
            report: SessionReport::default(),
        };
        session.sync_seats();
        session
    }

    /// Returns the game being driven.
    #[must_use]
    pub const fn game(&self) -> &Game<S> {
        &self.game
    }

    /// Returns the game being driven, for seating more players.
    pub const fn game_mut(&mut self) -> &mut Game<S> {
        &mut self.game
    }

    /// Plays a single round.
    ///
    /// Reshuffles first when the shoe has passed its penetration, then plays
    /// the round and tallies each settled hand. Every seat's budget from
    /// before the bet is recorded once the round completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be completed. Nothing is recorded
    /// for a failed round, and the session should not continue after that.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        if self.game.check_and_reshuffle()? {
            self.report.reshuffles += 1;
        }

        self.sync_seats();
        let budgets: Vec<Chips> = self.game.players().iter().map(|p| p.budget()).collect();

        let result = self.game.play_round()?;
        self.report.rounds += 1;
        for (report, budget) in self.report.players.iter_mut().zip(budgets) {
            report.budget_history.push(budget);
        }

        for (seat, report) in self.report.players.iter_mut().enumerate() {
            let Some(player_result) = result.player(seat) else {
                report.rounds_sat_out += 1;
                continue;
            };
            for hand in &player_result.hands {
                match hand.outcome {
                    HandOutcome::PlayerWins => report.wins += 1,
                    HandOutcome::Push => report.draws += 1,
                    HandOutcome::DealerWins => report.losses += 1,
                }
                if hand.natural {
                    report.blackjacks += 1;
                }
            }
        }
        for (report, player) in self.report.players.iter_mut().zip(self.game.players()) {
            report.final_budget = player.budget();
        }

        Ok(result)
    }

    /// Plays `rounds` rounds.
    ///
    /// # Errors
    ///
    /// Stops at the first round that fails and returns its error.
    pub fn run(&mut self, rounds: usize) -> Result<(), RoundError> {
        for _ in 0..rounds {
            self.play_round()?;
        }
        log::debug!(
            "session finished: {} rounds, {} reshuffles",
            self.report.rounds,
            self.report.reshuffles
        );
        Ok(())
    }

    /// Returns the statistics gathered so far.
    #[must_use]
    pub const fn report(&self) -> &SessionReport {
        &self.report
    }

    /// Consumes the session and returns its statistics.
    #[must_use]
    pub fn into_report(self) -> SessionReport {
        self.report
    }

    /// Adds a report for every seat that joined since the last round.
    fn sync_seats(&mut self) {
        let known = self.report.players.len();
        for player in &self.game.players()[known..] {
            self.report.players.push(PlayerReport {
                name: String::from(player.name()),
                final_budget: player.budget(),
                ..PlayerReport::default()
            });
        }
    }
}
