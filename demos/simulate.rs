//! Pits the bundled strategies against each other over many rounds and
//! prints a summary table.
//!
//! ```text
//! cargo run --example simulate -- --rounds 100000 --decks 6 --budget 1000
//! cargo run --example simulate -- --seat basic --seat counters --penetration 0.9
//! cargo run --example simulate --features serde -- --json
//! ```

use bjsim::{
    BasicStrategy, CardCounter, CountSystem, Game, GameOptions, RandomStrategy, RoundingMode,
    Session, StreakStrategy,
};
use clap::{Parser, ValueEnum};

/// Seats that can be put at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Seat {
    /// Flat bettor playing basic strategy
    Basic,
    /// One card counter per counting system
    Counters,
    /// Doubles its bet after every loss
    Streak,
    /// Random bets and random actions
    Random,
}

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// Seats to play; every kind when omitted
    #[arg(short = 'S', long = "seat", value_enum)]
    seats: Vec<Seat>,

    /// Number of rounds to play
    #[arg(short, long, default_value_t = 100_000)]
    rounds: usize,

    /// Number of decks in the shoe
    #[arg(short, long, default_value_t = 6)]
    decks: u8,

    /// Fraction of the shoe dealt before a reshuffle
    #[arg(short, long, default_value_t = 0.75)]
    penetration: f64,

    /// Starting budget of every seat
    #[arg(short, long, default_value_t = 1_000)]
    budget: i64,

    /// Minimum bet unit
    #[arg(long, default_value_t = 10)]
    unit: i64,

    /// Largest bet spread of the card counters, in units
    #[arg(long, default_value_t = 8)]
    max_units: i64,

    /// Seed for the shoe and the random player
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Forbid doubling after a split
    #[arg(long)]
    no_double_after_split: bool,

    /// Round odd natural payouts up instead of down
    #[arg(long)]
    round_up: bool,

    /// Print the report as JSON
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = CommandLineArgs::parse();

    let rounding = if args.round_up {
        RoundingMode::Up
    } else {
        RoundingMode::Down
    };
    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_penetration(args.penetration)
        .with_double_after_split(!args.no_double_after_split)
        .with_rounding_blackjack(rounding);

    let mut game = match Game::new(options, args.seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid options: {err}");
            std::process::exit(2);
        }
    };

    let seats = if args.seats.is_empty() {
        Seat::value_variants().to_vec()
    } else {
        args.seats.clone()
    };
    let max_bet = args.unit * args.max_units;

    for seat in seats {
        match seat {
            Seat::Basic => {
                game.join("basic", args.budget, Box::new(BasicStrategy::new(args.unit)));
            }
            Seat::Counters => {
                for system in CountSystem::ALL {
                    let counter = CardCounter::new(system, args.decks, args.unit, args.max_units);
                    game.join(system.name(), args.budget, Box::new(counter));
                }
            }
            Seat::Streak => {
                game.join(
                    "streak",
                    args.budget,
                    Box::new(StreakStrategy::new(args.unit, max_bet)),
                );
            }
            Seat::Random => {
                let seed = args.seed.wrapping_add(game.player_count() as u64);
                game.join(
                    "random",
                    args.budget,
                    Box::new(RandomStrategy::new(args.unit, max_bet, seed)),
                );
            }
        }
    }

    let mut session = Session::new(game);
    if let Err(err) = session.run(args.rounds) {
        eprintln!("simulation stopped: {err}");
        std::process::exit(1);
    }

    let report = session.into_report();

    #[cfg(feature = "serde")]
    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("cannot serialize report: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{report}");
}
