//! Plays blackjack from the terminal against the dealer, next to a
//! basic-strategy seat.
//!
//! ```text
//! cargo run --example play
//! ```

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use bjsim::{Action, BasicStrategy, Card, Game, GameOptions, HandOutcome, Strategy, score};

const UNIT: i64 = 10;

/// A seat played by whoever is at the keyboard.
struct Terminal {
    quit: Rc<Cell<bool>>,
}

impl Terminal {
    /// Prints `prompt` and returns the next trimmed line, or `None` at end of
    /// input.
    fn ask(&self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.quit.set(true);
                None
            }
            Ok(_) => Some(line.trim().to_lowercase()),
        }
    }
}

fn show(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Strategy for Terminal {
    fn place_bet(&mut self, budget: i64) -> i64 {
        if self.quit.get() || budget < UNIT {
            self.quit.set(true);
            return 0;
        }
        loop {
            let Some(line) = self.ask(&format!("\nbudget {budget}, bet (q to quit) [{UNIT}]: "))
            else {
                return 0;
            };
            match line.as_str() {
                "q" | "quit" => {
                    self.quit.set(true);
                    return 0;
                }
                "" => return UNIT,
                other => match other.parse::<i64>() {
                    Ok(bet) if (0..=budget).contains(&bet) => return bet,
                    _ => println!("enter a bet between 0 and {budget}"),
                },
            }
        }
    }

    fn decide(&mut self, hand: &[Card], dealer_upcard: Card) -> Action {
        println!("dealer shows {dealer_upcard}");
        println!("your hand: {} ({})", show(hand), score(hand));
        loop {
            let Some(line) = self.ask("[h]it, [s]tand, [d]ouble, s[p]lit: ") else {
                return Action::Stand;
            };
            match line.as_str() {
                "h" | "hit" => return Action::Hit,
                "s" | "stand" => return Action::Stand,
                "d" | "double" => return Action::DoubleDown,
                "p" | "split" => return Action::Split,
                _ => println!("unknown action"),
            }
        }
    }

    fn settle(&mut self, payout: i64, hand: &[Card], dealer_hand: &[Card]) {
        println!(
            "your hand {} ({}) against dealer {} ({}): paid {payout}",
            show(hand),
            score(hand),
            show(dealer_hand),
            score(dealer_hand)
        );
    }
}

fn main() {
    let quit = Rc::new(Cell::new(false));

    let mut game = match Game::new(GameOptions::default(), rand_seed()) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid options: {err}");
            std::process::exit(2);
        }
    };
    let you = game.join(
        "you",
        1_000,
        Box::new(Terminal {
            quit: Rc::clone(&quit),
        }),
    );
    game.join("basic", 1_000, Box::new(BasicStrategy::new(UNIT)));

    while !quit.get() {
        match game.check_and_reshuffle() {
            Ok(true) => println!("-- the shoe is reshuffled --"),
            Ok(false) => {}
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }

        let result = match game.play_round() {
            Ok(result) => result,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        };

        if let Some(mine) = result.player(you) {
            for hand in &mine.hands {
                let verdict = match hand.outcome {
                    HandOutcome::PlayerWins if hand.natural => "blackjack!",
                    HandOutcome::PlayerWins => "you win",
                    HandOutcome::Push => "push",
                    HandOutcome::DealerWins => "dealer wins",
                };
                println!("hand {}: {verdict}", hand.hand_index + 1);
            }
        }
    }

    for player in game.players() {
        println!("{}: {}", player.name(), player.budget());
    }
}

/// Seeds the shoe from the clock so every session deals differently.
fn rand_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
