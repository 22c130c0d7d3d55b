//! Property-based tests for scoring and round accounting.

use proptest::prelude::*;

use bjsim::{
    BasicStrategy, Card, CardCounter, CountSystem, Game, GameOptions, RandomStrategy, Rank,
    RoundingMode, StreakStrategy, Suit, is_soft, score,
};

/// Strategy: a hand of one to eight cards of any rank.
fn hand_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(prop::sample::select(Rank::ALL.to_vec()), 1..8).prop_map(|ranks| {
        ranks
            .into_iter()
            .map(|rank| Card::new(Suit::Hearts, rank))
            .collect()
    })
}

/// Sum with every ace counted as 1, and the number of aces.
fn hard_total(cards: &[Card]) -> (u32, usize) {
    let aces = cards.iter().filter(|c| c.is_ace()).count();
    let sum: u32 = cards.iter().map(|c| u32::from(c.point_value())).sum();
    (sum - 10 * aces as u32, aces)
}

proptest! {
    // Score is the best total not over 21, counting at most one ace as 11.
    #[test]
    fn score_is_best_total(cards in hand_strategy()) {
        let (hard, aces) = hard_total(&cards);
        let expected = if aces > 0 && hard + 10 <= 21 { hard + 10 } else { hard };
        prop_assert_eq!(u32::from(score(&cards)), expected);
        prop_assert_eq!(is_soft(&cards), aces > 0 && hard + 10 <= 21);
    }

    // Card order never changes the score.
    #[test]
    fn score_ignores_order(cards in hand_strategy()) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(score(&cards), score(&reversed));
    }

    // A natural returns the stake plus one and a half stakes, rounded as configured.
    #[test]
    fn natural_payout_rounding(bet in 0i64..100_000) {
        let down = RoundingMode::Down.natural_payout(bet);
        let up = RoundingMode::Up.natural_payout(bet);
        prop_assert_eq!(down, bet + (3 * bet) / 2);
        prop_assert_eq!(up - down, bet % 2);
    }

    // Every seat's budget moves by exactly the net of its settled hands.
    #[test]
    fn rounds_conserve_money(
        seed in any::<u64>(),
        decks in 4u8..=8,
        penetration in 0.5f64..=0.75,
        rounds in 1usize..40,
    ) {
        let options = GameOptions::default()
            .with_decks(decks)
            .with_penetration(penetration);
        let mut game = Game::new(options, seed).unwrap();
        game.join("basic", 500, Box::new(BasicStrategy::new(10)));
        game.join(
            "hi-lo",
            500,
            Box::new(CardCounter::new(CountSystem::HI_LO, decks, 10, 8)),
        );
        game.join("streak", 500, Box::new(StreakStrategy::new(5, 80)));
        game.join("random", 500, Box::new(RandomStrategy::new(1, 50, seed)));

        for _ in 0..rounds {
            game.check_and_reshuffle().unwrap();
            let before: Vec<i64> = game.players().iter().map(|p| p.budget()).collect();
            let result = game.play_round().unwrap();

            for (seat, player) in game.players().iter().enumerate() {
                let net = result.player(seat).map_or(0, |r| r.net);
                prop_assert_eq!(player.budget() - before[seat], net);
                prop_assert!(player.budget() >= 0);
            }
            for seat in &result.players {
                let bet: i64 = seat.hands.iter().map(|h| h.bet).sum();
                let paid: i64 = seat.hands.iter().map(|h| h.payout).sum();
                prop_assert_eq!(seat.total_bet, bet);
                prop_assert_eq!(seat.total_payout, paid);
                prop_assert_eq!(seat.net, paid - bet);
            }
        }
    }
}
