use dartrs::{Game, GameOptions, GameState, TurnError, TurnOutcome};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn game_with(players: usize) -> Game {
    let mut game = Game::new(GameOptions::default());
    for seat in 0..players {
        game.add_player(&format!("P{seat}")).unwrap();
    }
    game
}

/// Plays random throws until the game ends or `turns` run out, checking
/// the score bound after every throw.
fn play_random(game: &mut Game, rng: &mut ChaCha8Rng, turns: usize) {
    for _ in 0..turns {
        // Favour throws that land near the target so endgames actually happen.
        let remaining = game
            .current_player()
            .map_or(0, |p| game.target_score() - p.total_score());
        let score = if rng.random_bool(0.3) {
            remaining
        } else {
            rng.random_range(0..=180)
        };

        match game.submit_score(score) {
            Ok(_) => {}
            Err(TurnError::GameOver) => break,
            Err(err) => panic!("unexpected error {err:?}"),
        }

        let target = game.target_score();
        for player in game.players() {
            assert!(player.total_score() <= target);
        }
        if game.is_game_over() {
            break;
        }
    }
}

#[test]
fn seeded_games_respect_invariants() {
    for seed in 0..200u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let players = rng.random_range(2..=5);
        let mut game = game_with(players);

        play_random(&mut game, &mut rng, 500);

        if let Some(current) = game.current_player() {
            assert!(current.is_active(), "seed {seed}: turn rests on eliminated player");
        }
        assert!(game.active_players().count() >= 1);
        if game.is_game_over() {
            let winner = game.winner().expect("finished game has a winner");
            assert_eq!(winner.total_score(), game.target_score());
            assert_eq!(game.redemption_players().count(), 0);
        }
    }
}

#[test]
fn seeded_games_survive_a_save_and_restore() {
    for seed in 0..100u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = game_with(3);
        let turns = rng.random_range(1..60);
        play_random(&mut game, &mut rng, turns);

        let json = game.snapshot().to_json().unwrap();
        let restored = Game::from_snapshot(
            GameOptions::default(),
            dartrs::Snapshot::from_json(&json).unwrap(),
        );

        assert_eq!(restored.state(), game.state(), "seed {seed}");
        assert_eq!(restored.current_player_index(), game.current_player_index());
        assert_eq!(restored.current_round(), game.current_round());
        assert_eq!(restored.target_score(), game.target_score());
        assert_eq!(restored.snapshot(), game.snapshot());
    }
}

proptest! {
    /// A player's total never passes the target, whatever is thrown.
    #[test]
    fn totals_never_exceed_target(scores in prop::collection::vec(0u32..=400, 1..80)) {
        let mut game = game_with(3);
        for score in scores {
            if game.submit_score(score).is_err() {
                break;
            }
            let target = game.target_score();
            prop_assert!(game.players().iter().all(|p| p.total_score() <= target));
        }
    }

    /// A bust leaves the thrower untouched and always passes the turn.
    #[test]
    fn bust_is_a_no_op_that_passes_the_turn(opening in 0u32..=300, overshoot in 1u32..=200) {
        let mut game = game_with(2);
        game.submit_score(opening).unwrap();
        game.submit_score(0).unwrap();

        let before = game.players()[0].clone();
        let result = game.submit_score(301 - opening + overshoot).unwrap();

        prop_assert!(result.is_bust());
        prop_assert_eq!(&game.players()[0], &before);
        prop_assert_eq!(game.current_player_index(), 1);
    }

    /// The first hit queues exactly the other active players below the target.
    #[test]
    fn first_hit_queues_everyone_else(players in 2usize..=6, hitter in 0usize..6) {
        let hitter = hitter % players;
        let mut game = game_with(players);
        for _ in 0..hitter {
            game.submit_score(1).unwrap();
        }

        let result = game.submit_score(301).unwrap();
        prop_assert_eq!(result.outcome, TurnOutcome::RedemptionStarted);
        prop_assert_eq!(game.state(), GameState::Redemption);

        let expected: Vec<_> = game
            .players()
            .iter()
            .filter(|p| p.total_score() != 301)
            .map(|p| p.id())
            .collect();
        prop_assert_eq!(game.redemption_players().collect::<Vec<_>>(), expected);
    }

    /// Once redemption is over exactly one of overtime or victory happened.
    #[test]
    fn redemption_ends_in_overtime_or_victory(ties in prop::collection::vec(any::<bool>(), 1..5)) {
        let mut game = game_with(ties.len() + 1);
        game.submit_score(301).unwrap();

        let mut last = None;
        for &tie in &ties {
            last = Some(game.submit_score(if tie { 301 } else { 0 }).unwrap());
        }
        let last = last.unwrap();

        if ties.iter().any(|&tie| tie) {
            prop_assert!(last.is_overtime());
            prop_assert!(!last.is_game_over());
            prop_assert_eq!(game.target_score(), 401);
            prop_assert_eq!(game.current_round(), 1);
            for (seat, player) in game.players().iter().enumerate() {
                let qualified = seat == 0 || ties[seat - 1];
                prop_assert_eq!(player.is_eliminated(), !qualified);
                if qualified {
                    prop_assert_eq!(player.total_score(), 301);
                }
            }
            prop_assert_eq!(
                game.redemption_players().count(),
                1 + ties.iter().filter(|&&tie| tie).count()
            );
        } else {
            prop_assert!(last.is_game_over());
            prop_assert!(!game.is_redemption());
            prop_assert_eq!(game.target_score(), 301);
        }
    }
}
