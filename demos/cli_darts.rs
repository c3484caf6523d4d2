//! CLI darts scorekeeper example.
//!
//! The game is saved after every throw to `$DARTRS_SAVE_DIR` (or the system
//! temp directory), so quitting and restarting resumes where it left off.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use dartrs::{FileStorage, Game, GameOptions, Player, Session, SessionError, TurnResult};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let dir = env::var_os("DARTRS_SAVE_DIR")
        .map_or_else(|| env::temp_dir().join("dartrs"), PathBuf::from);
    let mut session = Session::open(GameOptions::default(), FileStorage::new(dir));

    println!("Darts CLI example (type 'q' to quit)");

    loop {
        if !session.game().can_start() && !enter_players(&mut session) {
            return;
        }

        if session.game().is_game_over() {
            let winner = session
                .game()
                .winner()
                .map_or_else(|| "Game over".to_string(), |p| format!("Winner: {}", p.name()));
            println!("\n{}", colorize(&winner, "33"));
            match prompt_line("[r]ematch, [n]ew players or [q]uit: ").as_str() {
                "r" | "rematch" => report(session.reset_game(true)),
                "n" | "new" => report(session.reset_game(false)),
                _ => return,
            }
            continue;
        }

        print_scoreboard(&session);

        let input = prompt_line("Score (r = rematch, n = new players): ");
        match input.as_str() {
            "q" | "quit" => return,
            "r" | "rematch" => report(session.reset_game(true)),
            "n" | "new" => report(session.reset_game(false)),
            _ => match input.parse::<u32>() {
                Ok(score) => match session.submit_score(score) {
                    Ok(result) => announce(&result),
                    Err(err) => println!("Turn error: {err}"),
                },
                Err(_) => println!("Please enter a score of 0 or more."),
            },
        }
    }
}

/// Collects player names until at least the minimum has joined and the user
/// submits an empty line. Returns `false` if the user quit.
fn enter_players<S: dartrs::Storage>(session: &mut Session<S>) -> bool {
    loop {
        let game = session.game();
        let names: Vec<&str> = game.players().iter().map(|p| p.name()).collect();
        let roster = if names.is_empty() {
            "(none)".to_string()
        } else {
            names.join(", ")
        };
        println!("\nPlayers: {roster}");
        let can_start = game.can_start();
        let min_players = game.options().min_players;

        let name = prompt_raw("Add player (empty line to start): ");
        match name.as_str() {
            "q" | "quit" => return false,
            "" if can_start => return true,
            "" => println!("At least {min_players} players are needed."),
            _ => {
                if let Err(err) = session.add_player(&name) {
                    println!("Could not add player: {err}");
                }
            }
        }
    }
}

fn announce(result: &TurnResult) {
    let Some(message) = &result.message else {
        return;
    };

    if result.is_bust() && !result.is_game_over() && !result.is_overtime() {
        println!("{}", colorize(message, "31"));
    } else {
        println!("{}", colorize(message, "34"));
    }
    if !result.winners.is_empty() {
        println!("{} advance to overtime!", result.winners.join(", "));
    }
}

fn report(outcome: Result<(), SessionError>) {
    if let Err(err) = outcome {
        println!("Save error: {err}");
    }
}

fn print_scoreboard<S: dartrs::Storage>(session: &Session<S>) {
    let game = session.game();
    let mode = if game.is_redemption() { " | REDEMPTION" } else { "" };
    println!(
        "\nRound {} | Target {}{mode}",
        game.current_round(),
        game.target_score()
    );

    for (index, player) in game.players().iter().enumerate() {
        let marker = if index == game.current_player_index() { "*" } else { " " };
        let line = format!(
            "{marker} {:<12} {:>4}  {:?}",
            player.name(),
            player.total_score(),
            player.rounds()
        );
        if player.is_eliminated() {
            println!("{}", colorize(&line, "90"));
        } else {
            println!("{line}");
        }
    }

    if let Some(player) = game.current_player() {
        let needed = points_needed(game, player);
        println!("{} to throw, needs {needed}", player.name());
    }
}

/// Points still missing from the active target.
fn points_needed(game: &Game, player: &Player) -> u32 {
    game.target_score().saturating_sub(player.total_score())
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    read_answer(&mut io::stdin().lock())
}

/// Reads one trimmed line. End of input and read errors answer `q`.
fn read_answer(reader: &mut impl BufRead) -> String {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_string(),
    }
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
