//! Interactive prompts: username entry and the post-report game picker.

use std::io::{self, BufRead, Write};

use crate::core::GameRecord;
use crate::error::AppError;
use crate::utils::Timezone;

pub(crate) fn prompt_username() -> Result<String, AppError> {
    print!("Enter a Chess.com username: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// The result code from the tracked player's side.
fn player_result<'a>(game: &'a GameRecord, username: &str) -> &'a str {
    if game.white.username.eq_ignore_ascii_case(username) {
        &game.white.result
    } else {
        &game.black.result
    }
}

fn listing_line(ordinal: usize, game: &GameRecord, username: &str) -> String {
    format!(
        "  {ordinal}. {} vs {} -> {}",
        game.white.username,
        game.black.username,
        player_result(game, username)
    )
}

fn game_details(game: &GameRecord, username: &str, timezone: Timezone) -> String {
    let mut lines = vec!["Selected game details:".to_string()];
    lines.push(format!(
        "  Event: {}",
        game.event.as_deref().unwrap_or("N/A")
    ));
    lines.push(format!(
        "  Date: {}",
        timezone.format_datetime(game.end_time)
    ));
    lines.push(format!(
        "  White: {} ({})",
        game.white.username, game.white.rating
    ));
    lines.push(format!(
        "  Black: {} ({})",
        game.black.username, game.black.rating
    ));
    lines.push(format!("  Result: {}", player_result(game, username)));
    match &game.pgn {
        Some(pgn) => lines.push(format!("\n  Full PGN:\n{pgn}")),
        None => lines.push("\n  (no transcript available)".to_string()),
    }
    lines.join("\n")
}

/// List the games most-recent first and let the user inspect one by ordinal.
/// Out-of-range or non-numeric input prints a notice and skips; never fatal.
pub(crate) fn pick_game(
    games: &[GameRecord],
    username: &str,
    timezone: Timezone,
) -> Result<(), AppError> {
    if games.is_empty() {
        return Ok(());
    }

    println!("\nAvailable games (most recent first):");
    for (i, game) in games.iter().rev().enumerate() {
        println!("{}", listing_line(i + 1, game, username));
    }

    print!("\nPick a game number for details (ENTER to skip): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let choice = line.trim();
    if choice.is_empty() {
        println!("Skipped.");
        return Ok(());
    }
    match choice.parse::<usize>() {
        Ok(n) if (1..=games.len()).contains(&n) => {
            // Listing is reversed; ordinal 1 is the last game
            let game = &games[games.len() - n];
            println!("\n{}", game_details(game, username, timezone));
        }
        Ok(_) => println!("Invalid game number."),
        Err(_) => println!("Invalid input. Skipped."),
    }
    Ok(())
}
