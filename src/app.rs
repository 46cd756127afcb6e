//! Pipeline orchestration: fetch, aggregate, render, persist, recommend,
//! and the interactive picker.

use crate::cli::{Cli, pick_game, prompt_username};
use crate::core::{AggregateOptions, aggregate};
use crate::error::AppError;
use crate::output::{build_report, recommendations, save_report, save_snapshot, weekday_histogram};
use crate::source::ChessComClient;
use crate::utils::Timezone;

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;

    let username = match &cli.username {
        Some(u) => u.trim().to_string(),
        None => prompt_username()?,
    };
    let client = ChessComClient::new(&username);
    let games = client.fetch_recent_games(cli.months())?;
    if games.is_empty() {
        println!("No games found for {}.", client.username());
        return Ok(());
    }

    eprintln!("Analyzing {} games...", games.len());
    let opts = AggregateOptions {
        time_control: cli.time_control.clone(),
        min_rating: cli.min_rating(),
        timezone,
    };
    let snapshot = aggregate(&games, client.username(), &opts);
    if snapshot.games_analyzed == 0 {
        println!("No games matched the filters; nothing to report.");
        return Ok(());
    }

    let report = build_report(client.username(), &snapshot);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{report}");
        println!();
        println!("{}", weekday_histogram(&snapshot));
        let recs = recommendations(&snapshot);
        if !recs.is_empty() {
            println!("\nRecommendations");
            println!("{}", "=".repeat(40));
            for rec in recs {
                println!("  - {rec}");
            }
        }
    }

    if !cli.no_save {
        let dir = std::env::current_dir()?;
        let path = save_report(&dir, client.username(), &report)?;
        eprintln!("Report saved to {}", path.display());
        let path = save_snapshot(&dir, client.username(), &snapshot)?;
        eprintln!("Snapshot saved to {}", path.display());
    }

    if !cli.json && !cli.no_interactive {
        pick_game(&games, client.username(), timezone)?;
    }

    Ok(())
}
