//! Text report renderer: a fixed section order over the snapshot, printed to
//! the console and persisted verbatim.

use chrono::Local;
use comfy_table::{
    ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::DATE_FORMAT;
use crate::core::StatsSnapshot;
use crate::error::AppError;

const RULE_WIDTH: usize = 40;

pub(crate) fn build_report(username: &str, s: &StatsSnapshot) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("=".repeat(RULE_WIDTH));
    lines.push("       GAME ANALYSIS REPORT".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("  Player: {username}"));
    lines.push(format!("  Games analyzed: {}", s.games_analyzed));
    lines.push("-".repeat(RULE_WIDTH));

    lines.push(String::new());
    lines.push("Results Summary".to_string());
    lines.push(format!(
        "  Won: {} | Lost: {} | Drawn: {}",
        s.won, s.lost, s.drawn
    ));
    lines.push(format!("  Overall win rate: {}%", s.win_rate()));
    if let Some(rate) = s.white_win_rate() {
        lines.push(format!("  Win rate as White: {rate}%"));
    }
    if let Some(rate) = s.black_win_rate() {
        lines.push(format!("  Win rate as Black: {rate}%"));
    }

    lines.push(String::new());
    lines.push("Streaks".to_string());
    lines.push(format!("  Longest winning streak: {}", s.max_win_streak));
    lines.push(format!(
        "  Longest losing streak: {}",
        s.max_loss_streak.unsigned_abs()
    ));

    lines.push(String::new());
    lines.push("Opponents".to_string());
    if let Some(avg) = s.avg_opponent_rating() {
        lines.push(format!("  Average opponent rating: {avg}"));
    }
    if let Some((name, count)) = s.most_frequent_opponent() {
        lines.push(format!("  Most frequent opponent: {name} ({count} games)"));
    }
    if s.has_best_win() {
        lines.push(format!(
            "  Best win: against {} (rating {})",
            s.best_win.username, s.best_win.rating
        ));
    }
    if s.has_worst_loss() {
        lines.push(format!(
            "  Worst loss: against {} (rating {})",
            s.worst_loss.username, s.worst_loss.rating
        ));
    }

    lines.push(String::new());
    lines.push("Most Played Openings".to_string());
    for (key, count) in s.top_openings(5) {
        lines.push(format!("  - {key} ({count} times)"));
    }

    lines.push(String::new());
    lines.push("Game Pacing".to_string());
    lines.push(format!("  Average half-moves per game: {}", s.avg_plies()));
    if s.has_shortest_game() {
        lines.push(format!(
            "  Shortest game: {} half-moves",
            s.shortest_game.plies
        ));
    }
    if s.has_longest_game() {
        lines.push(format!(
            "  Longest game: {} half-moves",
            s.longest_game.plies
        ));
    }

    if !s.time_controls.is_empty() {
        lines.push(String::new());
        lines.push("Time Controls".to_string());
        lines.push(frequency_table("Time control", &s.time_controls));
    }

    if !s.draw_types.is_empty() {
        lines.push(String::new());
        lines.push("Draw Types".to_string());
        lines.push(frequency_table("Draw type", &s.draw_types));
    }

    lines.push("=".repeat(RULE_WIDTH));
    lines.join("\n")
}

/// Label/count table sorted by count desc, then label.
fn frequency_table(label: &str, counts: &std::collections::HashMap<String, u64>) -> String {
    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header([label, "Games"]);
    for (key, count) in entries {
        table.add_row([key.to_string(), count.to_string()]);
    }
    table.to_string()
}

/// Write the report to `report_<username>_<isodate>.txt` under `dir`.
pub(crate) fn save_report(dir: &Path, username: &str, report: &str) -> Result<PathBuf, AppError> {
    let date = Local::now().date_naive().format(DATE_FORMAT);
    let path = dir.join(format!("report_{username}_{date}.txt"));
    fs::write(&path, report)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> StatsSnapshot {
        let mut s = StatsSnapshot {
            won: 1,
            lost: 1,
            drawn: 1,
            white_games: 2,
            white_wins: 1,
            black_games: 1,
            black_wins: 0,
            total_plies: 90,
            games_analyzed: 3,
            opponents: vec![
                "rival1".to_string(),
                "rival2".to_string(),
                "rival3".to_string(),
            ],
            opponent_ratings: vec![1500, 1600, 1400],
            max_win_streak: 1,
            max_loss_streak: -1,
            ..Default::default()
        };
        s.best_win.username = "rival1".to_string();
        s.best_win.rating = 1500;
        s.worst_loss.username = "rival2".to_string();
        s.worst_loss.rating = 1600;
        s.shortest_game.plies = 20;
        s.longest_game.plies = 40;
        s.time_controls.insert("600".to_string(), 2);
        s.time_controls.insert("180".to_string(), 1);
        s.draw_types.insert("agreed".to_string(), 1);
        s.openings.insert("e4 e5 Nf3 Nc6".to_string(), 2);
        s
    }

    #[test]
    fn report_has_fixed_sections_in_order() {
        let report = build_report("hero", &sample_snapshot());
        let sections = [
            "GAME ANALYSIS REPORT",
            "Player: hero",
            "Results Summary",
            "Streaks",
            "Opponents",
            "Most Played Openings",
            "Game Pacing",
            "Time Controls",
            "Draw Types",
        ];
        let mut last = 0;
        for section in sections {
            let pos = report[last..]
                .find(section)
                .unwrap_or_else(|| panic!("missing section: {section}"));
            last += pos;
        }
    }

    #[test]
    fn report_values_match_snapshot() {
        let report = build_report("hero", &sample_snapshot());
        assert!(report.contains("Won: 1 | Lost: 1 | Drawn: 1"));
        assert!(report.contains("Overall win rate: 33%"));
        assert!(report.contains("Win rate as White: 50%"));
        assert!(report.contains("Best win: against rival1 (rating 1500)"));
        assert!(report.contains("Worst loss: against rival2 (rating 1600)"));
        assert!(report.contains("Shortest game: 20 half-moves"));
        assert!(report.contains("Longest game: 40 half-moves"));
        assert!(report.contains("- e4 e5 Nf3 Nc6 (2 times)"));
    }

    #[test]
    fn empty_optional_lines_are_omitted() {
        let s = StatsSnapshot {
            won: 1,
            white_games: 1,
            white_wins: 1,
            games_analyzed: 1,
            opponents: vec!["rival".to_string()],
            opponent_ratings: vec![1200],
            ..Default::default()
        };
        let report = build_report("hero", &s);
        assert!(!report.contains("Worst loss"));
        assert!(!report.contains("Win rate as Black"));
        assert!(!report.contains("Shortest game"));
        assert!(!report.contains("Draw Types"));
    }

    #[test]
    fn save_report_uses_naming_convention() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_report(dir.path(), "hero", "report body").unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("report_hero_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "report body");
    }
}
