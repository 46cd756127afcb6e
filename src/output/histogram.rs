use crate::consts::WEEKDAYS;
use crate::core::StatsSnapshot;

/// Bar width of the busiest day
const MAX_BAR: u64 = 20;

/// Weekday activity chart, one row per day Monday through Sunday, bars scaled
/// relative to the busiest day.
pub(crate) fn weekday_histogram(s: &StatsSnapshot) -> String {
    let counts: Vec<u64> = WEEKDAYS
        .iter()
        .map(|day| s.games_per_day.get(*day).copied().unwrap_or(0))
        .collect();
    let busiest = counts.iter().copied().max().unwrap_or(0);

    let mut lines = vec!["Activity by day of week:".to_string()];
    if busiest == 0 {
        lines.push("  No games recorded by day of week.".to_string());
        return lines.join("\n");
    }
    for (day, count) in WEEKDAYS.iter().zip(counts) {
        let bar = "#".repeat((count * MAX_BAR / busiest) as usize);
        lines.push(format!("{day:<10}: {bar} ({count} games)"));
    }
    lines.join("\n")
}
