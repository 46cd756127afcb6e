//! The aggregation pass: one strict linear scan over the game history,
//! building an explicit accumulator that becomes the snapshot.

use crate::consts::WEEKDAYS;
use crate::core::pgn::summarize_moves;
use crate::core::types::{ExtremeGame, GameRecord, Outcome, RatedOpponent, StatsSnapshot};
use crate::utils::Timezone;

/// Filters and calendar settings for one aggregation pass.
#[derive(Debug, Clone)]
pub(crate) struct AggregateOptions {
    /// Exact-match time-control label; `None` analyzes everything
    pub(crate) time_control: Option<String>,
    /// Games against lower-rated opponents are skipped past perspective
    /// resolution
    pub(crate) min_rating: i64,
    pub(crate) timezone: Timezone,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        AggregateOptions {
            time_control: None,
            min_rating: 0,
            timezone: Timezone::Local,
        }
    }
}

/// Aggregate a player's games into a snapshot. Games are processed in input
/// order, which fixes first-seen tie-breaks for the extremes and the ordering
/// of the opponent lists.
pub(crate) fn aggregate(
    games: &[GameRecord],
    username: &str,
    opts: &AggregateOptions,
) -> StatsSnapshot {
    games.iter().fold(StatsSnapshot::default(), |mut acc, game| {
        process_game(&mut acc, game, username, opts);
        acc
    })
}

fn process_game(
    acc: &mut StatsSnapshot,
    game: &GameRecord,
    username: &str,
    opts: &AggregateOptions,
) {
    // Step 1: time-control filter skips the game entirely
    if let Some(filter) = &opts.time_control
        && game.time_control != *filter
    {
        return;
    }

    // Step 2: perspective resolution. The per-color tally intentionally
    // increments before the rating filter; a filtered game still counts
    // toward the color it was played with.
    let played_white = game.white.username.eq_ignore_ascii_case(username);
    let (opponent_side, result_code) = if played_white {
        acc.white_games += 1;
        (&game.black, game.white.result.as_str())
    } else {
        acc.black_games += 1;
        (&game.white, game.black.result.as_str())
    };
    let opponent = opponent_side.username.to_lowercase();
    let opponent_rating = opponent_side.rating;

    // Step 3: rating filter
    if opponent_rating < opts.min_rating {
        return;
    }

    acc.opponents.push(opponent.clone());
    acc.opponent_ratings.push(opponent_rating);
    acc.games_analyzed += 1;

    // Step 4: classification, streaks, opponent extremes
    let outcome = Outcome::from_result_code(result_code);
    match outcome {
        Outcome::Win => {
            acc.won += 1;
            acc.current_streak = if acc.current_streak >= 0 {
                acc.current_streak + 1
            } else {
                1
            };
            acc.max_win_streak = acc.max_win_streak.max(acc.current_streak);
            if played_white {
                acc.white_wins += 1;
            } else {
                acc.black_wins += 1;
            }
            if opponent_rating > acc.best_win.rating {
                acc.best_win = RatedOpponent {
                    username: opponent,
                    rating: opponent_rating,
                };
            }
        }
        Outcome::Loss => {
            acc.lost += 1;
            acc.current_streak = if acc.current_streak <= 0 {
                acc.current_streak - 1
            } else {
                -1
            };
            acc.max_loss_streak = acc.max_loss_streak.min(acc.current_streak);
            if opponent_rating < acc.worst_loss.rating {
                acc.worst_loss = RatedOpponent {
                    username: opponent,
                    rating: opponent_rating,
                };
            }
        }
        Outcome::Draw => {
            acc.drawn += 1;
            acc.current_streak = 0;
            *acc.draw_types.entry(result_code.to_string()).or_default() += 1;
        }
    }

    // Step 5: transcript analysis; a parse failure only skips this step
    if let Some(pgn) = &game.pgn
        && let Some(summary) = summarize_moves(pgn)
    {
        acc.total_plies += u64::from(summary.plies);
        if summary.plies < acc.shortest_game.plies {
            acc.shortest_game = ExtremeGame {
                pgn: pgn.clone(),
                plies: summary.plies,
            };
        }
        if summary.plies > acc.longest_game.plies {
            acc.longest_game = ExtremeGame {
                pgn: pgn.clone(),
                plies: summary.plies,
            };
        }
        if !summary.opening_key.is_empty() {
            *acc.openings.entry(summary.opening_key.clone()).or_default() += 1;
            let score = acc.opening_results.entry(summary.opening_key).or_default();
            score.total += 1;
            if outcome == Outcome::Win {
                score.wins += 1;
            }
        }
    }

    // Step 6: categorical bookkeeping
    *acc.time_controls
        .entry(game.time_control.clone())
        .or_default() += 1;
    let day = WEEKDAYS[opts.timezone.weekday_index(game.end_time)];
    *acc.games_per_day.entry(day.to_string()).or_default() += 1;
    acc.day_results
        .entry(day.to_string())
        .or_default()
        .record(outcome);
}
