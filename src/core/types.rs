//! Core data types: the unified game record consumed by the engine and the
//! immutable snapshot it produces.

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{HashMap, HashSet};

use crate::consts::UNKNOWN_TIME_CONTROL;

/// One side of a game as the API reports it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlayerSide {
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) rating: i64,
    pub(crate) result: String,
}

/// A single played game. Missing fields fall back to documented defaults
/// (rating 0, time control "N/A", end time epoch 0, no transcript).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GameRecord {
    pub(crate) white: PlayerSide,
    pub(crate) black: PlayerSide,
    #[serde(default = "default_time_control")]
    pub(crate) time_control: String,
    #[serde(default)]
    pub(crate) end_time: i64,
    #[serde(default)]
    pub(crate) pgn: Option<String>,
    #[serde(default)]
    pub(crate) event: Option<String>,
}

fn default_time_control() -> String {
    UNKNOWN_TIME_CONTROL.to_string()
}

/// Fixed result-code taxonomy. Anything that is neither a win nor one of the
/// known loss codes counts as a draw, with the raw code kept as the subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub(crate) fn from_result_code(code: &str) -> Self {
        match code {
            "win" => Outcome::Win,
            "checkmated" | "resigned" | "timeout" | "lose" => Outcome::Loss,
            _ => Outcome::Draw,
        }
    }
}

/// Sentinel ply count for "no shortest game seen yet".
pub(crate) const NO_SHORTEST: u32 = u32::MAX;
/// Sentinel rating for "no worst loss seen yet".
pub(crate) const NO_WORST_LOSS: i64 = i64::MAX;

/// Transcript extremum: the full PGN and its half-move count.
/// Serializes as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtremeGame {
    pub(crate) pgn: String,
    pub(crate) plies: u32,
}

impl Serialize for ExtremeGame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.pgn)?;
        t.serialize_element(&self.plies)?;
        t.end()
    }
}

/// Opponent extremum: who it was against and their rating.
/// Serializes as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RatedOpponent {
    pub(crate) username: String,
    pub(crate) rating: i64,
}

impl Serialize for RatedOpponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.username)?;
        t.serialize_element(&self.rating)?;
        t.end()
    }
}

/// Wins and total plays for one opening key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct OpeningScore {
    pub(crate) wins: u64,
    pub(crate) total: u64,
}

/// Outcome breakdown for one weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct DayOutcomes {
    pub(crate) wins: u64,
    pub(crate) losses: u64,
    pub(crate) draws: u64,
}

impl DayOutcomes {
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub(crate) fn total(&self) -> u64 {
        self.wins + self.losses + self.draws
    }
}

/// Immutable result of one aggregation pass. Built by the engine, only read
/// by renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StatsSnapshot {
    pub(crate) won: u64,
    pub(crate) lost: u64,
    pub(crate) drawn: u64,
    pub(crate) white_games: u64,
    pub(crate) white_wins: u64,
    pub(crate) black_games: u64,
    pub(crate) black_wins: u64,
    pub(crate) total_plies: u64,
    pub(crate) games_analyzed: u64,
    /// Opponent usernames in processing order, parallel to `opponent_ratings`
    pub(crate) opponents: Vec<String>,
    pub(crate) opponent_ratings: Vec<i64>,
    pub(crate) time_controls: HashMap<String, u64>,
    pub(crate) draw_types: HashMap<String, u64>,
    pub(crate) current_streak: i64,
    pub(crate) max_win_streak: i64,
    /// Most negative value seen; a 4-loss run is stored as -4
    pub(crate) max_loss_streak: i64,
    pub(crate) shortest_game: ExtremeGame,
    pub(crate) longest_game: ExtremeGame,
    pub(crate) best_win: RatedOpponent,
    pub(crate) worst_loss: RatedOpponent,
    pub(crate) openings: HashMap<String, u64>,
    pub(crate) opening_results: HashMap<String, OpeningScore>,
    pub(crate) games_per_day: HashMap<String, u64>,
    pub(crate) day_results: HashMap<String, DayOutcomes>,
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        StatsSnapshot {
            won: 0,
            lost: 0,
            drawn: 0,
            white_games: 0,
            white_wins: 0,
            black_games: 0,
            black_wins: 0,
            total_plies: 0,
            games_analyzed: 0,
            opponents: Vec::new(),
            opponent_ratings: Vec::new(),
            time_controls: HashMap::new(),
            draw_types: HashMap::new(),
            current_streak: 0,
            max_win_streak: 0,
            max_loss_streak: 0,
            shortest_game: ExtremeGame {
                pgn: String::new(),
                plies: NO_SHORTEST,
            },
            longest_game: ExtremeGame {
                pgn: String::new(),
                plies: 0,
            },
            best_win: RatedOpponent {
                username: String::new(),
                rating: 0,
            },
            worst_loss: RatedOpponent {
                username: String::new(),
                rating: NO_WORST_LOSS,
            },
            openings: HashMap::new(),
            opening_results: HashMap::new(),
            games_per_day: HashMap::new(),
            day_results: HashMap::new(),
        }
    }
}

impl StatsSnapshot {
    /// Overall win percentage, integer floor division, 0 when nothing analyzed.
    pub(crate) fn win_rate(&self) -> u64 {
        if self.games_analyzed == 0 {
            0
        } else {
            self.won * 100 / self.games_analyzed
        }
    }

    pub(crate) fn white_win_rate(&self) -> Option<u64> {
        (self.white_games > 0).then(|| self.white_wins * 100 / self.white_games)
    }

    pub(crate) fn black_win_rate(&self) -> Option<u64> {
        (self.black_games > 0).then(|| self.black_wins * 100 / self.black_games)
    }

    pub(crate) fn avg_opponent_rating(&self) -> Option<i64> {
        if self.opponent_ratings.is_empty() {
            return None;
        }
        let sum: i64 = self.opponent_ratings.iter().sum();
        Some(sum / self.opponent_ratings.len() as i64)
    }

    pub(crate) fn avg_plies(&self) -> u64 {
        if self.games_analyzed == 0 {
            0
        } else {
            self.total_plies / self.games_analyzed
        }
    }

    /// Most frequent opponent; ties keep the first one encountered.
    pub(crate) fn most_frequent_opponent(&self) -> Option<(&str, u64)> {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for name in &self.opponents {
            *counts.entry(name.as_str()).or_default() += 1;
        }
        let mut seen: HashSet<&str> = HashSet::new();
        let mut best: Option<(&str, u64)> = None;
        for name in &self.opponents {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let count = counts[name.as_str()];
            if best.is_none_or(|(_, b)| count > b) {
                best = Some((name.as_str(), count));
            }
        }
        best
    }

    /// Top N openings by play count; explicit sort (count desc, then key).
    pub(crate) fn top_openings(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .openings
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    /// Lowest win-ratio opening among those played more than `min_total` times.
    pub(crate) fn worst_opening(&self, min_total: u64) -> Option<(&str, f64)> {
        let mut worst: Option<(&str, f64)> = None;
        let mut keys: Vec<&String> = self.opening_results.keys().collect();
        keys.sort();
        for key in keys {
            let score = &self.opening_results[key];
            if score.total <= min_total {
                continue;
            }
            let ratio = score.wins as f64 / score.total as f64;
            if worst.is_none_or(|(_, w)| ratio < w) {
                worst = Some((key.as_str(), ratio));
            }
        }
        worst
    }

    /// Weekday with the lowest win percentage among those with more than
    /// `min_games` games, scanned Monday-first.
    pub(crate) fn worst_weekday(&self, min_games: u64) -> Option<(&str, f64)> {
        let mut worst: Option<(&str, f64)> = None;
        for day in crate::consts::WEEKDAYS {
            let Some(results) = self.day_results.get(day) else {
                continue;
            };
            if results.total() <= min_games {
                continue;
            }
            let rate = results.wins as f64 * 100.0 / results.total() as f64;
            if worst.is_none_or(|(_, w)| rate < w) {
                worst = Some((day, rate));
            }
        }
        worst
    }

    pub(crate) fn has_best_win(&self) -> bool {
        self.best_win.rating > 0
    }

    pub(crate) fn has_worst_loss(&self) -> bool {
        self.worst_loss.rating < NO_WORST_LOSS
    }

    pub(crate) fn has_shortest_game(&self) -> bool {
        self.shortest_game.plies != NO_SHORTEST
    }

    pub(crate) fn has_longest_game(&self) -> bool {
        self.longest_game.plies > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_code_taxonomy() {
        assert_eq!(Outcome::from_result_code("win"), Outcome::Win);
        for code in ["checkmated", "resigned", "timeout", "lose"] {
            assert_eq!(Outcome::from_result_code(code), Outcome::Loss);
        }
        assert_eq!(Outcome::from_result_code("agreed"), Outcome::Draw);
        assert_eq!(Outcome::from_result_code("stalemate"), Outcome::Draw);
        assert_eq!(Outcome::from_result_code(""), Outcome::Draw);
    }

    #[test]
    fn game_record_defaults() {
        let game: GameRecord = serde_json::from_str(
            r#"{"white":{"username":"a","result":"win"},
                "black":{"username":"b","result":"resigned"}}"#,
        )
        .unwrap();
        assert_eq!(game.time_control, "N/A");
        assert_eq!(game.end_time, 0);
        assert_eq!(game.white.rating, 0);
        assert!(game.pgn.is_none());
    }

    #[test]
    fn extremes_serialize_as_arrays() {
        let shortest = ExtremeGame {
            pgn: "1. e4".to_string(),
            plies: 1,
        };
        assert_eq!(
            serde_json::to_value(&shortest).unwrap(),
            serde_json::json!(["1. e4", 1])
        );
        let best = RatedOpponent {
            username: "rival".to_string(),
            rating: 1500,
        };
        assert_eq!(
            serde_json::to_value(&best).unwrap(),
            serde_json::json!(["rival", 1500])
        );
    }

    #[test]
    fn win_rate_guards_division() {
        let s = StatsSnapshot::default();
        assert_eq!(s.win_rate(), 0);
        assert_eq!(s.avg_plies(), 0);
        assert!(s.white_win_rate().is_none());
        assert!(s.black_win_rate().is_none());
        assert!(s.avg_opponent_rating().is_none());
    }

    #[test]
    fn win_rate_floor_division() {
        let s = StatsSnapshot {
            won: 1,
            lost: 1,
            drawn: 1,
            games_analyzed: 3,
            ..Default::default()
        };
        assert_eq!(s.win_rate(), 33);
    }

    #[test]
    fn most_frequent_opponent_ties_keep_first_seen() {
        let s = StatsSnapshot {
            opponents: vec![
                "alice".to_string(),
                "bob".to_string(),
                "bob".to_string(),
                "alice".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(s.most_frequent_opponent(), Some(("alice", 2)));
    }

    #[test]
    fn top_openings_sorted_by_count_then_key() {
        let mut s = StatsSnapshot::default();
        s.openings.insert("e4 e5".to_string(), 3);
        s.openings.insert("d4 d5".to_string(), 5);
        s.openings.insert("c4 e5".to_string(), 3);
        assert_eq!(
            s.top_openings(2),
            vec![("d4 d5", 5), ("c4 e5", 3)]
        );
    }

    #[test]
    fn worst_opening_requires_minimum_plays() {
        let mut s = StatsSnapshot::default();
        s.opening_results
            .insert("e4 e5".to_string(), OpeningScore { wins: 0, total: 3 });
        s.opening_results
            .insert("d4 d5".to_string(), OpeningScore { wins: 2, total: 6 });
        assert_eq!(s.worst_opening(5), Some(("d4 d5", 2.0 / 6.0)));
        assert!(s.worst_opening(10).is_none());
    }

    #[test]
    fn worst_weekday_filters_low_volume_days() {
        let mut s = StatsSnapshot::default();
        s.day_results.insert(
            "Monday".to_string(),
            DayOutcomes {
                wins: 1,
                losses: 7,
                draws: 0,
            },
        );
        s.day_results.insert(
            "Friday".to_string(),
            DayOutcomes {
                wins: 0,
                losses: 2,
                draws: 0,
            },
        );
        let (day, rate) = s.worst_weekday(5).unwrap();
        assert_eq!(day, "Monday");
        assert!(rate < 40.0);
    }

    #[test]
    fn empty_snapshot_has_no_extremes() {
        let s = StatsSnapshot::default();
        assert!(!s.has_best_win());
        assert!(!s.has_worst_loss());
        assert!(!s.has_shortest_game());
        assert!(!s.has_longest_game());
    }
}
