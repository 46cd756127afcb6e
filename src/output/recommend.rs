//! Threshold-based suggestions derived from the snapshot. Rules are
//! independent and evaluated in a fixed order; every applicable rule fires.

use crate::core::StatsSnapshot;

const COLOR_GAP_POINTS: u64 = 10;
const LOSS_STREAK_LIMIT: i64 = -3;
const OPENING_MIN_PLAYS: u64 = 5;
const SHORT_GAME_PLIES: u64 = 25;
const LONG_GAME_PLIES: u64 = 40;
const WEEKDAY_MIN_GAMES: u64 = 5;
const WEEKDAY_LOW_RATE: f64 = 40.0;

pub(crate) fn recommendations(s: &StatsSnapshot) -> Vec<String> {
    let mut out = Vec::new();
    if s.games_analyzed == 0 {
        return out;
    }

    if s.win_rate() < 50 {
        out.push(
            "Your win rate is below 50%. Review your losses beyond the opening and \
             look for the moment the position turned against you."
                .to_string(),
        );
    } else {
        out.push(
            "Your win rate is solid. Focus on efficiency: convert small advantages \
             faster and aim for cleaner wins."
                .to_string(),
        );
    }

    if let (Some(white), Some(black)) = (s.white_win_rate(), s.black_win_rate())
        && white.abs_diff(black) > COLOR_GAP_POINTS
    {
        let weaker = if white > black { "Black" } else { "White" };
        out.push(format!(
            "You score noticeably worse with {weaker}. Pick one opening for that \
             color and study its first 10-15 moves in depth."
        ));
    }

    if s.max_loss_streak < LOSS_STREAK_LIMIT {
        out.push(
            "You have had long losing streaks. After two or three straight losses, \
             step away; tilt causes avoidable mistakes."
                .to_string(),
        );
    }

    if s.openings.is_empty() {
        out.push(
            "No opening data could be analyzed. Pick one opening per color and \
             study it until it feels familiar."
                .to_string(),
        );
    } else if let Some((key, _)) = s.worst_opening(OPENING_MIN_PLAYS) {
        out.push(format!(
            "Your weakest opening is '{key}'. Spend a few minutes a day on master \
             games in this line to understand the ideas behind the moves."
        ));
    }

    let avg = s.avg_plies();
    if avg < SHORT_GAME_PLIES {
        out.push(format!(
            "Your games are short, averaging {avg} half-moves. Short games often \
             end in early tactical mistakes; after every opponent move, ask what \
             it threatens."
        ));
    } else if avg > LONG_GAME_PLIES {
        out.push(format!(
            "Your games are long, averaging {avg} half-moves. Make sure those long \
             games pay off: study pawn and rook endgames to convert small edges."
        ));
    }

    if let Some((day, rate)) = s.worst_weekday(WEEKDAY_MIN_GAMES)
        && rate < WEEKDAY_LOW_RATE
    {
        out.push(format!(
            "Your win rate is noticeably lower on {day}s. Consider resting that day \
             or playing at a different time."
        ));
    }

    out
}
