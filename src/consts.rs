/// Monthly archive index for a player; append the lowercased username
pub(crate) const ARCHIVES_URL_BASE: &str = "https://api.chess.com/pub/player";

/// The public API rejects requests without a browser-looking agent
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Standard date format used in output file names: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fallback label when a game carries no time control
pub(crate) const UNKNOWN_TIME_CONTROL: &str = "N/A";

/// Monday-first weekday names used for activity bucketing and the histogram
pub(crate) const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Half-moves kept as the opening key
pub(crate) const OPENING_KEY_PLIES: usize = 4;
