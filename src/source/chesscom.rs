//! Chess.com public API client. Blocking, no retries: any failed request
//! aborts the whole retrieval.

use serde::Deserialize;

use crate::consts::{ARCHIVES_URL_BASE, USER_AGENT};
use crate::core::GameRecord;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct ArchiveIndex {
    archives: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MonthlyGames {
    games: Vec<GameRecord>,
}

pub(crate) struct ChessComClient {
    username: String,
}

impl ChessComClient {
    pub(crate) fn new(username: &str) -> Self {
        ChessComClient {
            username: username.to_lowercase(),
        }
    }

    pub(crate) fn username(&self) -> &str {
        &self.username
    }

    /// Fetch the games from the player's most recent `months` monthly
    /// archives, oldest month first, concatenated in archive order.
    pub(crate) fn fetch_recent_games(&self, months: usize) -> Result<Vec<GameRecord>, AppError> {
        eprintln!("Fetching game archives for {}...", self.username);
        let index_url = format!("{ARCHIVES_URL_BASE}/{}/games/archives", self.username);
        let index: ArchiveIndex = get_json(&index_url)?;

        let start = index.archives.len().saturating_sub(months);
        let mut games = Vec::new();
        for url in &index.archives[start..] {
            eprint!("Downloading games from {}...", month_label(url));
            let month: MonthlyGames = get_json(url)?;
            eprintln!(" {} games", month.games.len());
            games.extend(month.games);
        }
        Ok(games)
    }
}

fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, AppError> {
    let response = ureq::get(url).header("User-Agent", USER_AGENT).call()?;
    let mut body = response.into_body();
    serde_json::from_reader(body.as_reader()).map_err(|source| AppError::Decode {
        url: url.to_string(),
        source,
    })
}

/// "YYYY/MM" from an archive URL like ".../games/2024/01"
fn month_label(url: &str) -> String {
    let mut parts = url.rsplit('/');
    let month = parts.next().unwrap_or("?");
    let year = parts.next().unwrap_or("?");
    format!("{year}/{month}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_lowercases_username() {
        let client = ChessComClient::new("MagnusCarlsen");
        assert_eq!(client.username(), "magnuscarlsen");
    }

    #[test]
    fn month_label_from_archive_url() {
        assert_eq!(
            month_label("https://api.chess.com/pub/player/hero/games/2024/01"),
            "2024/01"
        );
    }

    #[test]
    fn monthly_games_deserializes_api_shape() {
        let month: MonthlyGames = serde_json::from_str(
            r#"{"games":[{
                "white":{"username":"hero","rating":1000,"result":"win"},
                "black":{"username":"rival","rating":1200,"result":"checkmated"},
                "time_control":"600",
                "end_time":1704067200,
                "pgn":"1. e4 e5 1-0"
            }]}"#,
        )
        .unwrap();
        assert_eq!(month.games.len(), 1);
        assert_eq!(month.games[0].black.rating, 1200);
        assert_eq!(month.games[0].time_control, "600");
    }
}
