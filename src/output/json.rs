use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::DATE_FORMAT;
use crate::core::StatsSnapshot;
use crate::error::AppError;

/// Write the full snapshot to `stats_<username>_<isodate>.json` under `dir`.
pub(crate) fn save_snapshot(
    dir: &Path,
    username: &str,
    snapshot: &StatsSnapshot,
) -> Result<PathBuf, AppError> {
    let date = Local::now().date_naive().format(DATE_FORMAT);
    let path = dir.join(format!("stats_{username}_{date}.json"));
    fs::write(&path, serde_json::to_string_pretty(snapshot)?)?;
    Ok(path)
}
