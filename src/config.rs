use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) username: Option<String>,
    #[serde(default)]
    pub(crate) months: Option<usize>,
    #[serde(default)]
    pub(crate) time_control: Option<String>,
    #[serde(default)]
    pub(crate) min_rating: Option<i64>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) no_save: bool,
    #[serde(default)]
    pub(crate) no_interactive: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            match toml::from_str::<Config>(&content) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
            }
        }
        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/chessstats/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("chessstats").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support etc.)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("chessstats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory dotfile: ~/.chessstats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".chessstats.toml"));
        }

        paths
    }
}
