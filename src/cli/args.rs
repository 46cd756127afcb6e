//! CLI argument definitions and config-file merging.

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "chessstats")]
#[command(about = "Chess.com game history statistics and reports", version)]
pub(crate) struct Cli {
    /// Chess.com username (prompted interactively when omitted)
    pub(crate) username: Option<String>,

    /// Number of most recent monthly archives to analyze
    #[arg(short, long, value_name = "N")]
    pub(crate) months: Option<usize>,

    /// Only analyze games with this exact time control (e.g. "600")
    #[arg(short, long, value_name = "TC")]
    pub(crate) time_control: Option<String>,

    /// Ignore games against opponents rated below this
    #[arg(long, value_name = "RATING")]
    pub(crate) min_rating: Option<i64>,

    /// Print the statistics snapshot as JSON instead of the text report
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Do not write the report and snapshot files
    #[arg(long)]
    pub(crate) no_save: bool,

    /// Skip the interactive game picker
    #[arg(long)]
    pub(crate) no_interactive: bool,

    /// Timezone for day-of-week bucketing (e.g. "UTC", "Europe/Madrid")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence).
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.username.is_none() {
            self.username = config.username.clone();
        }
        if self.months.is_none() {
            self.months = config.months;
        }
        if self.time_control.is_none() {
            self.time_control = config.time_control.clone();
        }
        if self.min_rating.is_none() {
            self.min_rating = config.min_rating;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if !self.no_save && config.no_save {
            self.no_save = true;
        }
        if !self.no_interactive && config.no_interactive {
            self.no_interactive = true;
        }
        self
    }

    pub(crate) fn months(&self) -> usize {
        self.months.unwrap_or(1).max(1)
    }

    pub(crate) fn min_rating(&self) -> i64 {
        self.min_rating.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chessstats").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.months(), 1);
        assert_eq!(cli.min_rating(), 0);
        assert!(cli.username.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn months_floor_is_one() {
        let cli = parse(&["--months", "0"]);
        assert_eq!(cli.months(), 1);
    }

    #[test]
    fn cli_wins_over_config() {
        let config = Config {
            username: Some("configuser".to_string()),
            months: Some(6),
            min_rating: Some(1500),
            ..Default::default()
        };
        let cli = parse(&["cliuser", "--months", "2"]).with_config(&config);
        assert_eq!(cli.username.as_deref(), Some("cliuser"));
        assert_eq!(cli.months(), 2);
        // Unset on CLI: config applies
        assert_eq!(cli.min_rating(), 1500);
    }

    #[test]
    fn config_fills_flags_left_at_default() {
        let config = Config {
            no_save: true,
            no_interactive: true,
            timezone: Some("UTC".to_string()),
            ..Default::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert!(cli.no_save);
        assert!(cli.no_interactive);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
    }
}
