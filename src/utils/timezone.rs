use chrono::offset::Offset;
use chrono::{DateTime, Datelike, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Calendar used to turn game end timestamps into local dates and weekdays.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Monday-based weekday index (0..=6) for an epoch-seconds timestamp.
    pub(crate) fn weekday_index(self, epoch_secs: i64) -> usize {
        let utc = DateTime::<Utc>::from_timestamp(epoch_secs, 0).unwrap_or(DateTime::UNIX_EPOCH);
        self.to_fixed_offset(utc).weekday().num_days_from_monday() as usize
    }

    /// Human-readable end-time display for the game picker.
    pub(crate) fn format_datetime(self, epoch_secs: i64) -> String {
        let utc = DateTime::<Utc>::from_timestamp(epoch_secs, 0).unwrap_or(DateTime::UNIX_EPOCH);
        self.to_fixed_offset(utc)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("local")).unwrap(),
            Timezone::Local
        ));
        assert!(matches!(
            Timezone::parse(Some("  LOCAL  ")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_utc_variants() {
        assert!(matches!(
            Timezone::parse(Some("utc")).unwrap(),
            Timezone::Named(chrono_tz::UTC)
        ));
        assert!(matches!(
            Timezone::parse(Some("Z")).unwrap(),
            Timezone::Named(chrono_tz::UTC)
        ));
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::America::New_York)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn weekday_index_is_monday_based() {
        // 2024-01-01 00:00:00 UTC was a Monday
        let tz = Timezone::Named(chrono_tz::UTC);
        assert_eq!(tz.weekday_index(1_704_067_200), 0);
        // One day later: Tuesday
        assert_eq!(tz.weekday_index(1_704_067_200 + 86_400), 1);
    }

    #[test]
    fn weekday_index_respects_zone() {
        // 2024-01-01 02:00:00 UTC is still Sunday evening in New York
        let ny = Timezone::parse(Some("America/New_York")).unwrap();
        assert_eq!(ny.weekday_index(1_704_074_400), 6);
    }

    #[test]
    fn format_datetime_utc() {
        let tz = Timezone::Named(chrono_tz::UTC);
        assert_eq!(tz.format_datetime(1_704_067_200), "2024-01-01 00:00");
    }
}
