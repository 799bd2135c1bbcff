//! Date/time conversion and localized formatting
//!
//! Architecture: Anti-Corruption Layer - Translates between absolute instants and
//! civil local values, and renders them for presentation
//! - Instants (`DateTime<Utc>`) are what the rest of a system stores and passes around
//! - Civil values (`NaiveDate`/`NaiveDateTime`) are what forms and reports work with
//! - Formatting is fixed to the pt-BR locale regardless of the caller's environment

use crate::domain::error::{RegraError, RegraResult};
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono::{Local, Locale};
use serde::{Deserialize, Serialize};

/// All formatting in this module is fixed to Brazilian Portuguese.
const LOCALE: Locale = Locale::pt_BR;

/// Presentation styles for a civil date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// Weekday and spelled-out month, e.g. "quarta-feira, 1 de novembro de 2017"
    Full,
    /// Spelled-out month, e.g. "1 de novembro de 2017"
    Long,
    /// Numeric day/month/year, e.g. "01/11/2017"
    Medium,
    /// Two-digit year, e.g. "01/11/17"
    Short,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%A, %-d de %B de %Y",
            Self::Long => "%-d de %B de %Y",
            Self::Medium => "%d/%m/%Y",
            Self::Short => "%d/%m/%y",
        }
    }

    /// Parse style from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" => Some(Self::Full),
            "long" => Some(Self::Long),
            "medium" => Some(Self::Medium),
            "short" => Some(Self::Short),
            _ => None,
        }
    }

    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Long => "long",
            Self::Medium => "medium",
            Self::Short => "short",
        }
    }
}

/// Presentation styles for a civil date-time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeStyle {
    /// Minute precision, e.g. "01/11/2017 17:02"
    Short,
    /// Second precision, e.g. "01/11/2017 17:02:36"
    Medium,
}

impl DateTimeStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Short => "%d/%m/%Y %H:%M",
            Self::Medium => "%d/%m/%Y %H:%M:%S",
        }
    }

    /// Parse style from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            _ => None,
        }
    }

    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
        }
    }
}

/// Civil date of `instant` in the system's local time zone.
pub fn to_local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Civil date-time of `instant` in the system's local time zone.
pub fn to_local_date_time(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&Local).naive_local()
}

/// The instant at which `date` starts (local midnight) in the system's time zone.
///
/// On days where a DST transition skips local midnight, the earliest valid
/// local time of that day is used instead.
pub fn from_local_date(date: NaiveDate) -> RegraResult<DateTime<Utc>> {
    let start_of_day = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| RegraError::invalid_argument("date", "no representable start of day"))?;

    match Local.from_local_datetime(&start_of_day) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => {
            Ok(local.with_timezone(&Utc))
        }
        // Midnight fell inside a DST gap. Scan forward to the first valid minute.
        LocalResult::None => first_valid_instant_of(date),
    }
}

/// The instant corresponding to `date_time` in the system's time zone.
///
/// Ambiguous local times (clock set back) resolve to the earlier instant;
/// nonexistent local times (clock set forward) are an `InvalidArgument` error.
pub fn from_local_date_time(date_time: NaiveDateTime) -> RegraResult<DateTime<Utc>> {
    match Local.from_local_datetime(&date_time) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => {
            Ok(local.with_timezone(&Utc))
        }
        LocalResult::None => Err(RegraError::invalid_argument(
            "date_time",
            format!("local time {date_time} does not exist in this time zone"),
        )),
    }
}

/// Format a civil date with the given style in pt-BR.
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    date.format_localized(style.pattern(), LOCALE).to_string()
}

/// Format a civil date-time with the given style in pt-BR.
pub fn format_date_time(date_time: NaiveDateTime, style: DateTimeStyle) -> String {
    // NaiveDateTime has no localized formatter; attach Utc to reach one. The
    // patterns use only numeric specifiers, so the zone never shows through.
    date_time.and_utc().format_localized(style.pattern(), LOCALE).to_string()
}

fn first_valid_instant_of(date: NaiveDate) -> RegraResult<DateTime<Utc>> {
    for minute in 1..=180u32 {
        let candidate = date
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.checked_add_signed(chrono::Duration::minutes(minute as i64)));
        if let Some(candidate) = candidate {
            if let LocalResult::Single(local) | LocalResult::Ambiguous(local, _) =
                Local.from_local_datetime(&candidate)
            {
                return Ok(local.with_timezone(&Utc));
            }
        }
    }
    Err(RegraError::invalid_argument("date", "no valid start of day within three hours"))
}
