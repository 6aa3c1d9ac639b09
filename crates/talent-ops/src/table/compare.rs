//! Best-effort ordering for loosely typed cell values.
//!
//! A sort column is compared in exactly one mode, picked from the values it
//! holds: numeric when every present value is a number (or numeric text), date
//! when every present value parses as a calendar date, otherwise text. Absent and
//! `null` values order before everything else. Using one mode per column keeps
//! the comparison a total order even for mixed columns.

use super::value::{display_text, Row};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareMode {
    Numeric,
    Date,
    Text,
}

impl CompareMode {
    /// Picks the comparison mode for `key` over the given rows.
    pub fn detect<'a, I>(rows: I, key: &str) -> Self
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let mut numeric = true;
        let mut date = true;
        let mut seen = false;

        for value in rows.into_iter().filter_map(|row| present(row.get(key))) {
            seen = true;
            numeric &= as_number(value).is_some();
            date &= as_date(value).is_some();
            if !numeric && !date {
                break;
            }
        }

        match (seen, numeric, date) {
            (true, true, _) => Self::Numeric,
            (true, false, true) => Self::Date,
            _ => Self::Text,
        }
    }

    pub fn key_for(self, value: Option<&Value>) -> SortKey {
        let Some(value) = present(value) else {
            return SortKey::Missing;
        };

        match self {
            Self::Numeric => as_number(value)
                .map(SortKey::Number)
                .unwrap_or_else(|| SortKey::Text(display_text(value))),
            Self::Date => as_date(value)
                .map(SortKey::Date)
                .unwrap_or_else(|| SortKey::Text(display_text(value))),
            Self::Text => SortKey::Text(display_text(value)),
        }
    }
}

/// Pre-extracted comparison key for a single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Missing,
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Number(_) => 1,
            Self::Date(_) => 2,
            Self::Text(_) => 3,
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
        }
        _ => None,
    }
}

fn as_date(value: &Value) -> Option<NaiveDateTime> {
    let Value::String(text) = value else {
        return None;
    };
    parse_date_time(text)
}

pub(crate) fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
