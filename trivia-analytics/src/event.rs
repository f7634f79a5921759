//! Play history records: raw worksheet rows and the typed event log.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::numbers::round_f64_to_u32;

/// A single worksheet cell that may arrive as a number or as text.
///
/// The remote store hands back whatever the sheet holds; older archived rows
/// frequently carry integers rendered as `"5"` or `"5.0"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Interpret the cell as a non-negative integer, if possible.
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Int(value) => u32::try_from(*value).ok(),
            Self::Float(value) => round_f64_to_u32(*value),
            Self::Text(raw) => {
                let trimmed = raw.trim();
                if let Ok(value) = trimmed.parse::<i64>() {
                    u32::try_from(value).ok()
                } else {
                    trimmed.parse::<f64>().ok().and_then(round_f64_to_u32)
                }
            }
        }
    }
}

/// One loosely-typed row as read from the history worksheet.
///
/// Field names mirror the sheet's column headers. `Questions_Total` and
/// `Date` are optional for compatibility with archived rows that predate
/// those columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Cell>,
    #[serde(rename = "Time_Taken", default, skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<Cell>,
    #[serde(rename = "Questions_Total", default, skip_serializing_if = "Option::is_none")]
    pub questions_total: Option<Cell>,
    #[serde(rename = "Timestamp", default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl RawRecord {
    /// Whether the row carries no data at all (blank sheet padding).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().is_none_or(|name| name.trim().is_empty())
            && self.score.is_none()
            && self.time_taken.is_none()
            && self.questions_total.is_none()
            && self.timestamp.is_none()
            && self.date.is_none()
    }
}

/// One completed quiz attempt, fully typed.
///
/// Events are append-only: once written to the history log they are never
/// mutated or deleted by this crate. Identity is (name, timestamp) with no
/// uniqueness constraint; duplicate submissions are retained and all counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayEvent {
    /// Free-text, self-reported, case-sensitive identity key.
    pub player_name: String,
    pub score: u32,
    pub questions_total: u32,
    pub time_taken_seconds: u32,
    pub timestamp: Option<NaiveDateTime>,
    /// Calendar date of the attempt. `None` when neither the `Date` cell nor
    /// the timestamp could be parsed; such events still count toward the
    /// accuracy and speed views but are skipped by the date-dependent ones.
    pub play_date: Option<NaiveDate>,
}

impl PlayEvent {
    /// Stamp a freshly submitted attempt.
    ///
    /// Producer-side capping: `time_taken_seconds` is capped at the timer
    /// ceiling and `score` is clamped to `questions_total`, which is itself
    /// floored at 1.
    #[must_use]
    pub fn submitted(
        player_name: impl Into<String>,
        score: u32,
        questions_total: u32,
        time_taken_seconds: u32,
        now: NaiveDateTime,
        config: &AnalyticsConfig,
    ) -> Self {
        let questions_total = questions_total.max(1);
        Self {
            player_name: player_name.into(),
            score: score.min(questions_total),
            questions_total,
            time_taken_seconds: time_taken_seconds.min(config.timer_ceiling_seconds),
            timestamp: Some(now),
            play_date: Some(now.date()),
        }
    }

    /// Serialize back into the sheet's row shape for appends.
    #[must_use]
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            name: Some(self.player_name.clone()),
            score: Some(Cell::Int(i64::from(self.score))),
            time_taken: Some(Cell::Int(i64::from(self.time_taken_seconds))),
            questions_total: Some(Cell::Int(i64::from(self.questions_total))),
            timestamp: self
                .timestamp
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string()),
            date: self.play_date.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}
