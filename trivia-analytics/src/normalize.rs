//! History normalization: loosely-typed worksheet rows into the typed log.
//!
//! Normalization is total. Malformed cells degrade to documented defaults and
//! never abort the batch; a leaderboard that fails to render is worse than one
//! that is temporarily incomplete.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::AnalyticsConfig;
use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::event::{Cell, PlayEvent, RawRecord};

/// Convert raw worksheet rows into well-typed `PlayEvent`s.
///
/// Entirely-empty rows are dropped. Coercion failures substitute defaults:
/// score 0, questions total from config (legacy rows predate the column), and
/// time taken the full timer ceiling (treated as worst case, not an error).
#[must_use]
pub fn normalize_history(rows: &[RawRecord], config: &AnalyticsConfig) -> Vec<PlayEvent> {
    rows.iter()
        .filter(|row| !row.is_empty())
        .map(|row| normalize_row(row, config))
        .collect()
}

fn normalize_row(row: &RawRecord, config: &AnalyticsConfig) -> PlayEvent {
    let timestamp = row.timestamp.as_deref().and_then(parse_timestamp);
    let play_date = row
        .date
        .as_deref()
        .and_then(parse_date)
        .or_else(|| timestamp.map(|ts| ts.date()));
    PlayEvent {
        player_name: row.name.clone().unwrap_or_default(),
        score: row.score.as_ref().and_then(Cell::as_u32).unwrap_or(0),
        questions_total: row
            .questions_total
            .as_ref()
            .and_then(Cell::as_u32)
            .unwrap_or(config.default_questions_total),
        time_taken_seconds: row
            .time_taken
            .as_ref()
            .and_then(Cell::as_u32)
            .unwrap_or(config.timer_ceiling_seconds),
        timestamp,
        play_date,
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| parse_date(trimmed).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
