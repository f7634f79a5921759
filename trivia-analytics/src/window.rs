//! Play-window calendar: biweekly release-cycle buckets.
//!
//! Questions drop twice a week: an early-week set covering Monday through
//! Thursday and a weekend set covering Friday through Sunday. A `PlayWindow`
//! names one such bucket by its ISO week plus half-label.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which half of the ISO week a window covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WindowHalf {
    /// Monday through Thursday.
    EarlyWeek,
    /// Friday through Sunday.
    Weekend,
}

/// A canonical release-cycle bucket.
///
/// `year` and `week` come from the ISO week calendar, so the derived ordering
/// (year, then week, then half) is chronological even where week numbering
/// wraps at a calendar-year boundary: late-December days belonging to week 1
/// of the next ISO year carry that year here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayWindow {
    pub year: i32,
    pub week: u32,
    pub half: WindowHalf,
}

impl PlayWindow {
    /// The window a given calendar date falls in. Total and deterministic.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        let half = if date.weekday().num_days_from_monday() <= 3 {
            WindowHalf::EarlyWeek
        } else {
            WindowHalf::Weekend
        };
        Self {
            year: iso.year(),
            week: iso.week(),
            half,
        }
    }

    /// First calendar day covered by this window.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindow` when the (year, week) pair names no ISO week,
    /// e.g. week 53 of a 52-week year in a window deserialized from elsewhere.
    pub fn first_day(self) -> Result<NaiveDate, InvalidWindow> {
        let start = match self.half {
            WindowHalf::EarlyWeek => Weekday::Mon,
            WindowHalf::Weekend => Weekday::Fri,
        };
        NaiveDate::from_isoywd_opt(self.year, self.week, start).ok_or(InvalidWindow {
            year: self.year,
            week: self.week,
        })
    }
}

/// Error for window triples that name no real ISO week.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no ISO week {week} in year {year}")]
pub struct InvalidWindow {
    pub year: i32,
    pub week: u32,
}

/// Every window touching the `horizon_days` before `from`, most recent first.
///
/// Walks each calendar day from `from - horizon_days` to `from` inclusive, so
/// the sequence is gap-free and de-duplicated; `from`'s own window is always
/// the head of the result.
#[must_use]
pub fn windows_descending(from: NaiveDate, horizon_days: u32) -> Vec<PlayWindow> {
    let start = from
        .checked_sub_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MIN);
    let mut ascending = Vec::new();
    let mut day = start;
    while day <= from {
        let window = PlayWindow::of(day);
        // The day walk is chronological, so dedup against the tail suffices.
        if ascending.last() != Some(&window) {
            ascending.push(window);
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    ascending.reverse();
    ascending
}
