//! Consecutive play-window streak evaluation.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::event::PlayEvent;
use crate::window::{PlayWindow, windows_descending};

/// The distinct windows a set of play dates touches.
#[must_use]
pub fn windows_played<I>(dates: I) -> BTreeSet<PlayWindow>
where
    I: IntoIterator<Item = NaiveDate>,
{
    dates.into_iter().map(PlayWindow::of).collect()
}

/// Windows in which at least one of the given events has a play date.
/// Undated events contribute nothing.
#[must_use]
pub fn windows_played_by<'a, I>(events: I) -> BTreeSet<PlayWindow>
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    windows_played(events.into_iter().filter_map(|event| event.play_date))
}

/// Count consecutive played windows, most recent first.
///
/// A single grace window is allowed at the head of the scan: a player who has
/// not yet played the current window keeps the streak alive if the
/// immediately preceding window was played. Once the run has started no
/// further grace is granted; the count stops at the first unplayed window.
///
/// Windows older than `horizon_days` before `today` are invisible to the
/// scan, so a streak longer than the horizon is undercounted.
#[must_use]
pub fn current_streak(
    played: &BTreeSet<PlayWindow>,
    today: NaiveDate,
    horizon_days: u32,
) -> u32 {
    if played.is_empty() {
        return 0;
    }
    let current = PlayWindow::of(today);
    let windows = windows_descending(today, horizon_days);
    let Some(position) = windows.iter().position(|window| *window == current) else {
        return 0;
    };
    let resume = if played.contains(&current) {
        position + 1
    } else if windows
        .get(position + 1)
        .is_some_and(|window| played.contains(window))
    {
        position + 2
    } else {
        return 0;
    };
    let mut streak = 1u32;
    for window in windows.iter().skip(resume) {
        if played.contains(window) {
            streak = streak.saturating_add(1);
        } else {
            break;
        }
    }
    streak
}
