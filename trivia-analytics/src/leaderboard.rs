//! Ranked leaderboard views over the normalized play history.
//!
//! Every view recomputes from the full event log at query time; nothing is
//! cached between invocations. Each function returns the complete ranked
//! sequence and lets the caller slice to the row count it displays.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::event::PlayEvent;
use crate::numbers::{count_to_u32, mean_u64, round_to_tenth, u64_to_f64};
use crate::streak::{current_streak, windows_played};

/// One row of the accuracy ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyRow {
    pub player_name: String,
    /// Percentage of questions answered correctly, one decimal.
    pub accuracy_pct: f64,
    pub games_played: u32,
    pub total_correct: u64,
    pub total_questions: u64,
}

/// One row of the speed ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedRow {
    pub player_name: String,
    /// Mean completion time in seconds, one decimal. Lower ranks higher.
    pub avg_time_seconds: f64,
    pub best_time_seconds: u32,
    pub games_played: u32,
}

/// One row of the current-month ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    pub player_name: String,
    pub total_score: u64,
    /// Mean score per game this month, one decimal.
    pub avg_score: f64,
    pub games_played: u32,
}

/// One row of the streak ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakRow {
    pub player_name: String,
    pub streak: u32,
    pub last_played: Option<NaiveDate>,
}

/// One row of the all-time high-score board. Rows are individual attempts,
/// not per-player rollups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRow {
    pub player_name: String,
    pub score: u32,
    pub time_taken_seconds: u32,
    pub timestamp: Option<NaiveDateTime>,
}

/// Group events per player, preserving first-encounter order.
///
/// Names are compared verbatim: identity is free text and case-sensitive, so
/// "Alex" and "alex" are distinct players.
fn by_player(events: &[PlayEvent]) -> Vec<(&str, Vec<&PlayEvent>)> {
    let mut groups: Vec<(&str, Vec<&PlayEvent>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for event in events {
        let slot = *slots.entry(event.player_name.as_str()).or_insert_with(|| {
            groups.push((event.player_name.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(event);
    }
    groups
}

/// Accuracy ranking: share of questions answered correctly, descending.
///
/// Ties break on games played, more first. Players whose history sums to zero
/// questions have undefined accuracy and are excluded.
#[must_use]
pub fn accuracy_ranking(events: &[PlayEvent]) -> Vec<AccuracyRow> {
    let mut rows: Vec<AccuracyRow> = by_player(events)
        .into_iter()
        .filter_map(|(name, plays)| {
            let total_correct: u64 = plays.iter().map(|e| u64::from(e.score)).sum();
            let total_questions: u64 = plays.iter().map(|e| u64::from(e.questions_total)).sum();
            if total_questions == 0 {
                return None;
            }
            let pct = 100.0 * u64_to_f64(total_correct) / u64_to_f64(total_questions);
            Some(AccuracyRow {
                player_name: name.to_string(),
                accuracy_pct: round_to_tenth(pct),
                games_played: count_to_u32(plays.len()),
                total_correct,
                total_questions,
            })
        })
        .collect();
    rows.sort_by(|a, b| {
        b.accuracy_pct
            .total_cmp(&a.accuracy_pct)
            .then(b.games_played.cmp(&a.games_played))
    });
    rows
}

/// Speed ranking: mean completion time ascending. Ties keep the stable
/// first-encounter order of the grouping pass.
#[must_use]
pub fn speed_ranking(events: &[PlayEvent]) -> Vec<SpeedRow> {
    let mut rows: Vec<SpeedRow> = by_player(events)
        .into_iter()
        .map(|(name, plays)| {
            let time_sum: u64 = plays.iter().map(|e| u64::from(e.time_taken_seconds)).sum();
            let best = plays
                .iter()
                .map(|e| e.time_taken_seconds)
                .min()
                .unwrap_or(0);
            SpeedRow {
                player_name: name.to_string(),
                avg_time_seconds: round_to_tenth(mean_u64(time_sum, plays.len())),
                best_time_seconds: best,
                games_played: count_to_u32(plays.len()),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.avg_time_seconds.total_cmp(&b.avg_time_seconds));
    rows
}

/// Current-month ranking: total score over events dated in `today`'s calendar
/// year and month, descending. Empty when nothing was played this month.
#[must_use]
pub fn monthly_ranking(events: &[PlayEvent], today: NaiveDate) -> Vec<MonthlyRow> {
    let this_month: Vec<PlayEvent> = events
        .iter()
        .filter(|event| {
            event
                .play_date
                .is_some_and(|d| d.year() == today.year() && d.month() == today.month())
        })
        .cloned()
        .collect();
    let mut rows: Vec<MonthlyRow> = by_player(&this_month)
        .into_iter()
        .map(|(name, plays)| {
            let score_sum: u64 = plays.iter().map(|e| u64::from(e.score)).sum();
            MonthlyRow {
                player_name: name.to_string(),
                total_score: score_sum,
                avg_score: round_to_tenth(mean_u64(score_sum, plays.len())),
                games_played: count_to_u32(plays.len()),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    rows
}

/// Streak ranking: consecutive-window streak per player, descending, with the
/// player's most recent play date alongside.
#[must_use]
pub fn streak_ranking(
    events: &[PlayEvent],
    today: NaiveDate,
    horizon_days: u32,
) -> Vec<StreakRow> {
    let mut rows: Vec<StreakRow> = by_player(events)
        .into_iter()
        .map(|(name, plays)| {
            let played = windows_played(plays.iter().filter_map(|e| e.play_date));
            StreakRow {
                player_name: name.to_string(),
                streak: current_streak(&played, today, horizon_days),
                last_played: plays.iter().filter_map(|e| e.play_date).max(),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.streak.cmp(&a.streak));
    rows
}

/// All-time high-score board: individual attempts sorted by score descending,
/// then completion time ascending.
#[must_use]
pub fn high_scores(events: &[PlayEvent]) -> Vec<HighScoreRow> {
    let mut rows: Vec<HighScoreRow> = events
        .iter()
        .map(|event| HighScoreRow {
            player_name: event.player_name.clone(),
            score: event.score,
            time_taken_seconds: event.time_taken_seconds,
            timestamp: event.timestamp,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.time_taken_seconds.cmp(&b.time_taken_seconds))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(name: &str, score: u32, total: u32, time: u32, day: Option<NaiveDate>) -> PlayEvent {
        PlayEvent {
            player_name: name.to_string(),
            score,
            questions_total: total,
            time_taken_seconds: time,
            timestamp: day.and_then(|d| d.and_hms_opt(12, 0, 0)),
            play_date: day,
        }
    }

    #[test]
    fn accuracy_ranks_percentage_then_volume() {
        let day = Some(date(2026, 8, 20));
        let events = vec![
            event("A", 3, 5, 30, day),
            event("A", 3, 5, 30, day),
            event("A", 2, 5, 30, day),
            event("B", 9, 10, 20, day),
        ];
        let rows = accuracy_ranking(&events);
        assert_eq!(rows[0].player_name, "B");
        assert!((rows[0].accuracy_pct - 90.0).abs() < f64::EPSILON);
        assert_eq!(rows[1].player_name, "A");
        assert!((rows[1].accuracy_pct - 53.3).abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy_tie_breaks_on_games_played() {
        let day = Some(date(2026, 8, 20));
        let events = vec![
            event("A", 4, 5, 30, day),
            event("B", 4, 5, 30, day),
            event("B", 4, 5, 30, day),
        ];
        let rows = accuracy_ranking(&events);
        assert_eq!(rows[0].player_name, "B");
        assert_eq!(rows[0].games_played, 2);
    }

    #[test]
    fn accuracy_excludes_zero_question_players() {
        let events = vec![event("Ghost", 0, 0, 30, None)];
        assert!(accuracy_ranking(&events).is_empty());
    }

    #[test]
    fn speed_ranks_mean_ascending_with_best_time() {
        let events = vec![
            event("Slow", 5, 5, 50, None),
            event("Quick", 5, 5, 20, None),
            event("Quick", 5, 5, 30, None),
        ];
        let rows = speed_ranking(&events);
        assert_eq!(rows[0].player_name, "Quick");
        assert!((rows[0].avg_time_seconds - 25.0).abs() < f64::EPSILON);
        assert_eq!(rows[0].best_time_seconds, 20);
        assert_eq!(rows[1].player_name, "Slow");
    }

    #[test]
    fn monthly_filter_excludes_other_months() {
        let events = vec![
            event("A", 5, 5, 30, Some(date(2026, 7, 31))),
            event("B", 2, 5, 30, Some(date(2026, 8, 3))),
            event("B", 3, 5, 30, Some(date(2026, 8, 14))),
            event("C", 4, 5, 30, None),
        ];
        let rows = monthly_ranking(&events, date(2026, 8, 25));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player_name, "B");
        assert_eq!(rows[0].total_score, 5);
        assert!((rows[0].avg_score - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn monthly_is_empty_without_events_this_month() {
        let events = vec![event("A", 5, 5, 30, Some(date(2026, 7, 1)))];
        assert!(monthly_ranking(&events, date(2026, 8, 25)).is_empty());
    }

    #[test]
    fn streak_rows_carry_last_played() {
        let today = date(2026, 8, 25);
        let events = vec![
            event("A", 5, 5, 30, Some(date(2026, 8, 25))),
            event("A", 5, 5, 30, Some(date(2026, 8, 21))),
            event("B", 5, 5, 30, Some(date(2025, 1, 6))),
        ];
        let rows = streak_ranking(&events, today, 365);
        assert_eq!(rows[0].player_name, "A");
        assert_eq!(rows[0].streak, 2);
        assert_eq!(rows[0].last_played, Some(date(2026, 8, 25)));
        assert_eq!(rows[1].streak, 0);
    }

    #[test]
    fn high_scores_order_score_then_time() {
        let events = vec![
            event("A", 4, 5, 50, None),
            event("B", 5, 5, 40, None),
            event("C", 5, 5, 20, None),
        ];
        let rows = high_scores(&events);
        assert_eq!(rows[0].player_name, "C");
        assert_eq!(rows[1].player_name, "B");
        assert_eq!(rows[2].player_name, "A");
    }

    #[test]
    fn every_view_is_empty_on_empty_history() {
        let today = date(2026, 8, 25);
        assert!(accuracy_ranking(&[]).is_empty());
        assert!(speed_ranking(&[]).is_empty());
        assert!(monthly_ranking(&[], today).is_empty());
        assert!(streak_ranking(&[], today, 365).is_empty());
        assert!(high_scores(&[]).is_empty());
    }
}
