//! Daily Trivia Analytics Engine
//!
//! Platform-agnostic analytics core for the Daily Trivia game. This crate
//! turns the permanent play-history log into ranked leaderboard views and
//! per-player streaks without UI or storage-specific dependencies: the page
//! renderer and the spreadsheet connector sit behind the `RecordStore` seam.

pub mod config;
pub mod constants;
pub mod event;
pub mod leaderboard;
pub mod normalize;
pub mod numbers;
pub mod streak;
pub mod window;

// Re-export commonly used types
pub use config::{AnalyticsConfig, AnalyticsConfigError};
pub use event::{Cell, PlayEvent, RawRecord};
pub use leaderboard::{
    AccuracyRow, HighScoreRow, MonthlyRow, SpeedRow, StreakRow, accuracy_ranking, high_scores,
    monthly_ranking, speed_ranking, streak_ranking,
};
pub use normalize::normalize_history;
pub use streak::{current_streak, windows_played, windows_played_by};
pub use window::{InvalidWindow, PlayWindow, WindowHalf, windows_descending};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Trait for abstracting access to the tabular history store.
/// Platform-specific implementations (the spreadsheet connector) provide this.
///
/// Writes are assumed at-least-once durable. Reads may be served from a cache
/// up to the connector's own TTL stale; the analytics core computes against
/// whatever snapshot a read returns.
pub trait RecordStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the full play history, oldest rows first.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    fn read_history(&self) -> Result<Vec<RawRecord>, Self::Error>;

    /// Append one row to the permanent history log.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be appended.
    fn append(&self, record: &RawRecord) -> Result<(), Self::Error>;
}

/// An immutable, normalized snapshot of the play history.
///
/// All views are pure functions of the snapshot. Fetch once at the start of a
/// page render, then query as often as the page needs; every query recomputes
/// from the full log.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    events: Vec<PlayEvent>,
    config: AnalyticsConfig,
}

impl HistorySnapshot {
    #[must_use]
    pub const fn new(events: Vec<PlayEvent>, config: AnalyticsConfig) -> Self {
        Self { events, config }
    }

    #[must_use]
    pub fn events(&self) -> &[PlayEvent] {
        &self.events
    }

    #[must_use]
    pub fn accuracy_ranking(&self) -> Vec<AccuracyRow> {
        accuracy_ranking(&self.events)
    }

    #[must_use]
    pub fn speed_ranking(&self) -> Vec<SpeedRow> {
        speed_ranking(&self.events)
    }

    #[must_use]
    pub fn monthly_ranking(&self, today: NaiveDate) -> Vec<MonthlyRow> {
        monthly_ranking(&self.events, today)
    }

    #[must_use]
    pub fn streak_ranking(&self, today: NaiveDate) -> Vec<StreakRow> {
        streak_ranking(&self.events, today, self.config.horizon_days)
    }

    #[must_use]
    pub fn high_scores(&self) -> Vec<HighScoreRow> {
        high_scores(&self.events)
    }

    /// Current streak for a single player. Unknown names score zero.
    #[must_use]
    pub fn streak_for(&self, player_name: &str, today: NaiveDate) -> u32 {
        let played = windows_played_by(
            self.events
                .iter()
                .filter(|event| event.player_name == player_name),
        );
        current_streak(&played, today, self.config.horizon_days)
    }
}

/// The full leaderboard bundle a results page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardViews {
    pub accuracy: Vec<AccuracyRow>,
    pub speed: Vec<SpeedRow>,
    pub monthly: Vec<MonthlyRow>,
    pub streaks: Vec<StreakRow>,
    pub high_scores: Vec<HighScoreRow>,
}

/// Analytics engine tying a record store to the snapshot views.
pub struct AnalyticsEngine<S>
where
    S: RecordStore,
{
    store: S,
    config: AnalyticsConfig,
}

impl<S> AnalyticsEngine<S>
where
    S: RecordStore,
{
    /// Create an engine with the default configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: AnalyticsConfig::default(),
        }
    }

    /// Create an engine with an explicit configuration, checked against its
    /// documented bounds.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsConfigError` when the configuration is invalid.
    pub fn with_config(store: S, config: AnalyticsConfig) -> Result<Self, AnalyticsConfigError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Fetch and normalize the current history.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails. Malformed rows never fail;
    /// they degrade to defaults during normalization.
    pub fn snapshot(&self) -> Result<HistorySnapshot, S::Error> {
        let rows = self.store.read_history()?;
        Ok(HistorySnapshot::new(
            normalize_history(&rows, &self.config),
            self.config,
        ))
    }

    /// Record a finished quiz attempt into the permanent log, capping the
    /// time at the timer ceiling and clamping the score to the question
    /// count. Returns the event as stamped.
    ///
    /// # Errors
    ///
    /// Returns an error if the append fails.
    pub fn record_play(
        &self,
        player_name: &str,
        score: u32,
        questions_total: u32,
        time_taken_seconds: u32,
    ) -> Result<PlayEvent, S::Error> {
        let event = PlayEvent::submitted(
            player_name,
            score,
            questions_total,
            time_taken_seconds,
            Local::now().naive_local(),
            &self.config,
        );
        self.store.append(&event.to_raw())?;
        Ok(event)
    }

    /// Convenience: fetch a snapshot and compute every view against the
    /// current local date.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    pub fn views_today(&self) -> Result<LeaderboardViews, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        let snapshot = self.snapshot().map_err(Into::into)?;
        let today = Local::now().date_naive();
        Ok(LeaderboardViews {
            accuracy: snapshot.accuracy_ranking(),
            speed: snapshot.speed_ranking(),
            monthly: snapshot.monthly_ranking(today),
            streaks: snapshot.streak_ranking(today),
            high_scores: snapshot.high_scores(),
        })
    }
}
