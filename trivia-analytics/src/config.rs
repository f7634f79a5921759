//! Analytics configuration and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_HORIZON_DAYS, DEFAULT_QUESTIONS_TOTAL, TIMER_CEILING_SECONDS};

/// Tunable knobs for the analytics core.
///
/// The horizon bounds how far back play-window enumeration (and therefore
/// streak evaluation) looks. A streak longer than the horizon is undercounted;
/// the default of 365 days covers any realistic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Lookback for play-window enumeration, in calendar days.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Upper bound the quiz timer enforces on `time_taken_seconds`.
    #[serde(default = "default_timer_ceiling")]
    pub timer_ceiling_seconds: u32,
    /// Question count assumed for archived rows that predate the
    /// `Questions_Total` column.
    #[serde(default = "default_questions_total")]
    pub default_questions_total: u32,
}

const fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

const fn default_timer_ceiling() -> u32 {
    TIMER_CEILING_SECONDS
}

const fn default_questions_total() -> u32 {
    DEFAULT_QUESTIONS_TOTAL
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            timer_ceiling_seconds: TIMER_CEILING_SECONDS,
            default_questions_total: DEFAULT_QUESTIONS_TOTAL,
        }
    }
}

impl AnalyticsConfig {
    /// Check the configuration against its documented bounds.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsConfigError` when any field violates the documented
    /// bounds.
    pub const fn validate(&self) -> Result<(), AnalyticsConfigError> {
        if self.horizon_days == 0 {
            return Err(AnalyticsConfigError::MinViolation {
                field: "horizon_days",
                min: 1,
                value: self.horizon_days,
            });
        }
        if self.timer_ceiling_seconds == 0 {
            return Err(AnalyticsConfigError::MinViolation {
                field: "timer_ceiling_seconds",
                min: 1,
                value: self.timer_ceiling_seconds,
            });
        }
        if self.default_questions_total == 0 {
            return Err(AnalyticsConfigError::MinViolation {
                field: "default_questions_total",
                min: 1,
                value: self.default_questions_total,
            });
        }
        Ok(())
    }
}

/// Errors raised when analytics configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsConfigError {
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: u32,
        value: u32,
    },
}
