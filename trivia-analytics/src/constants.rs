//! Centralized tuning constants for the trivia analytics core.
//!
//! These values define the deterministic math for history normalization and
//! streak evaluation. Keeping them together ensures the analytics can only be
//! adjusted via code changes reviewed in version control, rather than through
//! per-deployment knobs scattered across modules.

// Quiz capture -------------------------------------------------------------
pub(crate) const DEFAULT_QUESTIONS_TOTAL: u32 = 5;
pub(crate) const TIMER_CEILING_SECONDS: u32 = 60;

// Streak lookback ----------------------------------------------------------
pub(crate) const DEFAULT_HORIZON_DAYS: u32 = 365;

// Wire formats used by the history worksheet -------------------------------
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
