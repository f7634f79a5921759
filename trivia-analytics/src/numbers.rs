//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Round a f64 to one decimal place, returning 0.0 for non-finite values.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Mean of a non-negative integer sum over a count, 0.0 when the count is zero.
#[must_use]
pub fn mean_u64(sum: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    u64_to_f64(sum) / cast::<usize, f64>(count).unwrap_or(f64::MAX)
}

/// Round a f64 into a u32, returning `None` for negative, non-finite, or
/// out-of-range values.
#[must_use]
pub fn round_f64_to_u32(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    cast::<f64, u32>(value.round())
}

/// Clamp a usize count into a u32 for display rows.
#[must_use]
pub fn count_to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
