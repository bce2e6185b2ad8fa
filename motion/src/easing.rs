//! Timing curve and duration for smooth anchor scrolling.

use crate::config::ScrollConfig;

/// Symmetric cubic ease-in/ease-out.
///
/// Accelerates as `4t³` over the first half and mirrors that curve on the way
/// out, so both halves meet at `(0.5, 0.5)` with matching slope. Input is
/// clamped to `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Animation length for a scroll of `distance` pixels.
///
/// Proportional to travel and capped at `max_duration_ms`; never negative.
pub fn scroll_duration(distance: f64, config: &ScrollConfig) -> f64 {
    // f64::min discards NaN, so a NaN distance lands on the cap
    (distance.abs() * config.ms_per_px)
        .min(config.max_duration_ms)
        .max(0.0)
}
