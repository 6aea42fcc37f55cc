//! Tick-rate decay computation for pet attributes.
//!
//! An attribute is stored as a baseline value plus the UTC instant at which
//! that baseline was last true. The current value is never stored -- it is
//! recomputed on every read from the elapsed time and the attribute's tick
//! rate. One unit of change accrues per full tick interval elapsed.
//!
//! # Design Principles
//!
//! - The computation is pure apart from the wall-clock read in [`value_at`];
//!   [`value_at_instant`] takes an explicit `now` for callers that need
//!   determinism (tests, replay).
//! - Elapsed ticks use floor division, so a partially elapsed tick never
//!   counts.
//! - The result is floored at zero in both directions. Zero is absorbing:
//!   once a value has decayed to zero it stays there until a baseline
//!   rewrite.
//! - No upper bound is enforced at this layer.

use chrono::{DateTime, Utc};

/// Direction in which an attribute moves as time passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The value grows by one unit per elapsed tick.
    Increase,
    /// The value shrinks by one unit per elapsed tick.
    Decrease,
}

/// Compute the current value of a decaying attribute, reading the UTC wall
/// clock at call time.
///
/// `tick_rate_ms` must be a positive number of milliseconds per unit of
/// change; a non-positive rate is a contract violation by the caller.
pub fn value_at(
    last_value: i64,
    last_update: DateTime<Utc>,
    tick_rate_ms: i64,
    direction: Direction,
) -> i64 {
    value_at_instant(last_value, last_update, tick_rate_ms, direction, Utc::now())
}

/// Same computation as [`value_at`] against an explicit `now`.
///
/// A `last_update` in the future yields a negative tick delta (floor
/// division rounds toward negative infinity), so a decreasing attribute is
/// temporarily raised instead; the zero floor still applies either way.
pub fn value_at_instant(
    last_value: i64,
    last_update: DateTime<Utc>,
    tick_rate_ms: i64,
    direction: Direction,
    now: DateTime<Utc>,
) -> i64 {
    debug_assert!(tick_rate_ms > 0, "tick rate must be a positive number of milliseconds");

    let elapsed_ms = now.signed_duration_since(last_update).num_milliseconds();
    let ticks = elapsed_ms.div_euclid(tick_rate_ms);

    let value = match direction {
        Direction::Increase => last_value.saturating_add(ticks),
        Direction::Decrease => last_value.saturating_sub(ticks),
    };
    value.max(0)
}
