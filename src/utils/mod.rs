use core::{fmt, time::Duration};

use log::warn;

/// Saturates `value` to `[-limit, limit]`. A negative `limit` is taken by
/// magnitude.
pub fn limit(value: f64, limit: f64) -> f64 {
    let limit = libm::fabs(limit);
    if value > limit {
        limit
    } else if value < -limit {
        -limit
    } else {
        value
    }
}

/// Wraps an angle in degrees to `[-180, 180)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let mut wrapped = libm::fmod(angle + 180.0, 360.0);
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    // fmod of a tiny negative value can round up to a full turn
    if wrapped >= 360.0 {
        wrapped -= 360.0;
    }
    wrapped - 180.0
}

/// Signed shortest delta from `desired` to `current`, in degrees, in
/// `(-180, 180]`.
///
/// `angle_difference(0.0, 90.0)` is `-90.0`: the robot sits 90 degrees
/// counter-clockwise of where the operator wants it, so the heading loop
/// turns by the negation.
///
/// Non-finite input has no meaningful delta; it yields `0.0` and a warning.
pub fn angle_difference(current: f64, desired: f64) -> f64 {
    if !current.is_finite() || !desired.is_finite() {
        warn!("angle_difference called with non-finite input ({current}, {desired})");
        return 0.0;
    }
    let difference = libm::fmod(current - desired, 360.0);
    if difference <= -180.0 {
        difference + 360.0
    } else if difference > 180.0 {
        difference - 360.0
    } else {
        difference
    }
}

/// Time since program start as it appears in log lines: `2m 3s 432ms`.
/// Leading zero units are dropped; seconds are always shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Uptime(pub Duration);

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs();
        let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);
        let millis = self.0.subsec_millis();
        if hours > 0 {
            write!(f, "{hours}h ")?;
        }
        if hours > 0 || minutes > 0 {
            write!(f, "{minutes}m ")?;
        }
        write!(f, "{seconds}s {millis}ms")
    }
}
