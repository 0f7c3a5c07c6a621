//! Angular layout of segments and winner lookup.
//!
//! Angles here are wheel-local: zero is the fixed pointer at the top of the
//! wheel and positive angles run clockwise on screen. Segment `i` of `n`
//! spans `[angle + i·arc, angle + (i+1)·arc)` where `angle` is the wheel's
//! rotation. Rendering adds [`POINTER_ANGLE`] to go from wheel-local to
//! screen angles; winner lookup works in wheel-local angles directly, so
//! both share [`segment_span`].

use std::f64::consts::{FRAC_PI_2, TAU};

/// Screen angle of the pointer: straight up, in canvas coordinates.
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

/// Angular width of one segment, or `None` when there are no segments.
#[must_use]
pub fn arc_width(n: usize) -> Option<f64> {
    (n > 0).then(|| TAU / n as f64)
}

/// Half-open span `[start, end)` of segment `i` of `n` at zero rotation.
///
/// The last span ends at exactly `2π`, so the spans partition `[0, 2π)`
/// without floating-point gaps.
#[must_use]
pub fn segment_span(i: usize, n: usize) -> (f64, f64) {
    let arc = TAU / n as f64;
    let start = i as f64 * arc;
    let end = if i + 1 >= n { TAU } else { (i + 1) as f64 * arc };
    (start, end)
}

/// Position of the pointer on the unrotated wheel, in `[0, 2π)`.
///
/// The pointer is stationary while the wheel turns forward by `angle`, which
/// is the same as the pointer turning backward by `angle` over a still wheel.
#[must_use]
pub fn pointer_position(angle: f64) -> f64 {
    let normalized = (-angle).rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// Index of the segment under the pointer after rotating by `angle`, or
/// `None` when there are no segments.
///
/// A pointer sitting exactly on a boundary belongs to the segment whose arc
/// starts there.
#[must_use]
pub fn winner_index(angle: f64, n: usize) -> Option<usize> {
    let arc = arc_width(n)?;
    let position = pointer_position(angle);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut index = ((position / arc).floor() as usize).min(n - 1);

    // floor(x / arc) can land one off at a boundary; settle on the span test
    let (start, end) = segment_span(index, n);
    if position < start && index > 0 {
        index -= 1;
    } else if position >= end && index + 1 < n {
        index += 1;
    }
    Some(index)
}

/// Screen-space start angle of segment `i` of `n` when the wheel is rotated
/// by `angle`.
#[must_use]
pub fn screen_start_angle(angle: f64, i: usize, n: usize) -> f64 {
    POINTER_ANGLE + angle + segment_span(i, n).0
}
