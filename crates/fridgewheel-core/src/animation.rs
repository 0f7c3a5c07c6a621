//! Quartic easing and timestamp-driven tweens.

/// Quartic ease-out: fast start, long gentle stop. Input is clamped to
/// 0.0..=1.0, so the result never overshoots.
#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

// =============================================================================
// Tween - value animated against absolute timestamps
// =============================================================================

/// A value moving from `from` by `delta` over `duration_ms`, starting at
/// `started_at` on the host clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Start value
    pub from: f64,
    /// Total change applied by the end
    pub delta: f64,
    /// Host timestamp (ms) at which the tween started
    pub started_at: f64,
    /// Duration in ms
    pub duration_ms: f64,
}

impl Tween {
    /// Create a tween on the quartic ease-out curve.
    #[must_use]
    pub fn new(from: f64, delta: f64, started_at: f64, duration_ms: f64) -> Self {
        Self {
            from,
            delta,
            started_at,
            duration_ms,
        }
    }

    /// Progress at `now`, clamped to 0.0..=1.0. Zero-length tweens are
    /// complete immediately.
    #[must_use]
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms > 0.0 {
            ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Value at `now`.
    #[must_use]
    pub fn value(&self, now: f64) -> f64 {
        self.value_at_progress(self.progress(now))
    }

    /// Value at a given normalized progress.
    #[must_use]
    pub fn value_at_progress(&self, t: f64) -> f64 {
        self.delta.mul_add(ease_out_quart(t), self.from)
    }

    /// Whether the tween has reached its end at `now`.
    #[must_use]
    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_easing_endpoints_and_clamp() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(-0.5), 0.0);
        assert_eq!(ease_out_quart(1.5), 1.0);
        // 1 - 0.5^4
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_tween_progress_and_value() {
        let tween = Tween::new(1.0, 10.0, 100.0, 1000.0);
        assert_eq!(tween.progress(50.0), 0.0);
        assert_eq!(tween.value(50.0), 1.0);
        assert_eq!(tween.progress(600.0), 0.5);
        assert!((tween.value(600.0) - 10.375).abs() < 1e-12);
        assert!(!tween.is_complete(1099.0));
        assert!(tween.is_complete(1100.0));
        assert_eq!(tween.value(5000.0), 11.0);
    }

    #[test]
    fn test_tween_zero_duration() {
        let tween = Tween::new(0.0, 3.0, 0.0, 0.0);
        assert!(tween.is_complete(0.0));
        assert_eq!(tween.value(0.0), 3.0);
    }

    proptest! {
        #[test]
        fn prop_quart_out_monotonic(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_out_quart(lo) <= ease_out_quart(hi));
        }

        #[test]
        fn prop_quart_out_never_overshoots(t in -1.0f64..2.0) {
            let v = ease_out_quart(t);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
