//! Label fitting.

use crate::config::WheelStyle;
use std::borrow::Cow;

/// Ellipsis appended to truncated labels.
pub const ELLIPSIS: char = '…';

/// Shorten `label` to at most `max_chars` characters, replacing the tail
/// with an ellipsis when it is too long.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> Cow<'_, str> {
    if max_chars == 0 || label.chars().count() <= max_chars {
        return Cow::Borrowed(label);
    }
    let mut out: String = label.chars().take(max_chars - 1).collect();
    out.push(ELLIPSIS);
    Cow::Owned(out)
}

/// Label font size for `count` segments on a wheel of `radius` px.
///
/// Shrinks once the wheel holds more than `font_reference_count` segments
/// and never leaves `[font_min, font_max]`.
#[must_use]
pub fn label_font_size(radius: f32, count: usize, style: &WheelStyle) -> f32 {
    let crowding = if count > style.font_reference_count {
        style.font_reference_count as f32 / count as f32
    } else {
        1.0
    };
    (radius * style.font_scale * crowding)
        .floor()
        .max(style.font_min)
        .min(style.font_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_borrowed() {
        assert!(matches!(truncate_label("Tacos", 18), Cow::Borrowed("Tacos")));
    }

    #[test]
    fn test_label_at_limit_kept() {
        let label = "a".repeat(18);
        assert_eq!(truncate_label(&label, 18), label.as_str());
    }

    #[test]
    fn test_long_label_truncated() {
        let out = truncate_label("Spaghetti alla Puttanesca", 18);
        assert_eq!(out, "Spaghetti alla Pu…");
        assert_eq!(out.chars().count(), 18);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let out = truncate_label("Crème brûlée à l'orange flambée", 10);
        assert_eq!(out, "Crème brû…");
    }

    #[test]
    fn test_font_size_default_wheel() {
        let style = WheelStyle::default();
        // 154 * 0.12 = 18.48 -> clamped to 16
        assert_eq!(label_font_size(154.0, 8, &style), 16.0);
        assert_eq!(label_font_size(154.0, 2, &style), 16.0);
    }

    #[test]
    fn test_font_size_shrinks_with_count() {
        let style = WheelStyle::default();
        // 154 * 0.12 * 8/12 = 12.32 -> 12
        assert_eq!(label_font_size(154.0, 12, &style), 12.0);
        assert_eq!(label_font_size(154.0, 40, &style), 11.0);
    }

    #[test]
    fn test_font_size_non_increasing() {
        let style = WheelStyle::default();
        let sizes: Vec<f32> = (1..60).map(|n| label_font_size(200.0, n, &style)).collect();
        assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
        assert!(sizes.iter().all(|s| (11.0..=16.0).contains(s)));
    }

    #[test]
    fn test_font_size_small_wheel_hits_minimum() {
        assert_eq!(label_font_size(20.0, 1, &WheelStyle::default()), 11.0);
    }
}
