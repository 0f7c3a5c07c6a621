//! Wheel configuration.
//!
//! Spin tuning and visual style are plain data with defaults for every
//! field, so a TOML document only needs the keys it overrides:
//!
//! ```
//! use fridgewheel_core::WheelConfig;
//!
//! let config = WheelConfig::from_toml_str("[spin]\nmin_turns = 3.0\n").expect("valid config");
//! assert_eq!(config.spin.min_turns, 3.0);
//! assert_eq!(config.spin.max_turns, 10.0);
//! ```

use crate::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A range has its lower bound above its upper bound.
    #[error("{field}: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        /// Name of the offending range
        field: &'static str,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// A value that must be positive is not.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending field
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// The style has no colors to cycle through.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// A value is present but unusable.
    #[error("{field}: {reason}")]
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Random ranges sampled for each spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Fewest whole turns a spin makes before the sub-turn offset.
    pub min_turns: f64,
    /// Most whole turns a spin makes before the sub-turn offset.
    pub max_turns: f64,
    /// Shortest spin duration in ms.
    pub min_duration_ms: f64,
    /// Longest spin duration in ms.
    pub max_duration_ms: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_turns: 5.0,
            max_turns: 10.0,
            min_duration_ms: 4000.0,
            max_duration_ms: 5500.0,
        }
    }
}

impl SpinConfig {
    /// Check that both ranges are ordered and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("spin.min_turns", self.min_turns)?;
        positive("spin.min_duration_ms", self.min_duration_ms)?;
        ordered("spin.turns", self.min_turns, self.max_turns)?;
        ordered("spin.duration_ms", self.min_duration_ms, self.max_duration_ms)
    }
}

/// Visual style of the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelStyle {
    /// Gap between the surface edge and the wheel rim, in px.
    pub rim_inset: f32,
    /// Glow ring drawn just outside the rim.
    pub glow_color: Color,
    /// Glow ring width in px.
    pub glow_width: f32,
    /// Segment fill colors, cycled by segment index.
    pub palette: Vec<Color>,
    /// Outline between segments.
    pub border_color: Color,
    /// Outline width in px.
    pub border_width: f32,
    /// Label color.
    pub label_color: Color,
    /// Distance between the label's right edge and the rim, in px.
    pub label_inset: f32,
    /// Labels longer than this many characters are truncated with an ellipsis.
    pub label_max_chars: usize,
    /// Label size as a fraction of the wheel radius, before crowding.
    pub font_scale: f32,
    /// Segment count above which labels start shrinking.
    pub font_reference_count: usize,
    /// Smallest label size in px.
    pub font_min: f32,
    /// Largest label size in px.
    pub font_max: f32,
    /// Hub cap radius in px.
    pub hub_radius: f32,
    /// Hub fill.
    pub hub_color: Color,
    /// Hub outline.
    pub hub_stroke: Color,
    /// Hub outline width in px.
    pub hub_stroke_width: f32,
}

impl Default for WheelStyle {
    fn default() -> Self {
        let ink = Color::rgba8(0x0f, 0x0f, 0x13, 1.0);
        Self {
            rim_inset: 6.0,
            glow_color: Color::rgba8(255, 107, 53, 0.3),
            glow_width: 8.0,
            palette: default_palette(),
            border_color: ink,
            border_width: 2.0,
            label_color: Color::WHITE,
            label_inset: 14.0,
            label_max_chars: 18,
            font_scale: 0.12,
            font_reference_count: 8,
            font_min: 11.0,
            font_max: 16.0,
            hub_radius: 22.0,
            hub_color: ink,
            hub_stroke: Color::rgba8(255, 107, 53, 0.5),
            hub_stroke_width: 3.0,
        }
    }
}

impl WheelStyle {
    /// Check sizes and palette.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        positive("style.font_min", f64::from(self.font_min))?;
        ordered("style.font", f64::from(self.font_min), f64::from(self.font_max))?;
        if self.label_max_chars == 0 {
            return Err(ConfigError::NotPositive {
                field: "style.label_max_chars",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Segment palette: orange, violet, blue, green, amber, red, cyan, violet,
/// green, brown, indigo, pink.
#[must_use]
pub fn default_palette() -> Vec<Color> {
    [
        (0xff, 0x6b, 0x35),
        (0x7c, 0x3a, 0xed),
        (0x25, 0x63, 0xeb),
        (0x05, 0x96, 0x69),
        (0xd9, 0x77, 0x06),
        (0xdc, 0x26, 0x26),
        (0x08, 0x91, 0xb2),
        (0x7c, 0x3a, 0xed),
        (0x16, 0xa3, 0x4a),
        (0xb4, 0x53, 0x09),
        (0x43, 0x38, 0xca),
        (0xbe, 0x18, 0x5d),
    ]
    .into_iter()
    .map(|(r, g, b)| Color::rgba8(r, g, b, 1.0))
    .collect()
}

/// Complete wheel configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Spin sampling ranges
    pub spin: SpinConfig,
    /// Visual style
    pub style: WheelStyle,
}

impl WheelConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spin.validate()?;
        self.style.validate()
    }

    /// Commented template listing the spin tuning keys.
    #[must_use]
    pub fn default_toml() -> String {
        let spin = SpinConfig::default();
        format!(
            "# Fridge Wheel configuration\n\
             [spin]\n\
             # whole turns before the random sub-turn offset\n\
             min_turns = {:.1}\n\
             max_turns = {:.1}\n\
             # spin length in milliseconds\n\
             min_duration_ms = {:.1}\n\
             max_duration_ms = {:.1}\n",
            spin.min_turns, spin.max_turns, spin.min_duration_ms, spin.max_duration_ms
        )
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn ordered(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min <= max && max.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { field, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(WheelConfig::default().validate().is_ok());
        assert_eq!(default_palette().len(), 12);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = WheelConfig::from_toml_str("").unwrap();
        assert_eq!(config, WheelConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = WheelConfig::from_toml_str(
            "[spin]\nmax_duration_ms = 6000.0\n[style]\nlabel_max_chars = 12\n",
        )
        .unwrap();
        assert_eq!(config.spin.max_duration_ms, 6000.0);
        assert_eq!(config.spin.min_duration_ms, 4000.0);
        assert_eq!(config.style.label_max_chars, 12);
        assert_eq!(config.style.font_max, 16.0);
    }

    #[test]
    fn test_default_toml_parses_to_defaults() {
        let config = WheelConfig::from_toml_str(&WheelConfig::default_toml()).unwrap();
        assert_eq!(config.spin, SpinConfig::default());
    }

    #[test]
    fn test_inverted_turns_rejected() {
        let err = WheelConfig::from_toml_str("[spin]\nmin_turns = 8.0\nmax_turns = 2.0\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvertedRange {
                field: "spin.turns",
                ..
            }
        ));
        assert_eq!(err.to_string(), "spin.turns: minimum 8 exceeds maximum 2");
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let err = WheelConfig::from_toml_str("[spin]\nmin_duration_ms = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { .. }));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let style = WheelStyle {
            palette: Vec::new(),
            ..WheelStyle::default()
        };
        assert!(matches!(style.validate(), Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn test_palette_reads_hex_strings() {
        let config = WheelConfig::from_toml_str(
            "[style]\npalette = [\"#ff6b35\", \"2563eb\"]\nlabel_color = \"#0f0f1380\"\n",
        )
        .unwrap();
        assert_eq!(
            config.style.palette,
            vec![
                Color::rgba8(0xff, 0x6b, 0x35, 1.0),
                Color::rgba8(0x25, 0x63, 0xeb, 1.0)
            ]
        );
        assert_eq!(config.style.label_color.to_hex(), "#0f0f1380");
    }

    #[test]
    fn test_bad_hex_color_is_parse_error() {
        let err = WheelConfig::from_toml_str("[style]\npalette = [\"#ff6b\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("invalid hex string length"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = WheelConfig::from_toml_str("[spin\nmin_turns = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = WheelConfig::from_toml_str("[spin]\nmin_turns = \"many\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
