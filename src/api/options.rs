use serde::{Deserialize, Serialize};

use crate::error::{WaveError, WaveResult};
use crate::render::Color;

/// Drawer configuration, immutable per update cycle.
///
/// This type is serializable so host applications can persist/load their
/// waveform setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawerOptions {
    /// Paint the playback cursor layer.
    #[serde(default = "default_true")]
    pub show_cursor: bool,
    /// Paint the decorative grid layer.
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Paint the time ruler layer.
    #[serde(default = "default_true")]
    pub show_ruler: bool,
    /// Place the ruler tick band at the top edge instead of the bottom.
    #[serde(default)]
    pub ruler_at_top: bool,
    /// Color played wave columns with `progress_color`.
    #[serde(default = "default_true")]
    pub progress_highlight: bool,
    /// Visible window length in units of 10 seconds; also sets grid density
    /// at 10 columns per unit. Must be > 0.
    #[serde(default = "default_per_duration")]
    pub per_duration: f64,
    /// Extra grid columns reserved as blank margin on each side.
    #[serde(default = "default_padding")]
    pub padding: u32,
    /// Device pixel ratio; line widths and font sizes scale by it.
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_wave_color")]
    pub wave_color: Color,
    #[serde(default = "default_progress_color")]
    pub progress_color: Color,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_ruler_color")]
    pub ruler_color: Color,
    #[serde(default = "default_cursor_color")]
    pub cursor_color: Color,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            show_cursor: true,
            show_grid: true,
            show_ruler: true,
            ruler_at_top: false,
            progress_highlight: true,
            per_duration: default_per_duration(),
            padding: default_padding(),
            pixel_ratio: default_pixel_ratio(),
            background_color: default_background_color(),
            wave_color: default_wave_color(),
            progress_color: default_progress_color(),
            grid_color: default_grid_color(),
            ruler_color: default_ruler_color(),
            cursor_color: default_cursor_color(),
        }
    }
}

impl DrawerOptions {
    /// Rejects configurations the window math cannot support.
    ///
    /// `per_duration` divides both the window quantization and the grid
    /// layout; `pixel_ratio` sets every stroke width. Both must be positive
    /// and finite. Validation happens here, at the configuration boundary,
    /// not inside the geometry calculator.
    pub fn validate(&self) -> WaveResult<()> {
        if !self.per_duration.is_finite() || self.per_duration <= 0.0 {
            return Err(WaveError::InvalidConfig(
                "per_duration must be finite and > 0".to_owned(),
            ));
        }
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(WaveError::InvalidConfig(
                "pixel_ratio must be finite and > 0".to_owned(),
            ));
        }
        for color in [
            self.background_color,
            self.wave_color,
            self.progress_color,
            self.grid_color,
            self.ruler_color,
            self.cursor_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> WaveResult<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|err| WaveError::InvalidConfig(format!("options json: {err}")))?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json_string(&self) -> WaveResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| WaveError::InvalidConfig(format!("options json: {err}")))
    }
}

fn default_true() -> bool {
    true
}

fn default_per_duration() -> f64 {
    10.0
}

fn default_padding() -> u32 {
    5
}

fn default_pixel_ratio() -> f64 {
    1.0
}

fn default_background_color() -> Color {
    // Dark slate, matching the stock player chrome.
    Color::rgb(28.0 / 255.0, 32.0 / 255.0, 34.0 / 255.0)
}

fn default_wave_color() -> Color {
    Color::rgba(1.0, 1.0, 1.0, 0.1)
}

fn default_progress_color() -> Color {
    Color::rgba(1.0, 1.0, 1.0, 0.5)
}

fn default_grid_color() -> Color {
    Color::rgba(1.0, 1.0, 1.0, 0.05)
}

fn default_ruler_color() -> Color {
    Color::rgba(1.0, 1.0, 1.0, 0.5)
}

fn default_cursor_color() -> Color {
    Color::rgb(1.0, 0.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::DrawerOptions;

    #[test]
    fn default_options_validate() {
        assert!(DrawerOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_per_duration() {
        for per_duration in [0.0, -3.0, f64::NAN] {
            let options = DrawerOptions {
                per_duration,
                ..DrawerOptions::default()
            };
            assert!(options.validate().is_err(), "per_duration={per_duration}");
        }
    }

    #[test]
    fn rejects_non_positive_pixel_ratio() {
        let options = DrawerOptions {
            pixel_ratio: 0.0,
            ..DrawerOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn empty_json_object_yields_defaults() {
        let options = DrawerOptions::from_json_str("{}").expect("defaults");
        assert_eq!(options, DrawerOptions::default());
    }

    #[test]
    fn json_round_trip_preserves_options() {
        let options = DrawerOptions {
            per_duration: 3.0,
            padding: 2,
            ruler_at_top: true,
            ..DrawerOptions::default()
        };
        let json = options.to_json_string().expect("serialize");
        let restored = DrawerOptions::from_json_str(&json).expect("deserialize");
        assert_eq!(restored, options);
    }

    #[test]
    fn from_json_rejects_invalid_configuration() {
        assert!(DrawerOptions::from_json_str(r#"{"per_duration": 0.0}"#).is_err());
    }
}
