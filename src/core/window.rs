use crate::core::{PlaybackState, Viewport};

/// Layout of the visible time window, recomputed once per update.
///
/// `begin_time` intentionally reproduces the upstream formula
/// `floor(current_time / per_duration) * 10`, which for `per_duration != 10`
/// can place the window ahead of or behind `current_time` (and push
/// `cursor_x` off-surface). Kept as-is for compatibility with existing hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    /// Total grid columns across the surface: `per_duration * 10 + padding * 2`.
    pub grid_count: u32,
    /// Pixel distance between adjacent grid columns/rows.
    pub grid_gap: f64,
    /// Quantized start of the displayed window, in seconds.
    pub begin_time: f64,
}

impl WindowGeometry {
    /// Pure function of configuration, playback state and surface size.
    ///
    /// Precondition: `per_duration > 0` (enforced by `DrawerOptions::validate`
    /// at the configuration boundary, not here).
    #[must_use]
    pub fn compute(
        per_duration: f64,
        padding: u32,
        playback: PlaybackState,
        viewport: Viewport,
    ) -> Self {
        let grid_count = (per_duration * 10.0) as u32 + padding * 2;
        let grid_gap = f64::from(viewport.width) / f64::from(grid_count);
        let begin_time = (playback.current_time / per_duration).floor() * 10.0;
        Self {
            grid_count,
            grid_gap,
            begin_time,
        }
    }

    /// Pixel x of the playback cursor; shared by the cursor layer and the
    /// wave layer's progress-color boundary.
    #[must_use]
    pub fn cursor_x(&self, padding: u32, playback: PlaybackState) -> f64 {
        f64::from(padding) * self.grid_gap
            + (playback.current_time - self.begin_time) * self.grid_gap * 10.0
    }

    /// Pixel width available for sample data, excluding both side margins.
    #[must_use]
    pub fn wave_width(&self, padding: u32, viewport: Viewport) -> f64 {
        f64::from(viewport.width) - self.grid_gap * f64::from(padding) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::WindowGeometry;
    use crate::core::{PlaybackState, Viewport};

    #[test]
    fn grid_count_and_gap_cover_the_surface() {
        let geometry =
            WindowGeometry::compute(10.0, 5, PlaybackState::at(0.0), Viewport::new(1100, 300));
        assert_eq!(geometry.grid_count, 110);
        assert!((geometry.grid_gap * f64::from(geometry.grid_count) - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn begin_time_quantizes_in_ten_second_steps() {
        for (time, expected) in [(0.0, 0.0), (9.99, 0.0), (10.0, 10.0), (25.0, 20.0)] {
            let geometry =
                WindowGeometry::compute(10.0, 5, PlaybackState::at(time), Viewport::new(800, 200));
            assert_eq!(geometry.begin_time, expected, "current_time={time}");
        }
    }

    #[test]
    fn begin_time_quirk_for_non_default_window_is_preserved() {
        // floor(5 / 3) * 10 = 10, ahead of current_time. Upstream behavior.
        let geometry =
            WindowGeometry::compute(3.0, 2, PlaybackState::at(5.0), Viewport::new(800, 200));
        assert_eq!(geometry.grid_count, 34);
        assert_eq!(geometry.begin_time, 10.0);
        assert!(geometry.cursor_x(2, PlaybackState::at(5.0)) < 0.0);
    }
}
