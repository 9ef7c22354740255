use crate::config::PhaseBarConfig;

/// Maps accumulated phase onto a vertical pixel position on the gradient
/// bar: phase 0 sits at the bottom (`y = height`), `phase_max` at the top
/// (`y = 0`). Pixel y grows downward, so the map is non-increasing.
#[derive(Clone, Copy, Debug)]
pub struct PhaseBar {
    height_px: f64,
    phase_max: f64,
}

impl PhaseBar {
    pub fn new(config: &PhaseBarConfig) -> Self {
        Self {
            height_px: config.height_px,
            phase_max: config.phase_max,
        }
    }

    pub fn phase_to_y(&self, phase: f64) -> f64 {
        let phase = phase.clamp(0.0, self.phase_max);
        self.height_px * (1.0 - phase / self.phase_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn bar() -> PhaseBar {
        PhaseBar::new(&PhaseBarConfig {
            height_px: 300.0,
            phase_max: 3.0 * PI,
        })
    }

    #[test]
    fn endpoints_pin_to_bottom_and_top() {
        let bar = bar();
        assert_eq!(bar.phase_to_y(0.0), 300.0);
        assert_eq!(bar.phase_to_y(3.0 * PI), 0.0);
    }

    #[test]
    fn map_is_non_increasing() {
        let bar = bar();
        let mut prev = f64::INFINITY;
        for i in 0..=100 {
            let phase = 3.0 * PI * (i as f64) / 100.0;
            let y = bar.phase_to_y(phase);
            assert!(y <= prev);
            prev = y;
        }
    }

    #[test]
    fn out_of_range_phases_clamp() {
        let bar = bar();
        assert_eq!(bar.phase_to_y(-1.0), 300.0);
        assert_eq!(bar.phase_to_y(100.0), 0.0);
    }

    #[test]
    fn one_revolution_lands_two_thirds_up() {
        let bar = bar();
        let y = bar.phase_to_y(2.0 * PI);
        assert!((y - 100.0).abs() < 1e-9);
    }
}
