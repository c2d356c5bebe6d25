//! Presentational motion parameters for the blades and the sweeping head.

use crate::fan::SpeedLevel;

/// Blade and head motion timing
#[derive(Debug, Clone)]
pub struct FanMotion {
    /// Head sweep period (seconds per left-to-right pass)
    pub oscillation_period_s: f32,

    /// Head sweep half-angle (degrees either side of center)
    pub oscillation_sweep_deg: f32,

    /// Lowest speed at which the blade disc reads as a motion blur
    pub motion_blur_threshold: SpeedLevel,
}

impl Default for FanMotion {
    fn default() -> Self {
        Self {
            oscillation_period_s: 6.0,
            oscillation_sweep_deg: 40.0,
            motion_blur_threshold: SpeedLevel::High,
        }
    }
}

impl FanMotion {
    /// Blade revolution period for a speed, or None while the fan is off.
    pub fn spin_period_s(&self, speed: SpeedLevel) -> Option<f32> {
        match speed {
            SpeedLevel::Off => None,
            SpeedLevel::Low => Some(1.5),
            SpeedLevel::Medium => Some(0.6),
            SpeedLevel::High => Some(0.25),
            SpeedLevel::Turbo => Some(0.12),
        }
    }

    /// Whether the blade disc blurs at this speed.
    pub fn shows_motion_blur(&self, speed: SpeedLevel) -> bool {
        speed >= self.motion_blur_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blades_stop_when_off() {
        assert_eq!(FanMotion::default().spin_period_s(SpeedLevel::Off), None);
    }

    #[test]
    fn test_spin_period_shrinks_with_speed() {
        let motion = FanMotion::default();
        let periods: Vec<f32> = SpeedLevel::ALL
            .iter()
            .filter_map(|&s| motion.spin_period_s(s))
            .collect();
        assert_eq!(periods.len(), 4);
        for pair in periods.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_motion_blur_threshold() {
        let motion = FanMotion::default();
        assert!(!motion.shows_motion_blur(SpeedLevel::Medium));
        assert!(motion.shows_motion_blur(SpeedLevel::High));
        assert!(motion.shows_motion_blur(SpeedLevel::Turbo));
    }
}
