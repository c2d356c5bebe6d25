//! Wind-sound synthesis parameters and per-speed ramp targets.

use crate::fan::SpeedLevel;

/// Wind synthesis configuration
#[derive(Debug, Clone)]
pub struct WindParams {
    /// Looped noise buffer length (seconds)
    pub noise_duration_s: f32,

    /// Random-walk step per sample (dimensionless, scales the white noise)
    pub noise_walk_step: f32,

    /// Leaky-integrator divisor (must stay above 1.0 or the walk diverges)
    pub noise_leak: f32,

    /// Makeup gain restoring the loudness lost to integration
    pub noise_makeup_gain: f32,

    /// Noise seed (same seed, same wind)
    pub noise_seed: u64,

    /// Approach-to-target time constant for the gain and cutoff ramps (seconds)
    pub ramp_time_constant_s: f32,

    /// Filter cutoff before the first speed change (Hz)
    pub initial_cutoff_hz: f32,

    /// Sample rate used when rendering offline without a device (Hz)
    pub offline_sample_rate_hz: u32,
}

impl Default for WindParams {
    fn default() -> Self {
        Self {
            noise_duration_s: 2.0,
            noise_walk_step: 0.02,
            noise_leak: 1.02,
            noise_makeup_gain: 3.5,
            noise_seed: 42,
            ramp_time_constant_s: 0.5,
            initial_cutoff_hz: 400.0,
            offline_sample_rate_hz: 44100,
        }
    }
}

impl WindParams {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.noise_duration_s <= 0.0 {
            return Err(format!(
                "Noise duration must be > 0, got {}",
                self.noise_duration_s
            ));
        }
        if self.noise_leak <= 1.0 {
            return Err(format!("Noise leak must be > 1.0, got {}", self.noise_leak));
        }
        if self.ramp_time_constant_s <= 0.0 {
            return Err(format!(
                "Ramp time constant must be > 0, got {}",
                self.ramp_time_constant_s
            ));
        }
        if self.offline_sample_rate_hz == 0 {
            return Err("Offline sample rate must be > 0".to_string());
        }
        Ok(())
    }
}

/// Ramp targets for one speed level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindTarget {
    /// Output gain (linear, 0 = silence)
    pub gain: f32,

    /// Low-pass cutoff (Hz), higher = brighter wind
    pub cutoff_hz: f32,
}

impl WindTarget {
    /// Gain and filter cutoff for a speed level. Both rise with speed so the
    /// wind gets louder and brighter together.
    pub fn for_speed(speed: SpeedLevel) -> Self {
        let (gain, cutoff_hz) = match speed {
            SpeedLevel::Off => (0.0, 100.0),
            SpeedLevel::Low => (0.05, 300.0),
            SpeedLevel::Medium => (0.15, 600.0),
            SpeedLevel::High => (0.30, 1000.0),
            SpeedLevel::Turbo => (0.50, 1400.0),
        };
        Self { gain, cutoff_hz }
    }
}
