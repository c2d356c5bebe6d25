//! Looped colored-noise source for the wind bed.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::params::WindParams;

/// Generate the looped noise buffer: a leaky-integrator random walk over
/// uniform white noise, with makeup gain restoring the loudness lost to
/// integration. Generated once per engine; the buffer never changes after.
///
/// Sample magnitudes stay within the makeup gain: with |white| <= 1 the
/// integrator state cannot leave [-1, 1] as long as leak >= 1 + step.
pub fn wind_noise_buffer(params: &WindParams, sample_rate_hz: u32) -> Vec<f32> {
    let len = (params.noise_duration_s * sample_rate_hz as f32) as usize;
    let mut rng = StdRng::seed_from_u64(params.noise_seed);
    let mut state = 0.0f32;
    let mut buffer = Vec::with_capacity(len);
    for _ in 0..len {
        let white = rng.gen::<f32>() * 2.0 - 1.0;
        state = (state + params.noise_walk_step * white) / params.noise_leak;
        buffer.push(state * params.noise_makeup_gain);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE_HZ: u32 = 44100;

    #[test]
    fn test_buffer_covers_full_duration() {
        let params = WindParams::default();
        let buffer = wind_noise_buffer(&params, SAMPLE_RATE_HZ);
        assert_eq!(buffer.len(), 2 * SAMPLE_RATE_HZ as usize);
    }

    #[test]
    fn test_samples_stay_bounded() {
        let params = WindParams::default();
        let buffer = wind_noise_buffer(&params, SAMPLE_RATE_HZ);
        let bound = params.noise_makeup_gain;
        for &sample in &buffer {
            assert!(sample.is_finite());
            assert!(sample.abs() <= bound);
        }
    }

    #[test]
    fn test_buffer_is_not_silent() {
        let params = WindParams::default();
        let buffer = wind_noise_buffer(&params, SAMPLE_RATE_HZ);
        assert!(buffer.iter().any(|s| s.abs() > 1e-4));
    }

    #[test]
    fn test_same_seed_same_wind() {
        let params = WindParams::default();
        let a = wind_noise_buffer(&params, SAMPLE_RATE_HZ);
        let b = wind_noise_buffer(&params, SAMPLE_RATE_HZ);
        assert_eq!(a, b);

        let mut reseeded = params.clone();
        reseeded.noise_seed = 7;
        let c = wind_noise_buffer(&reseeded, SAMPLE_RATE_HZ);
        assert_ne!(a, c);
    }
}
