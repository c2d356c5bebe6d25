//! Offline rendering of the wind sound, for record mode and tests.

use super::engine::WindDsp;
use crate::fan::SpeedLevel;
use crate::params::{WindParams, WindTarget};

/// Render the wind at a fixed speed from a cold start, without a device.
/// Returns mono samples at the requested sample rate; the gain and cutoff
/// glide from their rest values exactly as they would live.
pub fn render_wind(
    params: &WindParams,
    speed: SpeedLevel,
    duration_s: f32,
    sample_rate_hz: u32,
) -> Vec<f32> {
    let mut dsp = WindDsp::new(params, sample_rate_hz);
    dsp.set_target(WindTarget::for_speed(speed));
    let mut samples = vec![0.0f32; (duration_s * sample_rate_hz as f32) as usize];
    dsp.process(&mut samples, 1);
    samples
}

/// Write mono samples as a 32-bit float WAV.
pub fn write_wav(path: &str, samples: &[f32], sample_rate_hz: u32) -> anyhow::Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_length_matches_duration() {
        let params = WindParams::default();
        let samples = render_wind(&params, SpeedLevel::Low, 0.5, 44100);
        assert_eq!(samples.len(), 22050);
    }

    #[test]
    fn test_render_off_is_silent() {
        let params = WindParams::default();
        let samples = render_wind(&params, SpeedLevel::Off, 1.0, 44100);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_render_turbo_is_audible_and_bounded() {
        let params = WindParams::default();
        let samples = render_wind(&params, SpeedLevel::Turbo, 1.0, 44100);
        assert!(samples.iter().any(|&s| s.abs() > 1e-4));
        for &sample in &samples {
            assert!(sample.is_finite());
            assert!(sample.abs() < 2.0);
        }
    }
}
