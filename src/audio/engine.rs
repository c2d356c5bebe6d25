//! Wind DSP chain: looped noise through a swept low-pass filter and gain stage.

use biquad::{Biquad as _, Coefficients, DirectForm2Transposed, Hertz, Q_BUTTERWORTH_F32};

use super::noise::wind_noise_buffer;
use crate::params::{WindParams, WindTarget};

/// Samples between filter coefficient refreshes. The cutoff glides over half
/// a second, so block-rate refreshes stay inaudible.
const COEFF_REFRESH_SAMPLES: u32 = 32;

/// Cutoff floor (Hz); the design also caps the cutoff below Nyquist.
const MIN_CUTOFF_HZ: f32 = 10.0;

/// One-pole approach-to-target parameter ramp.
///
/// The value glides toward its target instead of jumping, closing the gap by
/// `1 - 1/e` per time constant. Retargeting is last-write-wins: an in-flight
/// glide simply bends toward the new target.
#[derive(Debug, Clone)]
pub struct ParamRamp {
    current: f32,
    target: f32,
    /// Per-sample smoothing coefficient, 1 - exp(-1 / (tau * fs))
    coeff: f32,
}

impl ParamRamp {
    pub fn new(initial: f32, time_constant_s: f32, sample_rate_hz: u32) -> Self {
        let coeff = 1.0 - (-1.0 / (time_constant_s * sample_rate_hz as f32)).exp();
        Self {
            current: initial,
            target: initial,
            coeff,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    /// Advance one sample and return the new value.
    pub fn tick(&mut self) -> f32 {
        self.current += (self.target - self.current) * self.coeff;
        self.current
    }
}

/// The wind sound chain: noise source -> tone filter -> gain.
///
/// The noise buffer is generated once at construction and loops forever;
/// only the gain and cutoff ramps move after that.
#[derive(Debug)]
pub struct WindDsp {
    noise: Vec<f32>,
    position: usize,
    gain: ParamRamp,
    cutoff: ParamRamp,
    filter: DirectForm2Transposed<f32>,
    sample_rate_hz: u32,
    samples_until_refresh: u32,
}

impl WindDsp {
    pub fn new(params: &WindParams, sample_rate_hz: u32) -> Self {
        let noise = wind_noise_buffer(params, sample_rate_hz);
        let gain = ParamRamp::new(0.0, params.ramp_time_constant_s, sample_rate_hz);
        let cutoff = ParamRamp::new(
            params.initial_cutoff_hz,
            params.ramp_time_constant_s,
            sample_rate_hz,
        );
        let filter = DirectForm2Transposed::<f32>::new(lowpass_coefficients(
            params.initial_cutoff_hz,
            sample_rate_hz,
        ));
        Self {
            noise,
            position: 0,
            gain,
            cutoff,
            filter,
            sample_rate_hz,
            samples_until_refresh: 0,
        }
    }

    /// Retarget the gain and cutoff ramps. Last write wins.
    pub fn set_target(&mut self, target: WindTarget) {
        self.gain.set_target(target.gain);
        self.cutoff.set_target(target.cutoff_hz);
    }

    /// Current ramp targets.
    pub fn target(&self) -> WindTarget {
        WindTarget {
            gain: self.gain.target(),
            cutoff_hz: self.cutoff.target(),
        }
    }

    /// Fill an interleaved output buffer, writing the mono wind sample to
    /// every channel of each frame.
    pub fn process(&mut self, data: &mut [f32], channels: usize) {
        for frame in data.chunks_mut(channels) {
            let gain = self.gain.tick();
            let cutoff_hz = self.cutoff.tick();

            if self.samples_until_refresh == 0 {
                self.filter
                    .update_coefficients(lowpass_coefficients(cutoff_hz, self.sample_rate_hz));
                self.samples_until_refresh = COEFF_REFRESH_SAMPLES;
            }
            self.samples_until_refresh -= 1;

            let noise = self.noise[self.position];
            self.position = (self.position + 1) % self.noise.len();

            let sample = self.filter.run(noise) * gain;
            for out in frame {
                *out = sample;
            }
        }
    }
}

/// Butterworth low-pass coefficients with the cutoff clamped into the range
/// the filter design accepts for this sample rate.
fn lowpass_coefficients(cutoff_hz: f32, sample_rate_hz: u32) -> Coefficients<f32> {
    let cutoff_hz = cutoff_hz.clamp(MIN_CUTOFF_HZ, sample_rate_hz as f32 * 0.45);
    let fs = Hertz::<f32>::from_hz(sample_rate_hz as f32).expect("valid sample rate");
    let f0 = Hertz::<f32>::from_hz(cutoff_hz).expect("valid frequency");
    Coefficients::<f32>::from_params(biquad::Type::LowPass, fs, f0, Q_BUTTERWORTH_F32)
        .expect("valid params")
}
