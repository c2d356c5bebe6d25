//! Audio output: cpal stream wiring and the lazily started wind engine.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};

use super::engine::WindDsp;
use crate::fan::SpeedLevel;
use crate::params::{WindParams, WindTarget};

/// Running audio output: the device stream and the DSP state it pulls from.
pub struct AudioSystem {
    /// Wind DSP shared with the device callback
    dsp: Arc<Mutex<WindDsp>>,

    /// Output stream (kept alive; dropping it stops playback)
    stream: cpal::Stream,
}

impl AudioSystem {
    /// Open the default output device and start the looped wind chain on it.
    /// Everything must come up before this returns Ok, so a failed start can
    /// simply be retried later.
    pub fn start(params: &WindParams) -> anyhow::Result<Self> {
        params
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid wind params: {}", e))?;

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(anyhow::anyhow!("no output device"))?;
        let config = device.default_output_config()?;

        let sample_rate_hz = config.sample_rate().0;
        let channels = config.channels() as usize;
        log::info!(
            "audio: {} @ {}Hz, {} channels",
            device.name().unwrap_or_else(|_| "unknown".to_string()),
            sample_rate_hz,
            channels
        );

        let dsp = Arc::new(Mutex::new(WindDsp::new(params, sample_rate_hz)));
        let dsp_for_callback = Arc::clone(&dsp);

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let mut dsp = dsp_for_callback.lock().unwrap();
                dsp.process(data, channels);
            },
            |err| eprintln!("audio stream error: {}", err),
            None,
        )?;

        stream.play()?;

        Ok(Self { dsp, stream })
    }

    /// Push a speed change to the device thread. The previous ramp targets
    /// are superseded; an in-flight glide just bends toward the new values.
    pub fn set_speed(&self, speed: SpeedLevel) {
        // A suspended output comes back on play(); harmless when already
        // running.
        if let Err(err) = self.stream.play() {
            log::warn!("audio stream resume failed: {}", err);
        }
        self.dsp
            .lock()
            .unwrap()
            .set_target(WindTarget::for_speed(speed));
    }
}

/// Wind sound engine with a lazy start.
///
/// The audio stack is only brought up on the first speed change, which the
/// front-end issues from a user action. If the device cannot be opened the
/// engine stays dormant and the next speed change retries; the fan keeps
/// working without sound either way.
pub struct WindSound {
    params: WindParams,
    system: Option<AudioSystem>,
}

impl WindSound {
    pub fn new(params: WindParams) -> Self {
        Self {
            params,
            system: None,
        }
    }

    /// Retarget the wind to a fan speed, starting the audio output first if
    /// needed. Failures are logged and swallowed; sound is an enhancement,
    /// not a requirement.
    pub fn set_speed(&mut self, speed: SpeedLevel) {
        if self.system.is_none() {
            match AudioSystem::start(&self.params) {
                Ok(system) => self.system = Some(system),
                Err(err) => {
                    log::warn!("wind sound unavailable: {}", err);
                    return;
                }
            }
        }
        if let Some(system) = &self.system {
            system.set_speed(speed);
        }
    }

    /// Whether the audio output has been started.
    pub fn is_running(&self) -> bool {
        self.system.is_some()
    }
}
