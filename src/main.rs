//! AeroLux - a desk fan you can hear
//!
//! Five speed buttons drive the blade timing and a synthesized wind sound
//! that swells and brightens as the fan spins up.

mod audio;
mod cli;
mod fan;
mod params;

use std::io::{self, BufRead};

use clap::Parser;

use audio::{render_wind, write_wav, WindSound};
use cli::{parse_speed, Args};
use fan::{FanState, SpeedLevel};
use params::{FanMotion, WindParams};

/// Main application state
struct App {
    fan: FanState,
    wind: WindSound,
    motion: FanMotion,
}

impl App {
    fn new(params: WindParams) -> Self {
        Self {
            fan: FanState::new(),
            wind: WindSound::new(params),
            motion: FanMotion::default(),
        }
    }

    /// Apply a button press: update the fan and forward the speed verbatim
    /// to the wind engine.
    fn select_speed(&mut self, speed: SpeedLevel) {
        self.fan.set_speed(speed);
        self.wind.set_speed(speed);
        self.print_status();
    }

    fn toggle_oscillation(&mut self) {
        let before = self.fan.is_oscillating();
        if self.fan.toggle_oscillation() == before {
            println!("Oscillation needs the motor running - pick a speed first");
            return;
        }
        self.print_status();
    }

    fn print_status(&self) {
        let speed = self.fan.speed();
        let blades = match self.motion.spin_period_s(speed) {
            Some(period_s) => format!("{:.2}s/rev", period_s),
            None => "stopped".to_string(),
        };
        let blur = if self.motion.shows_motion_blur(speed) {
            ", blurred"
        } else {
            ""
        };
        let sweep = if self.fan.is_oscillating() {
            format!(
                "sweeping +/-{:.0} deg every {:.0}s",
                self.motion.oscillation_sweep_deg, self.motion.oscillation_period_s
            )
        } else {
            "head still".to_string()
        };
        println!(
            "Speed [{}]  blades {}{}  {}  sound {}",
            speed.label(),
            blades,
            blur,
            sweep,
            if self.wind.is_running() { "on" } else { "off" },
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut params = WindParams::default();
    params.noise_seed = args.seed;

    if let Some(duration_s) = args.record {
        let speed = args.parse_speed();
        let sample_rate_hz = params.offline_sample_rate_hz;
        println!(
            "Rendering {}s of {} wind to {}",
            duration_s,
            speed.label(),
            args.output
        );
        let samples = render_wind(&params, speed, duration_s, sample_rate_hz);
        write_wav(&args.output, &samples, sample_rate_hz)?;
        return Ok(());
    }

    println!("AeroLux - Air Circulation System");
    println!("Speeds: 0 (off), 1, 2, 3, 4 (max) | o: oscillation | q: quit\n");

    let mut app = App::new(params);
    app.print_status();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input.to_lowercase().as_str() {
            "q" | "quit" | "exit" => break,
            "o" | "osc" | "oscillation" => app.toggle_oscillation(),
            other => match parse_speed(other) {
                Some(speed) => app.select_speed(speed),
                None => println!("Unknown command '{}' (0-4, o, q)", input),
            },
        }
    }

    Ok(())
}
