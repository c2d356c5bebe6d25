//! Command-line argument parsing.

use clap::Parser;

use crate::fan::SpeedLevel;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "AeroLux")]
#[command(about = "Desk fan simulator with procedural wind sound", long_about = None)]
pub struct Args {
    /// Render the wind sound to a WAV file instead of running interactively
    /// (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Fan speed for record mode: off, low, medium, high, turbo
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    pub speed: String,

    /// Output path for record mode
    #[arg(long, value_name = "PATH", default_value = "wind.wav")]
    pub output: String,

    /// Noise seed (same seed, same wind)
    #[arg(long, value_name = "N", default_value = "42")]
    pub seed: u64,
}

impl Args {
    /// Parse the record-mode speed from command-line arguments
    pub fn parse_speed(&self) -> SpeedLevel {
        match parse_speed(&self.speed) {
            Some(speed) => speed,
            None => {
                eprintln!("Warning: Unknown speed '{}', using medium", self.speed);
                SpeedLevel::Medium
            }
        }
    }
}

/// Parse a speed word or button digit: off/0, low/1, medium/2, high/3,
/// turbo/max/4.
pub fn parse_speed(input: &str) -> Option<SpeedLevel> {
    match input.trim().to_lowercase().as_str() {
        "off" | "0" => Some(SpeedLevel::Off),
        "low" | "1" => Some(SpeedLevel::Low),
        "medium" | "med" | "2" => Some(SpeedLevel::Medium),
        "high" | "3" => Some(SpeedLevel::High),
        "turbo" | "max" | "4" => Some(SpeedLevel::Turbo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_speed_words_and_digits() {
        assert_eq!(parse_speed("off"), Some(SpeedLevel::Off));
        assert_eq!(parse_speed("0"), Some(SpeedLevel::Off));
        assert_eq!(parse_speed("LOW"), Some(SpeedLevel::Low));
        assert_eq!(parse_speed("2"), Some(SpeedLevel::Medium));
        assert_eq!(parse_speed(" high "), Some(SpeedLevel::High));
        assert_eq!(parse_speed("max"), Some(SpeedLevel::Turbo));
        assert_eq!(parse_speed("turbo"), Some(SpeedLevel::Turbo));
    }

    #[test]
    fn test_parse_speed_rejects_unknown() {
        assert_eq!(parse_speed("warp"), None);
        assert_eq!(parse_speed(""), None);
        assert_eq!(parse_speed("5"), None);
    }
}
