//! Fan state held by the front-end: discrete speed plus oscillation toggle.

/// Discrete fan speed setting, ordered slowest to fastest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpeedLevel {
    #[default]
    Off,
    Low,
    Medium,
    High,
    Turbo,
}

impl SpeedLevel {
    /// All levels in ascending speed order.
    pub const ALL: [SpeedLevel; 5] = [
        SpeedLevel::Off,
        SpeedLevel::Low,
        SpeedLevel::Medium,
        SpeedLevel::High,
        SpeedLevel::Turbo,
    ];

    /// Control-panel button label.
    pub fn label(self) -> &'static str {
        match self {
            SpeedLevel::Off => "OFF",
            SpeedLevel::Low => "1",
            SpeedLevel::Medium => "2",
            SpeedLevel::High => "3",
            SpeedLevel::Turbo => "MAX",
        }
    }
}

/// Current fan state: selected speed and whether the head is sweeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct FanState {
    speed: SpeedLevel,
    oscillating: bool,
}

impl FanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    pub fn is_oscillating(&self) -> bool {
        self.oscillating
    }

    /// Select a new speed. Dropping to Off also stops oscillation, since the
    /// sweep gear is driven by the motor.
    pub fn set_speed(&mut self, speed: SpeedLevel) {
        self.speed = speed;
        if speed == SpeedLevel::Off {
            self.oscillating = false;
        }
    }

    /// Toggle head oscillation and return the new setting. Ignored while the
    /// fan is off.
    pub fn toggle_oscillation(&mut self) -> bool {
        if self.speed != SpeedLevel::Off {
            self.oscillating = !self.oscillating;
        }
        self.oscillating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        for pair in SpeedLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(SpeedLevel::Turbo >= SpeedLevel::High);
        assert!(SpeedLevel::Medium < SpeedLevel::High);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = SpeedLevel::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["OFF", "1", "2", "3", "MAX"]);
    }

    #[test]
    fn test_oscillation_needs_motor() {
        let mut fan = FanState::new();
        assert!(!fan.toggle_oscillation());
        assert!(!fan.is_oscillating());

        fan.set_speed(SpeedLevel::Low);
        assert!(fan.toggle_oscillation());
        assert!(fan.is_oscillating());
    }

    #[test]
    fn test_oscillation_stops_when_switched_off() {
        let mut fan = FanState::new();
        fan.set_speed(SpeedLevel::High);
        fan.toggle_oscillation();
        assert!(fan.is_oscillating());

        fan.set_speed(SpeedLevel::Off);
        assert!(!fan.is_oscillating());

        // Speed changes between running levels leave the toggle alone.
        fan.set_speed(SpeedLevel::Turbo);
        fan.toggle_oscillation();
        fan.set_speed(SpeedLevel::Low);
        assert!(fan.is_oscillating());
    }
}
