use crate::sim::NoisePolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;

// Each grid cell spans two character columns so cells render roughly square.
pub(crate) const CHAR_CELLS_PER_GRID_CELL: u16 = 2;
// Rows reserved at the bottom of the screen for the status banner.
pub(crate) const BANNER_ROWS: u16 = 3;

pub(crate) const MIN_TPS: u32 = 1;
pub(crate) const MAX_TPS: u32 = 60;

// One noise mark per this many cells, every tick.
pub(crate) const NOISE_DIVISOR: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) ticks_per_second: u32,
    pub(crate) show_counts: bool,
    pub(crate) reset_secs: u64,
    // 0 = derive a fresh seed from the clock at every restart.
    pub(crate) seed: u64,
    pub(crate) noise: NoisePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks_per_second: 10,
            show_counts: true,
            reset_secs: 300,
            seed: 0,
            noise: NoisePolicy::PerTick,
        }
    }
}

impl Settings {
    pub(crate) fn sanitized(mut self) -> Self {
        self.ticks_per_second = self.ticks_per_second.clamp(MIN_TPS, MAX_TPS);
        self.reset_secs = self.reset_secs.max(1);
        self
    }
}

pub(crate) fn load() -> Settings {
    let Some(proj) = ProjectDirs::from("com", "lifegrid", "Lifegrid") else {
        return Settings::default();
    };
    let path = proj.config_dir().join("settings.json");
    match fs::read_to_string(&path) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
        Err(_) => Settings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_bounds() {
        let s = Settings::default().sanitized();
        assert_eq!(s.ticks_per_second, 10);
        assert!(s.show_counts);
        assert_eq!(s.reset_secs, 300);
        assert_eq!(s.noise, NoisePolicy::PerTick);
    }

    #[test]
    fn test_sanitize_clamps_tick_rate() {
        let fast = Settings {
            ticks_per_second: 200,
            ..Settings::default()
        };
        assert_eq!(fast.sanitized().ticks_per_second, MAX_TPS);

        let stopped = Settings {
            ticks_per_second: 0,
            ..Settings::default()
        };
        assert_eq!(stopped.sanitized().ticks_per_second, MIN_TPS);
    }

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"ticks_per_second": 30}"#).unwrap();
        assert_eq!(s.ticks_per_second, 30);
        assert_eq!(s.reset_secs, 300);
        assert_eq!(s.noise, NoisePolicy::PerTick);
    }

    #[test]
    fn test_noise_policy_parses_from_json() {
        let off: Settings = serde_json::from_str(r#"{"noise": "off"}"#).unwrap();
        assert_eq!(off.noise, NoisePolicy::Off);
        let fixed: Settings = serde_json::from_str(r#"{"noise": {"fixed": 7}}"#).unwrap();
        assert_eq!(fixed.noise, NoisePolicy::Fixed(7));
    }
}
