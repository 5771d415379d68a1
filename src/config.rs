use std::path::Path;

use config_file::FromConfigFile;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::effects::cylon::check_eye_fits;
use crate::effects::fire::HeatOverflow;
use crate::effects::Effect;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strip: StripConfig,
    pub output: OutputConfig,
    pub playlist: Vec<PlaylistEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    pub pixel_count: usize,
    pub heat_overflow: HeatOverflow,
}

impl Default for StripConfig {
    fn default() -> Self {
        StripConfig {
            pixel_count: 50,
            heat_overflow: HeatOverflow::Wrap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    #[default]
    Terminal,
    /// Keeps frames in memory only; nothing is displayed.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub driver: Driver,
    pub measure_fps: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    #[serde(flatten)]
    pub effect: Effect,
    /// How many times the effect is called before moving on.
    #[serde(default = "one")]
    pub repeat: u32,
}

fn one() -> u32 {
    1
}

impl PlaylistEntry {
    pub fn new(effect: Effect, repeat: u32) -> PlaylistEntry {
        PlaylistEntry { effect, repeat }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let config = match Config::from_config_file(path) {
            Ok(config) => config,
            Err(err) => return Err(Error::Config(format!("{}: {:?}", path.display(), err))),
        };
        log::info!("Loaded config from {}", path.display());
        config.validated()
    }

    /// Rejects unusable values and fills in the demo playlist if none is given.
    pub fn validated(mut self) -> Result<Config> {
        if self.strip.pixel_count == 0 {
            return Err(Error::InvalidConfiguration(
                "strip.pixel_count must be at least 1".to_string(),
            ));
        }

        if self.playlist.is_empty() {
            self.playlist = default_playlist();
        }

        for entry in &self.playlist {
            self.check_effect(&entry.effect)?;
        }

        Ok(self)
    }

    /// Fails if `effect` cannot be drawn on the configured strip.
    pub fn check_effect(&self, effect: &Effect) -> Result<()> {
        if let Effect::Cylon { eye_size, .. } = *effect {
            check_eye_fits(self.strip.pixel_count, eye_size)?;
        }
        Ok(())
    }
}

/// Wipes, chase, rainbow, strobe, bounce, then fire and a rainbow cycle
/// running for a few seconds each.
pub fn default_playlist() -> Vec<PlaylistEntry> {
    vec![
        PlaylistEntry::new(
            Effect::ColorWipe {
                color: Color::new(255, 0, 0),
                wait: 50,
            },
            1,
        ),
        PlaylistEntry::new(
            Effect::ColorWipe {
                color: Color::new(0, 255, 0),
                wait: 50,
            },
            1,
        ),
        PlaylistEntry::new(
            Effect::ColorWipe {
                color: Color::new(0, 0, 255),
                wait: 50,
            },
            1,
        ),
        PlaylistEntry::new(
            Effect::WaterChase {
                color: Color::new(0, 64, 255),
                speed_delay: 50,
            },
            3,
        ),
        PlaylistEntry::new(Effect::Rainbow { wait: 20 }, 1),
        PlaylistEntry::new(
            Effect::Strobe {
                color: Color::new(255, 255, 255),
                count: 10,
                flash_delay: 50,
            },
            1,
        ),
        PlaylistEntry::new(
            Effect::Cylon {
                color: Color::new(255, 0, 0),
                eye_size: 4,
                speed_delay: 10,
                return_delay: 50,
            },
            3,
        ),
        PlaylistEntry::new(
            Effect::Fire {
                cooling: 55,
                sparking: 120,
                speed_delay: 15,
            },
            400,
        ),
        PlaylistEntry::new(Effect::RainbowCycle { wait: 20 }, 256),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default().validated().unwrap();
        assert_eq!(config.strip.pixel_count, 50);
        assert_eq!(config.strip.heat_overflow, HeatOverflow::Wrap);
        assert_eq!(config.output.driver, Driver::Terminal);
        assert_eq!(config.playlist, default_playlist());
    }

    #[test]
    fn zero_pixels_is_invalid() {
        let mut config = Config::default();
        config.strip.pixel_count = 0;
        assert!(matches!(
            config.validated(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn playlist_must_fit_strip() {
        let mut config = Config::default();
        config.strip.pixel_count = 5;
        assert!(matches!(
            config.validated(),
            Err(Error::OutOfRange { value: 4, .. })
        ));
    }

    #[test]
    fn huge_eye_size_is_out_of_range() {
        let mut config = Config::default();
        config.playlist = vec![PlaylistEntry::new(
            Effect::Cylon {
                color: Color::new(255, 0, 0),
                eye_size: usize::MAX,
                speed_delay: 10,
                return_delay: 50,
            },
            1,
        )];
        assert!(matches!(
            config.validated(),
            Err(Error::OutOfRange { value: usize::MAX, .. })
        ));
    }

    #[test]
    fn single_effects_are_checked_against_the_strip() {
        let config = Config::default().validated().unwrap();
        let cylon = |eye_size| Effect::Cylon {
            color: Color::new(255, 0, 0),
            eye_size,
            speed_delay: 10,
            return_delay: 50,
        };
        assert!(config.check_effect(&cylon(4)).is_ok());
        assert!(config.check_effect(&cylon(48)).is_err());
        assert!(config.check_effect(&Effect::Rainbow { wait: 20 }).is_ok());
    }

    #[test]
    fn loads_toml_file() {
        let path = std::env::temp_dir().join(format!("stripfx-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r##"
[strip]
pixel_count = 30
heat_overflow = "saturate"

[output]
driver = "memory"

[[playlist]]
effect = "fire"
cooling = 40
repeat = 100

[[playlist]]
effect = "water-chase"
color = "#00ff80"
"##,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.strip.pixel_count, 30);
        assert_eq!(config.strip.heat_overflow, HeatOverflow::Saturate);
        assert_eq!(config.output.driver, Driver::Memory);
        assert!(!config.output.measure_fps);
        assert_eq!(
            config.playlist,
            vec![
                PlaylistEntry::new(
                    Effect::Fire {
                        cooling: 40,
                        sparking: 120,
                        speed_delay: 15,
                    },
                    100
                ),
                PlaylistEntry::new(
                    Effect::WaterChase {
                        color: Color::new(0, 255, 128),
                        speed_delay: 50,
                    },
                    1
                ),
            ]
        );
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = Config::load(Path::new("/nonexistent/stripfx.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
