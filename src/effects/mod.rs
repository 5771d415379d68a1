pub mod chase;
pub mod cylon;
pub mod fire;
pub mod rainbow;
pub mod strobe;
pub mod wipe;

use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::clock::Delay;
use crate::color::{self, parse_hex, Color};
use crate::engine::EffectEngine;
use crate::error::Result;
use crate::random::RandomSource;
use crate::strip::PixelStrip;

/// An effect together with its parameters. Delays are in milliseconds.
#[derive(Debug, Clone, PartialEq, Subcommand, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "kebab-case")]
pub enum Effect {
    /// Every third pixel chases along the strip, three rounds
    WaterChase {
        #[arg(long, value_parser = parse_hex, default_value = "#0000ff")]
        #[serde(with = "color::hex")]
        color: Color,
        #[arg(long, default_value_t = 50)]
        #[serde(default = "defaults::speed_delay")]
        speed_delay: u32,
    },
    /// Fill the strip one pixel at a time
    ColorWipe {
        #[arg(long, value_parser = parse_hex, default_value = "#ff0000")]
        #[serde(with = "color::hex")]
        color: Color,
        #[arg(long, default_value_t = 50)]
        #[serde(default = "defaults::wait")]
        wait: u32,
    },
    /// A rainbow sliding along the strip, 256 frames
    Rainbow {
        #[arg(long, default_value_t = 20)]
        #[serde(default = "defaults::rainbow_wait")]
        wait: u32,
    },
    /// One frame of a rainbow spread over the whole strip per call
    RainbowCycle {
        #[arg(long, default_value_t = 20)]
        #[serde(default = "defaults::rainbow_wait")]
        wait: u32,
    },
    /// Flash the whole strip
    Strobe {
        #[arg(long, value_parser = parse_hex, default_value = "#ffffff")]
        #[serde(with = "color::hex")]
        color: Color,
        #[arg(long, default_value_t = 10)]
        #[serde(default = "defaults::strobe_count")]
        count: u32,
        #[arg(long, default_value_t = 50)]
        #[serde(default = "defaults::flash_delay")]
        flash_delay: u32,
    },
    /// A scanning eye bouncing back and forth
    Cylon {
        #[arg(long, value_parser = parse_hex, default_value = "#ff0000")]
        #[serde(with = "color::hex")]
        color: Color,
        #[arg(long, default_value_t = 4)]
        #[serde(default = "defaults::eye_size")]
        eye_size: usize,
        #[arg(long, default_value_t = 10)]
        #[serde(default = "defaults::cylon_speed_delay")]
        speed_delay: u32,
        #[arg(long, default_value_t = 50)]
        #[serde(default = "defaults::return_delay")]
        return_delay: u32,
    },
    /// One frame of simulated fire per call
    Fire {
        #[arg(long, default_value_t = 55)]
        #[serde(default = "defaults::cooling")]
        cooling: u32,
        #[arg(long, default_value_t = 120)]
        #[serde(default = "defaults::sparking")]
        sparking: u32,
        #[arg(long, default_value_t = 15)]
        #[serde(default = "defaults::fire_speed_delay")]
        speed_delay: u32,
    },
}

mod defaults {
    pub fn speed_delay() -> u32 {
        50
    }
    pub fn wait() -> u32 {
        50
    }
    pub fn rainbow_wait() -> u32 {
        20
    }
    pub fn strobe_count() -> u32 {
        10
    }
    pub fn flash_delay() -> u32 {
        50
    }
    pub fn eye_size() -> usize {
        4
    }
    pub fn cylon_speed_delay() -> u32 {
        10
    }
    pub fn return_delay() -> u32 {
        50
    }
    pub fn cooling() -> u32 {
        55
    }
    pub fn sparking() -> u32 {
        120
    }
    pub fn fire_speed_delay() -> u32 {
        15
    }
}

impl Effect {
    pub fn name(&self) -> &'static str {
        match self {
            Effect::WaterChase { .. } => "water chase",
            Effect::ColorWipe { .. } => "color wipe",
            Effect::Rainbow { .. } => "rainbow",
            Effect::RainbowCycle { .. } => "rainbow cycle",
            Effect::Strobe { .. } => "strobe",
            Effect::Cylon { .. } => "cylon",
            Effect::Fire { .. } => "fire",
        }
    }

    /// Effects that draw a single frame per call and rely on the caller to
    /// keep calling them.
    pub fn is_single_frame(&self) -> bool {
        matches!(self, Effect::RainbowCycle { .. } | Effect::Fire { .. })
    }
}

impl<S: PixelStrip, D: Delay, R: RandomSource> EffectEngine<S, D, R> {
    /// Runs one call of `effect`.
    pub fn run(&mut self, effect: &Effect) -> Result<()> {
        log::debug!("Running {}", effect.name());
        match *effect {
            Effect::WaterChase { color, speed_delay } => self.water_chase(color, speed_delay),
            Effect::ColorWipe { color, wait } => self.color_wipe(color::pack(color), wait),
            Effect::Rainbow { wait } => self.rainbow(wait),
            Effect::RainbowCycle { wait } => self.rainbow_cycle(wait),
            Effect::Strobe {
                color,
                count,
                flash_delay,
            } => self.strobe(color, count, flash_delay),
            Effect::Cylon {
                color,
                eye_size,
                speed_delay,
                return_delay,
            } => self.cylon_bounce(color, eye_size, speed_delay, return_delay)?,
            Effect::Fire {
                cooling,
                sparking,
                speed_delay,
            } => self.fire(cooling, sparking, speed_delay),
        }
        Ok(())
    }
}
