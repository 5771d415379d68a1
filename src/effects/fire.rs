use serde::{Deserialize, Serialize};

use crate::clock::Delay;
use crate::color::{heat_color, Color};
use crate::engine::EffectEngine;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::strip::PixelStrip;

/// Sparks land somewhere in the bottom cells.
const SPARK_ROWS: usize = 7;

/// What happens when a spark pushes a cell past 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatOverflow {
    /// Wrap around like 8 bit arithmetic; a very hot cell can turn dark.
    #[default]
    Wrap,
    /// Stay at 255.
    Saturate,
}

/// Per-pixel temperature, persisted between fire frames.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatMap {
    heat: Vec<u8>,
    overflow: HeatOverflow,
}

impl HeatMap {
    pub fn new(pixel_count: usize, overflow: HeatOverflow) -> Result<HeatMap> {
        if pixel_count == 0 {
            return Err(Error::InvalidConfiguration(
                "a heat map needs at least one cell".to_string(),
            ));
        }

        Ok(HeatMap {
            heat: vec![0; pixel_count],
            overflow,
        })
    }

    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    pub fn overflow(&self) -> HeatOverflow {
        self.overflow
    }

    pub fn is_cold(&self) -> bool {
        self.heat.iter().all(|&t| t == 0)
    }

    /// Cools every cell by a random amount, never below zero.
    pub fn cool(&mut self, cooling: u32, random: &mut impl RandomSource) {
        let max_cooldown = cooling as u64 * 10 / self.heat.len() as u64 + 2;
        let max_cooldown = max_cooldown.min(u32::MAX as u64) as u32;
        for cell in &mut self.heat {
            let cooldown = random.random(0, max_cooldown);
            *cell = cell.saturating_sub(cooldown.min(u8::MAX as u32) as u8);
        }
    }

    /// Heat drifts towards the top and mixes with the two cells below it.
    /// Cells 0 and 1 are left alone.
    pub fn diffuse(&mut self) {
        for k in (2..self.heat.len()).rev() {
            let below = self.heat[k - 1] as u16;
            let further = self.heat[k - 2] as u16;
            self.heat[k] = ((below + 2 * further) / 3) as u8;
        }
    }

    /// With probability `sparking / 255` adds a spark near the bottom.
    /// Returns the cell that caught it.
    pub fn ignite(&mut self, sparking: u32, random: &mut impl RandomSource) -> Option<usize> {
        if random.random_below(255) >= sparking {
            return None;
        }

        let rows = SPARK_ROWS.min(self.heat.len()) as u32;
        let y = random.random_below(rows) as usize;
        let spark = random.random(160, 255) as u8;
        self.heat[y] = match self.overflow {
            HeatOverflow::Wrap => self.heat[y].wrapping_add(spark),
            HeatOverflow::Saturate => self.heat[y].saturating_add(spark),
        };
        Some(y)
    }

    /// One full simulation step: cool, diffuse, ignite.
    pub fn step(
        &mut self,
        cooling: u32,
        sparking: u32,
        random: &mut impl RandomSource,
    ) -> Option<usize> {
        self.cool(cooling, random);
        self.diffuse();
        self.ignite(sparking, random)
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.heat.iter().map(|&t| heat_color(t))
    }
}

impl<S: PixelStrip, D: Delay, R: RandomSource> EffectEngine<S, D, R> {
    /// Advances the fire by one frame and flushes it, without waiting.
    pub fn fire_frame(&mut self, cooling: u32, sparking: u32) {
        if let Some(y) = self.state.heat.step(cooling, sparking, &mut self.random) {
            log::trace!("Spark at {y}");
        }

        for (i, color) in self.state.heat.colors().enumerate() {
            self.strip.set_pixel_color(i, color);
        }
        self.flush();
    }

    /// One fire frame followed by `speed_delay`. Meant to be called in a loop.
    pub fn fire(&mut self, cooling: u32, sparking: u32, speed_delay: u32) {
        self.fire_frame(cooling, sparking);
        self.delay.delay_ms(speed_delay);
    }

    pub fn set_pixel_heat_color(&mut self, pixel: usize, temperature: u8) -> Result<()> {
        self.set_pixel(pixel, heat_color(temperature))
    }
}
