use crate::clock::Delay;
use crate::color::{Color, BLACK};
use crate::effects::fire::{HeatMap, HeatOverflow};
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::strip::PixelStrip;

/// Everything an engine remembers between effect calls.
#[derive(Debug, Clone)]
pub struct StripState {
    pub(crate) pixel_count: usize,
    pub(crate) uniform_color: Color,
    pub(crate) heat: HeatMap,
    pub(crate) cycle_phase: u8,
}

impl StripState {
    pub fn new(pixel_count: usize, heat_overflow: HeatOverflow) -> Result<StripState> {
        if pixel_count == 0 {
            return Err(Error::InvalidConfiguration(
                "a strip needs at least one pixel".to_string(),
            ));
        }

        Ok(StripState {
            pixel_count,
            uniform_color: BLACK,
            heat: HeatMap::new(pixel_count, heat_overflow)?,
            cycle_phase: 0,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    pub fn uniform_color(&self) -> Color {
        self.uniform_color
    }

    pub fn heat(&self) -> &HeatMap {
        &self.heat
    }

    pub fn cycle_phase(&self) -> u8 {
        self.cycle_phase
    }
}

/// Drives one strip. Calls must not be interleaved; each effect takes
/// `&mut self` for its whole run.
pub struct EffectEngine<S, D, R> {
    pub(crate) strip: S,
    pub(crate) delay: D,
    pub(crate) random: R,
    pub(crate) state: StripState,
}

impl<S: PixelStrip, D: Delay, R: RandomSource> EffectEngine<S, D, R> {
    pub fn new(strip: S, delay: D, random: R) -> Result<Self> {
        Self::with_heat_overflow(strip, delay, random, HeatOverflow::default())
    }

    pub fn with_heat_overflow(
        strip: S,
        delay: D,
        random: R,
        heat_overflow: HeatOverflow,
    ) -> Result<Self> {
        let state = StripState::new(strip.num_pixels(), heat_overflow)?;
        log::debug!(
            "Engine for {} pixels, heat overflow {:?}",
            state.pixel_count,
            heat_overflow
        );

        Ok(EffectEngine {
            strip,
            delay,
            random,
            state,
        })
    }

    /// Sets up the driver and presents an all-off strip.
    pub fn init(&mut self) {
        self.strip.begin();
        self.flush();
    }

    pub fn set_pixel(&mut self, pixel: usize, color: Color) -> Result<()> {
        self.check_pixel(pixel)?;
        self.strip.set_pixel_color(pixel, color);
        Ok(())
    }

    /// Paints every pixel with the cached uniform colour and flushes once.
    pub fn set_all(&mut self) {
        for i in 0..self.state.pixel_count {
            self.strip.set_pixel_color(i, self.state.uniform_color);
        }
        self.flush();
    }

    pub fn set_all_val(&mut self, color: Color) {
        self.state.uniform_color = color;
        self.set_all();
    }

    pub fn pixel_count(&self) -> usize {
        self.state.pixel_count
    }

    pub fn uniform_color(&self) -> Color {
        self.state.uniform_color
    }

    pub fn state(&self) -> &StripState {
        &self.state
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    pub fn into_strip(self) -> S {
        self.strip
    }

    pub(crate) fn check_pixel(&self, pixel: usize) -> Result<()> {
        if pixel >= self.state.pixel_count {
            return Err(Error::OutOfRange {
                what: "pixel",
                value: pixel,
                limit: self.state.pixel_count,
            });
        }
        Ok(())
    }

    pub(crate) fn flush(&mut self) {
        log::trace!("Frame on {} pixels", self.state.pixel_count);
        self.strip.show();
    }

    pub(crate) fn show_and_wait(&mut self, ms: u32) {
        self.flush();
        self.delay.delay_ms(ms);
    }
}
