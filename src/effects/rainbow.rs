use crate::clock::Delay;
use crate::color::{wheel, Color};
use crate::engine::EffectEngine;
use crate::random::RandomSource;
use crate::strip::PixelStrip;

/// Colour of pixel `i` in `rainbow` frame `phase`. Wraps at 255, not 256.
pub fn rainbow_color(i: usize, phase: usize) -> Color {
    wheel(((i + phase) % 255) as u8)
}

/// Colour of pixel `i` of `n` in a `rainbow_cycle` frame. The whole wheel is
/// spread evenly over the strip.
pub fn cycle_color(i: usize, n: usize, phase: u8) -> Color {
    wheel(((i * 256 / n + phase as usize) % 256) as u8)
}

impl<S: PixelStrip, D: Delay, R: RandomSource> EffectEngine<S, D, R> {
    /// 256 frames of a rainbow sliding along the strip.
    pub fn rainbow(&mut self, wait: u32) {
        let n = self.state.pixel_count;
        for phase in 0..256 {
            for i in 0..n {
                self.strip.set_pixel_color(i, rainbow_color(i, phase));
            }
            self.show_and_wait(wait);
        }
    }

    /// Draws the next rainbow cycle frame and advances the phase. No waiting.
    pub fn rainbow_cycle_frame(&mut self) {
        let n = self.state.pixel_count;
        let phase = self.state.cycle_phase;
        for i in 0..n {
            self.strip.set_pixel_color(i, cycle_color(i, n, phase));
        }
        self.flush();
        self.state.cycle_phase = phase.wrapping_add(1);
    }

    /// One frame of the evenly spread rainbow, then `wait`. Meant to be
    /// called in a loop; the phase carries over between calls.
    pub fn rainbow_cycle(&mut self, wait: u32) {
        self.rainbow_cycle_frame();
        self.delay.delay_ms(wait);
    }
}
