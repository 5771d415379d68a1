use crate::clock::Delay;
use crate::color::unpack;
use crate::engine::EffectEngine;
use crate::random::RandomSource;
use crate::strip::PixelStrip;

impl<S: PixelStrip, D: Delay, R: RandomSource> EffectEngine<S, D, R> {
    /// Fills the dots one after the other with a packed `0xRRGGBB` colour.
    /// Good for testing the wiring.
    pub fn color_wipe(&mut self, packed: u32, wait: u32) {
        let color = unpack(packed);
        for i in 0..self.strip.num_pixels() {
            self.strip.set_pixel_color(i, color);
            self.show_and_wait(wait);
        }
    }
}
