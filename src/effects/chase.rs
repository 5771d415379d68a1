use crate::clock::Delay;
use crate::color::{Color, BLACK};
use crate::engine::EffectEngine;
use crate::random::RandomSource;
use crate::strip::PixelStrip;

const CYCLES: usize = 3;
const SPACING: usize = 3;

/// Pixels lit in chase phase `phase`: every third one, starting at `phase`.
pub fn lit_pixels(pixel_count: usize, phase: usize) -> impl Iterator<Item = usize> {
    (phase..pixel_count).step_by(SPACING)
}

impl<S: PixelStrip, D: Delay, R: RandomSource> EffectEngine<S, D, R> {
    /// Three rounds of every-third-pixel chasing, `speed_delay` ms per step.
    ///
    /// Lit pixels are switched off again right after their delay but that is
    /// only flushed with the next step, so the strip never shows a dark frame.
    pub fn water_chase(&mut self, color: Color, speed_delay: u32) {
        let n = self.state.pixel_count;
        for _ in 0..CYCLES {
            for q in 0..SPACING {
                for i in lit_pixels(n, q) {
                    self.strip.set_pixel_color(i, color);
                }
                self.show_and_wait(speed_delay);

                for i in lit_pixels(n, q) {
                    self.strip.set_pixel_color(i, BLACK);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::engine;

    #[test]
    fn lit_pixels_stay_on_the_strip() {
        assert_eq!(lit_pixels(10, 0).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(lit_pixels(10, 1).collect::<Vec<_>>(), vec![1, 4, 7]);
        assert_eq!(lit_pixels(10, 2).collect::<Vec<_>>(), vec![2, 5, 8]);
        assert_eq!(lit_pixels(2, 2).count(), 0);
    }

    #[test]
    fn nine_flushes_with_rotating_pixels() {
        let blue = Color::new(0, 0, 255);
        let mut engine = engine(7);
        engine.water_chase(blue, 30);

        let frames = engine.strip().frames();
        assert_eq!(frames.len(), 9);
        assert_eq!(engine.delay.delays, vec![30; 9]);

        for (k, frame) in frames.iter().enumerate() {
            let q = k % 3;
            for (i, pixel) in frame.iter().enumerate() {
                let expected = if i % 3 == q { blue } else { BLACK };
                assert_eq!(*pixel, expected, "frame {k} pixel {i}");
            }
        }
    }

    #[test]
    fn chase_leaves_other_pixels_alone_until_it_passes() {
        let red = Color::new(255, 0, 0);
        let mut engine = engine(3);
        engine.set_all_val(red);
        engine.strip_mut().clear_history();
        engine.water_chase(Color::new(0, 255, 0), 0);

        // Pixels 1 and 2 still carry the old colour in the first step.
        let first = &engine.strip().frames()[0];
        assert_eq!(first[1], red);
        assert_eq!(first[2], red);
        assert_eq!(engine.strip().pixels(), &[BLACK; 3]);
    }
}
