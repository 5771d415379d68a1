use crate::clock::Delay;
use crate::color::{Color, BLACK};
use crate::engine::EffectEngine;
use crate::random::RandomSource;
use crate::strip::PixelStrip;

impl<S: PixelStrip, D: Delay, R: RandomSource> EffectEngine<S, D, R> {
    /// Flashes the whole strip `count` times.
    pub fn strobe(&mut self, color: Color, count: u32, flash_delay: u32) {
        for _ in 0..count {
            self.set_all_val(color);
            self.delay.delay_ms(flash_delay);
            self.set_all_val(BLACK);
            self.delay.delay_ms(flash_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::engine;

    #[test]
    fn alternates_color_and_black() {
        let white = Color::new(255, 255, 255);
        let mut engine = engine(3);
        engine.strobe(white, 4, 50);

        let frames = engine.strip().frames();
        assert_eq!(frames.len(), 8);
        for (k, frame) in frames.iter().enumerate() {
            let expected = if k % 2 == 0 { white } else { BLACK };
            assert_eq!(frame, &vec![expected; 3]);
        }
        assert_eq!(engine.delay.delays, vec![50; 8]);
        assert_eq!(engine.uniform_color(), BLACK);
    }

    #[test]
    fn zero_count_does_nothing() {
        let mut engine = engine(3);
        engine.strobe(Color::new(1, 2, 3), 0, 50);
        assert!(engine.strip().frames().is_empty());
        assert!(engine.delay.delays.is_empty());
    }
}
