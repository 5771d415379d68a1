use crate::clock::Delay;
use crate::color::{dimmed, Color, BLACK};
use crate::engine::EffectEngine;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::strip::PixelStrip;

/// The eye spans `eye_size + 2` pixels, so the strip must be longer than
/// that for the forward pass to have any positions at all. Returns the last
/// head position.
pub fn check_eye_fits(pixel_count: usize, eye_size: usize) -> Result<usize> {
    if eye_size >= pixel_count.saturating_sub(2) {
        return Err(Error::OutOfRange {
            what: "eye size",
            value: eye_size,
            limit: pixel_count.saturating_sub(3),
        });
    }
    Ok(pixel_count - eye_size - 2)
}

/// Scan head positions for one bounce: `0..last` forward, then `last` down to 1.
pub fn eye_positions(pixel_count: usize, eye_size: usize) -> Result<(Vec<usize>, Vec<usize>)> {
    let last = check_eye_fits(pixel_count, eye_size)?;
    let forward = (0..last).collect();
    let backward = (1..=last).rev().collect();
    Ok((forward, backward))
}

/// Pixels of an eye whose dim leading edge sits at `head`.
pub fn eye_pixels(
    head: usize,
    eye_size: usize,
    color: Color,
) -> impl Iterator<Item = (usize, Color)> {
    let edge = dimmed(color);
    std::iter::once((head, edge))
        .chain((1..=eye_size).map(move |j| (head + j, color)))
        .chain(std::iter::once((head + eye_size + 1, edge)))
}

/// The complete frame for one head position.
pub fn eye_frame(pixel_count: usize, head: usize, eye_size: usize, color: Color) -> Vec<Color> {
    let mut frame = vec![BLACK; pixel_count];
    for (i, c) in eye_pixels(head, eye_size, color) {
        if let Some(pixel) = frame.get_mut(i) {
            *pixel = c;
        }
    }
    frame
}

impl<S: PixelStrip, D: Delay, R: RandomSource> EffectEngine<S, D, R> {
    /// Sweeps an eye of `eye_size` pixels with dim edges to the end of the
    /// strip and back, pausing `return_delay` at each end.
    pub fn cylon_bounce(
        &mut self,
        color: Color,
        eye_size: usize,
        speed_delay: u32,
        return_delay: u32,
    ) -> Result<()> {
        let (forward, backward) = eye_positions(self.state.pixel_count, eye_size)?;

        for head in forward {
            self.draw_eye(head, eye_size, color, speed_delay);
        }
        self.delay.delay_ms(return_delay);

        for head in backward {
            self.draw_eye(head, eye_size, color, speed_delay);
        }
        self.delay.delay_ms(return_delay);
        Ok(())
    }

    fn draw_eye(&mut self, head: usize, eye_size: usize, color: Color, speed_delay: u32) {
        self.set_all_val(BLACK);
        for (i, c) in eye_pixels(head, eye_size, color) {
            self.strip.set_pixel_color(i, c);
        }
        self.show_and_wait(speed_delay);
    }
}
