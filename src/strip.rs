use std::fmt::Write as _;
use std::io::{self, Stdout, Write};

use crate::color::{Color, BLACK};

/// The pixel driver. It owns the buffer; effects only write through it.
pub trait PixelStrip {
    /// One-time hardware setup.
    fn begin(&mut self) {}

    /// Writes one pixel into the buffer. Indices outside `0..num_pixels()`
    /// are ignored.
    fn set_pixel_color(&mut self, index: usize, color: Color);

    /// Pushes the whole buffer out to the LEDs.
    fn show(&mut self);

    fn num_pixels(&self) -> usize;
}

impl<P: PixelStrip + ?Sized> PixelStrip for Box<P> {
    fn begin(&mut self) {
        (**self).begin()
    }

    fn set_pixel_color(&mut self, index: usize, color: Color) {
        (**self).set_pixel_color(index, color)
    }

    fn show(&mut self) {
        (**self).show()
    }

    fn num_pixels(&self) -> usize {
        (**self).num_pixels()
    }
}

/// Keeps the buffer in memory and remembers every flushed frame.
pub struct MemoryStrip {
    buffer: Vec<Color>,
    frames: Vec<Vec<Color>>,
    record: bool,
    flushes: usize,
}

impl MemoryStrip {
    pub fn new(pixel_count: usize) -> MemoryStrip {
        MemoryStrip {
            buffer: vec![BLACK; pixel_count],
            frames: vec![],
            record: true,
            flushes: 0,
        }
    }

    /// A strip that only counts flushes instead of storing them.
    pub fn without_history(pixel_count: usize) -> MemoryStrip {
        MemoryStrip {
            record: false,
            ..MemoryStrip::new(pixel_count)
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.buffer
    }

    pub fn frames(&self) -> &[Vec<Color>] {
        &self.frames
    }

    /// Number of `show` calls so far, recorded or not.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn last_frame(&self) -> Option<&[Color]> {
        self.frames.last().map(|frame| frame.as_slice())
    }

    pub fn clear_history(&mut self) {
        self.frames.clear();
    }
}

impl PixelStrip for MemoryStrip {
    fn set_pixel_color(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.buffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.flushes += 1;
        if self.record {
            self.frames.push(self.buffer.clone());
        }
    }

    fn num_pixels(&self) -> usize {
        self.buffer.len()
    }
}

/// Draws each flush as one line of 24 bit colour cells, redrawn in place.
pub struct TerminalStrip {
    out: Stdout,
    buffer: Vec<Color>,
    line: String,
}

impl TerminalStrip {
    pub fn new(pixel_count: usize) -> TerminalStrip {
        TerminalStrip {
            out: io::stdout(),
            buffer: vec![BLACK; pixel_count],
            line: String::with_capacity(pixel_count * 24),
        }
    }

    fn render_line(&mut self) {
        self.line.clear();
        self.line.push('\r');
        for pixel in &self.buffer {
            // Writing into a String cannot fail.
            let _ = write!(
                self.line,
                "\x1b[48;2;{};{};{}m  ",
                pixel.red, pixel.green, pixel.blue
            );
        }
        self.line.push_str("\x1b[0m");
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.render_line();
        let mut out = self.out.lock();
        out.write_all(self.line.as_bytes())?;
        out.flush()
    }
}

impl PixelStrip for TerminalStrip {
    fn begin(&mut self) {
        log::debug!("Terminal strip with {} pixels", self.buffer.len());
    }

    fn set_pixel_color(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.buffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        if let Err(err) = self.write_line() {
            log::warn!("Failed to draw strip: {err}");
        }
    }

    fn num_pixels(&self) -> usize {
        self.buffer.len()
    }
}

impl Drop for TerminalStrip {
    fn drop(&mut self) {
        // Leave the cursor on a fresh line.
        let _ = writeln!(self.out);
    }
}
