use std::thread;
use std::time::{Duration, Instant};

/// Blocking wait between frames.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

/// Sleeps until a deadline measured from the previous tick, so time spent
/// rendering a frame counts towards its delay.
pub struct FrameClock {
    last_tick: Instant,
    thread_name: String,
    measure_fps: bool,
    last_fps_print: Instant,
    frames: u32,
}

impl FrameClock {
    pub fn new(measure_fps: bool) -> FrameClock {
        let cur_thread = thread::current();
        let thread_name = if let Some(name) = cur_thread.name() {
            name
        } else {
            "unnamed"
        };

        FrameClock {
            last_tick: Instant::now(),
            thread_name: thread_name.to_string(),
            measure_fps,
            last_fps_print: Instant::now(),
            frames: 0,
        }
    }

    fn update_fps(&mut self) {
        self.frames += 1;

        if Instant::now() - self.last_fps_print > Duration::from_secs(1) {
            log::info!("{} FPS: {}", self.thread_name, self.frames);
            self.frames = 0;
            self.last_fps_print = Instant::now();
        }
    }
}

impl Delay for FrameClock {
    fn delay_ms(&mut self, ms: u32) {
        if self.measure_fps {
            self.update_fps();
        }

        let interval = Duration::from_millis(ms as u64);
        let now = Instant::now();
        let next_tick = if self.last_tick + interval > now {
            self.last_tick + interval
        } else {
            if ms > 0 {
                log::trace!("Frame overran its {ms} ms delay");
            }
            now
        };

        thread::sleep(next_tick - now);
        self.last_tick = next_tick;
    }
}

/// Never waits. For rendering frames as fast as possible.
pub struct NoDelay;

impl Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}
