use std::collections::VecDeque;

use crate::clock::Delay;
use crate::random::RandomSource;

/// Remembers every requested delay instead of sleeping.
#[derive(Default)]
pub(crate) struct RecordingDelay {
    pub(crate) delays: Vec<u32>,
}

impl Delay for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}

/// Replays queued values, falling back to `min` once the queue is empty.
/// Queued values are clamped into the requested range.
#[derive(Default)]
pub(crate) struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    pub(crate) fn new(values: &[u32]) -> ScriptedRandom {
        ScriptedRandom {
            values: values.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn random(&mut self, min: u32, max: u32) -> u32 {
        match self.values.pop_front() {
            Some(v) if max > min => v.clamp(min, max - 1),
            _ => min,
        }
    }
}
