//! Test helpers

use std::collections::VecDeque;

use rand_core::{RngCore, impls};

/// RNG that replays a fixed script of `next_u32` values and counts draws
pub(crate) struct ScriptedRng {
    script: VecDeque<u32>,
    draws: usize,
}

impl ScriptedRng {
    pub(crate) fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// RNG that panics on any draw
    pub(crate) fn exhausted() -> Self {
        Self::new(Vec::new())
    }

    pub(crate) fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.script.pop_front().expect("rng script exhausted")
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
