use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Источник случайности для генератора раздач.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Случайное число в `[low, high]` включительно.
    fn range_inclusive(&mut self, low: u64, high: u64) -> u64;

    /// `true` с вероятностью `percent` из 100.
    fn chance(&mut self, percent: u8) -> bool {
        self.range_inclusive(0, 99) < u64::from(percent)
    }
}

/// Системный RNG (thread_rng) – для разовых прогонов.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }

    fn range_inclusive(&mut self, low: u64, high: u64) -> u64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Один и тот же seed даёт одни и те же раздачи.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn range_inclusive(&mut self, low: u64, high: u64) -> u64 {
        self.inner.gen_range(low..=high)
    }
}
