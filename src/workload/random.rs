use ordered_float::OrderedFloat;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` uniformly random keys in `0..=max`.
/// The same seed always produces the same sequence
pub struct RandomKeys {
    remaining: usize,
    max: u32,
    rng: Pcg64,
}

impl RandomKeys {
    pub fn new(num: usize, max: u32, seed: u64) -> RandomKeys {
        RandomKeys {
            remaining: num,
            max,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomKeys {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(0, self.max as u64 + 1) as u32)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomKeys {}

impl ExactSizeIterator for RandomKeys {}

/// An iterator that will generate `num` random floats in `[0, 1)`, wrapped so that
/// they have a total order
pub struct RandomFloats {
    remaining: usize,
    rng: Pcg64,
}

impl RandomFloats {
    pub fn new(num: usize, seed: u64) -> RandomFloats {
        RandomFloats {
            remaining: num,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomFloats {
    type Item = OrderedFloat<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(OrderedFloat(self.rng.gen()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomFloats {}

impl ExactSizeIterator for RandomFloats {}
