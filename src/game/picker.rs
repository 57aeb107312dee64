//! Selection sources for secret draws and hints
//!
//! A session never reaches for a global RNG; it asks its [`Picker`] for an
//! index instead, so tests can pin every choice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one index out of `len` options
pub trait Picker {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform selection backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPicker<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot pick from an empty list");
        self.rng.random_range(0..len)
    }
}

/// Always picks the first option
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_picker_always_zero() {
        let mut picker = FirstPicker;
        assert_eq!(picker.pick(1), 0);
        assert_eq!(picker.pick(100), 0);
    }

    #[test]
    fn random_picker_stays_in_range() {
        let mut picker = RandomPicker::seeded(7);
        for len in 1..50 {
            assert!(picker.pick(len) < len);
        }
    }

    #[test]
    fn seeded_pickers_are_reproducible() {
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);

        let first: Vec<usize> = (0..20).map(|_| a.pick(1000)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick(1000)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn picker_usable_through_mutable_reference() {
        fn pick_twice(mut picker: impl Picker) -> (usize, usize) {
            (picker.pick(3), picker.pick(3))
        }

        let mut picker = FirstPicker;
        assert_eq!(pick_twice(&mut picker), (0, 0));
    }
}
