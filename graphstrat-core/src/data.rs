//! Size hints, splittable seeds, and runner configuration.

use std::fmt;

/// Size parameter for controlling how large a drawn example should be.
///
/// Ranges from 0 to 100. Larger sizes push the sampled component count and
/// node total further above their constraint floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(pub usize);

impl Size {
    /// Create a new size value.
    pub fn new(value: usize) -> Self {
        Size(value)
    }

    /// Get the inner size value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Scale size by a factor.
    pub fn scale(&self, factor: f64) -> Self {
        Size((self.0 as f64 * factor) as usize)
    }

    /// Clamp size to a maximum value.
    pub fn clamp(&self, max: usize) -> Self {
        Size(self.0.min(max))
    }

    /// The fraction of the full size range this size occupies, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        (self.0.min(100) as f64) / 100.0
    }
}

impl From<usize> for Size {
    fn from(value: usize) -> Self {
        Size(value)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size({})", self.0)
    }
}

/// Splittable random seed for deterministic graph generation.
///
/// Seeds can be split to create independent random streams, so a draw is a
/// pure function of its seed: the same seed and constraint set always
/// reproduce the same partition and the same graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// Create a new seed from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        Seed(state, gamma)
    }

    /// Split a seed into two independent seeds.
    /// Uses the SplitMix64 splitting strategy for independence.
    pub fn split(self) -> (Self, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        let new_gamma = mix_gamma(output);

        (Seed(new_state, gamma), Seed(output, new_gamma))
    }

    /// Generate the next random value and advance the seed.
    pub fn next_u64(self) -> (u64, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        (output, Seed(new_state, gamma))
    }

    /// Generate a bounded random value in `[0, bound)`.
    pub fn next_bounded(self, bound: u64) -> (u64, Self) {
        let (value, new_seed) = self.next_u64();
        ((value as u128 * bound as u128 >> 64) as u64, new_seed)
    }

    /// Generate a random value in the inclusive range `[lo, hi]`.
    pub fn next_range(self, lo: u64, hi: u64) -> (u64, Self) {
        debug_assert!(lo <= hi);
        let (offset, new_seed) = self.next_bounded(hi - lo + 1);
        (lo + offset, new_seed)
    }

    /// Generate a random bool.
    pub fn next_bool(self) -> (bool, Self) {
        let (value, new_seed) = self.next_u64();
        (value & 1 == 1, new_seed)
    }

    /// Generate a random seed from OS entropy.
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        Seed(rng.gen(), rng.gen())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({}, {})", self.0, self.1)
    }
}

/// Configuration for running a property over generated graphs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of tests to run.
    pub test_limit: usize,

    /// Maximum number of shrink candidates to try on failure.
    pub shrink_limit: usize,

    /// Maximum size parameter to use.
    pub size_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            test_limit: 100,
            shrink_limit: 1000,
            size_limit: 100,
        }
    }
}

impl Config {
    /// Create a new config with the given number of tests.
    pub fn with_tests(mut self, tests: usize) -> Self {
        self.test_limit = tests;
        self
    }

    /// Create a new config with the given shrink limit.
    pub fn with_shrinks(mut self, shrinks: usize) -> Self {
        self.shrink_limit = shrinks;
        self
    }

    /// Create a new config with the given size limit.
    pub fn with_size_limit(mut self, size: usize) -> Self {
        self.size_limit = size;
        self
    }
}

/// SplitMix64 mixing function for high-quality output.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Generate a good gamma value for SplitMix64 splitting.
fn mix_gamma(mut z: u64) -> u64 {
    z = splitmix64_mix(z);
    // Gamma must be odd for maximal period
    (z | 1).wrapping_mul(0x9e3779b97f4a7c15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        let a = Seed::from_u64(42);
        let b = Seed::from_u64(42);
        assert_eq!(a.next_u64().0, b.next_u64().0);
        assert_eq!(a.split(), b.split());
    }

    #[test]
    fn test_split_produces_independent_streams() {
        let (left, right) = Seed::from_u64(7).split();
        assert_ne!(left, right);
        assert_ne!(left.next_u64().0, right.next_u64().0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut seed = Seed::from_u64(99);
        for _ in 0..1000 {
            let (value, next) = seed.next_range(3, 9);
            assert!((3..=9).contains(&value));
            seed = next;
        }
    }

    #[test]
    fn test_size_fraction() {
        assert_eq!(Size::new(0).fraction(), 0.0);
        assert_eq!(Size::new(100).fraction(), 1.0);
        assert_eq!(Size::new(250).fraction(), 1.0);
        assert_eq!(Size::new(50).fraction(), 0.5);
    }
}
