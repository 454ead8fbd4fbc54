//! Injectable randomness for shuffling and group naming.

use uuid::Uuid;

/// Source of random numbers used by the formation engine.
pub trait RandomSource {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    ///
    /// Values from the biased tail of the `u64` range are rejected so every
    /// index is equally likely.
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index called with empty range");
        let bound = bound as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next_u64();
            if value < zone {
                return (value % bound) as usize;
            }
        }
    }
}

/// xorshift64 generator. Deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seeded from a v4 UUID, i.e. the OS entropy source.
    pub fn from_entropy() -> Self {
        let (hi, lo) = Uuid::new_v4().as_u64_pair();
        Self::new(hi ^ lo)
    }
}

impl RandomSource for Xorshift64 {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

pub const ADJECTIVES: [&str; 10] = [
    "Quantum", "Async", "Binary", "Cosmic", "Digital", "Epic", "Fuzzy", "Galactic", "Hyper",
    "Infinite",
];

pub const ANIMALS: [&str; 10] = [
    "Koalas", "Otters", "Pandas", "Dragons", "Foxes", "Wolves", "Eagles", "Tigers", "Lions",
    "Bears",
];

/// Two-word cosmetic group name. Collisions are possible and left alone.
pub fn group_name(rng: &mut dyn RandomSource) -> String {
    let adjective = ADJECTIVES[rng.next_index(ADJECTIVES.len())];
    let animal = ANIMALS[rng.next_index(ANIMALS.len())];
    format!("{adjective} {animal}")
}
