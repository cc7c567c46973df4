//! RNG module - seeded piece generation
//!
//! Pieces are drawn either independently and uniformly (the default) or from
//! a shuffled bag of seven. Both modes run on a small seeded LCG so a run is
//! reproducible from its seed.

use crate::config::Randomizer;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Piece kind source for a run
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    mode: Randomizer,
    rng: SimpleRng,
    bag: [PieceKind; 7],
    /// Index into current bag; 7 means empty
    bag_index: usize,
}

impl PieceGenerator {
    pub fn new(mode: Randomizer, seed: u32) -> Self {
        Self {
            mode,
            rng: SimpleRng::new(seed),
            bag: PieceKind::ALL,
            bag_index: PieceKind::ALL.len(),
        }
    }

    pub fn mode(&self) -> Randomizer {
        self.mode
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self.mode {
            Randomizer::Uniform => {
                let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            Randomizer::SevenBag => {
                if self.bag_index >= self.bag.len() {
                    self.refill_bag();
                }
                let piece = self.bag[self.bag_index];
                self.bag_index += 1;
                piece
            }
        }
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_covers_all_kinds() {
        let mut gen = PieceGenerator::new(Randomizer::Uniform, 42);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = gen.draw();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }
        // Loose bounds: every kind should land near 1000
        for (i, &c) in counts.iter().enumerate() {
            assert!((700..1300).contains(&c), "{:?} drawn {} times", PieceKind::ALL[i], c);
        }
    }

    #[test]
    fn test_seven_bag_draws_all_seven() {
        let mut gen = PieceGenerator::new(Randomizer::SevenBag, 1);

        for _ in 0..3 {
            let mut drawn: Vec<PieceKind> = (0..7).map(|_| gen.draw()).collect();
            drawn.sort_by_key(|k| k.as_str());
            let mut all = PieceKind::ALL.to_vec();
            all.sort_by_key(|k| k.as_str());
            assert_eq!(drawn, all);
        }
    }

    #[test]
    fn test_generators_are_reproducible() {
        for mode in [Randomizer::Uniform, Randomizer::SevenBag] {
            let mut a = PieceGenerator::new(mode, 9);
            let mut b = PieceGenerator::new(mode, 9);
            for _ in 0..50 {
                assert_eq!(a.draw(), b.draw());
            }
            assert_eq!(a.mode(), mode);
        }
    }
}
