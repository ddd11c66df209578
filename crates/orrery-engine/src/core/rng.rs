//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic so a fixed seed reproduces the same orbital phases.

use std::f64::consts::TAU;

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1). Uses the top 53 bits so the result is exact in f64.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform orbital phase in [0, 2π).
    pub fn next_angle(&mut self) -> f64 {
        let angle = self.next_f64() * TAU;
        // Rounding can land exactly on TAU.
        if angle >= TAU { 0.0 } else { angle }
    }

    /// Uniform in [-half, half).
    pub fn next_centered(&mut self, half: f32) -> f32 {
        ((self.next_f64() - 0.5) * 2.0 * half as f64) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_angle(), rng2.next_angle());
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn angles_stay_in_range() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let a = rng.next_angle();
            assert!((0.0..TAU).contains(&a), "angle {a} out of range");
        }
    }

    #[test]
    fn centered_values_stay_in_range() {
        let mut rng = Rng::new(99);
        for _ in 0..1000 {
            let v = rng.next_centered(200.0);
            assert!((-200.0..=200.0).contains(&v), "value {v} out of range");
        }
    }
}
