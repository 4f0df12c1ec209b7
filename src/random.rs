use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the jitter drawn by the simulator and the alert rotator.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform draw centred on zero spanning `(-half_width, +half_width)`.
    fn uniform(&mut self, half_width: f64) -> f64 {
        (self.next_f64() - 0.5) * 2.0 * half_width
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }
}

pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[cfg(test)]
pub struct Scripted {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self { values, pos: 0 }
    }

    /// Every draw lands on the midpoint, so every `uniform` delta is zero.
    pub fn still() -> Self {
        Self::new(vec![0.5])
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_spans_half_width() {
        let mut rng = Scripted::new(vec![0.0, 0.5, 0.75]);
        assert_eq!(rng.uniform(2.0), -2.0);
        assert_eq!(rng.uniform(2.0), 0.0);
        assert_eq!(rng.uniform(2.0), 1.0);
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut rng = Scripted::new(vec![0.0, 0.5, 0.999_999]);
        assert_eq!(rng.index(6), 0);
        assert_eq!(rng.index(6), 3);
        assert_eq!(rng.index(6), 5);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::new(Some(7));
        let mut b = SeededRandom::new(Some(7));
        for _ in 0..16 {
            let x = a.next_f64();
            assert_eq!(x, b.next_f64());
            assert!((0.0..1.0).contains(&x));
        }
    }
}
