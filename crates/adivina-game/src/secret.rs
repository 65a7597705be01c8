//! Where secret numbers come from.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws a secret for a new session.
///
/// Implementations must return a value in `min..=max`; the game clamps
/// anything else.
pub trait SecretSource: Send + 'static {
    fn draw(&mut self, min: i32, max: i32) -> i32;
}

impl SecretSource for Box<dyn SecretSource> {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        (**self).draw(min, max)
    }
}

/// Uniform draw from the thread-local RNG. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSecret;

impl SecretSource for RandomSecret {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        rand::rng().random_range(min..=max)
    }
}

/// Uniform draw from a seeded RNG, so a run can be reproduced.
#[derive(Debug, Clone)]
pub struct SeededSecret {
    rng: StdRng,
}

impl SeededSecret {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SecretSource for SeededSecret {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}

/// Always the same secret (clamped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedSecret(pub i32);

impl SecretSource for FixedSecret {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        self.0.clamp(min, max)
    }
}

/// Secrets taken from a list, one per session. Once the list runs out
/// the last secret repeats.
#[derive(Debug, Clone)]
pub struct ScriptedSecret {
    queue: VecDeque<i32>,
    last: i32,
}

impl ScriptedSecret {
    pub fn new(secrets: impl IntoIterator<Item = i32>) -> Self {
        Self {
            queue: secrets.into_iter().collect(),
            last: 0,
        }
    }
}

impl SecretSource for ScriptedSecret {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_stays_in_range() {
        let mut source = RandomSecret;
        for _ in 0..1_000 {
            let n = source.draw(3, 9);
            assert!((3..=9).contains(&n));
        }
    }

    #[test]
    fn test_random_secret_single_value_range() {
        assert_eq!(RandomSecret.draw(7, 7), 7);
    }

    #[test]
    fn test_seeded_secret_is_reproducible() {
        let mut a = SeededSecret::new(1234);
        let mut b = SeededSecret::new(1234);
        let xs: Vec<i32> = (0..20).map(|_| a.draw(0, 100)).collect();
        let ys: Vec<i32> = (0..20).map(|_| b.draw(0, 100)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|n| (0..=100).contains(n)));
    }

    #[test]
    fn test_fixed_secret_clamps() {
        assert_eq!(FixedSecret(42).draw(0, 100), 42);
        assert_eq!(FixedSecret(420).draw(0, 100), 100);
    }

    #[test]
    fn test_scripted_secret_repeats_last() {
        let mut source = ScriptedSecret::new([10, 20]);
        assert_eq!(source.draw(0, 100), 10);
        assert_eq!(source.draw(0, 100), 20);
        assert_eq!(source.draw(0, 100), 20);
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut source: Box<dyn SecretSource> = Box::new(FixedSecret(5));
        assert_eq!(source.draw(0, 10), 5);
    }
}
