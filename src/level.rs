use super::{Height, MAX_LEVEL_LIMIT};

/// The probability that a tower of height `h` grows to `h + 1`, inverse of Euler's number.
pub const P: f64 = 1.0 / core::f64::consts::E;

/// Precompute the skiplist probabilities so that only a single random number
/// needs to be generated per new node and so that the optimal pvalue can be used (inverse
/// of Euler's number).
///
/// `PROBABILITIES[i]` is `u32::MAX * P^i`.
pub const PROBABILITIES: [u32; MAX_LEVEL_LIMIT] = {
  let mut probabilities = [0; MAX_LEVEL_LIMIT];
  let mut p = 1f64;

  let mut i = 0;
  while i < MAX_LEVEL_LIMIT {
    probabilities[i] = ((u32::MAX as f64) * p) as u32;
    p *= P;
    i += 1;
  }

  probabilities
};

/// Upon the insertion of a new item, the node is replicated to higher
/// levels with a certain probability as determined by a `LevelGenerator`.
///
/// Generators are shared by every writer of a skiplist, so they take `&self`
/// and should not serialize callers on a lock.
pub trait LevelGenerator {
  /// Returns the tower height of a new node, in `1..=max`.
  ///
  /// The skiplist clamps results above `max`.
  fn random_height(&self, max: Height) -> Height;
}

impl<F> LevelGenerator for F
where
  F: Fn(Height) -> Height,
{
  #[inline]
  fn random_height(&self, max: Height) -> Height {
    self(max)
  }
}

/// The default generator, heights follow a geometric distribution truncated at the max level:
/// a height is at least `h` with probability `P^(h - 1)`.
///
/// Each thread draws from its own lazily seeded random stream, so concurrent writers never
/// contend on the generator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Geometric;

impl Geometric {
  /// Maps one uniformly distributed random number to a height in `1..=max`.
  #[inline]
  pub fn height_for(rnd: u32, max: Height) -> Height {
    let max = max.get();
    let mut h = 1;

    while h < max && rnd <= PROBABILITIES[h] {
      h += 1;
    }
    Height::new_unchecked(h)
  }
}

impl LevelGenerator for Geometric {
  #[inline]
  fn random_height(&self, max: Height) -> Height {
    use rand::Rng;

    let rnd: u32 = rand::rng().random();
    Self::height_for(rnd, max)
  }
}

/// A generator which always returns the same height, capped at the max level.
///
/// Mostly useful for tests and for building a plain sorted list with `Fixed(Height::MIN)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub Height);

impl LevelGenerator for Fixed {
  #[inline]
  fn random_height(&self, max: Height) -> Height {
    self.0.min(max)
  }
}
