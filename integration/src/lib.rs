use cskl::{Comparator, Error, LevelGenerator, SkipList};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::{sync::Arc, thread};

/// Only used for testing
pub fn key(i: usize) -> String {
  format!("{:05}", i)
}

/// Inserts `per_writer` random keys in `0..range` from `writers` threads at once.
///
/// Returns every key whose insertion succeeded, sorted.
pub fn insert_random<C, G>(
  l: &Arc<SkipList<u64, C, G>>,
  writers: usize,
  per_writer: usize,
  range: u64,
) -> Vec<u64>
where
  C: Comparator<u64> + Send + Sync + 'static,
  G: LevelGenerator + Send + Sync + 'static,
{
  let handles = (0..writers)
    .map(|_| {
      let l = l.clone();
      thread::spawn(move || {
        let mut rng = SmallRng::from_rng(&mut rand::rng());
        let mut inserted = Vec::new();
        for _ in 0..per_writer {
          let k = rng.random_range(0..range);
          match l.insert(k) {
            Ok(()) => inserted.push(k),
            Err(Error::Duplicated) | Err(Error::Conflict { linked: false }) => {}
            Err(e) => panic!("unexpected error: {e}"),
          }
        }
        inserted
      })
    })
    .collect::<Vec<_>>();

  let mut inserted = handles
    .into_iter()
    .flat_map(|h| h.join().unwrap())
    .collect::<Vec<_>>();
  inserted.sort_unstable();
  inserted
}

/// Checks that the base level is strictly increasing and holds exactly `expected`.
pub fn assert_ordered<C, G>(l: &SkipList<u64, C, G>, expected: &[u64])
where
  C: Comparator<u64>,
  G: LevelGenerator,
{
  let items = l.iter().copied().collect::<Vec<_>>();
  for w in items.windows(2) {
    assert!(w[0] < w[1], "broken order: {} then {}", w[0], w[1]);
  }
  assert_eq!(items, expected, "items differ from successful inserts");
  assert_eq!(l.len(), expected.len());
  for k in expected {
    assert_eq!(l.get(k), Some(k), "broken: {k}");
  }
}
