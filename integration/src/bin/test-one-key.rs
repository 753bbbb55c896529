use cskl::SkipList;
use integration::key;
use std::{sync::Arc, thread};

fn main() {
  const ROUNDS: usize = 1000;
  const WRITERS: usize = 8;

  for _ in 0..ROUNDS {
    let l = Arc::new(SkipList::new(4).unwrap());
    let handles = (0..WRITERS)
      .map(|_| {
        let l = l.clone();
        thread::spawn(move || l.insert(key(42)))
      })
      .collect::<Vec<_>>();

    let wins = handles
      .into_iter()
      .map(|h| h.join().unwrap())
      .filter(|r| match r {
        Ok(()) => true,
        Err(e) => {
          assert!(e.is_duplicate(), "unexpected error: {e}");
          false
        }
      })
      .count();

    assert_eq!(wins, 1);
    assert_eq!(l.get(&key(42)), Some(&key(42)));
    assert_eq!(l.iter().count(), 1);
  }
}
