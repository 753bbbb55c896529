use cskl::SkipList;
use integration::key;
use std::{sync::Arc, thread};

fn main() {
  const N: usize = 10_000;

  let l = Arc::new(SkipList::new(12).unwrap());
  let writer = {
    let l = l.clone();
    thread::spawn(move || {
      for i in 0..N {
        l.insert(key(i)).unwrap();
      }
    })
  };

  let readers = (0..4)
    .map(|_| {
      let l = l.clone();
      thread::spawn(move || {
        let mut i = 0;
        while i < N {
          let k = key(i);
          match l.get(&k) {
            Some(v) => {
              assert_eq!(v, &k, "broken: {i}");
              i += 1;
            }
            None => thread::yield_now(),
          }
        }
      })
    })
    .collect::<Vec<_>>();

  writer.join().unwrap();
  for r in readers {
    r.join().unwrap();
  }
  assert_eq!(l.len(), N);
}
