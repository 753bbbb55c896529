use cskl::SkipList;
use std::sync::Arc;

pub fn key(i: usize) -> String {
  format!("{:05}", i)
}

fn main() {
  const N: usize = 1000;

  let l = Arc::new(SkipList::new(12).unwrap());

  for i in 0..N {
    let l = l.clone();
    std::thread::spawn(move || {
      l.insert(key(i)).unwrap();
    });
  }

  while Arc::strong_count(&l) > 1 {}

  for i in 0..N {
    let l = l.clone();
    std::thread::spawn(move || {
      let k = key(i);
      assert_eq!(l.get(&k), Some(&k), "broken: {i}");
    });
  }

  while Arc::strong_count(&l) > 1 {}

  assert_eq!(l.len(), N);
  println!("{} items, height {}", l.len(), l.height());
}
