use cskl::SkipList;
use integration::{assert_ordered, insert_random};
use std::sync::Arc;

fn main() {
  // 4 writers, heavy collisions
  {
    let l = Arc::new(SkipList::new(8).unwrap());
    let inserted = insert_random(&l, 4, 10_000, 10_000);
    assert_ordered(&l, &inserted);
  }

  // a plain sorted list
  {
    let l = Arc::new(SkipList::new(1).unwrap());
    let inserted = insert_random(&l, 4, 2_000, 2_000);
    assert_ordered(&l, &inserted);
  }

  // many writers, few keys
  {
    let l = Arc::new(SkipList::new(21).unwrap());
    let inserted = insert_random(&l, 16, 1_000, 64);
    assert_ordered(&l, &inserted);
  }
}
