use cskl::{Error, SkipList};

fn main() {
  let l = SkipList::new(4).unwrap();

  for k in [5u64, 1, 3] {
    l.insert(k).unwrap();
  }

  assert_eq!(l.get(&3), Some(&3));
  assert_eq!(l.get(&9), None);
  assert_eq!(l.insert(5), Err(Error::Duplicated));

  let items = l.iter().copied().collect::<Vec<_>>();
  assert_eq!(items, [1, 3, 5]);
  println!("{l:?}");
}
