use core::iter::FusedIterator;

use crate::node::Node;

/// An iterator over the items of a [`SkipList`](super::SkipList), in ascending order.
///
/// Created by [`SkipList::iter`](super::SkipList::iter).
pub struct Iter<'a, T> {
  next: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
  #[inline]
  pub(super) const fn new(first: Option<&'a Node<T>>) -> Self {
    Self { next: first }
  }
}

impl<T> Clone for Iter<'_, T> {
  #[inline]
  fn clone(&self) -> Self {
    Self { next: self.next }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let nd = self.next?;
    // Safety: the iterator borrows the skiplist which owns every node reachable from `nd`.
    self.next = unsafe { nd.tower().next(0) };
    Some(nd.item())
  }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for Iter<'_, T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Iter")
      .field("next", &self.next.map(Node::item))
      .finish()
  }
}
