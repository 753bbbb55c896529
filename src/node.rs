use core::ptr;

use super::sync::{AtomicMut, AtomicPtr, Ordering};

/// The successor links of a node, one per level, fixed in length at construction.
///
/// The head of a skiplist is a bare tower, data nodes pair a tower with an item.
#[derive(Debug)]
pub(crate) struct Tower<T> {
  links: Box<[AtomicPtr<Node<T>>]>,
}

impl<T> Tower<T> {
  #[inline]
  pub(crate) fn new(height: usize) -> Self {
    Self {
      links: (0..height)
        .map(|_| AtomicPtr::new(ptr::null_mut()))
        .collect(),
    }
  }

  #[cfg(test)]
  #[inline]
  pub(crate) fn height(&self) -> usize {
    self.links.len()
  }

  /// Returns the raw successor at `level`.
  #[inline]
  pub(crate) fn load(&self, level: usize) -> *mut Node<T> {
    self.links[level].load(Ordering::Acquire)
  }

  /// Returns the successor at `level`.
  ///
  /// ## Safety
  /// - The tower must belong to a live skiplist (its head or one of its linked nodes),
  ///   and that skiplist must outlive `'a`.
  #[inline]
  pub(crate) unsafe fn next<'a>(&'a self, level: usize) -> Option<&'a Node<T>> {
    self.load(level).as_ref()
  }

  /// Sets the successor of a node that is not reachable at `level` yet.
  ///
  /// The write is published by the CAS which links the node at `level`.
  #[inline]
  pub(crate) fn init(&self, level: usize, next: *mut Node<T>) {
    self.links[level].store(next, Ordering::Relaxed);
  }

  /// Swings the successor at `level` from `current` to `new`.
  ///
  /// On failure, returns the successor which is there now.
  #[inline]
  pub(crate) fn compare_exchange(
    &self,
    level: usize,
    current: *mut Node<T>,
    new: *mut Node<T>,
  ) -> Result<*mut Node<T>, *mut Node<T>> {
    self.links[level].compare_exchange_weak(current, new, Ordering::SeqCst, Ordering::Acquire)
  }

  /// Returns the successor at `level` through exclusive access.
  #[inline]
  pub(crate) fn next_mut(&mut self, level: usize) -> *mut Node<T> {
    self.links[level].with_mut(|p| *p)
  }
}

/// A data node. The item never changes once the node is constructed.
#[derive(Debug)]
pub(crate) struct Node<T> {
  item: T,
  tower: Tower<T>,
}

impl<T> Node<T> {
  #[inline]
  pub(crate) fn new(item: T, height: usize) -> Self {
    Self {
      item,
      tower: Tower::new(height),
    }
  }

  #[inline]
  pub(crate) const fn item(&self) -> &T {
    &self.item
  }

  #[inline]
  pub(crate) const fn tower(&self) -> &Tower<T> {
    &self.tower
  }

  #[inline]
  pub(crate) fn tower_mut(&mut self) -> &mut Tower<T> {
    &mut self.tower
  }
}

#[cfg(all(test, not(loom)))]
mod tests {
  use super::*;

  #[test]
  fn test_tower_links() {
    let head = Tower::<u32>::new(3);
    assert_eq!(head.height(), 3);
    for i in 0..3 {
      assert!(head.load(i).is_null());
    }

    let nd = Box::into_raw(Box::new(Node::new(7u32, 2)));
    // weak CAS, may fail spuriously
    while head.compare_exchange(0, ptr::null_mut(), nd).is_err() {}

    // Safety: the head belongs to this test and nd is alive until the end of it.
    let next = unsafe { head.next(0) }.unwrap();
    assert_eq!(*next.item(), 7);
    assert_eq!(next.tower().height(), 2);

    assert_eq!(head.compare_exchange(0, ptr::null_mut(), nd), Err(nd));

    // Safety: nd was allocated above and is only referenced by the head.
    drop(unsafe { Box::from_raw(nd) });
  }
}
