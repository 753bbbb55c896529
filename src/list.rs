use crossbeam_utils::CachePadded;

use super::{
  node::Tower,
  sync::{AtomicUsize, Ordering},
  Ascend, Builder, Comparator, ConfigError, Geometric, Height, LevelGenerator, Options,
};

mod insert;
mod iterator;
pub use iterator::Iter;
mod search;


/// A lock-free, insert-only concurrent skiplist.
///
/// Items are immutable once added and can never be removed or replaced, so a reference
/// returned by [`get`](SkipList::get) stays valid for as long as the skiplist lives.
/// The skiplist never holds two items which the comparator considers equal.
///
/// Any number of threads may call [`insert`](SkipList::insert) and [`get`](SkipList::get)
/// through a shared reference. Lookups never block or retry, insertions link a node one level
/// at a time with compare-and-swap and only retry the level they are working on.
pub struct SkipList<T, C = Ascend, G = Geometric> {
  head: Tower<T>,
  max_level: Height,

  /// Tallest tower linked so far. 1 <= height <= max_level. CAS.
  height: CachePadded<AtomicUsize>,
  len: CachePadded<AtomicUsize>,

  /// If set to true by tests, then extra delays are added to make it easier to
  /// detect unusual race conditions.
  #[cfg(test)]
  testing: bool,

  cmp: C,
  generator: G,
}

// Safety: items are moved in by one thread, shared by reference with all of them and
// dropped by whichever thread drops the skiplist. Links are only touched atomically.
unsafe impl<T: Send, C: Send, G: Send> Send for SkipList<T, C, G> {}
unsafe impl<T: Send + Sync, C: Sync, G: Sync> Sync for SkipList<T, C, G> {}

impl<T> SkipList<T> {
  /// Creates an empty skiplist with `max_level` levels, ordered by [`Ord`].
  ///
  /// ## Errors
  ///
  /// - Returns `ConfigError::InvalidMaxLevel`, if `max_level` is not in `1..=21`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::{ConfigError, SkipList};
  ///
  /// assert!(SkipList::<u64>::new(4).is_ok());
  /// assert_eq!(SkipList::<u64>::new(22).unwrap_err(), ConfigError::InvalidMaxLevel(22));
  /// ```
  pub fn new(max_level: u8) -> Result<Self, ConfigError> {
    Height::try_from(max_level).map(|h| Self::construct(h, Ascend, Geometric))
  }

  /// Creates an empty skiplist with the given [`Options`], ordered by [`Ord`].
  #[inline]
  pub fn with_options(opts: Options) -> Self {
    Builder::new().with_options(opts).build()
  }
}

impl<T, C, G> SkipList<T, C, G> {
  pub(crate) fn construct(max_level: Height, cmp: C, generator: G) -> Self {
    Self {
      head: Tower::new(max_level.get()),
      max_level,
      height: CachePadded::new(AtomicUsize::new(1)),
      len: CachePadded::new(AtomicUsize::new(0)),
      #[cfg(test)]
      testing: false,
      cmp,
      generator,
    }
  }

  /// Returns the number of levels of the skiplist.
  #[inline]
  pub const fn max_level(&self) -> Height {
    self.max_level
  }

  /// Returns the height of the tallest tower linked so far.
  #[inline]
  pub fn height(&self) -> Height {
    Height::new_unchecked(self.height.load(Ordering::Acquire))
  }

  /// Returns the number of items in the skiplist.
  ///
  /// Concurrent insertions which already returned `Ok(())` are always counted.
  #[inline]
  pub fn len(&self) -> usize {
    self.len.load(Ordering::Acquire)
  }

  /// Returns true if the skiplist is empty.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the comparator of the skiplist.
  #[inline]
  pub const fn comparator(&self) -> &C {
    &self.cmp
  }

  /// Returns an iterator over the items in ascending order.
  ///
  /// The iterator walks the base level while other threads may be inserting, so it is not a
  /// snapshot: items linked ahead of its position are seen, items linked behind it are not.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    // Safety: the head belongs to this skiplist, which outlives the returned iterator.
    Iter::new(unsafe { self.head.next(0) })
  }

  /// Raises the recorded height to `height` if it is taller.
  fn raise_height(&self, height: usize) {
    let mut list_height = self.height.load(Ordering::Acquire);
    while height > list_height {
      match self.height.compare_exchange_weak(
        list_height,
        height,
        Ordering::SeqCst,
        Ordering::Acquire,
      ) {
        Ok(_) => {
          #[cfg(feature = "tracing")]
          tracing::debug!(from = list_height, to = height, "skiplist height raised");
          break;
        }
        Err(h) => list_height = h,
      }
    }
  }
}

impl<T, C, G> SkipList<T, C, G>
where
  C: Comparator<T>,
  G: LevelGenerator,
{
  /// Returns the item equal to `item`, if it exists.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::SkipList;
  ///
  /// let l = SkipList::new(4).unwrap();
  /// l.insert(3u64).unwrap();
  /// assert_eq!(l.get(&3), Some(&3));
  /// assert_eq!(l.get(&9), None);
  /// ```
  pub fn get(&self, item: &T) -> Option<&T> {
    let mut prev = &self.head;

    for level in (0..self.height().get()).rev() {
      // Safety: `prev` is the head or a node reached from it, nodes live as long as self.
      let mut next = unsafe { prev.next(level) };
      while let Some(nd) = next {
        if self.cmp.less(nd.item(), item) {
          prev = nd.tower();
          next = unsafe { prev.next(level) };
          continue;
        }

        // Linked at this level means linked at the base level as well.
        if !self.cmp.less(item, nd.item()) {
          return Some(nd.item());
        }
        break;
      }
    }

    None
  }

  /// Returns true if an item equal to `item` exists.
  #[inline]
  pub fn contains(&self, item: &T) -> bool {
    self.get(item).is_some()
  }

  #[inline]
  fn random_height(&self) -> usize {
    self
      .generator
      .random_height(self.max_level)
      .min(self.max_level)
      .get()
  }
}

impl<T, C, G> Drop for SkipList<T, C, G> {
  fn drop(&mut self) {
    let mut curr = self.head.next_mut(0);
    while !curr.is_null() {
      // Safety: every node was allocated by `Box` and is reachable exactly once on the base
      // level. Nodes which never reached the base level were freed by their inserter.
      let mut nd = unsafe { Box::from_raw(curr) };
      curr = nd.tower_mut().next_mut(0);
    }
  }
}

impl<T: core::fmt::Debug, C, G> core::fmt::Debug for SkipList<T, C, G> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

impl<'a, T, C, G> IntoIterator for &'a SkipList<T, C, G> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
