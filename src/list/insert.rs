use super::*;
use crate::{node::Node, Error};

impl<T, C, G> SkipList<T, C, G>
where
  C: Comparator<T>,
  G: LevelGenerator,
{
  /// Inserts `item` if no equal item exists yet. Returns `Ok(())` if the item was inserted.
  ///
  /// The item becomes visible to every thread the moment it is linked at the base level.
  /// As a low-level crate, users are expected to handle the error cases themselves.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::Duplicated`, if an equal item was found when searching for the position.
  /// - Returns `Error::Conflict`, if another thread linked an equal item while this call was
  ///   linking its own node.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::{Error, SkipList};
  ///
  /// let l = SkipList::new(4).unwrap();
  /// l.insert(5u64).unwrap();
  /// l.insert(1).unwrap();
  /// l.insert(3).unwrap();
  /// assert_eq!(l.insert(3), Err(Error::Duplicated));
  /// assert_eq!(l.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
  /// ```
  pub fn insert(&self, item: T) -> Result<(), Error> {
    let path = self.search_path(&item);

    // The candidate is not less than the item, so it is equal unless the item is less.
    if let Some(next) = path.next {
      if !self.cmp.less(&item, next.item()) {
        return Err(Error::Duplicated);
      }
    }

    #[cfg(test)]
    if self.testing {
      // Add delay to make it easier to test race between this thread
      // and another thread that sees the intermediate state between
      // finding the path and using it.
      std::thread::yield_now();
    }

    let height = self.random_height();
    let nd = Box::into_raw(Box::new(Node::new(item, height)));
    // Safety: nd was just allocated and is owned by this call until it is linked.
    let node = unsafe { &*nd };
    let item = node.item();

    // We always link from the base level up. Once the node is linked at the base
    // level it is reachable by everyone, the levels above only speed up searches.
    for level in 0..height {
      let mut prev = path.prevs[level];

      loop {
        let snapshot = prev.load(level);

        // Safety: the snapshot was loaded from a tower of this skiplist.
        if let Some(next) = unsafe { snapshot.as_ref() } {
          if !self.cmp.less(item, next.item()) {
            if !self.cmp.less(next.item(), item) {
              return Err(self.abort(nd, level));
            }

            // A smaller item was linked after prev since the search, move past it.
            prev = next.tower();
            continue;
          }
        }

        node.tower().init(level, snapshot);
        match prev.compare_exchange(level, snapshot, nd) {
          Ok(_) => break,
          Err(current) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(lvl = level, "link lost a race, retrying the level");

            // Safety: `current` was loaded from a tower of this skiplist.
            match unsafe { current.as_ref() } {
              Some(cur) if self.cmp.less(cur.item(), item) => prev = cur.tower(),
              Some(cur) if !self.cmp.less(item, cur.item()) => {
                return Err(self.abort(nd, level));
              }
              // A greater item, or a spurious failure. Retry with a fresh snapshot.
              _ => {}
            }
          }
        }
      }

      if level == 0 {
        self.len.fetch_add(1, Ordering::AcqRel);
        self.raise_height(height);
      }

      #[cfg(test)]
      if self.testing {
        // Add delay to make it easier to test race between this thread
        // and another thread that sees a partially linked tower.
        std::thread::yield_now();
      }
    }

    Ok(())
  }

  /// Gives up linking `nd`, which found an equal item on `level`.
  ///
  /// A node which never reached the base level is freed here, otherwise it stays
  /// linked on every level below `level`.
  pub(super) fn abort(&self, nd: *mut Node<T>, level: usize) -> Error {
    #[cfg(feature = "tracing")]
    tracing::trace!(lvl = level, "equal item linked concurrently, aborting insertion");

    if level == 0 {
      // Safety: the node was never linked, this call is its only owner.
      drop(unsafe { Box::from_raw(nd) });
      return Error::Conflict { linked: false };
    }

    Error::Conflict { linked: true }
  }
}
