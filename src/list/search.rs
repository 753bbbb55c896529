use super::*;
use crate::{node::Node, MAX_LEVEL_LIMIT};

/// Predecessors of an item on every level, as seen by one top-down descent.
pub(super) struct SearchPath<'a, T> {
  /// `prevs[i]` is the last tower on level `i` whose item is less than the target,
  /// the head if there is none. Levels above the searched height keep the head.
  pub(super) prevs: [&'a Tower<T>; MAX_LEVEL_LIMIT],
  /// The successor of `prevs[0]` on the base level, the first candidate not less than the target.
  pub(super) next: Option<&'a Node<T>>,
}

impl<T, C, G> SkipList<T, C, G>
where
  C: Comparator<T>,
{
  /// Descends from the top of the skiplist, advancing on each level while the next item is
  /// less than `item`, and records where the descent left every level.
  pub(super) fn search_path(&self, item: &T) -> SearchPath<'_, T> {
    let mut prevs = [&self.head; MAX_LEVEL_LIMIT];
    let mut prev = &self.head;
    let mut next = None;

    for level in (0..self.height().get()).rev() {
      // Safety: `prev` is the head or a node reached from it, nodes live as long as self.
      next = unsafe { prev.next(level) };
      while let Some(nd) = next {
        if !self.cmp.less(nd.item(), item) {
          break;
        }
        prev = nd.tower();
        next = unsafe { prev.next(level) };
      }
      prevs[level] = prev;
    }

    SearchPath { prevs, next }
  }
}
