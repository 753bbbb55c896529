#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]

mod builder;
pub use builder::{Builder, Options};

mod error;
pub use error::{ConfigError, Error};

/// Level generators which decide how tall the tower of a new node is.
pub mod level;
pub use level::{Fixed, Geometric, LevelGenerator};

mod list;
pub use list::{Iter, SkipList};

mod node;

mod types;
pub use types::Height;

/// The hard ceiling of levels a skiplist can be configured with.
pub const MAX_LEVEL_LIMIT: usize = 21;

/// The max level used when none is configured.
pub const DEFAULT_MAX_LEVEL: u8 = 12;

/// Comparator is the only way the skiplist orders and identifies items.
///
/// `less` must be a strict weak ordering. Two items `a` and `b` are treated as
/// equal when `!less(a, b) && !less(b, a)`, and a skiplist never holds two equal items.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparator.
pub trait Comparator<T: ?Sized> {
  /// Returns `true` if `a` is strictly ordered before `b`.
  fn less(&self, a: &T, b: &T) -> bool;

  /// Returns `true` if neither item is ordered before the other.
  #[inline]
  fn equal(&self, a: &T, b: &T) -> bool {
    !self.less(a, b) && !self.less(b, a)
  }
}

impl<T: ?Sized, F> Comparator<T> for F
where
  F: Fn(&T, &T) -> bool,
{
  #[inline]
  fn less(&self, a: &T, b: &T) -> bool {
    self(a, b)
  }
}

/// Ascend is a comparator that orders items by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascend;

impl<T: Ord + ?Sized> Comparator<T> for Ascend {
  #[inline]
  fn less(&self, a: &T, b: &T) -> bool {
    a < b
  }
}

/// Descend is a comparator that orders items in reverse of their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descend;

impl<T: Ord + ?Sized> Comparator<T> for Descend {
  #[inline]
  fn less(&self, a: &T, b: &T) -> bool {
    b < a
  }
}

mod sync {
  #[cfg(not(loom))]
  pub(crate) use core::sync::atomic::*;

  #[cfg(loom)]
  pub(crate) use loom::sync::atomic::*;

  #[cfg(loom)]
  pub(crate) trait AtomicMut<T> {}

  #[cfg(loom)]
  impl<T> AtomicMut<T> for AtomicPtr<T> {}

  #[cfg(not(loom))]
  pub(crate) trait AtomicMut<T> {
    fn with_mut<F, R>(&mut self, f: F) -> R
    where
      F: FnOnce(&mut *mut T) -> R;
  }

  #[cfg(not(loom))]
  impl<T> AtomicMut<T> for AtomicPtr<T> {
    fn with_mut<F, R>(&mut self, f: F) -> R
    where
      F: FnOnce(&mut *mut T) -> R,
    {
      f(self.get_mut())
    }
  }
}
