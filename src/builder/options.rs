use super::Height;

/// Options for [`SkipList`](crate::SkipList).
#[viewit::viewit(vis_all = "pub(crate)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
  max_level: Height,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_level: Height::new(),
    }
  }

  /// Sets the number of levels of the skiplist, which is also the tower height of its head.
  ///
  /// Default is `12`. The maximum is `21`. The minimum is `1`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::{Height, Options};
  ///
  /// let opts = Options::new().with_max_level(Height::MAX);
  /// ```
  #[inline]
  pub const fn with_max_level(mut self, max_level: Height) -> Self {
    self.max_level = max_level;
    self
  }

  /// Returns the number of levels of the skiplist.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::{Height, Options};
  ///
  /// let opts = Options::new().with_max_level(Height::MIN);
  /// assert_eq!(opts.max_level(), Height::MIN);
  /// ```
  #[inline]
  pub const fn max_level(&self) -> Height {
    self.max_level
  }
}
