use super::{Ascend, Geometric, Height, SkipList};

mod options;
pub use options::*;

/// The builder to build [`SkipList`].
#[derive(Debug, Clone, Copy)]
pub struct Builder<C = Ascend, G = Geometric> {
  opts: Options,
  cmp: C,
  generator: G,
}

impl Default for Builder {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Builder {
  /// Create a new `Builder` with default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      opts: Options::new(),
      cmp: Ascend,
      generator: Geometric,
    }
  }
}

impl<C, G> Builder<C, G> {
  /// Returns a new builder with the new [`Comparator`](crate::Comparator).
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::{Builder, Descend};
  ///
  /// let builder = Builder::new().with_comparator(Descend);
  /// ```
  #[inline]
  pub fn with_comparator<NC>(self, cmp: NC) -> Builder<NC, G> {
    Builder {
      opts: self.opts,
      cmp,
      generator: self.generator,
    }
  }

  /// Returns a new builder with the new [`LevelGenerator`](crate::LevelGenerator).
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::{Builder, Fixed, Height};
  ///
  /// let builder = Builder::new().with_level_generator(Fixed(Height::MIN));
  /// ```
  #[inline]
  pub fn with_level_generator<NG>(self, generator: NG) -> Builder<C, NG> {
    Builder {
      opts: self.opts,
      cmp: self.cmp,
      generator,
    }
  }

  /// Returns a new builder with the new [`Options`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::{Builder, Height, Options};
  ///
  /// let builder = Builder::new().with_options(Options::new().with_max_level(Height::MAX));
  /// ```
  #[inline]
  pub const fn with_options(mut self, opts: Options) -> Self {
    self.opts = opts;
    self
  }

  /// Sets the number of levels of the skiplist.
  ///
  /// Default is `12`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::{Builder, Height};
  ///
  /// let builder = Builder::new().with_max_level(Height::try_new(8).unwrap());
  /// ```
  #[inline]
  pub const fn with_max_level(mut self, max_level: Height) -> Self {
    self.opts.max_level = max_level;
    self
  }

  /// Returns the options of the builder.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Builds an empty [`SkipList`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use cskl::{Builder, Descend};
  ///
  /// let l = Builder::new().with_comparator(Descend).build::<u64>();
  /// l.insert(1).unwrap();
  /// l.insert(2).unwrap();
  /// assert_eq!(l.iter().copied().collect::<Vec<_>>(), [2, 1]);
  /// ```
  #[inline]
  pub fn build<T>(self) -> SkipList<T, C, G> {
    SkipList::construct(self.opts.max_level, self.cmp, self.generator)
  }
}
