use super::MAX_LEVEL_LIMIT;

/// Error returned when a [`SkipList`](crate::SkipList) cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
  /// Indicates that the requested max level is outside of `1..=21`.
  InvalidMaxLevel(usize),
}

impl core::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::InvalidMaxLevel(lvl) => write!(
        f,
        "max level {lvl} is out of range, expected 1..={MAX_LEVEL_LIMIT}"
      ),
    }
  }
}

impl std::error::Error for ConfigError {}

/// Error type for [`SkipList::insert`](crate::SkipList::insert).
///
/// As a low-level crate, neither error is retried internally, callers decide what to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Indicates that an equal item was already in the skiplist when the insertion
  /// searched for its position. Nothing was modified.
  Duplicated,

  /// Indicates that a concurrent insertion linked an equal item while this insertion
  /// was linking its own node.
  ///
  /// `linked` is `true` when the node had already been published at the base level
  /// before the conflict was detected. Such a node stays in the skiplist with fewer
  /// levels than planned, which only affects search speed around it.
  Conflict {
    /// Whether the node of the aborted insertion is reachable.
    linked: bool,
  },
}

impl Error {
  /// Returns `true` if the item was not stored because an equal item won, whichever way
  /// the loss was detected.
  #[inline]
  pub const fn is_duplicate(&self) -> bool {
    matches!(self, Self::Duplicated | Self::Conflict { linked: false })
  }
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Duplicated => write!(f, "item already exists in the skiplist"),
      Self::Conflict { linked: false } => {
        write!(f, "item was inserted by another thread concurrently")
      }
      Self::Conflict { linked: true } => write!(
        f,
        "conflict detected above the base level, item is linked with a partial tower"
      ),
    }
  }
}

impl std::error::Error for Error {}
