use arbitrary_int::u5;

use super::{ConfigError, DEFAULT_MAX_LEVEL, MAX_LEVEL_LIMIT};

/// Height which is used to configure the maximum tower height of a skiplist, it is a 5-bit unsigned integer
/// limited to `1..=21`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Height(u5);

impl Default for Height {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Height {
  /// The smallest height, a skiplist of this height is a plain sorted linked list.
  pub const MIN: Self = Self(u5::new(1));

  /// The largest height a skiplist can be configured with.
  pub const MAX: Self = Self(u5::new(MAX_LEVEL_LIMIT as u8));

  /// Returns the default height.
  #[inline]
  pub const fn new() -> Self {
    Self(u5::new(DEFAULT_MAX_LEVEL))
  }

  /// Returns the height as a `usize`.
  #[inline]
  pub const fn get(&self) -> usize {
    self.0.value() as usize
  }

  /// Returns the height if `val` lies in `1..=21`.
  #[inline]
  pub const fn try_new(val: usize) -> Result<Self, ConfigError> {
    if val < 1 || val > MAX_LEVEL_LIMIT {
      return Err(ConfigError::InvalidMaxLevel(val));
    }
    Ok(Self(u5::new(val as u8)))
  }

  /// ## Panics
  /// - `val` is not in `1..=21`, which is a bug of the caller.
  #[inline]
  pub(crate) const fn new_unchecked(val: usize) -> Self {
    assert!(val >= 1 && val <= MAX_LEVEL_LIMIT);
    Self(u5::new(val as u8))
  }
}

impl TryFrom<u8> for Height {
  type Error = ConfigError;

  #[inline]
  fn try_from(val: u8) -> Result<Self, Self::Error> {
    Self::try_new(val as usize)
  }
}

impl TryFrom<usize> for Height {
  type Error = ConfigError;

  #[inline]
  fn try_from(val: usize) -> Result<Self, Self::Error> {
    Self::try_new(val)
  }
}

impl From<Height> for u8 {
  #[inline]
  fn from(h: Height) -> Self {
    h.0.value()
  }
}

impl From<Height> for usize {
  #[inline]
  fn from(h: Height) -> Self {
    h.get()
  }
}

impl core::fmt::Display for Height {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.get())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bounds() {
    assert_eq!(Height::MIN.get(), 1);
    assert_eq!(Height::MAX.get(), 21);
    assert_eq!(Height::default().get(), DEFAULT_MAX_LEVEL as usize);

    assert_eq!(Height::try_from(0u8), Err(ConfigError::InvalidMaxLevel(0)));
    assert_eq!(
      Height::try_from(22usize),
      Err(ConfigError::InvalidMaxLevel(22))
    );
    assert_eq!(Height::try_from(1u8).unwrap(), Height::MIN);
    assert_eq!(Height::try_from(21u8).unwrap(), Height::MAX);
  }

  #[test]
  fn test_ord_and_into() {
    let h = Height::try_new(8).unwrap();
    assert!(Height::MIN < h && h < Height::MAX);
    assert_eq!(u8::from(h), 8);
    assert_eq!(usize::from(h), 8);
    assert_eq!(h.to_string(), "8");
  }
}
