//! Error types shared by checksum implementations.

use core::fmt;

/// Why a textual checksum was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseChecksumErrorKind {
  /// The input was empty.
  Empty,
  /// A byte other than `0`-`9` was found (signs and whitespace included).
  InvalidDigit,
  /// The value had a leading zero; only `"0"` itself may start with one.
  LeadingZero,
  /// The value does not fit in the checksum width.
  Overflow,
}

impl ParseChecksumErrorKind {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Empty => "empty checksum string",
      Self::InvalidDigit => "invalid digit in checksum string",
      Self::LeadingZero => "checksum string has a leading zero",
      Self::Overflow => "checksum value out of range",
    }
  }
}

/// A checksum string was not in canonical unsigned-decimal form.
///
/// # Examples
///
/// ```
/// use traits::{ParseChecksumError, ParseChecksumErrorKind};
///
/// let err = ParseChecksumError::new(ParseChecksumErrorKind::LeadingZero);
/// assert_eq!(err.kind(), ParseChecksumErrorKind::LeadingZero);
/// assert_eq!(err.to_string(), "checksum string has a leading zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseChecksumError {
  kind: ParseChecksumErrorKind,
}

impl ParseChecksumError {
  #[inline]
  #[must_use]
  pub const fn new(kind: ParseChecksumErrorKind) -> Self {
    Self { kind }
  }

  #[inline]
  #[must_use]
  pub const fn kind(&self) -> ParseChecksumErrorKind {
    self.kind
  }
}

impl fmt::Display for ParseChecksumError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.kind.as_str())
  }
}

impl core::error::Error for ParseChecksumError {}
