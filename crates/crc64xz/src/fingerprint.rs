//! The textual form of a CRC-64/XZ value.
//!
//! Layer registries record the checksum as an unsigned base-10 string, and the
//! publishing pipeline compares that string with ours for exact equality. A
//! [`Fingerprint`] renders exactly that form: no sign, no `0x`, no grouping,
//! no leading zeros. Values with the top bit set render as the large unsigned
//! number, never as a negative one.

use core::{fmt, str::FromStr};

use traits::{ParseChecksumError, ParseChecksumErrorKind};

/// A finalized CRC-64/XZ value.
///
/// ```
/// use crc64xz::Fingerprint;
///
/// let fp = Fingerprint::new(0x995D_C9BB_DF19_39FA);
/// assert_eq!(fp.to_string(), "11051210869376104954");
/// assert!(fp.matches_recorded("11051210869376104954"));
/// assert_eq!("11051210869376104954".parse::<Fingerprint>(), Ok(fp));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
  #[inline]
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  #[inline]
  #[must_use]
  pub const fn value(self) -> u64 {
    self.0
  }

  /// Compare against a checksum string recorded elsewhere.
  ///
  /// This is exact string equality with our rendering. A recorded value with
  /// padding, a sign, or leading zeros does not match, even though it names
  /// the same number.
  #[must_use]
  pub fn matches_recorded(self, recorded: &str) -> bool {
    // Parsing accepts only the canonical rendering, so equal values here
    // means equal strings.
    recorded.parse::<Self>().is_ok_and(|fp| fp == self)
  }
}

impl From<u64> for Fingerprint {
  #[inline]
  fn from(value: u64) -> Self {
    Self(value)
  }
}

impl From<Fingerprint> for u64 {
  #[inline]
  fn from(fp: Fingerprint) -> Self {
    fp.0
  }
}

impl fmt::Display for Fingerprint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

impl FromStr for Fingerprint {
  type Err = ParseChecksumError;

  /// Accept only the canonical form [`Display`](fmt::Display) produces.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let bytes = s.as_bytes();
    let Some(&first) = bytes.first() else {
      return Err(ParseChecksumError::new(ParseChecksumErrorKind::Empty));
    };
    if !bytes.iter().all(u8::is_ascii_digit) {
      return Err(ParseChecksumError::new(ParseChecksumErrorKind::InvalidDigit));
    }
    if first == b'0' && bytes.len() > 1 {
      return Err(ParseChecksumError::new(ParseChecksumErrorKind::LeadingZero));
    }

    let mut value = 0u64;
    for &b in bytes {
      value = value
        .checked_mul(10)
        .and_then(|v| v.checked_add(u64::from(b - b'0')))
        .ok_or(ParseChecksumError::new(ParseChecksumErrorKind::Overflow))?;
    }
    Ok(Self(value))
  }
}
