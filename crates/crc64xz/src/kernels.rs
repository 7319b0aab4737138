//! Table-driven CRC-64/XZ kernels.
//!
//! Every kernel takes and returns the *normal-domain* register: the value the
//! bytewise algorithm holds between bytes, before the output reflection. That
//! keeps kernels interchangeable in the middle of a stream.
//!
//! | Kernel | Bytes/step | Table | Notes |
//! |--------|-----------|-------|-------|
//! | [`Kernel::Bytewise`] | 1 | [`TABLE`] | reflects each input byte, MSB-first register |
//! | [`Kernel::Slice8`] | 8 | [`SLICE8`] | runs in the reflected domain, converts at the edges |

// SAFETY: every table index is a `u8` widened to `usize`; the tables have 256 entries.
#![allow(clippy::indexing_slicing)]

use crate::{
  reflect::{reflect8, reflect64},
  table::{SLICE8, TABLE},
};

/// A CRC-64/XZ update routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kernel {
  /// One byte per step through the 256-entry [`ReflectionTable`](crate::ReflectionTable).
  Bytewise,
  /// Eight bytes per step through the slice-by-8 tables.
  Slice8,
}

impl Kernel {
  pub const ALL: [Self; 2] = [Self::Bytewise, Self::Slice8];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Bytewise => "portable/bytewise",
      Self::Slice8 => "portable/slice-by-8",
    }
  }

  /// Fold `data` into the normal-domain register `state`.
  #[inline]
  #[must_use]
  pub fn update(self, state: u64, data: &[u8]) -> u64 {
    match self {
      Self::Bytewise => bytewise(state, data),
      Self::Slice8 => slice8(state, data),
    }
  }
}

/// Byte-at-a-time reduction.
///
/// For each byte `b`: `index = (state >> 56) ^ reflect8(b)`, then
/// `state = table[index] ^ (state << 8)`. Shifts on `u64` truncate to 64 bits.
#[inline]
#[must_use]
pub fn bytewise(mut state: u64, data: &[u8]) -> u64 {
  for &b in data {
    let index = ((state >> 56) as u8) ^ reflect8(b);
    state = TABLE.get(index) ^ (state << 8);
  }
  state
}

/// Slice-by-8 reduction on the normal-domain register.
#[inline]
#[must_use]
pub fn slice8(state: u64, data: &[u8]) -> u64 {
  if data.is_empty() {
    return state;
  }
  reflect64(slice8_reflected(reflect64(state), data))
}

/// Slice-by-8 on a reflected-domain register (LSB-first).
#[inline]
#[must_use]
pub fn slice8_reflected(mut crc: u64, data: &[u8]) -> u64 {
  let [t0, t1, t2, t3, t4, t5, t6, t7] = &SLICE8.0;
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = (u64::from_le_bytes(*chunk) ^ crc).to_le_bytes();

    crc = t7[usize::from(b0)]
      ^ t6[usize::from(b1)]
      ^ t5[usize::from(b2)]
      ^ t4[usize::from(b3)]
      ^ t3[usize::from(b4)]
      ^ t2[usize::from(b5)]
      ^ t1[usize::from(b6)]
      ^ t0[usize::from(b7)];
  }

  for &byte in remainder {
    crc = t0[usize::from(crc as u8 ^ byte)] ^ (crc >> 8);
  }

  crc
}
