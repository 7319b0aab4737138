//! Bit-at-a-time CRC-64/XZ, no tables.
//!
//! This is the test oracle every table-driven kernel is compared against. It
//! mirrors the polynomial-division definition directly (LSB-first, reflected
//! polynomial) and is slow on purpose: eight shift/XOR steps per byte.

// SAFETY: `data[i]` is indexed with `i < data.len()`.
#![allow(clippy::indexing_slicing)]

use crate::constants::{CHECK, CHECK_INPUT, INIT, POLYNOMIAL_REFLECTED, XOR_OUT};

/// Fold `data` into a reflected-domain register starting at `init`.
///
/// Returns the raw register; the caller applies [`XOR_OUT`].
#[must_use]
pub const fn crc64_bitwise(init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ POLYNOMIAL_REFLECTED } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Finished CRC-64/XZ of `data`.
#[must_use]
pub const fn checksum(data: &[u8]) -> u64 {
  crc64_bitwise(INIT, data) ^ XOR_OUT
}

// Build fails if the reference drifts from the catalogue check value.
const _: () = assert!(checksum(CHECK_INPUT) == CHECK);
const _: () = assert!(checksum(b"") == 0);
