//! Lookup tables, generated at compile time.
//!
//! | Table | Domain | Size | Used by |
//! |-------|--------|------|---------|
//! | [`ReflectionTable`] | normal (MSB-first) | 256×u64 | bytewise kernel |
//! | [`SLICE8`] | reflected (LSB-first) | 8×256×u64 | slice-by-8 kernel |
//!
//! Both are plain `static`s built by `const fn`: they exist before `main`,
//! are never written, and need no synchronization to read.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..8)
// or a `u8` index into a 256-entry table.
#![allow(clippy::indexing_slicing)]

use crate::constants::{POLYNOMIAL, POLYNOMIAL_REFLECTED};

/// Wrapper type to force 64-byte (cache line) alignment.
#[repr(align(64))]
#[derive(Debug)]
pub struct Aligned64<T>(pub T);

// ─────────────────────────────────────────────────────────────────────────────
// Normal-domain table
// ─────────────────────────────────────────────────────────────────────────────

/// Partial remainder for one byte placed in bits 56..64 of the register.
///
/// Eight shifts; the polynomial is folded in whenever bit 63 falls off.
#[must_use]
pub const fn table_entry(index: u8) -> u64 {
  let mut w = (index as u64) << 56;
  let mut i = 0;
  while i < 8 {
    w = if w & (1 << 63) != 0 { (w << 1) ^ POLYNOMIAL } else { w << 1 };
    i += 1;
  }
  w
}

/// Build the 256-entry table consumed by the bytewise kernel.
#[must_use]
pub const fn build_table() -> [u64; 256] {
  let mut table = [0u64; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = table_entry(i as u8);
    i += 1;
  }
  table
}

/// The 256 partial remainders of CRC-64/XZ, indexed by byte value.
#[derive(Debug)]
pub struct ReflectionTable(Aligned64<[u64; 256]>);

impl ReflectionTable {
  #[inline]
  #[must_use]
  pub const fn get(&self, index: u8) -> u64 {
    self.0.0[index as usize]
  }

  #[inline]
  #[must_use]
  pub const fn as_array(&self) -> &[u64; 256] {
    &self.0.0
  }
}

/// Process-wide table instance.
pub static TABLE: ReflectionTable = ReflectionTable(Aligned64(build_table()));

// ─────────────────────────────────────────────────────────────────────────────
// Reflected-domain slice-by-8 tables
// ─────────────────────────────────────────────────────────────────────────────

const fn reflected_entry(index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ POLYNOMIAL_REFLECTED } else { crc >> 1 };
    i += 1;
  }
  crc
}

/// Generate the 8 tables for reflected slice-by-8.
///
/// `tables[k][b]` is the contribution of byte `b` followed by `k` zero bytes.
#[must_use]
pub const fn generate_slice8_tables() -> [[u64; 256]; 8] {
  let mut tables = [[0u64; 256]; 8];

  let mut i = 0usize;
  while i < 256 {
    tables[0][i] = reflected_entry(i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 8 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

/// Slice-by-8 tables (16 KiB).
pub static SLICE8: Aligned64<[[u64; 256]; 8]> = Aligned64(generate_slice8_tables());
