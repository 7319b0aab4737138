//! CRC-64/XZ combination.
//!
//! Computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)` in
//! O(log len(B)) without touching the data. Appending `len(B)` zero bytes is a
//! linear map on the (reflected) register, so it is represented as a 64×64
//! GF(2) matrix and raised to the `len(B)` power by square-and-multiply, the
//! approach zlib uses for `crc32_combine`.
//!
//! Because CRC-64/XZ has `init == xorout`, the CRC of the empty string is 0
//! and the finalized values can be combined directly.

// SAFETY: matrix rows are indexed by `0..64` or by `trailing_zeros()` of a
// non-zero `u64`, both below 64.
#![allow(clippy::indexing_slicing)]

use crate::constants::POLYNOMIAL_REFLECTED;

type Gf2Matrix = [u64; 64];

/// Multiply `mat` by the column vector `vec`.
#[inline]
fn gf2_matrix_times(mat: &Gf2Matrix, vec: u64) -> u64 {
  let mut sum = 0u64;
  let mut v = vec;
  while v != 0 {
    sum ^= mat[v.trailing_zeros() as usize];
    v &= v - 1;
  }
  sum
}

#[inline]
fn gf2_matrix_square(mat: &Gf2Matrix) -> Gf2Matrix {
  let mut square = [0u64; 64];
  for (row, &col) in square.iter_mut().zip(mat.iter()) {
    *row = gf2_matrix_times(mat, col);
  }
  square
}

/// Operator for shifting one zero bit through the reflected register.
#[inline]
fn gf2_matrix_one_bit() -> Gf2Matrix {
  let mut mat = [0u64; 64];
  mat[0] = POLYNOMIAL_REFLECTED;
  let mut row = 1u64;
  for slot in mat.iter_mut().skip(1) {
    *slot = row;
    row <<= 1;
  }
  mat
}

/// Combine two finalized CRC-64/XZ values.
///
/// `len_b == 0` returns `crc_a` unchanged.
#[must_use]
pub fn crc64_combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
  if len_b == 0 {
    return crc_a;
  }

  // x -> x^2 -> x^4 -> x^8: one zero byte.
  let mut op = gf2_matrix_one_bit();
  op = gf2_matrix_square(&op);
  op = gf2_matrix_square(&op);
  op = gf2_matrix_square(&op);

  let mut crc = crc_a;
  let mut len = len_b as u64;
  loop {
    if len & 1 != 0 {
      crc = gf2_matrix_times(&op, crc);
    }
    len >>= 1;
    if len == 0 {
      break;
    }
    op = gf2_matrix_square(&op);
  }

  crc ^ crc_b
}
