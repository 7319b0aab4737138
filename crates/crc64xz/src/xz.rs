//! Streaming CRC-64/XZ.
//!
//! # Usage
//!
//! ```
//! use crc64xz::Crc64;
//!
//! let crc = Crc64::checksum(b"123456789");
//! assert_eq!(crc, 0x995D_C9BB_DF19_39FA);
//! assert_eq!(Crc64::fingerprint_of(b"123456789").to_string(), "11051210869376104954");
//! ```

use traits::{Checksum, ChecksumCombine};

use crate::{
  Fingerprint,
  constants::{INIT, XOR_OUT},
  kernels::Kernel,
  reflect::reflect64,
};

/// CRC-64/XZ hasher.
///
/// Each value owns its accumulator; clones are independent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crc64 {
  /// Normal-domain register (before output reflection and XOR).
  state: u64,
  /// Register value restored by [`reset`](Self::reset).
  initial: u64,
}

impl Crc64 {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      state: INIT,
      initial: INIT,
    }
  }

  /// Continue from a finalized CRC: `resume(crc(a))` + `update(b)` == `crc(a || b)`.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u64) -> Self {
    let raw = reflect64(crc ^ XOR_OUT);
    Self { state: raw, initial: raw }
  }

  /// CRC-64/XZ of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u64 {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// [`checksum`](Self::checksum) in its textual form.
  #[inline]
  #[must_use]
  pub fn fingerprint_of(data: &[u8]) -> Fingerprint {
    Fingerprint::new(Self::checksum(data))
  }

  /// Fold `data` using the configured kernel for its length.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    let kernel = crate::config::get().kernel_for_len(data.len());
    self.update_with(kernel, data);
  }

  /// Fold `data` with an explicit kernel. Results never depend on the kernel.
  #[inline]
  pub fn update_with(&mut self, kernel: Kernel, data: &[u8]) {
    self.state = kernel.update(self.state, data);
  }

  /// Reflect the register and apply the output mask. Does not consume `self`.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u64 {
    reflect64(self.state) ^ XOR_OUT
  }

  #[inline]
  #[must_use]
  pub const fn fingerprint(&self) -> Fingerprint {
    Fingerprint::new(self.finalize())
  }

  /// The register before finalization. `0xFFFF_FFFF_FFFF_FFFF` for a fresh hasher.
  #[inline]
  #[must_use]
  pub const fn raw_state(&self) -> u64 {
    self.state
  }

  #[inline]
  pub fn reset(&mut self) {
    self.state = self.initial;
  }

  /// `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)`.
  #[inline]
  #[must_use]
  pub fn combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    crate::combine::crc64_combine(crc_a, crc_b, len_b)
  }
}

impl Default for Crc64 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn new() -> Self {
    Crc64::new()
  }

  #[inline]
  fn with_initial(initial: u64) -> Self {
    Crc64::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc64::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    Crc64::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc64::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> u64 {
    Crc64::checksum(data)
  }
}

impl ChecksumCombine for Crc64 {
  #[inline]
  fn combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    Crc64::combine(crc_a, crc_b, len_b)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc64 {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
