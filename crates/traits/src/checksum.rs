//! Non-cryptographic checksum traits.
//!
//! - **Streaming**: the state can be fed one chunk at a time, so large files
//!   never need to be resident in memory
//! - **Combine**: checksums of adjacent pieces can be merged after the fact

use core::fmt::Debug;

/// Streaming non-cryptographic checksum.
///
/// # Usage
///
/// ```rust,ignore
/// use crc64xz::{Checksum, Crc64};
///
/// // One-shot
/// let crc = Crc64::checksum(b"123456789");
///
/// // Streaming
/// let mut hasher = Crc64::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not consume the state
/// - `reset()` must restore the state `new()` (or `with_initial`) produced
/// - feeding the same bytes under any chunking must yield the same output
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u64` for CRC-64).
  type Output: Copy + Eq + Debug + Default;

  /// Create a hasher in the algorithm's initial state.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that continues from a previously *finalized* value.
  ///
  /// `with_initial(checksum(a))` followed by `update(b)` equals
  /// `checksum(a || b)`.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Fold `data` into the running state.
  fn update(&mut self, data: &[u8]);

  /// Fold several non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Fold `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything folded so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset to the initial state.
  fn reset(&mut self);

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of several buffers as if they were concatenated.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader so every byte read through it is checksummed.
  ///
  /// ```rust,ignore
  /// use crc64xz::{Checksum, Crc64};
  /// use std::fs::File;
  ///
  /// let mut reader = Crc64::reader(File::open("layer.zip")?);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("{}", reader.checksum());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer so every byte written through it is checksummed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums whose values for adjacent pieces can be merged.
///
/// For a CRC:
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// computed by square-and-multiply in O(log len(B)).
pub trait ChecksumCombine: Checksum {
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, compute `crc(A || B)`.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
