//! I/O adapters that checksum bytes as they pass through.
//!
//! Only bytes actually transferred are folded in, so short reads and short
//! writes never desynchronize the checksum from the data stream.
//!
//! # Example
//!
//! ```rust
//! # use traits::Checksum;
//! # #[derive(Clone, Default)]
//! # struct Sum(u32);
//! # impl Checksum for Sum {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   type Output = u32;
//! #   fn new() -> Self { Self(0) }
//! #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> Self::Output { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.checksum(), u32::from(b'a') + u32::from(b'b') + u32::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

#[cfg(feature = "std")]
use std::io::{self, IoSlice, IoSliceMut, Read, Write};

#[cfg(feature = "std")]
use crate::Checksum;

/// Fold the first `n` bytes spread across `bufs`.
#[cfg(feature = "std")]
#[inline]
fn fold_prefix<'a, C: Checksum>(hasher: &mut C, bufs: impl IntoIterator<Item = &'a [u8]>, n: usize) {
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let take = remaining.min(buf.len());
    if let Some(data) = buf.get(..take) {
      hasher.update(data);
    }
    remaining -= take;
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`] and checksums every byte read through it.
///
/// # Type Parameters
///
/// - `R`: the inner reader
/// - `C`: the checksum algorithm (e.g. `Crc64`)
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  hasher: C,
}

#[cfg(feature = "std")]
impl<R, C: Checksum> ChecksumReader<R, C> {
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: C::new() }
  }

  /// Continue a checksum that already covers earlier bytes of the stream.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: R, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Checksum of the bytes read so far. Reading may continue afterwards.
  #[inline]
  #[must_use]
  pub fn checksum(&self) -> C::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Return the inner reader and the checksum of everything read.
  #[inline]
  pub fn into_parts(self) -> (R, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<R: Read, C: Checksum> Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    fold_prefix(&mut self.hasher, bufs.iter().map(|b| &**b), n);
    Ok(n)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Write`] and checksums every byte the inner writer accepted.
///
/// The inner write happens first; only the `n` bytes it reports as written
/// are folded in. A failed write leaves the checksum untouched.
///
/// ```rust
/// # use traits::Checksum;
/// # #[derive(Clone, Default)]
/// # struct Sum(u32);
/// # impl Checksum for Sum {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = u32;
/// #   fn new() -> Self { Self(0) }
/// #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> Self::Output { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # use std::io::Write;
/// let mut writer = Sum::writer(Vec::new());
/// writer.write_all(b"hi")?;
/// let (out, sum) = writer.into_parts();
/// assert_eq!(out, b"hi".to_vec());
/// assert_eq!(sum, u32::from(b'h') + u32::from(b'i'));
/// # Ok::<(), std::io::Error>(())
/// ```
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  hasher: C,
}

#[cfg(feature = "std")]
impl<W, C: Checksum> ChecksumWriter<W, C> {
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: C::new() }
  }

  #[inline]
  #[must_use]
  pub fn with_initial(inner: W, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  #[inline]
  #[must_use]
  pub fn checksum(&self) -> C::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  #[inline]
  pub fn into_parts(self) -> (W, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<W: Write, C: Checksum> Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    fold_prefix(&mut self.hasher, bufs.iter().map(|b| &**b), n);
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  use std::{io::Cursor, vec, vec::Vec};

  use super::*;

  /// Order-sensitive toy checksum so chunking bugs would show up.
  #[derive(Clone, Default, Debug)]
  struct Poly(u64);

  impl Checksum for Poly {
    const OUTPUT_SIZE: usize = 8;
    type Output = u64;

    fn new() -> Self {
      Self(0)
    }
    fn with_initial(initial: u64) -> Self {
      Self(initial)
    }
    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.0 = self.0.wrapping_mul(31).wrapping_add(u64::from(b));
      }
    }
    fn finalize(&self) -> u64 {
      self.0
    }
    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  /// Accepts at most `limit` bytes per call.
  struct Trickle {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn reader_matches_oneshot() {
    let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let mut reader = Poly::reader(Cursor::new(data.clone()));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, data);
    assert_eq!(reader.checksum(), Poly::checksum(&data));
  }

  #[test]
  fn reader_vectored_counts_only_read_bytes() {
    let data = b"abcdef";
    let mut reader = Poly::reader(Cursor::new(data.to_vec()));
    let mut a = [0u8; 4];
    let mut b = [0u8; 8];
    let n = reader
      .read_vectored(&mut [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)])
      .unwrap();
    assert_eq!(n, data.len());
    assert_eq!(reader.checksum(), Poly::checksum(data));
  }

  #[test]
  fn writer_hashes_only_accepted_bytes() {
    let mut writer = ChecksumWriter::<_, Poly>::new(Trickle { out: vec![], limit: 3 });
    let n = writer.write(b"hello").unwrap();
    assert_eq!(n, 3);
    assert_eq!(writer.checksum(), Poly::checksum(b"hel"));

    writer.write_all(b"lo world").unwrap();
    let (inner, sum) = writer.into_parts();
    assert_eq!(inner.out, b"hello world");
    assert_eq!(sum, Poly::checksum(b"hello world"));
  }

  #[test]
  fn with_initial_continues() {
    let first = Poly::checksum(b"abc");
    let mut reader = ChecksumReader::<_, Poly>::with_initial(Cursor::new(b"def".to_vec()), first);
    std::io::copy(&mut reader, &mut std::io::sink()).unwrap();
    assert_eq!(reader.checksum(), Poly::checksum(b"abcdef"));
  }

  #[test]
  fn vectored_updates_match_concatenation() {
    let parts: [&[u8]; 3] = [b"ab", b"", b"cdef"];
    assert_eq!(Poly::checksum_vectored(&parts), Poly::checksum(b"abcdef"));

    let mut h = Poly::new();
    h.update_io_slices(&[IoSlice::new(b"abc"), IoSlice::new(b"def")]);
    assert_eq!(h.finalize(), Poly::checksum(b"abcdef"));
  }

  #[test]
  fn hasher_mut_folds_out_of_band_bytes() {
    let mut reader = Poly::reader(Cursor::new(b"def".to_vec()));
    reader.hasher_mut().update(b"abc");
    std::io::copy(&mut reader, &mut std::io::sink()).unwrap();
    assert_eq!(reader.checksum(), Poly::checksum(b"abcdef"));
  }

  #[test]
  fn inner_mut_bypasses_the_hasher() {
    let mut writer = Poly::writer(Vec::new());
    writer.write_all(b"abc").unwrap();
    writer.inner_mut().extend_from_slice(b"xyz");
    assert_eq!(writer.checksum(), Poly::checksum(b"abc"));
    assert_eq!(writer.inner(), b"abcxyz");

    let mut reader = Poly::reader(Cursor::new(b"abcdef".to_vec()));
    reader.inner_mut().set_position(3);
    std::io::copy(&mut reader, &mut std::io::sink()).unwrap();
    assert_eq!(reader.checksum(), Poly::checksum(b"def"));
  }
}
