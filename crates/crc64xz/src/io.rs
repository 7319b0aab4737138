//! Checksumming readers and files in bounded memory.
//!
//! Artifacts can be tens of megabytes; these helpers stream them through a
//! fixed buffer instead of loading them whole.
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use crc64xz::{Checksum, Crc64, checksum_reader};
//!
//! let fp = checksum_reader(Cursor::new(b"123456789"))?;
//! assert_eq!(fp.to_string(), "11051210869376104954");
//!
//! // Pass-through adapter: checksum while copying somewhere else.
//! let mut reader = Crc64::reader(Cursor::new(b"123456789"));
//! let mut sink = Vec::new();
//! std::io::copy(&mut reader, &mut sink)?;
//! assert_eq!(reader.checksum(), 0x995D_C9BB_DF19_39FA);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::{
  fs::File,
  io::{self, ErrorKind, Read},
  path::Path,
  vec,
};

pub use traits::io::{ChecksumReader, ChecksumWriter};

use crate::{Crc64, Fingerprint};

/// Read buffer size for [`checksum_reader`] and [`checksum_file`].
pub const READ_BUF_LEN: usize = 64 * 1024;

/// Fold everything `reader` yields into a fresh hasher.
///
/// Retries reads interrupted by signals; any other error is returned as-is.
pub fn checksum_reader<R: Read>(mut reader: R) -> io::Result<Fingerprint> {
  let mut hasher = Crc64::new();
  let mut buf = vec![0u8; READ_BUF_LEN];
  loop {
    let n = match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(n) => n,
      Err(e) if e.kind() == ErrorKind::Interrupted => continue,
      Err(e) => return Err(e),
    };
    if let Some(chunk) = buf.get(..n) {
      hasher.update(chunk);
    }
  }
  Ok(hasher.fingerprint())
}

/// Checksum the file at `path` without reading it into memory.
pub fn checksum_file(path: impl AsRef<Path>) -> io::Result<Fingerprint> {
  checksum_reader(File::open(path)?)
}

#[cfg(test)]
mod tests {
  use std::{io::Cursor, string::ToString, vec::Vec};

  use super::*;

  /// Yields one byte per call and an `Interrupted` error before each.
  struct Flaky {
    data: Vec<u8>,
    pos: usize,
    interrupt_next: bool,
  }

  impl Read for Flaky {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      if self.interrupt_next {
        self.interrupt_next = false;
        return Err(io::Error::from(ErrorKind::Interrupted));
      }
      self.interrupt_next = true;
      match self.data.get(self.pos) {
        Some(&b) if !buf.is_empty() => {
          buf[0] = b;
          self.pos += 1;
          Ok(1)
        }
        _ => Ok(0),
      }
    }
  }

  struct Broken;

  impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
      Err(io::Error::other("disk on fire"))
    }
  }

  #[test]
  fn empty_reader() {
    assert_eq!(checksum_reader(io::empty()).unwrap(), Fingerprint::new(0));
  }

  #[test]
  fn larger_than_buffer() {
    let data: Vec<u8> = (0..(READ_BUF_LEN * 3 + 17)).map(|i| (i * 7 + 3) as u8).collect();
    assert_eq!(
      checksum_reader(Cursor::new(&data)).unwrap(),
      Crc64::fingerprint_of(&data)
    );
  }

  #[test]
  fn interrupted_reads_are_retried() {
    let reader = Flaky {
      data: b"123456789".to_vec(),
      pos: 0,
      interrupt_next: true,
    };
    assert_eq!(checksum_reader(reader).unwrap().value(), 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn other_errors_propagate() {
    let err = checksum_reader(Broken).unwrap_err();
    assert_eq!(err.to_string(), "disk on fire");
  }

  #[test]
  fn missing_file_is_not_found() {
    let err = checksum_file("/definitely/not/here/layer.zip").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
  }
}
