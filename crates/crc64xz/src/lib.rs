//! CRC-64/XZ fingerprints for deployment artifacts.
//!
//! Layer registries record an artifact's CRC-64/XZ as an unsigned decimal
//! string. This crate computes that value and renders it in exactly the same
//! form, so a freshly built artifact can be matched against what a registry
//! already holds.
//!
//! # Parameters
//!
//! | Width | Polynomial | Init | RefIn/RefOut | XorOut | Check |
//! |-------|------------|------|--------------|--------|-------|
//! | 64 | `0x42F0E1EBA9EA3693` | all ones | true/true | all ones | `0x995DC9BBDF1939FA` |
//!
//! The check value renders as `11051210869376104954`.
//!
//! # Kernels
//!
//! | Kernel | Used for |
//! |--------|----------|
//! | [`Kernel::Bytewise`] | short buffers, one table lookup per byte |
//! | [`Kernel::Slice8`] | everything else, eight bytes per step |
//!
//! Selection is by buffer length and can be forced with
//! `LAYERSUM_CRC64_FORCE` (see [`config`]). Results never depend on the
//! kernel.
//!
//! # Example
//!
//! ```rust
//! use crc64xz::{Checksum, ChecksumCombine, Crc64};
//!
//! // One-shot, textual form.
//! assert_eq!(crc64xz::checksum(b"123456789"), "11051210869376104954");
//!
//! // Streaming.
//! let mut hasher = Crc64::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.fingerprint().to_string(), "11051210869376104954");
//!
//! // Combine independently computed parts.
//! let (a, b) = b"123456789".split_at(4);
//! let crc = Crc64::combine(Crc64::checksum(a), Crc64::checksum(b), b.len());
//! assert_eq!(crc, 0x995D_C9BB_DF19_39FA);
//! ```
//!
//! # no_std Support
//!
//! Disable default features for `no_std`; enable `alloc` for the
//! [`checksum`] string helper.
//!
//! ```toml
//! [dependencies]
//! crc64xz = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod combine;
pub mod config;
pub mod constants;
#[cfg(feature = "diag")]
pub mod diag;
mod fingerprint;
#[cfg(feature = "std")]
pub mod io;
mod kernels;
pub mod reference;
pub mod reflect;
mod table;
mod xz;

pub use config::{Crc64Config, Crc64Force, Crc64Tunables};
pub use fingerprint::Fingerprint;
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter, checksum_file, checksum_reader};
pub use kernels::Kernel;
pub use table::{ReflectionTable, TABLE, build_table, table_entry};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine, ParseChecksumError, ParseChecksumErrorKind};
pub use xz::Crc64;

/// CRC-64/XZ of `data` as an unsigned decimal string.
///
/// ```
/// assert_eq!(crc64xz::checksum(b""), "0");
/// assert_eq!(crc64xz::checksum(b"123456789"), "11051210869376104954");
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn checksum(data: &[u8]) -> alloc::string::String {
  use alloc::string::ToString;

  Crc64::fingerprint_of(data).to_string()
}
