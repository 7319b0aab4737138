//! Core checksum traits for layersum.
//!
//! This crate provides the foundational traits that the checksum engines
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming non-cryptographic checksums | CRC-64/XZ |
//! | [`ChecksumCombine`] | `crc(A || B)` from the parts | CRC with O(log n) combine |
//!
//! # Error Types
//!
//! - [`ParseChecksumError`] - a textual checksum was not in canonical form
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::{ParseChecksumError, ParseChecksumErrorKind};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
