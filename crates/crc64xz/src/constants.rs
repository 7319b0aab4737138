//! CRC-64/XZ parameters (CRC RevEng catalogue).
//!
//! - width: 64
//! - poly: 0x42F0E1EBA9EA3693 (reflected: 0xC96C5795D7870F42)
//! - init: 0xFFFF_FFFF_FFFF_FFFF
//! - refin/refout: true
//! - xorout: 0xFFFF_FFFF_FFFF_FFFF
//! - check: 0x995DC9BBDF1939FA (11051210869376104954)

/// Generator polynomial in normal (MSB-first) form, implicit `x^64` term.
pub const POLYNOMIAL: u64 = 0x42F0_E1EB_A9EA_3693;

/// The same polynomial bit-reversed, for LSB-first (reflected) kernels.
pub const POLYNOMIAL_REFLECTED: u64 = crate::reflect::reflect64(POLYNOMIAL);

/// Accumulator value before the first byte.
pub const INIT: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Mask applied after the output reflection.
pub const XOR_OUT: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Standard check input.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// CRC-64/XZ of [`CHECK_INPUT`].
pub const CHECK: u64 = 0x995D_C9BB_DF19_39FA;

/// [`CHECK`] in the decimal form registries record.
pub const CHECK_DECIMAL: &str = "11051210869376104954";

const _: () = assert!(POLYNOMIAL_REFLECTED == 0xC96C_5795_D787_0F42);
