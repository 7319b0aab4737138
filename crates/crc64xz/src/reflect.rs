//! Bit reflection.
//!
//! `reflect(value, width)` mirrors the low `width` bits of `value`: bit `i`
//! moves to bit `width - 1 - i`. Bits at or above `width` are dropped. The
//! engine uses width 8 on every input byte and width 64 on the final state.

/// Mirror the low `width` bits of `value`.
///
/// `width` must be in `1..=64`; the engine only ever passes 8 or 64.
#[inline]
#[must_use]
pub const fn reflect(value: u64, width: u32) -> u64 {
  debug_assert!(width >= 1 && width <= 64);
  let mut reflected = 0u64;
  let mut i = 0;
  while i < width {
    if value & (1u64 << i) != 0 {
      reflected |= 1u64 << (width - 1 - i);
    }
    i += 1;
  }
  reflected
}

/// Mirror the bits of a byte.
#[inline]
#[must_use]
pub const fn reflect8(byte: u8) -> u8 {
  byte.reverse_bits()
}

/// Mirror all 64 bits.
#[inline]
#[must_use]
pub const fn reflect64(value: u64) -> u64 {
  value.reverse_bits()
}

const _: () = {
  assert!(reflect(0x01, 8) == 0x80);
  assert!(reflect(0xF0, 8) == 0x0F);
  assert!(reflect(1, 64) == 1 << 63);
};
