//! Fuzz target for the CRC-64/XZ engine.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Both kernels and the bitwise reference agree
//! - Incremental, resumed and combined results equal one-shot

#![no_main]

use arbitrary::Arbitrary;
use crc64xz::{Crc64, Kernel, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);
  let oneshot = Crc64::checksum(data);

  assert_eq!(oneshot, reference::checksum(data), "reference mismatch");
  for kernel in Kernel::ALL {
    let mut h = Crc64::new();
    h.update_with(kernel, data);
    assert_eq!(oneshot, h.finalize(), "{} mismatch", kernel.name());
  }

  let (a, b) = data.split_at(split);
  let mut hasher = Crc64::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(oneshot, hasher.finalize(), "incremental mismatch");

  let crc_a = Crc64::checksum(a);
  let mut resumed = Crc64::resume(crc_a);
  resumed.update(b);
  assert_eq!(oneshot, resumed.finalize(), "resume mismatch");

  let combined = Crc64::combine(crc_a, Crc64::checksum(b), b.len());
  assert_eq!(oneshot, combined, "combine mismatch");
});
