//! Fuzz target for the streaming API.
//!
//! Arbitrary sequences of update calls, with the kernel switching between
//! chunks, must produce the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use crc64xz::{Crc64, Kernel};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let chunk_sizes = &input.chunk_sizes;
  let expected = Crc64::checksum(data);

  let mut hasher = Crc64::new();
  let mut rest: &[u8] = data;
  let mut chunk_idx = 0;

  while !rest.is_empty() {
    let chunk_size = match chunk_sizes.get(chunk_idx % chunk_sizes.len().max(1)) {
      Some(&n) => (n % 256).max(1),
      None => 1,
    };
    let (chunk, tail) = rest.split_at(chunk_size.min(rest.len()));
    hasher.update_with(Kernel::ALL[chunk_idx % Kernel::ALL.len()], chunk);
    rest = tail;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch");
});
