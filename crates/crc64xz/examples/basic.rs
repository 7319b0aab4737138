//! Fingerprint a file or stdin the way a layer registry records it.
//!
//! Run with: `cargo run --example basic -p crc64xz -- [PATH]`

use std::io;

use crc64xz::{Checksum, Crc64, checksum_file, checksum_reader};

fn main() -> io::Result<()> {
  let data = b"123456789";

  // One-shot, decimal form.
  let fp = Crc64::fingerprint_of(data);
  println!("check value:  {fp} (0x{:016X})", fp.value());
  assert_eq!(fp.to_string(), "11051210869376104954");

  // Streaming gives the same answer.
  let mut hasher = Crc64::new();
  for part in data.chunks(2) {
    hasher.update(part);
  }
  assert_eq!(hasher.fingerprint(), fp);

  // Resume from a stored value.
  let (a, b) = data.split_at(4);
  let mut resumed = Crc64::with_initial(Crc64::checksum(a));
  resumed.update(b);
  assert_eq!(resumed.fingerprint(), fp);

  let fp = match std::env::args_os().nth(1) {
    Some(path) => checksum_file(path)?,
    None => checksum_reader(io::stdin().lock())?,
  };
  println!("{fp}");
  Ok(())
}
