//! Fuzz target for the decimal checksum form.
//!
//! Parsing must never panic, and anything it accepts must render back to the
//! exact input.

#![no_main]

use crc64xz::Fingerprint;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let Ok(s) = core::str::from_utf8(data) else {
    return;
  };

  match s.parse::<Fingerprint>() {
    Ok(fp) => {
      assert_eq!(fp.to_string(), s, "accepted a non-canonical string");
      assert!(fp.matches_recorded(s));
    }
    Err(_) => {
      if let Ok(v) = s.parse::<u64>() {
        assert!(!Fingerprint::new(v).matches_recorded(s));
      }
    }
  }
});
