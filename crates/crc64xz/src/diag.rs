//! Optional diagnostics for kernel selection.
//!
//! This module is behind `cfg(feature = "diag")` and is intended for
//! explaining which kernel a given length would take without affecting
//! normal builds.

use crate::config::{self, Crc64Config, Crc64Force};

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// A forced mode was active.
  Forced,
  /// Below the bytewise→slice-by-8 threshold.
  BelowThreshold,
  /// Normal auto selection.
  Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc64SelectionDiag {
  pub len: usize,
  pub reason: SelectionReason,
  pub effective_force: Crc64Force,
  pub selected_kernel: &'static str,
  pub bytewise_to_slice8: usize,
}

/// Explain the selection for `len` under an explicit configuration.
#[must_use]
pub fn explain(cfg: Crc64Config, len: usize) -> Crc64SelectionDiag {
  let reason = match cfg.force {
    Crc64Force::Bytewise | Crc64Force::Slice8 => SelectionReason::Forced,
    Crc64Force::Auto if len < cfg.tunables.bytewise_to_slice8 => SelectionReason::BelowThreshold,
    Crc64Force::Auto => SelectionReason::Auto,
  };
  Crc64SelectionDiag {
    len,
    reason,
    effective_force: cfg.force,
    selected_kernel: cfg.kernel_for_len(len).name(),
    bytewise_to_slice8: cfg.tunables.bytewise_to_slice8,
  }
}

/// Diagnose CRC-64/XZ selection for `len` under the process configuration.
#[inline]
#[must_use]
pub fn crc64_xz(len: usize) -> Crc64SelectionDiag {
  explain(config::get(), len)
}

/// Name of the backend family. Every kernel here is portable table code.
#[inline]
#[must_use]
pub const fn backend_name() -> &'static str {
  "portable"
}

/// Kernel `update` would pick for a buffer of `len` bytes.
#[inline]
#[must_use]
pub fn kernel_name_for_len(len: usize) -> &'static str {
  config::get().kernel_for_len(len).name()
}
