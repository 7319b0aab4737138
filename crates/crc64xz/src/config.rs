//! CRC-64 runtime configuration (kernel override + threshold).
//!
//! This module centralizes the kernel-selection knobs so:
//! - Benchmarks/tests can pin a specific kernel
//! - Diagnostics can report the active configuration without allocation
//!
//! With `std`, overrides come from the environment and are read once:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `LAYERSUM_CRC64_FORCE` | `auto`, `bytewise` (`reference`, `table`), `slice8` (`portable`, `slice-by-8`) |
//! | `LAYERSUM_CRC64_THRESHOLD_BYTEWISE_TO_SLICE8` | byte count |
//!
//! Unrecognized values are ignored. Kernel choice never changes results, only
//! speed.

use crate::kernels::Kernel;

/// Environment variable naming a forced kernel.
pub const ENV_FORCE: &str = "LAYERSUM_CRC64_FORCE";
/// Environment variable overriding [`DEFAULT_BYTEWISE_TO_SLICE8`].
pub const ENV_THRESHOLD: &str = "LAYERSUM_CRC64_THRESHOLD_BYTEWISE_TO_SLICE8";

/// Below this many bytes the table-conversion cost of slice-by-8 dominates.
pub const DEFAULT_BYTEWISE_TO_SLICE8: usize = 16;

/// Forced kernel selection for CRC-64.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc64Force {
  /// Pick by buffer length.
  #[default]
  Auto,
  /// Always use the bytewise kernel.
  Bytewise,
  /// Always use slice-by-8.
  Slice8,
}

impl Crc64Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bytewise => "bytewise",
      Self::Slice8 => "slice8",
    }
  }

  /// Parse an override value. Case-insensitive, surrounding whitespace ignored.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("bytewise")
      || value.eq_ignore_ascii_case("reference")
      || value.eq_ignore_ascii_case("table")
    {
      return Some(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("slice8")
      || value.eq_ignore_ascii_case("slice-by-8")
      || value.eq_ignore_ascii_case("portable")
    {
      return Some(Self::Slice8);
    }
    None
  }
}

/// CRC-64 selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc64Tunables {
  /// Bytes at which `Auto` switches from bytewise to slice-by-8.
  pub bytewise_to_slice8: usize,
}

impl Default for Crc64Tunables {
  fn default() -> Self {
    Self {
      bytewise_to_slice8: DEFAULT_BYTEWISE_TO_SLICE8,
    }
  }
}

/// Full CRC-64 configuration after applying overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Crc64Config {
  pub force: Crc64Force,
  pub tunables: Crc64Tunables,
}

impl Crc64Config {
  /// Kernel to use for a buffer of `len` bytes.
  #[inline]
  #[must_use]
  pub const fn kernel_for_len(&self, len: usize) -> Kernel {
    match self.force {
      Crc64Force::Bytewise => Kernel::Bytewise,
      Crc64Force::Slice8 => Kernel::Slice8,
      Crc64Force::Auto => {
        if len < self.tunables.bytewise_to_slice8 {
          Kernel::Bytewise
        } else {
          Kernel::Slice8
        }
      }
    }
  }
}

/// Raw override values, before merging with defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
  pub force: Option<Crc64Force>,
  pub bytewise_to_slice8: Option<usize>,
}

impl Overrides {
  /// Parse overrides from optional raw strings (as read from the environment).
  #[must_use]
  pub fn parse(force: Option<&str>, threshold: Option<&str>) -> Self {
    Self {
      force: force.and_then(Crc64Force::parse),
      bytewise_to_slice8: threshold.and_then(|v| v.trim().parse::<usize>().ok()),
    }
  }
}

/// Merge overrides into the defaults.
#[inline]
#[must_use]
pub fn from_overrides(ov: Overrides) -> Crc64Config {
  Crc64Config {
    force: ov.force.unwrap_or_default(),
    tunables: Crc64Tunables {
      bytewise_to_slice8: ov.bytewise_to_slice8.unwrap_or(DEFAULT_BYTEWISE_TO_SLICE8),
    },
  }
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  let force = std::env::var(ENV_FORCE).ok();
  let threshold = std::env::var(ENV_THRESHOLD).ok();
  Overrides::parse(force.as_deref(), threshold.as_deref())
}

/// Cached process-wide CRC-64 configuration.
///
/// Environment overrides are expected to be set before process start; later
/// changes are not observed.
#[inline]
#[must_use]
pub fn get() -> Crc64Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Crc64Config> = OnceLock::new();
    *CACHED.get_or_init(|| {
      let cfg = from_overrides(read_env_overrides());
      #[cfg(feature = "tracing")]
      tracing::debug!(
        force = cfg.force.as_str(),
        bytewise_to_slice8 = cfg.tunables.bytewise_to_slice8,
        "crc64 configuration loaded"
      );
      cfg
    })
  }

  #[cfg(not(feature = "std"))]
  {
    Crc64Config::default()
  }
}
