//! Publish runtime layers only when their content changed.
//!
//! A layer is identified by the CRC-64/XZ of its archive, rendered as the
//! unsigned decimal string the registry records. [`plan`] asks the registry
//! for a version with that exact string; [`publish`] uploads the archive if
//! the store lacks it, creates the version and makes it public.
//!
//! Network clients are out of scope. Callers supply them through
//! [`ObjectStore`] and [`LayerRegistry`].
//!
//! ```
//! # use layer_publish::*;
//! # #[derive(Debug)] struct Nope;
//! # impl std::fmt::Display for Nope { fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("nope") } }
//! # impl std::error::Error for Nope {}
//! struct Empty;
//!
//! impl LayerRegistry for Empty {
//!   type Error = Nope;
//!   fn find_by_checksum(&self, _: &str, _: &str) -> Result<Option<LayerVersion>, Nope> {
//!     Ok(None)
//!   }
//!   fn publish(&self, _: &PublishRequest) -> Result<LayerVersion, Nope> {
//!     Err(Nope)
//!   }
//!   fn set_public_access(&self, _: &LayerVersion) -> Result<(), Nope> {
//!     Err(Nope)
//!   }
//! }
//!
//! let artifact = Artifact::from_bytes("php82", ObjectLocation::for_layer("layers", "php82"), b"zip".to_vec());
//! assert_eq!(plan(&Empty, &artifact)?, Plan::Publish);
//! # Ok::<(), Nope>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod error;
mod flow;
pub mod model;
pub mod ports;

pub use error::PublishError;
pub use flow::{DEBIAN10_RUNTIME, DEFAULT_RUNTIME, Outcome, Plan, compatible_runtimes, plan, publish, publish_file};
pub use model::{Artifact, LayerVersion, ObjectLocation, PublishRequest};
pub use ports::{LayerRegistry, ObjectStore};
