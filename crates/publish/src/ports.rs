//! Collaborator interfaces.
//!
//! Implementations talk to real services; this crate only drives them.
//! Both traits take `&self` so one client can serve several publishes.

use crc64xz::Fingerprint;

use crate::model::{LayerVersion, ObjectLocation, PublishRequest};

/// Blob storage holding layer archives.
pub trait ObjectStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Whether an object with this content already sits at `location`.
  ///
  /// `content_hash` is the artifact's CRC-64/XZ. Stores that compare by
  /// their own content hash (an ETag, say) may ignore it and check presence
  /// on their terms.
  fn exists(&self, location: &ObjectLocation, content_hash: Fingerprint) -> Result<bool, Self::Error>;

  fn put(&self, location: &ObjectLocation, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// The service that versions and exposes layers.
pub trait LayerRegistry {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Look up a version of a layer whose name starts with `name_prefix` and
  /// whose recorded checksum is `checksum`.
  fn find_by_checksum(&self, name_prefix: &str, checksum: &str) -> Result<Option<LayerVersion>, Self::Error>;

  fn publish(&self, request: &PublishRequest) -> Result<LayerVersion, Self::Error>;

  fn set_public_access(&self, layer: &LayerVersion) -> Result<(), Self::Error>;
}
