//! Values exchanged with the object store and the layer registry.

use std::{
  fmt,
  io::{self, Read},
  path::Path,
};

use crc64xz::{Checksum, Crc64, Fingerprint};

/// Where an artifact lives in the object store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
  pub bucket: String,
  pub key: String,
}

impl ObjectLocation {
  pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
    Self {
      bucket: bucket.into(),
      key: key.into(),
    }
  }

  /// The conventional location of a layer archive: `<name>.zip` in `bucket`.
  pub fn for_layer(bucket: impl Into<String>, layer_name: &str) -> Self {
    Self::new(bucket, format!("{layer_name}.zip"))
  }
}

impl fmt::Display for ObjectLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.bucket, self.key)
  }
}

/// A version the registry already holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerVersion {
  pub name: String,
  pub version: u64,
  /// Checksum string as the registry recorded it.
  pub checksum: String,
}

/// Everything the registry needs to create a new layer version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishRequest {
  pub name: String,
  pub location: ObjectLocation,
  /// Unsigned decimal CRC-64/XZ of the archive.
  pub checksum: String,
  pub compatible_runtimes: Vec<String>,
}

/// A built layer archive and its fingerprint.
#[derive(Clone, Debug)]
pub struct Artifact {
  name: String,
  location: ObjectLocation,
  bytes: Vec<u8>,
  fingerprint: Fingerprint,
}

impl Artifact {
  pub fn from_bytes(name: impl Into<String>, location: ObjectLocation, bytes: Vec<u8>) -> Self {
    let fingerprint = Crc64::fingerprint_of(&bytes);
    Self {
      name: name.into(),
      location,
      bytes,
      fingerprint,
    }
  }

  /// Read the archive to its end, checksumming as it streams in.
  pub fn from_reader<R: Read>(name: impl Into<String>, location: ObjectLocation, reader: R) -> io::Result<Self> {
    let mut reader = Crc64::reader(reader);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(Self {
      name: name.into(),
      location,
      bytes,
      fingerprint: Fingerprint::new(reader.checksum()),
    })
  }

  pub fn from_file(name: impl Into<String>, location: ObjectLocation, path: impl AsRef<Path>) -> io::Result<Self> {
    Self::from_reader(name, location, std::fs::File::open(path)?)
  }

  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  #[must_use]
  pub fn location(&self) -> &ObjectLocation {
    &self.location
  }

  #[must_use]
  pub fn bytes(&self) -> &[u8] {
    &self.bytes
  }

  #[must_use]
  pub fn fingerprint(&self) -> Fingerprint {
    self.fingerprint
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  #[test]
  fn layer_location() {
    let loc = ObjectLocation::for_layer("layers-cn-hangzhou", "php82-debian10");
    assert_eq!(loc.key, "php82-debian10.zip");
    assert_eq!(loc.to_string(), "layers-cn-hangzhou/php82-debian10.zip");
  }

  #[test]
  fn reader_and_bytes_agree() {
    let loc = ObjectLocation::new("b", "k");
    let data = b"123456789".repeat(1000);
    let a = Artifact::from_bytes("php82", loc.clone(), data.clone());
    let b = Artifact::from_reader("php82", loc, Cursor::new(&data)).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.bytes(), b.bytes());
  }

  #[test]
  fn check_artifact() {
    let a = Artifact::from_bytes("check", ObjectLocation::new("b", "k"), b"123456789".to_vec());
    assert_eq!(a.fingerprint().to_string(), "11051210869376104954");
  }
}
