//! Publish flow against in-memory collaborators.

use std::{collections::HashMap, io::Write, sync::Mutex};

use crc64xz::Fingerprint;
use layer_publish::{
  Artifact, LayerRegistry, LayerVersion, ObjectLocation, ObjectStore, Outcome, Plan, PublishError, PublishRequest, plan,
  publish, publish_file,
};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Fault(&'static str);

#[derive(Default)]
struct MemoryStore {
  objects: Mutex<HashMap<ObjectLocation, Vec<u8>>>,
  puts: Mutex<usize>,
  fail: Option<&'static str>,
}

impl ObjectStore for MemoryStore {
  type Error = Fault;

  fn exists(&self, location: &ObjectLocation, content_hash: Fingerprint) -> Result<bool, Fault> {
    if let Some(msg) = self.fail {
      return Err(Fault(msg));
    }
    let objects = self.objects.lock().unwrap();
    Ok(objects
      .get(location)
      .is_some_and(|bytes| crc64xz::Crc64::fingerprint_of(bytes) == content_hash))
  }

  fn put(&self, location: &ObjectLocation, bytes: &[u8]) -> Result<(), Fault> {
    *self.puts.lock().unwrap() += 1;
    self.objects.lock().unwrap().insert(location.clone(), bytes.to_vec());
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
  Find(String, String),
  Publish(PublishRequest),
  SetPublic(u64),
}

#[derive(Default)]
struct MemoryRegistry {
  versions: Mutex<Vec<LayerVersion>>,
  calls: Mutex<Vec<Call>>,
  /// Answer every lookup with this version, whatever it records.
  canned: Option<LayerVersion>,
  fail_publish: bool,
}

impl MemoryRegistry {
  fn calls(&self) -> Vec<Call> {
    self.calls.lock().unwrap().clone()
  }
}

impl LayerRegistry for MemoryRegistry {
  type Error = Fault;

  fn find_by_checksum(&self, name_prefix: &str, checksum: &str) -> Result<Option<LayerVersion>, Fault> {
    self
      .calls
      .lock()
      .unwrap()
      .push(Call::Find(name_prefix.to_owned(), checksum.to_owned()));
    if let Some(v) = &self.canned {
      return Ok(Some(v.clone()));
    }
    let versions = self.versions.lock().unwrap();
    Ok(
      versions
        .iter()
        .find(|v| v.name.starts_with(name_prefix) && v.checksum == checksum)
        .cloned(),
    )
  }

  fn publish(&self, request: &PublishRequest) -> Result<LayerVersion, Fault> {
    self.calls.lock().unwrap().push(Call::Publish(request.clone()));
    if self.fail_publish {
      return Err(Fault("quota exceeded"));
    }
    let mut versions = self.versions.lock().unwrap();
    let version = LayerVersion {
      name: request.name.clone(),
      version: versions.len() as u64 + 1,
      checksum: request.checksum.clone(),
    };
    versions.push(version.clone());
    Ok(version)
  }

  fn set_public_access(&self, layer: &LayerVersion) -> Result<(), Fault> {
    self.calls.lock().unwrap().push(Call::SetPublic(layer.version));
    Ok(())
  }
}

fn artifact(name: &str, bytes: &[u8]) -> Artifact {
  Artifact::from_bytes(name, ObjectLocation::for_layer("layers-cn-hangzhou", name), bytes.to_vec())
}

const CHECK: &str = "11051210869376104954";

#[test]
fn fresh_layer_is_uploaded_published_and_opened() {
  let store = MemoryStore::default();
  let registry = MemoryRegistry::default();
  let art = artifact("php82-debian10", b"123456789");

  let outcome = publish(&store, &registry, &art).unwrap();

  let Outcome::Published { version, uploaded } = outcome else {
    panic!("expected a publish, got {outcome:?}");
  };
  assert!(uploaded);
  assert_eq!(version.version, 1);
  assert_eq!(version.checksum, CHECK);
  assert_eq!(*store.puts.lock().unwrap(), 1);

  assert_eq!(
    registry.calls(),
    vec![
      Call::Find("php82-debian10".into(), CHECK.into()),
      Call::Publish(PublishRequest {
        name: "php82-debian10".into(),
        location: ObjectLocation::new("layers-cn-hangzhou", "php82-debian10.zip"),
        checksum: CHECK.into(),
        compatible_runtimes: vec!["custom.debian10".into()],
      }),
      Call::SetPublic(1),
    ]
  );
}

#[test]
fn second_publish_is_skipped() {
  let store = MemoryStore::default();
  let registry = MemoryRegistry::default();
  let art = artifact("php82", b"layer bytes");

  publish(&store, &registry, &art).unwrap();
  let outcome = publish(&store, &registry, &art).unwrap();

  assert!(matches!(outcome, Outcome::AlreadyPublished(ref v) if v.version == 1));
  assert_eq!(*store.puts.lock().unwrap(), 1);
  assert_eq!(registry.versions.lock().unwrap().len(), 1);
}

#[test]
fn changed_content_is_republished() {
  let store = MemoryStore::default();
  let registry = MemoryRegistry::default();

  publish(&store, &registry, &artifact("php82", b"v1")).unwrap();
  let outcome = publish(&store, &registry, &artifact("php82", b"v2")).unwrap();

  assert!(matches!(outcome, Outcome::Published { ref version, uploaded: true } if version.version == 2));
  assert_eq!(*store.puts.lock().unwrap(), 2);
}

#[test]
fn object_already_in_store_is_not_uploaded_again() {
  let store = MemoryStore::default();
  let art = artifact("php82", b"archive");
  store
    .objects
    .lock()
    .unwrap()
    .insert(art.location().clone(), art.bytes().to_vec());
  let registry = MemoryRegistry::default();

  let outcome = publish(&store, &registry, &art).unwrap();

  assert!(matches!(outcome, Outcome::Published { uploaded: false, .. }));
  assert_eq!(*store.puts.lock().unwrap(), 0);
}

#[test]
fn non_canonical_registry_answer_counts_as_absent() {
  let registry = MemoryRegistry {
    canned: Some(LayerVersion {
      name: "php82".into(),
      version: 7,
      checksum: format!("0{CHECK}"),
    }),
    ..MemoryRegistry::default()
  };
  assert_eq!(plan(&registry, &artifact("php82", b"123456789")).unwrap(), Plan::Publish);
}

#[test]
fn exact_registry_answer_skips() {
  let existing = LayerVersion {
    name: "php82".into(),
    version: 7,
    checksum: CHECK.into(),
  };
  let registry = MemoryRegistry {
    canned: Some(existing.clone()),
    ..MemoryRegistry::default()
  };
  assert_eq!(plan(&registry, &artifact("php82", b"123456789")).unwrap(), Plan::Skip(existing));
}

#[test]
fn store_errors_surface() {
  let store = MemoryStore {
    fail: Some("bucket missing"),
    ..MemoryStore::default()
  };
  let registry = MemoryRegistry::default();

  let err = publish(&store, &registry, &artifact("php82", b"x")).unwrap_err();
  assert!(matches!(err, PublishError::Store(Fault("bucket missing"))));
  assert_eq!(err.to_string(), "object store request failed: bucket missing");
  assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn registry_errors_surface_and_stop_the_flow() {
  let store = MemoryStore::default();
  let registry = MemoryRegistry {
    fail_publish: true,
    ..MemoryRegistry::default()
  };

  let err = publish(&store, &registry, &artifact("php82", b"x")).unwrap_err();
  assert!(matches!(err, PublishError::Registry(Fault("quota exceeded"))));
  assert!(!registry.calls().iter().any(|c| matches!(c, Call::SetPublic(_))));
}

#[test]
fn publish_from_file() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(b"123456789").unwrap();
  file.flush().unwrap();

  let store = MemoryStore::default();
  let registry = MemoryRegistry::default();
  let outcome = publish_file(
    &store,
    &registry,
    "php82",
    ObjectLocation::for_layer("layers", "php82"),
    file.path(),
  )
  .unwrap();

  let Outcome::Published { version, .. } = outcome else {
    panic!("expected a publish, got {outcome:?}");
  };
  assert_eq!(version.checksum, CHECK);
}

#[test]
fn missing_file_is_a_read_error() {
  let store = MemoryStore::default();
  let registry = MemoryRegistry::default();
  let err = publish_file(
    &store,
    &registry,
    "php82",
    ObjectLocation::for_layer("layers", "php82"),
    "/no/such/layer.zip",
  )
  .unwrap_err();
  assert!(matches!(err, PublishError::Read(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}
