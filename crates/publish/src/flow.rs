//! Skip-or-publish decision and the single-target publish step.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
  error::PublishError,
  model::{Artifact, LayerVersion, ObjectLocation, PublishRequest},
  ports::{LayerRegistry, ObjectStore},
};

/// Runtime tag for layers built on Debian 10 images.
pub const DEBIAN10_RUNTIME: &str = "custom.debian10";
/// Runtime tag for every other layer.
pub const DEFAULT_RUNTIME: &str = "custom";

/// What to do with an artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Plan {
  /// The registry already holds a bit-identical version.
  Skip(LayerVersion),
  Publish,
}

/// Result of [`publish`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
  AlreadyPublished(LayerVersion),
  Published {
    version: LayerVersion,
    /// False when the store already had the object.
    uploaded: bool,
  },
}

/// Runtimes a layer declares compatibility with, derived from its name.
#[must_use]
pub fn compatible_runtimes(layer_name: &str) -> Vec<String> {
  let runtime = if layer_name.contains("-debian10") {
    DEBIAN10_RUNTIME
  } else {
    DEFAULT_RUNTIME
  };
  vec![runtime.to_owned()]
}

/// Ask the registry whether `artifact` is already published.
///
/// Only an exact match between the recorded checksum string and the
/// artifact's decimal fingerprint counts; anything else means publish.
pub fn plan<R: LayerRegistry>(registry: &R, artifact: &Artifact) -> Result<Plan, R::Error> {
  let fingerprint = artifact.fingerprint();
  let checksum = fingerprint.to_string();
  debug!(layer = artifact.name(), %checksum, "looking up layer by checksum");

  match registry.find_by_checksum(artifact.name(), &checksum)? {
    Some(existing) if fingerprint.matches_recorded(&existing.checksum) => Ok(Plan::Skip(existing)),
    Some(existing) => {
      debug!(
        layer = artifact.name(),
        recorded = %existing.checksum,
        %checksum,
        "registry answer does not match exactly, treating as absent"
      );
      Ok(Plan::Publish)
    }
    None => Ok(Plan::Publish),
  }
}

/// Publish `artifact` once: upload if needed, create the version, open it up.
///
/// No retries. The first collaborator failure is returned.
#[instrument(skip_all, fields(layer = artifact.name(), location = %artifact.location()))]
pub fn publish<S, R>(store: &S, registry: &R, artifact: &Artifact) -> Result<Outcome, PublishError<S::Error, R::Error>>
where
  S: ObjectStore,
  R: LayerRegistry,
{
  if let Plan::Skip(existing) = plan(registry, artifact).map_err(PublishError::Registry)? {
    info!(version = existing.version, "layer already published");
    return Ok(Outcome::AlreadyPublished(existing));
  }

  let location = artifact.location();
  let uploaded = if store
    .exists(location, artifact.fingerprint())
    .map_err(PublishError::Store)?
  {
    debug!("object already present, skipping upload");
    false
  } else {
    info!(bytes = artifact.bytes().len(), "uploading layer");
    store.put(location, artifact.bytes()).map_err(PublishError::Store)?;
    true
  };

  let request = PublishRequest {
    name: artifact.name().to_owned(),
    location: location.clone(),
    checksum: artifact.fingerprint().to_string(),
    compatible_runtimes: compatible_runtimes(artifact.name()),
  };
  info!("releasing layer");
  let version = registry.publish(&request).map_err(PublishError::Registry)?;
  registry
    .set_public_access(&version)
    .map_err(PublishError::Registry)?;
  info!(version = version.version, "layer published");

  Ok(Outcome::Published { version, uploaded })
}

/// [`publish`] the archive at `path`.
pub fn publish_file<S, R>(
  store: &S,
  registry: &R,
  name: &str,
  location: ObjectLocation,
  path: impl AsRef<Path>,
) -> Result<Outcome, PublishError<S::Error, R::Error>>
where
  S: ObjectStore,
  R: LayerRegistry,
{
  let artifact = Artifact::from_file(name, location, path)?;
  publish(store, registry, &artifact)
}
