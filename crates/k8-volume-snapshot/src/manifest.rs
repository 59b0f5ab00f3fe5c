//!
//! # Manifest
//!
//! Load snapshot objects from YAML or JSON manifests.
//! A YAML manifest may hold several documents; list kinds are expanded into their items.
//!
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use k8_types::Spec;

use crate::SnapshotError;
use crate::class::{VolumeSnapshotClass, VolumeSnapshotClassList, VolumeSnapshotClassSpec};
use crate::content::{VolumeSnapshotContent, VolumeSnapshotContentList, VolumeSnapshotContentSpec};
use crate::snapshot::{VolumeSnapshot, VolumeSnapshotList, VolumeSnapshotSpec};

#[derive(Debug, Clone)]
pub enum SnapshotObject {
    Snapshot(VolumeSnapshot),
    Class(VolumeSnapshotClass),
    Content(VolumeSnapshotContent),
}

impl SnapshotObject {
    pub fn kind(&self) -> &str {
        match self {
            Self::Snapshot(obj) => &obj.kind,
            Self::Class(obj) => &obj.kind,
            Self::Content(obj) => &obj.kind,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Snapshot(obj) => &obj.metadata.name,
            Self::Class(obj) => &obj.metadata.name,
            Self::Content(obj) => &obj.metadata.name,
        }
    }

    /// check the invariants that can be verified on a single object
    pub fn validate(&self) -> Result<(), SnapshotError> {
        match self {
            Self::Snapshot(_) => Ok(()),
            Self::Class(class) => class.header.validate(),
            Self::Content(content) => content.spec.validate(),
        }
    }

    /// parse a single or multi document YAML manifest
    pub fn from_yaml_str(input: &str) -> Result<Vec<Self>, SnapshotError> {
        let mut objects = vec![];
        for document in serde_yaml::Deserializer::from_str(input) {
            let value = Value::deserialize(document)?;
            if value.is_null() {
                trace!("skipping empty document");
                continue;
            }
            objects.extend(Self::from_value(value)?);
        }
        Ok(objects)
    }

    pub fn from_json_str(input: &str) -> Result<Vec<Self>, SnapshotError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// dispatch on `kind`, checking `apiVersion` against the kind's
    fn from_value(value: Value) -> Result<Vec<Self>, SnapshotError> {
        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let api_version = value
            .get("apiVersion")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        trace!(%kind, %api_version, "decoding object");

        let expected = match kind.as_str() {
            "VolumeSnapshot" | "VolumeSnapshotList" => VolumeSnapshotSpec::api_version(),
            "VolumeSnapshotClass" | "VolumeSnapshotClassList" => {
                VolumeSnapshotClassSpec::api_version()
            }
            "VolumeSnapshotContent" | "VolumeSnapshotContentList" => {
                VolumeSnapshotContentSpec::api_version()
            }
            _ => return Err(SnapshotError::UnknownKind(kind)),
        };
        if api_version != expected {
            return Err(SnapshotError::ApiVersion {
                found: api_version,
                expected,
            });
        }

        let objects = match kind.as_str() {
            "VolumeSnapshot" => vec![Self::Snapshot(serde_json::from_value(value)?)],
            "VolumeSnapshotClass" => vec![Self::Class(serde_json::from_value(value)?)],
            "VolumeSnapshotContent" => vec![Self::Content(serde_json::from_value(value)?)],
            "VolumeSnapshotList" => serde_json::from_value::<VolumeSnapshotList>(value)?
                .items
                .into_iter()
                .map(Self::Snapshot)
                .collect(),
            "VolumeSnapshotClassList" => serde_json::from_value::<VolumeSnapshotClassList>(value)?
                .items
                .into_iter()
                .map(Self::Class)
                .collect(),
            _ => serde_json::from_value::<VolumeSnapshotContentList>(value)?
                .items
                .into_iter()
                .map(Self::Content)
                .collect(),
        };
        Ok(objects)
    }
}

impl From<VolumeSnapshot> for SnapshotObject {
    fn from(obj: VolumeSnapshot) -> Self {
        Self::Snapshot(obj)
    }
}

impl From<VolumeSnapshotClass> for SnapshotObject {
    fn from(obj: VolumeSnapshotClass) -> Self {
        Self::Class(obj)
    }
}

impl From<VolumeSnapshotContent> for SnapshotObject {
    fn from(obj: VolumeSnapshotContent) -> Self {
        Self::Content(obj)
    }
}

/// load manifest file, `.json` files are read as JSON, everything else as YAML
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<SnapshotObject>, SnapshotError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    let objects = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => SnapshotObject::from_json_str(&input)?,
        _ => SnapshotObject::from_yaml_str(&input)?,
    };
    debug!(path = %path.display(), count = objects.len(), "loaded snapshot manifest");
    Ok(objects)
}
