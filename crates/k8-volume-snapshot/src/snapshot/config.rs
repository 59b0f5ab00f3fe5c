//!
//! # Volume Snapshot Config
//!
//! User facing description of a snapshot request, loaded from YAML
//!
use std::collections::BTreeMap;

use derive_builder::Builder;
use tracing::debug;

use k8_types::{K8Obj, ObjectMeta, Spec};

use super::{VolumeSnapshot, VolumeSnapshotSpec, VolumeSnapshotStatus};

const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Default, Builder, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VolumeSnapshotConfig {
    #[builder(setter(into))]
    pub name: String,

    #[builder(setter(into), default = "default_namespace()")]
    #[serde(default = "default_namespace")]
    pub namespace: String,

    pub source: SnapshotSourceConfig,

    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// what the snapshot is taken from
#[derive(Debug, Default, Builder, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SnapshotSourceConfig {
    /// claim to snapshot
    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim: Option<String>,

    /// pre-provisioned content to bind to
    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl VolumeSnapshotConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading snapshot config");
        Ok(serde_yaml::from_reader(std::fs::File::open(path)?)?)
    }
}

impl std::str::FromStr for VolumeSnapshotConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_yaml::from_str(s)?)
    }
}

impl From<VolumeSnapshotConfig> for VolumeSnapshotSpec {
    fn from(config: VolumeSnapshotConfig) -> Self {
        Self {
            persistent_volume_claim_name: config.source.claim,
            snapshot_content_name: config.source.content,
            volume_snapshot_class_name: config.class,
        }
    }
}

impl From<VolumeSnapshotConfig> for VolumeSnapshot {
    fn from(config: VolumeSnapshotConfig) -> Self {
        let metadata = ObjectMeta {
            name: config.name.clone(),
            namespace: config.namespace.clone(),
            labels: config.labels.clone().into_iter().collect(),
            ..Default::default()
        };
        K8Obj {
            api_version: VolumeSnapshotSpec::api_version(),
            kind: VolumeSnapshotSpec::kind(),
            metadata,
            spec: config.into(),
            header: Default::default(),
            status: VolumeSnapshotStatus::default(),
        }
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}
