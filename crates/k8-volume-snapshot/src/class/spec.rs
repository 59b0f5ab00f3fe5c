//!
//! # Volume Snapshot Class
//!
//! Parameters used by the storage system when snapshotting claims.
//! Classes are cluster scoped; their fields sit at the top level of the
//! object instead of under `spec`.
//!
use std::collections::BTreeMap;

use tracing::debug;

use fluvio_protocol::{Decoder, Encoder};

use crate::SnapshotError;

/// class has no desired state of its own
#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema)
)]
pub struct VolumeSnapshotClassSpec {}

#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct VolumeSnapshotClassStatus {}

#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema),
    serde(rename_all = "camelCase")
)]
pub struct VolumeSnapshotClassHeader {
    /// driver expected to handle this class
    #[cfg_attr(feature = "use_serde", serde(default))]
    pub snapshotter: String,

    /// opaque to the system, passed directly to the snapshotter
    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub parameters: BTreeMap<String, String>,
}

impl VolumeSnapshotClassHeader {
    pub fn new<N: Into<String>>(snapshotter: N) -> Self {
        Self {
            snapshotter: snapshotter.into(),
            ..Default::default()
        }
    }

    pub fn with_parameter<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.snapshotter.trim().is_empty() {
            debug!("snapshot class without snapshotter");
            return Err(SnapshotError::MissingSnapshotter);
        }
        Ok(())
    }
}

impl std::fmt::Display for VolumeSnapshotClassHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "VolumeSnapshotClass(snapshotter: {}, parameters: {})",
            self.snapshotter,
            self.parameters.len()
        )
    }
}
