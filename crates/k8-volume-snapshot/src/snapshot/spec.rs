//!
//! # Volume Snapshot Spec
//!
//! Desired state of a user requested snapshot
//!
use fluvio_protocol::{Decoder, Encoder};

use crate::non_empty;

/// Optional fields may arrive as empty strings from other producers,
/// accessors treat those as absent.
#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema),
    serde(rename_all = "camelCase", default)
)]
pub struct VolumeSnapshotSpec {
    /// name of the claim being snapshotted.
    /// If not specified, content can be created and bound manually.
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "Option::is_none"))]
    pub persistent_volume_claim_name: Option<String>,

    /// binds the snapshot with its content
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "Option::is_none"))]
    pub snapshot_content_name: Option<String>,

    /// class used for the snapshot, default class applies if not set
    #[cfg_attr(
        feature = "use_serde",
        serde(rename = "snapshotClassName", skip_serializing_if = "Option::is_none")
    )]
    pub volume_snapshot_class_name: Option<String>,
}

impl VolumeSnapshotSpec {
    pub fn new<N: Into<String>>(claim: N) -> Self {
        Self {
            persistent_volume_claim_name: Some(claim.into()),
            ..Default::default()
        }
    }

    pub fn with_class<N: Into<String>>(mut self, class: N) -> Self {
        self.volume_snapshot_class_name = Some(class.into());
        self
    }

    pub fn bind_to_content<N: Into<String>>(mut self, content: N) -> Self {
        self.snapshot_content_name = Some(content.into());
        self
    }

    pub fn persistent_volume_claim_name(&self) -> Option<&str> {
        non_empty(&self.persistent_volume_claim_name)
    }

    pub fn snapshot_content_name(&self) -> Option<&str> {
        non_empty(&self.snapshot_content_name)
    }

    pub fn volume_snapshot_class_name(&self) -> Option<&str> {
        non_empty(&self.volume_snapshot_class_name)
    }
}

impl std::fmt::Display for VolumeSnapshotSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "VolumeSnapshot(claim: {}, class: {})",
            self.persistent_volume_claim_name().unwrap_or("-"),
            self.volume_snapshot_class_name().unwrap_or("default")
        )
    }
}
