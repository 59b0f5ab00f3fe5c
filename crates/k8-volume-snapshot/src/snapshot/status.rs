use std::fmt;

use fluvio_protocol::{Decoder, Encoder};

use crate::reference::VolumeError;
use crate::time::Time;

#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema),
    serde(rename_all = "camelCase", default)
)]
pub struct VolumeSnapshotStatus {
    /// time the snapshot was successfully created, unset until then
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "Option::is_none"))]
    pub created_at: Option<Time>,

    /// true only if the snapshot is ready to use and the snapshot and
    /// its content are bound to each other
    pub bound: bool,

    /// last error encountered during create snapshot operation.
    /// Only the entity completing the operation sets this.
    /// Written as `error`; the capitalized `Error` key is accepted on read.
    #[cfg_attr(
        feature = "use_serde",
        serde(alias = "Error", skip_serializing_if = "Option::is_none")
    )]
    pub error: Option<VolumeError>,
}

impl fmt::Display for VolumeSnapshotStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.bound {
            write!(f, "Bound")
        } else if let Some(err) = &self.error {
            write!(f, "Failed: {}", err.message())
        } else if self.created_at.is_some() {
            write!(f, "Created")
        } else {
            write!(f, "Pending")
        }
    }
}

impl VolumeSnapshotStatus {
    pub fn created(at: Time) -> Self {
        Self {
            created_at: Some(at),
            ..Default::default()
        }
    }

    pub fn bound(at: Time) -> Self {
        Self {
            created_at: Some(at),
            bound: true,
            error: None,
        }
    }

    pub fn failed(error: VolumeError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_created(&self) -> bool {
        self.created_at.is_some()
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
