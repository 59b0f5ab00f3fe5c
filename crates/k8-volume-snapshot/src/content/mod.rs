mod spec;

pub use spec::*;

#[cfg(feature = "k8")]
mod k8;
#[cfg(feature = "k8")]
pub use k8::*;

use fluvio_protocol::{Decoder, Encoder};

/// content carries no observed state
#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeSnapshotContentStatus {}
