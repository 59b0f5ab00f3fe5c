//!
//! # Volume Snapshot Content Spec
//!
//! The realized, provider backed snapshot
//!
use tracing::debug;

use fluvio_protocol::{Decoder, Encoder};

use crate::reference::ObjectReference;
use crate::time::Time;
use crate::SnapshotError;

#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema),
    serde(rename_all = "camelCase")
)]
pub struct VolumeSnapshotContentSpec {
    /// location and type of the snapshot, inlined into the spec
    #[cfg_attr(feature = "use_serde", serde(flatten))]
    pub source: VolumeSnapshotSource,

    /// snapshot side of the binding, set when bound
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "Option::is_none"))]
    pub volume_snapshot_ref: Option<ObjectReference>,

    /// volume the snapshot was taken from, set when bound
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "Option::is_none"))]
    pub persistent_volume_ref: Option<ObjectReference>,
}

impl From<CsiVolumeSnapshotSource> for VolumeSnapshotContentSpec {
    fn from(csi: CsiVolumeSnapshotSource) -> Self {
        Self {
            source: csi.into(),
            ..Default::default()
        }
    }
}

impl VolumeSnapshotContentSpec {
    pub fn with_snapshot_ref(mut self, reference: ObjectReference) -> Self {
        self.volume_snapshot_ref = Some(reference);
        self
    }

    pub fn with_volume_ref(mut self, reference: ObjectReference) -> Self {
        self.persistent_volume_ref = Some(reference);
        self
    }

    /// content side of the binding is in place
    pub fn is_bound(&self) -> bool {
        self.volume_snapshot_ref.is_some()
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        self.source.validate()
    }
}

/// Only one of the members may be specified
#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema),
    serde(rename_all = "camelCase", default)
)]
pub struct VolumeSnapshotSource {
    /// storage handled by an external CSI volume driver
    #[cfg_attr(
        feature = "use_serde",
        serde(rename = "csiVolumeSnapshotSource", skip_serializing_if = "Option::is_none")
    )]
    pub csi: Option<CsiVolumeSnapshotSource>,
}

impl From<CsiVolumeSnapshotSource> for VolumeSnapshotSource {
    fn from(csi: CsiVolumeSnapshotSource) -> Self {
        Self { csi: Some(csi) }
    }
}

impl VolumeSnapshotSource {
    pub fn csi(&self) -> Option<&CsiVolumeSnapshotSource> {
        self.csi.as_ref()
    }

    /// number of members specified
    pub fn populated(&self) -> usize {
        [self.csi.is_some()].iter().filter(|set| **set).count()
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        match self.populated() {
            0 => {
                debug!("snapshot source is empty");
                Err(SnapshotError::NoSnapshotSource)
            }
            1 => match &self.csi {
                Some(csi) => csi.validate(),
                None => Ok(()),
            },
            count => {
                debug!(count, "snapshot source has multiple members");
                Err(SnapshotError::MultipleSnapshotSources(count))
            }
        }
    }
}

impl std::fmt::Display for VolumeSnapshotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.csi {
            Some(csi) => write!(f, "csi:{}/{}", csi.driver, csi.snapshot_handle),
            None => write!(f, "none"),
        }
    }
}

#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema),
    serde(rename_all = "camelCase")
)]
pub struct CsiVolumeSnapshotSource {
    /// driver used for this snapshot
    pub driver: String,

    /// snapshot id returned by the driver on create,
    /// used on all subsequent calls
    pub snapshot_handle: String,

    /// when the point-in-time snapshot was cut, Unix nanoseconds
    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "crate::is_zero")
    )]
    pub created_at: i64,
}

impl CsiVolumeSnapshotSource {
    pub fn new<D, H>(driver: D, snapshot_handle: H) -> Self
    where
        D: Into<String>,
        H: Into<String>,
    {
        Self {
            driver: driver.into(),
            snapshot_handle: snapshot_handle.into(),
            created_at: 0,
        }
    }

    /// set creation time, out of range times are clamped to 0
    pub fn with_created_at(mut self, time: Time) -> Self {
        self.created_at = time.unix_nanos().unwrap_or_default();
        self
    }

    pub fn created_at_time(&self) -> Option<Time> {
        if self.created_at > 0 {
            Some(Time::from_unix_nanos(self.created_at))
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.driver.trim().is_empty() {
            return Err(SnapshotError::MissingDriver);
        }
        if self.snapshot_handle.trim().is_empty() {
            return Err(SnapshotError::MissingSnapshotHandle);
        }
        if self.created_at < 0 {
            return Err(SnapshotError::NegativeCreationTime(self.created_at));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {

    use std::io::Cursor;

    use fluvio_protocol::{Decoder, Encoder};

    use super::*;

    fn csi() -> CsiVolumeSnapshotSource {
        CsiVolumeSnapshotSource {
            driver: "csi-hostpath".to_owned(),
            snapshot_handle: "7bdd0de3-aaeb-11e8-9aae-0242ac110002".to_owned(),
            created_at: 1_538_492_645_000_000_000,
        }
    }

    #[test]
    fn test_source_validation() {
        assert!(VolumeSnapshotSource::from(csi()).validate().is_ok());

        let empty = VolumeSnapshotSource::default();
        assert_eq!(empty.populated(), 0);
        assert_eq!(
            empty.validate().unwrap_err().to_string(),
            "snapshot source must specify exactly one member, none found"
        );
    }

    #[test]
    fn test_csi_validation() {
        let mut source = csi();
        source.driver = "".to_owned();
        assert!(matches!(
            source.validate(),
            Err(SnapshotError::MissingDriver)
        ));

        let mut source = csi();
        source.snapshot_handle = " ".to_owned();
        assert!(matches!(
            source.validate(),
            Err(SnapshotError::MissingSnapshotHandle)
        ));

        let mut source = csi();
        source.created_at = -1;
        assert!(matches!(
            source.validate(),
            Err(SnapshotError::NegativeCreationTime(-1))
        ));

        // invalid member fails the whole source
        let spec = VolumeSnapshotContentSpec::from(CsiVolumeSnapshotSource::new("", "handle"));
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_created_at_time() {
        let source = csi();
        assert_eq!(
            source.created_at_time().map(|t| t.to_string()),
            Some("2018-10-02T15:04:05Z".to_owned())
        );
        assert_eq!(
            CsiVolumeSnapshotSource::new("d", "h").created_at_time(),
            None
        );

        let time = "2018-10-02T15:04:05Z".parse().expect("time");
        let source = CsiVolumeSnapshotSource::new("d", "h").with_created_at(time);
        assert_eq!(source.created_at, 1_538_492_645_000_000_000);
    }

    #[test]
    fn test_binding_side() {
        let spec = VolumeSnapshotContentSpec::from(csi());
        assert!(!spec.is_bound());

        let spec = spec
            .with_snapshot_ref(ObjectReference::new("VolumeSnapshot", "snap-1").with_namespace("default"))
            .with_volume_ref(ObjectReference::new("PersistentVolume", "pv-1"));
        assert!(spec.is_bound());
        assert_eq!(
            spec.source.to_string(),
            "csi:csi-hostpath/7bdd0de3-aaeb-11e8-9aae-0242ac110002"
        );
    }

    #[test]
    fn test_encode_decode_content_spec() {
        let spec = VolumeSnapshotContentSpec::from(csi())
            .with_snapshot_ref(ObjectReference::new("VolumeSnapshot", "snap-1"));
        let mut dest = vec![];
        spec.encode(&mut dest, 0).expect("encode");
        assert_eq!(dest.len(), spec.write_size(0));

        let decoded =
            VolumeSnapshotContentSpec::decode_from(&mut Cursor::new(&dest), 0).expect("decode");
        assert_eq!(decoded, spec);
        assert_eq!(decoded.source.csi(), Some(&csi()));
    }

    #[test]
    fn test_encode_decode_empty_source() {
        let spec = VolumeSnapshotContentSpec::default();
        let mut dest = vec![];
        spec.encode(&mut dest, 0).expect("encode");

        // csi, snapshot ref and volume ref are all absent
        assert_eq!(dest, vec![0x00, 0x00, 0x00]);
        let decoded =
            VolumeSnapshotContentSpec::decode_from(&mut Cursor::new(&dest), 0).expect("decode");
        assert_eq!(decoded.source.populated(), 0);
    }

    #[cfg(feature = "use_serde")]
    #[test]
    fn test_source_is_inlined() {
        let spec = VolumeSnapshotContentSpec::from(csi());
        let json = serde_json::to_value(&spec).expect("json");
        assert_eq!(
            json,
            serde_json::json!({
                "csiVolumeSnapshotSource": {
                    "driver": "csi-hostpath",
                    "snapshotHandle": "7bdd0de3-aaeb-11e8-9aae-0242ac110002",
                    "createdAt": 1_538_492_645_000_000_000i64
                }
            })
        );

        let decoded: VolumeSnapshotContentSpec = serde_json::from_value(json).expect("decode");
        assert_eq!(decoded, spec);
    }

    #[cfg(feature = "use_serde")]
    #[test]
    fn test_zero_created_at_is_omitted() {
        let json = serde_json::to_value(CsiVolumeSnapshotSource::new("d", "h")).expect("json");
        assert_eq!(
            json,
            serde_json::json!({ "driver": "d", "snapshotHandle": "h" })
        );
    }
}
