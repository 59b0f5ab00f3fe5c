use k8_types::{Crd, CrdNames, Header, K8List, K8Obj, Spec, Status};

use crate::{GROUP, V1ALPHA1, VOLUME_SNAPSHOT_CLASS_RESOURCE_PLURAL};

use super::{VolumeSnapshotClassHeader, VolumeSnapshotClassSpec, VolumeSnapshotClassStatus};

pub const VOLUME_SNAPSHOT_CLASS_API: Crd = Crd {
    group: GROUP,
    version: V1ALPHA1,
    names: CrdNames {
        kind: "VolumeSnapshotClass",
        plural: VOLUME_SNAPSHOT_CLASS_RESOURCE_PLURAL,
        singular: "volumesnapshotclass",
    },
};

impl Spec for VolumeSnapshotClassSpec {
    type Status = VolumeSnapshotClassStatus;
    type Header = VolumeSnapshotClassHeader;
    const NAME_SPACED: bool = false;

    fn metadata() -> &'static Crd {
        &VOLUME_SNAPSHOT_CLASS_API
    }
}

impl Header for VolumeSnapshotClassHeader {}

impl Status for VolumeSnapshotClassStatus {}

/// snapshotter and parameters are in `header`
pub type VolumeSnapshotClass = K8Obj<VolumeSnapshotClassSpec>;

pub type VolumeSnapshotClassList = K8List<VolumeSnapshotClassSpec>;
