use k8_types::{Crd, CrdNames, DefaultHeader, K8List, K8Obj, Spec, Status};

use crate::{GROUP, V1ALPHA1, VOLUME_SNAPSHOT_CONTENT_RESOURCE_PLURAL};

use super::{VolumeSnapshotContentSpec, VolumeSnapshotContentStatus};

pub const VOLUME_SNAPSHOT_CONTENT_API: Crd = Crd {
    group: GROUP,
    version: V1ALPHA1,
    names: CrdNames {
        kind: "VolumeSnapshotContent",
        plural: VOLUME_SNAPSHOT_CONTENT_RESOURCE_PLURAL,
        singular: "volumesnapshotcontent",
    },
};

impl Spec for VolumeSnapshotContentSpec {
    type Status = VolumeSnapshotContentStatus;
    type Header = DefaultHeader;
    const NAME_SPACED: bool = false;

    fn metadata() -> &'static Crd {
        &VOLUME_SNAPSHOT_CONTENT_API
    }
}

impl Status for VolumeSnapshotContentStatus {}

pub type VolumeSnapshotContent = K8Obj<VolumeSnapshotContentSpec>;

pub type VolumeSnapshotContentList = K8List<VolumeSnapshotContentSpec>;
