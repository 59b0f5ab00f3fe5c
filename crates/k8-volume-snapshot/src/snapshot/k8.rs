use k8_types::{Crd, CrdNames, DefaultHeader, K8List, K8Obj, Spec, Status};

use crate::{GROUP, V1ALPHA1, VOLUME_SNAPSHOT_RESOURCE_PLURAL};

use super::VolumeSnapshotSpec;
use super::VolumeSnapshotStatus;

pub const VOLUME_SNAPSHOT_API: Crd = Crd {
    group: GROUP,
    version: V1ALPHA1,
    names: CrdNames {
        kind: "VolumeSnapshot",
        plural: VOLUME_SNAPSHOT_RESOURCE_PLURAL,
        singular: "volumesnapshot",
    },
};

impl Spec for VolumeSnapshotSpec {
    type Status = VolumeSnapshotStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &VOLUME_SNAPSHOT_API
    }
}

impl Status for VolumeSnapshotStatus {}

/// snapshot as stored in the K8 key value store
pub type VolumeSnapshot = K8Obj<VolumeSnapshotSpec>;

pub type VolumeSnapshotList = K8List<VolumeSnapshotSpec>;

#[cfg(test)]
mod test_v1alpha1_spec {

    use std::{fs::File, io::BufReader};

    use k8_types::Spec;

    use super::{VolumeSnapshot, VolumeSnapshotList, VolumeSnapshotSpec};

    #[test]
    fn test_api_version() {
        assert_eq!(
            VolumeSnapshotSpec::api_version(),
            "snapshot.storage.k8s.io/v1alpha1"
        );
        assert_eq!(VolumeSnapshotSpec::kind(), "VolumeSnapshot");
        assert!(VolumeSnapshotSpec::NAME_SPACED);
    }

    #[test]
    fn read_k8_snapshot_json() {
        let reader: BufReader<File> =
            BufReader::new(File::open("tests/k8_volume_snapshot_v1alpha1.json").expect("spec"));
        let snapshot: VolumeSnapshot =
            serde_json::from_reader(reader).expect("failed to parse snapshot");
        assert_eq!(snapshot.metadata.name, "new-snapshot-demo");
        assert_eq!(snapshot.metadata.namespace, "default");
        assert_eq!(snapshot.spec.persistent_volume_claim_name(), Some("hpvc"));
        assert_eq!(
            snapshot.spec.snapshot_content_name(),
            Some("snapcontent-4e8a0ab7")
        );
        assert_eq!(
            snapshot.spec.volume_snapshot_class_name(),
            Some("csi-hostpath-snapclass")
        );
        assert!(snapshot.status.bound);
        assert_eq!(
            snapshot.status.created_at.map(|t| t.to_string()),
            Some("2018-10-02T15:04:05Z".to_owned())
        );
    }

    #[test]
    fn read_k8_snapshot_yaml() {
        let reader: BufReader<File> =
            BufReader::new(File::open("tests/k8_volume_snapshot_v1alpha1.yaml").expect("spec"));
        let snapshot: VolumeSnapshot =
            serde_yaml::from_reader(reader).expect("failed to parse snapshot");
        assert_eq!(snapshot.metadata.name, "new-snapshot-demo");
        assert_eq!(snapshot.spec.persistent_volume_claim_name(), Some("hpvc"));
        assert_eq!(snapshot.spec.snapshot_content_name(), None);
        assert!(!snapshot.status.bound);
        assert!(snapshot.status.created_at.is_none());
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let reader: BufReader<File> =
            BufReader::new(File::open("tests/k8_volume_snapshot_v1alpha1.json").expect("spec"));
        let snapshot: VolumeSnapshot =
            serde_json::from_reader(reader).expect("failed to parse snapshot");

        let encoded = serde_json::to_string(&snapshot).expect("encode");
        let decoded: VolumeSnapshot = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded.api_version, snapshot.api_version);
        assert_eq!(decoded.kind, snapshot.kind);
        assert_eq!(decoded.metadata, snapshot.metadata);
        assert_eq!(decoded.spec, snapshot.spec);
        assert_eq!(decoded.status, snapshot.status);
    }

    #[test]
    fn test_snapshot_without_optional_fields() {
        let snapshot: VolumeSnapshot = serde_json::from_value(serde_json::json!({
            "apiVersion": "snapshot.storage.k8s.io/v1alpha1",
            "kind": "VolumeSnapshot",
            "metadata": { "name": "bare" },
            "spec": {}
        }))
        .expect("bare snapshot");
        assert_eq!(snapshot.spec, VolumeSnapshotSpec::default());
        assert!(!snapshot.status.is_created());
    }

    #[test]
    fn read_k8_snapshot_list_json() {
        let reader: BufReader<File> = BufReader::new(
            File::open("tests/k8_volume_snapshot_list_v1alpha1.json").expect("spec"),
        );
        let list: VolumeSnapshotList =
            serde_json::from_reader(reader).expect("failed to parse snapshot list");
        assert_eq!(list.kind, "VolumeSnapshotList");
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].metadata.name, "snap-a");
        assert_eq!(list.items[1].metadata.name, "snap-b");
        assert_eq!(
            list.items[1].spec.volume_snapshot_class_name(),
            Some("gold")
        );
    }

    #[test]
    fn test_snapshot_list_round_trip() {
        let reader: BufReader<File> = BufReader::new(
            File::open("tests/k8_volume_snapshot_list_v1alpha1.json").expect("spec"),
        );
        let list: VolumeSnapshotList =
            serde_json::from_reader(reader).expect("failed to parse snapshot list");

        let encoded = serde_json::to_string(&list).expect("encode");
        let decoded: VolumeSnapshotList = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded.kind, list.kind);
        assert_eq!(
            serde_json::to_value(&decoded.metadata).expect("metadata"),
            serde_json::to_value(&list.metadata).expect("metadata")
        );
        assert_eq!(decoded.items.len(), list.items.len());
        for (decoded, item) in decoded.items.iter().zip(list.items.iter()) {
            assert_eq!(decoded.metadata, item.metadata);
            assert_eq!(decoded.spec, item.spec);
            assert_eq!(decoded.status, item.status);
        }
    }
}
