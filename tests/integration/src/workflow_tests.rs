//! Multi-step workflows through the [`FileIo`] trait object.

use fskit_io::{
    ChecksumMethod, ConfigStore, DefaultFileIo, FileIo, IoConfig, OS_OVERRIDE_ENV,
    OperatingSystem,
};
use fskit_test_utils::{MockFileIo, MockMethod, MockResponse, TestTree, assert_trees_equal};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::path::Path;

/// Staging, verifying and publishing a payload with nothing but the trait.
fn publish(io: &dyn FileIo, staging: &Path, target: &Path) -> fskit_io::Result<String> {
    let payload = staging.join("payload.bin");
    io.write_buffered(&payload, &[7u8; 10_000], 1024, 0o644)?;
    let digest = io.checksum(&payload, ChecksumMethod::Sha256)?;

    io.delete_dir(target)?;
    io.copy_dir(staging, target)?;
    Ok(digest)
}

#[test]
fn test_publish_workflow_on_disk() {
    let tree = TestTree::new();
    let staging = tree.dir("staging");
    tree.file("staging/meta/notes.txt", "release notes");
    let target = tree.path("target");

    let io = DefaultFileIo::new();
    let digest = publish(&io, &staging, &target).unwrap();

    assert_trees_equal(&staging, &target);
    assert_eq!(
        io.checksum(&target.join("payload.bin"), ChecksumMethod::Sha256)
            .unwrap(),
        digest
    );
}

#[test]
fn test_publish_workflow_against_mock() {
    let mock = MockFileIo::new();
    mock.on(MockMethod::Checksum, MockResponse::Text("abc".into()));

    let tree = TestTree::new();
    let digest = publish(&mock, tree.root(), &tree.path("target")).unwrap();

    assert_eq!(digest, "abc");
    let order: Vec<MockMethod> = mock.calls().into_iter().map(|c| c.method).collect();
    assert_eq!(
        order,
        vec![
            MockMethod::WriteBuffered,
            MockMethod::Checksum,
            MockMethod::DeleteDir,
            MockMethod::CopyDir,
        ]
    );
}

#[test]
fn test_config_round_trip_drives_io() {
    let tree = TestTree::new();
    let path = tree.path("fskit.yaml");
    let store = ConfigStore::new();

    let config = IoConfig {
        os_override: Some("windows".into()),
        chunk_size: 8,
        ..IoConfig::default()
    };
    store.save(&path, &config).unwrap();
    let loaded: IoConfig = store.load(&path).unwrap();
    assert_eq!(loaded, config);

    let io = DefaultFileIo::from_config(&loaded);
    assert_eq!(io.operating_system(), OperatingSystem::Windows);
    assert_eq!(io.join_path(&["a", "b"]), "a\\b");
}

#[test]
#[serial]
fn test_environment_override_applies_per_call() {
    let io = DefaultFileIo::new();

    // SAFETY: serialized with the other environment tests in this binary.
    unsafe { std::env::set_var(OS_OVERRIDE_ENV, "linux") };
    assert_eq!(io.to_host_path("C:\\dir\\file"), "/dir/file");

    unsafe { std::env::set_var(OS_OVERRIDE_ENV, "windows") };
    assert_eq!(io.to_host_path("C:/dir/file"), "C:\\dir\\file");

    unsafe { std::env::remove_var(OS_OVERRIDE_ENV) };
    assert_eq!(io.operating_system(), OperatingSystem::host());
}
