use fskit_io::{ChecksumMethod, DefaultFileIo, FileIo, OsOverride};
use fskit_test_utils::TestTree;
use rstest::rstest;

const SAMPLE: &str = "Initial bytes\nThis is Second Line\nMore Text";

fn io() -> DefaultFileIo {
    DefaultFileIo::with_os_override(OsOverride::Host)
}

#[rstest]
#[case(ChecksumMethod::Md5, "bad71408e80acc34a474d42ce219d154")]
#[case(ChecksumMethod::Sha1, "346722065c7c68422dcfbfa6bb6280300aa168a6")]
#[case(
    ChecksumMethod::Sha256,
    "030685cfa852639dee5e327f54153df00af48f75e146331b44ee72fe3b0cee6a"
)]
fn test_checksum_known_vectors(#[case] method: ChecksumMethod, #[case] expected: &str) {
    let tree = TestTree::new();
    let path = tree.file("test_file_1.txt", SAMPLE);
    assert_eq!(io().checksum(&path, method).unwrap(), expected);
}

#[rstest]
#[case(ChecksumMethod::Md5, "d41d8cd98f00b204e9800998ecf8427e")]
#[case(ChecksumMethod::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709")]
#[case(
    ChecksumMethod::Sha256,
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
)]
fn test_checksum_empty_file(#[case] method: ChecksumMethod, #[case] expected: &str) {
    let tree = TestTree::new();
    let path = tree.file("empty", "");
    assert_eq!(io().checksum(&path, method).unwrap(), expected);
}

#[test]
fn test_checksum_missing_file_is_not_found() {
    let tree = TestTree::new();
    let err = io()
        .checksum(&tree.path("missing.txt"), ChecksumMethod::Sha256)
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_checksum_matches_after_copy() {
    let tree = TestTree::new();
    let source = tree.file("a.bin", vec![7u8; 200_000]);
    let destination = tree.path("b.bin");
    io().copy(&source, &destination).unwrap();

    for method in [ChecksumMethod::Md5, ChecksumMethod::Sha1, ChecksumMethod::Sha256] {
        assert_eq!(
            io().checksum(&source, method).unwrap(),
            io().checksum(&destination, method).unwrap()
        );
    }
}

#[test]
fn test_unknown_method_name_is_invalid_argument() {
    let err = "whirlpool".parse::<ChecksumMethod>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid checksum method: whirlpool");
}
