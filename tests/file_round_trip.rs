use tempfile::TempDir;
use utilbelt::error::ErrorKind;
use utilbelt::prelude::*;

#[test]
fn test_round_trip_non_ascii_through_prelude() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let folder = temp_dir.path().join("a").join("b");
    let content = "Ünïcødé — 漢字 🚀";

    let path = write_file(&folder, "data.txt", content).expect("Failed to write file");
    assert!(folder.is_dir());
    assert_eq!(read_file(&path).expect("Failed to read file"), content);

    let url = create_url_quietly(&path).expect("Failed to build URL");
    assert_eq!(url.scheme(), "file");
}

#[test]
fn test_round_trip_each_supported_encoding() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let content = "déjà vu";

    for encoding in [
        "UTF-8",
        "UTF-16",
        "UTF-16LE",
        "UTF-16BE",
        "ISO-8859-1",
        "windows-1252",
    ] {
        let name = format!("{}.txt", encoding);
        let path = write_file_with_encoding(temp_dir.path(), &name, encoding, content)
            .expect("Failed to write file");
        let read = read_file_with_encoding(&path, encoding).expect("Failed to read file");
        assert_eq!(read, content, "encoding {}", encoding);
    }
}

#[test]
fn test_mismatched_encoding_is_io_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_file_with_encoding(temp_dir.path(), "latin.txt", "ISO-8859-1", "é")
        .expect("Failed to write file");

    // A lone 0xE9 byte is not valid UTF-8
    let err = read_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
}

#[test]
fn test_failed_write_does_not_leave_partial_directory_for_bad_encoding() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let folder = temp_dir.path().join("never");

    let err = write_file_with_encoding(&folder, "x.txt", "not-an-encoding", "x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
    assert!(!folder.exists());
}
