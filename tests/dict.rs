use errno_status::dict::{check_dicts, merge_dicts, validate_dict, DictError};
use errno_status::StatusCode;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn merges_valid_dictionaries() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.dict", "# http\n\"GET\"\nkw=\"\\x0d\\x0a\"\n");
    let b = write(&dir, "b.dict", "\n\"POST\"");

    let mut merged = Vec::new();
    merge_dicts(&[&a, &b], Some(&mut merged)).unwrap();
    assert_eq!(
        String::from_utf8(merged).unwrap(),
        "# http\n\"GET\"\nkw=\"\\x0d\\x0a\"\n\n\"POST\""
    );
}

#[test]
fn stops_at_first_invalid_entry() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.dict", "\"ok\"\n");
    let bad = write(&dir, "bad.dict", "\"fine\"\n\"\\A\"\n\"never\"\n");
    let unread = write(&dir, "unread.dict", "\"unread\"\n");

    let mut merged = Vec::new();
    match merge_dicts(&[&good, &bad, &unread], Some(&mut merged)) {
        Err(DictError::InvalidEntry {
            path,
            line_number,
            line,
        }) => {
            assert_eq!(path, bad);
            assert_eq!(line_number, 2);
            assert_eq!(line, "\"\\A\"");
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(String::from_utf8(merged).unwrap(), "\"ok\"\n\"fine\"\n");
}

#[test]
fn missing_file_is_described() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.dict");

    match check_dicts(&[&missing]) {
        Err(DictError::Io(status)) => {
            assert_eq!(status.code(), StatusCode::Unknown);
            assert_eq!(
                status.message(),
                format!(
                    "could not open dictionary file {} (No such file or directory)",
                    missing.display()
                )
            );
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn validates_without_output() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plain.dict", "\"a\"\r\n\"b\"\r\n");
    validate_dict(&path, None::<&mut Vec<u8>>).unwrap();
    check_dicts(&[path]).unwrap();
}

#[test]
fn normalizes_line_endings() {
    let dir = TempDir::new().unwrap();
    let crlf = write(&dir, "crlf.dict", "\"a\"\r\n# note\r\n\r\n\"b\"\r\n");
    let unterminated = write(&dir, "last.dict", "\"c\"\n\"d\"");

    let mut merged = Vec::new();
    merge_dicts(&[&crlf, &unterminated], Some(&mut merged)).unwrap();
    assert_eq!(
        String::from_utf8(merged).unwrap(),
        "\"a\"\n# note\n\n\"b\"\n\"c\"\n\"d\""
    );
}
