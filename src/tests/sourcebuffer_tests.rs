// src/tests/sourcebuffer_tests.rs

//! tests for `sourcebuffer.rs`

use crate::common::FPath;
use crate::debug::helpers::{
    NamedTempFile,
    create_temp_file,
    create_temp_file_bytes,
    ntf_fpath,
};
use crate::readers::sourcebuffer::SourceBuffer;
use crate::tests::common::SAR_DAY_12H;

use std::io::ErrorKind;
use std::path::Path;

#[test]
fn test_open_file_is_mapped() {
    let ntf: NamedTempFile = create_temp_file(SAR_DAY_12H);
    let fpath: FPath = ntf_fpath(&ntf);
    let source = SourceBuffer::open(Path::new(&fpath)).unwrap();
    assert!(source.is_mapped());
    assert_eq!(source.len(), SAR_DAY_12H.len());
    assert_eq!(source.as_text(), SAR_DAY_12H);
    assert_eq!(source.path(), Some(&fpath));
}

#[test]
fn test_open_empty_file() {
    let ntf: NamedTempFile = create_temp_file("");
    let fpath: FPath = ntf_fpath(&ntf);
    let source = SourceBuffer::open(Path::new(&fpath)).unwrap();
    assert!(!source.is_mapped());
    assert!(source.is_empty());
    assert_eq!(source.as_text(), "");
    assert_eq!(source.path(), Some(&fpath));
}

#[test]
fn test_open_missing_file() {
    let fpath: FPath = FPath::from("/THIS/PATH/DOES/NOT/EXIST/sar04");
    let err = SourceBuffer::open(Path::new(&fpath)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains(&fpath), "error {:?} does not name path", err.to_string());
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let data: &[u8] = b"12:00:01 AM \xFF all\n";
    let ntf: NamedTempFile = create_temp_file_bytes(data);
    let source = SourceBuffer::open(Path::new(&ntf_fpath(&ntf))).unwrap();
    assert_eq!(source.len(), data.len());
    assert_eq!(source.len(), 18);
    assert_eq!(source.as_text(), "12:00:01 AM \u{FFFD} all\n");
}

#[test]
fn test_from_string() {
    let source = SourceBuffer::from(SAR_DAY_12H);
    assert!(!source.is_mapped());
    assert_eq!(source.path(), None);
    assert_eq!(source.as_bytes(), SAR_DAY_12H.as_bytes());
    let source = SourceBuffer::from_string(String::from("abc"));
    assert_eq!(source.len(), 3);
    let debug = format!("{:?}", source);
    assert!(debug.contains("len: 3"), "{}", debug);
}
