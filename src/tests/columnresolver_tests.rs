// src/tests/columnresolver_tests.rs

//! tests for `columnresolver.rs`

use crate::common::TokenIndex;
use crate::data::section::{SectionType, section_patterns};
use crate::readers::columnresolver::{
    ColumnIndex,
    HeaderMismatch,
    ParseContext,
    count_header_tokens,
    resolve,
};
use crate::tests::common::{
    HEADER_CPU_12H,
    HEADER_CPU_24H,
    HEADER_MEM_24H,
    HEADER_NET_24H,
};

use ::test_case::test_case;

fn resolve_for(
    sectiontype: SectionType,
    header: &str,
) -> ColumnIndex {
    resolve(&section_patterns(sectiontype).unwrap().fields, header)
}

#[test_case(HEADER_CPU_24H, "usr", Some(2); "24 usr")]
#[test_case(HEADER_CPU_24H, "nice", Some(3); "24 nice")]
#[test_case(HEADER_CPU_24H, "sys", Some(4); "24 sys")]
#[test_case(HEADER_CPU_24H, "iowait", Some(5); "24 iowait")]
#[test_case(HEADER_CPU_24H, "idle", Some(7); "24 idle")]
#[test_case(HEADER_CPU_12H, "usr", Some(3); "12 usr")]
#[test_case(HEADER_CPU_12H, "idle", Some(8); "12 idle")]
#[test_case("00:00:01 CPU %usr %nice %sys %idle", "iowait", None; "absent iowait")]
#[test_case("00:00:01 CPU %usr %nice %sys %idle", "idle", Some(5); "without iowait idle")]
#[test_case(HEADER_CPU_24H, "steal", None; "not a field")]
fn test_resolve_cpu(
    header: &str,
    field: &str,
    expect: Option<TokenIndex>,
) {
    let ci: ColumnIndex = resolve_for(SectionType::CPU, header);
    assert_eq!(ci.position(field), expect, "field {:?} header {:?}", field, header);
}

#[test]
fn test_resolve_mem() {
    let ci: ColumnIndex = resolve_for(SectionType::MEM, HEADER_MEM_24H);
    assert_eq!(ci.position("memfree"), Some(1));
    assert_eq!(ci.position("memused"), Some(2));
    assert_eq!(ci.position("memusedpercent"), Some(3));
    assert_eq!(ci.position("membuffer"), Some(4));
    assert_eq!(ci.position("memcache"), Some(5));
    assert_eq!(ci.count_present(), 5);
    assert_eq!(ci.header_tokens(), 6);
}

#[test]
fn test_resolve_net() {
    let ci: ColumnIndex = resolve_for(SectionType::NET, HEADER_NET_24H);
    assert_eq!(ci.position("iface"), Some(1));
    assert_eq!(ci.position("rxpck"), Some(2));
    assert_eq!(ci.position("txkB"), Some(5));
    assert_eq!(ci.position("rxmcst"), Some(8));
    assert_eq!(ci.count_present(), 8);
}

#[test]
fn test_resolve_is_deterministic() {
    let ci1: ColumnIndex = resolve_for(SectionType::CPU, HEADER_CPU_12H);
    let ci2: ColumnIndex = resolve_for(SectionType::CPU, HEADER_CPU_12H);
    assert_eq!(ci1, ci2);
    let names: Vec<&str> = ci1
        .columns()
        .iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["usr", "nice", "sys", "iowait", "idle"]);
}

#[test]
fn test_resolve_never_rebinds() {
    // the second "%user" does not move `usr`
    let ci: ColumnIndex = resolve_for(SectionType::CPU, "00:00:01 CPU %user %nice %user %sys");
    assert_eq!(ci.position("usr"), Some(2));
    assert_eq!(ci.position("sys"), Some(5));
}

#[test]
fn test_resolve_no_header() {
    let ci: ColumnIndex = resolve_for(SectionType::CPU, "");
    assert_eq!(ci.count_present(), 0);
    assert_eq!(ci.header_tokens(), 0);
    assert!(!ci.is_present("usr"));
}

#[test_case("", 0)]
#[test_case("a", 1)]
#[test_case(" a \t b  c ", 3)]
fn test_count_header_tokens(
    line: &str,
    expect: u64,
) {
    assert_eq!(count_header_tokens(line), expect);
}

#[test]
fn test_parsecontext_resolve_once() {
    let fields = &section_patterns(SectionType::CPU).unwrap().fields;
    let mut context = ParseContext::new();
    assert!(context.is_empty());
    assert!(context.resolve_once(SectionType::CPU, fields, HEADER_CPU_24H));
    // later header is not resolved again
    assert!(!context.resolve_once(SectionType::CPU, fields, HEADER_CPU_12H));
    assert_eq!(context.len(), 1);
    assert_eq!(context.get(SectionType::CPU).unwrap().position("usr"), Some(2));
    assert!(context.get(SectionType::MEM).is_none());
}

#[test]
fn test_parsecontext_check_header() {
    let fields = &section_patterns(SectionType::CPU).unwrap().fields;
    let mut context = ParseContext::new();
    assert_eq!(context.check_header(SectionType::CPU, HEADER_CPU_24H), None);
    context.resolve_once(SectionType::CPU, fields, HEADER_CPU_24H);
    assert_eq!(context.check_header(SectionType::CPU, HEADER_CPU_24H), None);
    let hm: HeaderMismatch = context
        .check_header(SectionType::CPU, HEADER_CPU_12H)
        .unwrap();
    assert_eq!(hm.sectiontype, SectionType::CPU);
    assert_eq!(hm.expected, 8);
    assert_eq!(hm.found, 9);
    assert_eq!(hm.header_line, HEADER_CPU_12H);
}
