// src/tests/recordextractor_tests.rs

//! tests for `recordextractor.rs`

use crate::data::record::{Record, TimeSeries, Value};
use crate::data::section::{SectionType, section_patterns};
use crate::readers::columnresolver::{ColumnIndex, resolve};
use crate::readers::recordextractor::{ExtractStats, extract, extract_with_stats};
use crate::tests::common::{
    HEADER_CPU_24H,
    HEADER_MEM_24H,
    HEADER_NET_24H,
    SAR_CPU_AMPM,
};

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap()
}

fn columnindex(
    sectiontype: SectionType,
    header: &str,
) -> ColumnIndex {
    resolve(&section_patterns(sectiontype).unwrap().fields, header)
}

fn keys(series: &TimeSeries) -> Vec<&str> {
    series.keys().map(String::as_str).collect()
}

#[test]
fn test_extract_cpu_ampm() {
    let ci = columnindex(SectionType::CPU, first_line(SAR_CPU_AMPM));
    let series: TimeSeries = extract(SectionType::CPU, SAR_CPU_AMPM, &ci);
    assert_eq!(keys(&series), vec!["09:00:01", "13:00:01"]);
    let record: &Record = &series["09:00:01"];
    let all = record.subentity("all").unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all["usr"], Value::Float(1.0));
    assert_eq!(all["nice"], Value::Float(0.0));
    assert_eq!(all["sys"], Value::Float(0.5));
    assert_eq!(all["iowait"], Value::Float(0.0));
    assert_eq!(all["idle"], Value::Float(98.5));
    let record: &Record = &series["13:00:01"];
    assert_eq!(record.get(Some("all"), "usr"), Some(&Value::Float(2.0)));
    assert_eq!(record.get(Some("all"), "idle"), Some(&Value::Float(97.0)));
}

#[test]
fn test_extract_mem_value_kinds() {
    let text = format!("{}\n00:10:01       102400    921600     90.00     10240    409600", HEADER_MEM_24H);
    let ci = columnindex(SectionType::MEM, HEADER_MEM_24H);
    let series: TimeSeries = extract(SectionType::MEM, &text, &ci);
    let metrics = series["00:10:01"].flat().unwrap();
    assert_eq!(metrics["memfree"], Value::Int(102400));
    assert_eq!(metrics["memused"], Value::Int(921600));
    assert_eq!(metrics["memusedpercent"], Value::Float(90.0));
    assert_eq!(metrics["membuffer"], Value::Int(10240));
    assert_eq!(metrics["memcache"], Value::Int(409600));
}

#[test]
fn test_extract_net_subentities() {
    let text = format!(
        "{}\n00:10:01           lo      1.00      1.00      0.10      0.10      0.00      0.00      0.00\n00:10:01         eth0     10.00      8.00      2.50      1.25      0.00      0.00      0.00",
        HEADER_NET_24H
    );
    let ci = columnindex(SectionType::NET, HEADER_NET_24H);
    let series: TimeSeries = extract(SectionType::NET, &text, &ci);
    assert_eq!(keys(&series), vec!["00:10:01"]);
    let record: &Record = &series["00:10:01"];
    assert_eq!(record.get(Some("eth0"), "rxkB"), Some(&Value::Float(2.5)));
    assert_eq!(record.get(Some("eth0"), "txkB"), Some(&Value::Float(1.25)));
    assert_eq!(record.get(Some("eth0"), "iface"), Some(&Value::from("eth0")));
    assert_eq!(record.get(Some("lo"), "rxkB"), Some(&Value::Float(0.1)));
    assert_eq!(record.get(None, "rxkB"), None);
}

#[test]
fn test_extract_absent_column_omitted() {
    let header = "00:00:01 CPU %user %nice %system %idle";
    let text = format!("{}\n00:10:01 all 1.00 0.00 0.50 98.50\n00:20:01 all 2.00 0.00 1.00 97.00", header);
    let ci = columnindex(SectionType::CPU, header);
    assert!(!ci.is_present("iowait"));
    let series: TimeSeries = extract(SectionType::CPU, &text, &ci);
    assert_eq!(series.len(), 2);
    for record in series.values() {
        let all = record.subentity("all").unwrap();
        assert!(!all.contains_key("iowait"));
        assert_eq!(all.len(), 4);
    }
}

#[test]
fn test_extract_short_and_unparseable_omitted() {
    let text = format!(
        "{}\n00:10:01 all 1.00 abc\n00:20:01 all",
        HEADER_CPU_24H
    );
    let ci = columnindex(SectionType::CPU, HEADER_CPU_24H);
    let series: TimeSeries = extract(SectionType::CPU, &text, &ci);
    assert_eq!(keys(&series), vec!["00:10:01", "00:20:01"]);
    let m1 = series["00:10:01"].subentity("all").unwrap();
    assert_eq!(m1.len(), 1);
    assert_eq!(m1["usr"], Value::Float(1.0));
    let m2 = series["00:20:01"].subentity("all").unwrap();
    assert!(m2.is_empty());
}

#[test]
fn test_extract_skips_average_header_restart() {
    let text = format!(
        "{0}\n00:10:01 all 1.00 0.00 0.50 0.00 0.00 98.50\nAverage: all 1.00 0.00 0.50 0.00 0.00 98.50\n10:05:01 LINUX RESTART\n{0}\n10:10:01 all 2.00 0.00 1.00 0.00 0.00 97.00\n\n",
        HEADER_CPU_24H
    );
    let ci = columnindex(SectionType::CPU, HEADER_CPU_24H);
    let (series, stats): (TimeSeries, ExtractStats) = extract_with_stats(SectionType::CPU, &text, &ci);
    assert_eq!(keys(&series), vec!["00:10:01", "10:10:01"]);
    assert!(!series.contains_key("Average:"));
    assert!(!series.contains_key("10:05:01"));
    assert_eq!(stats.lines_data, 2);
    assert_eq!(stats.lines_average, 1);
    assert_eq!(stats.lines_header, 2);
    assert_eq!(stats.lines_malformed, 0);
}

#[test]
fn test_extract_malformed_12hour_skipped() {
    let text = "09:00:01 AM CPU %usr %nice %sys %iowait %idle\nxx:00:01 AM all 1.00 0.00 0.50 0.00 98.50\n10:00:01 AM all 2.00 0.00 1.00 0.00 97.00";
    let ci = columnindex(SectionType::CPU, first_line(text));
    let (series, stats) = extract_with_stats(SectionType::CPU, text, &ci);
    assert_eq!(keys(&series), vec!["10:00:01"]);
    assert_eq!(stats.lines_malformed, 1);
}

#[test]
fn test_extract_merge_never_erases() {
    // same timestamp twice, second line adds another CPU id
    let text = format!(
        "{}\n00:10:01 all 1.00 0.00 0.50 0.00 0.00 98.50\n00:10:01 0 3.00 0.00 0.50 0.00 0.00 96.50\n00:10:01 all 1.50 0.00 0.50 0.00 0.00 98.00",
        HEADER_CPU_24H
    );
    let ci = columnindex(SectionType::CPU, HEADER_CPU_24H);
    let series: TimeSeries = extract(SectionType::CPU, &text, &ci);
    assert_eq!(series.len(), 1);
    let record: &Record = &series["00:10:01"];
    assert_eq!(record.get(Some("0"), "usr"), Some(&Value::Float(3.0)));
    // later value overwrites
    assert_eq!(record.get(Some("all"), "usr"), Some(&Value::Float(1.5)));
}

#[test]
fn test_extract_not_a_data_type() {
    let ci = columnindex(SectionType::CPU, HEADER_CPU_24H);
    let (series, stats) = extract_with_stats(SectionType::RESTART, "10:05:01 LINUX RESTART", &ci);
    assert!(series.is_empty());
    assert_eq!(stats, ExtractStats::default());
}

#[test]
fn test_extract_no_time_of_day_skipped() {
    let text = format!(
        "{}\nLinux 5.14.0-284.el9.x86_64 (myhost) \t2023-03-04 \t_x86_64_\t(2 CPU)\n00:10:01 all 1.00 0.00 0.50 0.00 0.00 98.50\n€€€€€€€€€€ 1.00 2.00\n25:10:01 all 1.00 0.00 0.50 0.00 0.00 98.50",
        HEADER_CPU_24H
    );
    let ci = columnindex(SectionType::CPU, HEADER_CPU_24H);
    let (series, stats) = extract_with_stats(SectionType::CPU, &text, &ci);
    assert_eq!(keys(&series), vec!["00:10:01"]);
    assert_eq!(stats.lines_data, 1);
    assert_eq!(stats.lines_malformed, 3);
}
