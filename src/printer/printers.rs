// src/printer/printers.rs

//! Functions to format a [`ParsedLog`] or [`MultiDayBundle`] for the user,
//! as JSON or as a short text report.
//!
//! [`ParsedLog`]: crate::data::record::ParsedLog
//! [`MultiDayBundle`]: crate::data::record::MultiDayBundle

use crate::common::Count;
use crate::data::datetime::Timestamp;
use crate::data::record::{MultiDayBundle, ParsedLog, Record, TimeSeries};
use crate::data::section::SectionType;
#[allow(unused_imports)]
use crate::debug::printers::de_err;
use crate::readers::summary::SummarySarProcessor;

use std::fmt::Write as FmtWrite;
use std::io::Write;

use ::serde::Serialize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// output format
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Output format of parsed `sar` data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ::clap::ValueEnum)]
pub enum OutputFormat {
    /// the entire `ParsedLog` as JSON
    #[default]
    Json,
    /// counts and time range of each section
    Text,
}

/// Serialize `value` to JSON, indented if `pretty`.
pub fn to_json<T>(
    value: &T,
    pretty: bool,
) -> ::serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    match pretty {
        true => ::serde_json::to_string_pretty(value),
        false => ::serde_json::to_string(value),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// text report
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Earliest and latest [`Timestamp`] of `series`.
///
/// Keys are in arrival order so both ends are searched for.
pub fn time_range(series: &TimeSeries) -> Option<(&Timestamp, &Timestamp)> {
    let first: &Timestamp = series.keys().min()?;
    let last: &Timestamp = series.keys().max()?;

    Some((first, last))
}

/// Count of distinct sub-entities (CPU ids or interfaces) in `series`.
pub fn count_subentities(series: &TimeSeries) -> Count {
    let mut names: Vec<&str> = series
        .values()
        .filter_map(|record| match record {
            Record::Keyed(map) => Some(map.keys().map(String::as_str)),
            Record::Flat(_) => None,
        })
        .flatten()
        .collect();
    names.sort_unstable();
    names.dedup();

    names.len() as Count
}

/// Write a text report of `parsedlog` to `buffer`, each line indented by
/// `indent`.
fn write_parsedlog_text(
    buffer: &mut String,
    parsedlog: &ParsedLog,
    indent: &str,
) -> std::fmt::Result {
    writeln!(
        buffer,
        "{}date: {}",
        indent,
        parsedlog
            .file_date
            .as_deref()
            .unwrap_or("-")
    )?;
    for sectiontype in SectionType::DATA.iter() {
        let series: &TimeSeries = match parsedlog.series(*sectiontype) {
            Some(series) => series,
            None => continue,
        };
        write!(buffer, "{}{:<7} {:>5} timestamps", indent, sectiontype.as_str(), series.len())?;
        if let Some((first, last)) = time_range(series) {
            write!(buffer, ", {} ‥ {}", first, last)?;
        }
        if sectiontype.has_subentity() && !series.is_empty() {
            write!(buffer, ", {} sub-entities", count_subentities(series))?;
        }
        writeln!(buffer)?;
    }
    write!(buffer, "{}restarts: {}", indent, parsedlog.restarts.len())?;
    for restart in parsedlog.restarts.iter() {
        write!(buffer, " {}", restart)?;
    }
    writeln!(buffer)?;

    Ok(())
}

/// Text report of a `ParsedLog` read from `path`.
pub fn format_parsedlog_text(
    path: &str,
    parsedlog: &ParsedLog,
) -> String {
    let mut buffer = String::with_capacity(512);
    buffer.push_str(path);
    buffer.push('\n');
    if let Err(_err) = write_parsedlog_text(&mut buffer, parsedlog, "  ") {
        de_err!("write_parsedlog_text error {}", _err);
    }

    buffer
}

/// Text report of a `MultiDayBundle` read from `path`, one block per day.
pub fn format_bundle_text(
    path: &str,
    bundle: &MultiDayBundle,
) -> String {
    let mut buffer = String::with_capacity(512 * (bundle.len() + 1));
    buffer.push_str(path);
    buffer.push('\n');
    for (key, parsedlog) in bundle.iter() {
        buffer.push_str("  ");
        buffer.push_str(key);
        buffer.push_str(":\n");
        if let Err(_err) = write_parsedlog_text(&mut buffer, parsedlog, "    ") {
            de_err!("write_parsedlog_text error {}", _err);
        }
    }

    buffer
}

/// Text of `summary` for CLI option `--summary`.
pub fn format_summary(
    path: &str,
    summary: &SummarySarProcessor,
) -> String {
    let mut buffer = String::with_capacity(512);
    buffer.push_str("Summary of ");
    buffer.push_str(path);
    buffer.push('\n');
    for line in summary.to_string().lines() {
        buffer.push_str("  ");
        buffer.push_str(line);
        buffer.push('\n');
    }

    buffer
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// writing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Safely write the `buffer` to stdout with help of [`StdoutLock`].
///
/// [`StdoutLock`]: std::io::StdoutLock
pub fn write_stdout(buffer: &[u8]) {
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();
    match stdout_lock.write_all(buffer) {
        Ok(_) => {}
        Err(_err) => {
            // XXX: prints when stdout is truncated, e.g. `sarp … | head`
            de_err!("stdout_lock.write_all(buffer (len {})) error {}", buffer.len(), _err);
        }
    }
    match stdout_lock.flush() {
        Ok(_) => {}
        Err(_err) => {
            de_err!("stdout_lock.flush() error {}", _err);
        }
    }
}

/// Safely write the `buffer` to stderr with help of [`StderrLock`].
///
/// [`StderrLock`]: std::io::StderrLock
pub fn write_stderr(buffer: &[u8]) {
    let mut stderr_lock = std::io::stderr().lock();
    match stderr_lock.write_all(buffer) {
        Ok(_) => {}
        Err(_err) => {
            de_err!("stderr_lock.write_all(buffer (len {})) error {}", buffer.len(), _err);
        }
    }
    match stderr_lock.flush() {
        Ok(_) => {}
        Err(_err) => {
            de_err!("stderr flushing error {}", _err);
        }
    }
}
