// src/readers/multidaysplitter.rs

//! Divide a combined multi-day `sar` buffer into one buffer per day.
//!
//! A combined file is several daily `sar` outputs concatenated, e.g.
//! `cat sar01 sar02 > combo`. Each day begins with a report header line
//! starting with [`DAY_BOUNDARY_MARKER`]:
//!
//! ```text
//! Linux 3.10.0-1160.el7.x86_64 (myhost)  03/04/2023  _x86_64_  (4 CPU)
//! ```
//!
//! [`DAY_BOUNDARY_MARKER`]: crate::data::section::DAY_BOUNDARY_MARKER

use crate::common::BufferOffset;
use crate::data::datetime::header_line_date;
use crate::data::record::DATE_UNKNOWN;
use crate::data::section::DAY_BOUNDARY_MARKER;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// One day's slice of a combined buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DayBuffer<'a> {
    /// `YYYY-MM-DD` from the day's header line; `None` if unavailable
    pub date: Option<String>,
    pub buffer: &'a str,
}

impl DayBuffer<'_> {
    /// The date, or [`DATE_UNKNOWN`].
    pub fn date_or_unknown(&self) -> &str {
        self.date.as_deref().unwrap_or(DATE_UNKNOWN)
    }
}

/// Byte offsets of every [`DAY_BOUNDARY_MARKER`] at the start of a line.
pub fn marker_offsets(buffer: &str) -> Vec<BufferOffset> {
    let bytes: &[u8] = buffer.as_bytes();

    buffer
        .match_indices(DAY_BOUNDARY_MARKER)
        .map(|(offset, _)| offset)
        .filter(|offset| *offset == 0 || bytes[*offset - 1] == b'\n')
        .collect()
}

/// Split `buffer` into one [`DayBuffer`] per day-boundary marker.
///
/// A day spans from its marker to the next marker, or to the end of
/// `buffer`. Bytes before the first marker belong to no day.
///
/// If there is no marker then the entire `buffer` is one day with no date.
pub fn split_days(buffer: &str) -> Vec<DayBuffer<'_>> {
    defn!("(buffer len {})", buffer.len());
    let offsets: Vec<BufferOffset> = marker_offsets(buffer);
    if offsets.is_empty() {
        defx!("no day-boundary marker");
        return vec![DayBuffer { date: None, buffer }];
    }
    let mut days: Vec<DayBuffer> = Vec::with_capacity(offsets.len());
    for (i, start) in offsets.iter().enumerate() {
        let end: BufferOffset = match offsets.get(i + 1) {
            Some(next) => *next,
            None => buffer.len(),
        };
        let sub: &str = &buffer[*start..end];
        let date: Option<String> = report_date(sub);
        defo!("day {} [{}‥{}) date {:?}", i, start, end, date);
        days.push(DayBuffer { date, buffer: sub });
    }
    defx!("return {} days", days.len());

    days
}

/// The normalized date of the report header line at the start of `text`.
///
/// `None` if the first line of `text` does not begin with
/// [`DAY_BOUNDARY_MARKER`] or has no date token.
pub fn report_date(text: &str) -> Option<String> {
    if !text.starts_with(DAY_BOUNDARY_MARKER) {
        return None;
    }

    header_line_date(text)
}

/// Return a key for `date` not yet used by `is_used`.
///
/// `None` becomes [`DATE_UNKNOWN`]. A key already used gets a `#N` suffix,
/// e.g. `"unknown#2"`, so no day overwrites another.
pub fn unique_day_key<F>(
    date: Option<&str>,
    is_used: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    let base: &str = date.unwrap_or(DATE_UNKNOWN);
    if !is_used(base) {
        return base.to_string();
    }
    let mut n: usize = 2;
    loop {
        let key: String = format!("{}#{}", base, n);
        if !is_used(&key) {
            return key;
        }
        n += 1;
    }
}
