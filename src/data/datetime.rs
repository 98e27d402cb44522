// src/data/datetime.rs

//! Functions to normalize `sar` timestamps and dates.
//!
//! `sar` prints each data line with a leading time-of-day, in 24-hour form
//!
//! ```text
//! 13:00:01        all      2.00      0.00      1.00      0.00     97.00
//! ```
//!
//! or, depending on the locale, in 12-hour form
//!
//! ```text
//! 01:00:01 PM     all      2.00      0.00      1.00      0.00     97.00
//! ```
//!
//! Both become the canonical [`Timestamp`] `"13:00:01"`.
//!
//! The most relevant function is [`normalize_line`].
//!
//! The report header line carries the date, e.g.
//!
//! ```text
//! Linux 3.10.0-1160.el7.x86_64 (myhost)  03/04/2023  _x86_64_  (4 CPU)
//! ```
//!
//! That date becomes `"2023-03-04"` via [`normalize_date`].

use crate::common::TokenIndex;

use std::borrow::Cow;
use std::fmt;

use ::chrono::{NaiveDate, NaiveTime};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// timestamps
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Canonical 24-hour `HH:MM:SS` time-of-day.
pub type Timestamp = String;

/// Byte range of a line holding the `AM`/`PM` marker of a 12-hour
/// timestamp, e.g. `"01:00:01 PM"`.
pub const MERIDIEM_RANGE: std::ops::Range<usize> = 9..11;

/// Byte length of the `HH:MM:SS` prefix of a line.
pub const HMS_LEN: usize = 8;

/// Placeholder token inserted when rewriting a 12-hour line. Keeps token
/// positions of data lines aligned with header lines, which carry the
/// separate `AM`/`PM` token.
pub const MERIDIEM_PLACEHOLDER: &str = "XX";

/// Token index of the CPU id or interface name in a 24-hour line.
pub const SUBENTITY_INDEX_24HOUR: TokenIndex = 1;

/// Token index of the CPU id or interface name in a rewritten 12-hour
/// line.
pub const SUBENTITY_INDEX_12HOUR: TokenIndex = 2;

/// 12-hour clock marker.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Meridiem {
    AM,
    PM,
}

impl Meridiem {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Meridiem::AM => "AM",
            Meridiem::PM => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Return the [`Meridiem`] found at [`MERIDIEM_RANGE`] of `line`.
///
/// `None` means the line is 24-hour.
pub fn line_meridiem(line: &str) -> Option<Meridiem> {
    match line.as_bytes().get(MERIDIEM_RANGE) {
        Some(b"AM") => Some(Meridiem::AM),
        Some(b"PM") => Some(Meridiem::PM),
        _ => None,
    }
}

/// Convert 12-hour `HH:MM:SS` to the canonical 24-hour [`Timestamp`].
///
/// Hour `12` is `00` for AM, and stays `12` for PM. Other PM hours add 12.
///
/// `None` if the hour is not numeric.
pub fn hms12_to_timestamp(
    hms: &str,
    meridiem: Meridiem,
) -> Option<Timestamp> {
    let hh: &str = hms.get(..2)?;
    let rest: &str = hms.get(2..)?;
    let mut hour: u32 = match hh.parse::<u32>() {
        Ok(val) => val,
        Err(_err) => {
            defñ!("hour {:?} parse error {}", hh, _err);
            return None;
        }
    };
    let mut is_am: bool = meridiem == Meridiem::AM;
    if hour == 12 {
        if is_am {
            hour = 0;
        }
        is_am = !is_am;
    }
    if !is_am && hour != 0 {
        hour += 12;
    }

    Some(format!("{:02}{}", hour, rest))
}

/// A raw `sar` line made ready for tokenizing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedLine<'a> {
    /// the line to tokenize; rewritten for a 12-hour line
    pub text: Cow<'a, str>,
    /// canonical timestamp; the first token for a 24-hour line
    pub timestamp: Timestamp,
    /// `Some` if the line was 12-hour
    pub meridiem: Option<Meridiem>,
}

impl NormalizedLine<'_> {
    /// Token index of the CPU id or interface name.
    pub const fn subentity_index(&self) -> TokenIndex {
        match self.meridiem {
            Some(_) => SUBENTITY_INDEX_12HOUR,
            None => SUBENTITY_INDEX_24HOUR,
        }
    }

    /// The line used a 12-hour timestamp.
    pub const fn is_12hour(&self) -> bool {
        self.meridiem.is_some()
    }
}

/// Normalize the leading timestamp of a `sar` line.
///
/// A 24-hour line is unchanged and its first token is the timestamp.
///
/// A 12-hour line, e.g. `"01:00:01 PM     all      2.00"`, is rewritten
/// as `"01:00:01_PM XX     all      2.00"`. The timestamp token has the
/// `_PM` suffix stripped and is converted by [`hms12_to_timestamp`].
///
/// `None` for a blank line, or a 12-hour line with a malformed hour.
pub fn normalize_line(line: &str) -> Option<NormalizedLine<'_>> {
    let meridiem: Meridiem = match line_meridiem(line) {
        Some(val) => val,
        None => {
            let timestamp: &str = line.split_whitespace().next()?;
            return Some(NormalizedLine {
                text: Cow::Borrowed(line),
                timestamp: Timestamp::from(timestamp),
                meridiem: None,
            });
        }
    };
    let hms: &str = line.get(..HMS_LEN)?;
    let rest: &str = line.get(MERIDIEM_RANGE.end + 1..).unwrap_or("");
    let text: String = format!("{}_{} {} {}", hms, meridiem, MERIDIEM_PLACEHOLDER, rest);
    // first token, e.g. "01:00:01_PM", less the "_PM"
    let token: &str = text.split_whitespace().next()?;
    let token_hms: &str = token.get(..token.len().saturating_sub(3))?;
    let timestamp: Timestamp = hms12_to_timestamp(token_hms, meridiem)?;
    defñ!("{:?} {} → {:?}", token_hms, meridiem, timestamp);

    Some(NormalizedLine {
        text: Cow::Owned(text),
        timestamp,
        meridiem: Some(meridiem),
    })
}

/// chrono [`strftime`] pattern of a canonical [`Timestamp`].
///
/// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
pub const TIMESTAMP_PATTERN: &str = "%H:%M:%S";

/// `true` if `token` is a canonical `HH:MM:SS` [`Timestamp`].
pub fn is_timestamp(token: &str) -> bool {
    token.len() == HMS_LEN && NaiveTime::parse_from_str(token, TIMESTAMP_PATTERN).is_ok()
}

/// Return the canonical [`Timestamp`] of a raw `sar` line.
///
/// e.g. `"12:00:00 AM  all  1.00"` is `"00:00:00"`,
/// `"13:00:01  all  1.00"` is `"13:00:01"`.
pub fn normalize_timestamp(line: &str) -> Option<Timestamp> {
    normalize_line(line).map(|nl| nl.timestamp)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// dates
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Token index of the date within a `sar` report header line.
pub const HEADER_DATE_INDEX: TokenIndex = 3;

/// chrono [`strftime`] patterns of dates `sar` prints, tried in order.
///
/// `%y` precedes `%Y`; `%Y` would accept `"23"` as year 23.
///
/// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
pub const DATE_PATTERNS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
];

/// Canonical output pattern of [`normalize_date`].
pub const DATE_PATTERN_CANONICAL: &str = "%Y-%m-%d";

/// Convert a `sar` date token to `YYYY-MM-DD`.
///
/// A token matching none of [`DATE_PATTERNS`] is returned verbatim.
pub fn normalize_date(token: &str) -> String {
    for pattern in DATE_PATTERNS.iter() {
        if let Ok(date) = NaiveDate::parse_from_str(token, pattern) {
            return date.format(DATE_PATTERN_CANONICAL).to_string();
        }
    }
    defñ!("no pattern for {:?}", token);

    token.to_string()
}

/// Return the normalized date token of a report header line.
///
/// Only the first line of `text` is examined. `None` if that line has
/// fewer than four tokens.
pub fn header_line_date(text: &str) -> Option<String> {
    let first_line: &str = text.lines().next()?;
    let token: &str = first_line
        .split_whitespace()
        .nth(HEADER_DATE_INDEX)?;

    Some(normalize_date(token))
}
