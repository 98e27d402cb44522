// src/data/section.rs

//! Section types of `sar` ASCII output and the static [`PATTERN_CATALOG`]
//! of regular expressions used to recognize them.
//!
//! Each data [`SectionType`] has
//! 1. a header signature; a regular expression matching the column header
//!    line of that type of report, e.g. `sar -u` for [`SectionType::CPU`]
//! 2. an ordered list of canonical fields, each with a regular expression
//!    matching one column name token within the header line, and the
//!    [`ValueKind`] its values convert to
//!
//! The most relevant documents to understand this file are:
//! - `sar` manual page, section _REPORTS_
//! - `regex` crate [Regular Expression syntax].
//!
//! [`PATTERN_CATALOG`]: static@self::PATTERN_CATALOG
//! [Regular Expression syntax]: https://docs.rs/regex/1.11.1/regex/index.html#syntax

#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

use crate::data::record::ValueKind;

use std::collections::BTreeMap;
use std::fmt;

use ::lazy_static::lazy_static;
use ::regex::Regex;
use ::serde::Serialize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SectionType
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The kind of `sar` report a chunk of text holds.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum SectionType {
    /// `sar -u`, CPU utilization, one row per CPU id
    CPU,
    /// `sar -r`, memory utilization
    MEM,
    /// `sar -S`, swap utilization
    SWAP,
    /// `sar -b`, I/O transfer rates
    IO,
    /// `sar -B`, paging statistics
    PAGING,
    /// `sar -n DEV`, network statistics, one row per interface
    NET,
    /// `LINUX RESTART` reboot marker
    RESTART,
    /// matched no signature
    UNKNOWN,
}

impl SectionType {
    /// The six `SectionType`s that hold metric data, in catalog order.
    pub const DATA: [SectionType; 6] = [
        SectionType::CPU,
        SectionType::MEM,
        SectionType::SWAP,
        SectionType::IO,
        SectionType::PAGING,
        SectionType::NET,
    ];

    /// Lowercase name, also the key name used in serialized output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SectionType::CPU => "cpu",
            SectionType::MEM => "mem",
            SectionType::SWAP => "swap",
            SectionType::IO => "io",
            SectionType::PAGING => "paging",
            SectionType::NET => "net",
            SectionType::RESTART => "restart",
            SectionType::UNKNOWN => "unknown",
        }
    }

    /// Records of this type are keyed by a sub-entity (CPU id or network
    /// interface) under each timestamp.
    pub const fn has_subentity(&self) -> bool {
        matches!(self, SectionType::CPU | SectionType::NET)
    }

    /// Is this one of the six metric data types?
    pub const fn is_data(&self) -> bool {
        !matches!(self, SectionType::RESTART | SectionType::UNKNOWN)
    }
}

impl fmt::Display for SectionType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// regex patterns
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A regular expression pattern, passed to [`regex::Regex::new`].
///
/// [`regex::Regex::new`]: https://docs.rs/regex/1.11.1/regex/struct.Regex.html#method.new
pub type RegexPattern = str;

/// Canonical name of a field, the key within a [`Record`].
///
/// [`Record`]: crate::data::record::Record
pub type FieldName = &'static str;

/// [`RegexPattern`] header signature for `sar -u`
pub const RP_HEADER_CPU: &RegexPattern = r".*CPU.*(usr|user).*nice.*sys.*";
/// [`RegexPattern`] header signature for `sar -r`
pub const RP_HEADER_MEM: &RegexPattern = r".*kbmemfree.*kbmemused.*memused.*kbbuffers.*kbcached.*";
/// [`RegexPattern`] header signature for `sar -S`
pub const RP_HEADER_SWAP: &RegexPattern = r".*kbswpfree.*kbswpused.*swpused.*";
/// [`RegexPattern`] header signature for `sar -b`
pub const RP_HEADER_IO: &RegexPattern = r".*tps.*rtps.*wtps.*bread/s.*bwrtn/s.*";
/// [`RegexPattern`] header signature for `sar -B`
pub const RP_HEADER_PAGING: &RegexPattern =
    r".*pgpgin/s.*pgpgout/s.*fault/s.*majflt/s.*pgfree/s.*pgscank/s.*pgscand/s.*pgsteal/s.*%vmeff.*";
/// [`RegexPattern`] header signature for `sar -n DEV`
pub const RP_HEADER_NET: &RegexPattern =
    r".*IFACE.*rxpck/s.*txpck/s.*rxkB/s.*txkB/s.*rxcmp/s.*txcmp/s.*rxmcst/s.*";
/// [`RegexPattern`] signature of a reboot marker line
pub const RP_RESTART: &RegexPattern = r".*LINUX RESTART.*";

/// Token at the start of a line that begins each day's report within a
/// combined multi-day file, e.g.
///
/// ```text
/// Linux 5.14.0-284.el9.x86_64 (myhost)     03/04/2023      _x86_64_        (4 CPU)
/// ```
pub const DAY_BOUNDARY_MARKER: &str = "Linux";

/// First token of the per-section summary lines that are discarded.
pub const AVERAGE_TOKEN: &str = "Average:";

/// Static definition of one canonical field.
#[derive(Debug, Eq, PartialEq)]
pub struct FieldParseData {
    /// canonical field name
    pub name: FieldName,
    /// [`RegexPattern`] matching the column name token in a header line
    pub pattern: &'static RegexPattern,
    /// conversion applied to values of this field
    pub kind: ValueKind,
}

/// Helper to declare a [`FieldParseData`].
macro_rules! FPD {
    ($name:expr, $pattern:expr, $kind:expr) => {
        FieldParseData {
            name: $name,
            pattern: $pattern,
            kind: $kind,
        }
    };
}

pub const FIELDS_CPU: [FieldParseData; 5] = [
    FPD!("usr", r"%(usr|user)", ValueKind::Float),
    FPD!("nice", r"%nice", ValueKind::Float),
    FPD!("sys", r"%sys", ValueKind::Float),
    FPD!("iowait", r"%iowait", ValueKind::Float),
    FPD!("idle", r"%idle", ValueKind::Float),
];

pub const FIELDS_MEM: [FieldParseData; 5] = [
    FPD!("memfree", r"kbmemfree", ValueKind::Int),
    FPD!("memused", r"kbmemused", ValueKind::Int),
    FPD!("memusedpercent", r"%memused", ValueKind::Float),
    FPD!("membuffer", r"kbbuffers", ValueKind::Int),
    FPD!("memcache", r"kbcached", ValueKind::Int),
];

pub const FIELDS_SWAP: [FieldParseData; 3] = [
    FPD!("swapfree", r"kbswpfree", ValueKind::Int),
    FPD!("swapused", r"kbswpused", ValueKind::Int),
    FPD!("swapusedpercent", r"%swpused", ValueKind::Float),
];

pub const FIELDS_IO: [FieldParseData; 5] = [
    FPD!("tps", r"^tps", ValueKind::Float),
    FPD!("rtps", r"^rtps", ValueKind::Float),
    FPD!("wtps", r"^wtps", ValueKind::Float),
    FPD!("bread", r"bread/s", ValueKind::Float),
    FPD!("bwrite", r"bwrtn/s", ValueKind::Float),
];

pub const FIELDS_PAGING: [FieldParseData; 9] = [
    FPD!("pgpgin", r"^pgpgin/s", ValueKind::Float),
    FPD!("pgpgout", r"^pgpgout/s", ValueKind::Float),
    FPD!("fault", r"^fault/s", ValueKind::Float),
    FPD!("majflt", r"^majflt/s", ValueKind::Float),
    FPD!("pgfree", r"^pgfree/s", ValueKind::Float),
    FPD!("pgscank", r"pgscank/s", ValueKind::Float),
    FPD!("pgscand", r"pgscand/s", ValueKind::Float),
    FPD!("pgsteal", r"pgsteal/s", ValueKind::Float),
    FPD!("vmeff", r"%vmeff", ValueKind::Float),
];

pub const FIELDS_NET: [FieldParseData; 8] = [
    FPD!("iface", r"^IFACE", ValueKind::Text),
    FPD!("rxpck", r"^rxpck/s", ValueKind::Float),
    FPD!("txpck", r"^txpck/s", ValueKind::Float),
    FPD!("rxkB", r"^rxkB/s", ValueKind::Float),
    FPD!("txkB", r"^txkB/s", ValueKind::Float),
    FPD!("rxcmp", r"^rxcmp/s", ValueKind::Float),
    FPD!("txcmp", r"txcmp/s", ValueKind::Float),
    FPD!("rxmcst", r"rxmcst/s", ValueKind::Float),
];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PatternCatalog
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A compiled [`FieldParseData`].
#[derive(Debug)]
pub struct FieldRegex {
    pub name: FieldName,
    pub kind: ValueKind,
    pub regex: Regex,
}

/// The ordered field patterns of one `SectionType`.
pub type FieldSpec = Vec<FieldRegex>;

/// Compiled header signature and field patterns of one `SectionType`.
#[derive(Debug)]
pub struct SectionPatterns {
    pub sectiontype: SectionType,
    /// recognizes a header line of this `SectionType`
    pub header_signature: Regex,
    pub fields: FieldSpec,
}

impl SectionPatterns {
    fn new(
        sectiontype: SectionType,
        header_pattern: &RegexPattern,
        fields: &[FieldParseData],
    ) -> SectionPatterns {
        SectionPatterns {
            sectiontype,
            header_signature: Regex::new(header_pattern).unwrap(),
            fields: fields
                .iter()
                .map(|fpd| FieldRegex {
                    name: fpd.name,
                    kind: fpd.kind,
                    regex: Regex::new(fpd.pattern).unwrap(),
                })
                .collect(),
        }
    }

    /// Does any line of `text` match this header signature?
    #[inline(always)]
    pub fn is_header(
        &self,
        text: &str,
    ) -> bool {
        self.header_signature.is_match(text)
    }
}

pub type PatternCatalog = BTreeMap<SectionType, SectionPatterns>;

lazy_static! {
    /// All compiled section patterns, keyed by data `SectionType`.
    ///
    /// Compiled once on first use; never mutated afterward.
    pub static ref PATTERN_CATALOG: PatternCatalog = {
        let mut catalog = PatternCatalog::new();
        for sp in [
            SectionPatterns::new(SectionType::CPU, RP_HEADER_CPU, &FIELDS_CPU),
            SectionPatterns::new(SectionType::MEM, RP_HEADER_MEM, &FIELDS_MEM),
            SectionPatterns::new(SectionType::SWAP, RP_HEADER_SWAP, &FIELDS_SWAP),
            SectionPatterns::new(SectionType::IO, RP_HEADER_IO, &FIELDS_IO),
            SectionPatterns::new(SectionType::PAGING, RP_HEADER_PAGING, &FIELDS_PAGING),
            SectionPatterns::new(SectionType::NET, RP_HEADER_NET, &FIELDS_NET),
        ] {
            catalog.insert(sp.sectiontype, sp);
        }

        catalog
    };

    /// Signature of a reboot marker line.
    pub static ref RESTART_SIGNATURE: Regex = Regex::new(RP_RESTART).unwrap();
}

/// Return the compiled patterns for a data `SectionType`.
///
/// `None` for [`SectionType::RESTART`] and [`SectionType::UNKNOWN`].
pub fn section_patterns(sectiontype: SectionType) -> Option<&'static SectionPatterns> {
    PATTERN_CATALOG.get(&sectiontype)
}

/// Is `line` a header line of any data `SectionType`?
pub fn is_any_header(line: &str) -> bool {
    PATTERN_CATALOG
        .values()
        .any(|sp| sp.is_header(line))
}
