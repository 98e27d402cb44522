// src/readers/summary.rs

//! Implements `SummarySarProcessor` statistics tracking struct.

#![allow(non_snake_case)]

use crate::common::Count;
use crate::data::section::SectionType;
use crate::readers::columnresolver::HeaderMismatch;
use crate::readers::recordextractor::ExtractStats;

use std::collections::BTreeMap;
use std::fmt;

use ::more_asserts::debug_assert_le;
use ::serde::Serialize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SummarySarProcessor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Accumulated statistics of one parse by a [`SarProcessor`].
///
/// For CLI option `--summary`.
///
/// [`SarProcessor`]: crate::readers::sarprocessor::SarProcessor
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SummarySarProcessor {
    /// bytes of the source
    pub SarProcessor_bytes: Count,
    /// days parsed; `1` unless parsing a combined multi-day source
    pub SarProcessor_days: Count,
    /// chunks found by the segmenter
    pub SarProcessor_chunks: Count,
    /// chunks matching no signature
    pub SarProcessor_chunks_unrecognized: Count,
    /// chunks matching each `SectionType`; one chunk may count under
    /// several types
    pub SarProcessor_chunks_per_type: BTreeMap<SectionType, Count>,
    /// `LINUX RESTART` markers found
    pub SarProcessor_restarts: Count,
    /// data lines extracted into a `TimeSeries`
    pub SarProcessor_lines_data: Count,
    /// `Average:` lines discarded
    pub SarProcessor_lines_average: Count,
    /// header lines skipped within merged sections
    pub SarProcessor_lines_header: Count,
    /// lines skipped for a malformed timestamp
    pub SarProcessor_lines_malformed: Count,
    /// later header lines disagreeing with the resolved header line
    #[serde(skip)]
    pub SarProcessor_header_mismatches: Vec<HeaderMismatch>,
}

impl SummarySarProcessor {
    pub fn new() -> SummarySarProcessor {
        SummarySarProcessor::default()
    }

    /// Count a chunk classified as `sectiontype`.
    pub fn count_chunk_type(
        &mut self,
        sectiontype: SectionType,
    ) {
        *self
            .SarProcessor_chunks_per_type
            .entry(sectiontype)
            .or_insert(0) += 1;
    }

    /// Chunks classified as `sectiontype`.
    pub fn chunks_of(
        &self,
        sectiontype: SectionType,
    ) -> Count {
        self.SarProcessor_chunks_per_type
            .get(&sectiontype)
            .copied()
            .unwrap_or(0)
    }

    /// Add the line counts of one `RecordExtractor` pass.
    pub fn add_extract_stats(
        &mut self,
        stats: &ExtractStats,
    ) {
        self.SarProcessor_lines_data += stats.lines_data;
        self.SarProcessor_lines_average += stats.lines_average;
        self.SarProcessor_lines_header += stats.lines_header;
        self.SarProcessor_lines_malformed += stats.lines_malformed;
    }

    /// Add all counts of `other`, e.g. the summary of one more day.
    pub fn absorb(
        &mut self,
        other: &SummarySarProcessor,
    ) {
        self.SarProcessor_days += other.SarProcessor_days;
        self.SarProcessor_chunks += other.SarProcessor_chunks;
        self.SarProcessor_chunks_unrecognized += other.SarProcessor_chunks_unrecognized;
        for (sectiontype, count) in other.SarProcessor_chunks_per_type.iter() {
            *self
                .SarProcessor_chunks_per_type
                .entry(*sectiontype)
                .or_insert(0) += count;
        }
        self.SarProcessor_restarts += other.SarProcessor_restarts;
        self.SarProcessor_lines_data += other.SarProcessor_lines_data;
        self.SarProcessor_lines_average += other.SarProcessor_lines_average;
        self.SarProcessor_lines_header += other.SarProcessor_lines_header;
        self.SarProcessor_lines_malformed += other.SarProcessor_lines_malformed;
        self.SarProcessor_header_mismatches
            .extend(other.SarProcessor_header_mismatches.iter().cloned());
        debug_assert_le!(
            self.SarProcessor_chunks_unrecognized,
            self.SarProcessor_chunks,
            "more unrecognized chunks than chunks"
        );
    }

    pub fn has_header_mismatch(&self) -> bool {
        !self.SarProcessor_header_mismatches.is_empty()
    }
}

impl fmt::Display for SummarySarProcessor {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        writeln!(f, "bytes              : {}", self.SarProcessor_bytes)?;
        writeln!(f, "days               : {}", self.SarProcessor_days)?;
        writeln!(f, "chunks             : {}", self.SarProcessor_chunks)?;
        writeln!(f, "chunks unrecognized: {}", self.SarProcessor_chunks_unrecognized)?;
        for sectiontype in SectionType::DATA.iter() {
            writeln!(f, "chunks {:<12}: {}", sectiontype.as_str(), self.chunks_of(*sectiontype))?;
        }
        writeln!(f, "restarts           : {}", self.SarProcessor_restarts)?;
        writeln!(f, "lines data         : {}", self.SarProcessor_lines_data)?;
        writeln!(f, "lines Average      : {}", self.SarProcessor_lines_average)?;
        writeln!(f, "lines header       : {}", self.SarProcessor_lines_header)?;
        writeln!(f, "lines malformed    : {}", self.SarProcessor_lines_malformed)?;
        write!(f, "header mismatches  : {}", self.SarProcessor_header_mismatches.len())?;
        for hm in self.SarProcessor_header_mismatches.iter() {
            write!(
                f,
                "\n  {}: expected {} tokens, found {} in {:?}",
                hm.sectiontype, hm.expected, hm.found, hm.header_line
            )?;
        }

        Ok(())
    }
}
