// src/readers/sectionclassifier.rs

//! Classify [`Chunk`]s by [`SectionType`] and merge chunks of the same type.
//!
//! A system rebooted during the day has more than one chunk of each
//! `SectionType`, e.g.
//!
//! ```text
//! 12:00:01 AM     CPU     %user     %nice   %system   %iowait    %steal     %idle
//! 12:10:01 AM     all      1.00      0.00      0.50      0.00      0.00     98.50
//!
//! 10:05:01 AM       LINUX RESTART
//!
//! 10:10:01 AM     CPU     %user     %nice   %system   %iowait    %steal     %idle
//! 10:20:01 AM     all      2.00      0.00      1.00      0.00      0.00     97.00
//! ```
//!
//! Both `CPU` chunks become one merged section.
//!
//! [`Chunk`]: crate::readers::segmenter::Chunk

use crate::common::NLs;
use crate::data::datetime::{Timestamp, normalize_timestamp};
use crate::data::record::RestartEvents;
use crate::data::section::{
    RESTART_SIGNATURE,
    SectionPatterns,
    SectionType,
    section_patterns,
};
#[allow(unused_imports)]
use crate::debug::printers::{de_wrn, str_to_String_noraw_trunc};
use crate::readers::columnresolver::ParseContext;
use crate::readers::segmenter::Chunk;
use crate::readers::summary::SummarySarProcessor;

use std::collections::BTreeMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Merged text of each data `SectionType`, chunks joined by `"\n"` in
/// arrival order.
pub type MergedSections = BTreeMap<SectionType, String>;

/// Result of [`classify_and_merge`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClassifiedSections {
    pub merged: MergedSections,
    /// restart marker timestamps, in file order
    pub restarts: RestartEvents,
}

impl ClassifiedSections {
    pub fn merged_text(
        &self,
        sectiontype: SectionType,
    ) -> Option<&str> {
        self.merged
            .get(&sectiontype)
            .map(String::as_str)
    }
}

/// Canonical timestamp of the restart marker line within `chunk`.
///
/// `None` if no line is a restart marker, or its timestamp is malformed.
pub fn restart_timestamp(chunk: &str) -> Option<Timestamp> {
    let line: &str = chunk
        .lines()
        .find(|line| RESTART_SIGNATURE.is_match(line))?;

    normalize_timestamp(line.trim_start())
}

/// Compare every header line of `sectiontype` within `chunk` to the
/// resolved header line. Each disagreeing token count is recorded in
/// `summary`.
fn check_headers(
    sectiontype: SectionType,
    sp: &SectionPatterns,
    chunk: &str,
    context: &ParseContext,
    summary: &mut SummarySarProcessor,
) {
    for line in chunk.lines().filter(|line| sp.is_header(line)) {
        if let Some(hm) = context.check_header(sectiontype, line) {
            de_wrn!(
                "{} header line has {} tokens, expected {}: {:?}",
                hm.sectiontype,
                hm.found,
                hm.expected,
                hm.header_line
            );
            summary
                .SarProcessor_header_mismatches
                .push(hm);
        }
    }
}

/// Classify each of `chunks` and merge chunks of the same `SectionType`.
///
/// A chunk is tested against every data `SectionType` header signature
/// independently; a chunk matching several signatures is merged into each
/// of those sections. The first chunk of a `SectionType` has its first
/// line resolved into the `ColumnIndex` of `context`. Any header line,
/// in any chunk of that type, with a different token count is recorded in
/// `summary` as a [`HeaderMismatch`].
///
/// Chunks matching the restart signature add to the restart events. Chunks
/// matching nothing are counted in `summary` and otherwise ignored.
///
/// [`HeaderMismatch`]: crate::readers::columnresolver::HeaderMismatch
pub fn classify_and_merge(
    chunks: &[Chunk],
    context: &mut ParseContext,
    summary: &mut SummarySarProcessor,
) -> ClassifiedSections {
    defn!("({} chunks)", chunks.len());
    let mut classified = ClassifiedSections::default();
    for chunk in chunks.iter() {
        summary.SarProcessor_chunks += 1;
        defo!("chunk {:?}", str_to_String_noraw_trunc(chunk, 60));
        let mut matched: bool = false;
        let first_line: &str = chunk.lines().next().unwrap_or(chunk);
        for sectiontype in SectionType::DATA.iter() {
            let sp: &SectionPatterns = match section_patterns(*sectiontype) {
                Some(sp) => sp,
                None => continue,
            };
            if !sp.is_header(chunk) {
                continue;
            }
            matched = true;
            summary.count_chunk_type(*sectiontype);
            match classified.merged.get_mut(sectiontype) {
                None => {
                    defo!("first {} chunk", sectiontype);
                    context.resolve_once(*sectiontype, &sp.fields, first_line);
                    classified
                        .merged
                        .insert(*sectiontype, chunk.to_string());
                }
                Some(text) => {
                    defo!("append {} chunk", sectiontype);
                    text.push_str(NLs);
                    text.push_str(chunk);
                }
            }
            check_headers(*sectiontype, sp, chunk, context, summary);
        }
        if RESTART_SIGNATURE.is_match(chunk) {
            matched = true;
            match restart_timestamp(chunk) {
                Some(timestamp) => {
                    defo!("restart at {:?}", timestamp);
                    summary.SarProcessor_restarts += 1;
                    classified.restarts.push(timestamp);
                }
                None => {
                    de_wrn!("malformed restart line in {:?}", str_to_String_noraw_trunc(chunk, 60));
                    summary.SarProcessor_lines_malformed += 1;
                }
            }
        }
        if !matched {
            defo!("unrecognized chunk");
            summary.SarProcessor_chunks_unrecognized += 1;
        }
    }
    defx!("{} sections, {} restarts", classified.merged.len(), classified.restarts.len());

    classified
}
