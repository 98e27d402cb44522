// src/readers/recordextractor.rs

//! Extract a [`TimeSeries`] from the merged text of one [`SectionType`].

use crate::common::Count;
use crate::data::datetime::{NormalizedLine, is_timestamp, line_meridiem, normalize_line};
use crate::data::record::{Metrics, Record, TimeSeries};
use crate::data::section::{
    AVERAGE_TOKEN,
    RESTART_SIGNATURE,
    SectionType,
    is_any_header,
    section_patterns,
};
#[allow(unused_imports)]
use crate::debug::printers::de_wrn;
use crate::readers::columnresolver::ColumnIndex;

use ::more_asserts::debug_assert_ge;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Line counts of one [`extract_with_stats`] pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExtractStats {
    /// lines stored in the `TimeSeries`
    pub lines_data: Count,
    /// `Average:` lines discarded
    pub lines_average: Count,
    /// header lines skipped
    pub lines_header: Count,
    /// lines not starting with a valid time-of-day
    pub lines_malformed: Count,
}

/// Extract the [`TimeSeries`] of `sectiontype` from `merged_text`.
///
/// See [`extract_with_stats`].
pub fn extract(
    sectiontype: SectionType,
    merged_text: &str,
    columnindex: &ColumnIndex,
) -> TimeSeries {
    extract_with_stats(sectiontype, merged_text, columnindex).0
}

/// Extract the [`TimeSeries`] of `sectiontype` from `merged_text`, and
/// count the lines skipped.
///
/// Each data line is keyed by its canonical timestamp. `CPU` and `NET`
/// lines are further keyed by their sub-entity token. Values are taken from
/// the token positions of `columnindex`; a field whose position is absent,
/// beyond the end of the line, or whose token does not convert, is omitted.
///
/// Skipped lines are blank lines, header lines of any `SectionType`,
/// restart marker lines, `Average:` lines, and lines whose first token is
/// not a valid time-of-day (e.g. a 12-hour line with a non-numeric hour).
///
/// A timestamp seen again has its `Record` updated, never replaced.
pub fn extract_with_stats(
    sectiontype: SectionType,
    merged_text: &str,
    columnindex: &ColumnIndex,
) -> (TimeSeries, ExtractStats) {
    defn!("({}, merged_text len {})", sectiontype, merged_text.len());
    let mut series = TimeSeries::new();
    let mut stats = ExtractStats::default();
    if section_patterns(sectiontype).is_none() {
        defx!("{} is not a data type", sectiontype);
        return (series, stats);
    }
    for line in merged_text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        // a merged section may hold the header line of another type
        if is_any_header(line) {
            stats.lines_header += 1;
            continue;
        }
        if RESTART_SIGNATURE.is_match(line) {
            defo!("skip restart line {:?}", line);
            continue;
        }
        let nl: NormalizedLine = match normalize_line(line) {
            Some(nl) => nl,
            None => {
                if line_meridiem(line).is_some() {
                    de_wrn!("{} skip malformed 12-hour line {:?}", sectiontype, line);
                    stats.lines_malformed += 1;
                }
                continue;
            }
        };
        if nl.timestamp == AVERAGE_TOKEN {
            stats.lines_average += 1;
            continue;
        }
        if !is_timestamp(&nl.timestamp) {
            de_wrn!("{} skip line without a time-of-day {:?}", sectiontype, line);
            stats.lines_malformed += 1;
            continue;
        }
        let tokens: Vec<&str> = nl.text.split_whitespace().collect();
        let mut metrics = Metrics::with_capacity(columnindex.columns().len());
        for column in columnindex.columns().iter() {
            let position = match column.position {
                Some(position) => position,
                None => continue,
            };
            let token: &str = match tokens.get(position) {
                Some(token) => *token,
                None => continue,
            };
            if let Some(value) = column.kind.convert(token) {
                metrics.insert(column.name, value);
            }
        }
        debug_assert_ge!(columnindex.columns().len(), metrics.len());
        let subentity: Option<&str> = match sectiontype.has_subentity() {
            true => tokens.get(nl.subentity_index()).copied(),
            false => None,
        };
        defñ!("{:?} {:?} {} fields", nl.timestamp, subentity, metrics.len());
        series
            .entry(nl.timestamp)
            .or_insert_with(|| Record::new_for(sectiontype))
            .merge(subentity, metrics);
        stats.lines_data += 1;
    }
    defx!("{} timestamps; {:?}", series.len(), stats);

    (series, stats)
}
