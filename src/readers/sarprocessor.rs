// src/readers/sarprocessor.rs

//! Implements a [`SarProcessor`], the driver of the processing stages for
//! `sar` ASCII output.
//!
//! The stages are
//! 1. [`split_days`] (only for a combined multi-day source)
//! 2. [`segment`]
//! 3. [`classify_and_merge`], which resolves each [`ColumnIndex`] once
//! 4. [`extract_with_stats`] for each merged section
//!
//! Also see the free functions [`parse`] and [`parse_multi`].
//!
//! [`split_days`]: crate::readers::multidaysplitter::split_days
//! [`segment`]: crate::readers::segmenter::segment
//! [`classify_and_merge`]: crate::readers::sectionclassifier::classify_and_merge
//! [`ColumnIndex`]: crate::readers::columnresolver::ColumnIndex
//! [`extract_with_stats`]: crate::readers::recordextractor::extract_with_stats

use crate::common::{Count, FPath, Path};
use crate::data::record::{MultiDayBundle, ParsedLog, TimeSeries};
use crate::readers::columnresolver::{ColumnIndex, ParseContext};
use crate::readers::multidaysplitter::{report_date, split_days, unique_day_key};
use crate::readers::recordextractor::{ExtractStats, extract_with_stats};
use crate::readers::sectionclassifier::{ClassifiedSections, classify_and_merge};
use crate::readers::segmenter::{Chunks, segment};
use crate::readers::sourcebuffer::SourceBuffer;
use crate::readers::summary::SummarySarProcessor;

use std::fmt;
use std::io::Result;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parse functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Run all stages over the text of one day.
fn parse_day(
    text: &str,
    summary: &mut SummarySarProcessor,
) -> ParsedLog {
    defn!("(text len {})", text.len());
    summary.SarProcessor_days += 1;
    let chunks: Chunks = segment(text);
    let mut context = ParseContext::new();
    let ClassifiedSections { merged, restarts } = classify_and_merge(&chunks, &mut context, summary);
    let mut parsedlog = ParsedLog {
        restarts,
        file_date: report_date(text),
        ..Default::default()
    };
    for (sectiontype, merged_text) in merged.iter() {
        let columnindex: &ColumnIndex = match context.get(*sectiontype) {
            Some(ci) => ci,
            None => continue,
        };
        let (series, stats): (TimeSeries, ExtractStats) =
            extract_with_stats(*sectiontype, merged_text, columnindex);
        summary.add_extract_stats(&stats);
        if let Some(slot) = parsedlog.series_mut(*sectiontype) {
            *slot = series;
        }
    }
    defx!("{} timestamps, {} restarts", parsedlog.count_timestamps(), parsedlog.restarts.len());

    parsedlog
}

/// Parse `text` as the output of one `sar` day, accumulating statistics in
/// `summary`.
pub fn parse_str_summary(
    text: &str,
    summary: &mut SummarySarProcessor,
) -> ParsedLog {
    summary.SarProcessor_bytes += text.len() as Count;

    parse_day(text, summary)
}

/// Parse `text` as the output of one `sar` day.
///
/// Never fails; text without any recognized section returns an empty
/// [`ParsedLog`].
pub fn parse_str(text: &str) -> ParsedLog {
    let mut summary = SummarySarProcessor::new();

    parse_str_summary(text, &mut summary)
}

/// Parse a [`SourceBuffer`] as the output of one `sar` day.
pub fn parse(source: &SourceBuffer) -> ParsedLog {
    parse_str(&source.as_text())
}

/// Parse `text` as a combined multi-day file, accumulating statistics in
/// `summary`.
pub fn parse_multi_str_summary(
    text: &str,
    summary: &mut SummarySarProcessor,
) -> MultiDayBundle {
    defn!("(text len {})", text.len());
    summary.SarProcessor_bytes += text.len() as Count;
    let mut bundle = MultiDayBundle::new();
    for day in split_days(text).into_iter() {
        let key: String = unique_day_key(day.date.as_deref(), |k| bundle.contains_key(k));
        defo!("day {:?}", key);
        let mut summary_day = SummarySarProcessor::new();
        let parsedlog: ParsedLog = parse_day(day.buffer, &mut summary_day);
        summary.absorb(&summary_day);
        bundle.insert(key, parsedlog);
    }
    defx!("{} days", bundle.len());

    bundle
}

/// Parse `text` as a combined multi-day file.
///
/// Each day is parsed independently and keyed by its `YYYY-MM-DD` date.
pub fn parse_multi_str(text: &str) -> MultiDayBundle {
    let mut summary = SummarySarProcessor::new();

    parse_multi_str_summary(text, &mut summary)
}

/// Parse a [`SourceBuffer`] as a combined multi-day file.
pub fn parse_multi(source: &SourceBuffer) -> MultiDayBundle {
    parse_multi_str(&source.as_text())
}

/// Read and parse the `sar` file at `path`.
pub fn parse_path(path: &Path) -> Result<ParsedLog> {
    let source: SourceBuffer = SourceBuffer::open(path)?;

    Ok(parse(&source))
}

/// Read and parse the combined multi-day `sar` file at `path`.
pub fn parse_multi_path(path: &Path) -> Result<MultiDayBundle> {
    let source: SourceBuffer = SourceBuffer::open(path)?;

    Ok(parse_multi(&source))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SarProcessor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The `SarProcessor` owns one [`SourceBuffer`] and parses it on demand.
///
/// Results are cached; the first call to [`parsed`] or [`multiday`] parses,
/// later calls return the cached result.
///
/// [`parsed`]: self::SarProcessor#method.parsed
/// [`multiday`]: self::SarProcessor#method.multiday
pub struct SarProcessor {
    source: SourceBuffer,
    /// cached result of `parsed()`
    parsedlog: Option<ParsedLog>,
    /// cached result of `multiday()`
    bundle: Option<MultiDayBundle>,
    /// statistics of `parsed()`
    summary: SummarySarProcessor,
    /// statistics of `multiday()`
    summary_multiday: SummarySarProcessor,
}

impl fmt::Debug for SarProcessor {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("SarProcessor")
            .field("Path", &self.path())
            .field("Bytes", &self.source.len())
            .field("Parsed?", &self.parsedlog.is_some())
            .field("Parsed multiday?", &self.bundle.is_some())
            .finish()
    }
}

impl SarProcessor {
    /// Create a new `SarProcessor` for the file at `path`.
    ///
    /// The file is read here; the parse is deferred.
    pub fn new(path: &Path) -> Result<SarProcessor> {
        defn!("({:?})", path);
        let source: SourceBuffer = match SourceBuffer::open(path) {
            Ok(val) => val,
            Err(err) => {
                defx!("error {}", err);
                return Err(err);
            }
        };
        defx!("return Ok(SarProcessor)");

        Ok(SarProcessor::from_source(source))
    }

    /// Create a new `SarProcessor` for text already in memory.
    pub fn from_text(text: String) -> SarProcessor {
        SarProcessor::from_source(SourceBuffer::from_string(text))
    }

    pub fn from_source(source: SourceBuffer) -> SarProcessor {
        SarProcessor {
            source,
            parsedlog: None,
            bundle: None,
            summary: SummarySarProcessor::new(),
            summary_multiday: SummarySarProcessor::new(),
        }
    }

    pub fn path(&self) -> Option<&FPath> {
        self.source.path()
    }

    /// The source as one `sar` day. Parsed on the first call.
    pub fn parsed(&mut self) -> &ParsedLog {
        if self.parsedlog.is_none() {
            let mut summary = SummarySarProcessor::new();
            let parsedlog: ParsedLog = parse_str_summary(&self.source.as_text(), &mut summary);
            self.summary = summary;
            self.parsedlog = Some(parsedlog);
        }

        self.parsedlog.get_or_insert_with(ParsedLog::default)
    }

    /// The source as a combined multi-day file. Parsed on the first call.
    pub fn multiday(&mut self) -> &MultiDayBundle {
        if self.bundle.is_none() {
            let mut summary = SummarySarProcessor::new();
            let bundle: MultiDayBundle = parse_multi_str_summary(&self.source.as_text(), &mut summary);
            self.summary_multiday = summary;
            self.bundle = Some(bundle);
        }

        self.bundle.get_or_insert_with(MultiDayBundle::new)
    }

    /// The date of the report header line at the start of the source, as
    /// `YYYY-MM-DD`. Does not require parsing.
    pub fn file_date(&self) -> Option<String> {
        report_date(&self.source.as_text())
    }

    /// Statistics of [`parsed`]. All zero before the first call.
    ///
    /// [`parsed`]: self::SarProcessor#method.parsed
    pub fn summary(&self) -> &SummarySarProcessor {
        &self.summary
    }

    /// Statistics of [`multiday`]. All zero before the first call.
    ///
    /// [`multiday`]: self::SarProcessor#method.multiday
    pub fn summary_multiday(&self) -> &SummarySarProcessor {
        &self.summary_multiday
    }
}
