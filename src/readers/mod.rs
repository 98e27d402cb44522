// src/readers/mod.rs

//! "Readers" for _sarlib_.
//!
//! ## Overview of readers
//!
//! * A [`SarProcessor`] owns a [`SourceBuffer`] and drives the stages below
//!   to derive a [`ParsedLog`], or a [`MultiDayBundle`] for a combined file.
//! * [`split_days`] divides a combined multi-day buffer at each
//!   `Linux …` report header line.
//! * [`segment`] divides a buffer into trimmed chunks at each blank line.
//! * [`classify_and_merge`] matches chunks to [`SectionType`]s, merges
//!   chunks of the same type, and resolves each type's [`ColumnIndex`]
//!   once, via [`resolve`].
//! * [`extract`] walks each merged section to derive a [`TimeSeries`].
//!
//! <br/>
//!
//! All stages borrow from the one `SourceBuffer`. No stage does I/O other
//! than [`SourceBuffer::open`].
//!
//! Also see [_Definitions of data_].
//!
//! [_Definitions of data_]: crate::data
//! [`SarProcessor`]: crate::readers::sarprocessor::SarProcessor
//! [`SourceBuffer`]: crate::readers::sourcebuffer::SourceBuffer
//! [`SourceBuffer::open`]: crate::readers::sourcebuffer::SourceBuffer::open
//! [`ParsedLog`]: crate::data::record::ParsedLog
//! [`MultiDayBundle`]: crate::data::record::MultiDayBundle
//! [`TimeSeries`]: crate::data::record::TimeSeries
//! [`SectionType`]: crate::data::section::SectionType
//! [`split_days`]: crate::readers::multidaysplitter::split_days
//! [`segment`]: crate::readers::segmenter::segment
//! [`classify_and_merge`]: crate::readers::sectionclassifier::classify_and_merge
//! [`ColumnIndex`]: crate::readers::columnresolver::ColumnIndex
//! [`resolve`]: crate::readers::columnresolver::resolve
//! [`extract`]: crate::readers::recordextractor::extract

pub mod columnresolver;
pub mod multidaysplitter;
pub mod recordextractor;
pub mod sarprocessor;
pub mod sectionclassifier;
pub mod segmenter;
pub mod sourcebuffer;
pub mod summary;
