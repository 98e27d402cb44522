// src/data/mod.rs

//! The `data` module is specialized data containers and static tables for
//! `sar` ASCII output.
//!
//! ## Definitions of data
//!
//! #### Chunk
//!
//! A "chunk" is a sequence of bytes in a `sar` file that:
//!
//! * begins after two consecutive newlines `"\n\n"` or the beginning of
//!   the file.
//! * ends before two consecutive newlines or the end of the file.
//!
//! A chunk is trimmed of surrounding whitespace. A chunk is found by
//! [`segment`].
//!
//! #### Section
//!
//! A "section" is one or more chunks of the same [`SectionType`].
//! A chunk is assigned a `SectionType` when it matches that type's
//! header signature in the [`PATTERN_CATALOG`]. One file may hold several
//! chunks of the same type when the system rebooted during the day; those
//! are merged into one section.
//!
//! #### Header line
//!
//! The first line of a chunk names the columns, e.g.
//!
//! ```text
//! 12:00:01 AM     CPU     %user     %nice   %system   %iowait    %steal     %idle
//! ```
//!
//! A [`ColumnIndex`] is resolved from the first header line seen per
//! `SectionType`.
//!
//! #### Record
//!
//! A [`Record`] is the metric values of one data line keyed by canonical
//! field name. Records are stored in a [`TimeSeries`] keyed by a canonical
//! 24-hour `HH:MM:SS` [`Timestamp`].
//!
//! #### Restart marker
//!
//! A line noting a reboot, e.g. `10:05:01 AM       LINUX RESTART`. These
//! are a [`RestartEvent`], never a `TimeSeries` key.
//!
//! [`segment`]: crate::readers::segmenter::segment
//! [`SectionType`]: crate::data::section::SectionType
//! [`PATTERN_CATALOG`]: static@crate::data::section::PATTERN_CATALOG
//! [`ColumnIndex`]: crate::readers::columnresolver::ColumnIndex
//! [`Record`]: crate::data::record::Record
//! [`TimeSeries`]: crate::data::record::TimeSeries
//! [`Timestamp`]: crate::data::datetime::Timestamp
//! [`RestartEvent`]: crate::data::record::RestartEvent

pub mod datetime;
pub mod record;
pub mod section;
