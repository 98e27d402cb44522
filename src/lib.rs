// src/lib.rs

//! _sarlib_ reads `sar` (System Activity Reporter) ASCII output and
//! reconstructs it into time-indexed performance records.
//!
//! The most relevant entry points are
//! [`SarProcessor`], [`parse`], and [`parse_multi`].
//!
//! Also see [_Definitions of data_] and [_Overview of readers_].
//!
//! [`SarProcessor`]: crate::readers::sarprocessor::SarProcessor
//! [`parse`]: crate::readers::sarprocessor::parse
//! [`parse_multi`]: crate::readers::sarprocessor::parse_multi
//! [_Definitions of data_]: crate::data
//! [_Overview of readers_]: crate::readers

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
