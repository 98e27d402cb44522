// src/printer/mod.rs

//! The `printer` module is for printing user-facing output of parsed `sar`
//! data ([`ParsedLog`s] and [`MultiDayBundle`s]) as JSON or text, and the
//! CLI option `--summary` statistics.
//!
//! [`ParsedLog`s]: crate::data::record::ParsedLog
//! [`MultiDayBundle`s]: crate::data::record::MultiDayBundle

pub mod printers;
