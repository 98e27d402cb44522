// src/data/record.rs

//! Containers for extracted `sar` metric values: [`Value`], [`Record`],
//! [`TimeSeries`], [`ParsedLog`], and [`MultiDayBundle`].
//!
//! All are created fresh by one parse and not modified after being
//! returned to the caller.

use crate::common::Count;
use crate::data::datetime::Timestamp;
use crate::data::section::{FieldName, SectionType};

use ::indexmap::IndexMap;
use ::serde::Serialize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Value
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Conversion applied to a field's raw token, decided by field identity.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// absolute kilobyte quantities, e.g. `kbmemfree`
    Int,
    /// percentages and per-second rates
    Float,
    /// the network interface name
    Text,
}

impl ValueKind {
    /// Convert a raw `token` to a [`Value`] of this kind.
    ///
    /// `None` if `token` does not parse.
    pub fn convert(
        &self,
        token: &str,
    ) -> Option<Value> {
        match self {
            ValueKind::Int => token.parse::<i64>().ok().map(Value::Int),
            ValueKind::Float => token.parse::<f64>().ok().map(Value::Float),
            ValueKind::Text => Some(Value::Text(token.to_string())),
        }
    }
}

/// One converted metric value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric value as `f64`, `None` for [`Value::Text`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Record, TimeSeries
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Metric name to value.
pub type Metrics = IndexMap<FieldName, Value>;

/// CPU id (e.g. `"all"`, `"0"`) or network interface name (e.g. `"eth0"`).
pub type SubEntity = String;

/// Sub-entity to its metrics.
pub type SubEntityMetrics = IndexMap<SubEntity, Metrics>;

/// The values found under one [`Timestamp`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// `MEM`, `SWAP`, `IO`, `PAGING`
    Flat(Metrics),
    /// `CPU`, `NET`
    Keyed(SubEntityMetrics),
}

impl Record {
    /// An empty `Record` of the shape used by `sectiontype`.
    pub fn new_for(sectiontype: SectionType) -> Record {
        match sectiontype.has_subentity() {
            true => Record::Keyed(SubEntityMetrics::new()),
            false => Record::Flat(Metrics::new()),
        }
    }

    /// Add or overwrite `metrics`; under `subentity` for a `Keyed` record.
    ///
    /// A `Keyed` record ignores metrics lacking a `subentity`. A `Flat`
    /// record ignores the `subentity`.
    pub fn merge(
        &mut self,
        subentity: Option<&str>,
        metrics: Metrics,
    ) {
        match self {
            Record::Flat(existing) => {
                existing.extend(metrics);
            }
            Record::Keyed(map) => {
                if let Some(subentity) = subentity {
                    map.entry(subentity.to_string())
                        .or_default()
                        .extend(metrics);
                }
            }
        }
    }

    /// Metrics of a `Flat` record.
    pub fn flat(&self) -> Option<&Metrics> {
        match self {
            Record::Flat(m) => Some(m),
            Record::Keyed(_) => None,
        }
    }

    /// Metrics of `subentity` within a `Keyed` record.
    pub fn subentity(
        &self,
        subentity: &str,
    ) -> Option<&Metrics> {
        match self {
            Record::Keyed(map) => map.get(subentity),
            Record::Flat(_) => None,
        }
    }

    /// Lookup one metric. For a `Keyed` record `subentity` is required.
    pub fn get(
        &self,
        subentity: Option<&str>,
        field: &str,
    ) -> Option<&Value> {
        match (self, subentity) {
            (Record::Flat(m), _) => m.get(field),
            (Record::Keyed(map), Some(s)) => map.get(s).and_then(|m| m.get(field)),
            (Record::Keyed(_), None) => None,
        }
    }
}

/// Canonical `HH:MM:SS` timestamp to [`Record`].
///
/// Keys remain in order of first arrival. Consumers wanting chronological
/// order must sort keys.
pub type TimeSeries = IndexMap<Timestamp, Record>;

/// Timestamp of a `LINUX RESTART` marker.
pub type RestartEvent = Timestamp;
pub type RestartEvents = Vec<RestartEvent>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ParsedLog, MultiDayBundle
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// All data extracted from one `sar` file or one day of a combined file.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParsedLog {
    pub cpu: TimeSeries,
    pub mem: TimeSeries,
    pub swap: TimeSeries,
    pub io: TimeSeries,
    pub paging: TimeSeries,
    pub net: TimeSeries,
    /// reboot marker timestamps, in file order
    pub restarts: RestartEvents,
    /// `YYYY-MM-DD` from the report header line, if found
    pub file_date: Option<String>,
}

impl ParsedLog {
    /// The `TimeSeries` of a data `SectionType`.
    pub fn series(
        &self,
        sectiontype: SectionType,
    ) -> Option<&TimeSeries> {
        match sectiontype {
            SectionType::CPU => Some(&self.cpu),
            SectionType::MEM => Some(&self.mem),
            SectionType::SWAP => Some(&self.swap),
            SectionType::IO => Some(&self.io),
            SectionType::PAGING => Some(&self.paging),
            SectionType::NET => Some(&self.net),
            SectionType::RESTART | SectionType::UNKNOWN => None,
        }
    }

    pub(crate) fn series_mut(
        &mut self,
        sectiontype: SectionType,
    ) -> Option<&mut TimeSeries> {
        match sectiontype {
            SectionType::CPU => Some(&mut self.cpu),
            SectionType::MEM => Some(&mut self.mem),
            SectionType::SWAP => Some(&mut self.swap),
            SectionType::IO => Some(&mut self.io),
            SectionType::PAGING => Some(&mut self.paging),
            SectionType::NET => Some(&mut self.net),
            SectionType::RESTART | SectionType::UNKNOWN => None,
        }
    }

    /// No timestamps in any data `TimeSeries` and no restart events.
    pub fn is_empty(&self) -> bool {
        SectionType::DATA
            .iter()
            .all(|st| self.series(*st).map_or(true, |ts| ts.is_empty()))
            && self.restarts.is_empty()
    }

    /// Count of timestamps across all data `TimeSeries`.
    pub fn count_timestamps(&self) -> Count {
        SectionType::DATA
            .iter()
            .filter_map(|st| self.series(*st))
            .map(|ts| ts.len() as Count)
            .sum()
    }
}

/// Key of a [`MultiDayBundle`] for a day whose date is unavailable.
pub const DATE_UNKNOWN: &str = "unknown";

/// `YYYY-MM-DD` date (or [`DATE_UNKNOWN`]) to the [`ParsedLog`] of that day.
///
/// Keys remain in the order the days appear in the combined file.
pub type MultiDayBundle = IndexMap<String, ParsedLog>;
