// src/readers/columnresolver.rs

//! Resolve the token position of each canonical field from a header line.
//!
//! e.g. the `sar -u` header line
//!
//! ```text
//! 12:00:01 AM     CPU     %user     %nice   %system   %iowait    %steal     %idle
//! ```
//!
//! resolves `usr` to `3`, `nice` to `4`, `sys` to `5`, `iowait` to `6`, and
//! `idle` to `8`.

use crate::common::{Count, TokenIndex};
use crate::data::record::ValueKind;
use crate::data::section::{FieldName, FieldRegex, SectionType};

use std::collections::BTreeMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ColumnIndex
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One canonical field and where it was found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Column {
    pub name: FieldName,
    pub kind: ValueKind,
    /// `None` if no header token matched
    pub position: Option<TokenIndex>,
}

/// Canonical fields of one [`SectionType`] and their token positions, in
/// field order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnIndex {
    columns: Vec<Column>,
    /// count of whitespace tokens in the header line
    header_tokens: Count,
}

impl ColumnIndex {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Token position of field `name`. `None` if absent or unknown.
    pub fn position(
        &self,
        name: &str,
    ) -> Option<TokenIndex> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .and_then(|column| column.position)
    }

    pub fn is_present(
        &self,
        name: &str,
    ) -> bool {
        self.position(name).is_some()
    }

    pub fn count_present(&self) -> Count {
        self.columns
            .iter()
            .filter(|column| column.position.is_some())
            .count() as Count
    }

    pub const fn header_tokens(&self) -> Count {
        self.header_tokens
    }
}

/// Resolve the position of each field of `fields` within `header_line`.
///
/// Tokens are tested left to right. Each token is tested against the
/// not-yet-resolved fields, in field order; the first matching field is
/// bound to that token's position and is never rebound. One token binds at
/// most one field. Fields matching no token are absent.
pub fn resolve(
    fields: &[FieldRegex],
    header_line: &str,
) -> ColumnIndex {
    defn!("({:?})", header_line);
    let mut columns: Vec<Column> = fields
        .iter()
        .map(|field| Column {
            name: field.name,
            kind: field.kind,
            position: None,
        })
        .collect();
    let mut header_tokens: Count = 0;
    for (position, token) in header_line.split_whitespace().enumerate() {
        header_tokens += 1;
        for (field, column) in fields.iter().zip(columns.iter_mut()) {
            if column.position.is_some() {
                continue;
            }
            if field.regex.is_match(token) {
                defo!("{:?} at {} ({:?})", field.name, position, token);
                column.position = Some(position);
                break;
            }
        }
    }
    let ci = ColumnIndex {
        columns,
        header_tokens,
    };
    defx!("{} of {} fields present", ci.count_present(), fields.len());

    ci
}

/// Count of whitespace tokens in `header_line`.
pub fn count_header_tokens(header_line: &str) -> Count {
    header_line.split_whitespace().count() as Count
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ParseContext
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub type ColumnIndexes = BTreeMap<SectionType, ColumnIndex>;

/// A later header line whose token count differs from the first header
/// line of the same `SectionType`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeaderMismatch {
    pub sectiontype: SectionType,
    /// token count of the header line that was resolved
    pub expected: Count,
    /// token count of the later header line
    pub found: Count,
    pub header_line: String,
}

/// The [`ColumnIndex`] of each `SectionType`, resolved at most once during
/// one parse.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    indexes: ColumnIndexes,
}

impl ParseContext {
    pub fn new() -> ParseContext {
        ParseContext::default()
    }

    /// Resolve the `ColumnIndex` of `sectiontype` from `header_line` if not
    /// yet resolved. Return `true` if resolved by this call.
    pub fn resolve_once(
        &mut self,
        sectiontype: SectionType,
        fields: &[FieldRegex],
        header_line: &str,
    ) -> bool {
        if self.indexes.contains_key(&sectiontype) {
            return false;
        }
        self.indexes
            .insert(sectiontype, resolve(fields, header_line));

        true
    }

    /// Compare `header_line` to the resolved `ColumnIndex` of
    /// `sectiontype`. Return a `HeaderMismatch` if the token counts differ.
    ///
    /// `None` if they agree or `sectiontype` is not yet resolved.
    pub fn check_header(
        &self,
        sectiontype: SectionType,
        header_line: &str,
    ) -> Option<HeaderMismatch> {
        let ci: &ColumnIndex = self.indexes.get(&sectiontype)?;
        let found: Count = count_header_tokens(header_line);
        if found == ci.header_tokens() {
            return None;
        }
        defñ!("{} expected {} tokens, found {}", sectiontype, ci.header_tokens(), found);

        Some(HeaderMismatch {
            sectiontype,
            expected: ci.header_tokens(),
            found,
            header_line: header_line.to_string(),
        })
    }

    pub fn get(
        &self,
        sectiontype: SectionType,
    ) -> Option<&ColumnIndex> {
        self.indexes.get(&sectiontype)
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}
