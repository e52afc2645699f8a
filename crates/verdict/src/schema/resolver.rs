//! Alias resolution: binding canonical fields to a table's actual headers.

use indexmap::IndexMap;
use serde::Serialize;

use super::alias::AliasTable;
use super::types::CanonicalField;
use crate::table::{Cell, Table};

/// A canonical field bound to a concrete column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// The raw header that matched.
    pub header: String,
    /// Zero-based column position.
    pub index: usize,
}

/// The canonical view of one table's headers.
///
/// Fields without a matching header are simply missing; callers treat that as
/// "feature unavailable for this table".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalSchema {
    bindings: IndexMap<CanonicalField, Binding>,
    #[serde(skip)]
    candidates: IndexMap<CanonicalField, Vec<usize>>,
}

impl CanonicalSchema {
    /// Resolve a table's headers against an alias table.
    pub fn resolve(table: &Table, aliases: &AliasTable) -> Self {
        Self::resolve_headers(table.headers(), aliases)
    }

    /// Resolve a header list against an alias table.
    ///
    /// For each field the alias list is scanned in declared order and the first
    /// spelling present wins, regardless of where it sits in `headers`.
    pub fn resolve_headers(headers: &[String], aliases: &AliasTable) -> Self {
        let mut bindings = IndexMap::new();
        let mut candidates = IndexMap::new();

        for field in CanonicalField::ALL {
            let present: Vec<(&String, usize)> = aliases
                .aliases(field)
                .iter()
                .filter_map(|alias| headers.iter().position(|h| h == alias).map(|i| (alias, i)))
                .collect();

            if let Some(&(header, index)) = present.first() {
                bindings.insert(
                    field,
                    Binding {
                        header: header.clone(),
                        index,
                    },
                );
                candidates.insert(field, present.iter().map(|&(_, i)| i).collect());
            }
        }

        Self {
            bindings,
            candidates,
        }
    }

    /// The raw header bound to `field`.
    pub fn column(&self, field: CanonicalField) -> Option<&str> {
        self.bindings.get(&field).map(|b| b.header.as_str())
    }

    /// Column position bound to `field`.
    pub fn index(&self, field: CanonicalField) -> Option<usize> {
        self.bindings.get(&field).map(|b| b.index)
    }

    pub fn has(&self, field: CanonicalField) -> bool {
        self.bindings.contains_key(&field)
    }

    /// Fields this table cannot supply.
    pub fn missing(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|f| !self.has(*f))
            .collect()
    }

    /// Positions of every alias of `field` present in the table, in declared
    /// alias order. The first entry is the bound column.
    pub fn candidates(&self, field: CanonicalField) -> &[usize] {
        self.candidates
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Bound fields in canonical order.
    pub fn bindings(&self) -> impl Iterator<Item = (CanonicalField, &Binding)> {
        self.bindings.iter().map(|(f, b)| (*f, b))
    }

    /// The cell for `field` in a row, if the field is bound.
    pub fn value<'a>(&self, row: &'a [Cell], field: CanonicalField) -> Option<&'a Cell> {
        self.index(field).and_then(|i| row.get(i))
    }
}
