//! Filter criteria and the predicate set built from them.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::schema::CanonicalField;
use crate::table::Cell;

/// What the user selected: a free-text Dataset ID search plus multi-select
/// values per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub membership: IndexMap<CanonicalField, Vec<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Accept only records whose `field` is one of `values`.
    pub fn with_values<S: Into<String>>(
        mut self,
        field: CanonicalField,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.membership
            .entry(field)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// Constraint on one field's values.
///
/// An empty multi-select means "no constraint". Rejecting everything is a
/// separate state that has to be asked for explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum Membership {
    Unconstrained,
    AnyOf(IndexSet<String>),
    RejectAll,
}

impl Membership {
    /// Build from selected values; an empty selection is unconstrained.
    pub fn from_values<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        let set: IndexSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() {
            Membership::Unconstrained
        } else {
            Membership::AnyOf(set)
        }
    }

    /// Whether a cell passes this constraint. Absent cells only pass when
    /// unconstrained.
    pub fn accepts(&self, cell: &Cell) -> bool {
        match self {
            Membership::Unconstrained => true,
            Membership::RejectAll => false,
            Membership::AnyOf(values) => cell.key().is_some_and(|k| values.contains(&k)),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Membership::Unconstrained)
    }

    /// Get a human-readable description of the constraint.
    pub fn description(&self, field: CanonicalField) -> String {
        match self {
            Membership::Unconstrained => format!("any {}", field),
            Membership::RejectAll => format!("no {}", field),
            Membership::AnyOf(values) => {
                let shown: Vec<&str> = values.iter().take(3).map(String::as_str).collect();
                let more = values.len().saturating_sub(shown.len());
                if more > 0 {
                    format!("{} in [{}, +{} more]", field, shown.join(", "), more)
                } else {
                    format!("{} in [{}]", field, shown.join(", "))
                }
            }
        }
    }
}

/// A conjunction of clauses; the empty spec matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    search: Option<String>,
    membership: IndexMap<CanonicalField, Membership>,
}

impl FilterSpec {
    /// Spec that matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spec from user criteria.
    ///
    /// The search term is trimmed and dropped when blank. Fields with no
    /// selected values become [`Membership::Unconstrained`].
    pub fn build(criteria: &FilterCriteria) -> Self {
        let search = criteria
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let membership = criteria
            .membership
            .iter()
            .map(|(field, values)| (*field, Membership::from_values(values.iter().cloned())))
            .collect();

        Self { search, membership }
    }

    /// Set an explicit clause for one field.
    pub fn with_clause(mut self, field: CanonicalField, clause: Membership) -> Self {
        self.membership.insert(field, clause);
        self
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn clauses(&self) -> impl Iterator<Item = (CanonicalField, &Membership)> {
        self.membership.iter().map(|(f, m)| (*f, m))
    }

    /// True when no clause can remove a record.
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.membership.values().all(Membership::is_unconstrained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_is_dropped() {
        let spec = FilterSpec::build(&FilterCriteria::new().with_search("   "));
        assert_eq!(spec.search(), None);
        assert!(spec.is_empty());
    }

    #[test]
    fn test_search_is_trimmed() {
        let spec = FilterSpec::build(&FilterCriteria::new().with_search("  DS-1 "));
        assert_eq!(spec.search(), Some("DS-1"));
    }

    #[test]
    fn test_empty_selection_is_unconstrained() {
        let criteria =
            FilterCriteria::new().with_values(CanonicalField::IngestType, Vec::<String>::new());
        let spec = FilterSpec::build(&criteria);

        let (_, clause) = spec.clauses().next().unwrap();
        assert_eq!(clause, &Membership::Unconstrained);
        assert!(spec.is_empty());
    }

    #[test]
    fn test_membership_accepts() {
        let clause = Membership::from_values(["full", "delta"]);
        assert!(clause.accepts(&Cell::from_raw("full")));
        assert!(!clause.accepts(&Cell::from_raw("other")));
        assert!(!clause.accepts(&Cell::Absent));
        assert!(!Membership::RejectAll.accepts(&Cell::from_raw("full")));
        assert!(Membership::Unconstrained.accepts(&Cell::Absent));
    }

    #[test]
    fn test_description() {
        let clause = Membership::from_values(["a", "b", "c", "d"]);
        assert_eq!(
            clause.description(CanonicalField::Status),
            "status in [a, b, c, +1 more]"
        );
    }
}
