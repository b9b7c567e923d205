//! Filter + sort derivation for the company directory.
//!
//! Pure functions only: the views hand in the current criteria and sort spec
//! on every change and render whatever ordered sequence comes back. Nothing
//! here touches timers, signals or the DOM, so the whole module is testable
//! in isolation.

use super::aggregate::{Company, Numeric};
use lexical_sort::lexical_cmp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Criteria and sort spec
// ============================================================================

/// Three independent substring predicates, all case-insensitive and
/// unanchored. An empty field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub industry: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.location.is_empty() && self.industry.is_empty()
    }

    /// Number of constrained fields, for the filter-panel badge.
    pub fn active_count(&self) -> usize {
        [&self.name, &self.location, &self.industry]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .count()
    }

    pub fn matches(&self, company: &Company) -> bool {
        contains_fold(&company.name, &self.name)
            && contains_fold(&company.location, &self.location)
            && contains_fold(&company.industry, &self.industry)
    }
}

/// Case-folded substring containment. Unicode-aware via `to_lowercase`,
/// so "MÜNCHEN" matches "münchen".
fn contains_fold(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Employees,
    Revenue,
    Founded,
}

impl SortKey {
    /// Unknown field names fall back to sorting by name (default-case
    /// behavior, deliberately not an error).
    pub fn parse(field: &str) -> Self {
        match field {
            "employees" => SortKey::Employees,
            "revenue" => SortKey::Revenue,
            "founded" => SortKey::Founded,
            _ => SortKey::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Employees => "employees",
            SortKey::Revenue => "revenue",
            SortKey::Founded => "founded",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

// ============================================================================
// Derivation
// ============================================================================

/// Turns the raw record set plus the current criteria and sort spec into the
/// ordered sequence the views render. Pure and deterministic; never mutates
/// `records`.
pub fn derive(records: &[Company], criteria: &FilterCriteria, sort: &SortSpec) -> Vec<Company> {
    let mut selected: Vec<Company> = records
        .iter()
        .filter(|c| criteria.matches(c))
        .cloned()
        .collect();

    // Stable sort; descending reverses the comparator, not the sequence,
    // so ties keep their filtered relative order in both directions.
    selected.sort_by(|a, b| {
        let ord = compare_by_key(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    selected
}

fn compare_by_key(a: &Company, b: &Company, key: SortKey) -> Ordering {
    match key {
        // Collating comparison, not code-point order: case-insensitive, and
        // accented initials order with their base letter ("Émile" < "Zeta").
        SortKey::Name => lexical_cmp(&a.name, &b.name),
        SortKey::Employees => compare_numeric(a.employees.as_ref(), b.employees.as_ref()),
        SortKey::Revenue => compare_numeric(a.revenue.as_ref(), b.revenue.as_ref()),
        SortKey::Founded => compare_numeric(a.founded.as_ref(), b.founded.as_ref()),
    }
}

fn compare_numeric(a: Option<&Numeric>, b: Option<&Numeric>) -> Ordering {
    sort_value(a)
        .partial_cmp(&sort_value(b))
        .unwrap_or(Ordering::Equal)
}

/// `Number(x) || 0` coercion: missing and unparseable values sort as the
/// lowest value, grouped with legitimate zeroes. Preserved as specified
/// behavior, not treated as a bug.
fn sort_value(value: Option<&Numeric>) -> f64 {
    value.and_then(Numeric::as_f64).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: u32, name: &str, location: &str, industry: &str) -> Company {
        Company {
            id,
            name: name.to_string(),
            location: location.to_string(),
            industry: industry.to_string(),
            description: None,
            employees: None,
            revenue: None,
            founded: None,
        }
    }

    fn with_employees(mut c: Company, employees: Numeric) -> Company {
        c.employees = Some(employees);
        c
    }

    fn sample() -> Vec<Company> {
        vec![
            company(1, "Acme Robotics", "Berlin, Germany", "Manufacturing"),
            company(2, "Zeta Analytics", "Austin, TX", "Software"),
            company(3, "Beta Health", "berlin, germany", "Healthcare"),
            company(4, "Nordwind Labs", "Oslo, Norway", "Software"),
        ]
    }

    fn names(companies: &[Company]) -> Vec<&str> {
        companies.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn empty_criteria_is_identity_for_filtering() {
        let records = sample();
        let out = derive(&records, &FilterCriteria::default(), &SortSpec::default());
        assert_eq!(out.len(), records.len());
        let mut ids: Vec<u32> = out.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn location_criterion_matches_case_insensitive_substring() {
        let records = sample();
        let criteria = FilterCriteria {
            location: "Berlin".to_string(),
            ..Default::default()
        };
        let out = derive(&records, &criteria, &SortSpec::default());
        assert_eq!(names(&out), vec!["Acme Robotics", "Beta Health"]);
    }

    #[test]
    fn all_criteria_must_hold_simultaneously() {
        let records = sample();
        let criteria = FilterCriteria {
            name: "a".to_string(),
            location: "berlin".to_string(),
            industry: "health".to_string(),
        };
        let out = derive(&records, &criteria, &SortSpec::default());
        assert_eq!(names(&out), vec!["Beta Health"]);
    }

    #[test]
    fn empty_record_field_cannot_satisfy_a_nonempty_criterion() {
        let records = vec![company(1, "Acme", "", "Software")];
        let criteria = FilterCriteria {
            location: "Berlin".to_string(),
            ..Default::default()
        };
        assert!(derive(&records, &criteria, &SortSpec::default()).is_empty());
    }

    #[test]
    fn default_sort_orders_by_case_folded_name() {
        let records = vec![
            company(1, "zeta", "", ""),
            company(2, "Acme", "", ""),
            company(3, "beta", "", ""),
        ];
        let out = derive(&records, &FilterCriteria::default(), &SortSpec::default());
        assert_eq!(names(&out), vec!["Acme", "beta", "zeta"]);
    }

    #[test]
    fn accented_names_collate_with_their_base_letter() {
        let records = vec![
            company(1, "Zeta", "", ""),
            company(2, "Émile", "", ""),
            company(3, "Acme", "", ""),
        ];
        let out = derive(&records, &FilterCriteria::default(), &SortSpec::default());
        assert_eq!(names(&out), vec!["Acme", "Émile", "Zeta"]);

        let descending = derive(
            &records,
            &FilterCriteria::default(),
            &SortSpec {
                key: SortKey::Name,
                direction: SortDirection::Descending,
            },
        );
        assert_eq!(names(&descending), vec!["Zeta", "Émile", "Acme"]);
    }

    #[test]
    fn employees_sort_is_numeric_and_stable() {
        let records = vec![
            with_employees(company(1, "Acme", "", ""), Numeric::Number(50.0)),
            with_employees(company(2, "Zeta", "", ""), Numeric::Number(50.0)),
            with_employees(company(3, "Beta", "", ""), Numeric::Number(10.0)),
        ];
        let sort = SortSpec {
            key: SortKey::Employees,
            direction: SortDirection::Ascending,
        };
        let out = derive(&records, &FilterCriteria::default(), &sort);
        // Acme before Zeta: ties keep input relative order.
        assert_eq!(names(&out), vec!["Beta", "Acme", "Zeta"]);
    }

    #[test]
    fn descending_keeps_tie_order_from_input() {
        let records = vec![
            with_employees(company(1, "Acme", "", ""), Numeric::Number(50.0)),
            with_employees(company(2, "Zeta", "", ""), Numeric::Number(50.0)),
            with_employees(company(3, "Beta", "", ""), Numeric::Number(10.0)),
        ];
        let sort = SortSpec {
            key: SortKey::Employees,
            direction: SortDirection::Descending,
        };
        let out = derive(&records, &FilterCriteria::default(), &sort);
        // Reversed comparator, not reversed sequence: Acme still before Zeta.
        assert_eq!(names(&out), vec!["Acme", "Zeta", "Beta"]);
    }

    #[test]
    fn non_numeric_employees_sorts_as_zero() {
        let records = vec![
            with_employees(company(1, "Acme", "", ""), Numeric::Number(50.0)),
            with_employees(company(2, "Gamma", "", ""), Numeric::Text("n/a".to_string())),
            with_employees(company(3, "Beta", "", ""), Numeric::Number(10.0)),
        ];
        let sort = SortSpec {
            key: SortKey::Employees,
            direction: SortDirection::Ascending,
        };
        let out = derive(&records, &FilterCriteria::default(), &sort);
        assert_eq!(names(&out), vec!["Gamma", "Beta", "Acme"]);
    }

    #[test]
    fn missing_numeric_field_sorts_as_zero() {
        let records = vec![
            with_employees(company(1, "Acme", "", ""), Numeric::Number(50.0)),
            company(2, "Hollow", "", ""),
        ];
        let sort = SortSpec {
            key: SortKey::Revenue,
            direction: SortDirection::Ascending,
        };
        let out = derive(&records, &FilterCriteria::default(), &sort);
        // Neither has revenue: both coerce to 0, input order preserved.
        assert_eq!(names(&out), vec!["Acme", "Hollow"]);
    }

    #[test]
    fn founded_sorts_numerically() {
        let mut a = company(1, "Old", "", "");
        a.founded = Some(Numeric::Number(1947.0));
        let mut b = company(2, "New", "", "");
        b.founded = Some(Numeric::Number(2019.0));
        let mut c = company(3, "Mid", "", "");
        c.founded = Some(Numeric::Text("1999".to_string()));

        let sort = SortSpec {
            key: SortKey::Founded,
            direction: SortDirection::Ascending,
        };
        let out = derive(&[b, a, c], &FilterCriteria::default(), &sort);
        assert_eq!(names(&out), vec!["Old", "Mid", "New"]);
    }

    #[test]
    fn unknown_sort_key_falls_back_to_name() {
        assert_eq!(SortKey::parse("bogus"), SortKey::Name);
        assert_eq!(SortKey::parse("employees"), SortKey::Employees);

        let records = sample();
        let by_unknown = derive(
            &records,
            &FilterCriteria::default(),
            &SortSpec {
                key: SortKey::parse("bogus"),
                direction: SortDirection::Ascending,
            },
        );
        let by_name = derive(&records, &FilterCriteria::default(), &SortSpec::default());
        assert_eq!(names(&by_unknown), names(&by_name));
    }

    #[test]
    fn derive_does_not_mutate_input() {
        let records = sample();
        let before = records.clone();
        let _ = derive(
            &records,
            &FilterCriteria {
                name: "acme".to_string(),
                ..Default::default()
            },
            &SortSpec {
                key: SortKey::Revenue,
                direction: SortDirection::Descending,
            },
        );
        assert_eq!(records, before);
    }

    #[test]
    fn active_count_ignores_blank_criteria() {
        let criteria = FilterCriteria {
            name: "  ".to_string(),
            location: "Berlin".to_string(),
            industry: String::new(),
        };
        assert_eq!(criteria.active_count(), 1);
        assert!(FilterCriteria::default().is_empty());
    }
}
