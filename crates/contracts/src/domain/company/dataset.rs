//! Bundled fixture dataset: the record store for the session.
//!
//! Parsed once on first access and never mutated afterwards; callers clone
//! what they need and derive filtered/sorted views from it.

use super::aggregate::Company;
use anyhow::Context;
use once_cell::sync::Lazy;

const COMPANIES_JSON: &str = include_str!("../../../data/companies.json");

static COMPANIES: Lazy<Vec<Company>> = Lazy::new(|| {
    parse_companies(COMPANIES_JSON)
        .context("bundled companies.json is invalid")
        .unwrap_or_else(|e| panic!("{e:#}"))
});

fn parse_companies(raw: &str) -> anyhow::Result<Vec<Company>> {
    let companies: Vec<Company> = serde_json::from_str(raw)?;
    Ok(companies)
}

/// The immutable record store.
pub fn companies() -> &'static [Company] {
    &COMPANIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundled_dataset_parses_and_is_nonempty() {
        assert!(!companies().is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = companies().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), companies().len());
    }

    #[test]
    fn every_record_has_a_name() {
        assert!(companies().iter().all(|c| !c.name.is_empty()));
    }
}
