//! Static catalog of supported states and their department listings.
//!
//! Everything here is built once on first access and never mutated.

pub mod model;
pub mod routes;
mod states;

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::documents::{self, Jurisdiction};
pub use model::{DepartmentSection, ProcessStep, StateFaq, StateHero, StateProfile};

struct StateCatalog {
    profiles: Vec<StateProfile>,
    by_slug: HashMap<String, usize>,
}

impl StateCatalog {
    fn new(profiles: Vec<StateProfile>) -> Self {
        let by_slug = profiles
            .iter()
            .enumerate()
            .map(|(index, profile)| (profile.slug.clone(), index))
            .collect();
        Self { profiles, by_slug }
    }
}

lazy_static! {
    static ref STATES: StateCatalog = StateCatalog::new(vec![states::karnataka(), states::goa()]);
    static ref SECTIONS: HashMap<Jurisdiction, Vec<DepartmentSection>> = Jurisdiction::ALL
        .into_iter()
        .map(|jurisdiction| (jurisdiction, build_sections(jurisdiction)))
        .collect();
}

/// Group the registered templates of a jurisdiction by category, keeping the
/// order in which categories and departments were registered.
fn build_sections(jurisdiction: Jurisdiction) -> Vec<DepartmentSection> {
    let mut sections: Vec<DepartmentSection> = Vec::new();
    for record in documents::registry()
        .records()
        .iter()
        .filter(|record| record.jurisdiction == jurisdiction)
    {
        match sections.last_mut() {
            Some(section) if section.category == record.category => {
                section.items.push(record.label.clone());
            }
            _ => sections.push(DepartmentSection {
                category: record.category.clone(),
                items: vec![record.label.clone()],
            }),
        }
    }
    sections
}

/// Find a state by slug, ignoring case.
pub fn lookup_state(slug: &str) -> Option<&'static StateProfile> {
    let catalog: &'static StateCatalog = &STATES;
    catalog
        .by_slug
        .get(&slug.to_lowercase())
        .map(|&index| &catalog.profiles[index])
}

/// Slugs in declaration order.
pub fn list_state_slugs() -> Vec<&'static str> {
    all_states().iter().map(|profile| profile.slug.as_str()).collect()
}

pub fn all_states() -> &'static [StateProfile] {
    let catalog: &'static StateCatalog = &STATES;
    &catalog.profiles
}

/// Department listing for a jurisdiction, grouped by category.
pub fn department_sections(jurisdiction: Jurisdiction) -> &'static [DepartmentSection] {
    let sections: &'static HashMap<Jurisdiction, Vec<DepartmentSection>> = &SECTIONS;
    sections
        .get(&jurisdiction)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
