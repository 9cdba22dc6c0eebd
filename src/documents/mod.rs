//! Department-to-document resolution.
//!
//! Every department that has an RTI template is registered once under a
//! canonical [`DepartmentId`]. The display label, jurisdiction, category and
//! template path all hang off that id. Lookups by exact display label are kept
//! for callers that only hold the label string.

pub mod routes;
mod tables;

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Goa templates live under the public asset directory, the others are
/// bundled relative to the frontend sources.
const GOA_ASSET_ROOT: &str = "/assets/PDF/RTI Templates For Goa State";

pub(crate) struct CategoryTemplates {
    pub(crate) category: &'static str,
    pub(crate) entries: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    Delhi,
    Karnataka,
    Goa,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 3] = [Self::Delhi, Self::Karnataka, Self::Goa];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delhi => "delhi",
            Self::Karnataka => "karnataka",
            Self::Goa => "goa",
        }
    }

    /// Parse a routing slug such as `"goa"`. Case-insensitive.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|j| j.as_str().eq_ignore_ascii_case(slug.trim()))
    }

    /// Build the asset path for a template file of this jurisdiction.
    pub fn document_path(self, category: &str, file_name: &str) -> String {
        match self {
            Self::Goa => format!("{GOA_ASSET_ROOT}/{category}/{file_name}"),
            _ => format!("{}/{category}/{file_name}", self.as_str()),
        }
    }

    fn templates(self) -> &'static [CategoryTemplates] {
        match self {
            Self::Delhi => tables::DELHI,
            Self::Karnataka => tables::KARNATAKA,
            Self::Goa => tables::GOA,
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substring rules for inferring a jurisdiction from a label, checked in
/// order. The first rule whose needle occurs in the lowercased label wins.
pub const JURISDICTION_RULES: &[(&str, Jurisdiction)] = &[
    ("goa", Jurisdiction::Goa),
    ("karnataka", Jurisdiction::Karnataka),
];

/// Used when no rule matches.
pub const DEFAULT_JURISDICTION: Jurisdiction = Jurisdiction::Delhi;

/// Infer the jurisdiction a department label belongs to.
///
/// This is a heuristic: a label naming several states resolves to the first
/// matching rule of [`JURISDICTION_RULES`], a label naming none resolves to
/// [`DEFAULT_JURISDICTION`].
pub fn resolve_jurisdiction(label: &str) -> Jurisdiction {
    let lowered = label.to_lowercase();
    JURISDICTION_RULES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, jurisdiction)| *jurisdiction)
        .unwrap_or(DEFAULT_JURISDICTION)
}

/// Stable slug identifying a department, derived from its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct DepartmentId(String);

impl DepartmentId {
    /// Lowercase ASCII alphanumerics, whitespace and `-`/`_` collapse to a
    /// single dash, everything else is dropped.
    pub fn from_label(label: &str) -> Self {
        let mut slug = String::with_capacity(label.len());
        let mut last_dash = false;

        for ch in label.trim().chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
                last_dash = false;
            } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !last_dash && !slug.is_empty()
            {
                slug.push('-');
                last_dash = true;
            }
        }

        Self(slug.trim_matches('-').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DepartmentRecord {
    pub id: DepartmentId,
    pub label: String,
    pub jurisdiction: Jurisdiction,
    pub category: String,
    pub file_name: String,
    pub path: String,
}

/// Immutable index over department records.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    records: Vec<DepartmentRecord>,
    by_id: HashMap<DepartmentId, usize>,
    by_label: HashMap<String, usize>,
}

impl DocumentRegistry {
    /// Build from `(jurisdiction, category, label, file_name)` rows.
    ///
    /// Inserting the same label twice keeps the later row for lookups.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Jurisdiction, &'a str, &'a str, &'a str)>,
    {
        let mut registry = Self::default();
        for (jurisdiction, category, label, file_name) in rows {
            let id = DepartmentId::from_label(label);
            let index = registry.records.len();
            registry.records.push(DepartmentRecord {
                id: id.clone(),
                label: label.to_string(),
                jurisdiction,
                category: category.to_string(),
                file_name: file_name.to_string(),
                path: jurisdiction.document_path(category, file_name),
            });

            if let Some(previous) = registry.by_id.insert(id, index) {
                let shadowed = &registry.records[previous];
                if shadowed.label != label {
                    log::warn!(
                        "Department id '{}' shared by '{}' and '{}'",
                        shadowed.id,
                        shadowed.label,
                        label
                    );
                }
            }
            registry.by_label.insert(label.to_string(), index);
        }
        registry
    }

    fn builtin() -> Self {
        Self::from_rows(Jurisdiction::ALL.into_iter().flat_map(|jurisdiction| {
            jurisdiction.templates().iter().flat_map(move |group| {
                group
                    .entries
                    .iter()
                    .map(move |(label, file)| (jurisdiction, group.category, *label, *file))
            })
        }))
    }

    /// Exact, case- and whitespace-sensitive label lookup.
    pub fn resolve_document_path(&self, label: &str) -> Option<&str> {
        self.by_label(label).map(|record| record.path.as_str())
    }

    pub fn has_document(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    pub fn by_label(&self, label: &str) -> Option<&DepartmentRecord> {
        self.by_label.get(label).map(|&index| &self.records[index])
    }

    pub fn get(&self, id: &DepartmentId) -> Option<&DepartmentRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    /// All rows in insertion order, shadowed duplicates included.
    pub fn records(&self) -> &[DepartmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    /// Labels from `labels` that have no template, in input order.
    pub fn audit_labels<'a, I>(&self, labels: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .filter(|label| !self.has_document(label))
            .collect()
    }
}

lazy_static! {
    static ref REGISTRY: DocumentRegistry = DocumentRegistry::builtin();
}

/// The built-in registry of every known template.
pub fn registry() -> &'static DocumentRegistry {
    &REGISTRY
}

pub fn resolve_document_path(label: &str) -> Option<&'static str> {
    registry().resolve_document_path(label)
}

pub fn has_document(label: &str) -> bool {
    registry().has_document(label)
}

pub fn audit_labels<'a, I>(labels: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    registry().audit_labels(labels)
}
