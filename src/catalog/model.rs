use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StateHero {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub cta: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StateFaq {
    pub q: String,
    pub a: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProcessStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// Landing-page profile of a supported state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StateProfile {
    pub name: String,
    pub slug: String,
    pub languages: Vec<String>,
    pub hero: StateHero,
    pub departments: Vec<String>,
    pub highlights: Vec<String>,
    pub faqs: Vec<StateFaq>,
    pub process: Vec<ProcessStep>,
    pub commission: String,
    pub fee: String,
}

/// A category heading and the department labels listed under it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DepartmentSection {
    pub category: String,
    pub items: Vec<String>,
}
