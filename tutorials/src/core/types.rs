//! Catalog data model shared by the registry, catalog files and the CLI.
//!
//! Field names serialize in camelCase so catalog files read like the
//! declarations the rendering layer was written against.

use serde::{Deserialize, Serialize};

/// One page of a tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialStep {
    pub title: String,
    /// URL-safe token, unique within the owning tutorial.
    pub slug: String,
    /// Opaque view identifier resolved by the rendering layer.
    pub template: String,
}

impl TutorialStep {
    pub fn new(title: &str, slug: &str, template: &str) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
            template: template.to_string(),
        }
    }
}

/// Registration payload: everything about a tutorial except its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialData {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub tutorial_source_link: String,
    /// Navigation order is the order of this list.
    pub steps: Vec<TutorialStep>,
}

/// A registered tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub tutorial_source_link: String,
    pub steps: Vec<TutorialStep>,
}

impl Tutorial {
    pub fn from_data(id: &str, data: TutorialData) -> Self {
        Self {
            id: id.to_string(),
            title: data.title,
            subtitle: data.subtitle,
            tutorial_source_link: data.tutorial_source_link,
            steps: data.steps,
        }
    }

    /// Index of the first step whose slug matches.
    pub fn step_index(&self, slug: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.slug == slug)
    }
}

/// Source-diff viewer metadata attached to a tutorial (client contexts only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffTutorialBinding {
    pub id: String,
    /// `owner/repo` on GitHub.
    pub git_hub_repo_name: String,
    pub patch_filename: String,
}

/// Where a step sits in its tutorial's navigation sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepNavigation<'a> {
    /// 1-based position.
    pub position: usize,
    pub total: usize,
    pub step: &'a TutorialStep,
    pub previous: Option<&'a TutorialStep>,
    pub next: Option<&'a TutorialStep>,
}

/// One tutorial as declared in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(flatten)]
    pub data: TutorialData,
}

/// Declarative catalog contents, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSource {
    pub tutorials: Vec<CatalogEntry>,
    #[serde(default)]
    pub diff_bindings: Vec<DiffTutorialBinding>,
}
