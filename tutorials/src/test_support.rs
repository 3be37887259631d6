//! Test-only helpers for constructing catalog entries.

use crate::core::types::{DiffTutorialBinding, TutorialData, TutorialStep};

/// Create a deterministic step whose title and template derive from `slug`.
pub fn step(slug: &str) -> TutorialStep {
    TutorialStep::new(&format!("{} title", slug), slug, &format!("{}-template", slug))
}

/// Create registration data with deterministic display fields.
pub fn tutorial_data(title: &str, steps: Vec<TutorialStep>) -> TutorialData {
    TutorialData {
        title: title.to_string(),
        subtitle: format!("{} subtitle", title),
        tutorial_source_link: "github.com/example/tutorials".to_string(),
        steps,
    }
}

/// Create a well-formed diff binding for `id`.
pub fn binding(id: &str) -> DiffTutorialBinding {
    DiffTutorialBinding {
        id: id.to_string(),
        git_hub_repo_name: format!("example/{}", id),
        patch_filename: format!("generated/{}.multi.patch", id),
    }
}
