//! Semantic invariants for tutorials and diff bindings.
//!
//! Checks return every violation rather than stopping at the first one, so a
//! catalog file reports all of its problems in one pass.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::{CatalogSource, DiffTutorialBinding, TutorialData};

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
static REPO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").unwrap());

/// Check a tutorial registration:
/// - `id` and `title` not blank
/// - at least one step
/// - every step has a title, a URL-safe slug and a template
/// - slugs unique within the tutorial
pub fn validate_tutorial(id: &str, data: &TutorialData) -> Vec<String> {
    let mut errors = Vec::new();

    if id.trim().is_empty() {
        errors.push("id must not be blank".to_string());
    }
    if data.title.trim().is_empty() {
        errors.push("title must not be blank".to_string());
    }
    if data.steps.is_empty() {
        errors.push("steps must not be empty".to_string());
    }

    let mut seen = HashSet::new();
    for (index, step) in data.steps.iter().enumerate() {
        let path = format!("steps[{index}]");
        if step.title.trim().is_empty() {
            errors.push(format!("{path}: title must not be blank"));
        }
        if step.template.trim().is_empty() {
            errors.push(format!("{path}: template must not be blank"));
        }
        if !SLUG_RE.is_match(&step.slug) {
            errors.push(format!("{path}: slug '{}' is not URL-safe", step.slug));
        }
        if !seen.insert(step.slug.as_str()) {
            errors.push(format!("{path}: duplicate slug '{}'", step.slug));
        }
    }

    errors
}

/// Check a diff binding's own fields. Whether the tutorial exists is a
/// registry-level question answered by `Registry::verify_bindings`.
pub fn validate_binding(binding: &DiffTutorialBinding) -> Vec<String> {
    let mut errors = Vec::new();

    if binding.id.trim().is_empty() {
        errors.push("id must not be blank".to_string());
    }
    if binding.git_hub_repo_name.trim().is_empty() {
        errors.push("gitHubRepoName must not be blank".to_string());
    } else if !REPO_RE.is_match(&binding.git_hub_repo_name) {
        errors.push(format!(
            "gitHubRepoName '{}' must look like owner/repo",
            binding.git_hub_repo_name
        ));
    }
    if binding.patch_filename.trim().is_empty() {
        errors.push("patchFilename must not be blank".to_string());
    }

    errors
}

/// Check a whole catalog:
/// - every tutorial and binding passes its own checks
/// - tutorial ids unique
/// - every binding names a declared tutorial
pub fn validate_catalog(source: &CatalogSource) -> Vec<String> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for entry in &source.tutorials {
        if !ids.insert(entry.id.as_str()) {
            errors.push(format!("duplicate tutorial id '{}'", entry.id));
        }
        for err in validate_tutorial(&entry.id, &entry.data) {
            errors.push(format!("tutorial '{}': {}", entry.id, err));
        }
    }

    for binding in &source.diff_bindings {
        for err in validate_binding(binding) {
            errors.push(format!("diff binding '{}': {}", binding.id, err));
        }
        if !ids.contains(binding.id.as_str()) {
            errors.push(format!(
                "diff binding '{}' refers to an undeclared tutorial",
                binding.id
            ));
        }
    }

    errors
}
