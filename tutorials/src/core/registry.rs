//! In-memory tutorial catalog.
//!
//! A `Registry` is built once at startup through `&mut self` registration
//! calls, then handed out by shared reference (or `Arc`) to readers. After
//! construction nothing mutates it, so concurrent reads need no locking.
//! Registration is add-only.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::core::error::{RegistryError, Result};
use crate::core::invariants::{validate_binding, validate_tutorial};
use crate::core::types::{
    DiffTutorialBinding, StepNavigation, Tutorial, TutorialData, TutorialStep,
};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    tutorials: IndexMap<String, Tutorial>,
    bindings: IndexMap<String, DiffTutorialBinding>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tutorial under `id`.
    ///
    /// Fails with `DuplicateId` if `id` is taken (the stored entry is left
    /// untouched) and with `Validation` if `data` breaks a tutorial invariant.
    pub fn register_tutorial(&mut self, id: &str, data: TutorialData) -> Result<()> {
        let violations = validate_tutorial(id, &data);
        if !violations.is_empty() {
            return Err(RegistryError::Validation {
                subject: format!("tutorial '{id}'"),
                violations,
            });
        }
        match self.tutorials.entry(id.to_string()) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateId(id.to_string())),
            Entry::Vacant(slot) => {
                debug!(tutorial_id = id, steps = data.steps.len(), "tutorial registered");
                slot.insert(Tutorial::from_data(id, data));
                Ok(())
            }
        }
    }

    /// Register (or replace) the diff binding for `binding.id`.
    ///
    /// The referenced tutorial need not be registered yet; call
    /// [`Registry::verify_bindings`] once every registration has run.
    pub fn register_diff_binding(&mut self, binding: DiffTutorialBinding) -> Result<()> {
        let violations = validate_binding(&binding);
        if !violations.is_empty() {
            return Err(RegistryError::Validation {
                subject: format!("diff binding '{}'", binding.id),
                violations,
            });
        }
        debug!(
            tutorial_id = binding.id.as_str(),
            repo = binding.git_hub_repo_name.as_str(),
            "diff binding registered"
        );
        self.bindings.insert(binding.id.clone(), binding);
        Ok(())
    }

    /// Fail with `UnknownTutorial` for the first binding (in registration
    /// order) whose tutorial was never registered.
    pub fn verify_bindings(&self) -> Result<()> {
        match self
            .bindings
            .keys()
            .find(|id| !self.tutorials.contains_key(id.as_str()))
        {
            Some(id) => Err(RegistryError::UnknownTutorial(id.clone())),
            None => Ok(()),
        }
    }

    pub fn get_tutorial(&self, id: &str) -> Result<&Tutorial> {
        self.tutorials
            .get(id)
            .ok_or_else(|| RegistryError::tutorial_not_found(id))
    }

    /// Tutorials in registration order. Each call starts a fresh iteration.
    pub fn tutorials(&self) -> impl Iterator<Item = &Tutorial> + '_ {
        self.tutorials.values()
    }

    /// First step of the tutorial whose slug matches.
    pub fn get_step(&self, tutorial_id: &str, step_slug: &str) -> Result<&TutorialStep> {
        let tutorial = self.get_tutorial(tutorial_id)?;
        tutorial
            .step_index(step_slug)
            .map(|index| &tutorial.steps[index])
            .ok_or_else(|| RegistryError::step_not_found(tutorial_id, step_slug))
    }

    /// Position of a step plus its neighbours in navigation order.
    pub fn step_navigation(&self, tutorial_id: &str, step_slug: &str) -> Result<StepNavigation<'_>> {
        let tutorial = self.get_tutorial(tutorial_id)?;
        let index = tutorial
            .step_index(step_slug)
            .ok_or_else(|| RegistryError::step_not_found(tutorial_id, step_slug))?;
        Ok(StepNavigation {
            position: index + 1,
            total: tutorial.steps.len(),
            step: &tutorial.steps[index],
            previous: index.checked_sub(1).map(|prev| &tutorial.steps[prev]),
            next: tutorial.steps.get(index + 1),
        })
    }

    pub fn diff_binding(&self, id: &str) -> Result<&DiffTutorialBinding> {
        self.bindings
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(format!("diff binding for '{id}'")))
    }

    pub fn diff_bindings(&self) -> impl Iterator<Item = &DiffTutorialBinding> + '_ {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.tutorials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tutorials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{binding, step, tutorial_data};

    fn chat_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register_tutorial(
                "simple-chat",
                TutorialData {
                    title: "Simple Chat App".to_string(),
                    subtitle: String::new(),
                    tutorial_source_link: String::new(),
                    steps: vec![
                        TutorialStep::new("Creating an app", "creating-an-app", "simple-chat-step01"),
                        TutorialStep::new("Templates", "templates", "angular-step02"),
                    ],
                },
            )
            .expect("register");
        registry
    }

    #[test]
    fn get_step_returns_matching_step() {
        let registry = chat_registry();
        let found = registry.get_step("simple-chat", "templates").expect("step");
        assert_eq!(found, &TutorialStep::new("Templates", "templates", "angular-step02"));
    }

    #[test]
    fn get_step_unknown_slug_is_not_found() {
        let registry = chat_registry();
        let err = registry.get_step("simple-chat", "missing").expect_err("missing");
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn get_step_unknown_tutorial_is_not_found() {
        let registry = chat_registry();
        let err = registry.get_step("other", "templates").expect_err("missing");
        assert_eq!(err, RegistryError::NotFound("tutorial 'other'".to_string()));
    }

    #[test]
    fn steps_keep_declared_order() {
        let mut registry = Registry::new();
        let slugs = ["zeta", "alpha", "mid", "beta"];
        let steps = slugs.iter().map(|slug| step(slug)).collect();
        registry
            .register_tutorial("t", tutorial_data("T", steps))
            .expect("register");

        let stored: Vec<&str> = registry
            .get_tutorial("t")
            .expect("tutorial")
            .steps
            .iter()
            .map(|step| step.slug.as_str())
            .collect();
        assert_eq!(stored, slugs);
    }

    #[test]
    fn duplicate_id_is_rejected_and_first_entry_kept() {
        let mut registry = chat_registry();
        let err = registry
            .register_tutorial("simple-chat", tutorial_data("Other", vec![step("x")]))
            .expect_err("duplicate");
        assert_eq!(err, RegistryError::DuplicateId("simple-chat".to_string()));

        let tutorial = registry.get_tutorial("simple-chat").expect("tutorial");
        assert_eq!(tutorial.title, "Simple Chat App");
        assert_eq!(tutorial.steps.len(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn empty_steps_fail_validation() {
        let mut registry = Registry::new();
        let err = registry
            .register_tutorial("t", tutorial_data("T", Vec::new()))
            .expect_err("empty");
        assert!(matches!(err, RegistryError::Validation { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_slugs_fail_validation() {
        let mut registry = Registry::new();
        let err = registry
            .register_tutorial("t", tutorial_data("T", vec![step("a"), step("a")]))
            .expect_err("duplicate slug");
        assert!(matches!(err, RegistryError::Validation { .. }));
    }

    #[test]
    fn get_step_prefers_first_match() {
        // registration rejects duplicate slugs, so plant the entry directly
        let mut tutorial = Tutorial::from_data("t", tutorial_data("T", vec![step("a")]));
        tutorial.steps.push(TutorialStep::new("Second", "a", "other"));
        let mut registry = Registry::new();
        registry.tutorials.insert("t".to_string(), tutorial);

        let found = registry.get_step("t", "a").expect("step");
        assert_eq!(found.template, "a-template");
        let nav = registry.step_navigation("t", "a").expect("nav");
        assert_eq!(nav.position, 1);
    }

    #[test]
    fn tutorials_iterate_in_registration_order_and_restart() {
        let mut registry = Registry::new();
        for id in ["c", "a", "b"] {
            registry
                .register_tutorial(id, tutorial_data(id, vec![step("s")]))
                .expect("register");
        }

        let first: Vec<&str> = registry.tutorials().map(|t| t.id.as_str()).collect();
        let second: Vec<&str> = registry.tutorials().map(|t| t.id.as_str()).collect();
        assert_eq!(first, vec!["c", "a", "b"]);
        assert_eq!(first, second);
    }

    #[test]
    fn binding_for_unknown_tutorial_is_stored_then_fails_verification() {
        let mut registry = Registry::new();
        registry
            .register_diff_binding(binding("nonexistent-id"))
            .expect("deferred check");
        assert!(registry.diff_binding("nonexistent-id").is_ok());

        let err = registry.verify_bindings().expect_err("dangling binding");
        assert_eq!(err, RegistryError::UnknownTutorial("nonexistent-id".to_string()));
    }

    #[test]
    fn binding_registered_before_tutorial_verifies() {
        let mut registry = Registry::new();
        registry
            .register_diff_binding(binding("simple-chat"))
            .expect("binding");
        registry
            .register_tutorial("simple-chat", tutorial_data("Chat", vec![step("a")]))
            .expect("tutorial");
        registry.verify_bindings().expect("verified");
    }

    #[test]
    fn binding_overwrites_previous_entry() {
        let mut registry = chat_registry();
        registry
            .register_diff_binding(binding("simple-chat"))
            .expect("first");
        let mut replacement = binding("simple-chat");
        replacement.patch_filename = "generated/v2.patch".to_string();
        registry
            .register_diff_binding(replacement)
            .expect("second");

        let stored = registry.diff_binding("simple-chat").expect("binding");
        assert_eq!(stored.patch_filename, "generated/v2.patch");
        assert_eq!(registry.diff_bindings().count(), 1);
    }

    #[test]
    fn binding_with_blank_fields_fails_validation() {
        let mut registry = chat_registry();
        let mut bad = binding("simple-chat");
        bad.git_hub_repo_name = String::new();
        let err = registry.register_diff_binding(bad).expect_err("blank repo");
        assert!(matches!(err, RegistryError::Validation { .. }));
        assert!(registry.diff_binding("simple-chat").is_err());
    }

    #[test]
    fn step_navigation_reports_neighbours() {
        let registry = chat_registry();

        let first = registry
            .step_navigation("simple-chat", "creating-an-app")
            .expect("nav");
        assert_eq!((first.position, first.total), (1, 2));
        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|s| s.slug.as_str()), Some("templates"));

        let last = registry.step_navigation("simple-chat", "templates").expect("nav");
        assert_eq!(last.position, 2);
        assert_eq!(last.previous.map(|s| s.slug.as_str()), Some("creating-an-app"));
        assert!(last.next.is_none());
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        let registry = std::sync::Arc::new(chat_registry());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = std::sync::Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry
                        .get_step("simple-chat", "templates")
                        .map(|step| step.template.clone())
                })
            })
            .collect();
        for handle in handles {
            let template = handle.join().expect("join").expect("step");
            assert_eq!(template, "angular-step02");
        }
    }
}
