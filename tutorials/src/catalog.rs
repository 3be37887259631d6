//! Built-in catalog and the startup routine that turns a catalog into a
//! [`Registry`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::error::Result;
use crate::core::registry::Registry;
use crate::core::types::{
    CatalogEntry, CatalogSource, DiffTutorialBinding, TutorialData, TutorialStep,
};

/// Execution context the catalog is loaded in.
///
/// Diff bindings only matter to the client-side diff viewer; on the server
/// they are never registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionContext {
    Client,
    #[default]
    Server,
}

impl ExecutionContext {
    pub fn is_client(self) -> bool {
        self == Self::Client
    }
}

/// Build a registry from `source`.
///
/// Tutorials are registered in declaration order. Bindings are registered
/// only in a client context, then checked against the registered tutorials.
pub fn bootstrap(source: CatalogSource, context: ExecutionContext) -> Result<Registry> {
    let mut registry = Registry::new();

    for entry in source.tutorials {
        registry.register_tutorial(&entry.id, entry.data)?;
    }

    if context.is_client() {
        for binding in source.diff_bindings {
            registry.register_diff_binding(binding)?;
        }
        registry.verify_bindings()?;
    } else if !source.diff_bindings.is_empty() {
        debug!(
            skipped = source.diff_bindings.len(),
            "server context: diff bindings not registered"
        );
    }

    info!(
        tutorials = registry.len(),
        bindings = registry.diff_bindings().count(),
        ?context,
        "catalog loaded"
    );
    Ok(registry)
}

/// The catalog shipped with the platform: the `simple-chat` tutorial.
pub fn builtin_catalog() -> CatalogSource {
    CatalogSource {
        tutorials: vec![CatalogEntry {
            id: "simple-chat".to_string(),
            data: TutorialData {
                title: "Simple Chat App".to_string(),
                subtitle: "Build a chat app in <100 lines of JavaScript".to_string(),
                tutorial_source_link: "github.com/meteor/tutorials/content/simple-chat"
                    .to_string(),
                steps: simple_chat_steps(),
            },
        }],
        diff_bindings: vec![DiffTutorialBinding {
            id: "simple-chat".to_string(),
            git_hub_repo_name: "meteor/chat-tutorial".to_string(),
            patch_filename: "generated/simple-chat.multi.patch".to_string(),
        }],
    }
}

fn simple_chat_steps() -> Vec<TutorialStep> {
    [
        ("Creating an app", "creating-an-app", "simple-chat-step01"),
        ("Templates", "templates", "angular-step02"),
        ("Collections", "collections", "angular-step03"),
        ("Forms and events", "forms-and-events", "angular-step04"),
        ("Update and remove", "update-and-remove", "angular-step05"),
        ("Deploying your app", "deploying-your-app", "shared-step06"),
        ("Running on mobile", "running-on-mobile", "angular-step07"),
        ("Filtering Collections", "filtering-collections", "angular-step08"),
        ("Adding user accounts", "adding-user-accounts", "angular-step09"),
        ("Security with methods", "security-with-methods", "angular-step10"),
        ("Publish and subscribe", "publish-and-subscribe", "angular-step11"),
        ("Next steps", "next-steps", "angular-step12"),
    ]
    .into_iter()
    .map(|(title, slug, template)| TutorialStep::new(title, slug, template))
    .collect()
}
