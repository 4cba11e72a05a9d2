//! Registry of command-owning modules.

use crate::error::RegistryError;
use crate::module::Module;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Mapping from routing keyword to owning module.
///
/// Built once at startup by registering each module explicitly; after that
/// it is read-only, so an `Arc<Registry>` can be shared across concurrent
/// dispatch without locking.
#[derive(Default)]
pub struct Registry {
    mapping: HashMap<String, Arc<dyn Module>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under every keyword it declares.
    ///
    /// A keyword already held by another module is a configuration error:
    /// registration fails and the registry is left unchanged, so the host
    /// can refuse to start rather than dispatch against an ambiguous
    /// mapping.
    pub fn register(&mut self, module: Arc<dyn Module>) -> Result<(), RegistryError> {
        for &keyword in module.keywords() {
            let key = keyword.to_ascii_lowercase();
            if let Some(existing) = self.mapping.get(&key) {
                return Err(RegistryError::DuplicateKeyword {
                    keyword: key,
                    existing: existing.identifier(),
                    rejected: module.identifier(),
                });
            }
        }

        for &keyword in module.keywords() {
            debug!(module = module.identifier(), keyword, "registered");
            self.mapping
                .insert(keyword.to_ascii_lowercase(), Arc::clone(&module));
        }

        Ok(())
    }

    /// Look up the module owning `keyword`. The keyword is matched
    /// case-folded and exactly.
    pub fn get(&self, keyword: &str) -> Option<&Arc<dyn Module>> {
        self.mapping.get(&keyword.to_ascii_lowercase())
    }

    /// All registered modules, deduplicated by identifier.
    pub fn modules(&self) -> Vec<Arc<dyn Module>> {
        let mut seen = Vec::new();
        let mut modules = Vec::new();
        for module in self.mapping.values() {
            if !seen.contains(&module.identifier()) {
                seen.push(module.identifier());
                modules.push(Arc::clone(module));
            }
        }
        modules
    }

    /// Number of registered keywords.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// True if no keywords are registered.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
