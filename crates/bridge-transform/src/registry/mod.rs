//! Mapping registry - resolves a source type to its mapping
//!
//! The registry is built once at process start and never mutated afterwards;
//! it is shared behind an `Arc` without locking.

use std::collections::HashMap;
use std::sync::Arc;

use bridge_core::{Mapping, SourceType, TransformError};

use crate::mappings::{
    BotkubeMapping, DevguardMapping, DocsAssignmentMapping, GithubMapping, GitlabMapping,
    GlitchtipMapping,
};

/// Registry of per-source mappings
pub struct MappingRegistry {
    mappings: HashMap<SourceType, Arc<dyn Mapping>>,
}

impl MappingRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    /// Create a registry with every built-in mapping registered
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(SourceType::Glitchtip, Arc::new(GlitchtipMapping));
        registry.register(SourceType::Botkube, Arc::new(BotkubeMapping));
        registry.register(SourceType::Devguard, Arc::new(DevguardMapping));
        registry.register(SourceType::Github, Arc::new(GithubMapping));
        registry.register(SourceType::Gitlab, Arc::new(GitlabMapping));
        registry.register(
            SourceType::DocumentationAssignment,
            Arc::new(DocsAssignmentMapping),
        );
        registry
    }

    /// Register a mapping for a source type
    ///
    /// Registration happens at construction time only; the registry is
    /// consumed by the engine and never exposed mutably afterwards.
    pub fn register(&mut self, source_type: SourceType, mapping: Arc<dyn Mapping>) {
        self.mappings.insert(source_type, mapping);
    }

    /// Look up the mapping for a source type
    ///
    /// A miss means the source type is known but its mapping was never
    /// loaded; this is reported, never a panic.
    pub fn get(&self, source_type: SourceType) -> Result<&dyn Mapping, TransformError> {
        self.mappings
            .get(&source_type)
            .map(Arc::as_ref)
            .ok_or(TransformError::MappingUnavailable(source_type))
    }

    /// Check if a mapping is registered for a source type
    pub fn contains(&self, source_type: SourceType) -> bool {
        self.mappings.contains_key(&source_type)
    }

    /// Number of registered mappings
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
