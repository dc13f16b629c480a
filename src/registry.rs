//! Pattern registry: identifier → descriptor, in registration order.

use crate::buffers::AttributeBuffers;
use crate::config::{GenerationConfig, ParticleCount};
use crate::error::PatternError;
use crate::patterns::{Generator, PatternDescriptor, BUILTIN};
use rand::Rng;

/// What [`PatternRegistry::register`] does with an identifier that is
/// already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail with [`PatternError::DuplicatePattern`].
    #[default]
    Reject,
    /// Swap in the new generator, keeping the original position.
    Replace,
}

/// Lookup table of patterns.
///
/// Built once at startup and read-only afterwards. Lookups are linear; the
/// table holds a couple dozen entries.
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    patterns: Vec<PatternDescriptor>,
    policy: DuplicatePolicy,
}

impl PatternRegistry {
    /// Create an empty registry that rejects duplicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in pattern.
    pub fn builtin() -> Self {
        Self {
            patterns: BUILTIN.to_vec(),
            policy: DuplicatePolicy::Reject,
        }
    }

    /// Set how re-registration of an existing identifier is handled.
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add a pattern.
    pub fn register(
        &mut self,
        id: &'static str,
        name: &'static str,
        generator: Generator,
    ) -> Result<(), PatternError> {
        let descriptor = PatternDescriptor::new(id, name, generator);
        match (self.index_of(id), self.policy) {
            (None, _) => self.patterns.push(descriptor),
            (Some(_), DuplicatePolicy::Reject) => {
                return Err(PatternError::DuplicatePattern(id.to_string()))
            }
            (Some(index), DuplicatePolicy::Replace) => self.patterns[index] = descriptor,
        }
        Ok(())
    }

    /// Look up a pattern by identifier.
    pub fn get(&self, id: &str) -> Result<&PatternDescriptor, PatternError> {
        self.patterns
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PatternError::UnknownPattern(id.to_string()))
    }

    /// Position of `id` in registration order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.id == id)
    }

    /// Identifiers in registration order.
    pub fn list_identifiers(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.id).collect()
    }

    /// Iterate descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternDescriptor> {
        self.patterns.iter()
    }

    /// Pick a pattern uniformly at random. `None` when empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PatternDescriptor> {
        if self.patterns.is_empty() {
            return None;
        }
        Some(&self.patterns[rng.gen_range(0..self.patterns.len())])
    }

    /// Look up `id`, validate `config` and generate one frame.
    pub fn generate(
        &self,
        id: &str,
        count: impl Into<ParticleCount>,
        config: &GenerationConfig,
    ) -> Result<AttributeBuffers, PatternError> {
        self.get(id)?.generate(count, config)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn empty(count: usize, _config: &GenerationConfig) -> AttributeBuffers {
        AttributeBuffers::zeroed(count)
    }

    #[test]
    fn test_registry_new() {
        let registry = PatternRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_insertion_order() {
        let mut registry = PatternRegistry::new();
        registry.register("b", "B", empty).unwrap();
        registry.register("a", "A", empty).unwrap();
        registry.register("c", "C", empty).unwrap();
        assert_eq!(registry.list_identifiers(), vec!["b", "a", "c"]);
        assert_eq!(registry.index_of("c"), Some(2));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = PatternRegistry::new();
        registry.register("a", "A", empty).unwrap();
        assert_eq!(
            registry.register("a", "Again", empty),
            Err(PatternError::DuplicatePattern("a".into()))
        );
        assert_eq!(registry.get("a").unwrap().name, "A");
    }

    #[test]
    fn test_duplicate_replaced_in_place() {
        let mut registry = PatternRegistry::new().with_policy(DuplicatePolicy::Replace);
        registry.register("a", "A", empty).unwrap();
        registry.register("b", "B", empty).unwrap();
        registry.register("a", "Again", empty).unwrap();
        assert_eq!(registry.list_identifiers(), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().name, "Again");
    }

    #[test]
    fn test_unknown_pattern() {
        let registry = PatternRegistry::builtin();
        assert_eq!(
            registry.get("nope").unwrap_err(),
            PatternError::UnknownPattern("nope".into())
        );
    }

    #[test]
    fn test_builtin_order() {
        let ids = PatternRegistry::builtin().list_identifiers();
        assert_eq!(ids.len(), 22);
        assert_eq!(ids[0], "concentricRings");
        assert_eq!(ids[11], "spiral");
        assert_eq!(ids[21], "tornado");
    }

    #[test]
    fn test_choose_is_seeded() {
        let registry = PatternRegistry::builtin();
        let a = registry.choose(&mut SmallRng::seed_from_u64(7)).unwrap().id;
        let b = registry.choose(&mut SmallRng::seed_from_u64(7)).unwrap().id;
        assert_eq!(a, b);
        assert!(PatternRegistry::new().choose(&mut SmallRng::seed_from_u64(7)).is_none());
    }

    #[test]
    fn test_generate_dispatches() {
        let registry = PatternRegistry::builtin();
        let out = registry
            .generate("particleCube", 120usize, &GenerationConfig::new())
            .unwrap();
        assert_eq!(out.len(), 120);
    }
}
