use super::ContactMetric;
use super::builtin::{BetweenRadii, HardCutoff};
use std::collections::HashMap;
use std::sync::Arc;

/// Name-keyed table of contact criteria.
///
/// A registry preloaded with the built-ins lets callers configure runs from
/// plain strings (e.g. deserialized settings) while still accepting
/// user-supplied implementations of [`ContactMetric`].
#[derive(Clone, Default)]
pub struct MetricRegistry {
    registry: HashMap<String, Arc<dyn ContactMetric>>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry containing `hard_cutoff` and `between_radii`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HardCutoff));
        registry.register(Arc::new(BetweenRadii));
        registry
    }

    /// Registers a metric under its own name, replacing any previous entry.
    pub fn register(&mut self, metric: Arc<dyn ContactMetric>) -> Option<Arc<dyn ContactMetric>> {
        self.registry.insert(metric.name().to_string(), metric)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ContactMetric>> {
        self.registry.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for MetricRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricRegistry")
            .field("metrics", &self.registry.keys().collect::<Vec<_>>())
            .finish()
    }
}
