//! Transform registry

use std::collections::HashMap;

use crate::transform::Transform;

/// Central registry mapping dotted identifiers (`<namespace>.<name>`) to
/// transforms.
///
/// The registry is built explicitly by the embedder and injected into the
/// engine; there is no global registration and no ambient lookup. Unknown
/// identifiers surface as errors when a run starts, never as silent skips.
#[derive(Default)]
pub struct TransformRegistry {
    entries: HashMap<String, Box<dyn Transform>>,
}

impl TransformRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a transform under an identifier, replacing any previous
    /// registration for that identifier.
    pub fn register(&mut self, id: impl Into<String>, transform: Box<dyn Transform>) {
        self.entries.insert(id.into(), transform);
    }

    /// Resolve an identifier to its transform.
    pub fn resolve(&self, id: &str) -> Option<&dyn Transform> {
        self.entries.get(id).map(|t| t.as_ref())
    }

    /// Check if an identifier is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered identifiers (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.entries.keys().map(String::as_str).collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::transform::TransformError;

    fn constant(text: &'static str) -> Box<dyn Transform> {
        Box::new(move |_: &str, _: &Context| -> Result<String, TransformError> {
            Ok(text.to_string())
        })
    }

    #[test]
    fn resolve_registered_transform() {
        let mut registry = TransformRegistry::new();
        registry.register("test.hello", constant("hello"));

        assert!(registry.contains("test.hello"));
        let transform = registry.resolve("test.hello").unwrap();
        assert_eq!(transform.apply("", &Context::new()).unwrap(), "hello");
    }

    #[test]
    fn unknown_identifier_resolves_to_none() {
        let registry = TransformRegistry::new();
        assert!(registry.resolve("no.such").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn later_registration_wins() {
        let mut registry = TransformRegistry::new();
        registry.register("test.value", constant("first"));
        registry.register("test.value", constant("second"));

        assert_eq!(registry.len(), 1);
        let transform = registry.resolve("test.value").unwrap();
        assert_eq!(transform.apply("", &Context::new()).unwrap(), "second");
    }

    #[test]
    fn list_is_sorted() {
        let mut registry = TransformRegistry::new();
        registry.register("b.two", constant("2"));
        registry.register("a.one", constant("1"));
        assert_eq!(registry.list(), ["a.one", "b.two"]);
    }
}
