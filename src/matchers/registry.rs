//! Matcher registry mapping feed types to matchers

use super::traits::Matcher;
use super::{DefaultMatcher, RssMatcher};
use crate::error::{Result, SearchError};
use crate::network::HttpClient;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Feed type whose matcher handles every unregistered type
pub const DEFAULT_FEED_TYPE: &str = "default";

/// Registry of matchers by feed type.
///
/// Populated once before any search runs and shared read-only afterwards.
/// A search resolves unknown feed types to the `"default"` binding, so that
/// binding must be registered before searching feeds of unknown type.
pub struct MatcherRegistry {
    matchers: HashMap<String, Arc<dyn Matcher>>,
}

impl MatcherRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            matchers: HashMap::new(),
        }
    }

    /// Create a registry with the built-in `default` and `rss` matchers
    pub fn with_builtin(client: HttpClient) -> Result<Self> {
        let mut registry = Self::new();
        registry.register(DEFAULT_FEED_TYPE, Arc::new(DefaultMatcher::new()))?;
        registry.register("rss", Arc::new(RssMatcher::new(client)))?;
        Ok(registry)
    }

    /// Bind a matcher to a feed type. Rebinding a type is an error.
    pub fn register(
        &mut self,
        feed_type: impl Into<String>,
        matcher: Arc<dyn Matcher>,
    ) -> Result<()> {
        let feed_type = feed_type.into();
        if self.matchers.contains_key(&feed_type) {
            return Err(SearchError::DuplicateMatcher(feed_type));
        }

        info!("Register {} matcher", feed_type);
        self.matchers.insert(feed_type, matcher);
        Ok(())
    }

    /// Matcher for a feed type, falling back to the default matcher
    pub fn resolve(&self, feed_type: &str) -> Result<Arc<dyn Matcher>> {
        self.matchers
            .get(feed_type)
            .or_else(|| self.matchers.get(DEFAULT_FEED_TYPE))
            .cloned()
            .ok_or_else(|| SearchError::NoMatcher(feed_type.to_string()))
    }

    /// Check if a feed type has its own binding
    pub fn contains(&self, feed_type: &str) -> bool {
        self.matchers.contains_key(feed_type)
    }

    /// Registered feed types
    pub fn feed_types(&self) -> Vec<&str> {
        self.matchers.keys().map(|s| s.as_str()).collect()
    }

    /// Get number of registered matchers
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use crate::feeds::Feed;
    use crate::results::ResultSender;
    use async_trait::async_trait;

    struct Named(&'static str);

    #[async_trait]
    impl Matcher for Named {
        fn name(&self) -> &str {
            self.0
        }

        async fn search(
            &self,
            _: &Feed,
            _: &str,
            _: &ResultSender,
        ) -> std::result::Result<(), MatchError> {
            Ok(())
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = MatcherRegistry::new();
        registry.register("rss", Arc::new(Named("rss"))).unwrap();
        registry.register("default", Arc::new(Named("default"))).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("rss"));
        assert_eq!(registry.resolve("rss").unwrap().name(), "rss");
    }

    #[test]
    fn test_unknown_type_resolves_to_default() {
        let mut registry = MatcherRegistry::new();
        registry.register("rss", Arc::new(Named("rss"))).unwrap();
        registry.register("default", Arc::new(Named("default"))).unwrap();

        assert_eq!(registry.resolve("atom").unwrap().name(), "default");
        assert!(!registry.contains("atom"));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = MatcherRegistry::new();
        registry.register("rss", Arc::new(Named("first"))).unwrap();

        let err = registry.register("rss", Arc::new(Named("second"))).unwrap_err();
        assert!(matches!(err, SearchError::DuplicateMatcher(ref t) if t == "rss"));
        assert_eq!(registry.resolve("rss").unwrap().name(), "first");
    }

    #[test]
    fn test_no_default_is_an_error() {
        let mut registry = MatcherRegistry::new();
        registry.register("rss", Arc::new(Named("rss"))).unwrap();

        let err = registry.resolve("unknown").err().unwrap();
        assert!(matches!(err, SearchError::NoMatcher(ref t) if t == "unknown"));
    }

    #[test]
    fn test_builtin_registry() {
        let registry = MatcherRegistry::with_builtin(HttpClient::new().unwrap()).unwrap();

        let mut types = registry.feed_types();
        types.sort();
        assert_eq!(types, vec!["default", "rss"]);
        assert_eq!(registry.resolve("json").unwrap().name(), "default");
    }
}
