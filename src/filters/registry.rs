use crate::filters::myna_id::myna_id;
use crate::utils::error::{MynaError, Result};
use std::collections::HashMap;

/// A named value transformation invocable from template syntax,
/// e.g. `{{ page.url | myna_id }}`.
pub trait TemplateFilter: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, input: &str) -> String;
}

/// Strips `/` and `-` to produce HTML-attribute-safe identifiers.
pub struct MynaId;

impl TemplateFilter for MynaId {
    fn name(&self) -> &str {
        "myna_id"
    }

    fn apply(&self, input: &str) -> String {
        myna_id(input)
    }
}

/// Filter lookup table handed to the rendering layer.
pub struct FilterRegistry {
    filters: HashMap<String, Box<dyn TemplateFilter>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    pub fn register(&mut self, filter: Box<dyn TemplateFilter>) {
        tracing::debug!("Registering template filter: {}", filter.name());
        self.filters.insert(filter.name().to_string(), filter);
    }

    pub fn get(&self, name: &str) -> Option<&dyn TemplateFilter> {
        self.filters.get(name).map(|f| f.as_ref())
    }

    pub fn apply(&self, name: &str, input: &str) -> Result<String> {
        let filter = self.get(name).ok_or_else(|| MynaError::UnknownFilter {
            name: name.to_string(),
        })?;
        Ok(filter.apply(input))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FilterRegistry {
    /// Registry with the site's standard filters pre-registered.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MynaId));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_myna_id() {
        let registry = FilterRegistry::default();
        assert_eq!(registry.names(), vec!["myna_id"]);
        assert_eq!(registry.apply("myna_id", "a/b-c").unwrap(), "abc");
    }

    #[test]
    fn test_unknown_filter_is_an_error() {
        let registry = FilterRegistry::default();
        let err = registry.apply("upcase", "abc").unwrap_err();
        assert!(matches!(err, MynaError::UnknownFilter { name } if name == "upcase"));
    }

    #[test]
    fn test_register_overwrites_by_name() {
        struct Shout;
        impl TemplateFilter for Shout {
            fn name(&self) -> &str {
                "myna_id"
            }
            fn apply(&self, input: &str) -> String {
                input.to_uppercase()
            }
        }

        let mut registry = FilterRegistry::default();
        registry.register(Box::new(Shout));
        assert_eq!(registry.apply("myna_id", "abc").unwrap(), "ABC");
        assert_eq!(registry.names().len(), 1);
    }
}
