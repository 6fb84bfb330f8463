//! Decoding configuration.

use crate::catalog::SchemaCatalog;

/// Options applied when a message is decoded from its record form.
#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    /// Emit a `warn` event for function ids that do not resolve.
    pub warn_unknown_functions: bool,

    /// Run the catalog check after decoding and log violations at `debug`.
    pub check_schemas: bool,

    /// Catalog used by the schema check.
    pub catalog: SchemaCatalog,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            warn_unknown_functions: true,
            check_schemas: false,
            catalog: SchemaCatalog::builtin(),
        }
    }
}

impl ProtocolConfig {
    /// Creates a configuration using `catalog`; other options keep their
    /// defaults, so schema checking stays off.
    pub fn new(catalog: SchemaCatalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    /// Builder: set unknown function warnings.
    pub fn with_warn_unknown_functions(mut self, warn: bool) -> Self {
        self.warn_unknown_functions = warn;
        self
    }

    /// Builder: set schema checking.
    pub fn with_check_schemas(mut self, check: bool) -> Self {
        self.check_schemas = check;
        self
    }

    /// Builder: set catalog.
    pub fn with_catalog(mut self, catalog: SchemaCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ProtocolConfig::default();
        assert!(config.warn_unknown_functions);
        assert!(!config.check_schemas);
        assert_eq!(config.catalog.len(), SchemaCatalog::builtin().len());
    }

    #[test]
    fn custom_config() {
        let config = ProtocolConfig::new(SchemaCatalog::empty())
            .with_warn_unknown_functions(false)
            .with_check_schemas(false)
            .with_catalog(SchemaCatalog::empty());

        assert!(!config.warn_unknown_functions);
        assert!(!config.check_schemas);
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn new_only_sets_catalog() {
        let config = ProtocolConfig::new(SchemaCatalog::empty());
        assert!(config.catalog.is_empty());
        assert!(!config.check_schemas);
        assert!(config.warn_unknown_functions);
    }
}
