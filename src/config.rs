//! Construction parameters for a `HashTable`.

use crate::domain::Domain;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BUCKET_COUNT: usize = 64;

/// Bucket count and initial domains. Can be built in code or loaded from
/// TOML:
///
/// ```toml
/// bucket_count = 10
/// key_domain = "string"
/// value_domain = "integer"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Number of buckets, fixed for the lifetime of the table.
    pub bucket_count: usize,
    pub key_domain: Domain,
    pub value_domain: Domain,
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    pub fn with_key_domain(mut self, domain: Domain) -> Self {
        self.key_domain = domain;
        self
    }

    pub fn with_value_domain(mut self, domain: Domain) -> Self {
        self.value_domain = domain;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(Error::Config("bucket_count must be positive".into()));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing fields take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            key_domain: Domain::Integer,
            value_domain: Domain::Integer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let c = TableConfig::new()
            .with_bucket_count(10)
            .with_key_domain(Domain::String)
            .with_value_domain(Domain::Character);
        assert_eq!(c.bucket_count, 10);
        assert_eq!(c.key_domain, Domain::String);
        assert_eq!(c.value_domain, Domain::Character);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn parses_toml_with_defaults_for_missing_fields() {
        let c = TableConfig::from_toml_str("key_domain = \"string\"\n").unwrap();
        assert_eq!(c.bucket_count, DEFAULT_BUCKET_COUNT);
        assert_eq!(c.key_domain, Domain::String);
        assert_eq!(c.value_domain, Domain::Integer);
    }

    #[test]
    fn rejects_unknown_domain_names() {
        let r = TableConfig::from_toml_str("key_domain = \"float\"\n");
        assert!(matches!(r, Err(Error::Config(_))));
    }

    #[test]
    fn rejects_zero_buckets_and_unknown_fields() {
        assert!(matches!(
            TableConfig::from_toml_str("bucket_count = 0\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TableConfig::from_toml_str("buckets = 3\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn toml_output_parses_back() {
        let c = TableConfig::new()
            .with_bucket_count(7)
            .with_key_domain(Domain::Character);
        let text = c.to_toml_string().unwrap();
        assert!(text.contains("key_domain = \"character\""));
        assert_eq!(TableConfig::from_toml_str(&text).unwrap(), c);
    }
}
