//! Builder configuration.

use crate::error::{BuilderError, BuilderResult};

#[cfg(feature = "tracing")]
use crate::trace::TracingSqlLog;

/// Schema prefix applied to every table reference unless configured otherwise.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// Configuration for [`SqlBuilder`](crate::SqlBuilder).
///
/// The default qualifies tables with the `dbo` schema and does not log statements.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Schema prefix for table names. `None` renders tables unqualified.
    pub schema: Option<String>,
    /// Statement log emitted by `SqlBuilder::finish`.
    #[cfg(feature = "tracing")]
    pub tracing: Option<TracingSqlLog>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            schema: Some(DEFAULT_SCHEMA.to_string()),
            #[cfg(feature = "tracing")]
            tracing: None,
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults (`dbo` schema).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema prefix.
    ///
    /// Each `.`-separated segment must match `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn with_schema(mut self, schema: &str) -> BuilderResult<Self> {
        validate_schema(schema)?;
        self.schema = Some(schema.to_string());
        Ok(self)
    }

    /// Render table names without a schema prefix.
    pub fn without_schema(mut self) -> Self {
        self.schema = None;
        self
    }

    /// Log finished statements through `tracing`.
    #[cfg(feature = "tracing")]
    pub fn with_tracing(mut self, log: TracingSqlLog) -> Self {
        self.tracing = Some(log);
        self
    }

    /// Qualify a table name with the configured schema. The table name is not validated.
    pub fn qualify(&self, table: &str) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{table}"),
            None => table.to_string(),
        }
    }
}

fn validate_schema(schema: &str) -> BuilderResult<()> {
    if schema.is_empty() {
        return Err(BuilderError::validation("BuilderConfig::with_schema: empty schema"));
    }

    for seg in schema.split('.') {
        let mut chars = seg.chars();
        let first_ok = chars
            .next()
            .is_some_and(|c| c == '_' || c.is_ascii_alphabetic());

        if !first_ok || !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
            return Err(BuilderError::Validation(format!(
                "BuilderConfig::with_schema: invalid schema '{}'",
                schema
            )));
        }
    }
    Ok(())
}
