//! Named parameter bindings and the `@name` placeholder formatter.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use tokio_postgres::types::ToSql;

/// Prefix that turns a binding name into a placeholder token.
pub const PLACEHOLDER_PREFIX: char = '@';

/// A named value pending conversion into a placeholder/parameter pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBinding {
    name: String,
    value: Value,
}

impl ParameterBinding {
    /// Create a binding. The name is used as-is; empty or duplicate names are not checked.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The `@name` token this binding renders as.
    pub fn placeholder(&self) -> String {
        format!("{PLACEHOLDER_PREFIX}{}", self.name)
    }
}

/// The executable-ready form of a [`ParameterBinding`]: placeholder name plus value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeParameter {
    /// Placeholder name including the `@` prefix.
    pub name: String,
    pub value: Value,
}

impl NativeParameter {
    /// Get the value as a tokio-postgres parameter reference.
    pub fn as_sql(&self) -> &(dyn ToSql + Sync) {
        &self.value
    }
}

impl From<ParameterBinding> for NativeParameter {
    fn from(binding: ParameterBinding) -> Self {
        Self {
            name: binding.placeholder(),
            value: binding.value,
        }
    }
}

/// Output of [`ParameterFormatter::execute`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedParameters {
    /// Comma-joined placeholders in input order, e.g. `@p1,@p2`.
    pub placeholders: String,
    /// Native parameters in the same order as the placeholders.
    pub parameters: Vec<NativeParameter>,
}

/// Converts an ordered list of bindings into placeholder text and native parameters.
#[derive(Debug, Clone, Default)]
pub struct ParameterFormatter {
    bindings: Vec<ParameterBinding>,
}

impl ParameterFormatter {
    pub fn new(bindings: impl IntoIterator<Item = ParameterBinding>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn execute(self) -> FormattedParameters {
        let placeholders = self
            .bindings
            .iter()
            .map(ParameterBinding::placeholder)
            .collect::<Vec<_>>()
            .join(",");
        let parameters = self.bindings.into_iter().map(NativeParameter::from).collect();

        FormattedParameters {
            placeholders,
            parameters,
        }
    }
}

/// Shorthand for `ParameterFormatter::new(bindings).execute()`.
pub fn format_parameters(bindings: impl IntoIterator<Item = ParameterBinding>) -> FormattedParameters {
    ParameterFormatter::new(bindings).execute()
}
