//! The command accumulator: SQL text plus its bound parameters.

use crate::error::{BuilderError, BuilderResult};
use crate::param::{NativeParameter, PLACEHOLDER_PREFIX};
use std::fmt;
use tokio_postgres::types::ToSql;

/// An in-progress SQL statement and the parameters bound to its placeholders.
///
/// Every `@name` placeholder in the text is expected to have a matching entry in
/// `parameters` and vice versa. Nothing enforces this while building; use
/// [`Command::check`] to verify it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
    pub(crate) text: String,
    pub(crate) parameters: Vec<NativeParameter>,
}

impl Command {
    /// Create an empty command.
    pub fn new() -> Self {
        Self::default()
    }

    /// The SQL text built so far.
    pub fn command_text(&self) -> &str {
        &self.text
    }

    /// Bound parameters, in binding order.
    pub fn parameters(&self) -> &[NativeParameter] {
        &self.parameters
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.parameters.iter().map(NativeParameter::as_sql).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.parameters.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<NativeParameter>) {
        (self.text, self.parameters)
    }

    /// `@name` tokens in the text, left to right.
    ///
    /// Text between single quotes is skipped. Quote tracking is a plain toggle, so a
    /// literal containing an unescaped `'` shifts what counts as quoted.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut in_quote = false;
        let mut iter = self.text.char_indices().peekable();

        while let Some((start, c)) = iter.next() {
            if c == '\'' {
                in_quote = !in_quote;
                continue;
            }
            if in_quote || c != PLACEHOLDER_PREFIX {
                continue;
            }

            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = iter.peek() {
                if next == '_' || next.is_alphanumeric() {
                    end = i + next.len_utf8();
                    iter.next();
                } else {
                    break;
                }
            }
            out.push(&self.text[start..end]);
        }
        out
    }

    /// Verify that placeholders and parameters correspond one-to-one by name.
    pub fn check(&self) -> BuilderResult<()> {
        let placeholders = self.placeholders();

        if let Some(unbound) = placeholders
            .iter()
            .find(|ph| !self.parameters.iter().any(|p| p.name == **ph))
        {
            return Err(BuilderError::UnboundPlaceholder(unbound.to_string()));
        }

        if let Some(unused) = self
            .parameters
            .iter()
            .find(|p| !placeholders.contains(&p.name.as_str()))
        {
            return Err(BuilderError::UnusedParameter(unused.name.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
