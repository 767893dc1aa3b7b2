//! Fluent SQL text builder.
//!
//! `SqlBuilder` owns one [`Command`] and appends (or, for `select`, prepends)
//! SQL fragments to its text. Every operation returns `&mut Self` so calls chain:
//!
//! ```ignore
//! use sqlbuilder::SqlBuilder;
//!
//! let mut b = SqlBuilder::new();
//! b.from(["users"]).select(["id", "name"]).where_("id").equal_to(42);
//! assert_eq!(b.to_sql(), "select id,name from dbo.users where id=42");
//! ```
//!
//! Nothing is validated. Operations may be called in any order and the text is
//! whatever the concatenation produces; `equal_to` before any `where_` yields `=42`.

use crate::command::Command;
use crate::config::BuilderConfig;
use crate::param::{ParameterBinding, ParameterFormatter};
use crate::value::{Value, format_literal, format_literal_list};

#[cfg(feature = "tracing")]
use crate::trace::fragment as trace_fragment;

#[cfg(not(feature = "tracing"))]
fn trace_fragment(_op: &'static str, _fragment: &str) {}

/// A fluent builder for SQL command text and its parameters.
#[derive(Debug, Clone, Default)]
pub struct SqlBuilder {
    command: Command,
    config: BuilderConfig,
}

/// Comma-join names without spaces.
fn join<I>(names: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl SqlBuilder {
    /// Create a builder with the default configuration (`dbo` schema).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a custom configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            command: Command::new(),
            config,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// The SQL text built so far.
    pub fn to_sql(&self) -> &str {
        self.command.command_text()
    }

    /// Consume the builder, returning the finished command.
    pub fn finish(self) -> Command {
        self.log_finished();
        self.command
    }

    #[cfg(feature = "tracing")]
    fn log_finished(&self) {
        if let Some(log) = &self.config.tracing {
            log.emit(&self.command);
        }
    }

    #[cfg(not(feature = "tracing"))]
    fn log_finished(&self) {}

    fn append(&mut self, op: &'static str, fragment: &str) -> &mut Self {
        trace_fragment(op, fragment);
        self.command.text.push_str(fragment);
        self
    }

    fn prepend(&mut self, op: &'static str, fragment: &str) -> &mut Self {
        trace_fragment(op, fragment);
        self.command.text.insert_str(0, fragment);
        self
    }

    /// Prepend `select <cols>` to the existing text. Columns are comma-joined as given.
    pub fn select<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let fragment = format!("select {}", join(columns));
        self.prepend("select", &fragment)
    }

    /// Prepend `select @p1,@p2,...` and replace the bound parameters with `bindings`.
    ///
    /// Parameters are overwritten, not appended: calling this twice leaves only the
    /// second call's parameters bound while both placeholder lists remain in the text.
    pub fn select_params<I>(&mut self, bindings: I) -> &mut Self
    where
        I: IntoIterator<Item = ParameterBinding>,
    {
        let formatted = ParameterFormatter::new(bindings).execute();
        self.command.parameters = formatted.parameters;

        let fragment = format!("select {}", formatted.placeholders);
        self.prepend("select_params", &fragment)
    }

    /// Append ` from <schema>.<t1>,<schema>.<t2>...`.
    pub fn from<I>(&mut self, tables: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let tables = join(tables.into_iter().map(|t| self.config.qualify(t.as_ref())));
        let fragment = format!(" from {tables}");
        self.append("from", &fragment)
    }

    /// Append `insert <schema>.<table> (<cols>) values (<literals>)`.
    ///
    /// Values are inlined through [`format_literal`]; no parameters are bound.
    pub fn insert<C, V>(&mut self, table: &str, columns: C, values: V) -> &mut Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        let fragment = format!(
            "insert {} ({}) values ({})",
            self.config.qualify(table),
            join(columns),
            format_literal_list(values)
        );
        self.append("insert", &fragment)
    }

    /// Append `delete`.
    pub fn delete(&mut self) -> &mut Self {
        self.append("delete", "delete")
    }

    /// Append ` where <column>`.
    pub fn where_(&mut self, column: &str) -> &mut Self {
        let fragment = format!(" where {column}");
        self.append("where", &fragment)
    }

    /// Append ` where <table>.<column>`. The table is not schema-qualified.
    pub fn where_qualified(&mut self, table: &str, column: &str) -> &mut Self {
        let fragment = format!(" where {table}.{column}");
        self.append("where", &fragment)
    }

    /// Append `=<literal>`.
    pub fn equal_to(&mut self, value: impl Into<Value>) -> &mut Self {
        let fragment = format!("={}", format_literal(&value.into()));
        self.append("equal_to", &fragment)
    }

    /// Append `!=<literal>`.
    pub fn not_equal_to(&mut self, value: impl Into<Value>) -> &mut Self {
        let fragment = format!("!={}", format_literal(&value.into()));
        self.append("not_equal_to", &fragment)
    }

    /// Append ` in (<literals>)`. An empty list renders ` in ()`.
    pub fn in_list<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let fragment = format!(" in ({})", format_literal_list(values));
        self.append("in_list", &fragment)
    }

    /// Append ` and <column>`.
    pub fn and(&mut self, column: &str) -> &mut Self {
        let fragment = format!(" and {column}");
        self.append("and", &fragment)
    }

    /// Append ` or <column>`.
    pub fn or(&mut self, column: &str) -> &mut Self {
        let fragment = format!(" or {column}");
        self.append("or", &fragment)
    }

    /// Append ` inner join <right> on <left>.<left_col>=<right>.<right_col>`,
    /// with both tables schema-qualified.
    pub fn inner_join(
        &mut self,
        right_table: &str,
        left_table: &str,
        left_column: &str,
        right_column: &str,
    ) -> &mut Self {
        let right = self.config.qualify(right_table);
        let left = self.config.qualify(left_table);
        let fragment = format!(" inner join {right} on {left}.{left_column}={right}.{right_column}");
        self.append("inner_join", &fragment)
    }
}
