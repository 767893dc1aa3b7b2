//! # sqlbuilder
//!
//! A fluent helper that assembles SQL command text and a parameter list from
//! chained method calls.
//!
//! ## Features
//!
//! - **Plain concatenation**: each operation appends (or, for `select`, prepends) one fragment
//! - **Named placeholders**: `select_params` renders `@name` tokens and binds their values
//! - **One quoting rule**: integers bare, everything else single-quoted (see [`format_literal`])
//! - **Configurable schema prefix**: `dbo` by default
//! - **Driver-ready parameters**: values implement `tokio_postgres::types::ToSql`
//!
//! No SQL is parsed or validated, and string literals are not escaped.
//!
//! ## Example
//!
//! ```ignore
//! use sqlbuilder::{ParameterBinding, SqlBuilder};
//!
//! let mut b = SqlBuilder::new();
//! b.select(["id", "name"])
//!     .from(["customers"])
//!     .inner_join("orders", "customers", "id", "customer_id")
//!     .where_("status")
//!     .in_list(["open", "pending"]);
//!
//! let command = b.finish();
//! assert_eq!(
//!     command.command_text(),
//!     "select id,name from dbo.customers inner join dbo.orders \
//!      on dbo.customers.id=dbo.orders.customer_id where status in ('open','pending')"
//! );
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod error;
pub mod param;
pub mod prelude;
pub mod value;

#[cfg(feature = "tracing")]
pub mod trace;

pub use builder::SqlBuilder;
pub use command::Command;
pub use config::{BuilderConfig, DEFAULT_SCHEMA};
pub use error::{BuilderError, BuilderResult};
pub use param::{
    FormattedParameters, NativeParameter, ParameterBinding, ParameterFormatter, PLACEHOLDER_PREFIX,
    format_parameters,
};
pub use value::{Value, format_literal};

#[cfg(feature = "tracing")]
pub use trace::TracingSqlLog;
