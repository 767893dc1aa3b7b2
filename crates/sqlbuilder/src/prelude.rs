//! Convenient imports for typical `sqlbuilder` usage.
//!
//! ```ignore
//! use sqlbuilder::prelude::*;
//! ```

pub use crate::{
    BuilderConfig, BuilderError, BuilderResult, Command, NativeParameter, ParameterBinding,
    SqlBuilder, Value,
};

#[cfg(feature = "tracing")]
pub use crate::TracingSqlLog;
