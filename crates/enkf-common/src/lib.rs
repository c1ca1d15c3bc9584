//! Shared utilities for the enkf crates
//!
//! Nothing in here knows about a particular kind of ensemble data. The
//! modules are the small pieces several configuration objects need:
//!
//! - [`collection`]: append-once concurrent map keyed by step
//! - [`logging`]: tracing subscriber setup and error cause-chain formatting
//! - [`path_fmt`]: path patterns expanded with an ensemble member index
//! - [`validation`]: the `Validatable` trait and its error type

pub mod collection;
pub mod logging;
pub mod path_fmt;
pub mod validation;

pub use collection::OnceMap;
pub use logging::{format_error, LogLevel, LogOptions};
pub use path_fmt::PathFormat;
pub use validation::{Validatable, ValidationError};
