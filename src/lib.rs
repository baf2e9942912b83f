//! Whole-file text transformations behind a four-command CLI.
//!
//! The binary resolves its first argument into an [`OperationKind`] with
//! [`CommandLineConfig::from_args`] and hands the remaining arguments to
//! [`executor::execute`]. Every check runs before the first read, and the only
//! write happens after the new contents are fully built in memory.

pub mod command;
pub mod errors;
pub mod executor;
pub mod logging;
pub mod transform;
pub mod validate;

pub use crate::command::{CommandLineConfig, OperationKind};
pub use crate::errors::{FileManipError, Result};
pub use crate::executor::{Outcome, execute};
