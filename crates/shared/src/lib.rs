//! # Shared
//! The shared components between the snapshot binaries.
//!

#![warn(missing_docs)]

mod failure;
mod logger;

pub use failure::{Failure, log_and_panic};
pub use logger::{LogGuards, LoggerError, init_logger};
