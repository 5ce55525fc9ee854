//! Core types and error handling for relgate.
//!
//! This module hosts the error taxonomy shared by every pipeline stage.
//! The taxonomy is deliberately small: absence of an asset source is not an
//! error at all, subprocess failures carry the underlying tool's exit code
//! so the pipeline can exit with it, and the coverage gate has its own
//! distinct failure that cites threshold versus measured value.

pub mod error;

pub use error::{ErrorContext, RelgateError, user_friendly_error};
