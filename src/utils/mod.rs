//! Cross-cutting utilities.
//!
//! Currently limited to filesystem helpers; anything here must stay free of
//! pipeline-specific knowledge.

pub mod fs;
