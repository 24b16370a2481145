//! Shared helpers for the packaging pipeline.

pub mod escape;
pub mod fs;
