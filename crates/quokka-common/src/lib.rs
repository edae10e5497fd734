//! Common utilities for the Quokka layout engine.
//!
//! This crate provides shared infrastructure used by all layout components:
//! - **Warning System** - deduplicated reports for unsupported input

pub mod warning;
