//! Common utilities for the sprig parser.
//!
//! This crate provides shared infrastructure used by the other sprig crates:
//! - **Warning System** - deduplicated, colored stderr reports for input the
//!   parser had to degrade around

pub mod warning;
