//! Character cursor and the primitive readers built on it.
//!
//! Every reader advances one shared [`Cursor`] through `&mut self`; none of
//! them keeps a reference to it once it returns.

/// Cursor over a decoded character sequence.
pub mod core;
/// Tag-name and attribute readers.
pub mod readers;

pub use self::core::Cursor;
