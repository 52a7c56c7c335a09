//! Configuration sources for nestconf
//!
//! A source produces a mapping of configuration values from some origin:
//! memory, a file, or anything implementing [`Source`]. File-backed
//! sources split reading from parsing so formats plug in as
//! [`ContentParser`] implementations.

pub mod error;
pub mod file;
pub mod map;
pub mod source;

pub use error::{Error, Result};
pub use file::{ContentParser, FileSource};
pub use map::MapSource;
pub use source::Source;
