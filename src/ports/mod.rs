//! Port traits defining external boundaries.
//!
//! The rewriter touches file contents only through these traits.
//! Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::{FileSystem, FsError};
