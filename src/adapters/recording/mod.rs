//! Recording adapters that capture port interactions in memory.

pub mod filesystem;

pub use filesystem::{FsCall, RecordingFileSystem};
