//! Data models for revscope

mod commit;
mod cursor;
mod file_entry;
mod revision;
mod source;

pub use commit::Commit;
pub use cursor::{Cursor, DisplayMode};
pub use file_entry::{FileEntry, FileStats, FileStatus};
pub use revision::Revision;
pub use source::{ActiveSource, CommitSource, Position, SourceKind};
