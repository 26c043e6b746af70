//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct, sources and panel synchronization
//! - `navigation`: cursor operations
//! - `loader`: background loads
//! - `apply`: applying load results
//! - `input`: Key event handling
//! - `render`: UI rendering

mod apply;
mod input;
pub mod loader;
mod navigation;
mod render;
mod state;


pub use apply::{NO_CHANGES, NO_COMMITS_FOUND, NO_FILES_CHANGED};
pub use loader::{ContentKey, LoadRequest, LoadResult, Loader, SourceTag};
pub use state::{App, Focus};
