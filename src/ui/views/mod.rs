//! Panels of the main screen

mod commit_list;
mod diff;
mod file_list;
mod file_tree;

pub use commit_list::CommitListView;
pub use diff::{DiffHeader, DiffView};
pub use file_list::{FileListAction, FileListView};
pub use file_tree::{FileTreeView, TreeAction, TreeNode, build_tree_nodes};
