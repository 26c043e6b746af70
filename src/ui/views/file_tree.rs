//! File tree panel
//!
//! Every tracked path at HEAD as a collapsible tree, directories first.
//! Opening a file enters single-file mode for it.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::keys;
use crate::ui::{components, navigation, symbols, theme};

/// Action returned by FileTreeView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeAction {
    /// No action needed
    None,
    /// Open this file in single-file mode
    Open(String),
}

/// One row of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Last path component
    pub name: String,
    /// Full repository-relative path
    pub path: String,
    pub depth: usize,
    pub is_dir: bool,
}

#[derive(Debug, Default)]
struct Directory {
    dirs: BTreeMap<String, Directory>,
    files: BTreeSet<String>,
}

/// Build tree-walk ordered nodes from flat paths: at each level directories
/// come before files, each group sorted by name.
pub fn build_tree_nodes(paths: &[String]) -> Vec<TreeNode> {
    let mut root = Directory::default();
    for path in paths {
        let mut parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        let Some(file) = parts.pop() else {
            continue;
        };
        let mut dir = &mut root;
        for part in parts {
            dir = dir.dirs.entry(part.to_string()).or_default();
        }
        dir.files.insert(file.to_string());
    }

    let mut nodes = Vec::new();
    walk(&root, "", 0, &mut nodes);
    nodes
}

fn walk(dir: &Directory, prefix: &str, depth: usize, nodes: &mut Vec<TreeNode>) {
    let join = |name: &str| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        }
    };

    for (name, child) in &dir.dirs {
        let path = join(name);
        nodes.push(TreeNode {
            name: name.clone(),
            path: path.clone(),
            depth,
            is_dir: true,
        });
        walk(child, &path, depth + 1, nodes);
    }
    for name in &dir.files {
        nodes.push(TreeNode {
            name: name.clone(),
            path: join(name),
            depth,
            is_dir: false,
        });
    }
}

/// Parent directory of a path (`None` at the top level)
fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}

/// File tree panel state
#[derive(Debug, Default)]
pub struct FileTreeView {
    nodes: Vec<TreeNode>,
    expanded: HashSet<String>,
    /// Selected index into the visible rows
    selected: usize,
    scroll_offset: usize,
    /// Shown instead of the tree (loading, error)
    message: Option<String>,
}

impl FileTreeView {
    /// Build the tree; top-level directories start expanded
    pub fn set_files(&mut self, paths: &[String]) {
        self.nodes = build_tree_nodes(paths);
        self.expanded = self
            .nodes
            .iter()
            .filter(|n| n.is_dir && n.depth == 0)
            .map(|n| n.path.clone())
            .collect();
        self.selected = 0;
        self.scroll_offset = 0;
        self.message = None;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.nodes.clear();
        self.selected = 0;
        self.message = Some(message.into());
    }

    fn is_visible(&self, node: &TreeNode) -> bool {
        let mut path = node.path.as_str();
        while let Some(parent) = parent_of(path) {
            if !self.expanded.contains(parent) {
                return false;
            }
            path = parent;
        }
        true
    }

    /// Rows currently shown
    pub fn visible(&self) -> Vec<&TreeNode> {
        self.nodes.iter().filter(|n| self.is_visible(n)).collect()
    }

    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.visible().get(self.selected).copied()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    fn select_path(&mut self, path: &str) {
        self.selected = self
            .visible()
            .iter()
            .position(|n| n.path == path)
            .unwrap_or(0);
    }

    fn toggle(&mut self, path: String) {
        if !self.expanded.remove(&path) {
            self.expanded.insert(path.clone());
        }
        self.select_path(&path);
    }

    /// Collapse the selected directory, or the parent of the selection
    fn collapse_selected(&mut self) {
        let Some(node) = self.selected_node() else {
            return;
        };
        let path = node.path.clone();
        if node.is_dir && self.expanded.contains(&path) {
            self.expanded.remove(&path);
            self.select_path(&path);
        } else if let Some(parent) = parent_of(&path) {
            let parent = parent.to_string();
            self.expanded.remove(&parent);
            self.select_path(&parent);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> TreeAction {
        match key.code {
            code if keys::is_move_down(code) => {
                let max = self.visible().len().saturating_sub(1);
                self.selected = navigation::select_next(self.selected, max);
            }
            code if keys::is_move_up(code) => {
                self.selected = navigation::select_prev(self.selected);
            }
            keys::GO_TOP => self.selected = 0,
            keys::GO_BOTTOM => self.selected = self.visible().len().saturating_sub(1),
            keys::COLLAPSE => self.collapse_selected(),
            code if keys::is_open(code) || code == keys::EXPAND => {
                let Some(node) = self.selected_node() else {
                    return TreeAction::None;
                };
                let (path, is_dir) = (node.path.clone(), node.is_dir);
                if is_dir {
                    self.toggle(path);
                } else if keys::is_open(code) {
                    return TreeAction::Open(path);
                }
            }
            _ => {}
        }
        TreeAction::None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = components::panel_block(1, Line::from(" Tree "), focused);

        if let Some(message) = &self.message {
            frame.render_widget(components::empty_state(message).block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        self.scroll_offset =
            navigation::adjust_scroll(self.selected, self.scroll_offset, inner_height);

        let lines: Vec<Line> = self
            .visible()
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_height)
            .map(|(i, node)| self.build_row(node, i == self.selected))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn build_row(&self, node: &TreeNode, is_selected: bool) -> Line<'static> {
        let icon = if !node.is_dir {
            symbols::tree::FILE
        } else if self.expanded.contains(&node.path) {
            symbols::tree::EXPANDED
        } else {
            symbols::tree::COLLAPSED
        };
        let label = format!("{}{}{}", symbols::tree::INDENT.repeat(node.depth), icon, node.name);

        if is_selected {
            Line::from(label).style(
                Style::default()
                    .fg(theme::commit_list::SELECTED_FG)
                    .bg(theme::commit_list::SELECTED_BG)
                    .add_modifier(Modifier::BOLD),
            )
        } else if node.is_dir {
            Line::from(label).style(
                Style::default()
                    .fg(theme::file_tree::DIRECTORY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Line::from(label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn paths() -> Vec<String> {
        ["src/ui/view.rs", "README.md", "src/main.rs", "Cargo.toml", "docs/a.md"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn tree() -> FileTreeView {
        let mut tree = FileTreeView::default();
        tree.set_files(&paths());
        tree
    }

    fn visible_paths(tree: &FileTreeView) -> Vec<&str> {
        tree.visible().iter().map(|n| n.path.as_str()).collect()
    }

    #[test]
    fn directories_come_first_at_each_level() {
        let order: Vec<String> = build_tree_nodes(&paths())
            .into_iter()
            .map(|n| n.path)
            .collect();
        assert_eq!(
            order,
            vec![
                "docs",
                "docs/a.md",
                "src",
                "src/ui",
                "src/ui/view.rs",
                "src/main.rs",
                "Cargo.toml",
                "README.md",
            ]
        );
    }

    #[test]
    fn top_level_directories_start_expanded() {
        let t = tree();
        assert_eq!(
            visible_paths(&t),
            vec!["docs", "docs/a.md", "src", "src/ui", "src/main.rs", "Cargo.toml", "README.md"]
        );
    }

    #[test]
    fn enter_on_directory_toggles_and_on_file_opens() {
        let mut t = tree();
        // docs
        assert_eq!(t.handle_key(key(KeyCode::Enter)), TreeAction::None);
        assert!(!t.is_expanded("docs"));
        assert_eq!(t.selected_node().map(|n| n.path.as_str()), Some("docs"));

        t.handle_key(key(KeyCode::Char('G')));
        assert_eq!(
            t.handle_key(key(KeyCode::Enter)),
            TreeAction::Open("README.md".into())
        );
    }

    #[test]
    fn h_on_file_collapses_parent_and_selects_it() {
        let mut t = tree();
        t.handle_key(key(KeyCode::Char('j')));
        assert_eq!(t.selected_node().map(|n| n.path.as_str()), Some("docs/a.md"));
        t.handle_key(key(KeyCode::Char('h')));
        assert!(!t.is_expanded("docs"));
        assert_eq!(t.selected_node().map(|n| n.path.as_str()), Some("docs"));
    }

    #[test]
    fn l_expands_nested_directory() {
        let mut t = tree();
        t.handle_key(key(KeyCode::Char('j')));
        t.handle_key(key(KeyCode::Char('j')));
        t.handle_key(key(KeyCode::Char('j')));
        assert_eq!(t.selected_node().map(|n| n.path.as_str()), Some("src/ui"));
        t.handle_key(key(KeyCode::Char('l')));
        assert!(visible_paths(&t).contains(&"src/ui/view.rs"));
    }
}
