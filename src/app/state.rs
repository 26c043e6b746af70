//! Application state

use std::sync::Arc;

use log::debug;
use tui_textarea::TextArea;

use super::loader::{ContentKey, LoadRequest, Loader, SourceTag};
use crate::config::Config;
use crate::git::HistoryProvider;
use crate::model::{ActiveSource, CommitSource, Cursor, Position, Revision};
use crate::ui::views::{CommitListView, DiffHeader, DiffView, FileListView, FileTreeView};

/// Panel receiving keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Commit list, or the file tree while it is open
    #[default]
    CommitList,
    Files,
    Diff,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: Config,
    /// Which source, display mode and path the content comes from
    pub cursor: Cursor,
    /// Repository-wide history (browsing mode)
    pub(crate) repo: CommitSource,
    /// History of the selected path (single-file mode)
    pub(crate) file_history: CommitSource,
    pub focus: Focus,
    /// File tree replaces the commit and file lists
    pub show_tree: bool,
    pub show_help: bool,
    pub commit_list: CommitListView,
    pub file_list: FileListView,
    pub diff_view: DiffView,
    pub file_tree: FileTreeView,
    /// Pickaxe term being typed
    pub(crate) search_input: Option<TextArea<'static>>,
    /// Error message to display
    pub error_message: Option<String>,
    pub(crate) loader: Loader,
}

impl App {
    /// Create the app, loading in background threads
    pub fn new(provider: Arc<dyn HistoryProvider>, config: Config) -> Self {
        Self::with_loader(Loader::background(provider), config)
    }

    /// Create the app with an explicit loader and request the repository history
    pub fn with_loader(loader: Loader, config: Config) -> Self {
        let working_copy = config.history.working_copy;
        let mut app = Self {
            running: true,
            cursor: Cursor::default(),
            repo: CommitSource::loading(working_copy),
            file_history: CommitSource::new(working_copy),
            focus: Focus::default(),
            show_tree: false,
            show_help: false,
            commit_list: CommitListView::default(),
            file_list: FileListView::default(),
            diff_view: DiffView::new(config.diff.show_description),
            file_tree: FileTreeView::default(),
            search_input: None,
            error_message: None,
            loader,
            config,
        };

        let limit = app.config.history.commit_limit;
        app.loader.dispatch(LoadRequest::RepoCommits { limit });
        app.sync_panels();
        app
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    // =========================================================================
    // Sources
    // =========================================================================

    /// The source the cursor points into
    pub fn current_source(&self) -> &CommitSource {
        match &self.cursor.active {
            ActiveSource::Reflog(source) | ActiveSource::Pickaxe { source, .. } => source,
            ActiveSource::Default if self.cursor.single_file => &self.file_history,
            ActiveSource::Default => &self.repo,
        }
    }

    /// Whether the cursor addresses an entry of the current source. Only the
    /// default sources may sit on an empty list, having nothing to revert to.
    pub fn position_in_bounds(&self) -> bool {
        let source = self.current_source();
        match self.cursor.active {
            ActiveSource::Default => source.position_in_bounds() || source.is_empty(),
            _ => source.position_in_bounds(),
        }
    }

    pub(crate) fn current_source_mut(&mut self) -> &mut CommitSource {
        match &mut self.cursor.active {
            ActiveSource::Reflog(source) | ActiveSource::Pickaxe { source, .. } => source,
            ActiveSource::Default if self.cursor.single_file => &mut self.file_history,
            ActiveSource::Default => &mut self.repo,
        }
    }

    /// Repository-wide source
    pub fn repo(&self) -> &CommitSource {
        &self.repo
    }

    /// File-scoped source
    pub fn file_history(&self) -> &CommitSource {
        &self.file_history
    }

    fn source_tag(&self) -> SourceTag {
        match &self.cursor.active {
            ActiveSource::Default => SourceTag::Default,
            ActiveSource::Reflog(_) => SourceTag::Reflog,
            ActiveSource::Pickaxe { term, .. } => SourceTag::Pickaxe(term.clone()),
        }
    }

    /// Key of the content the cursor wants now; None when there is nothing
    /// to load (no path, empty source, or a source still loading)
    pub(crate) fn content_key(&self) -> Option<ContentKey> {
        if self.cursor.selected_path.is_empty() {
            return None;
        }
        let source = self.current_source();
        if source.is_loading() {
            return None;
        }
        Some(ContentKey {
            single_file: self.cursor.single_file,
            source: self.source_tag(),
            position: source.position(),
            mode: self.cursor.effective_mode(),
            path: self.cursor.selected_path.clone(),
            revision: source.revision()?,
        })
    }

    /// Request the content for the current cursor
    pub(crate) fn reload_content(&mut self) {
        match self.content_key() {
            Some(key) => {
                let context_lines = if key.mode == crate::model::DisplayMode::Context {
                    self.config.diff.expanded_context_lines
                } else {
                    self.config.diff.context_lines
                };
                self.loader.dispatch(LoadRequest::Content { key, context_lines });
            }
            None => debug!("Nothing to load for {:?}", self.cursor),
        }
    }

    /// Request the file list for the repository position
    pub(crate) fn reload_files(&mut self) {
        let Some(revision) = self.repo.revision() else {
            return;
        };
        self.loader.dispatch(LoadRequest::Files {
            position: self.repo.position(),
            revision,
        });
    }

    // =========================================================================
    // Panel synchronization
    // =========================================================================

    /// Derive every panel header from the single active (source, position)
    pub(crate) fn sync_panels(&mut self) {
        let title = match &self.cursor.active {
            ActiveSource::Default if self.cursor.single_file => "History".to_string(),
            ActiveSource::Default => "Commits".to_string(),
            ActiveSource::Reflog(_) => "Reflog".to_string(),
            ActiveSource::Pickaxe { term, .. } => format!("S:\"{term}\""),
        };
        let source = match &self.cursor.active {
            ActiveSource::Reflog(source) | ActiveSource::Pickaxe { source, .. } => source,
            ActiveSource::Default if self.cursor.single_file => &self.file_history,
            ActiveSource::Default => &self.repo,
        };
        self.commit_list.show_source(title, source);

        let revision = source.revision();
        let label = self.revision_label(source);
        let header = self.diff_header(source);
        self.file_list.set_revision(revision, label);
        self.diff_view.header = header;
    }

    /// Sidebar label: `abc1234` while browsing, prefixed in single-file mode
    fn revision_label(&self, source: &CommitSource) -> String {
        let hash = match source.position() {
            Position::WorkingCopy => crate::ui::symbols::labels::WORKING_COPY.to_string(),
            Position::Commit(_) => match source.current() {
                Some(commit) => commit.hash.clone(),
                None => return String::new(),
            },
        };
        if !self.cursor.single_file {
            return hash;
        }
        match &self.cursor.active {
            ActiveSource::Default => format!("FILE: {hash}"),
            ActiveSource::Reflog(_) => format!("REFLOG: {hash}"),
            ActiveSource::Pickaxe { term, .. } => format!("S:\"{term}\": {hash}"),
        }
    }

    fn diff_header(&self, source: &CommitSource) -> DiffHeader {
        let location = match (source.position(), source.current()) {
            (Position::WorkingCopy, _) if source.supports_working_copy() => {
                crate::ui::symbols::labels::WORKING_COPY.to_string()
            }
            (Position::Commit(index), Some(commit)) => {
                format!("{}/{}: {}", index + 1, source.len(), commit.hash)
            }
            _ => String::new(),
        };
        DiffHeader {
            path: self.cursor.selected_path.clone(),
            location,
            mode: self.cursor.single_file.then_some(self.cursor.display_mode),
            indicator: self.cursor.active.indicator(),
        }
    }

    /// Revision every panel should agree on
    pub fn shown_revision(&self) -> Option<Revision> {
        self.current_source().revision()
    }
}
