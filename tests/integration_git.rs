//! git integration tests.
//!
//! Runs [`GitExecutor`] against real temporary repositories.

#[path = "common/mod.rs"]
mod common;

use std::sync::Arc;

use common::TestRepo;
use revscope::annotate::{annotate, strip_ansi};
use revscope::app::{App, Loader};
use revscope::config::Config;
use revscope::git::{GitError, GitExecutor, HistoryProvider};
use revscope::model::{DisplayMode, FileStatus, Position, Revision, SourceKind};

/// Three commits touching `notes.txt`, one touching `other.txt`
fn repo_with_history() -> (TestRepo, Vec<String>) {
    let repo = TestRepo::new();
    let first = repo.commit_file("notes.txt", "alpha\nbeta\n", "Add notes");
    let second = repo.commit_file("other.txt", "unrelated\n", "Add other");
    let third = repo.commit_file("notes.txt", "alpha\nbeta\nTODO gamma\n", "Add gamma");
    let fourth = repo.commit_file("notes.txt", "alpha\nbeta changed\nTODO gamma\n", "Tweak beta");
    (repo, vec![fourth, third, second, first])
}

fn commit(hash: &str) -> Revision {
    Revision::Commit(hash.to_string())
}

#[test]
fn test_open_outside_repository_fails() {
    skip_if_no_git!();
    let dir = tempfile::tempdir().unwrap();
    let result = GitExecutor::open(dir.path());
    assert!(matches!(result, Err(GitError::NotARepository)));
}

#[test]
fn test_open_from_subdirectory_finds_root() {
    skip_if_no_git!();
    let (repo, _) = repo_with_history();
    repo.write_file("nested/dir/file.txt", "x\n");
    let git = GitExecutor::open(repo.path().join("nested/dir")).unwrap();
    assert_eq!(
        git.root().canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}

#[test]
fn test_recent_commits_newest_first_with_limit() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    let commits = git.recent_commits(2).unwrap();
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].hash, hashes[0]);
    assert_eq!(commits[0].message, "Tweak beta");
    assert_eq!(commits[1].hash, hashes[1]);
}

#[test]
fn test_unborn_branch_has_no_commits() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    let git = GitExecutor::open(repo.path()).unwrap();
    assert!(git.recent_commits(10).unwrap().is_empty());
}

#[test]
fn test_file_commits_only_touching_path() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    let commits = git.file_commits("notes.txt").unwrap();
    let found: Vec<&str> = commits.iter().map(|c| c.hash.as_str()).collect();
    assert_eq!(found, vec![hashes[0].as_str(), hashes[1].as_str(), hashes[3].as_str()]);
}

#[test]
fn test_search_commits_finds_added_term() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    let commits = git.search_commits("notes.txt", "TODO").unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].hash, hashes[1]);
    assert!(git.search_commits("notes.txt", "absent").unwrap().is_empty());
}

#[test]
fn test_reflog_entries_for_path() {
    skip_if_no_git!();
    let (repo, _) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    let entries = git.reflog_entries("notes.txt", 10).unwrap();
    assert!(!entries.is_empty());
    assert!(entries[0].message.starts_with("HEAD@{0}"));
}

#[test]
fn test_diff_at_commit_annotates_hunk() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    let raw = git.diff_at("notes.txt", &commit(&hashes[0]), 3).unwrap();
    assert!(raw.contains('\x1b'), "diff keeps color escapes");

    let payload = annotate(&raw, false);
    assert_eq!(payload.hunk_offsets, vec![0]);
    let plain = strip_ansi(&payload.text);
    assert!(plain.contains("-beta"));
    assert!(plain.contains("+beta changed"));

    let with_header = annotate(&raw, true);
    assert!(strip_ansi(&with_header.text).contains("Tweak beta"));
    assert!(with_header.hunk_offsets[0] > 0);
}

#[test]
fn test_diff_at_working_copy() {
    skip_if_no_git!();
    let (repo, _) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    assert!(git.diff_at("notes.txt", &Revision::WorkingCopy, 3).unwrap().is_empty());

    repo.write_file("notes.txt", "alpha\n");
    let raw = git.diff_at("notes.txt", &Revision::WorkingCopy, 3).unwrap();
    assert!(strip_ansi(&raw).contains("-TODO gamma"));
}

#[test]
fn test_untracked_file_diffs_as_added() {
    skip_if_no_git!();
    let (repo, _) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    repo.write_file("fresh.txt", "brand new\n");
    let raw = git.diff_at("fresh.txt", &Revision::WorkingCopy, 3).unwrap();
    assert!(strip_ansi(&raw).contains("+brand new"));
}

#[test]
fn test_full_file_is_numbered() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    let content = git.full_file_at("notes.txt", &commit(&hashes[3])).unwrap();
    assert_eq!(content, "     1\talpha\n     2\tbeta\n");
}

#[test]
fn test_full_file_of_deleted_path_reads_parent() {
    skip_if_no_git!();
    let (repo, _) = repo_with_history();
    repo.git(&["rm", "--quiet", "other.txt"]);
    repo.git(&["commit", "--quiet", "-m", "Remove other"]);
    let removed = repo.head();
    let git = GitExecutor::open(repo.path()).unwrap();

    let content = git.full_file_at("other.txt", &commit(&removed)).unwrap();
    assert_eq!(content, "     1\tunrelated\n");
}

#[test]
fn test_full_file_deleted_in_merge_is_ambiguous() {
    skip_if_no_git!();
    let (repo, _) = repo_with_history();
    repo.git(&["checkout", "--quiet", "-b", "side"]);
    repo.commit_file("side.txt", "side\n", "Add side");
    repo.git(&["checkout", "--quiet", "main"]);
    repo.commit_file("notes.txt", "alpha\n", "Trim notes");
    repo.git(&["merge", "--quiet", "--no-ff", "--no-commit", "side"]);
    repo.git(&["rm", "--quiet", "other.txt"]);
    repo.git(&["commit", "--quiet", "-m", "Merge side"]);
    let merge = repo.head();
    let git = GitExecutor::open(repo.path()).unwrap();

    let result = git.full_file_at("other.txt", &commit(&merge));
    let Err(GitError::AbsentInMerge { path, parents, .. }) = &result else {
        panic!("expected AbsentInMerge, got {result:?}");
    };
    assert_eq!(path, "other.txt");
    assert_eq!(*parents, 2);
}

#[test]
fn test_full_file_missing_at_root_commit_fails() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    let root = repo.commit_file("a.txt", "a\n", "Root");
    let git = GitExecutor::open(repo.path()).unwrap();

    let result = git.full_file_at("missing.txt", &commit(&root));
    assert!(matches!(result, Err(GitError::CommandFailed { .. })), "{result:?}");
}

#[test]
fn test_blame_mentions_commits() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    let blame = git.blame_at("notes.txt", &commit(&hashes[0])).unwrap();
    assert_eq!(blame.lines().count(), 3);
    assert!(blame.contains("Test User"));
    assert!(blame.contains("TODO gamma"));
}

#[test]
fn test_files_and_stats_of_commit() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    let files = git.files_changed_in(&commit(&hashes[2])).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "other.txt");
    assert_eq!(files[0].status, FileStatus::Added);

    let stats = git.stats_for(&commit(&hashes[0])).unwrap();
    let notes = stats.get("notes.txt").unwrap();
    assert_eq!((notes.additions, notes.deletions), (1, 1));
}

#[test]
fn test_root_commit_lists_its_files() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    let files = git.files_changed_in(&commit(&hashes[3])).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "notes.txt");
}

#[test]
fn test_working_copy_files() {
    skip_if_no_git!();
    let (repo, _) = repo_with_history();
    let git = GitExecutor::open(repo.path()).unwrap();

    repo.write_file("notes.txt", "rewritten\n");
    repo.write_file("scratch.txt", "tmp\n");
    let files = git.files_changed_in(&Revision::WorkingCopy).unwrap();
    let summary: Vec<(&str, &str)> = files
        .iter()
        .map(|f| (f.path.as_str(), f.status.code()))
        .collect();
    assert!(summary.contains(&("notes.txt", "M")));
    assert!(summary.contains(&("scratch.txt", "??")));
}

#[test]
fn test_tree_files_lists_head() {
    skip_if_no_git!();
    let (repo, _) = repo_with_history();
    repo.commit_file("src/deep/mod.rs", "// mod\n", "Add module");
    let git = GitExecutor::open(repo.path()).unwrap();

    let files = git.tree_files("HEAD").unwrap();
    assert_eq!(files, vec!["notes.txt", "other.txt", "src/deep/mod.rs"]);
}

// =============================================================================
// Application against a real repository
// =============================================================================

fn app_for(repo: &TestRepo) -> App {
    let git = GitExecutor::open(repo.path()).unwrap();
    let mut config = Config::default();
    config.history.working_copy = false;
    let mut app = App::with_loader(Loader::deferred(Arc::new(git)), config);
    app.drain_results();
    app
}

#[test]
fn test_app_browses_and_follows_a_file() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let mut app = app_for(&repo);

    assert_eq!(app.repo().len(), 4);
    assert_eq!(app.cursor.selected_path, "notes.txt");
    assert!(app.diff_view.plain_text().contains("+beta changed"));

    app.enter_single_file_mode("notes.txt");
    app.drain_results();
    assert_eq!(app.file_history().len(), 3);

    app.step_older();
    app.drain_results();
    assert_eq!(app.current_source().position(), Position::Commit(1));
    assert!(app.diff_view.plain_text().contains("+TODO gamma"));
    assert_eq!(app.shown_revision(), Some(commit(&hashes[1])));

    app.set_display_mode(DisplayMode::FullFile);
    app.drain_results();
    assert_eq!(
        app.diff_view.plain_text(),
        "     1\talpha\n     2\tbeta\n     3\tTODO gamma\n"
    );
}

#[test]
fn test_app_pickaxe_search() {
    skip_if_no_git!();
    let (repo, hashes) = repo_with_history();
    let mut app = app_for(&repo);
    app.enter_single_file_mode("notes.txt");
    app.drain_results();

    app.activate_source(SourceKind::Pickaxe, Some("TODO"));
    app.drain_results();
    assert_eq!(app.current_source().len(), 1);
    assert_eq!(app.shown_revision(), Some(commit(&hashes[1])));

    app.activate_source(SourceKind::Pickaxe, Some("nowhere"));
    app.drain_results();
    assert_eq!(app.cursor.source_kind(), SourceKind::Default);
    assert_eq!(
        app.diff_view.plain_text(),
        "No commits found for \"nowhere\""
    );
}
