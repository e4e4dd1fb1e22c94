// src/core/file_picker.rs

use crate::core::models::is_html_name;
use ratatui::widgets::ListState;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Parent,
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// What an `Enter` in the browser led to.
#[derive(Debug, PartialEq, Eq)]
pub enum PickerAction {
    /// Still browsing (moved into a directory or nothing to act on).
    Browsing,
    Picked(PathBuf),
}

/// An in-terminal file chooser restricted to HTML files.
#[derive(Debug)]
pub struct FilePicker {
    dir: PathBuf,
    entries: Vec<Entry>,
    pub list_state: ListState,
    error: Option<String>,
}

impl FilePicker {
    pub fn open(dir: &Path) -> Self {
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let mut picker = Self { dir, entries: Vec::new(), list_state: ListState::default(), error: None };
        picker.refresh();
        picker
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1).min(self.entries.len() - 1));
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    pub fn activate(&mut self) -> PickerAction {
        let Some(entry) = self.list_state.selected().and_then(|i| self.entries.get(i)).cloned() else {
            return PickerAction::Browsing;
        };
        match entry.kind {
            EntryKind::File => PickerAction::Picked(entry.path),
            EntryKind::Parent | EntryKind::Directory => {
                self.change_dir(entry.path);
                PickerAction::Browsing
            }
        }
    }

    pub fn go_up(&mut self) {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            self.change_dir(parent);
        }
    }

    fn change_dir(&mut self, dir: PathBuf) {
        debug!(dir = %dir.display(), "File browser changed directory.");
        self.dir = dir;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.entries.clear();
        self.error = None;

        if let Some(parent) = self.dir.parent() {
            self.entries.push(Entry { name: "..".to_string(), path: parent.to_path_buf(), kind: EntryKind::Parent });
        }

        match read_html_entries(&self.dir) {
            Ok(entries) => self.entries.extend(entries),
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "Could not read directory.");
                self.error = Some(format!("Cannot read {}: {}", self.dir.display(), e));
            }
        }

        self.list_state = ListState::default();
        if !self.entries.is_empty() {
            self.list_state.select(Some(0));
        }
    }
}

/// Lists sub-directories first, then HTML files, each sorted by name.
/// Hidden entries are skipped.
fn read_html_entries(dir: &Path) -> std::io::Result<Vec<Entry>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for dir_entry in std::fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = dir_entry.path();
        if path.is_dir() {
            dirs.push(Entry { name, path, kind: EntryKind::Directory });
        } else if is_html_name(&name) {
            files.push(Entry { name, path, kind: EntryKind::File });
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.extend(files);
    Ok(dirs)
}
