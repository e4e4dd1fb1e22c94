// src/app.rs

use crate::core::analyzer::UploadError;
use crate::core::file_picker::{FilePicker, PickerAction};
use crate::core::models::{AnalysisResult, SelectedFile};
use crate::core::results_page::ResultsPage;
use crate::core::upload_form::{FormEvent, Submission, UploadForm};
use ratatui::widgets::ScrollbarState;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub enum AppState {
    /// Main screen: form, banner and results.
    Idle,
    /// The file browser popup has focus.
    Picking,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub form: UploadForm,
    pub page: ResultsPage,
    pub picker: Option<FilePicker>,
    pub start_dir: PathBuf,
    pub upload_url: String,
    pub scroll_offset: usize,
    pub report_scroll_state: ScrollbarState,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(start_dir: PathBuf, upload_url: String) -> Self {
        let (form, events) = UploadForm::mount();
        let mut app = Self {
            should_quit: false,
            state: AppState::Idle,
            form,
            page: ResultsPage::default(),
            picker: None,
            start_dir,
            upload_url,
            scroll_offset: 0,
            report_scroll_state: ScrollbarState::default(),
            spinner_frame: 0,
        };
        app.dispatch(events);
        app
    }

    pub fn open_picker(&mut self) {
        let dir = self
            .picker
            .as_ref()
            .map(|p| p.dir().to_path_buf())
            .unwrap_or_else(|| self.start_dir.clone());
        self.picker = Some(FilePicker::open(&dir));
        self.state = AppState::Picking;
    }

    /// `Enter` inside the browser.
    pub fn picker_activate(&mut self) {
        let Some(picker) = self.picker.as_mut() else { return };
        if let PickerAction::Picked(path) = picker.activate() {
            self.state = AppState::Idle;
            self.pick_path(&path);
        }
    }

    /// `Esc` inside the browser: the interaction ends without a file.
    pub fn picker_cancel(&mut self) {
        self.state = AppState::Idle;
        let events = self.form.select(None);
        self.dispatch(events);
    }

    pub fn pick_path(&mut self, path: &Path) {
        let events = match SelectedFile::load(path) {
            Ok(file) => self.form.select(Some(file)),
            Err(e) => {
                let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                self.form.select_failed(format!("Could not read {}: {}", name, e))
            }
        };
        self.dispatch(events);
    }

    pub fn remove_selection(&mut self) {
        let events = self.form.clear();
        self.dispatch(events);
    }

    /// Returns the file to upload when the submission started.
    pub fn submit(&mut self) -> Option<SelectedFile> {
        match self.form.submit() {
            Submission::Ignored => None,
            Submission::Rejected(event) => {
                self.dispatch([event]);
                None
            }
            Submission::Started(file) => {
                info!(file = %file.name, "Upload started.");
                self.spinner_frame = 0;
                Some(file)
            }
        }
    }

    pub fn on_upload_settled(&mut self, outcome: Result<AnalysisResult, UploadError>) {
        let event = self.form.settle(outcome);
        if matches!(event, FormEvent::UploadSucceeded(_)) {
            self.reset_scroll();
        }
        self.dispatch([event]);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.page.tick(now);
        if self.form.in_flight() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
    }

    fn dispatch(&mut self, events: impl IntoIterator<Item = FormEvent>) {
        self.page.apply_all(events, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::upload_form::NO_FILE_MESSAGE;
    use tempfile::TempDir;

    fn app_in(dir: &Path) -> App {
        App::new(dir.to_path_buf(), "http://localhost:5000/upload".into())
    }

    #[test]
    fn picking_a_file_from_disk_fills_the_form() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("page.html"), "<html lang=\"en\"></html>").unwrap();
        let mut app = app_in(tmp.path());

        app.open_picker();
        assert!(matches!(app.state, AppState::Picking));
        app.picker.as_mut().unwrap().select_next(); // skip ".."
        app.picker_activate();

        assert!(matches!(app.state, AppState::Idle));
        let file = app.form.selected().unwrap();
        assert_eq!(file.name, "page.html");
        assert_eq!(file.content, b"<html lang=\"en\"></html>");
    }

    #[test]
    fn unreadable_file_shows_error() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_in(tmp.path());

        app.pick_path(&tmp.path().join("gone.html"));

        assert!(app.form.selected().is_none());
        assert!(app.page.error().unwrap().starts_with("Could not read gone.html"));
    }

    #[test]
    fn submit_with_no_file_sets_banner_and_returns_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_in(tmp.path());

        assert!(app.submit().is_none());
        assert_eq!(app.page.error(), Some(NO_FILE_MESSAGE));
    }

    #[test]
    fn settled_result_resets_scroll() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("page.html"), "<html></html>").unwrap();
        let mut app = app_in(tmp.path());
        app.pick_path(&tmp.path().join("page.html"));
        assert!(app.submit().is_some());
        app.scroll_down();
        app.scroll_down();

        app.on_upload_settled(Ok(AnalysisResult { compliance_score: 88.0, issues: vec![] }));

        assert_eq!(app.scroll_offset, 0);
        assert!(app.page.result().is_some());
        assert!(!app.form.in_flight());
    }

    #[test]
    fn cancelling_the_picker_drops_the_shown_result() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("page.html"), "<html></html>").unwrap();
        let mut app = app_in(tmp.path());
        app.pick_path(&tmp.path().join("page.html"));
        app.submit();
        app.on_upload_settled(Ok(AnalysisResult { compliance_score: 88.0, issues: vec![] }));

        app.open_picker();
        app.picker_cancel();

        assert!(app.page.result().is_none());
        assert!(app.form.selected().is_some());
    }
}
