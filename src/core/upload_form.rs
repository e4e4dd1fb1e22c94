// src/core/upload_form.rs

//! State of the upload form: the pending file and the in-flight guard.
//!
//! The form never talks to the page directly. Every operation returns the
//! [`FormEvent`]s it produced, in order, and the caller forwards them to the
//! page reducer.

use crate::core::analyzer::UploadError;
use crate::core::models::{AnalysisResult, SelectedFile};
use tracing::{debug, info, warn};

pub const NO_FILE_MESSAGE: &str = "Please select a file before uploading.";

/// What the form reports outward.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Any visible error should go away.
    ErrorCleared,
    /// The selection is empty or being replaced; any shown result is stale.
    SelectionCleared,
    ValidationFailed(String),
    UploadFailed(String),
    UploadSucceeded(AnalysisResult),
}

/// Result of pressing submit.
#[derive(Debug)]
pub enum Submission {
    /// A request is already running; the control is inert.
    Ignored,
    Rejected(FormEvent),
    /// The caller must upload this file and later call [`UploadForm::settle`].
    Started(SelectedFile),
}

#[derive(Debug, Default)]
pub struct UploadForm {
    selected: Option<SelectedFile>,
    in_flight: bool,
}

impl UploadForm {
    /// Creates the form with no selection and reports that emptiness.
    pub fn mount() -> (Self, Vec<FormEvent>) {
        let mut form = Self::default();
        let events = form.set_selection(None).into_iter().collect();
        (form, events)
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.selected.is_some()
    }

    /// The user closed the file browser. `picked` is `None` when nothing was chosen.
    pub fn select(&mut self, picked: Option<SelectedFile>) -> Vec<FormEvent> {
        let mut events = vec![FormEvent::ErrorCleared, FormEvent::SelectionCleared];
        if let Some(file) = picked {
            info!(file = %file.name, size = file.content.len(), "File selected.");
            events.extend(self.set_selection(Some(file)));
        } else {
            debug!("File browser closed without a selection.");
        }
        events
    }

    /// The chosen file could not be read; the selection stays as it was.
    pub fn select_failed(&self, message: String) -> Vec<FormEvent> {
        warn!(message = %message, "File selection failed.");
        vec![
            FormEvent::ErrorCleared,
            FormEvent::SelectionCleared,
            FormEvent::ValidationFailed(message),
        ]
    }

    /// Drops the pending file.
    pub fn clear(&mut self) -> Vec<FormEvent> {
        debug!("Selection removed by user.");
        self.set_selection(None).into_iter().collect()
    }

    pub fn submit(&mut self) -> Submission {
        if self.in_flight {
            debug!("Submit ignored, upload already in flight.");
            return Submission::Ignored;
        }
        match &self.selected {
            None => Submission::Rejected(FormEvent::ValidationFailed(NO_FILE_MESSAGE.to_string())),
            Some(file) => {
                self.in_flight = true;
                Submission::Started(file.clone())
            }
        }
    }

    /// Feeds back the outcome of a started upload. Always clears the in-flight flag.
    pub fn settle(&mut self, outcome: Result<AnalysisResult, UploadError>) -> FormEvent {
        self.in_flight = false;
        match outcome {
            Ok(result) => FormEvent::UploadSucceeded(result),
            Err(e) => FormEvent::UploadFailed(e.to_string()),
        }
    }

    // Every write to the selection goes through here so that emptying it
    // always reports `SelectionCleared` in the same transition.
    fn set_selection(&mut self, value: Option<SelectedFile>) -> Option<FormEvent> {
        self.selected = value;
        self.selected.is_none().then_some(FormEvent::SelectionCleared)
    }
}
