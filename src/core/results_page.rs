// src/core/results_page.rs

//! Page-level state: the active analysis result and the transient error.

use crate::core::models::AnalysisResult;
use crate::core::upload_form::FormEvent;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long an error stays on screen.
pub const ERROR_DISPLAY_TIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveError {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ResultsPage {
    result: Option<AnalysisResult>,
    error: Option<ActiveError>,
}

impl ResultsPage {
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Applies one form event. `now` anchors the error expiry.
    pub fn apply(&mut self, event: FormEvent, now: Instant) {
        match event {
            FormEvent::ErrorCleared => self.error = None,
            FormEvent::SelectionCleared => self.result = None,
            FormEvent::ValidationFailed(message) | FormEvent::UploadFailed(message) => {
                debug!(message = %message, "Showing error.");
                // Replaces any older error together with its deadline.
                self.error = Some(ActiveError { message, expires_at: now + ERROR_DISPLAY_TIME });
            }
            FormEvent::UploadSucceeded(result) => self.result = Some(result),
        }
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = FormEvent>, now: Instant) {
        for event in events {
            self.apply(event, now);
        }
    }

    /// Drops the error once its display time is over.
    pub fn tick(&mut self, now: Instant) {
        if self.error.as_ref().is_some_and(|e| now >= e.expires_at) {
            debug!("Error display time elapsed.");
            self.error = None;
        }
    }
}
