// src/core/mod.rs

/// Wire types for the analyzer service and the in-memory selected file.
pub mod models;

/// HTTP client for `POST /upload` and its error type.
pub mod analyzer;

/// Upload form state machine: pending file, in-flight guard, emitted events.
pub mod upload_form;

/// Reducer holding the active result and the timed error message.
pub mod results_page;

/// In-terminal file chooser restricted to HTML files.
pub mod file_picker;
