// src/ui/widgets/mod.rs

pub mod error_banner; // Timed alert for failures.
pub mod file_picker;  // Modal HTML file browser.
pub mod footer;       // Key hints and copyright line.
pub mod header;
pub mod results;      // Compliance score and issue list.
pub mod upload_form;  // Selected file, remove affordance, submit control.
