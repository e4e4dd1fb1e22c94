// src/core/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use strum::Display;

// --- Analyzer Wire Models ---

/// One accessibility finding reported by the analyzer service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisIssue {
    /// Short label, e.g. "Missing alt text".
    pub issue: String,
    pub description: String,
    pub suggestion: String,
    /// The offending markup, when the analyzer can point at it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

/// The full report for one uploaded file.
///
/// Issues keep the order in which the server sent them; the results panel
/// renders them in that order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub compliance_score: f64,
    pub issues: Vec<AnalysisIssue>,
}

impl AnalysisResult {
    pub fn score_status(&self) -> ScoreStatus {
        ScoreStatus::from_score(self.compliance_score)
    }
}

/// Body of a non-success analyzer response.
///
/// `error` is kept as raw JSON: the analyzer is not trusted to send a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The server's message, if it sent a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|v| v.as_str()).filter(|m| !m.is_empty())
    }
}

// --- Score Threshold ---

/// Scores strictly below this value are flagged as failing.
pub const PASSING_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScoreStatus {
    #[strum(serialize = "failing")]
    Failing,
    #[strum(serialize = "passing")]
    Passing,
}

impl ScoreStatus {
    pub fn from_score(score: f64) -> Self {
        if score < PASSING_SCORE {
            ScoreStatus::Failing
        } else {
            ScoreStatus::Passing
        }
    }
}

// --- Selected File ---

/// A file the user picked for upload. Lives only in memory.
#[derive(Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
    pub media_type: &'static str,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        let name = name.into();
        let media_type = media_type_for(&name);
        Self { name, content, media_type }
    }

    /// Reads the file at `path` into memory.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, content))
    }
}

// The content can be large; keep it out of logs and panics.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size", &self.content.len())
            .field("media_type", &self.media_type)
            .finish()
    }
}

/// True for the extensions the file browser offers.
pub fn is_html_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

fn media_type_for(name: &str) -> &'static str {
    if is_html_name(name) {
        "text/html"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyzer_response_and_keeps_issue_order() {
        let body = r#"{
            "complianceScore": 64.5,
            "issues": [
                {"issue": "Missing alt", "description": "img has no alt", "suggestion": "Add alt", "element": "<img src=a.png>"},
                {"issue": "Low contrast", "description": "text is hard to read", "suggestion": "Darken text"}
            ]
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.compliance_score, 64.5);
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].issue, "Missing alt");
        assert_eq!(result.issues[0].element.as_deref(), Some("<img src=a.png>"));
        assert_eq!(result.issues[1].issue, "Low contrast");
        assert_eq!(result.issues[1].element, None);
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"error": "file too large"}"#).unwrap();
        assert_eq!(body.message(), Some("file too large"));
    }

    #[test]
    fn error_body_ignores_non_string_and_empty_messages() {
        for raw in [r#"{"error": 413}"#, r#"{"error": null}"#, r#"{"error": {"code": 1}}"#, r#"{"error": ""}"#] {
            let body: ErrorBody = serde_json::from_str(raw).unwrap();
            assert_eq!(body.message(), None, "body {raw}");
        }
    }

    #[test]
    fn score_threshold_is_fifty() {
        assert_eq!(ScoreStatus::from_score(49.0), ScoreStatus::Failing);
        assert_eq!(ScoreStatus::from_score(49.99), ScoreStatus::Failing);
        assert_eq!(ScoreStatus::from_score(50.0), ScoreStatus::Passing);
        assert_eq!(ScoreStatus::from_score(100.0), ScoreStatus::Passing);
        assert_eq!(ScoreStatus::Failing.to_string(), "failing");
    }

    #[test]
    fn media_type_follows_extension() {
        assert_eq!(SelectedFile::new("page.html", vec![]).media_type, "text/html");
        assert_eq!(SelectedFile::new("PAGE.HTM", vec![]).media_type, "text/html");
        assert_eq!(SelectedFile::new("notes.txt", vec![]).media_type, "application/octet-stream");
        assert!(!is_html_name("html"));
    }

    #[test]
    fn debug_output_hides_content() {
        let file = SelectedFile::new("page.html", b"<html>secret</html>".to_vec());
        let printed = format!("{:?}", file);
        assert!(printed.contains("page.html"));
        assert!(!printed.contains("secret"));
    }
}
