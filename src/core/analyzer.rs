// src/core/analyzer.rs

use crate::core::models::{AnalysisResult, ErrorBody, SelectedFile};
use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use url::Url;

/// Multipart field name the analyzer reads the upload from.
pub const UPLOAD_FIELD: &str = "file";

/// Message used when the analyzer rejects an upload without saying why.
pub const FALLBACK_UPLOAD_ERROR: &str = "Upload failed";

/// Everything that can go wrong with one upload.
///
/// The `Display` output is what the user sees in the error banner.
#[derive(Error, Debug)]
pub enum UploadError {
    /// Non-success status; carries the server's `error` text or the fallback.
    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the remote accessibility analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    client: reqwest::Client,
    upload_url: Url,
}

impl AnalyzerClient {
    pub fn new(base_url: &Url) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("a11y-rs-analyzer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, upload_url: upload_url(base_url) })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    /// Sends `file` to `POST <base>/upload` and parses the report.
    pub async fn upload(&self, file: &SelectedFile) -> Result<AnalysisResult, UploadError> {
        info!(file = %file.name, size = file.content.len(), url = %self.upload_url, "Uploading file for analysis.");

        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(file.media_type)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Upload request failed."))?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "Received analyzer response.");

        if !status.is_success() {
            let err_body: ErrorBody = serde_json::from_slice(&body)
                .inspect_err(|e| warn!(%status, error = %e, "Error response was not valid JSON."))?;
            let message = err_body.message().unwrap_or(FALLBACK_UPLOAD_ERROR).to_string();
            warn!(%status, message = %message, "Analyzer rejected the upload.");
            return Err(UploadError::Server(message));
        }

        let result: AnalysisResult = serde_json::from_slice(&body)
            .inspect_err(|e| error!(error = %e, "Could not parse analysis result."))?;
        info!(score = result.compliance_score, issues = result.issues.len(), "Analysis received.");
        Ok(result)
    }
}

/// Joins `/upload` onto the base URL, keeping any path prefix the base has.
fn upload_url(base: &Url) -> Url {
    let mut url = base.clone();
    let path = format!("{}/upload", base.path().trim_end_matches('/'));
    url.set_path(&path);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn page() -> SelectedFile {
        SelectedFile::new("page.html", b"<html><body><img src=\"a.png\"></body></html>".to_vec())
    }

    fn client_for(server: &MockServer) -> AnalyzerClient {
        let base = Url::parse(&server.base_url()).unwrap();
        AnalyzerClient::new(&base).unwrap()
    }

    #[test]
    fn upload_url_joins_without_double_slash() {
        let base = Url::parse("http://localhost:5000").unwrap();
        assert_eq!(upload_url(&base).as_str(), "http://localhost:5000/upload");

        let base = Url::parse("https://api.example.com/v1/").unwrap();
        assert_eq!(upload_url(&base).as_str(), "https://api.example.com/v1/upload");
    }

    #[tokio::test]
    async fn posts_multipart_file_and_parses_result() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/upload")
                    .body_contains("name=\"file\"")
                    .body_contains("filename=\"page.html\"")
                    .body_contains("<img src=\"a.png\">");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "complianceScore": 72,
                        "issues": [
                            {"issue": "Missing alt", "description": "Image lacks alt", "suggestion": "Add alt text", "element": "<img src=\"a.png\">"}
                        ]
                    }));
            })
            .await;

        let result = client_for(&server).upload(&page()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.compliance_score, 72.0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].suggestion, "Add alt text");
    }

    #[tokio::test]
    async fn server_error_message_is_passed_through() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/upload");
                then.status(500).json_body(json!({"error": "file too large"}));
            })
            .await;

        let err = client_for(&server).upload(&page()).await.unwrap_err();

        assert!(matches!(err, UploadError::Server(_)));
        assert_eq!(err.to_string(), "file too large");
    }

    #[tokio::test]
    async fn server_error_without_message_uses_fallback() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/upload");
                then.status(500).json_body(json!({}));
            })
            .await;

        let err = client_for(&server).upload(&page()).await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_UPLOAD_ERROR);
    }

    #[tokio::test]
    async fn empty_server_error_uses_fallback() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/upload");
                then.status(422).json_body(json!({"error": ""}));
            })
            .await;

        let err = client_for(&server).upload(&page()).await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_UPLOAD_ERROR);
    }

    #[tokio::test]
    async fn non_string_server_error_uses_fallback() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/upload");
                then.status(500).json_body(json!({"error": 413}));
            })
            .await;

        let err = client_for(&server).upload(&page()).await.unwrap_err();

        assert!(matches!(err, UploadError::Server(_)));
        assert_eq!(err.to_string(), FALLBACK_UPLOAD_ERROR);
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/upload");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = client_for(&server).upload(&page()).await.unwrap_err();
        assert!(matches!(err, UploadError::Parse(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn non_json_error_body_is_a_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/upload");
                then.status(502).body("Bad Gateway");
            })
            .await;

        let err = client_for(&server).upload(&page()).await.unwrap_err();
        assert!(matches!(err, UploadError::Parse(_)));
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Nothing listens on port 1.
        let base = Url::parse("http://127.0.0.1:1").unwrap();
        let client = AnalyzerClient::new(&base).unwrap();

        let err = client.upload(&page()).await.unwrap_err();
        assert!(matches!(err, UploadError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
