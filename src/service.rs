//! Request handling.
//!
//! [`Analyzer`] is the boundary between a transport (an HTTP host, the CLI)
//! and the analysis engine. It resolves filenames through an injected
//! [`TranscriptStore`] and turns the stored blob into a [`Report`].
//!
//! # Example
//!
//! ```rust
//! use chatpulse::service::{AnalyzeRequest, Analyzer};
//! use chatpulse::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let analyzer = Analyzer::new(&store);
//!
//! analyzer.upload("chat.txt", "01.01.2024, 10:00 - Ali: merhaba".as_bytes())?;
//! let report = analyzer.analyze(&AnalyzeRequest::for_file("chat.txt"))?;
//! assert_eq!(report.total_messages, 1);
//! # Ok::<(), chatpulse::ChatpulseError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::core::{Report, analyze_str_with, to_json};
use crate::error::{ChatpulseError, Result};
use crate::storage::TranscriptStore;

/// Message returned for a successful upload.
pub const UPLOAD_MESSAGE: &str = "File uploaded successfully";

/// Body of an analyze request: `{"filename": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub filename: Option<String>,
}

impl AnalyzeRequest {
    /// Creates a request for `filename`.
    pub fn for_file(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
        }
    }

    /// Parses a JSON request body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| ChatpulseError::invalid_request(e.to_string()))
    }

    /// Returns the requested filename, rejecting a missing or empty one.
    pub fn filename(&self) -> Result<&str> {
        match self.filename.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ChatpulseError::MissingFilename),
        }
    }
}

/// A transcript to store.
#[derive(Debug, Clone, Copy)]
pub struct UploadRequest<'a> {
    pub filename: &'a str,
    pub content: &'a [u8],
}

/// Answer to an upload: `{"message": "...", "filename": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}

/// Error answer body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ChatpulseError> for ErrorResponse {
    fn from(err: &ChatpulseError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Handles upload and analyze requests against one store.
pub struct Analyzer<'s> {
    store: &'s dyn TranscriptStore,
    config: AnalysisConfig,
}

impl<'s> Analyzer<'s> {
    /// Creates an analyzer with the default configuration.
    pub fn new(store: &'s dyn TranscriptStore) -> Self {
        Self::with_config(store, AnalysisConfig::default())
    }

    /// Creates an analyzer with a custom configuration.
    pub fn with_config(store: &'s dyn TranscriptStore, config: AnalysisConfig) -> Self {
        Self { store, config }
    }

    /// Returns the analysis configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Stores a transcript under `filename`.
    pub fn upload(&self, filename: &str, content: &[u8]) -> Result<UploadResponse> {
        self.handle_upload(UploadRequest { filename, content })
    }

    /// Stores the transcript carried by `request`.
    pub fn handle_upload(&self, request: UploadRequest<'_>) -> Result<UploadResponse> {
        let UploadRequest { filename, content } = request;
        if let Err(e) = self.store.put(filename, content) {
            warn!(filename, error = %e, "upload rejected");
            return Err(e);
        }
        info!(
            filename,
            bytes = content.len(),
            store = self.store.name(),
            "transcript uploaded"
        );
        Ok(UploadResponse {
            message: UPLOAD_MESSAGE.to_string(),
            filename: filename.to_string(),
        })
    }

    /// Analyzes the transcript named by `request`.
    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<Report> {
        self.analyze_file(request.filename()?)
    }

    /// Analyzes the stored transcript `filename`.
    pub fn analyze_file(&self, filename: &str) -> Result<Report> {
        let content = match self.store.read_text(filename) {
            Ok(content) => content,
            Err(e) => {
                warn!(filename, error = %e, "analyze rejected");
                return Err(e);
            }
        };
        let report = analyze_str_with(&content, &self.config);
        info!(
            filename,
            total_messages = report.total_messages,
            participants = report.participant_count(),
            "transcript analyzed"
        );
        Ok(report)
    }

    /// Answers a JSON analyze request with a status code and a JSON body.
    ///
    /// Success yields `200` and the report; failures yield the error's
    /// [`status_code`](ChatpulseError::status_code) and `{"error": "..."}`.
    pub fn handle_analyze_json(&self, body: &str) -> (u16, String) {
        let outcome = AnalyzeRequest::from_json(body)
            .and_then(|request| self.analyze(&request))
            .and_then(|report| to_json(&report));
        match outcome {
            Ok(json) => (200, json),
            Err(e) => (e.status_code(), error_body(&e)),
        }
    }
}

fn error_body(err: &ChatpulseError) -> String {
    serde_json::to_string(&ErrorResponse::from(err))
        .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string())
}
