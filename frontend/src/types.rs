//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - metadata of a candidate workbook
//! - **User Types** - entries of the fixed user list
//! - **API Types** - upload endpoint response
//! - **Error Types** - validation and upload failures

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// Metadata of a file handed to the form by drag & drop or the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type as reported by the browser (may be empty)
    pub mime_type: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Size in kilobytes with two decimals, e.g. `"12.50"`.
    pub fn size_kb(&self) -> String {
        format!("{:.2}", self.size as f64 / 1024.0)
    }
}

// =============================================================================
// User Types
// =============================================================================

/// One entry of the fixed user list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the backend upload endpoint.
///
/// Both fields are optional; the backend decides what it reports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable summary
    #[serde(default)]
    pub message: Option<String>,
    /// Processed records, usually an array
    #[serde(default)]
    pub data: Option<Value>,
}

impl UploadResponse {
    /// Number of processed records, when `data` is an array.
    pub fn records_processed(&self) -> Option<usize> {
        self.data.as_ref().and_then(Value::as_array).map(Vec::len)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Why a candidate file was refused. Never reaches the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FileRejection {
    /// MIME type is not one of the Excel types.
    #[error("Please select a valid Excel file (.xlsx, .xls, .xlsm)")]
    InvalidType,

    /// Larger than `MAX_FILE_SIZE`.
    #[error("File size must be less than 10MB")]
    TooLarge,
}

/// Errors raised while submitting the form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Submit pressed without a username.
    #[error("Please select a username before uploading!")]
    NoUserSelected,

    /// Backend answered with a non-2xx status.
    #[error("Upload failed: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// Transport failure or unreadable response body.
    #[error("{0}")]
    Network(String),
}

impl UploadError {
    /// Fallback text when a failure carries no description.
    pub const GENERIC_MESSAGE: &'static str = "Upload failed. Please try again.";

    /// Builds a [`UploadError::Network`], substituting the generic message
    /// for an empty description.
    pub fn network(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.trim().is_empty() {
            UploadError::Network(Self::GENERIC_MESSAGE.to_string())
        } else {
            UploadError::Network(description)
        }
    }
}

/// Result type alias for upload operations.
pub type AppResult<T> = Result<T, UploadError>;
