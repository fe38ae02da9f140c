//! JSON output types for machine-readable CLI output.
//!
//! Emitted by `texsplit --json` so that asset pipelines can consume the
//! result (written paths, sizes, hashes) or the failure without scraping text.

use serde::{Deserialize, Serialize};
use texsplit_core::{SplitError, SplitResult, WrittenImage};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Input file does not exist
    pub const INPUT_NOT_FOUND: &str = "CLI_001";
    /// Input file could not be read
    pub const FILE_READ: &str = "CLI_002";
    /// Input could not be decoded as an image
    pub const DECODE: &str = "CLI_003";
    /// Output could not be encoded as JPEG
    pub const ENCODE: &str = "CLI_004";
    /// Output could not be written
    pub const FILE_WRITE: &str = "CLI_005";
    /// JPEG quality out of range
    pub const INVALID_QUALITY: &str = "CLI_006";
    /// Channel planes of different sizes
    pub const DIMENSION_MISMATCH: &str = "CLI_007";
}

/// Stable code for a split failure.
pub fn error_code(error: &SplitError) -> &'static str {
    match error {
        SplitError::NotFound { .. } => error_codes::INPUT_NOT_FOUND,
        SplitError::Read { .. } => error_codes::FILE_READ,
        SplitError::Decode { .. } => error_codes::DECODE,
        SplitError::Encode { .. } => error_codes::ENCODE,
        SplitError::Write { .. } => error_codes::FILE_WRITE,
        SplitError::InvalidQuality(_) => error_codes::INVALID_QUALITY,
        SplitError::DimensionMismatch { .. } => error_codes::DIMENSION_MISMATCH,
    }
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
            suggestion: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<&SplitError> for JsonError {
    fn from(error: &SplitError) -> Self {
        let json = JsonError::new(error_code(error), error.to_string());
        match error {
            SplitError::NotFound { path } => json
                .with_file(path.display().to_string())
                .with_suggestion("Pass the packed texture with --input"),
            SplitError::Read { path, .. }
            | SplitError::Decode { path, .. }
            | SplitError::Encode { path, .. }
            | SplitError::Write { path, .. } => json.with_file(path.display().to_string()),
            SplitError::InvalidQuality(_) => {
                json.with_suggestion("Use a --quality between 1 and 100")
            }
            SplitError::DimensionMismatch { .. } => json,
        }
    }
}

/// One written map in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputRecord {
    /// Path the map was written to
    pub path: String,
    /// Source channel of the packed texture ("red", "green", "blue")
    pub source_channel: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Encoded size in bytes
    pub bytes: usize,
    /// BLAKE3 hash of the written file
    pub hash: String,
}

impl From<&WrittenImage> for OutputRecord {
    fn from(image: &WrittenImage) -> Self {
        Self {
            path: image.path.display().to_string(),
            source_channel: image.source.to_string(),
            width: image.width,
            height: image.height,
            bytes: image.bytes,
            hash: image.hash.clone(),
        }
    }
}

/// Result payload of a successful split.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitReport {
    /// Packed texture that was split
    pub input: String,
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
    /// JPEG quality used for both outputs
    pub quality: u8,
    /// Metalness map
    pub metal: OutputRecord,
    /// Roughness map
    pub roughness: OutputRecord,
}

impl SplitReport {
    /// Build a report from a split result.
    pub fn new(result: &SplitResult, quality: u8) -> Self {
        Self {
            input: result.input.display().to_string(),
            width: result.width,
            height: result.height,
            quality,
            metal: OutputRecord::from(&result.metal),
            roughness: OutputRecord::from(&result.roughness),
        }
    }
}

/// JSON output for a split run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOutput {
    /// Whether the split succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Split details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SplitReport>,
}

impl SplitOutput {
    /// Creates a successful output.
    pub fn success(report: SplitReport) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(report),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}
