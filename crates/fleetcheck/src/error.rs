use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetcheckError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create settings directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No platform config directory available")]
    NoConfigDirectory,

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that block the finalize workflow before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{count} checklist item(s) still pending")]
    PendingItems { count: usize },

    #[error("Required fields missing: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("No sync endpoint configured")]
    NoEndpoint,

    #[error("Request to '{url}' failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("Failed to decode log response: {0}")]
    DecodeResponse(String),
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("File is not valid JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Not a checklist export: missing '{field}'")]
    MissingField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, FleetcheckError>;
