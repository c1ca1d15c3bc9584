//! Error types for generic data configuration

use std::path::PathBuf;

use enkf_common::ValidationError;
use thiserror::Error;

use crate::types::ElementType;

/// Result type for gen_data operations
pub type Result<T> = std::result::Result<T, GenDataError>;

/// Errors raised while configuring or sizing a generic data series.
///
/// None of these are recoverable at the call site: they mean the setup is
/// wrong or a forward model produced inconsistent data, and the run should
/// stop.
#[derive(Debug, Error)]
pub enum GenDataError {
    #[error(
        "format \"{value}\" not recognized - valid values: ASCII / ASCII_TEMPLATE / BINARY_DOUBLE / BINARY_FLOAT"
    )]
    UnknownFormat { value: String },

    #[error("invalid configuration for {key}")]
    Invalid {
        key: String,
        #[source]
        source: ValidationError,
    },

    #[error("failed to read template {path} for {key}")]
    TemplateRead {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "template {path} can not be used for {key} - could not find data key \"{template_key}\""
    )]
    TemplateKeyNotFound {
        key: String,
        path: PathBuf,
        template_key: String,
    },

    #[error(
        "size mismatch for {key}: got {actual} elements - expected {expected} [report_step: {report_step}]"
    )]
    SizeMismatch {
        key: String,
        report_step: usize,
        expected: usize,
        actual: usize,
    },

    #[error("size not set for {key} at report_step {report_step}")]
    SizeNotSet { key: String, report_step: usize },

    #[error(
        "byte size of {size} {element_type} elements overflows for {key} [report_step: {report_step}]"
    )]
    ByteSizeOverflow {
        key: String,
        report_step: usize,
        size: usize,
        element_type: ElementType,
    },

    #[error("unknown gen_data option \"{option}\"")]
    UnknownOption { option: String },

    #[error("malformed gen_data option \"{option}\" - expected KEY:VALUE")]
    MalformedOption { option: String },

    #[error("failed to parse gen_data options: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GenDataError {
    pub(crate) fn invalid(key: &str, source: ValidationError) -> Self {
        Self::Invalid {
            key: key.to_string(),
            source,
        }
    }

    /// The series key this error refers to, when it carries one
    pub fn series_key(&self) -> Option<&str> {
        match self {
            Self::Invalid { key, .. }
            | Self::TemplateRead { key, .. }
            | Self::TemplateKeyNotFound { key, .. }
            | Self::SizeMismatch { key, .. }
            | Self::SizeNotSet { key, .. }
            | Self::ByteSizeOverflow { key, .. } => Some(key),
            _ => None,
        }
    }
}
