//! On-disk encodings for gen_data files

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GenDataError, Result};

/// File format used when a series is loaded from or written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileFormat {
    /// Not configured
    #[default]
    #[serde(skip_deserializing)]
    Undefined,
    /// One number per line
    Ascii,
    /// Numbers spliced into a template file at the key position (output only)
    AsciiTemplate,
    /// Raw native-endian f64 values
    BinaryDouble,
    /// Raw native-endian f32 values
    BinaryFloat,
}

impl FileFormat {
    /// Literals accepted by [`FileFormat::parse`]
    pub const VALID_NAMES: [&'static str; 4] =
        ["ASCII", "ASCII_TEMPLATE", "BINARY_DOUBLE", "BINARY_FLOAT"];

    /// Parse a configured format name.
    ///
    /// An absent name means the format was not configured and maps to
    /// `Undefined`. A present name must be one of [`Self::VALID_NAMES`].
    pub fn parse(name: Option<&str>) -> Result<Self> {
        match name {
            None => Ok(FileFormat::Undefined),
            Some("ASCII") => Ok(FileFormat::Ascii),
            Some("ASCII_TEMPLATE") => Ok(FileFormat::AsciiTemplate),
            Some("BINARY_DOUBLE") => Ok(FileFormat::BinaryDouble),
            Some("BINARY_FLOAT") => Ok(FileFormat::BinaryFloat),
            Some(other) => Err(GenDataError::UnknownFormat {
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Undefined => "UNDEFINED",
            FileFormat::Ascii => "ASCII",
            FileFormat::AsciiTemplate => "ASCII_TEMPLATE",
            FileFormat::BinaryDouble => "BINARY_DOUBLE",
            FileFormat::BinaryFloat => "BINARY_FLOAT",
        }
    }

    pub fn is_defined(&self) -> bool {
        *self != FileFormat::Undefined
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, FileFormat::BinaryDouble | FileFormat::BinaryFloat)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileFormat {
    type Err = GenDataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(Some(s))
    }
}
