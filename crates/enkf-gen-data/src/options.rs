//! Parsing of the gen_data option block
//!
//! In the outer configuration a series is declared with a list of
//! `KEY:VALUE` tokens:
//!
//! ```text
//! INPUT_FORMAT:(ASCII|BINARY_DOUBLE|BINARY_FLOAT)
//! OUTPUT_FORMAT:(ASCII|ASCII_TEMPLATE|BINARY_DOUBLE|BINARY_FLOAT)
//! INIT_FILES:/some/path/with/%d
//! TEMPLATE:/some/template/file
//! KEY:<SomeKeyFoundInTemplate>
//! ECL_FILE:<file written for the forward model>
//! RESULT_FILE:<file loaded after the forward model>
//! ```
//!
//! The same keys are accepted as a TOML table. `ECL_FILE` and
//! `RESULT_FILE` are kept for the calling scope and not interpreted here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{GenDataError, Result};
use crate::format::FileFormat;
use crate::types::VarType;
use crate::update::GenDataUpdate;

/// Raw option values, before format names are checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenDataOptions {
    #[serde(rename = "INPUT_FORMAT", default, skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,

    #[serde(rename = "OUTPUT_FORMAT", default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,

    #[serde(rename = "INIT_FILES", default, skip_serializing_if = "Option::is_none")]
    pub init_files: Option<String>,

    #[serde(rename = "TEMPLATE", default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    #[serde(rename = "KEY", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "ECL_FILE", default, skip_serializing_if = "Option::is_none")]
    pub ecl_file: Option<String>,

    #[serde(rename = "RESULT_FILE", default, skip_serializing_if = "Option::is_none")]
    pub result_file: Option<String>,
}

impl GenDataOptions {
    /// Parse `KEY:VALUE` tokens. A repeated key keeps the last value.
    pub fn from_options<I, S>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();

        for option in options {
            let option = option.as_ref();
            let (key, value) =
                option
                    .split_once(':')
                    .ok_or_else(|| GenDataError::MalformedOption {
                        option: option.to_string(),
                    })?;
            let value = value.to_string();

            match key {
                "INPUT_FORMAT" => parsed.input_format = Some(value),
                "OUTPUT_FORMAT" => parsed.output_format = Some(value),
                "INIT_FILES" => parsed.init_files = Some(value),
                "TEMPLATE" => parsed.template = Some(PathBuf::from(value)),
                "KEY" => parsed.key = Some(value),
                "ECL_FILE" => parsed.ecl_file = Some(value),
                "RESULT_FILE" => parsed.result_file = Some(value),
                _ => {
                    return Err(GenDataError::UnknownOption {
                        option: key.to_string(),
                    })
                }
            }
        }

        Ok(parsed)
    }

    /// Parse a TOML table using the same upper-case keys
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check the format names and build the settings for `reconfigure`
    pub fn to_update(&self, var_type: VarType) -> Result<GenDataUpdate> {
        Ok(GenDataUpdate {
            var_type,
            input_format: FileFormat::parse(self.input_format.as_deref())?,
            output_format: FileFormat::parse(self.output_format.as_deref())?,
            init_file_fmt: self.init_files.clone(),
            template_file: self.template.clone(),
            template_key: self.key.clone(),
        })
    }
}
