//! The settings installed by [`GenDataConfig::reconfigure`]
//!
//! [`GenDataConfig::reconfigure`]: crate::GenDataConfig::reconfigure

use std::path::PathBuf;

use enkf_common::{Validatable, ValidationError};

use crate::format::FileFormat;
use crate::types::VarType;

/// One complete set of format, template and init-file settings.
///
/// The fields only make sense together, which is why they are installed as
/// a unit rather than through individual setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenDataUpdate {
    /// Only consulted for the consistency checks
    pub var_type: VarType,
    pub input_format: FileFormat,
    pub output_format: FileFormat,
    pub init_file_fmt: Option<String>,
    pub template_file: Option<PathBuf>,
    pub template_key: Option<String>,
}

impl GenDataUpdate {
    /// Settings with both formats undefined and nothing else configured
    pub fn new(var_type: VarType) -> Self {
        Self {
            var_type,
            input_format: FileFormat::Undefined,
            output_format: FileFormat::Undefined,
            init_file_fmt: None,
            template_file: None,
            template_key: None,
        }
    }

    pub fn with_input_format(mut self, format: FileFormat) -> Self {
        self.input_format = format;
        self
    }

    pub fn with_output_format(mut self, format: FileFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_init_files(mut self, fmt: impl Into<String>) -> Self {
        self.init_file_fmt = Some(fmt.into());
        self
    }

    pub fn with_template(mut self, file: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        self.template_file = Some(file.into());
        self.template_key = Some(key.into());
        self
    }
}

impl Validatable for GenDataUpdate {
    /// Field-level checks, in the order they are reported.
    ///
    /// Whether a template file actually contains its key can only be known
    /// after reading it, so that check lives in `reconfigure`.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.var_type.needs_output_format() && !self.output_format.is_defined() {
            return Err(ValidationError::required(
                "OUTPUT_FORMAT",
                "an output format is required for data written to the forward model",
            ));
        }

        if self.var_type.needs_input_format() && !self.input_format.is_defined() {
            return Err(ValidationError::required(
                "INPUT_FORMAT",
                "an input format is required for data loaded from the forward model",
            ));
        }

        if self.input_format == FileFormat::AsciiTemplate {
            return Err(ValidationError::invalid(
                "INPUT_FORMAT",
                "ASCII_TEMPLATE is only valid as OUTPUT_FORMAT",
            ));
        }

        if self.template_file.is_some() && self.template_key.is_none() {
            return Err(ValidationError::required(
                "KEY",
                "a template file needs a template key",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_without_input_format_is_valid() {
        let update = GenDataUpdate::new(VarType::Parameter).with_output_format(FileFormat::Ascii);
        assert!(update.is_valid());
    }

    #[test]
    fn test_dynamic_result_without_output_format_is_valid() {
        let update =
            GenDataUpdate::new(VarType::DynamicResult).with_input_format(FileFormat::BinaryFloat);
        assert!(update.is_valid());
    }

    #[test]
    fn test_output_format_checked_before_input_format() {
        let err = GenDataUpdate::new(VarType::DynamicState)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "OUTPUT_FORMAT");

        let err = GenDataUpdate::new(VarType::DynamicState)
            .with_output_format(FileFormat::Ascii)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "INPUT_FORMAT");
    }

    #[test]
    fn test_template_as_input_is_rejected() {
        let err = GenDataUpdate::new(VarType::DynamicState)
            .with_output_format(FileFormat::Ascii)
            .with_input_format(FileFormat::AsciiTemplate)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
        assert_eq!(err.field(), "INPUT_FORMAT");
    }

    #[test]
    fn test_template_file_requires_key() {
        let mut update = GenDataUpdate::new(VarType::Parameter)
            .with_output_format(FileFormat::AsciiTemplate)
            .with_template("poro.tmpl", "<DATA>");
        assert!(update.is_valid());

        update.template_key = None;
        assert_eq!(update.validate().unwrap_err().field(), "KEY");
    }
}
