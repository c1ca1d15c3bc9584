//! Configuration of one generic data series

use std::path::{Path, PathBuf};

use enkf_common::{logging::format_error, PathFormat, Validatable, ValidationError};
use tracing::{debug, warn};

use crate::active_list::ActiveList;
use crate::error::{GenDataError, Result};
use crate::format::FileFormat;
use crate::ledger::SizeLedger;
use crate::template::{TemplateBinding, TemplateData};
use crate::types::ElementType;
use crate::update::GenDataUpdate;

/// How a named data series is stored on disk and how large it is at each
/// report step.
///
/// Format, template and init-file settings change only through
/// [`reconfigure`](Self::reconfigure), which needs `&mut self`. Size
/// bookkeeping goes through `&self` and may be shared between worker
/// threads once configuration is done.
#[derive(Debug)]
pub struct GenDataConfig {
    key: String,
    element_type: ElementType,
    template: Option<TemplateBinding>,
    input_format: FileFormat,
    output_format: FileFormat,
    init_file_fmt: Option<PathFormat>,
    active_list: ActiveList,
    ledger: SizeLedger,
}

impl GenDataConfig {
    /// Empty configuration holding `f64` elements
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_element_type(key, ElementType::default())
    }

    pub fn with_element_type(key: impl Into<String>, element_type: ElementType) -> Self {
        let key = key.into();
        Self {
            ledger: SizeLedger::new(key.clone()),
            key,
            element_type,
            template: None,
            input_format: FileFormat::Undefined,
            output_format: FileFormat::Undefined,
            init_file_fmt: None,
            active_list: ActiveList::all(),
        }
    }

    /// Validate and install a complete set of settings.
    ///
    /// On error the previous settings are left untouched.
    pub fn reconfigure(&mut self, update: &GenDataUpdate) -> Result<()> {
        let result = self.try_reconfigure(update);
        if let Err(ref err) = result {
            warn!(key = %self.key, error = %format_error(err), "gen_data reconfigure rejected");
        }
        result
    }

    fn try_reconfigure(&mut self, update: &GenDataUpdate) -> Result<()> {
        update
            .validate()
            .map_err(|source| GenDataError::invalid(&self.key, source))?;

        let template = match (&update.template_file, &update.template_key) {
            (Some(file), Some(key)) => Some(TemplateBinding::bind(&self.key, file, key)?),
            (None, Some(key)) => {
                warn!(key = %self.key, template_key = %key, "template key given without a template file; ignored");
                None
            }
            _ => None,
        };

        if update.output_format == FileFormat::AsciiTemplate && template.is_none() {
            return Err(GenDataError::invalid(
                &self.key,
                ValidationError::required(
                    "TEMPLATE",
                    "OUTPUT_FORMAT ASCII_TEMPLATE needs a template file",
                ),
            ));
        }

        self.set_template(template);
        self.set_init_file_fmt(update.init_file_fmt.as_deref());
        self.set_io_format(update.input_format, update.output_format);

        debug!(
            key = %self.key,
            input_format = %self.input_format,
            output_format = %self.output_format,
            init_files = self.init_file_fmt().unwrap_or(""),
            template = ?self.template_file(),
            "gen_data reconfigured"
        );
        Ok(())
    }

    fn set_template(&mut self, template: Option<TemplateBinding>) {
        self.template = template;
    }

    fn set_init_file_fmt(&mut self, fmt: Option<&str>) {
        self.init_file_fmt = fmt.map(PathFormat::new);
    }

    fn set_io_format(&mut self, input_format: FileFormat, output_format: FileFormat) {
        self.input_format = input_format;
        self.output_format = output_format;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn input_format(&self) -> FileFormat {
        self.input_format
    }

    pub fn output_format(&self) -> FileFormat {
        self.output_format
    }

    pub fn template_file(&self) -> Option<&Path> {
        self.template.as_ref().map(TemplateBinding::source_file)
    }

    pub fn template_key(&self) -> Option<&str> {
        self.template.as_ref().map(TemplateBinding::key)
    }

    /// Template buffer and insertion point, if a template is configured
    pub fn template_data(&self) -> Option<TemplateData<'_>> {
        self.template.as_ref().map(TemplateBinding::data)
    }

    pub fn init_file_fmt(&self) -> Option<&str> {
        self.init_file_fmt.as_ref().map(PathFormat::as_str)
    }

    /// Init file for one ensemble member.
    ///
    /// `None` means the series is initialized by the forward model.
    pub fn init_file(&self, member: usize) -> Option<PathBuf> {
        self.init_file_fmt.as_ref().map(|fmt| fmt.expand(member))
    }

    pub fn active_list(&self) -> &ActiveList {
        &self.active_list
    }

    pub fn active_list_mut(&mut self) -> &mut ActiveList {
        &mut self.active_list
    }

    pub fn ledger(&self) -> &SizeLedger {
        &self.ledger
    }

    /// Record or check the element count seen at `report_step`
    pub fn assert_size(&self, report_step: usize, size: usize) -> Result<()> {
        self.ledger.declare_or_verify(report_step, size)
    }

    /// Number of elements at `report_step`
    pub fn data_size(&self, report_step: usize) -> Result<usize> {
        self.ledger.get(report_step)
    }

    /// Number of bytes at `report_step`
    pub fn byte_size(&self, report_step: usize) -> Result<usize> {
        self.ledger.byte_size(report_step, self.element_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VarType;
    use std::io::Write;

    fn template_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_new_config_is_empty() {
        let config = GenDataConfig::new("PORO");
        assert_eq!(config.key(), "PORO");
        assert_eq!(config.element_type(), ElementType::Double);
        assert_eq!(config.input_format(), FileFormat::Undefined);
        assert_eq!(config.output_format(), FileFormat::Undefined);
        assert!(config.template_data().is_none());
        assert!(config.init_file(0).is_none());
        assert!(config.active_list().indices().is_none());
        assert!(config.ledger().is_empty());
    }

    #[test]
    fn test_reconfigure_installs_settings() {
        let mut config = GenDataConfig::new("PORO");
        let update = GenDataUpdate::new(VarType::Parameter)
            .with_output_format(FileFormat::BinaryDouble)
            .with_init_files("init/poro_%d.txt");

        config.reconfigure(&update).unwrap();

        assert_eq!(config.output_format(), FileFormat::BinaryDouble);
        assert_eq!(config.input_format(), FileFormat::Undefined);
        assert_eq!(config.init_file_fmt(), Some("init/poro_%d.txt"));
        assert_eq!(config.init_file(4), Some(PathBuf::from("init/poro_4.txt")));
    }

    #[test]
    fn test_ascii_template_without_template_fails() {
        let mut config = GenDataConfig::new("PORO");
        let update =
            GenDataUpdate::new(VarType::Parameter).with_output_format(FileFormat::AsciiTemplate);

        let err = config.reconfigure(&update).unwrap_err();
        match err {
            GenDataError::Invalid { key, source } => {
                assert_eq!(key, "PORO");
                assert_eq!(source.field(), "TEMPLATE");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_template_read_error_reported_before_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GenDataConfig::new("PORO");
        let update = GenDataUpdate::new(VarType::Parameter)
            .with_output_format(FileFormat::AsciiTemplate)
            .with_template(dir.path().join("absent.tmpl"), "<DATA>");

        let err = config.reconfigure(&update).unwrap_err();
        assert!(matches!(err, GenDataError::TemplateRead { .. }));
        assert_eq!(err.series_key(), Some("PORO"));
    }

    #[test]
    fn test_rejection_chain_names_cause_once() {
        let mut config = GenDataConfig::new("PORO");
        let update =
            GenDataUpdate::new(VarType::Parameter).with_output_format(FileFormat::AsciiTemplate);

        let err = config.reconfigure(&update).unwrap_err();
        let chain = format_error(&err);
        assert!(chain.starts_with("invalid configuration for PORO Caused by: "));
        assert_eq!(chain.matches("Required field missing: TEMPLATE").count(), 1);
    }

    #[test]
    fn test_failed_reconfigure_keeps_previous_settings() {
        let file = template_file("A <DATA> B");
        let mut config = GenDataConfig::new("PORO");
        config
            .reconfigure(
                &GenDataUpdate::new(VarType::Parameter)
                    .with_output_format(FileFormat::AsciiTemplate)
                    .with_template(file.path(), "<DATA>"),
            )
            .unwrap();

        let bad = GenDataUpdate::new(VarType::Parameter)
            .with_output_format(FileFormat::AsciiTemplate)
            .with_template(file.path(), "<MISSING>");
        assert!(config.reconfigure(&bad).is_err());

        assert_eq!(config.output_format(), FileFormat::AsciiTemplate);
        assert_eq!(config.template_key(), Some("<DATA>"));
        assert_eq!(config.template_data().unwrap().offset(), 2);
    }

    #[test]
    fn test_reconfigure_without_template_clears_binding() {
        let file = template_file("<DATA>");
        let mut config = GenDataConfig::new("PORO");
        config
            .reconfigure(
                &GenDataUpdate::new(VarType::Parameter)
                    .with_output_format(FileFormat::AsciiTemplate)
                    .with_template(file.path(), "<DATA>"),
            )
            .unwrap();
        assert!(config.template_file().is_some());

        config
            .reconfigure(
                &GenDataUpdate::new(VarType::Parameter).with_output_format(FileFormat::Ascii),
            )
            .unwrap();
        assert!(config.template_file().is_none());
        assert!(config.template_key().is_none());
        assert!(config.template_data().is_none());
        assert!(config.init_file_fmt().is_none());
    }

    #[test]
    fn test_size_queries_use_element_type() {
        let config = GenDataConfig::with_element_type("WOPR", ElementType::Float);
        config.assert_size(0, 25).unwrap();
        assert_eq!(config.data_size(0).unwrap(), 25);
        assert_eq!(config.byte_size(0).unwrap(), 100);
        assert!(config.data_size(1).is_err());
    }

    #[test]
    fn test_byte_size_overflow_names_series() {
        let config = GenDataConfig::new("PORO");
        config.assert_size(2, usize::MAX / 4).unwrap();
        let err = config.byte_size(2).unwrap_err();
        assert!(matches!(err, GenDataError::ByteSizeOverflow { report_step: 2, .. }));
        assert_eq!(err.series_key(), Some("PORO"));
    }

    #[test]
    fn test_active_list_is_mutable() {
        let mut config = GenDataConfig::new("PORO");
        config.active_list_mut().set_partial([0, 3]);
        assert_eq!(config.active_list().active_size(10), 2);
    }
}
