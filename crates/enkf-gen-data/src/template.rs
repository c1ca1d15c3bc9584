//! Template files with a single data insertion point
//!
//! The template is read once at configuration time. The writer later asks
//! for a [`TemplateData`] view and splices the formatted numbers in place of
//! the key, so it never has to do offset arithmetic itself.

use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GenDataError, Result};

/// A template file bound to the key that marks where data goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBinding {
    source_file: PathBuf,
    key: String,
    buffer: Vec<u8>,
    span: Range<usize>,
}

impl TemplateBinding {
    /// Read `path` and locate the first occurrence of `key` in it.
    ///
    /// `series` names the data series the template belongs to and is only
    /// used in errors and logs.
    pub fn bind(series: &str, path: impl AsRef<Path>, key: &str) -> Result<Self> {
        let path = path.as_ref();
        let buffer = std::fs::read(path).map_err(|source| GenDataError::TemplateRead {
            key: series.to_string(),
            path: path.to_path_buf(),
            source,
        })?;

        let offset = find(&buffer, key.as_bytes()).ok_or_else(|| {
            GenDataError::TemplateKeyNotFound {
                key: series.to_string(),
                path: path.to_path_buf(),
                template_key: key.to_string(),
            }
        })?;

        debug!(
            series,
            template = %path.display(),
            key,
            offset,
            size = buffer.len(),
            "bound gen_data template"
        );

        Ok(Self {
            source_file: path.to_path_buf(),
            key: key.to_string(),
            buffer,
            span: offset..offset + key.len(),
        })
    }

    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrowed view used by the writer
    pub fn data(&self) -> TemplateData<'_> {
        TemplateData {
            buffer: &self.buffer,
            span: self.span.clone(),
        }
    }
}

/// Template buffer together with the byte span of the key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData<'a> {
    buffer: &'a [u8],
    span: Range<usize>,
}

impl<'a> TemplateData<'a> {
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Byte offset of the key in the buffer
    pub fn offset(&self) -> usize {
        self.span.start
    }

    /// Length of the key, i.e. the bytes the data replaces
    pub fn key_len(&self) -> usize {
        self.span.len()
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Everything before the key
    pub fn prefix(&self) -> &'a [u8] {
        &self.buffer[..self.span.start]
    }

    /// Everything after the key
    pub fn suffix(&self) -> &'a [u8] {
        &self.buffer[self.span.end..]
    }

    /// Copy of the template with `data` in place of the key
    pub fn render(&self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.buffer.len() - self.key_len() + data.len());
        out.extend_from_slice(self.prefix());
        out.extend_from_slice(data);
        out.extend_from_slice(self.suffix());
        out
    }
}

/// First occurrence of a non-empty `needle` in `haystack`
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
