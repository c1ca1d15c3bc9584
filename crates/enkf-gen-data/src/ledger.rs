//! Per-report-step element counts
//!
//! Every ensemble member that loads or produces data for a series reports
//! how many elements it saw at a given report step. The first report for a
//! step fixes the size; all later reports must agree. A disagreement means a
//! forward model or loader is broken and downstream numerics would silently
//! mix vectors of different length.

use enkf_common::OnceMap;
use tracing::{debug, error};

use crate::error::{GenDataError, Result};
use crate::types::ElementType;

#[derive(Debug)]
pub struct SizeLedger {
    key: String,
    sizes: OnceMap<usize, usize>,
}

impl SizeLedger {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            sizes: OnceMap::new(),
        }
    }

    /// Record `size` for `report_step`, or check it against the size already
    /// recorded there.
    pub fn declare_or_verify(&self, report_step: usize, size: usize) -> Result<()> {
        let (committed, inserted) = self.sizes.commit(report_step, size);

        if inserted {
            debug!(key = %self.key, report_step, size, "declared gen_data size");
            return Ok(());
        }

        if committed != size {
            error!(
                key = %self.key,
                report_step,
                expected = committed,
                actual = size,
                "gen_data size mismatch"
            );
            return Err(GenDataError::SizeMismatch {
                key: self.key.clone(),
                report_step,
                expected: committed,
                actual: size,
            });
        }

        Ok(())
    }

    /// Element count committed for `report_step`.
    ///
    /// Asking for a step nobody has declared is a caller bug.
    pub fn get(&self, report_step: usize) -> Result<usize> {
        self.sizes
            .get(&report_step)
            .ok_or_else(|| GenDataError::SizeNotSet {
                key: self.key.clone(),
                report_step,
            })
    }

    pub fn byte_size(&self, report_step: usize, element_type: ElementType) -> Result<usize> {
        let size = self.get(report_step)?;
        size.checked_mul(element_type.size_of()).ok_or_else(|| {
            error!(key = %self.key, report_step, size, "gen_data byte size overflows usize");
            GenDataError::ByteSizeOverflow {
                key: self.key.clone(),
                report_step,
                size,
                element_type,
            }
        })
    }

    pub fn is_declared(&self, report_step: usize) -> bool {
        self.sizes.contains(&report_step)
    }

    /// Declared report steps in ascending order
    pub fn declared_steps(&self) -> Vec<usize> {
        self.sizes.keys()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
