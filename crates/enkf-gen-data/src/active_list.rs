//! Subset of elements taking part in the update step

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveMode {
    /// Every element is active
    All,
    /// Only the listed indices are active
    Partial,
}

/// Active-index selector owned by each gen_data configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveList {
    indices: Option<Vec<usize>>,
}

impl ActiveList {
    /// All elements active
    pub fn all() -> Self {
        Self::default()
    }

    pub fn set_all(&mut self) {
        self.indices = None;
    }

    /// Restrict to `indices`; duplicates are dropped and order is normalized.
    pub fn set_partial(&mut self, indices: impl IntoIterator<Item = usize>) {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        self.indices = Some(indices);
    }

    pub fn mode(&self) -> ActiveMode {
        match self.indices {
            None => ActiveMode::All,
            Some(_) => ActiveMode::Partial,
        }
    }

    /// Explicit indices, `None` when all elements are active
    pub fn indices(&self) -> Option<&[usize]> {
        self.indices.as_deref()
    }

    /// Number of active elements in a series of `total` elements
    pub fn active_size(&self, total: usize) -> usize {
        match &self.indices {
            None => total,
            Some(indices) => indices.iter().filter(|i| **i < total).count(),
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        match &self.indices {
            None => true,
            Some(indices) => indices.binary_search(&index).is_ok(),
        }
    }
}
