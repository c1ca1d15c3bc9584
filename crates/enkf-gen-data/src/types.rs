//! Element and variable kinds

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric type of the elements stored for a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Float,
    #[default]
    Double,
}

impl ElementType {
    /// Size of one element in bytes
    pub const fn size_of(&self) -> usize {
        match self {
            ElementType::Float => std::mem::size_of::<f32>(),
            ElementType::Double => std::mem::size_of::<f64>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ElementType::Float => "FLOAT",
            ElementType::Double => "DOUBLE",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Role a variable plays in the ensemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarType {
    /// Pure input: written for the forward model, never read back
    Parameter,
    /// State the forward model both reads and updates
    DynamicState,
    /// Pure output: produced by the forward model and loaded afterwards
    DynamicResult,
    StaticState,
    IndexState,
}

impl VarType {
    /// Whether the series is written to disk for the forward model
    pub fn needs_output_format(&self) -> bool {
        *self != VarType::DynamicResult
    }

    /// Whether the series is loaded from disk after the forward model
    pub fn needs_input_format(&self) -> bool {
        *self != VarType::Parameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_sizes() {
        assert_eq!(ElementType::Float.size_of(), 4);
        assert_eq!(ElementType::Double.size_of(), 8);
        assert_eq!(ElementType::default(), ElementType::Double);
    }

    #[test]
    fn test_element_type_display() {
        assert_eq!(ElementType::Float.to_string(), "FLOAT");
        assert_eq!(ElementType::Double.to_string(), "DOUBLE");
    }

    #[test]
    fn test_format_requirements_by_kind() {
        assert!(!VarType::Parameter.needs_input_format());
        assert!(VarType::Parameter.needs_output_format());
        assert!(VarType::DynamicResult.needs_input_format());
        assert!(!VarType::DynamicResult.needs_output_format());
        assert!(VarType::DynamicState.needs_input_format());
        assert!(VarType::DynamicState.needs_output_format());
    }
}
