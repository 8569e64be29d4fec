//! Builders for raw test inputs.

/// Fluent instruction word encoder.
pub mod instruction;
