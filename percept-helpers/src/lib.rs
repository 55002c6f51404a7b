use ndarray::{NdFloat, ScalarOperand};

use num_traits::{FromPrimitive, Signed};

use std::iter::Sum;

// Include submodules
mod common;
mod label;
pub mod synthetic;

// Re-export types from submodules
pub use common::{split_data_points, DataPoint};
pub use label::{BinaryLabel, LabelError};

/// Numeric bound shared by every algorithm in the workspace.
pub trait Float: NdFloat + FromPrimitive + Default + Signed + Sum + ScalarOperand {}

impl Float for f32 {}

impl Float for f64 {}
