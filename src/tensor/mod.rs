//! Tensor metadata for TensorFlow graphs
//!
//! This module provides:
//! - Data type names (`dtype`)
//! - Shape and tensor type formatting (`shape`)
//! - The initializer entity shown for collapsed constants (`initializer`)
//!
//! # Example
//!
//! ```ignore
//! use tfgraph_viewer::tensor::{format_data_type, format_tensor_shape};
//!
//! assert_eq!(format_data_type(1), "float");
//! let shape = TensorShapeProto::from_dims(&[3, -1]);
//! assert_eq!(format_tensor_shape(&shape), "[3,?]");
//! ```

pub mod dtype;
pub mod initializer;
pub mod shape;

// Re-export commonly used items
pub use dtype::{format_data_type, i32_to_dtype, is_ref_type, UNKNOWN_TYPE};
pub use initializer::{Tensor, CONSTANT_IDENTITY_TITLE, CONSTANT_TITLE};
pub use shape::{dims, format_dim, format_tensor_shape, format_tensor_type};
