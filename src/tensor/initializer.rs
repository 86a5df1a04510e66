//! Initializer tensor entity
//!
//! A constant extracted from a `Const` node's `value` attribute. Only the
//! payload's metadata (dtype and shape) is kept for display.

use crate::proto::{TensorProto, TensorShapeProto};

use super::shape::format_tensor_type;

/// Title of an initializer taken straight from a `Const` node
pub const CONSTANT_TITLE: &str = "Constant";

/// Title of an initializer folded through an `Identity` node
pub const CONSTANT_IDENTITY_TITLE: &str = "Constant Identity";

/// Constant initializer shown as a standalone tensor
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    id: String,
    name: String,
    title: &'static str,
    payload: TensorProto,
}

impl Tensor {
    /// Create an initializer for a `Const` node's sole output id
    pub fn constant(payload: TensorProto, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            title: CONSTANT_TITLE,
            payload,
        }
    }

    /// Re-key this initializer onto an `Identity` node's output
    pub(crate) fn relocate(&mut self, id: impl Into<String>) {
        self.id = id.into();
        self.title = CONSTANT_IDENTITY_TITLE;
    }

    /// Canonical output id this initializer currently stands for
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title, `Constant` or `Constant Identity`
    pub fn title(&self) -> &str {
        self.title
    }

    /// Formatted type, e.g. `float[2,3]`
    pub fn type_name(&self) -> String {
        format_tensor_type(&self.payload)
    }

    /// Raw data type code
    pub fn dtype(&self) -> i32 {
        self.payload.dtype
    }

    /// Declared shape, if any
    pub fn shape(&self) -> Option<&TensorShapeProto> {
        self.payload.tensor_shape.as_ref()
    }

    /// Underlying tensor metadata
    pub fn payload(&self) -> &TensorProto {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::DataType;

    #[test]
    fn test_constant_tensor() {
        let tensor = Tensor::constant(TensorProto::with_shape(DataType::DtFloat, &[4]), "w:0");
        assert_eq!(tensor.id(), "w:0");
        assert_eq!(tensor.name(), "w:0");
        assert_eq!(tensor.title(), "Constant");
        assert_eq!(tensor.type_name(), "float[4]");
    }

    #[test]
    fn test_relocate_keeps_name_and_payload() {
        let mut tensor = Tensor::constant(TensorProto::with_shape(DataType::DtInt32, &[]), "c:0");
        tensor.relocate("c/read:0");

        assert_eq!(tensor.id(), "c/read:0");
        assert_eq!(tensor.name(), "c:0");
        assert_eq!(tensor.title(), "Constant Identity");
        assert_eq!(tensor.type_name(), "int32[]");
    }
}
