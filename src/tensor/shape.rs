//! Shape and tensor type formatting
//!
//! Dimensions without a known positive extent (`-1`, or unset) render as `?`.

use crate::proto::{TensorProto, TensorShapeProto};

use super::dtype::{format_data_type, UNKNOWN_TYPE};

/// Format one dimension size
pub fn format_dim(size: i64) -> String {
    if size > 0 {
        size.to_string()
    } else {
        "?".to_string()
    }
}

/// Format a shape as a bracketed, comma-separated dimension list, e.g. `[3,?]`
///
/// A shape of unknown rank renders as `?`.
pub fn format_tensor_shape(shape: &TensorShapeProto) -> String {
    if shape.unknown_rank {
        return UNKNOWN_TYPE.to_string();
    }
    let dims: Vec<String> = shape.dim.iter().map(|d| format_dim(d.size)).collect();
    format!("[{}]", dims.join(","))
}

/// Format a tensor's type as data type name followed by its shape, e.g. `float[2,3]`
///
/// Tensors without a data type render as `?`.
pub fn format_tensor_type(tensor: &TensorProto) -> String {
    if tensor.dtype == 0 {
        return UNKNOWN_TYPE.to_string();
    }
    let mut text = format_data_type(tensor.dtype).to_string();
    if let Some(shape) = &tensor.tensor_shape {
        text.push_str(&format_tensor_shape(shape));
    }
    text
}

/// Extract dimension sizes from a shape
pub fn dims(shape: &TensorShapeProto) -> Vec<i64> {
    shape.dim.iter().map(|d| d.size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::tensor_shape_proto::Dim;
    use crate::proto::DataType;

    #[test]
    fn test_format_tensor_shape() {
        let shape = TensorShapeProto {
            dim: vec![
                Dim {
                    size: 3,
                    ..Default::default()
                },
                Dim::default(),
            ],
            unknown_rank: false,
        };
        assert_eq!(format_tensor_shape(&shape), "[3,?]");
    }

    #[test]
    fn test_format_dynamic_dim() {
        let shape = TensorShapeProto::from_dims(&[-1, 224, 224, 3]);
        assert_eq!(format_tensor_shape(&shape), "[?,224,224,3]");
        assert_eq!(dims(&shape), vec![-1, 224, 224, 3]);
    }

    #[test]
    fn test_format_scalar_and_unknown_rank() {
        assert_eq!(format_tensor_shape(&TensorShapeProto::default()), "[]");

        let shape = TensorShapeProto {
            unknown_rank: true,
            ..Default::default()
        };
        assert_eq!(format_tensor_shape(&shape), "?");
    }

    #[test]
    fn test_format_tensor_type() {
        let tensor = TensorProto::with_shape(DataType::DtFloat, &[2, 3]);
        assert_eq!(format_tensor_type(&tensor), "float[2,3]");

        let untyped = TensorProto::default();
        assert_eq!(format_tensor_type(&untyped), "?");

        let shapeless = TensorProto {
            dtype: DataType::DtInt32 as i32,
            tensor_shape: None,
        };
        assert_eq!(format_tensor_type(&shapeless), "int32");
    }
}
