//! TensorFlow Protocol Buffer types
//!
//! The record shapes the viewer decodes with `prost`. Additional extension
//! methods are provided in the `extensions` submodule.

pub mod tensorflow;

// Re-export commonly used types at module level
pub use tensorflow::{
    AttrValue, DataType, GraphDef, MetaGraphDef, MetaInfoDef, NameAttrList, NodeDef, OpDef,
    OpList, SavedModel, TensorProto, TensorShapeProto, VersionDef,
};

// Re-export submodules for nested types
pub use tensorflow::attr_value;
pub use tensorflow::op_def;
pub use tensorflow::tensor_shape_proto;

/// Extension methods for TensorFlow protobuf types
pub mod extensions;

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_node_def_default() {
        let node = NodeDef::default();
        assert!(node.input.is_empty());
        assert!(node.attr.is_empty());
    }

    #[test]
    fn test_saved_model_roundtrip() {
        let saved = SavedModel {
            saved_model_schema_version: 1,
            meta_graphs: vec![MetaGraphDef {
                graph_def: Some(GraphDef {
                    node: vec![extensions::make_node("Relu", &["x"], "relu")],
                    ..Default::default()
                }),
                ..Default::default()
            }],
        };

        let decoded = SavedModel::decode(saved.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, saved);
    }

    #[test]
    fn test_data_type_table_is_complete() {
        for dtype in DataType::ALL {
            assert_eq!(DataType::try_from(*dtype as i32).ok(), Some(*dtype));
        }
    }
}
