//! Extension methods for TensorFlow protobuf types
//!
//! Provides convenient helper methods for working with TensorFlow protobuf types.

use super::tensorflow::*;

// ============================================================================
// NodeDef extensions
// ============================================================================

impl NodeDef {
    /// Get attribute by name
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attr.get(name)
    }

    /// Get the embedded tensor of an attribute, if that is its populated variant
    pub fn get_attr_tensor(&self, name: &str) -> Option<&TensorProto> {
        match self.get_attr(name)?.value.as_ref()? {
            attr_value::Value::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    /// Get the data type code of an attribute, if that is its populated variant
    pub fn get_attr_type(&self, name: &str) -> Option<i32> {
        match self.get_attr(name)?.value.as_ref()? {
            attr_value::Value::Type(dtype) => Some(*dtype),
            _ => None,
        }
    }

    /// Get the shape of an attribute, if that is its populated variant
    pub fn get_attr_shape(&self, name: &str) -> Option<&TensorShapeProto> {
        match self.get_attr(name)?.value.as_ref()? {
            attr_value::Value::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    /// Check if this node has a specific operator
    pub fn is_op(&self, op: &str) -> bool {
        self.op == op
    }

    /// Builder-style attribute insertion
    pub fn with_attr(mut self, name: &str, value: AttrValue) -> Self {
        self.attr.insert(name.to_string(), value);
        self
    }
}

// ============================================================================
// AttrValue extensions
// ============================================================================

impl AttrValue {
    fn of(value: attr_value::Value) -> Self {
        Self { value: Some(value) }
    }

    /// Create an integer attribute
    pub fn int(value: i64) -> Self {
        Self::of(attr_value::Value::I(value))
    }

    /// Create a float attribute
    pub fn float(value: f32) -> Self {
        Self::of(attr_value::Value::F(value))
    }

    /// Create a boolean attribute
    pub fn bool(value: bool) -> Self {
        Self::of(attr_value::Value::B(value))
    }

    /// Create a byte-string attribute
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::of(attr_value::Value::S(value.into()))
    }

    /// Create a data type attribute
    pub fn dtype(dtype: DataType) -> Self {
        Self::of(attr_value::Value::Type(dtype as i32))
    }

    /// Create a shape attribute
    pub fn shape(shape: TensorShapeProto) -> Self {
        Self::of(attr_value::Value::Shape(shape))
    }

    /// Create an embedded tensor attribute
    pub fn tensor(tensor: TensorProto) -> Self {
        Self::of(attr_value::Value::Tensor(tensor))
    }

    /// Create a list attribute
    pub fn list(list: attr_value::ListValue) -> Self {
        Self::of(attr_value::Value::List(list))
    }

    /// Create an integer list attribute
    pub fn ints(values: Vec<i64>) -> Self {
        Self::list(attr_value::ListValue {
            i: values,
            ..Default::default()
        })
    }
}

// ============================================================================
// Shape / tensor helpers
// ============================================================================

impl TensorShapeProto {
    /// Build a shape from dimension sizes (`-1` for unknown)
    pub fn from_dims(dims: &[i64]) -> Self {
        Self {
            dim: dims
                .iter()
                .map(|&size| tensor_shape_proto::Dim {
                    size,
                    name: String::new(),
                })
                .collect(),
            unknown_rank: false,
        }
    }
}

impl TensorProto {
    /// Create tensor metadata with a data type and fixed shape
    pub fn with_shape(dtype: DataType, dims: &[i64]) -> Self {
        Self {
            dtype: dtype as i32,
            tensor_shape: Some(TensorShapeProto::from_dims(dims)),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Create a new NodeDef
pub fn make_node(op: &str, inputs: &[&str], name: &str) -> NodeDef {
    NodeDef {
        op: op.to_string(),
        input: inputs.iter().map(|s| s.to_string()).collect(),
        name: name.to_string(),
        ..Default::default()
    }
}

/// Create a `Const` node holding tensor metadata in its `value` attribute
pub fn make_const(name: &str, tensor: TensorProto) -> NodeDef {
    let dtype = AttrValue {
        value: Some(attr_value::Value::Type(tensor.dtype)),
    };
    make_node("Const", &[], name)
        .with_attr("dtype", dtype)
        .with_attr("value", AttrValue::tensor(tensor))
}

/// Create a GraphDef from nodes
pub fn make_graph(nodes: Vec<NodeDef>) -> GraphDef {
    GraphDef {
        node: nodes,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_get_attr() {
        let node = make_node("Conv2D", &["x", "w"], "conv")
            .with_attr("T", AttrValue::dtype(DataType::DtFloat));

        assert_eq!(node.get_attr_type("T"), Some(DataType::DtFloat as i32));
        assert!(node.get_attr("missing").is_none());
        assert!(node.get_attr_tensor("T").is_none());
    }

    #[test]
    fn test_make_const() {
        let node = make_const("c", TensorProto::with_shape(DataType::DtFloat, &[2, 3]));
        assert!(node.is_op("Const"));
        assert!(node.input.is_empty());

        let tensor = node.get_attr_tensor("value").unwrap();
        assert_eq!(tensor.tensor_shape.as_ref().unwrap().dim.len(), 2);
    }

    #[test]
    fn test_make_node() {
        let node = make_node("MatMul", &["a", "b:1"], "mm");
        assert_eq!(node.op, "MatMul");
        assert_eq!(node.input, vec!["a", "b:1"]);
    }
}
