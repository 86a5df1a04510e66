//! Graph-level arguments
//!
//! Graph inputs are the `Placeholder` nodes; graph outputs are displayed nodes
//! nothing consumes.

use serde::Serialize;

use crate::tensor::{format_data_type, format_tensor_shape};

use super::context::Graph;

/// Operator of graph input nodes
pub const PLACEHOLDER_OP: &str = "Placeholder";

/// A graph input or output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphArgument {
    /// Node name
    pub name: String,
    /// Formatted type, empty when unknown
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Graph {
    /// Graph inputs, typed from each placeholder's `dtype` and `shape` attributes
    pub fn inputs(&self) -> Vec<GraphArgument> {
        self.records()
            .iter()
            .filter(|node| node.is_op(PLACEHOLDER_OP))
            .map(|node| {
                let mut type_name = node
                    .get_attr_type("dtype")
                    .map(|dtype| format_data_type(dtype).to_string())
                    .unwrap_or_default();
                if let Some(shape) = node.get_attr_shape("shape") {
                    type_name.push_str(&format_tensor_shape(shape));
                }
                GraphArgument {
                    name: node.name.clone(),
                    type_name,
                }
            })
            .collect()
    }

    /// Displayed nodes whose outputs nothing consumes
    pub fn outputs(&self) -> Vec<GraphArgument> {
        self.nodes()
            .into_iter()
            .filter(|node| node.output_ids().is_empty())
            .map(|node| GraphArgument {
                name: node.name().to_string(),
                type_name: String::new(),
            })
            .collect()
    }
}
