//! Graph-local operator schema tier
//!
//! Built from the stripped operator list a MetaGraph embeds. The embedded copy
//! is minimal: argument names with their type attribute, and attribute names
//! with their declared type.

use crate::proto::{op_def, MetaInfoDef, OpDef};

use super::global::SchemaMap;
use super::types::{ArgumentSchema, AttributeSchema, OperatorSchema};

fn convert_arg(arg: &op_def::ArgDef) -> ArgumentSchema {
    ArgumentSchema {
        name: arg.name.clone(),
        type_str: Some(arg.type_attr.clone()),
        ..Default::default()
    }
}

/// Convert one embedded `OpDef` into a schema
pub fn schema_from_op_def(op: &OpDef) -> OperatorSchema {
    OperatorSchema {
        inputs: op.input_arg.iter().map(convert_arg).collect(),
        outputs: op.output_arg.iter().map(convert_arg).collect(),
        attributes: op
            .attr
            .iter()
            .map(|attr| AttributeSchema {
                name: attr.name.clone(),
                type_name: Some(attr.r#type.clone()),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Build the graph-local tier from MetaGraph metadata
pub fn build_graph_schemas(meta_info: Option<&MetaInfoDef>) -> SchemaMap {
    meta_info
        .and_then(|info| info.stripped_op_list.as_ref())
        .map(|ops| {
            ops.op
                .iter()
                .map(|op| (op.name.clone(), schema_from_op_def(op)))
                .collect()
        })
        .unwrap_or_default()
}
