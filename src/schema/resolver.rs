//! Two-tier schema resolution
//!
//! Every lookup tries the global tier first, then the graph-local tier. When
//! neither knows the operator (or the argument position), callers get the
//! positional placeholder `"(<index>)"`.

use std::sync::Arc;

use crate::proto::MetaInfoDef;

use super::global::{GlobalSchemaTable, SchemaMap};
use super::local::build_graph_schemas;
use super::types::{ArgumentSchema, OperatorSchema};

/// Placeholder name for an argument at `index`
pub fn positional_name(index: usize) -> String {
    format!("({})", index)
}

/// Per-graph schema resolver
#[derive(Debug)]
pub struct SchemaResolver {
    global: Arc<GlobalSchemaTable>,
    local: SchemaMap,
}

impl SchemaResolver {
    /// Create a resolver over the shared global tier and a graph's embedded metadata
    pub fn new(global: Arc<GlobalSchemaTable>, meta_info: Option<&MetaInfoDef>) -> Self {
        Self {
            global,
            local: build_graph_schemas(meta_info),
        }
    }

    /// Schema for an operator, if either tier has one
    pub fn get_schema(&self, operator: &str) -> Option<&OperatorSchema> {
        self.global
            .get(operator)
            .or_else(|| self.local.get(operator))
    }

    /// Number of operators in the graph-local tier
    pub fn local_len(&self) -> usize {
        self.local.len()
    }

    fn arg_name(args: Option<&[ArgumentSchema]>, index: usize) -> String {
        args.and_then(|args| args.get(index))
            .map(|arg| arg.name.as_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| positional_name(index))
    }

    /// Display name of an operator's input at `index`
    pub fn get_input_name(&self, operator: &str, index: usize) -> String {
        Self::arg_name(self.get_schema(operator).map(|s| s.inputs.as_slice()), index)
    }

    /// Display name of an operator's output at `index`
    pub fn get_output_name(&self, operator: &str, index: usize) -> String {
        Self::arg_name(self.get_schema(operator).map(|s| s.outputs.as_slice()), index)
    }

    /// Declared type string of an operator's attribute
    pub fn get_attribute_type(&self, operator: &str, name: &str) -> Option<&str> {
        self.get_schema(operator)?
            .attributes
            .iter()
            .find(|attr| attr.name == name)
            .and_then(|attr| attr.type_name.as_deref())
    }

    /// Raw schema for documentation rendering, with its name filled in
    pub fn operator_documentation(&self, operator: &str) -> Option<OperatorSchema> {
        let mut schema = self.get_schema(operator)?.clone();
        schema.name = Some(operator.to_string());
        Some(schema)
    }
}
