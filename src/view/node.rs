//! Node view

use serde::Serialize;

use crate::graph::{Graph, NodeLinks, CONST_OP};
use crate::proto::NodeDef;
use crate::schema::OperatorSchema;

use super::attribute::Attribute;

/// A named, typed connection of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    /// Canonical `producer:slot` id, `""` for an unreferenced output slot
    pub id: String,
    /// Schema name, or the positional `(index)` placeholder
    pub name: String,
    /// Formatted type when known, otherwise `""`
    #[serde(rename = "type")]
    pub type_name: String,
}

/// View over one node record
#[derive(Debug, Clone, Copy)]
pub struct Node<'g> {
    graph: &'g Graph,
    position: usize,
}

impl<'g> Node<'g> {
    pub(crate) fn new(graph: &'g Graph, position: usize) -> Self {
        Self { graph, position }
    }

    fn record(&self) -> &'g NodeDef {
        self.graph.record(self.position)
    }

    fn links(&self) -> &'g NodeLinks {
        self.graph.links(self.position)
    }

    /// Operator name
    pub fn operator(&self) -> &'g str {
        &self.record().op
    }

    /// Node name
    pub fn name(&self) -> &'g str {
        &self.record().name
    }

    /// Placement string, if recorded
    pub fn device(&self) -> Option<&'g str> {
        Some(self.record().device.as_str()).filter(|device| !device.is_empty())
    }

    /// Whether the node is a constant
    pub fn constant(&self) -> bool {
        self.record().is_op(CONST_OP)
    }

    /// Operator schema for documentation rendering
    pub fn documentation(&self) -> Option<OperatorSchema> {
        self.graph.metadata().operator_documentation(self.operator())
    }

    /// Canonical input ids in declaration order
    pub fn input_ids(&self) -> impl Iterator<Item = &'g str> + 'g {
        self.links().inputs.iter().map(|input| input.id.as_str())
    }

    /// Reconstructed output slots; unreferenced slots are `""`
    pub fn output_ids(&self) -> &'g [String] {
        &self.links().outputs
    }

    /// Whether the input at `index` is a control dependency
    pub fn is_control_input(&self, index: usize) -> bool {
        self.links()
            .inputs
            .get(index)
            .is_some_and(|input| input.control)
    }

    /// Inputs with schema names, typed when they read an initializer
    pub fn inputs(&self) -> Vec<Argument> {
        let metadata = self.graph.metadata();
        let operator = self.operator();
        self.links()
            .inputs
            .iter()
            .enumerate()
            .map(|(index, input)| Argument {
                id: input.id.clone(),
                name: metadata.get_input_name(operator, index),
                type_name: self
                    .graph
                    .initializer(&input.id)
                    .map(|tensor| tensor.type_name())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Outputs with schema names, one per reconstructed slot
    pub fn outputs(&self) -> Vec<Argument> {
        let metadata = self.graph.metadata();
        let operator = self.operator();
        self.output_ids()
            .iter()
            .enumerate()
            .map(|(index, id)| Argument {
                id: id.clone(),
                name: metadata.get_output_name(operator, index),
                type_name: String::new(),
            })
            .collect()
    }

    /// Displayed attributes, in name order
    pub fn attributes(&self) -> Vec<Attribute<'g>> {
        let graph = self.graph;
        let operator = self.operator();
        self.record()
            .attr
            .iter()
            .filter(|(name, _)| !graph.options().is_hidden_attribute(name))
            .map(|(name, value)| Attribute::new(graph, operator, name, value))
            .collect()
    }
}
