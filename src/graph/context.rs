//! Graph wrapper over one decoded MetaGraph
//!
//! `Graph` is built once and is read-only afterwards. Node, attribute and
//! argument views borrow from it on demand.

use std::sync::Arc;

use crate::io::LoadOptions;
use crate::proto::{GraphDef, MetaGraphDef, MetaInfoDef, NodeDef};
use crate::schema::{GlobalSchemaTable, SchemaResolver};
use crate::tensor::Tensor;
use crate::view::Node;

use super::initializers::{build_initializer_map, InitializerEntry, InitializerMap};
use super::maps::{build_graph_maps, GraphIssue, GraphMaps, NodeLinks};

/// Prefix of the displayed framework version
pub const FRAMEWORK_NAME: &str = "TensorFlow";

/// One displayable graph
#[derive(Debug)]
pub struct Graph {
    name: String,
    meta_info: Option<MetaInfoDef>,
    nodes: Vec<NodeDef>,
    maps: GraphMaps,
    initializer_map: InitializerMap,
    resolver: SchemaResolver,
    options: Arc<LoadOptions>,
}

impl Graph {
    /// Build a graph from a MetaGraph record
    pub fn new(
        meta_graph: MetaGraphDef,
        name: impl Into<String>,
        schemas: Arc<GlobalSchemaTable>,
        options: Arc<LoadOptions>,
    ) -> Self {
        let name = name.into();
        let MetaGraphDef {
            meta_info_def,
            graph_def,
        } = meta_graph;
        let nodes = graph_def.map(|g| g.node).unwrap_or_default();

        let maps = build_graph_maps(&nodes, &options);
        let initializer_map =
            build_initializer_map(&nodes, &maps.links, options.strict_structural_checks);
        let resolver = SchemaResolver::new(schemas, meta_info_def.as_ref());

        log::debug!(
            "Built graph '{}': {} nodes, {} initializer entries, {} issues",
            name,
            nodes.len(),
            initializer_map.len(),
            maps.issues.len()
        );

        Self {
            name,
            meta_info: meta_info_def,
            nodes,
            maps,
            initializer_map,
            resolver,
            options,
        }
    }

    /// Build a graph from a bare GraphDef with default options and no global schemas
    pub fn from_graph_def(graph_def: GraphDef, name: impl Into<String>) -> Self {
        let meta_graph = MetaGraphDef {
            meta_info_def: None,
            graph_def: Some(graph_def),
        };
        Self::new(
            meta_graph,
            name,
            Arc::new(GlobalSchemaTable::new()),
            Arc::new(LoadOptions::default()),
        )
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `TensorFlow <version>` when the MetaGraph records a version
    pub fn version(&self) -> Option<String> {
        self.meta_info
            .as_ref()
            .map(|info| info.tensorflow_version.as_str())
            .filter(|version| !version.is_empty())
            .map(|version| format!("{} {}", FRAMEWORK_NAME, version))
    }

    /// Comma-joined MetaGraph tags, if any
    pub fn tags(&self) -> Option<String> {
        self.meta_info
            .as_ref()
            .filter(|info| !info.tags.is_empty())
            .map(|info| info.tags.join(", "))
    }

    /// Embedded MetaGraph metadata
    pub fn meta_info(&self) -> Option<&MetaInfoDef> {
        self.meta_info.as_ref()
    }

    /// Schema resolver for this graph
    pub fn metadata(&self) -> &SchemaResolver {
        &self.resolver
    }

    /// Options the graph was built with
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Inconsistencies noticed during construction
    pub fn issues(&self) -> &[GraphIssue] {
        &self.maps.issues
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Displayed nodes in declaration order
    ///
    /// Nodes whose `name:0` id has an initializer entry (live or tombstoned)
    /// are shown as initializers instead.
    pub fn nodes(&self) -> Vec<Node<'_>> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !self.initializer_map.contains_key(&format!("{}:0", node.name)))
            .map(|(position, _)| Node::new(self, position))
            .collect()
    }

    /// Look up a node by name, whether displayed or not
    pub fn node(&self, name: &str) -> Option<Node<'_>> {
        self.maps
            .node_index
            .get(name)
            .map(|&position| Node::new(self, position))
    }

    /// Number of node records
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Raw node records
    pub fn records(&self) -> &[NodeDef] {
        &self.nodes
    }

    pub(crate) fn record(&self, position: usize) -> &NodeDef {
        &self.nodes[position]
    }

    pub(crate) fn links(&self, position: usize) -> &NodeLinks {
        &self.maps.links[position]
    }

    // ========================================================================
    // Outputs and initializers
    // ========================================================================

    /// Number of consumer inputs referencing a canonical id
    pub fn output_ref_count(&self, id: &str) -> usize {
        self.maps.output_ref_count.get(id).copied().unwrap_or(0)
    }

    /// Live initializers, in discovery order
    pub fn initializers(&self) -> Vec<&Tensor> {
        self.initializer_map
            .values()
            .filter_map(InitializerEntry::as_live)
            .collect()
    }

    /// Live initializer at a canonical id
    pub fn initializer(&self, id: &str) -> Option<&Tensor> {
        self.initializer_map.get(id).and_then(InitializerEntry::as_live)
    }

    /// Whether a canonical id holds a tombstone
    pub fn is_tombstoned(&self, id: &str) -> bool {
        matches!(self.initializer_map.get(id), Some(InitializerEntry::Tombstone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::extensions::{make_const, make_graph, make_node};
    use crate::proto::{DataType, TensorProto};

    fn make_test_graph() -> Graph {
        let nodes = vec![
            make_node("Placeholder", &[], "x"),
            make_const("w", TensorProto::with_shape(DataType::DtFloat, &[4, 2])),
            make_node("Identity", &["w"], "w/read"),
            make_const("b", TensorProto::with_shape(DataType::DtFloat, &[2])),
            make_node("MatMul", &["x", "w/read"], "mm"),
            make_node("Add", &["mm", "b"], "add"),
        ];
        Graph::from_graph_def(make_graph(nodes), "model.pb")
    }

    fn node_names(graph: &Graph) -> Vec<&str> {
        graph.nodes().iter().map(|n| n.name()).collect()
    }

    #[test]
    fn test_nodes_exclude_initializers() {
        let graph = make_test_graph();
        assert_eq!(node_names(&graph), vec!["x", "mm", "add"]);
        assert_eq!(graph.node_count(), 6);
    }

    #[test]
    fn test_collapsed_identity() {
        let graph = make_test_graph();

        assert!(graph.is_tombstoned("w:0"));
        let tensor = graph.initializer("w/read:0").unwrap();
        assert_eq!(tensor.title(), "Constant Identity");
        assert_eq!(tensor.id(), "w/read:0");
        assert_eq!(tensor.type_name(), "float[4,2]");
    }

    #[test]
    fn test_initializers_skip_tombstones() {
        let graph = make_test_graph();

        let ids: Vec<&str> = graph.initializers().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["b:0", "w/read:0"]);
        assert_eq!(graph.initializer("b:0").unwrap().title(), "Constant");
    }

    #[test]
    fn test_output_ref_count() {
        let graph = make_test_graph();
        assert_eq!(graph.output_ref_count("w:0"), 1);
        assert_eq!(graph.output_ref_count("mm:0"), 1);
        assert_eq!(graph.output_ref_count("add:0"), 0);
    }

    #[test]
    fn test_metadata_absent_for_bare_graph() {
        let graph = make_test_graph();
        assert_eq!(graph.name(), "model.pb");
        assert!(graph.version().is_none());
        assert!(graph.tags().is_none());
        assert!(graph.issues().is_empty());
    }

    #[test]
    fn test_version_and_tags() {
        let meta_graph = MetaGraphDef {
            meta_info_def: Some(MetaInfoDef {
                tags: vec!["serve".to_string(), "gpu".to_string()],
                tensorflow_version: "1.15.0".to_string(),
                ..Default::default()
            }),
            graph_def: None,
        };
        let graph = Graph::new(
            meta_graph,
            "(0)",
            Arc::new(GlobalSchemaTable::new()),
            Arc::new(LoadOptions::default()),
        );

        assert_eq!(graph.version().as_deref(), Some("TensorFlow 1.15.0"));
        assert_eq!(graph.tags().as_deref(), Some("serve, gpu"));
        assert!(graph.nodes().is_empty());
    }

    #[test]
    fn test_node_lookup() {
        let graph = make_test_graph();
        assert_eq!(graph.node("w/read").unwrap().operator(), "Identity");
        assert!(graph.node("missing").is_none());
    }
}
