//! Loaded model: its graphs and the active-graph selection

pub mod summary;

pub use summary::{GraphSummary, ModelSummary, Property};

use crate::graph::Graph;

/// Format label of a SavedModel container
pub const SAVED_MODEL_FORMAT: &str = "TensorFlow Saved Model";

/// Format label of a bare GraphDef
pub const GRAPH_DEF_FORMAT: &str = "TensorFlow Graph Definition";

/// Container format a model was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// `SavedModel` with its schema version (0 when unset)
    SavedModel {
        /// `saved_model_schema_version`
        schema_version: i64,
    },
    /// Bare `GraphDef`
    GraphDef,
}

impl ModelFormat {
    /// Display label, e.g. `TensorFlow Saved Model v1`
    pub fn label(&self) -> String {
        match self {
            Self::SavedModel { schema_version: 0 } => SAVED_MODEL_FORMAT.to_string(),
            Self::SavedModel { schema_version } => {
                format!("{} v{}", SAVED_MODEL_FORMAT, schema_version)
            }
            Self::GraphDef => GRAPH_DEF_FORMAT.to_string(),
        }
    }
}

/// A decoded model
#[derive(Debug)]
pub struct Model {
    format: ModelFormat,
    graphs: Vec<Graph>,
    active: Option<usize>,
}

impl Model {
    /// Wrap built graphs; the first one starts active
    pub fn new(format: ModelFormat, graphs: Vec<Graph>) -> Self {
        let active = if graphs.is_empty() { None } else { Some(0) };
        Self {
            format,
            graphs,
            active,
        }
    }

    /// Container format
    pub fn format(&self) -> ModelFormat {
        self.format
    }

    /// Display label of the container format
    pub fn format_label(&self) -> String {
        self.format.label()
    }

    /// All graphs in container order
    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    /// Graph by display name
    pub fn graph(&self, name: &str) -> Option<&Graph> {
        self.graphs.iter().find(|graph| graph.name() == name)
    }

    /// Currently selected graph, `None` for a model without graphs
    pub fn active_graph(&self) -> Option<&Graph> {
        self.active.map(|index| &self.graphs[index])
    }

    /// Select the graph with this name
    ///
    /// When several graphs share the name the last one wins. An unknown name
    /// leaves the selection unchanged.
    pub fn update_active_graph(&mut self, name: &str) {
        if let Some(index) = self.graphs.iter().rposition(|graph| graph.name() == name) {
            self.active = Some(index);
        }
    }

    /// Summary handed to the front-end
    pub fn summary(&self) -> ModelSummary {
        ModelSummary::from_model(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::extensions::{make_graph, make_node};

    fn make_graph_named(name: &str) -> Graph {
        Graph::from_graph_def(make_graph(vec![make_node("NoOp", &[], "noop")]), name)
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(
            ModelFormat::SavedModel { schema_version: 1 }.label(),
            "TensorFlow Saved Model v1"
        );
        assert_eq!(
            ModelFormat::SavedModel { schema_version: 0 }.label(),
            "TensorFlow Saved Model"
        );
        assert_eq!(ModelFormat::GraphDef.label(), "TensorFlow Graph Definition");
    }

    #[test]
    fn test_active_graph_defaults_to_first() {
        let model = Model::new(
            ModelFormat::SavedModel { schema_version: 1 },
            vec![make_graph_named("(0)"), make_graph_named("(1)")],
        );
        assert_eq!(model.active_graph().unwrap().name(), "(0)");
        assert_eq!(model.graph("(1)").unwrap().name(), "(1)");
        assert!(model.graph("(2)").is_none());
    }

    #[test]
    fn test_update_active_graph() {
        let mut model = Model::new(
            ModelFormat::SavedModel { schema_version: 1 },
            vec![make_graph_named("(0)"), make_graph_named("(1)")],
        );

        model.update_active_graph("(1)");
        assert_eq!(model.active_graph().unwrap().name(), "(1)");

        model.update_active_graph("missing");
        assert_eq!(model.active_graph().unwrap().name(), "(1)");
    }

    #[test]
    fn test_duplicate_names_select_last() {
        let mut model = Model::new(
            ModelFormat::GraphDef,
            vec![make_graph_named("g"), make_graph_named("g")],
        );
        model.update_active_graph("g");
        assert!(std::ptr::eq(model.active_graph().unwrap(), &model.graphs()[1]));
    }

    #[test]
    fn test_empty_model() {
        let mut model = Model::new(ModelFormat::SavedModel { schema_version: 0 }, Vec::new());
        assert!(model.active_graph().is_none());
        model.update_active_graph("(0)");
        assert!(model.active_graph().is_none());
    }
}
