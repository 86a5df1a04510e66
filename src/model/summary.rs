//! Front-end summary of a model

use serde::Serialize;

use crate::graph::GraphArgument;

use super::Model;

/// Name/value pair shown in the model properties pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Property value
    pub value: String,
}

/// Per-graph summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Graph display name
    pub name: String,
    /// `TensorFlow <version>`, if recorded
    pub version: Option<String>,
    /// Comma-joined tags, if any
    pub tags: Option<String>,
    /// Graph inputs
    pub inputs: Vec<GraphArgument>,
    /// Graph outputs
    pub outputs: Vec<GraphArgument>,
}

/// `{ properties, graphs }` summary consumed by the visualization layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    /// Model-level properties
    pub properties: Vec<Property>,
    /// One entry per graph
    pub graphs: Vec<GraphSummary>,
}

impl ModelSummary {
    /// Build the summary of a model
    pub fn from_model(model: &Model) -> Self {
        let properties = vec![Property {
            name: "Format".to_string(),
            value: model.format_label(),
        }];
        let graphs = model
            .graphs()
            .iter()
            .map(|graph| GraphSummary {
                name: graph.name().to_string(),
                version: graph.version(),
                tags: graph.tags(),
                inputs: graph.inputs(),
                outputs: graph.outputs(),
            })
            .collect();

        Self { properties, graphs }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::model::ModelFormat;
    use crate::proto::extensions::{make_graph, make_node};

    #[test]
    fn test_summary_shape() {
        let graph = Graph::from_graph_def(
            make_graph(vec![
                make_node("Placeholder", &[], "input"),
                make_node("Relu", &["input"], "relu"),
            ]),
            "frozen.pb",
        );
        let model = Model::new(ModelFormat::GraphDef, vec![graph]);
        let summary = model.summary();

        assert_eq!(summary.properties[0].name, "Format");
        assert_eq!(summary.properties[0].value, "TensorFlow Graph Definition");
        assert_eq!(summary.graphs.len(), 1);
        assert_eq!(summary.graphs[0].name, "frozen.pb");
        assert_eq!(summary.graphs[0].inputs[0].name, "input");
        assert_eq!(summary.graphs[0].outputs[0].name, "relu");

        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(json["graphs"][0]["version"], serde_json::Value::Null);
        assert_eq!(json["graphs"][0]["inputs"][0]["type"], "");
    }
}
