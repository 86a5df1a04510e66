//! Model loading
//!
//! [`ModelLoader`] is the entry point: it owns the load options and the global
//! schema tier, picks the container format from the identifier, and builds one
//! [`Graph`] per decoded MetaGraph.
//!
//! # Example
//!
//! ```ignore
//! use tfgraph_viewer::io::ModelLoader;
//! use tfgraph_viewer::schema::FileSchemaSource;
//!
//! let mut loader = ModelLoader::new(Default::default())
//!     .with_schema_source(FileSchemaSource::new("tf-operator.json"));
//!
//! let bytes = std::fs::read("saved_model.pb")?;
//! let model = loader.open_buffer(&bytes, "saved_model.pb")?;
//! println!("{}", model.format_label());
//! ```

pub mod options;
pub mod reader;

// Re-exports
pub use options::LoadOptions;
pub use reader::{decode_graph_def, decode_saved_model, read_model_bytes};

use std::path::Path;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::error::ViewResult;
use crate::graph::Graph;
use crate::model::{Model, ModelFormat};
use crate::proto::MetaGraphDef;
use crate::schema::{positional_name, GlobalSchemaTable, SchemaMap, SchemaSource};

/// Decodes model buffers into [`Model`]s
#[derive(Debug)]
pub struct ModelLoader {
    options: Arc<LoadOptions>,
    schemas: Arc<GlobalSchemaTable>,
    schema_fetch: Option<JoinHandle<()>>,
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new(LoadOptions::default())
    }
}

impl ModelLoader {
    /// Create a loader with an empty global schema tier
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options: Arc::new(options),
            schemas: Arc::new(GlobalSchemaTable::new()),
            schema_fetch: None,
        }
    }

    /// Start fetching the global schema tier in the background
    ///
    /// Loading does not wait for the fetch; graphs built before it completes
    /// resolve names from their embedded operator list or positionally.
    pub fn with_schema_source<S>(mut self, source: S) -> Self
    where
        S: SchemaSource + Send + 'static,
    {
        self.schema_fetch = Some(self.schemas.spawn_load(Box::new(source)));
        self
    }

    /// Use an already parsed global schema tier
    pub fn with_schemas(mut self, schemas: SchemaMap) -> Self {
        self.schemas = Arc::new(GlobalSchemaTable::with_schemas(schemas));
        self.schema_fetch = None;
        self
    }

    /// Shared global schema tier
    pub fn schemas(&self) -> &Arc<GlobalSchemaTable> {
        &self.schemas
    }

    /// Load options
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Block until a pending schema fetch has finished
    pub fn wait_for_schemas(&mut self) {
        if let Some(handle) = self.schema_fetch.take() {
            if handle.join().is_err() {
                log::warn!("Operator schema fetch thread panicked");
            }
        }
    }

    /// Whether the identifier names a SavedModel container
    pub fn is_saved_model(&self, identifier: &str) -> bool {
        let file_name = Path::new(identifier)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(identifier);
        file_name == self.options.saved_model_file_name
    }

    /// Decode a buffer into a model
    ///
    /// The identifier selects the container format and names the graph of a
    /// bare GraphDef.
    pub fn open_buffer(&self, bytes: &[u8], identifier: &str) -> ViewResult<Model> {
        if self.is_saved_model(identifier) {
            let saved = decode_saved_model(bytes)?;
            let format = ModelFormat::SavedModel {
                schema_version: saved.saved_model_schema_version,
            };
            let graphs: Vec<Graph> = saved
                .meta_graphs
                .into_iter()
                .enumerate()
                .map(|(index, meta_graph)| self.build_graph(meta_graph, positional_name(index)))
                .collect();

            log::info!("Loaded '{}': {} with {} graphs", identifier, format.label(), graphs.len());
            Ok(Model::new(format, graphs))
        } else {
            let graph_def = decode_graph_def(bytes)?;
            let meta_graph = MetaGraphDef {
                meta_info_def: None,
                graph_def: Some(graph_def),
            };
            let graph = self.build_graph(meta_graph, identifier.to_string());

            log::info!("Loaded '{}': {} nodes", identifier, graph.node_count());
            Ok(Model::new(ModelFormat::GraphDef, vec![graph]))
        }
    }

    /// Read and decode a model file; its file name is the identifier
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> ViewResult<Model> {
        let path = path.as_ref();
        let bytes = read_model_bytes(path)?;
        let identifier = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.open_buffer(&bytes, &identifier)
    }

    fn build_graph(&self, meta_graph: MetaGraphDef, name: String) -> Graph {
        Graph::new(
            meta_graph,
            name,
            Arc::clone(&self.schemas),
            Arc::clone(&self.options),
        )
    }
}

/// Load a model file with the given loader
///
/// # Example
///
/// ```ignore
/// use tfgraph_viewer::io::{load_model, ModelLoader};
///
/// let model = load_model("frozen_graph.pb", &ModelLoader::default())?;
/// println!("{} graphs", model.graphs().len());
/// ```
pub fn load_model<P: AsRef<Path>>(path: P, loader: &ModelLoader) -> ViewResult<Model> {
    loader.load_file(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use prost::Message;

    use super::*;
    use crate::error::ViewError;
    use crate::proto::extensions::{make_const, make_graph, make_node};
    use crate::proto::{op_def, DataType, MetaInfoDef, OpDef, OpList, SavedModel, TensorProto};
    use crate::schema::StaticSchemaSource;

    fn make_meta_graph(tag: &str) -> MetaGraphDef {
        let nodes = vec![
            make_node("Placeholder", &[], "x"),
            make_const("c", TensorProto::with_shape(DataType::DtFloat, &[1])),
            make_node("Mul", &["x", "c"], "y"),
        ];
        let arg = |name: &str| op_def::ArgDef {
            name: name.to_string(),
            ..Default::default()
        };
        MetaGraphDef {
            meta_info_def: Some(MetaInfoDef {
                tags: vec![tag.to_string()],
                tensorflow_version: "1.12.0".to_string(),
                stripped_op_list: Some(OpList {
                    op: vec![OpDef {
                        name: "Mul".to_string(),
                        input_arg: vec![arg("x"), arg("y")],
                        output_arg: vec![arg("z")],
                        ..Default::default()
                    }],
                }),
                ..Default::default()
            }),
            graph_def: Some(make_graph(nodes)),
        }
    }

    fn make_saved_model(schema_version: i64) -> Vec<u8> {
        SavedModel {
            saved_model_schema_version: schema_version,
            meta_graphs: vec![make_meta_graph("serve"), make_meta_graph("train")],
        }
        .encode_to_vec()
    }

    #[test]
    fn test_open_saved_model() {
        let loader = ModelLoader::default();
        let model = loader
            .open_buffer(&make_saved_model(1), "saved_model.pb")
            .unwrap();

        assert_eq!(model.format_label(), "TensorFlow Saved Model v1");
        assert_eq!(model.graphs().len(), 2);
        let names: Vec<&str> = model.graphs().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["(0)", "(1)"]);

        let active = model.active_graph().unwrap();
        assert_eq!(active.name(), "(0)");
        assert_eq!(active.tags().as_deref(), Some("serve"));
        assert_eq!(active.version().as_deref(), Some("TensorFlow 1.12.0"));

        let y = active.node("y").unwrap();
        let inputs = y.inputs();
        assert_eq!(inputs[0].name, "x");
        assert_eq!(inputs[1].name, "y");
        assert_eq!(inputs[1].type_name, "float[1]");
        assert_eq!(y.outputs().len(), 0);
    }

    #[test]
    fn test_saved_model_identifier_is_a_path() {
        let loader = ModelLoader::default();
        assert!(loader.is_saved_model("exports/1/saved_model.pb"));
        assert!(!loader.is_saved_model("frozen_graph.pb"));
    }

    #[test]
    fn test_unversioned_saved_model() {
        let model = ModelLoader::default()
            .open_buffer(&make_saved_model(0), "saved_model.pb")
            .unwrap();
        assert_eq!(model.format_label(), "TensorFlow Saved Model");
    }

    #[test]
    fn test_open_graph_def() {
        let bytes = make_meta_graph("serve").graph_def.unwrap().encode_to_vec();
        let model = ModelLoader::default()
            .open_buffer(&bytes, "frozen_graph.pb")
            .unwrap();

        assert_eq!(model.format_label(), "TensorFlow Graph Definition");
        assert_eq!(model.graphs().len(), 1);
        let graph = model.active_graph().unwrap();
        assert_eq!(graph.name(), "frozen_graph.pb");
        assert!(graph.tags().is_none());
        assert_eq!(graph.node("y").unwrap().inputs()[0].name, "(0)");
    }

    #[test]
    fn test_open_invalid_buffer() {
        let loader = ModelLoader::default();
        let err = loader.open_buffer(&[0x0a, 0xff], "saved_model.pb").unwrap_err();
        assert!(matches!(err, ViewError::Decode { record: "SavedModel", .. }));
    }

    #[test]
    fn test_global_schemas_take_precedence() {
        let schemas = r#"[{"name": "Mul", "schema": {"inputs": [{"name": "lhs"}, {"name": "rhs"}]}}]"#;
        let mut loader =
            ModelLoader::default().with_schema_source(StaticSchemaSource::new(schemas));
        loader.wait_for_schemas();
        assert_eq!(loader.schemas().len(), 1);

        let model = loader
            .open_buffer(&make_saved_model(1), "saved_model.pb")
            .unwrap();
        let inputs = model.active_graph().unwrap().node("y").unwrap().inputs();
        assert_eq!(inputs[0].name, "lhs");
        assert_eq!(inputs[1].name, "rhs");
    }

    #[test]
    fn test_failed_schema_fetch_degrades() {
        let mut loader =
            ModelLoader::default().with_schema_source(StaticSchemaSource::new("not json"));
        loader.wait_for_schemas();
        assert!(loader.schemas().is_ready());
        assert!(loader.schemas().is_empty());

        let model = loader
            .open_buffer(&make_saved_model(1), "saved_model.pb")
            .unwrap();
        let inputs = model.active_graph().unwrap().node("y").unwrap().inputs();
        assert_eq!(inputs[0].name, "x");
    }

    #[test]
    fn test_load_model_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved_model.pb");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&make_saved_model(1)).unwrap();

        let model = load_model(&path, &ModelLoader::default()).unwrap();
        assert_eq!(model.graphs().len(), 2);
    }
}
