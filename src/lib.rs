//! # TensorFlow Graph Viewer
//!
//! Graph construction and reference resolution for TensorFlow models, for use
//! behind a visualization front-end.
//!
//! This crate decodes `SavedModel` containers and bare `GraphDef`s and turns
//! their node records into a consistent, read-only graph.
//!
//! ## Features
//!
//! - **Reference resolution**: textual `name:slot` / `^name` inputs become
//!   canonical ids, and producers get their output slots reconstructed
//! - **Initializers**: constant nodes, and identities reading them, are shown as
//!   initializer tensors instead of graph nodes
//! - **Schema lookup**: argument names and attribute types come from a shared
//!   operator schema resource, then from the operator list embedded in the
//!   model, then fall back to positional `(i)` names
//!
//! ## Example
//!
//! ```ignore
//! use tfgraph_viewer::prelude::*;
//!
//! let model = load_model("saved_model.pb", &ModelLoader::default())?;
//! let graph = model.active_graph().unwrap();
//! for node in graph.nodes() {
//!     println!("{} = {}({:?})", node.name(), node.operator(), node.input_ids().collect::<Vec<_>>());
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// ============================================================================
// Module declarations
// ============================================================================

pub mod error;
pub mod graph;
pub mod io;
pub mod model;
pub mod proto;
pub mod schema;
pub mod tensor;
pub mod view;

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module - import commonly used types with `use tfgraph_viewer::prelude::*`
pub mod prelude {
    pub use crate::error::{ViewError, ViewResult};
    pub use crate::graph::{Graph, GraphArgument, GraphIssue};
    pub use crate::io::{load_model, LoadOptions, ModelLoader};
    pub use crate::model::{Model, ModelFormat, ModelSummary};
    pub use crate::schema::{FileSchemaSource, GlobalSchemaTable, SchemaSource, StaticSchemaSource};
    pub use crate::tensor::Tensor;
    pub use crate::view::{Argument, Attribute, Node};
}

// ============================================================================
// Crate-level re-exports
// ============================================================================

pub use error::{ViewError, ViewResult};
pub use io::ModelLoader;
pub use model::Model;

// ============================================================================
// Version information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
