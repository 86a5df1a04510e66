//! Graph construction for TensorFlow models
//!
//! This module turns decoded node records into a consistent, queryable graph:
//!
//! - [`maps`]: node index, canonical input resolution, output-slot
//!   reconstruction and reference counts
//! - [`initializers`]: constant discovery and `Const → Identity` collapsing
//! - [`Graph`]: the read-only result
//!
//! # Example
//!
//! ```ignore
//! use tfgraph_viewer::graph::Graph;
//!
//! let graph = Graph::from_graph_def(graph_def, "frozen.pb");
//!
//! for node in graph.nodes() {
//!     println!("{} ({})", node.name(), node.operator());
//! }
//! for tensor in graph.initializers() {
//!     println!("{}: {}", tensor.id(), tensor.type_name());
//! }
//! ```
//!
//! # Maps
//!
//! | Map | Description |
//! |-----|-------------|
//! | `node_index` | node name → record position |
//! | `links` | record position → canonical inputs and output slots |
//! | `output_ref_count` | canonical id → consumer count |
//! | `initializer_map` | canonical id → live tensor or tombstone |

pub mod accessors;
pub mod context;
pub mod initializers;
pub mod maps;

// Re-export main types
pub use accessors::{GraphArgument, PLACEHOLDER_OP};
pub use context::{Graph, FRAMEWORK_NAME};
pub use initializers::{
    build_initializer_map, check_node, collapse_identities, collect_constants, InitializerEntry,
    InitializerMap, CONST_OP, IDENTITY_OP, VALUE_ATTR,
};
pub use maps::{
    build_graph_maps, build_node_index, build_output_ref_count, resolve_links, GraphIssue,
    GraphMaps, InputRef, NodeIndex, NodeLinks, OutputRefCount, OutputSlots, ResolvedInput,
};
