//! Operator schema lookup
//!
//! Two tiers are consulted, in order:
//!
//! 1. [`GlobalSchemaTable`]: populated once per loader from an external JSON
//!    resource (`[{name, schema}]`), shared by every graph.
//! 2. The graph-local tier: derived from the stripped operator list embedded
//!    in each MetaGraph.
//!
//! [`SchemaResolver`] combines them for one graph.

pub mod global;
pub mod local;
pub mod resolver;
pub mod types;

pub use global::{
    parse_schema_json, FileSchemaSource, GlobalSchemaTable, SchemaMap, SchemaSource,
    StaticSchemaSource,
};
pub use local::{build_graph_schemas, schema_from_op_def};
pub use resolver::{positional_name, SchemaResolver};
pub use types::{ArgumentSchema, AttributeSchema, OperatorSchema};
