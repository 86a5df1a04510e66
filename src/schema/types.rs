//! Operator schema shapes
//!
//! One shape serves both tiers: the global resource deserializes into it, and
//! the graph-local tier converts embedded `OpDef`s into it.

use serde::{Deserialize, Serialize};

/// Schema for one operator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperatorSchema {
    /// Operator name (filled in for documentation lookups)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// One-line summary
    pub summary: Option<String>,
    /// Long description (markdown)
    pub description: Option<String>,
    /// Input arguments, positional
    pub inputs: Vec<ArgumentSchema>,
    /// Output arguments, positional
    pub outputs: Vec<ArgumentSchema>,
    /// Declared attributes
    pub attributes: Vec<AttributeSchema>,
}

/// Input or output argument of an operator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArgumentSchema {
    /// Argument name
    pub name: String,
    /// Description (markdown)
    pub description: Option<String>,
    /// Fixed type; the global resource stores either a type code or a name
    #[serde(rename = "type")]
    pub type_value: Option<serde_json::Value>,
    /// Name of the attribute binding this argument's type
    pub type_attr: Option<String>,
    /// Type string carried by the embedded operator list
    pub type_str: Option<String>,
    /// Name of the attribute giving the repeat count
    pub number_attr: Option<String>,
    /// Name of the attribute holding a type list
    pub type_list_attr: Option<String>,
}

/// Declared attribute of an operator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeSchema {
    /// Attribute name
    pub name: String,
    /// Declared type string, e.g. `int`, `list(type)`
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Description (markdown)
    pub description: Option<String>,
    /// Default value as carried by the resource
    pub default: Option<serde_json::Value>,
}

/// One `{name, schema}` record of the global resource
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SchemaRecord {
    pub name: Option<String>,
    pub schema: Option<OperatorSchema>,
}
