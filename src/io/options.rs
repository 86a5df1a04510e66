//! Loader configuration

use serde::{Deserialize, Serialize};

use crate::error::ViewResult;

/// Options controlling how models are loaded and displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Identifier file name that selects SavedModel container decoding
    pub saved_model_file_name: String,
    /// Lists longer than this render as a placeholder message
    pub max_rendered_list_len: usize,
    /// Slot suffixes above this are reported as malformed and left dangling
    pub max_output_slot: usize,
    /// Enforce exact input/output counts when matching Const and Identity nodes
    pub strict_structural_checks: bool,
    /// Render byte strings with control or non-ASCII bytes as byte lists
    pub strict_printable_check: bool,
    /// Attribute names left out of `Node::attributes`
    pub hidden_attributes: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            saved_model_file_name: "saved_model.pb".to_string(),
            max_rendered_list_len: 65536,
            max_output_slot: 65536,
            strict_structural_checks: false,
            strict_printable_check: false,
            hidden_attributes: vec!["_output_shapes".to_string(), "T".to_string()],
        }
    }
}

impl LoadOptions {
    /// Parse options from JSON; missing fields keep their defaults
    pub fn from_json_str(text: &str) -> ViewResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Whether an attribute is suppressed from display
    pub fn is_hidden_attribute(&self, name: &str) -> bool {
        self.hidden_attributes.iter().any(|hidden| hidden == name)
    }
}
