//! Attribute view and value formatting

use crate::graph::Graph;
use crate::io::LoadOptions;
use crate::proto::attr_value::{ListValue, Value};
use crate::proto::AttrValue;
use crate::tensor::{format_data_type, format_tensor_shape, format_tensor_type, UNKNOWN_TYPE};

/// Rendered in place of lists longer than the configured limit
pub const TOO_LARGE: &str = "Too large to render.";

/// View over one node attribute
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'g> {
    graph: &'g Graph,
    operator: &'g str,
    name: &'g str,
    value: &'g AttrValue,
}

impl<'g> Attribute<'g> {
    pub(crate) fn new(
        graph: &'g Graph,
        operator: &'g str,
        name: &'g str,
        value: &'g AttrValue,
    ) -> Self {
        Self {
            graph,
            operator,
            name,
            value,
        }
    }

    /// Attribute name
    pub fn name(&self) -> &'g str {
        self.name
    }

    /// Declared type from the operator schema, `""` when unknown
    pub fn type_name(&self) -> &'g str {
        self.graph
            .metadata()
            .get_attribute_type(self.operator, self.name)
            .unwrap_or_default()
    }

    /// Display string for the value
    pub fn value(&self) -> String {
        AttributeValueFormatter::from(self.graph.options()).format(self.value)
    }

    /// Whether the value is an embedded tensor
    pub fn is_tensor(&self) -> bool {
        matches!(self.value.value, Some(Value::Tensor(_)))
    }

    /// Underlying record
    pub fn raw(&self) -> &'g AttrValue {
        self.value
    }
}

/// Renders attribute values to display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeValueFormatter {
    /// Lists longer than this render as [`TOO_LARGE`]
    pub max_list_len: usize,
    /// Use the printable-ASCII test for byte strings
    pub strict_printable: bool,
}

impl Default for AttributeValueFormatter {
    fn default() -> Self {
        Self::from(&LoadOptions::default())
    }
}

impl From<&LoadOptions> for AttributeValueFormatter {
    fn from(options: &LoadOptions) -> Self {
        Self {
            max_list_len: options.max_rendered_list_len,
            strict_printable: options.strict_printable_check,
        }
    }
}

impl AttributeValueFormatter {
    /// Render one attribute value; unknown or empty encodings render as `?`
    pub fn format(&self, attr: &AttrValue) -> String {
        match &attr.value {
            Some(Value::Type(code)) => format_data_type(*code).to_string(),
            Some(Value::I(value)) => value.to_string(),
            Some(Value::F(value)) => value.to_string(),
            Some(Value::B(value)) => value.to_string(),
            Some(Value::Shape(shape)) => format_tensor_shape(shape),
            Some(Value::S(bytes)) => self.format_bytes(bytes),
            Some(Value::Tensor(tensor)) => format_tensor_type(tensor),
            Some(Value::List(list)) => self.format_list(list),
            Some(Value::Placeholder(_)) | Some(Value::Func(_)) | None => UNKNOWN_TYPE.to_string(),
        }
    }

    fn format_bytes(&self, bytes: &[u8]) -> String {
        if self.is_printable(bytes) {
            let text: String = bytes.iter().map(|&b| b as char).collect();
            format!("\"{}\"", text)
        } else {
            join(bytes.iter().map(u8::to_string))
        }
    }

    fn is_printable(&self, bytes: &[u8]) -> bool {
        if self.strict_printable {
            bytes.iter().all(|&b| (0x20..0x7f).contains(&b))
        } else {
            true
        }
    }

    fn format_list(&self, list: &ListValue) -> String {
        let len = [
            list.s.len(),
            list.i.len(),
            list.f.len(),
            list.r#type.len(),
            list.b.len(),
            list.shape.len(),
            list.tensor.len(),
        ]
        .into_iter()
        .find(|&len| len > 0);

        match len {
            None => UNKNOWN_TYPE.to_string(),
            Some(len) if len > self.max_list_len => TOO_LARGE.to_string(),
            Some(_) if !list.s.is_empty() => join(list.s.iter().map(|s| self.format_bytes(s))),
            Some(_) if !list.i.is_empty() => join(list.i.iter().map(i64::to_string)),
            Some(_) if !list.f.is_empty() => join(list.f.iter().map(f32::to_string)),
            Some(_) if !list.r#type.is_empty() => {
                join(list.r#type.iter().map(|&code| format_data_type(code).to_string()))
            }
            Some(_) if !list.b.is_empty() => join(list.b.iter().map(bool::to_string)),
            Some(_) if !list.shape.is_empty() => join(list.shape.iter().map(format_tensor_shape)),
            Some(_) => join(list.tensor.iter().map(format_tensor_type)),
        }
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// Render an attribute value with default options
pub fn format_attr_value(attr: &AttrValue) -> String {
    AttributeValueFormatter::default().format(attr)
}
