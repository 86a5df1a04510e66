//! Read-only views over a built [`Graph`](crate::graph::Graph)
//!
//! Views are constructed on demand and borrow the graph; schema names and
//! display strings are resolved when queried, never precomputed.

pub mod attribute;
pub mod node;

pub use attribute::{format_attr_value, Attribute, AttributeValueFormatter, TOO_LARGE};
pub use node::{Argument, Node};
