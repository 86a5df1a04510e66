//! Initializer discovery and identity collapsing
//!
//! `Const` nodes become initializer tensors keyed by their sole output id. A
//! `Const` read through an `Identity` is folded into one initializer keyed by
//! the `Identity` output; the `Const` key is left as a tombstone.

use indexmap::IndexMap;

use crate::proto::NodeDef;
use crate::tensor::Tensor;

use super::maps::NodeLinks;

/// Operator of constant nodes
pub const CONST_OP: &str = "Const";

/// Operator of pass-through nodes
pub const IDENTITY_OP: &str = "Identity";

/// Attribute holding a constant's tensor
pub const VALUE_ATTR: &str = "value";

/// Initializer map entry
#[derive(Debug, Clone, PartialEq)]
pub enum InitializerEntry {
    /// A displayed initializer
    Live(Tensor),
    /// The id held an initializer that has since been relocated
    Tombstone,
}

impl InitializerEntry {
    /// The live tensor, if any
    pub fn as_live(&self) -> Option<&Tensor> {
        match self {
            InitializerEntry::Live(tensor) => Some(tensor),
            InitializerEntry::Tombstone => None,
        }
    }
}

/// Type alias for initializer map: canonical id → entry (insertion order preserved)
pub type InitializerMap = IndexMap<String, InitializerEntry>;

/// Structural match of a node against an operator and input/output counts
///
/// A count of zero always requires the list to be empty. Non-zero counts are
/// only enforced when `strict` is set; otherwise any count matches, which is
/// the behaviour existing viewers of these graphs rely on.
pub fn check_node(
    node: &NodeDef,
    links: &NodeLinks,
    operator: &str,
    inputs: usize,
    outputs: usize,
    strict: bool,
) -> bool {
    if node.op != operator {
        return false;
    }
    if outputs == 0 && !links.outputs.is_empty() {
        return false;
    }
    if inputs == 0 && !node.input.is_empty() {
        return false;
    }
    if strict {
        if outputs > 0 && links.outputs.len() != outputs {
            return false;
        }
        if inputs > 0 && node.input.len() != inputs {
            return false;
        }
    }
    true
}

fn first_output(links: &NodeLinks) -> Option<&str> {
    links
        .outputs
        .first()
        .map(String::as_str)
        .filter(|id| !id.is_empty())
}

/// Create initializers for every constant node carrying a tensor `value`
pub fn collect_constants(nodes: &[NodeDef], links: &[NodeLinks], strict: bool) -> InitializerMap {
    let mut map = InitializerMap::new();

    for (node, links) in nodes.iter().zip(links) {
        if !check_node(node, links, CONST_OP, 0, 1, strict) {
            continue;
        }
        let Some(id) = first_output(links) else {
            continue;
        };
        if let Some(tensor) = node.get_attr_tensor(VALUE_ATTR) {
            let tensor = Tensor::constant(tensor.clone(), id);
            map.insert(id.to_string(), InitializerEntry::Live(tensor));
        }
    }

    map
}

/// Fold `Const → Identity` chains; returns the number of identities collapsed
pub fn collapse_identities(
    nodes: &[NodeDef],
    links: &[NodeLinks],
    map: &mut InitializerMap,
    strict: bool,
) -> usize {
    let mut collapsed = 0;

    for (node, links) in nodes.iter().zip(links) {
        if !check_node(node, links, IDENTITY_OP, 1, 1, strict) {
            continue;
        }
        let (Some(input), Some(output)) = (links.inputs.first(), first_output(links)) else {
            continue;
        };
        let Some(entry) = map.get_mut(&input.id) else {
            continue;
        };
        if entry.as_live().is_none() {
            continue;
        }
        if let InitializerEntry::Live(mut tensor) =
            std::mem::replace(entry, InitializerEntry::Tombstone)
        {
            tensor.relocate(output);
            map.insert(output.to_string(), InitializerEntry::Live(tensor));
            collapsed += 1;
        }
    }

    collapsed
}

/// Run constant discovery followed by identity collapsing
pub fn build_initializer_map(
    nodes: &[NodeDef],
    links: &[NodeLinks],
    strict: bool,
) -> InitializerMap {
    let mut map = collect_constants(nodes, links, strict);
    let constants = map.len();
    let collapsed = collapse_identities(nodes, links, &mut map, strict);
    log::debug!(
        "Found {} constant initializers, collapsed {} identities",
        constants,
        collapsed
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::maps::build_graph_maps;
    use crate::io::LoadOptions;
    use crate::proto::extensions::{make_const, make_node};
    use crate::proto::{DataType, TensorProto};

    fn weights() -> TensorProto {
        TensorProto::with_shape(DataType::DtFloat, &[3, 3])
    }

    fn initializers(nodes: &[NodeDef], strict: bool) -> InitializerMap {
        let maps = build_graph_maps(nodes, &LoadOptions::default());
        build_initializer_map(nodes, &maps.links, strict)
    }

    #[test]
    fn test_constant_discovery() {
        let nodes = vec![
            make_const("w", weights()),
            make_node("Placeholder", &[], "x"),
            make_node("MatMul", &["x", "w"], "mm"),
        ];
        let map = initializers(&nodes, false);

        assert_eq!(map.len(), 1);
        let tensor = map["w:0"].as_live().unwrap();
        assert_eq!(tensor.title(), "Constant");
        assert_eq!(tensor.id(), "w:0");
    }

    #[test]
    fn test_unconsumed_constant_has_no_key() {
        let nodes = vec![make_const("w", weights())];
        assert!(initializers(&nodes, false).is_empty());
    }

    #[test]
    fn test_constant_without_tensor_value() {
        let nodes = vec![
            make_node("Const", &[], "c"),
            make_node("Relu", &["c"], "relu"),
        ];
        assert!(initializers(&nodes, false).is_empty());
    }

    #[test]
    fn test_identity_collapse() {
        let nodes = vec![
            make_const("w", weights()),
            make_node("Identity", &["w"], "w/read"),
            make_node("MatMul", &["x", "w/read"], "mm"),
        ];
        let map = initializers(&nodes, false);

        assert_eq!(map["w:0"], InitializerEntry::Tombstone);
        let tensor = map["w/read:0"].as_live().unwrap();
        assert_eq!(tensor.id(), "w/read:0");
        assert_eq!(tensor.title(), "Constant Identity");
    }

    #[test]
    fn test_identity_on_non_constant_is_kept() {
        let nodes = vec![
            make_node("Placeholder", &[], "x"),
            make_node("Identity", &["x"], "id"),
            make_node("Relu", &["id"], "relu"),
        ];
        assert!(initializers(&nodes, false).is_empty());
    }

    #[test]
    fn test_second_identity_does_not_collapse_tombstone() {
        let nodes = vec![
            make_const("w", weights()),
            make_node("Identity", &["w"], "a"),
            make_node("Identity", &["w"], "b"),
            make_node("Add", &["a", "b"], "add"),
        ];
        let map = initializers(&nodes, false);

        assert_eq!(map["w:0"], InitializerEntry::Tombstone);
        assert!(map["a:0"].as_live().is_some());
        assert!(!map.contains_key("b:0"));
    }

    #[test]
    fn test_check_node_observed_counts() {
        let nodes = vec![
            make_const("c", weights()),
            make_node("Add", &["c:0", "c:1"], "add"),
        ];
        let maps = build_graph_maps(&nodes, &LoadOptions::default());

        // Two referenced slots on a Const still match unless strict
        assert!(check_node(&nodes[0], &maps.links[0], CONST_OP, 0, 1, false));
        assert!(!check_node(&nodes[0], &maps.links[0], CONST_OP, 0, 1, true));
        assert!(!check_node(&nodes[1], &maps.links[1], CONST_OP, 0, 1, false));
    }

    #[test]
    fn test_strict_identity_requires_single_input() {
        let nodes = vec![
            make_const("w", weights()),
            make_node("Identity", &["w", "^w"], "w/read"),
            make_node("Relu", &["w/read"], "relu"),
        ];

        assert!(initializers(&nodes, false).contains_key("w/read:0"));
        let strict = initializers(&nodes, true);
        assert!(strict["w:0"].as_live().is_some());
        assert!(!strict.contains_key("w/read:0"));
    }
}
