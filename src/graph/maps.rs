//! Graph maps and the passes that build them
//!
//! Construction runs three passes over the node records:
//!
//! 1. index: node name → record position
//! 2. resolution: every input reference becomes a canonical `producer:slot`
//!    id, and each producer's output-slot list is grown to cover every slot
//!    referenced against it
//! 3. reference counting over the canonical input ids
//!
//! The records themselves are never rewritten; canonical ids live in the
//! parallel [`NodeLinks`] list.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::io::LoadOptions;
use crate::proto::NodeDef;

/// Marker prefix of a control-dependency input
pub const CONTROL_MARKER: char = '^';

/// Type alias for node index: node name → position in the node records
pub type NodeIndex = IndexMap<String, usize>;

/// Type alias for a reconstructed output-slot list; unreferenced slots are `""`
pub type OutputSlots = SmallVec<[String; 2]>;

/// Type alias for output reference count: canonical id → consumer count
pub type OutputRefCount = FxHashMap<String, usize>;

/// Inconsistency noticed while building a graph; never fatal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// Two records share a name; the later one is indexed
    DuplicateNodeName(String),
    /// A record has an empty name and is not indexed
    EmptyNodeName {
        /// Record position
        position: usize,
    },
    /// An input's slot suffix is not a usable slot index
    MalformedInput {
        /// Consuming node
        node: String,
        /// Raw input reference
        input: String,
    },
    /// An input names a producer that does not exist
    DanglingInput {
        /// Consuming node
        node: String,
        /// Canonical input id
        input: String,
    },
}

/// Parsed input reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRef {
    /// Producer node name, control marker stripped
    pub producer: String,
    /// Output slot index
    pub slot: usize,
    /// Whether the reference carried the control marker
    pub control: bool,
    /// Whether the slot suffix failed to parse (slot defaults to 0)
    pub malformed: bool,
}

impl InputRef {
    /// Parse `name`, `name:slot`, `^name` forms
    pub fn parse(raw: &str) -> Self {
        let (name, slot_text) = match raw.split_once(':') {
            Some((name, slot)) => (name, Some(slot)),
            None => (raw, None),
        };
        let (name, control) = match name.strip_prefix(CONTROL_MARKER) {
            Some(name) => (name, true),
            None => (name, false),
        };
        let (slot, malformed) = match slot_text.map(str::parse::<usize>) {
            None => (0, false),
            Some(Ok(slot)) => (slot, false),
            Some(Err(_)) => (0, true),
        };

        Self {
            producer: name.to_string(),
            slot,
            control,
            malformed,
        }
    }

    /// Canonical `producer:slot` id
    pub fn canonical_id(&self) -> String {
        format!("{}:{}", self.producer, self.slot)
    }
}

/// One resolved input of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Canonical `producer:slot` id
    pub id: String,
    /// Whether this is a control dependency
    pub control: bool,
}

/// Canonical inputs and reconstructed outputs of one node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeLinks {
    /// Inputs in declaration order
    pub inputs: Vec<ResolvedInput>,
    /// Output slots, indexed by slot
    pub outputs: OutputSlots,
}

/// Everything the builder passes produce
#[derive(Debug, Clone, Default)]
pub struct GraphMaps {
    /// Node name → record position
    pub node_index: NodeIndex,
    /// Per-record links, parallel to the node records
    pub links: Vec<NodeLinks>,
    /// Canonical id → consumer count
    pub output_ref_count: OutputRefCount,
    /// Inconsistencies seen along the way
    pub issues: Vec<GraphIssue>,
}

/// Build node index from node records
///
/// Duplicate names keep the later record; empty names are skipped.
pub fn build_node_index(nodes: &[NodeDef], issues: &mut Vec<GraphIssue>) -> NodeIndex {
    let mut index = IndexMap::with_capacity(nodes.len());

    for (position, node) in nodes.iter().enumerate() {
        if node.name.is_empty() {
            log::warn!("Node at position {} has no name", position);
            issues.push(GraphIssue::EmptyNodeName { position });
            continue;
        }
        if index.insert(node.name.clone(), position).is_some() {
            log::warn!("Duplicate node name '{}'", node.name);
            issues.push(GraphIssue::DuplicateNodeName(node.name.clone()));
        }
    }

    index
}

/// Resolve every input reference and reconstruct output-slot lists
pub fn resolve_links(
    nodes: &[NodeDef],
    index: &NodeIndex,
    options: &LoadOptions,
    issues: &mut Vec<GraphIssue>,
) -> Vec<NodeLinks> {
    let mut links: Vec<NodeLinks> = vec![NodeLinks::default(); nodes.len()];

    for (position, node) in nodes.iter().enumerate() {
        for raw in &node.input {
            let input = InputRef::parse(raw);
            let id = input.canonical_id();

            let too_large = input.slot > options.max_output_slot;
            if input.malformed || too_large {
                log::warn!("Node '{}' has malformed input '{}'", node.name, raw);
                issues.push(GraphIssue::MalformedInput {
                    node: node.name.clone(),
                    input: raw.clone(),
                });
            }

            match index.get(&input.producer) {
                Some(&producer) if !too_large => {
                    let outputs = &mut links[producer].outputs;
                    if outputs.len() <= input.slot {
                        outputs.resize(input.slot + 1, String::new());
                    }
                    outputs[input.slot] = id.clone();
                }
                Some(_) => {}
                None => {
                    log::trace!("Node '{}' references unknown producer '{}'", node.name, id);
                    issues.push(GraphIssue::DanglingInput {
                        node: node.name.clone(),
                        input: id.clone(),
                    });
                }
            }

            links[position].inputs.push(ResolvedInput {
                id,
                control: input.control,
            });
        }
    }

    links
}

/// Build output reference count map from canonical inputs
pub fn build_output_ref_count(links: &[NodeLinks]) -> OutputRefCount {
    let mut map: OutputRefCount = FxHashMap::default();

    for node in links {
        for input in &node.inputs {
            *map.entry(input.id.clone()).or_insert(0) += 1;
        }
    }

    map
}

/// Run all builder passes
pub fn build_graph_maps(nodes: &[NodeDef], options: &LoadOptions) -> GraphMaps {
    let mut issues = Vec::new();
    let node_index = build_node_index(nodes, &mut issues);
    let links = resolve_links(nodes, &node_index, options, &mut issues);
    let output_ref_count = build_output_ref_count(&links);

    GraphMaps {
        node_index,
        links,
        output_ref_count,
        issues,
    }
}
