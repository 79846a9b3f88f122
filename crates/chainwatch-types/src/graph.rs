//! Entity network graph handed to the graph-drawing collaborator.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A general directed graph of entities and the value flows between them.
///
/// The graph may be disconnected. Links are self-loop-free by construction
/// and always reference node ids present in `nodes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// A node in the entity network graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub risk: f64,
    pub volume: f64,
}

/// A value flow between two graph nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    /// Id of the source node
    pub source: String,
    /// Id of the target node, always distinct from `source`
    pub target: String,
    /// Transferred value attributed to the link
    pub value: f64,
    /// Risk of the flow in `[0, 1)`
    pub risk: f64,
}

/// Classification of a graph node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Wallet,
    Exchange,
    Mixer,
    Service,
}
