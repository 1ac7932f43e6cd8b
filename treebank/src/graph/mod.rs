//! Graph primitives. Nodes are sentence positions and every reference between nodes is an index,
//! so both structures are plain data.
//!
//! - [Tree]: the basic dependency tree, one parent per node.
//! - [EnhancedGraph]: the enhanced multigraph of labeled arrows.

use thiserror::Error;

mod directed;
mod tree;

pub use directed::*;
pub use tree::*;

#[derive(Error, Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Error {
    #[error("self loop on node {node} with relation \"{relation}\"")]
    SelfLoop { node: usize, relation: String },
    #[error("duplicate arrow {start} -> {end} with relation \"{relation}\"")]
    DuplicateArrow {
        start: Endpoint,
        end: usize,
        relation: String,
    },
    #[error("node {0} does not exist")]
    MissingNode(usize),
    #[error("token {position} references non-existent head {head}")]
    MissingHead { position: usize, head: usize },
}
