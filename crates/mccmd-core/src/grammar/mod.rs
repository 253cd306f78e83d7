//! Command grammar: constructs the frozen `Graph` every `mccmd_core::parse`
//! call walks. Submodules mirror `nodes.py`'s grouping (primitives,
//! coordinates, series/wildcard/invertable, selector, block specs, JSON,
//! `execute`, the command table), each grounded on the corresponding
//! Python classes cited in its own doc comment.

pub mod blockspec;
pub mod checks;
pub mod commands;
pub mod coordinates;
pub mod execute;
pub mod json;
pub mod primitives;
pub mod selector;
pub mod series;

use once_cell::sync::OnceCell;

use crate::node::{Graph, NodeId, NodeKind};

/// Creates a shared exit point: every node in `tails` gets a default
/// (terminator-enforcing) branch into a fresh `Compressed` node, which is
/// returned so the caller can continue building from wherever all of
/// `tails`' alternatives reconverge. Mirrors `nodes.py`'s `CompressedNode`
/// convention of giving every composite a single shared `self.end`.
pub fn join_tails(graph: &mut Graph, tails: &[NodeId]) -> NodeId {
    let exit = graph.alloc(NodeKind::Compressed);
    for &tail in tails {
        graph.branch(tail, exit);
    }
    exit
}

static DEFAULT_TREE: OnceCell<std::sync::Arc<(Graph, NodeId)>> = OnceCell::new();

/// The process-wide command grammar, built once and frozen. `.0` is the
/// `Graph`; `.1` is `mcfuncline()`'s root `NodeId` — a command, a
/// `#comment`, or a blank line, matching what one line of a
/// `.mcfunction` file may hold (`nodes.py`'s module-level `mcfuncline()`
/// factory).
pub fn get_default_tree() -> std::sync::Arc<(Graph, NodeId)> {
    DEFAULT_TREE
        .get_or_init(|| {
            let mut graph = Graph::new();
            let root = commands::mcfuncline(&mut graph);
            std::sync::Arc::new((graph.freeze(), root))
        })
        .clone()
}
