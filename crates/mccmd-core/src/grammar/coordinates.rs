//! Coordinate grammars: absolute/relative/local position and rotation
//! components. Grounded on `nodes.py`'s `Pos`, `LocalPos`, `Pos3D`,
//! `Rotation`, `YawPitch`.

use crate::font::Font;
use crate::grammar::join_tails;
use crate::grammar::primitives::{char_node, float_node, offset_float_node};
use crate::node::{Graph, NodeId, NodeKind};

/// One absolute-or-`~`-relative coordinate (`nodes.py`'s `Pos`). Returns
/// `(entry, exit)`: branch into `entry`, continue building from `exit`.
pub fn pos(graph: &mut Graph, axis_font: Font) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let abs = float_node(graph);
    graph.font(abs, axis_font);
    graph.branch(root, abs);

    let tilde = char_node(graph, '~');
    graph.font(tilde, axis_font);
    graph.branch(root, tilde);

    let offset = offset_float_node(graph);
    graph.font(offset, axis_font);
    graph.branch_close(tilde, offset);

    let exit = join_tails(graph, &[abs, offset, tilde]);
    (root, exit)
}

/// `^`-relative coordinate (`nodes.py`'s `LocalPos`).
pub fn local_pos(graph: &mut Graph, axis_font: Font) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let caret = char_node(graph, '^');
    graph.font(caret, axis_font);
    graph.branch(root, caret);

    let offset = offset_float_node(graph);
    graph.font(offset, axis_font);
    graph.branch_close(caret, offset);

    let exit = join_tails(graph, &[offset, caret]);
    (root, exit)
}

/// Three coordinates, either all `Pos` or all `LocalPos` (`nodes.py`'s
/// `Pos3D`): mixing the two styles on one command isn't legal.
pub fn pos3d(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let (ax, aexit) = pos(graph, Font::Position);
    let (ay, ayexit) = pos(graph, Font::Position);
    let (az, azexit) = pos(graph, Font::Position);
    graph.branch(aexit, ay);
    graph.branch(ayexit, az);
    graph.branch(root, ax);

    let (lx, lxexit) = local_pos(graph, Font::Position);
    let (ly, lyexit) = local_pos(graph, Font::Position);
    let (lz, lzexit) = local_pos(graph, Font::Position);
    graph.branch(lxexit, ly);
    graph.branch(lyexit, lz);
    graph.branch(root, lx);

    let exit = join_tails(graph, &[azexit, lzexit]);
    (root, exit)
}

/// One absolute-or-relative rotation component (`nodes.py`'s `Rotation`).
pub fn rotation(graph: &mut Graph) -> (NodeId, NodeId) {
    pos(graph, Font::Rotation)
}

/// Yaw then pitch (`nodes.py`'s `YawPitch`).
pub fn yaw_pitch(graph: &mut Graph) -> (NodeId, NodeId) {
    let (yaw, yaw_exit) = rotation(graph);
    let (pitch, pitch_exit) = rotation(graph);
    graph.branch(yaw_exit, pitch);
    (yaw, pitch_exit)
}
