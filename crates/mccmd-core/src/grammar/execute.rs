//! `execute`'s subcommand chain, both the >=1.19.50 tail-recursive form
//! and the legacy one-shot form. Grounded on `nodes.py`'s `_execute`/
//! `_execute_cond` (the module-level closures inside `command()`).

use crate::font::Font;
use crate::grammar::blockspec::block_spec;
use crate::grammar::coordinates::{pos3d, yaw_pitch};
use crate::grammar::primitives::{chars_node, enumerate_node_noted, integer_node, keyword_node, namespaced_id_node};
use crate::grammar::selector::{score_spec, selector};
use crate::grammar::series::int_range;
use crate::node::{Graph, NodeId, NodeKind};

fn execute_subcmd(graph: &mut Graph, word: &'static str) -> NodeId {
    let kw = keyword_node(graph, word);
    graph.note(kw, "note.execute.subcmds");
    kw
}

/// `if`/`unless`'s condition grammar: `block`, `blocks`, `entity`,
/// `score` (`nodes.py`'s `_execute_cond`). `continue_to` is `_execute`'s
/// own entry, reached again after a condition is satisfied.
fn execute_cond(graph: &mut Graph, continue_to: NodeId) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);

    let block_kw = keyword_node(graph, "block");
    graph.note(block_kw, "note.execute.tests.block");
    graph.branch(root, block_kw);
    let (p3_entry, p3_exit) = pos3d(graph);
    graph.branch(block_kw, p3_entry);
    let (bs_entry, bs_exit) = block_spec(graph, Some(continue_to));
    graph.branch(p3_exit, bs_entry);
    graph.branch(bs_exit, continue_to);

    let blocks_kw = keyword_node(graph, "blocks");
    graph.note(blocks_kw, "note.execute.tests.blocks.root");
    graph.branch(root, blocks_kw);
    let (p1_entry, p1_exit) = pos3d(graph);
    let (p2_entry, p2_exit) = pos3d(graph);
    let (p3b_entry, p3b_exit) = pos3d(graph);
    graph.branch(blocks_kw, p1_entry);
    graph.branch(p1_exit, p2_entry);
    graph.branch(p2_exit, p3b_entry);
    let mode = enumerate_node_noted(graph, &["all", "masked"], &["note.execute.tests.blocks.modes.all", "note.execute.tests.blocks.modes.masked"]);
    graph.branch(p3b_exit, mode);
    graph.branch(mode, continue_to);

    let entity_kw = keyword_node(graph, "entity");
    graph.note(entity_kw, "note.execute.tests.entity");
    graph.branch(root, entity_kw);
    let (sel_entry, sel_exit) = selector(graph);
    graph.branch(entity_kw, sel_entry);
    graph.branch(sel_exit, continue_to);

    let score_kw = keyword_node(graph, "score");
    graph.note(score_kw, "note.execute.tests.score.root");
    graph.branch(root, score_kw);
    let (lhs_entry, lhs_exit) = score_spec(graph, false);
    graph.branch(score_kw, lhs_entry);

    let matches_kw = keyword_node(graph, "matches");
    graph.note(matches_kw, "note.execute.tests.score.matches");
    graph.branch(lhs_exit, matches_kw);
    let (range_entry, range_exit) = int_range(graph);
    graph.branch(matches_kw, range_entry);
    graph.branch(range_exit, continue_to);

    let compare_ops: [&'static str; 5] = ["=", "<=", ">=", "<", ">"];
    for op in compare_ops {
        let op_node = chars_node(graph, op);
        graph.note(op_node, "note.execute.tests.score.compare_ops");
        graph.branch(lhs_exit, op_node);
        let (rhs_entry, rhs_exit) = score_spec(graph, false);
        graph.branch(op_node, rhs_entry);
        graph.branch(rhs_exit, continue_to);
    }

    root
}

/// The >=1.19.50 `execute` chain: `align/anchored/as/at/facing/in/
/// positioned/rotated/if/unless` each loop back to the chain's own
/// entry, and `run` hands off to `command_root` (`nodes.py`'s
/// `_execute`). The self-loop is the same forward-`NodeId` back-edge
/// `Series` uses for its repeat.
pub fn execute_chain(graph: &mut Graph, command_root: NodeId) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);

    let align = execute_subcmd(graph, "align");
    graph.branch(root, align);
    let swizzle = crate::grammar::primitives::swizzle_node(graph);
    graph.branch(align, swizzle);
    graph.branch(swizzle, root);

    let anchored = execute_subcmd(graph, "anchored");
    graph.branch(root, anchored);
    let anchor = enumerate_node_noted(graph, &["eyes", "feet"], &["note.execute.anchors.eyes", "note.execute.anchors.feet"]);
    graph.branch(anchored, anchor);
    graph.branch(anchor, root);

    let as_kw = execute_subcmd(graph, "as");
    graph.branch(root, as_kw);
    let (as_sel, as_sel_exit) = selector(graph);
    graph.branch(as_kw, as_sel);
    graph.branch(as_sel_exit, root);

    let at_kw = execute_subcmd(graph, "at");
    graph.branch(root, at_kw);
    let (at_sel, at_sel_exit) = selector(graph);
    graph.branch(at_kw, at_sel);
    graph.branch(at_sel_exit, root);

    let facing = execute_subcmd(graph, "facing");
    graph.branch(root, facing);
    let (facing_pos, facing_pos_exit) = pos3d(graph);
    graph.branch(facing, facing_pos);
    graph.branch(facing_pos_exit, root);
    let facing_entity = keyword_node(graph, "entity");
    graph.note(facing_entity, "note.execute.entity_variant");
    graph.branch(facing, facing_entity);
    let (facing_sel, facing_sel_exit) = selector(graph);
    graph.branch(facing_entity, facing_sel);
    let facing_anchor = enumerate_node_noted(graph, &["eyes", "feet"], &["note.execute.anchors.eyes", "note.execute.anchors.feet"]);
    graph.branch(facing_sel_exit, facing_anchor);
    graph.branch(facing_anchor, root);

    let in_kw = execute_subcmd(graph, "in");
    graph.branch(root, in_kw);
    let dim = enumerate_node_noted(
        graph,
        &["overworld", "nether", "the_end"],
        &["note.execute.dims.overworld", "note.execute.dims.nether", "note.execute.dims.the_end"],
    );
    graph.branch(in_kw, dim);
    graph.branch(dim, root);

    let positioned = execute_subcmd(graph, "positioned");
    graph.branch(root, positioned);
    let (pos_entry, pos_exit) = pos3d(graph);
    graph.branch(positioned, pos_entry);
    graph.branch(pos_exit, root);
    let positioned_as = keyword_node(graph, "as");
    graph.note(positioned_as, "note.execute.entity_variant");
    graph.branch(positioned, positioned_as);
    let (pos_as_sel, pos_as_sel_exit) = selector(graph);
    graph.branch(positioned_as, pos_as_sel);
    graph.branch(pos_as_sel_exit, root);

    let rotated = execute_subcmd(graph, "rotated");
    graph.branch(root, rotated);
    let (yp_entry, yp_exit) = yaw_pitch(graph);
    graph.branch(rotated, yp_entry);
    graph.branch(yp_exit, root);
    let rotated_as = keyword_node(graph, "as");
    graph.note(rotated_as, "note.execute.entity_variant");
    graph.branch(rotated, rotated_as);
    let (rot_as_sel, rot_as_sel_exit) = selector(graph);
    graph.branch(rotated_as, rot_as_sel);
    graph.branch(rot_as_sel_exit, root);

    let if_kw = execute_subcmd(graph, "if");
    graph.branch(root, if_kw);
    let cond_if = execute_cond(graph, root);
    graph.branch(if_kw, cond_if);

    let unless_kw = execute_subcmd(graph, "unless");
    graph.branch(root, unless_kw);
    let cond_unless = execute_cond(graph, root);
    graph.branch(unless_kw, cond_unless);

    let run_kw = execute_subcmd(graph, "run");
    graph.branch(root, run_kw);
    graph.branch(run_kw, command_root);

    root
}

/// The pre-1.19.50 one-shot form: `<selector> <pos3d> [detect <pos3d>
/// <block> <data>] <command>` (`nodes.py`'s legacy `execute` branch).
pub fn legacy_execute(graph: &mut Graph, command_root: NodeId) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);
    let (sel_entry, sel_exit) = selector(graph);
    graph.branch(root, sel_entry);
    let (pos_entry, pos_exit) = pos3d(graph);
    graph.branch(sel_exit, pos_entry);
    graph.branch(pos_exit, command_root);

    let detect = keyword_node(graph, "detect");
    graph.note(detect, "note.execute.old.detect");
    graph.branch(pos_exit, detect);
    let (dp_entry, dp_exit) = pos3d(graph);
    graph.branch(detect, dp_entry);
    let block_id = namespaced_id_node(graph, Some("block"));
    graph.branch(dp_exit, block_id);
    let data = integer_node(graph);
    graph.note(data, "note._block_data");
    graph.font(data, Font::Numeric);
    graph.branch(block_id, data);
    graph.branch(data, command_root);

    root
}
