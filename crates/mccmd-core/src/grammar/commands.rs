//! The command root: every `CommandName(...)` branch, wired the way
//! `nodes.py`'s `command()` factory wires them, plus `mcfuncline()`
//! (a command, a `#comment`, or a blank line).

use crate::font::Font;
use crate::grammar::blockspec::{block_spec, item_data};
use crate::grammar::checks::{one_of_checker, ranged_checker};
use crate::grammar::coordinates::pos3d;
use crate::grammar::execute::{execute_chain, legacy_execute};
use crate::grammar::json::{item_components_value, rawtext_value};
use crate::grammar::primitives::{
    bare_text_node, boolean_node, catalogued_word_node, char_node, enumerate_node, enumerate_node_noted, eol_node,
    float_node, integer_node, keyword_node, namespaced_id_node, string_node,
};
use crate::grammar::selector::{game_mode, selector};
use crate::node::{Graph, NodeId, NodeKind};
use crate::version::{version_ge, version_lt, Version};

fn command_name(graph: &mut Graph, names: &'static [&'static str]) -> NodeId {
    let id = if names.len() == 1 { keyword_node(graph, names[0]) } else { enumerate_node(graph, names) };
    graph.font(id, Font::Command);
    id
}

/// `Integer().ranged(min=1).finish(EOL)`, or nothing at all — `enchant`'s
/// shared level-argument tail (`nodes.py`'s `_enchant`).
fn enchant_tail(graph: &mut Graph) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);
    let level = integer_node(graph);
    graph.note(level, "note.enchant.level");
    graph.checker(level, crate::grammar::checks::min_checker(1.0));
    let level_end = eol_node(graph);
    graph.branch(level, level_end);
    graph.branch(root, level);
    let end = eol_node(graph);
    graph.branch(root, end);
    root
}

/// `mainhand`/`offhand`/an item id (`nodes.py`'s `_loot_tool`).
fn loot_tool(graph: &mut Graph) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);
    let slot = enumerate_node_noted(graph, &["mainhand", "offhand"], &["note.loot.origin.tools.mainhand", "note.loot.origin.tools.offhand"]);
    let slot_end = eol_node(graph);
    graph.branch(slot, slot_end);
    graph.branch(root, slot);
    let item = namespaced_id_node(graph, Some("item"));
    let item_end = eol_node(graph);
    graph.branch(item, item_end);
    graph.branch(root, item);
    root
}

/// `kill <selector>`, `loot <string>` (`nodes.py`'s `_loot_origin`).
fn loot_origin(graph: &mut Graph) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);

    let kill = keyword_node(graph, "kill");
    graph.note(kill, "note.loot.origin.kill");
    graph.branch(root, kill);
    let (sel_entry, sel_exit) = selector(graph);
    graph.branch(kill, sel_entry);
    let tool1 = loot_tool(graph);
    graph.branch(sel_exit, tool1);
    let tool1_end = eol_node(graph);
    graph.branch(sel_exit, tool1_end);

    let loot_kw = keyword_node(graph, "loot");
    graph.note(loot_kw, "note.loot.origin.loot");
    graph.branch(root, loot_kw);
    let table = string_node(graph);
    graph.note(table, "note.loot.origin.loot_table");
    graph.branch(loot_kw, table);
    let tool2 = loot_tool(graph);
    graph.branch(table, tool2);
    let tool2_end = eol_node(graph);
    graph.branch(table, tool2_end);

    root
}

pub fn command(graph: &mut Graph) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);

    // `help [<page:int> | <command:word>]`
    let help = command_name(graph, &["help", "?"]);
    graph.branch(root, help);
    let help_page = integer_node(graph);
    graph.note(help_page, "note.help.on.page");
    let help_page_end = eol_node(graph);
    graph.branch(help_page, help_page_end);
    graph.branch(help, help_page);
    let help_cmd = crate::grammar::primitives::word_node(graph);
    graph.note(help_cmd, "note.help.on.command");
    let help_cmd_end = eol_node(graph);
    graph.branch(help_cmd, help_cmd_end);
    graph.branch(help, help_cmd);
    let help_end = eol_node(graph);
    graph.note(help_end, "note.help.on.page_1");
    graph.branch(help, help_end);

    // `ability <selector> [mayfly|worldbuilder|mute [<bool>]]`
    let ability = command_name(graph, &["ability"]);
    graph.branch(root, ability);
    let (ab_sel, ab_sel_exit) = selector(graph);
    graph.branch(ability, ab_sel);
    let ab_ability = enumerate_node_noted(
        graph,
        &["mayfly", "worldbuilder", "mute"],
        &["note.ability.abilities.mayfly", "note.ability.abilities.worldbuilder", "note.ability.abilities.mute"],
    );
    graph.branch(ab_sel_exit, ab_ability);
    let ab_set = boolean_node(graph);
    graph.note(ab_set, "note.ability.set");
    let ab_set_end = eol_node(graph);
    graph.branch(ab_set, ab_set_end);
    graph.branch(ab_ability, ab_set);
    let ab_query_ability = eol_node(graph);
    graph.note(ab_query_ability, "note.ability.query.ability");
    graph.branch(ab_ability, ab_query_ability);
    let ab_query_unknown = eol_node(graph);
    graph.note(ab_query_unknown, "note.ability.query.unknown");
    graph.branch(ab_sel_exit, ab_query_unknown);

    // `alwaysday`/`daylock [<bool>]`
    let alwaysday = command_name(graph, &["alwaysday", "daylock"]);
    graph.branch(root, alwaysday);
    let ad_set = boolean_node(graph);
    graph.note(ad_set, "note.alwaysday.set");
    let ad_set_end = eol_node(graph);
    graph.branch(ad_set, ad_set_end);
    graph.branch(alwaysday, ad_set);
    let ad_lock = eol_node(graph);
    graph.note(ad_lock, "note.alwaysday.lock");
    graph.branch(alwaysday, ad_lock);

    // `camerashake add <selector> <float> <float> [positional|rotational]`
    //            `stop <selector>`
    let camerashake = command_name(graph, &["camerashake"]);
    graph.branch(root, camerashake);
    let cs_add = keyword_node(graph, "add");
    graph.note(cs_add, "note.camerashake.add.root");
    graph.branch(camerashake, cs_add);
    let (cs_sel, cs_sel_exit) = selector(graph);
    graph.branch(cs_add, cs_sel);
    let cs_sel_end = eol_node(graph);
    graph.branch(cs_sel_exit, cs_sel_end);
    let cs_intensity = float_node(graph);
    graph.note(cs_intensity, "note.camerashake.add.intensity");
    graph.checker(cs_intensity, ranged_checker(0.0, 4.0));
    graph.branch(cs_sel_exit, cs_intensity);
    let cs_intensity_end = eol_node(graph);
    graph.branch(cs_intensity, cs_intensity_end);
    let cs_seconds = float_node(graph);
    graph.note(cs_seconds, "note.camerashake.add.seconds");
    graph.checker(cs_seconds, crate::grammar::checks::min_checker(0.0));
    graph.branch(cs_intensity, cs_seconds);
    let cs_seconds_end = eol_node(graph);
    graph.branch(cs_seconds, cs_seconds_end);
    let cs_type = enumerate_node_noted(graph, &["positional", "rotational"], &["note.camerashake.add.types.positional", "note.camerashake.add.types.rotational"]);
    graph.branch(cs_seconds, cs_type);
    let cs_type_end = eol_node(graph);
    graph.branch(cs_type, cs_type_end);
    let cs_stop = keyword_node(graph, "stop");
    graph.note(cs_stop, "note.camerashake.stop");
    graph.branch(camerashake, cs_stop);
    let (cs_stop_sel, cs_stop_sel_exit) = selector(graph);
    graph.branch(cs_stop, cs_stop_sel);
    let cs_stop_sel_end = eol_node(graph);
    graph.branch(cs_stop_sel_exit, cs_stop_sel_end);
    let cs_stop_end = eol_node(graph);
    graph.branch(cs_stop, cs_stop_end);

    // `clear [<selector> [<item> [<data> [<max_count>]]]]`
    let clear = command_name(graph, &["clear"]);
    graph.branch(root, clear);
    let clear_end = eol_node(graph);
    graph.branch(clear, clear_end);
    let (clear_sel, clear_sel_exit) = selector(graph);
    graph.branch(clear, clear_sel);
    let clear_sel_end = eol_node(graph);
    graph.branch(clear_sel_exit, clear_sel_end);
    let clear_item = namespaced_id_node(graph, Some("item"));
    graph.branch(clear_sel_exit, clear_item);
    let clear_item_end = eol_node(graph);
    graph.branch(clear_item, clear_item_end);
    let clear_data = item_data(graph, true);
    graph.branch(clear_item, clear_data);
    let clear_data_end = eol_node(graph);
    graph.branch(clear_data, clear_data_end);
    let clear_max = integer_node(graph);
    graph.note(clear_max, "note.clear.max_count");
    graph.checker(clear_max, crate::grammar::checks::min_checker(-1.0));
    let clear_max_end = eol_node(graph);
    graph.branch(clear_max, clear_max_end);
    graph.branch(clear_data, clear_max);

    // `clearspawnpoint [<selector>]`
    let clearspawnpoint = command_name(graph, &["clearspawnpoint"]);
    graph.branch(root, clearspawnpoint);
    let csp_end = eol_node(graph);
    graph.branch(clearspawnpoint, csp_end);
    let (csp_sel, csp_sel_exit) = selector(graph);
    graph.branch(clearspawnpoint, csp_sel);
    let csp_sel_end = eol_node(graph);
    graph.branch(csp_sel_exit, csp_sel_end);

    // `clone <pos3d> <pos3d> [masked|replace [force|move|normal] |
    //        filtered [force|move|normal] <block_spec>]`
    let clone = command_name(graph, &["clone"]);
    graph.branch(root, clone);
    let (clone_p1, clone_p1_exit) = pos3d(graph);
    graph.branch(clone, clone_p1);
    let (clone_p2, clone_p2_exit) = pos3d(graph);
    graph.branch(clone_p1_exit, clone_p2);
    let (clone_p3, clone_p3_exit) = pos3d(graph);
    graph.branch(clone_p2_exit, clone_p3);
    let clone_p3_end = eol_node(graph);
    graph.branch(clone_p3_exit, clone_p3_end);
    let clone_mask = enumerate_node_noted(graph, &["masked", "replace"], &["note.clone.masks.masked", "note.clone.masks.replace"]);
    graph.branch(clone_p3_exit, clone_mask);
    let clone_mask_end = eol_node(graph);
    graph.branch(clone_mask, clone_mask_end);
    let clone_mode = enumerate_node_noted(graph, &["force", "move", "normal"], &["note.clone.clones.force", "note.clone.clones.move", "note.clone.clones.normal"]);
    graph.branch(clone_mask, clone_mode);
    let clone_mode_end = eol_node(graph);
    graph.branch(clone_mode, clone_mode_end);
    let clone_filtered = keyword_node(graph, "filtered");
    graph.note(clone_filtered, "note.clone.filtered");
    graph.branch(clone_p3_exit, clone_filtered);
    let clone_filtered_mode = enumerate_node_noted(graph, &["force", "move", "normal"], &["note.clone.clones.force", "note.clone.clones.move", "note.clone.clones.normal"]);
    graph.branch(clone_filtered, clone_filtered_mode);
    let (clone_bs_entry, clone_bs_exit) = block_spec(graph, None);
    graph.branch(clone_filtered_mode, clone_bs_entry);
    let clone_bs_end = eol_node(graph);
    graph.branch(clone_bs_exit, clone_bs_end);

    // `wsserver`/`connect out` | `<address>`
    let wsserver = command_name(graph, &["wsserver", "connect"]);
    graph.branch(root, wsserver);
    let ws_out = keyword_node(graph, "out");
    graph.note(ws_out, "note.wsserver.out");
    let ws_out_end = eol_node(graph);
    graph.branch(ws_out, ws_out_end);
    graph.branch(wsserver, ws_out);
    let ws_addr = bare_text_node(graph, false);
    graph.note(ws_addr, "note.wsserver.address");
    let ws_addr_end = eol_node(graph);
    graph.branch(ws_addr, ws_addr_end);
    graph.branch(wsserver, ws_addr);

    // `damage <selector> <amount> [<damage_cause> [entity <selector>]]`
    let damage = command_name(graph, &["damage"]);
    graph.branch(root, damage);
    let (dmg_sel, dmg_sel_exit) = selector(graph);
    graph.branch(damage, dmg_sel);
    let dmg_amount = integer_node(graph);
    graph.note(dmg_amount, "note.damage.amount");
    graph.branch(dmg_sel_exit, dmg_amount);
    let dmg_amount_end = eol_node(graph);
    graph.branch(dmg_amount, dmg_amount_end);
    let dmg_cause = namespaced_id_node(graph, Some("damage_cause"));
    graph.branch(dmg_amount, dmg_cause);
    let dmg_cause_end = eol_node(graph);
    graph.branch(dmg_cause, dmg_cause_end);
    let dmg_entity_kw = keyword_node(graph, "entity");
    graph.note(dmg_entity_kw, "note.damage.damager");
    graph.branch(dmg_cause, dmg_entity_kw);
    let (dmg_entity_sel, dmg_entity_sel_exit) = selector(graph);
    graph.branch(dmg_entity_kw, dmg_entity_sel);
    let dmg_entity_end = eol_node(graph);
    graph.branch(dmg_entity_sel_exit, dmg_entity_end);

    // `deop <selector>`
    let deop = command_name(graph, &["deop"]);
    graph.branch(root, deop);
    let (deop_sel, deop_sel_exit) = selector(graph);
    graph.branch(deop, deop_sel);
    let deop_end = eol_node(graph);
    graph.branch(deop_sel_exit, deop_end);

    // `dialogue open <npc> <player> <scene>` / `change <npc> <scene> [<player>]`
    let dialogue = command_name(graph, &["dialogue"]);
    graph.branch(root, dialogue);
    let dlg_open = keyword_node(graph, "open");
    graph.note(dlg_open, "note.dialogue.modes.open");
    graph.branch(dialogue, dlg_open);
    let (dlg_npc, dlg_npc_exit) = selector(graph);
    graph.note(dlg_npc, "note.dialogue.npc");
    graph.branch(dlg_open, dlg_npc);
    let (dlg_player, dlg_player_exit) = selector(graph);
    graph.note(dlg_player, "note.dialogue.player");
    graph.branch(dlg_npc_exit, dlg_player);
    let dlg_scene = string_node(graph);
    graph.note(dlg_scene, "note.dialogue.scene");
    graph.branch(dlg_player_exit, dlg_scene);
    let dlg_scene_end = eol_node(graph);
    graph.branch(dlg_scene, dlg_scene_end);
    let dlg_change = keyword_node(graph, "change");
    graph.note(dlg_change, "note.dialogue.modes.change");
    graph.branch(dialogue, dlg_change);
    let (dlg_npc2, dlg_npc2_exit) = selector(graph);
    graph.note(dlg_npc2, "note.dialogue.npc");
    graph.branch(dlg_change, dlg_npc2);
    let dlg_scene2 = string_node(graph);
    graph.note(dlg_scene2, "note.dialogue.scene");
    graph.branch(dlg_npc2_exit, dlg_scene2);
    let dlg_scene2_end = eol_node(graph);
    graph.branch(dlg_scene2, dlg_scene2_end);
    let (dlg_player2, dlg_player2_exit) = selector(graph);
    graph.note(dlg_player2, "note.dialogue.player");
    graph.branch(dlg_scene2, dlg_player2);
    let dlg_player2_end = eol_node(graph);
    graph.branch(dlg_player2_exit, dlg_player2_end);

    // `difficulty <int 0..3> | peaceful|easy|normal|hard|p|e|n|h`
    let difficulty = command_name(graph, &["difficulty"]);
    graph.branch(root, difficulty);
    let diff_int = integer_node(graph);
    graph.checker(diff_int, one_of_checker(&[0, 1, 2, 3]));
    graph.font(diff_int, Font::Keyword);
    graph.note(diff_int, "note.difficulty.int");
    let diff_int_end = eol_node(graph);
    graph.branch(diff_int, diff_int_end);
    graph.branch(difficulty, diff_int);
    let diff_word = enumerate_node_noted(
        graph,
        &["peaceful", "easy", "normal", "hard", "p", "e", "n", "h"],
        &[
            "note.difficulty.diffs.peaceful",
            "note.difficulty.diffs.easy",
            "note.difficulty.diffs.normal",
            "note.difficulty.diffs.hard",
            "note.difficulty.diffs.peaceful",
            "note.difficulty.diffs.easy",
            "note.difficulty.diffs.normal",
            "note.difficulty.diffs.hard",
        ],
    );
    let diff_word_end = eol_node(graph);
    graph.branch(diff_word, diff_word_end);
    graph.branch(difficulty, diff_word);

    // `effect <selector> clear | <effect> <seconds> [<amplifier> [<bool>]]`
    let effect = command_name(graph, &["effect"]);
    graph.branch(root, effect);
    let (eff_sel, eff_sel_exit) = selector(graph);
    graph.branch(effect, eff_sel);
    let eff_clear = keyword_node(graph, "clear");
    graph.note(eff_clear, "note.effect.clear");
    let eff_clear_end = eol_node(graph);
    graph.branch(eff_clear, eff_clear_end);
    graph.branch(eff_sel_exit, eff_clear);
    let eff_id = namespaced_id_node(graph, Some("effect"));
    graph.branch(eff_sel_exit, eff_id);
    let eff_id_end = eol_node(graph);
    graph.branch(eff_id, eff_id_end);
    let eff_seconds = integer_node(graph);
    graph.note(eff_seconds, "note.effect.seconds");
    graph.checker(eff_seconds, crate::grammar::checks::min_checker(0.0));
    graph.branch(eff_id, eff_seconds);
    let eff_seconds_end = eol_node(graph);
    graph.branch(eff_seconds, eff_seconds_end);
    let eff_amp = integer_node(graph);
    graph.note(eff_amp, "note.effect.amplifier");
    graph.checker(eff_amp, ranged_checker(0.0, 255.0));
    graph.branch(eff_seconds, eff_amp);
    let eff_amp_end = eol_node(graph);
    graph.branch(eff_amp, eff_amp_end);
    let eff_hide = boolean_node(graph);
    graph.note(eff_hide, "note.effect.hide_particles");
    let eff_hide_end = eol_node(graph);
    graph.branch(eff_hide, eff_hide_end);
    graph.branch(eff_amp, eff_hide);

    // `enchant <selector> <int_id>|<enchantment> [<level>]`
    let enchant = command_name(graph, &["enchant"]);
    graph.branch(root, enchant);
    let (ench_sel, ench_sel_exit) = selector(graph);
    graph.branch(enchant, ench_sel);
    let ench_int = integer_node(graph);
    graph.note(ench_int, "note.enchant.int_id");
    graph.branch(ench_sel_exit, ench_int);
    let ench_tail1 = enchant_tail(graph);
    graph.branch(ench_int, ench_tail1);
    let ench_id = namespaced_id_node(graph, Some("enchantment"));
    graph.branch(ench_sel_exit, ench_id);
    let ench_tail2 = enchant_tail(graph);
    graph.branch(ench_id, ench_tail2);

    // `event entity <selector> <entity_event>`
    let event = command_name(graph, &["event"]);
    graph.branch(root, event);
    let event_entity = keyword_node(graph, "entity");
    graph.branch(event, event_entity);
    let (event_sel, event_sel_exit) = selector(graph);
    graph.branch(event_entity, event_sel);
    let event_id = namespaced_id_node(graph, Some("entity_event"));
    graph.branch(event_sel_exit, event_id);
    let event_end = eol_node(graph);
    graph.branch(event_id, event_end);

    // `execute ...` — modern tail-recursive chain from 1.19.50, legacy
    // one-shot form before.
    let execute = command_name(graph, &["execute"]);
    graph.branch(root, execute);
    let modern = execute_chain(graph, root);
    graph.branch_versioned(execute, modern, version_ge(Version::new(1, 19, 50)));
    let legacy = legacy_execute(graph, root);
    graph.branch_versioned(execute, legacy, version_lt(Version::new(1, 19, 50)));

    // `fill <pos3d> <pos3d> <block_spec> [replace [<block_spec>] |
    //       destroy|hollow|keep|outline]`
    let fill = command_name(graph, &["fill"]);
    graph.branch(root, fill);
    let (fill_p1, fill_p1_exit) = pos3d(graph);
    graph.branch(fill, fill_p1);
    let (fill_p2, fill_p2_exit) = pos3d(graph);
    graph.branch(fill_p1_exit, fill_p2);
    let fill_eol_tail = eol_node(graph);
    let (fill_bs, fill_bs_exit) = block_spec(graph, Some(fill_eol_tail));
    graph.branch(fill_p2_exit, fill_bs);
    let fill_bs_end = eol_node(graph);
    graph.branch(fill_bs_exit, fill_bs_end);
    let fill_replace = keyword_node(graph, "replace");
    graph.note(fill_replace, "note.fill.modes.replace.root");
    graph.branch(fill_bs_exit, fill_replace);
    let fill_replace_eol_tail = eol_node(graph);
    let (fill_replace_bs, fill_replace_bs_exit) = block_spec(graph, Some(fill_replace_eol_tail));
    graph.branch(fill_replace, fill_replace_bs);
    let fill_replace_bs_end = eol_node(graph);
    graph.branch(fill_replace_bs_exit, fill_replace_bs_end);
    let fill_replace_all = eol_node(graph);
    graph.note(fill_replace_all, "note.fill.modes.replace.all");
    graph.branch(fill_replace, fill_replace_all);
    let fill_mode = enumerate_node_noted(
        graph,
        &["destroy", "hollow", "keep", "outline"],
        &["note.fill.modes.destroy", "note.fill.modes.hollow", "note.fill.modes.keep", "note.fill.modes.outline"],
    );
    graph.branch(fill_bs_exit, fill_mode);
    let fill_mode_end = eol_node(graph);
    graph.branch(fill_mode, fill_mode_end);

    // `fog <selector> push <fog> <name> | pop|remove <name>`
    let fog = command_name(graph, &["fog"]);
    graph.branch(root, fog);
    let (fog_sel, fog_sel_exit) = selector(graph);
    graph.branch(fog, fog_sel);
    let fog_push = keyword_node(graph, "push");
    graph.note(fog_push, "note.fog.modes.push");
    graph.branch(fog_sel_exit, fog_push);
    let fog_id = namespaced_id_node(graph, Some("fog"));
    graph.branch(fog_push, fog_id);
    let fog_name1 = string_node(graph);
    graph.note(fog_name1, "note.fog.user_provided_name");
    graph.branch(fog_id, fog_name1);
    let fog_name1_end = eol_node(graph);
    graph.branch(fog_name1, fog_name1_end);
    let fog_other = enumerate_node_noted(graph, &["pop", "remove"], &["note.fog.modes.pop", "note.fog.modes.remove"]);
    graph.branch(fog_sel_exit, fog_other);
    let fog_name2 = string_node(graph);
    graph.note(fog_name2, "note.fog.user_provided_name");
    graph.branch(fog_other, fog_name2);
    let fog_name2_end = eol_node(graph);
    graph.branch(fog_name2, fog_name2_end);

    // `function <path>`
    let function = command_name(graph, &["function"]);
    graph.branch(root, function);
    let func_path = bare_text_node(graph, false);
    graph.note(func_path, "note.function.path");
    let func_path_end = eol_node(graph);
    graph.branch(func_path, func_path_end);
    graph.branch(function, func_path);

    // `gamemode <game_mode>`
    let gamemode = command_name(graph, &["gamemode"]);
    graph.branch(root, gamemode);
    let gm = game_mode(graph, true);
    let gm_end = eol_node(graph);
    graph.branch(gm, gm_end);
    graph.branch(gamemode, gm);

    // `gamerule <rule> [<int>|<bool>]`
    let gamerule = command_name(graph, &["gamerule"]);
    graph.branch(root, gamerule);
    let gr_id = catalogued_word_node(graph, "game_rule");
    graph.branch(gamerule, gr_id);
    let gr_int = integer_node(graph);
    graph.note(gr_int, "note.gamerule.value");
    let gr_int_end = eol_node(graph);
    graph.branch(gr_int, gr_int_end);
    graph.branch(gr_id, gr_int);
    let gr_bool = boolean_node(graph);
    graph.note(gr_bool, "note.gamerule.value");
    let gr_bool_end = eol_node(graph);
    graph.branch(gr_bool, gr_bool_end);
    graph.branch(gr_id, gr_bool);
    let gr_query = eol_node(graph);
    graph.note(gr_query, "note.gamerule.query");
    graph.branch(gr_id, gr_query);

    // `give <selector> <item> [<amount> [<data> [<item_components>]]]`
    let give = command_name(graph, &["give"]);
    graph.branch(root, give);
    let (give_sel, give_sel_exit) = selector(graph);
    graph.branch(give, give_sel);
    let give_item = namespaced_id_node(graph, Some("item"));
    graph.branch(give_sel_exit, give_item);
    let give_item_end = eol_node(graph);
    graph.branch(give_item, give_item_end);
    let give_amount = integer_node(graph);
    graph.note(give_amount, "note.give.amount");
    graph.checker(give_amount, ranged_checker(1.0, 32767.0));
    let give_amount_end = eol_node(graph);
    graph.branch(give_amount, give_amount_end);
    graph.branch(give_item, give_amount);
    let give_data = item_data(graph, false);
    let give_data_end = eol_node(graph);
    graph.branch(give_data, give_data_end);
    graph.branch(give_amount, give_data);
    let (give_components, give_components_exit) = item_components_value(graph);
    let give_components_end = eol_node(graph);
    graph.branch(give_components_exit, give_components_end);
    graph.branch(give_data, give_components);

    // `immutableworld [<bool>]`
    let immutableworld = command_name(graph, &["immutableworld"]);
    graph.branch(root, immutableworld);
    let iw_set = boolean_node(graph);
    graph.note(iw_set, "note.immutableworld.set");
    let iw_set_end = eol_node(graph);
    graph.branch(iw_set, iw_set_end);
    graph.branch(immutableworld, iw_set);
    let iw_query = eol_node(graph);
    graph.note(iw_query, "note.immutableworld.query");
    graph.branch(immutableworld, iw_query);

    // `inputpermission query <selector> <permission> [enabled|disabled]`
    //                  `set <selector> <permission> enabled|disabled`
    let inputpermission = command_name(graph, &["inputpermission"]);
    let inputpermission_versioned = graph.alloc(NodeKind::Compressed);
    graph.branch_versioned(root, inputpermission_versioned, version_ge(Version::new(1, 19, 80)));
    graph.branch(inputpermission_versioned, inputpermission);
    let ip_query = keyword_node(graph, "query");
    graph.note(ip_query, "note.inputpermission.query.root");
    graph.branch(inputpermission, ip_query);
    let (ip_query_sel, ip_query_sel_exit) = selector(graph);
    graph.branch(ip_query, ip_query_sel);
    let ip_query_perm = catalogued_word_node(graph, "permission");
    graph.branch(ip_query_sel_exit, ip_query_perm);
    let ip_query_state = enumerate_node(graph, &["enabled", "disabled"]);
    graph.note(ip_query_state, "note.inputpermission.query.equal");
    graph.font(ip_query_state, Font::Keyword);
    let ip_query_state_end = eol_node(graph);
    graph.branch(ip_query_state, ip_query_state_end);
    graph.branch(ip_query_perm, ip_query_state);
    let ip_query_normal = eol_node(graph);
    graph.note(ip_query_normal, "note.inputpermission.query.normal");
    graph.branch(ip_query_perm, ip_query_normal);
    let ip_set = keyword_node(graph, "set");
    graph.note(ip_set, "note.inputpermission.set");
    graph.branch(inputpermission, ip_set);
    let (ip_set_sel, ip_set_sel_exit) = selector(graph);
    graph.branch(ip_set, ip_set_sel);
    let ip_set_perm = catalogued_word_node(graph, "permission");
    graph.branch(ip_set_sel_exit, ip_set_perm);
    let ip_set_state = enumerate_node(graph, &["enabled", "disabled"]);
    graph.font(ip_set_state, Font::Keyword);
    let ip_set_state_end = eol_node(graph);
    graph.branch(ip_set_state, ip_set_state_end);
    graph.branch(ip_set_perm, ip_set_state);

    // `kick <selector> [<reason>]`
    let kick = command_name(graph, &["kick"]);
    graph.branch(root, kick);
    let (kick_sel, kick_sel_exit) = selector(graph);
    graph.note(kick_sel, "note.kick.target");
    graph.branch(kick, kick_sel);
    let kick_reason = bare_text_node(graph, true);
    graph.note(kick_reason, "note.kick.reason");
    let kick_reason_end = eol_node(graph);
    graph.branch(kick_reason, kick_reason_end);
    graph.branch(kick_sel_exit, kick_reason);
    let kick_end = eol_node(graph);
    graph.branch(kick_sel_exit, kick_end);

    // `kill [<selector>]`
    let kill = command_name(graph, &["kill"]);
    graph.branch(root, kill);
    let kill_end = eol_node(graph);
    graph.branch(kill, kill_end);
    let (kill_sel, kill_sel_exit) = selector(graph);
    graph.branch(kill, kill_sel);
    let kill_sel_end = eol_node(graph);
    graph.branch(kill_sel_exit, kill_sel_end);

    // `list`
    let list = command_name(graph, &["list"]);
    graph.branch(root, list);
    let list_end = eol_node(graph);
    graph.branch(list, list_end);

    // `locate biome <biome> | structure <structure> [<bool>] | <structure> [<bool>]`
    let locate = command_name(graph, &["locate"]);
    graph.branch(root, locate);
    let loc_biome_gate = graph.alloc(NodeKind::Compressed);
    graph.branch_versioned(locate, loc_biome_gate, version_ge(Version::new(1, 19, 10)));
    let loc_biome = keyword_node(graph, "biome");
    graph.note(loc_biome, "note.locate.biome");
    graph.branch(loc_biome_gate, loc_biome);
    let loc_biome_id = namespaced_id_node(graph, Some("biome"));
    let loc_biome_end = eol_node(graph);
    graph.branch(loc_biome_id, loc_biome_end);
    graph.branch(loc_biome, loc_biome_id);

    let loc_structure_gate = graph.alloc(NodeKind::Compressed);
    graph.branch_versioned(locate, loc_structure_gate, version_ge(Version::new(1, 19, 10)));
    let loc_structure = keyword_node(graph, "structure");
    graph.note(loc_structure, "note.locate.structure.root");
    graph.branch(loc_structure_gate, loc_structure);
    let loc_structure_id = namespaced_id_node(graph, Some("structure"));
    graph.branch(loc_structure, loc_structure_id);
    let loc_structure_end = eol_node(graph);
    graph.branch(loc_structure_id, loc_structure_end);
    let loc_new_chunks = boolean_node(graph);
    graph.note(loc_new_chunks, "note.locate.structure.new_chunks");
    let loc_new_chunks_end = eol_node(graph);
    graph.branch(loc_new_chunks, loc_new_chunks_end);
    graph.branch(loc_structure_id, loc_new_chunks);

    let loc_legacy_gate = graph.alloc(NodeKind::Compressed);
    graph.branch_versioned(locate, loc_legacy_gate, version_lt(Version::new(1, 19, 30)));
    let loc_legacy_id = namespaced_id_node(graph, Some("structure"));
    graph.branch(loc_legacy_gate, loc_legacy_id);
    let loc_legacy_end = eol_node(graph);
    graph.branch(loc_legacy_id, loc_legacy_end);
    let loc_legacy_new_chunks = boolean_node(graph);
    graph.note(loc_legacy_new_chunks, "note.locate.structure.new_chunks");
    let loc_legacy_new_chunks_end = eol_node(graph);
    graph.branch(loc_legacy_new_chunks, loc_legacy_new_chunks_end);
    graph.branch(loc_legacy_id, loc_legacy_new_chunks);

    // `loot give|insert|spawn ... | replace entity ... | replace block ...`
    let loot = command_name(graph, &["loot"]);
    let loot_gate = graph.alloc(NodeKind::Compressed);
    graph.branch_versioned(root, loot_gate, version_ge(Version::new(1, 19, 0)));
    graph.branch(loot_gate, loot);
    let loot_give = keyword_node(graph, "give");
    graph.note(loot_give, "note.loot.give");
    graph.branch(loot, loot_give);
    let (loot_give_sel, loot_give_sel_exit) = selector(graph);
    graph.branch(loot_give, loot_give_sel);
    let loot_give_origin = loot_origin(graph);
    graph.branch(loot_give_sel_exit, loot_give_origin);

    let loot_insert = keyword_node(graph, "insert");
    graph.note(loot_insert, "note.loot.insert");
    graph.branch(loot, loot_insert);
    let (loot_insert_pos, loot_insert_pos_exit) = pos3d(graph);
    graph.branch(loot_insert, loot_insert_pos);
    let loot_insert_origin = loot_origin(graph);
    graph.branch(loot_insert_pos_exit, loot_insert_origin);

    let loot_spawn = keyword_node(graph, "spawn");
    graph.note(loot_spawn, "note.loot.spawn");
    graph.branch(loot, loot_spawn);
    let (loot_spawn_pos, loot_spawn_pos_exit) = pos3d(graph);
    graph.branch(loot_spawn, loot_spawn_pos);
    let loot_spawn_origin = loot_origin(graph);
    graph.branch(loot_spawn_pos_exit, loot_spawn_origin);

    let loot_replace = keyword_node(graph, "replace");
    graph.note(loot_replace, "note.loot.replace.root");
    graph.branch(loot, loot_replace);
    let loot_replace_entity = keyword_node(graph, "entity");
    graph.note(loot_replace_entity, "note.loot.replace.entity");
    graph.branch(loot_replace, loot_replace_entity);
    let (loot_re_sel, loot_re_sel_exit) = selector(graph);
    graph.branch(loot_replace_entity, loot_re_sel);
    let loot_re_slot = string_node(graph);
    graph.branch(loot_re_sel_exit, loot_re_slot);
    let loot_re_count = integer_node(graph);
    graph.note(loot_re_count, "note.loop.replace.slot_count");
    let loot_re_count_origin = loot_origin(graph);
    graph.branch(loot_re_count, loot_re_count_origin);
    graph.branch(loot_re_slot, loot_re_count);
    let loot_re_direct_origin = loot_origin(graph);
    graph.branch(loot_re_slot, loot_re_direct_origin);

    let loot_replace_block_gate = graph.alloc(NodeKind::Compressed);
    graph.branch_versioned(loot_replace, loot_replace_block_gate, version_ge(Version::new(1, 19, 40)));
    let loot_replace_block = keyword_node(graph, "block");
    graph.note(loot_replace_block, "note.loot.replace.block");
    graph.branch(loot_replace_block_gate, loot_replace_block);
    let (loot_rb_pos, loot_rb_pos_exit) = pos3d(graph);
    graph.branch(loot_replace_block, loot_rb_pos);
    let loot_rb_slot = string_node(graph);
    graph.branch(loot_rb_pos_exit, loot_rb_slot);
    let loot_rb_count = integer_node(graph);
    graph.note(loot_rb_count, "note.loop.replace.slot_count");
    let loot_rb_count_origin = loot_origin(graph);
    graph.branch(loot_rb_count, loot_rb_count_origin);
    graph.branch(loot_rb_slot, loot_rb_count);
    let loot_rb_direct_origin = loot_origin(graph);
    graph.branch(loot_rb_slot, loot_rb_direct_origin);

    // `tellraw <selector> <rawtext json>`
    let tellraw = command_name(graph, &["tellraw"]);
    graph.branch(root, tellraw);
    let (tr_sel, tr_sel_exit) = selector(graph);
    graph.branch(tellraw, tr_sel);
    let (tr_json_entry, tr_json_exit) = rawtext_value(graph);
    graph.branch(tr_sel_exit, tr_json_entry);
    let tr_json_end = eol_node(graph);
    graph.branch(tr_json_exit, tr_json_end);

    root
}

/// A command, a `#comment`, or a blank line (`nodes.py`'s `mcfuncline`).
pub fn mcfuncline(graph: &mut Graph) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);
    let cmd = command(graph);
    graph.branch(root, cmd);

    let hash = char_node(graph, '#');
    graph.font(hash, Font::Comment);
    graph.note(hash, "note._comment");
    graph.branch(root, hash);
    let comment_text = bare_text_node(graph, true);
    graph.font(comment_text, Font::Comment);
    let comment_end = eol_node(graph);
    graph.branch(comment_text, comment_end);
    graph.branch(hash, comment_text);

    let empty = eol_node(graph);
    graph.note(empty, "note._empty_line");
    graph.branch(root, empty);

    root
}
