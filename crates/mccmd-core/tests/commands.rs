use expect_test::expect;
use mccmd_core::{DiagnosticKind, MCCmdParser, Version};
use mccmd_idtable::IdTable;

fn assert_clean(parser: &MCCmdParser, line: &str) {
    let outcome = parser.parse_line(line);
    assert!(outcome.diagnostics.is_empty(), "{line:?} produced diagnostics: {:?}", outcome.diagnostics);
}

fn assert_errors(parser: &MCCmdParser, line: &str) {
    let outcome = parser.parse_line(line);
    assert!(!outcome.diagnostics.is_empty(), "{line:?} parsed cleanly, expected a diagnostic");
}

#[test]
fn blank_and_comment_lines_are_accepted() {
    let parser = MCCmdParser::new(Version::default());
    assert_clean(&parser, "");
    assert_clean(&parser, "# a comment");
}

#[test]
fn unknown_command_is_an_error() {
    let parser = MCCmdParser::new(Version::default());
    assert_errors(&parser, "notarealcommand foo");
}

#[test]
fn give_parses_selector_item_and_amount() {
    let parser = MCCmdParser::new(Version::default());
    assert_clean(&parser, "give @s minecraft:stick");
    assert_clean(&parser, "give @s minecraft:stick 4");
}

#[test]
fn give_amount_out_of_range_is_an_error() {
    let parser = MCCmdParser::new(Version::default());
    assert_errors(&parser, "give @s minecraft:stick 99999");
}

#[test]
fn kill_and_list_take_no_or_optional_args() {
    let parser = MCCmdParser::new(Version::default());
    assert_clean(&parser, "list");
    assert_clean(&parser, "kill");
    assert_clean(&parser, "kill @e");
}

#[test]
fn modern_execute_chain_runs_a_subcommand() {
    let parser = MCCmdParser::new(Version::new(1, 19, 80));
    assert_clean(&parser, "execute as @a at @s run list");
    assert_clean(&parser, "execute if entity @s run list");
    assert_clean(&parser, "execute if block ~ ~ ~ minecraft:stone run list");
}

#[test]
fn legacy_execute_is_only_valid_before_1_19_50() {
    let legacy = MCCmdParser::new(Version::new(1, 16, 0));
    assert_clean(&legacy, "execute @s ~ ~ ~ list");

    let modern = MCCmdParser::new(Version::new(1, 19, 80));
    assert_errors(&modern, "execute @s ~ ~ ~ list");
}

#[test]
fn inputpermission_is_gated_by_version() {
    let too_old = MCCmdParser::new(Version::new(1, 19, 70));
    assert_errors(&too_old, "inputpermission query @s camera");

    let new_enough = MCCmdParser::new(Version::new(1, 19, 80));
    assert_clean(&new_enough, "inputpermission query @s camera");
}

#[test]
fn tellraw_accepts_json_object() {
    let parser = MCCmdParser::new(Version::default());
    assert_clean(&parser, r#"tellraw @a {"rawtext":[{"text":"hi"}]}"#);
    assert_clean(&parser, r#"tellraw @a {"rawtext":[{"translate":"some.key","with":["5"]}]}"#);
    assert_clean(&parser, r#"tellraw @a {"rawtext":[{"score":{"objective":"health","name":"@s"}}]}"#);
}

#[test]
fn tellraw_rejects_rawtext_that_does_not_match_the_schema() {
    let parser = MCCmdParser::new(Version::default());
    // no "rawtext" wrapper at all
    assert_errors(&parser, r#"tellraw @a {"text":"hi"}"#);
    // unknown key inside a rawtext entry
    assert_errors(&parser, r#"tellraw @a {"rawtext":[{"bogus":"hi"}]}"#);
    // "translate" given a JSON object instead of a string
    assert_errors(&parser, r#"tellraw @a {"rawtext":[{"translate":{"nope":1}}]}"#);
    // unknown key inside a "score" object
    assert_errors(&parser, r#"tellraw @a {"rawtext":[{"score":{"bogus":"health"}}]}"#);
}

#[test]
fn selector_filters_parse() {
    let parser = MCCmdParser::new(Version::default());
    assert_clean(&parser, "kill @e[type=minecraft:zombie,r=10]");
    assert_clean(&parser, "kill @e[scores={foo=1..5}]");
}

#[test]
fn gamerule_query_and_set_both_parse() {
    let parser = MCCmdParser::new(Version::default());
    assert_clean(&parser, "gamerule dofiretick");
    assert_clean(&parser, "gamerule dofiretick false");
}

#[test]
fn trailing_garbage_is_too_many_args() {
    let parser = MCCmdParser::new(Version::default());
    let outcome = parser.parse_line("list garbage");
    assert!(outcome.diagnostics.iter().any(|d| d.kind == DiagnosticKind::ArgParse));
}

#[test]
fn font_marks_cover_the_command_keyword() {
    let parser = MCCmdParser::new(Version::default());
    let outcome = parser.parse_line("list");
    assert!(!outcome.font_marks.is_empty());
    assert_eq!(outcome.font_marks[0].span.begin.column, 0);
}

#[test]
fn gamerule_name_suggestions_come_from_the_id_table() {
    let table = IdTable::load(r#"{"game_rule": {"dofiretick": null, "keepinventory": null}}"#, false)
        .expect("valid catalogue JSON");
    let parser = MCCmdParser::new(Version::default()).with_id_table(table);

    let line = "gamerule dofire";
    let outcome = parser.parse_line(line);
    assert!(outcome.diagnostics.is_empty(), "{line:?} produced diagnostics: {:?}", outcome.diagnostics);

    let suggestions = outcome.suggestions_at(&parser, line.chars().count());
    assert!(
        suggestions.iter().any(|s| s.inserts == "dofiretick"),
        "expected a catalogued \"dofiretick\" suggestion, got {:?}",
        suggestions.iter().map(|s| &s.inserts).collect::<Vec<_>>()
    );
}

#[test]
fn unknown_command_diagnostic_snapshot() {
    let parser = MCCmdParser::new(Version::default());
    let outcome = parser.parse_line("notarealcommand foo");
    let keys: Vec<&str> = outcome.diagnostics.iter().map(|d| d.message_key).collect();
    // The deepest-failure tie is broken by declaration order, and `help`'s
    // `enumerate_node(["help", "?"])` is the first branch under the root.
    expect![[r#"
        [
            "error.expect.enum",
        ]
    "#]]
    .assert_debug_eq(&keys);
}
