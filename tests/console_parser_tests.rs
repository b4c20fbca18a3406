//! Parser tests for console command line parsing

use uart_console::console::parser::{parse_line, ParsedCommand};

#[test]
fn test_parse_simple_command() {
    let cmd = parse_line("help");
    assert_eq!(cmd.command(), "help");
    assert_eq!(cmd.argc(), 1);
    assert_eq!(cmd.arg(0), None);
}

#[test]
fn test_parse_command_with_one_arg() {
    let cmd = parse_line("show wpm");
    assert_eq!(cmd.command(), "show");
    assert_eq!(cmd.arg(0), Some("wpm"));
    assert_eq!(cmd.arg(1), None);
}

#[test]
fn test_parse_command_with_two_args() {
    let cmd = parse_line("set wpm 25");
    assert_eq!(cmd.argv(), &["set", "wpm", "25"]);
    assert_eq!(cmd.argc(), 3);
    assert_eq!(cmd.arg(1), Some("25"));
}

#[test]
fn test_parse_collapses_spaces() {
    let cmd = parse_line("  show   keyer*  ");
    assert_eq!(cmd.command(), "show");
    assert_eq!(cmd.argv(), &["show", "keyer*"]);
}

#[test]
fn test_parse_splits_on_space_only() {
    let cmd = parse_line("a\tb c");
    assert_eq!(cmd.argv(), &["a\tb", "c"]);
}

#[test]
fn test_parse_empty_line() {
    let cmd = parse_line("");
    assert_eq!(cmd.command(), "");
    assert!(cmd.is_empty());

    let blank = parse_line("    ");
    assert_eq!(blank.argc(), 0);
}

#[test]
fn test_parse_no_argument_limit() {
    let cmd = parse_line("debug wifi warn extra kept too");
    assert_eq!(cmd.argc(), 6);
    assert_eq!(cmd.arg(4), Some("too"));
}

#[test]
fn test_empty_command() {
    let cmd = ParsedCommand::default();
    assert_eq!(cmd.command(), "");
    assert_eq!(cmd.argc(), 0);
}
