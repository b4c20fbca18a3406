//! Tab completion tests

use uart_console::console::completion::complete;

#[test]
fn test_complete_divergent_second_char() {
    // "help" and "history" only share "h"
    let result = complete(b"h", &["help", "history"]);
    assert_eq!(result, None);
}

#[test]
fn test_complete_divergent_after_prefix() {
    // "status" and "stop" diverge right after "st" ('a' vs 'o')
    let result = complete(b"st", &["status", "stop"]);
    assert_eq!(result, None);
}

#[test]
fn test_complete_common_extension() {
    let result = complete(b"s", &["stats", "status"]);
    assert_eq!(result, Some(&b"tat"[..]));
}

#[test]
fn test_complete_single_candidate() {
    let result = complete(b"he", &["help", "set", "show"]);
    assert_eq!(result, Some(&b"lp"[..]));
}

#[test]
fn test_complete_ignores_non_matching_names() {
    let result = complete(b"sh", &["help", "save", "set", "show", "stats"]);
    assert_eq!(result, Some(&b"ow"[..]));
}

#[test]
fn test_complete_no_match() {
    let result = complete(b"xyz", &["help", "set", "show"]);
    assert_eq!(result, None);
}

#[test]
fn test_complete_partial_mismatch() {
    // First char matches, second matches nothing
    let result = complete(b"hx", &["help", "history"]);
    assert_eq!(result, None);
}

#[test]
fn test_complete_empty_line() {
    let result = complete(b"", &["help"]);
    assert_eq!(result, None);
}

#[test]
fn test_complete_exact_match_with_longer_sibling() {
    // "help" is complete; "helpme" would need a char "help" lacks
    let result = complete(b"help", &["help", "helpme"]);
    assert_eq!(result, None);
}

#[test]
fn test_complete_elimination_is_sticky() {
    // "xbcd" fails at position 0 and stays out even though it matches at 1
    let result = complete(b"ab", &["abc", "xbcd"]);
    assert_eq!(result, Some(&b"c"[..]));
}

#[test]
fn test_complete_shorter_name_eliminated() {
    let result = complete(b"stat", &["st", "stats", "status"]);
    assert_eq!(result, None);

    let result = complete(b"stat", &["st", "stats"]);
    assert_eq!(result, Some(&b"s"[..]));
}

#[test]
fn test_complete_duplicates_agree() {
    let result = complete(b"re", &["reboot", "reboot"]);
    assert_eq!(result, Some(&b"boot"[..]));
}

#[test]
fn test_complete_no_commands() {
    let result = complete(b"a", &[]);
    assert_eq!(result, None);
}
