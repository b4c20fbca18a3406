//! Escape sequence detector tests

use uart_console::console::escape::{ControlCode, EscapeAction, EscapeDetector, EscapeState};

#[test]
fn test_escape_up_and_down() {
    let mut det = EscapeDetector::new(b"\x1b[");

    assert_eq!(det.feed(0x1B), EscapeAction::Consumed);
    assert_eq!(det.feed(b'['), EscapeAction::Consumed);
    assert_eq!(det.feed(b'A'), EscapeAction::Control(ControlCode::Up));

    assert_eq!(det.feed(0x1B), EscapeAction::Consumed);
    assert_eq!(det.feed(b'['), EscapeAction::Consumed);
    assert_eq!(det.feed(b'B'), EscapeAction::Control(ControlCode::Down));
}

#[test]
fn test_escape_unmapped_control() {
    let mut det = EscapeDetector::new(b"\x1b[");

    det.feed(0x1B);
    det.feed(b'[');
    assert_eq!(det.feed(b'C'), EscapeAction::Control(ControlCode::Other(b'C')));
    assert_eq!(det.state(), EscapeState::Idle);
}

#[test]
fn test_escape_ordinary_bytes_pass_through() {
    let mut det = EscapeDetector::new(b"\x1b[");

    assert_eq!(det.feed(b'h'), EscapeAction::PassThrough);
    assert_eq!(det.feed(b'['), EscapeAction::PassThrough);
    assert_eq!(det.state(), EscapeState::Idle);
}

#[test]
fn test_escape_mismatch_resets() {
    let mut det = EscapeDetector::new(b"\x1b[");

    det.feed(0x1B);
    assert_eq!(det.state(), EscapeState::Matching(1));

    assert_eq!(det.feed(b'x'), EscapeAction::PassThrough);
    assert_eq!(det.state(), EscapeState::Idle);

    // A following 'A' is ordinary input, not a control code
    assert_eq!(det.feed(b'A'), EscapeAction::PassThrough);
}

#[test]
fn test_escape_mismatch_is_not_retested() {
    let mut det = EscapeDetector::new(b"\x1b[");

    det.feed(0x1B);
    // Second ESC breaks the match and is handed back, not restarted
    assert_eq!(det.feed(0x1B), EscapeAction::PassThrough);
    assert_eq!(det.feed(b'['), EscapeAction::PassThrough);
}

#[test]
fn test_escape_disabled_when_empty() {
    let mut det = EscapeDetector::new(b"");

    assert_eq!(det.feed(0x1B), EscapeAction::PassThrough);
    assert_eq!(det.feed(b'['), EscapeAction::PassThrough);
    assert_eq!(det.feed(b'A'), EscapeAction::PassThrough);
    assert_eq!(det.state(), EscapeState::Idle);
}

#[test]
fn test_escape_custom_template() {
    let mut det = EscapeDetector::new(b"\x1bO");

    assert_eq!(det.feed(0x1B), EscapeAction::Consumed);
    assert_eq!(det.feed(b'O'), EscapeAction::Consumed);
    assert_eq!(det.state(), EscapeState::ControlReady);
    assert_eq!(det.feed(b'A'), EscapeAction::Control(ControlCode::Up));
}

#[test]
fn test_escape_template_truncated_to_four() {
    let det = EscapeDetector::new(b"abcdef");
    assert_eq!(det.template(), b"abcd");
}

#[test]
fn test_escape_single_byte_template() {
    let mut det = EscapeDetector::new(b"~");

    assert_eq!(det.feed(b'~'), EscapeAction::Consumed);
    assert_eq!(det.feed(b'B'), EscapeAction::Control(ControlCode::Down));
}
