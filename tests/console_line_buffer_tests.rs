//! Line buffer tests

use uart_console::console::line_buffer::LineBuffer;

#[test]
fn test_line_buffer_push() {
    let mut buf = LineBuffer::new(64);

    buf.push(b'h');
    buf.push(b'e');
    buf.push(b'l');
    buf.push(b'p');

    assert_eq!(buf.as_str(), "help");
}

#[test]
fn test_line_buffer_round_trip() {
    let mut buf = LineBuffer::new(64);
    let s = "set wpm 25";

    for c in s.bytes() {
        assert!(buf.push(c));
    }

    assert_eq!(buf.as_bytes(), s.as_bytes());
    assert_eq!(buf.len(), s.len());
}

#[test]
fn test_line_buffer_backspace() {
    let mut buf = LineBuffer::new(64);

    buf.load(b"help");
    assert!(buf.backspace());
    assert!(buf.backspace());

    assert_eq!(buf.as_str(), "he");
    // Vacated cells are cleared
    assert_eq!(buf.raw()[2], 0);
    assert_eq!(buf.raw()[3], 0);
}

#[test]
fn test_line_buffer_backspace_empty() {
    let mut buf = LineBuffer::new(64);

    assert!(!buf.backspace()); // should not panic
    assert_eq!(buf.as_str(), "");
    assert_eq!(buf.len(), 0);
}

#[test]
fn test_line_buffer_clear() {
    let mut buf = LineBuffer::new(64);

    buf.load(b"help");
    buf.clear();

    assert_eq!(buf.as_str(), "");
    assert!(buf.is_empty());
    assert!(buf.raw().iter().all(|&b| b == 0));
}

#[test]
fn test_line_buffer_load_text() {
    let mut buf = LineBuffer::new(64);

    buf.load(b"show wpm");
    assert_eq!(buf.as_str(), "show wpm");
}

#[test]
fn test_line_buffer_overflow() {
    let mut buf = LineBuffer::new(64);

    // Push 70 characters (buffer is 64, one byte reserved)
    for i in 0..70u8 {
        buf.push(b'a' + (i % 26));
    }

    assert_eq!(buf.len(), 63);
    assert!(buf.is_full());
    assert!(!buf.push(b'z'));
    assert_eq!(buf.raw()[63], 0);
}

#[test]
fn test_line_buffer_load_stops_at_zero() {
    let mut buf = LineBuffer::new(16);
    let mut slot = [0u8; 16];
    slot[..4].copy_from_slice(b"stat");
    slot[6] = b'x'; // garbage past the terminator is ignored

    let shown = buf.load(&slot).to_vec();

    assert_eq!(shown, b"stat");
    assert_eq!(buf.as_str(), "stat");
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_line_buffer_load_caps_at_capacity() {
    let mut buf = LineBuffer::new(4);

    buf.load(b"abcdef");

    assert_eq!(buf.as_str(), "abc");
    assert!(buf.is_full());
}

#[test]
fn test_line_buffer_load_replaces_previous_content() {
    let mut buf = LineBuffer::new(16);

    buf.load(b"reboot confirm");
    buf.load(b"ls\0");

    assert_eq!(buf.as_str(), "ls");
    assert!(buf.raw()[2..].iter().all(|&b| b == 0));
}
