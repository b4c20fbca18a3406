//! Module: config
//!
//! Purpose: Construction-time parameters for a console session.
//!
//! Architecture:
//! - Defaults reproduce the classic UART console footprint
//!   (64-byte lines, 8 history slots, 32 commands, 16-byte prompt)
//! - Every capacity is a runtime value so a port can trade memory for depth
//! - Values are normalized once in `Console::new`, never re-checked on the hot path

use alloc::string::String;
use heapless::Vec;

/// Default prompt text.
pub const DEFAULT_PROMPT: &str = "PulseRain >> ";

/// Default line buffer size in bytes (one byte is reserved for the terminator).
pub const LINE_CAPACITY: usize = 64;

/// Default number of history slots.
pub const HISTORY_DEPTH: usize = 8;

/// Default command registry capacity.
pub const MAX_COMMANDS: usize = 32;

/// Default prompt storage, terminator included.
pub const MAX_PROMPT_LEN: usize = 16;

/// Longest escape lead-in the detector accepts.
pub const MAX_ESCAPE_SEQ_LEN: usize = 4;

/// Default escape lead-in: `ESC [`.
pub const DEFAULT_ESCAPE_SEQUENCE: [u8; 2] = [0x1B, b'['];

/// Control code for the Up arrow (`\101`).
pub const CONTROL_UP: u8 = b'A';

/// Control code for the Down arrow (`\102`).
pub const CONTROL_DOWN: u8 = b'B';

/// Input validation predicate: returns true if the byte may be inserted.
pub type Validator = fn(u8) -> bool;

/// Default validator: alphanumeric, ASCII punctuation or the space character.
pub fn default_validator(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c.is_ascii_punctuation() || c == b' '
}

/// Truncate an escape lead-in to [`MAX_ESCAPE_SEQ_LEN`] bytes.
pub fn escape_template(seq: &[u8]) -> Vec<u8, MAX_ESCAPE_SEQ_LEN> {
    let len = seq.len().min(MAX_ESCAPE_SEQ_LEN);
    Vec::from_slice(&seq[..len]).unwrap_or_default()
}

/// How the history ring tracks its cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// One cursor is both the next write slot and the recall position.
    ///
    /// Browsing with Up/Down and then submitting overwrites the slot that was
    /// on screen, not the oldest one.
    #[default]
    SharedCursor,
    /// Recall uses its own cursor, rewound to the write slot on every submit.
    SeparateCursor,
}

/// Console session configuration.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    pub prompt: String,
    pub line_capacity: usize,
    pub history_depth: usize,
    pub max_commands: usize,
    pub max_prompt_len: usize,
    pub escape_sequence: Vec<u8, MAX_ESCAPE_SEQ_LEN>,
    pub validator: Validator,
    /// Echo raw bytes verbatim and skip all line editing.
    pub echo: bool,
    pub history_mode: HistoryMode,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: String::from(DEFAULT_PROMPT),
            line_capacity: LINE_CAPACITY,
            history_depth: HISTORY_DEPTH,
            max_commands: MAX_COMMANDS,
            max_prompt_len: MAX_PROMPT_LEN,
            escape_sequence: escape_template(&DEFAULT_ESCAPE_SEQUENCE),
            validator: default_validator,
            echo: false,
            history_mode: HistoryMode::SharedCursor,
        }
    }
}

impl ConsoleConfig {
    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = String::from(prompt);
        self
    }

    pub fn with_line_capacity(mut self, capacity: usize) -> Self {
        self.line_capacity = capacity;
        self
    }

    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        self
    }

    pub fn with_max_commands(mut self, max: usize) -> Self {
        self.max_commands = max;
        self
    }

    pub fn with_max_prompt_len(mut self, len: usize) -> Self {
        self.max_prompt_len = len;
        self
    }

    /// Set the escape lead-in; bytes past [`MAX_ESCAPE_SEQ_LEN`] are dropped.
    pub fn with_escape_sequence(mut self, seq: &[u8]) -> Self {
        self.escape_sequence = escape_template(seq);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn with_history_mode(mut self, mode: HistoryMode) -> Self {
        self.history_mode = mode;
        self
    }

    /// Clamp capacities to the smallest usable values.
    ///
    /// A line needs room for one character plus the terminator.
    pub fn normalized(mut self) -> Self {
        self.line_capacity = self.line_capacity.max(2);
        self.history_depth = self.history_depth.max(1);
        self.max_commands = self.max_commands.max(1);
        self.max_prompt_len = self.max_prompt_len.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validator() {
        assert!(default_validator(b'a'));
        assert!(default_validator(b'Z'));
        assert!(default_validator(b'7'));
        assert!(default_validator(b'-'));
        assert!(default_validator(b' '));
        assert!(!default_validator(b'\r'));
        assert!(!default_validator(b'\t'));
        assert!(!default_validator(0x1B));
        assert!(!default_validator(0x7F));
    }

    #[test]
    fn test_escape_template_truncates() {
        let t = escape_template(b"\x1b[[[[[");
        assert_eq!(t.as_slice(), b"\x1b[[[");
    }

    #[test]
    fn test_normalized_clamps() {
        let cfg = ConsoleConfig::default()
            .with_line_capacity(0)
            .with_history_depth(0)
            .with_max_commands(0)
            .normalized();
        assert_eq!(cfg.line_capacity, 2);
        assert_eq!(cfg.history_depth, 1);
        assert_eq!(cfg.max_commands, 1);
    }
}
