//! Escape sequence detection for arrow keys
//!
//! The lead-in is configurable (default `ESC [`, at most four bytes). Once
//! it has been matched verbatim, the next byte is a control code.

use heapless::Vec;

use crate::config::{escape_template, CONTROL_DOWN, CONTROL_UP, MAX_ESCAPE_SEQ_LEN};

/// Control code following a complete lead-in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCode {
    Up,
    Down,
    /// Anything else; consumed without effect
    Other(u8),
}

impl ControlCode {
    pub fn from_byte(c: u8) -> Self {
        match c {
            CONTROL_UP => Self::Up,
            CONTROL_DOWN => Self::Down,
            other => Self::Other(other),
        }
    }
}

/// What the console should do with the byte it just fed in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeAction {
    /// Byte extended the lead-in; echo it and read the next one
    Consumed,
    /// Not part of a sequence; handle it as ordinary input
    PassThrough,
    /// Byte is the control code of a complete sequence
    Control(ControlCode),
}

/// Detector state, derived from the match count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeState {
    Idle,
    /// `k` lead-in bytes matched, `0 < k < len`
    Matching(usize),
    /// Lead-in complete, next byte is the control code
    ControlReady,
}

/// Escape sequence state machine
pub struct EscapeDetector {
    template: Vec<u8, MAX_ESCAPE_SEQ_LEN>,
    matched: usize,
}

impl EscapeDetector {
    /// Create a detector for `template`, truncated to four bytes
    ///
    /// An empty template disables detection: every byte passes through.
    pub fn new(template: &[u8]) -> Self {
        Self {
            template: escape_template(template),
            matched: 0,
        }
    }

    /// Replace the lead-in and drop any partial match
    pub fn set_template(&mut self, template: &[u8]) {
        self.template = escape_template(template);
        self.matched = 0;
    }

    pub fn template(&self) -> &[u8] {
        &self.template
    }

    pub fn state(&self) -> EscapeState {
        if self.matched == 0 {
            EscapeState::Idle
        } else if self.matched < self.template.len() {
            EscapeState::Matching(self.matched)
        } else {
            EscapeState::ControlReady
        }
    }

    pub fn reset(&mut self) {
        self.matched = 0;
    }

    /// Advance the state machine by one byte
    ///
    /// A mismatch part-way through the lead-in resets to idle and hands the
    /// byte back as ordinary input; it is not re-tested against the first
    /// lead-in byte.
    pub fn feed(&mut self, c: u8) -> EscapeAction {
        let len = self.template.len();

        if len == 0 {
            return EscapeAction::PassThrough;
        }

        if self.matched < len {
            if c == self.template[self.matched] {
                self.matched += 1;
                return EscapeAction::Consumed;
            }
            self.matched = 0;
            return EscapeAction::PassThrough;
        }

        self.matched = 0;
        let code = ControlCode::from_byte(c);
        log::trace!("escape control {:?}", code);
        EscapeAction::Control(code)
    }
}
