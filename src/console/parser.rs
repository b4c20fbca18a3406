//! Command line parser
//!
//! Splits on the space character only. Runs of spaces collapse, so no
//! token is ever empty.

use alloc::vec::Vec;

/// Parsed command line: `argv[0]` is the command name
#[derive(Debug, Clone, Default)]
pub struct ParsedCommand<'a> {
    argv: Vec<&'a str>,
}

impl<'a> ParsedCommand<'a> {
    /// The command name (first token), or "" for a blank line
    pub fn command(&self) -> &'a str {
        self.argv.first().copied().unwrap_or("")
    }

    /// Get argument by index (0-based, command name excluded)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.argv.get(idx + 1).copied()
    }

    /// Number of tokens, command name included
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// All tokens, command name included
    pub fn argv(&self) -> &[&'a str] {
        &self.argv
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}

/// Parse a command line into command and arguments
pub fn parse_line(line: &str) -> ParsedCommand<'_> {
    ParsedCommand {
        argv: line.split(' ').filter(|t| !t.is_empty()).collect(),
    }
}
