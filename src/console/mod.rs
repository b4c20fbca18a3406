//! Serial console: line editing, history, completion and dispatch
//!
//! Byte-at-a-time polling, no dedicated task.
//! Every buffer is sized once at construction and never grows.

pub mod commands;
pub mod completion;
#[allow(clippy::module_inception)]
pub mod console;
pub mod error;
pub mod escape;
pub mod history;
pub mod line_buffer;
pub mod parser;

pub use commands::{cmd_help, sorted_indices, Command, CommandHandler, Invocation, Registry, HELP_BRIEF};
pub use completion::complete;
pub use console::{Console, VERSION};
pub use error::ConsoleError;
pub use escape::{ControlCode, EscapeAction, EscapeDetector, EscapeState};
pub use history::{Direction, History};
pub use line_buffer::LineBuffer;
pub use parser::{parse_line, ParsedCommand};
