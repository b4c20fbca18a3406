//! Main console struct integrating all components

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use super::{
    complete, parse_line, cmd_help, ConsoleError, ControlCode, Direction, EscapeAction,
    EscapeDetector, History, Invocation, LineBuffer, Registry, HELP_BRIEF,
};
use crate::config::{ConsoleConfig, Validator};
use crate::transport::{Transport, TransportWriter};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// Console session over a byte transport
pub struct Console<T: Transport> {
    transport: T,
    registry: Registry,
    line: LineBuffer,
    history: History,
    escape: EscapeDetector,
    validator: Validator,
    /// Raw passthrough, no editing
    echo: bool,
    prompt: String,
    max_prompt_len: usize,
}

impl<T: Transport> Console<T> {
    /// Create a console with its own registry, pre-loaded with `help`
    pub fn new(transport: T, config: ConsoleConfig) -> Self {
        let registry = Registry::new(config.max_commands.max(1));
        let console = Self::with_registry(transport, config, registry);
        let _ = console.register_command("help", HELP_BRIEF, cmd_help);
        console
    }

    /// Create a console over an existing (possibly shared) registry
    ///
    /// Nothing is registered; `registry` is used as-is.
    pub fn with_registry(transport: T, config: ConsoleConfig, registry: Registry) -> Self {
        let config = config.normalized();
        let mut console = Self {
            transport,
            registry,
            line: LineBuffer::new(config.line_capacity),
            history: History::new(config.history_depth, config.line_capacity, config.history_mode),
            escape: EscapeDetector::new(&config.escape_sequence),
            validator: config.validator,
            echo: config.echo,
            prompt: String::new(),
            max_prompt_len: config.max_prompt_len,
        };
        console.set_prompt(&config.prompt);
        console
    }

    /// Register a command on this console's registry
    pub fn register_command<F>(&self, name: &'static str, help: &'static str, handler: F) -> Result<(), ConsoleError>
    where
        F: Fn(&mut Invocation<'_>) -> i32 + 'static,
    {
        self.registry.register(name, help, handler)
    }

    /// Replace the prompt, keeping at most `max_prompt_len - 1` characters
    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.chars().take(self.max_prompt_len - 1).collect();
    }

    /// Replace the escape lead-in (truncated to four bytes, empty disables)
    pub fn set_escape_sequence(&mut self, seq: &[u8]) {
        self.escape.set_template(seq);
    }

    pub fn set_validate_input_function(&mut self, validator: Validator) {
        self.validator = validator;
    }

    /// Enable raw echo; while on, bytes are mirrored and never edited
    pub fn set_echo_enable(&mut self, echo: bool) {
        self.echo = echo;
    }

    /// Process a single input byte
    ///
    /// Returns Some(result) if a line was dispatched, None otherwise.
    pub fn process_byte(&mut self, byte: u8) -> Option<Result<i32, ConsoleError>> {
        if self.echo {
            self.transport.write_bytes(&[byte]);
            return None;
        }

        match self.escape.feed(byte) {
            EscapeAction::Consumed => {
                self.transport.write_bytes(&[byte]);
                return None;
            }
            EscapeAction::Control(code) => {
                self.handle_control(code);
                return None;
            }
            EscapeAction::PassThrough => {}
        }

        match byte {
            BACKSPACE | DELETE => {
                if self.line.backspace() {
                    // Echo: backspace, space, backspace
                    self.transport.write_bytes(b"\x08 \x08");
                }
                None
            }

            b'\t' => {
                self.handle_tab();
                None
            }

            b'\r' => self.submit(),

            c if (self.validator)(c) => {
                if self.line.push(c) {
                    self.transport.write_bytes(&[c]);
                }
                None
            }

            _ => None,
        }
    }

    /// Process one byte if the transport has one ready
    pub fn poll(&mut self) -> Option<Result<i32, ConsoleError>> {
        if !self.transport.available() {
            return None;
        }
        let byte = self.transport.read_byte();
        self.process_byte(byte)
    }

    /// Print the initial prompt and serve input forever
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            while !self.transport.available() {
                core::hint::spin_loop();
            }
            let byte = self.transport.read_byte();
            let _ = self.process_byte(byte);
        }
    }

    /// Start a session: newline, then the prompt
    pub fn start(&mut self) {
        self.line.clear();
        self.escape.reset();
        self.transport.write_bytes(b"\n");
        self.display_prompt();
    }

    /// Clear the terminal line and print the prompt
    ///
    /// Emits `2C + P` backspaces, `C + P` spaces and `2C + P` backspaces
    /// (C = line capacity, P = prompt capacity) before the prompt text.
    pub fn display_prompt(&mut self) {
        let cap = self.line.capacity();
        let back = 2 * cap + self.max_prompt_len;
        let blank = cap + self.max_prompt_len;

        let mut frame = Vec::with_capacity(2 * back + blank + self.prompt.len());
        frame.resize(back, BACKSPACE);
        frame.resize(back + blank, b' ');
        frame.resize(2 * back + blank, BACKSPACE);
        frame.extend_from_slice(self.prompt.as_bytes());

        self.transport.write_bytes(&frame);
    }

    /// Print welcome banner
    pub fn print_banner(&mut self) {
        let mut out = TransportWriter::new(&mut self.transport);
        let _ = write!(out, "\r\n{}\r\nType 'help' for commands.\r\n", VERSION);
    }

    fn submit(&mut self) -> Option<Result<i32, ConsoleError>> {
        self.transport.write_bytes(b"\n");

        if self.line.is_empty() {
            self.transport.write_bytes(b"\n");
            self.display_prompt();
            return None;
        }

        self.history.record(self.line.raw());
        let result = self.execute();
        self.display_prompt();
        self.line.clear();
        Some(result)
    }

    fn execute(&mut self) -> Result<i32, ConsoleError> {
        // Invalid UTF-8 only spoils the token it sits in
        let text = String::from_utf8_lossy(self.line.as_bytes());
        let cmd = parse_line(&text);

        self.transport.write_bytes(b"\n\r");

        let mut out = TransportWriter::new(&mut self.transport);
        let result = self.registry.dispatch(&cmd, &mut out);

        match result {
            Ok(0) => {}
            Ok(status) => log::debug!("'{}' returned {}", cmd.command(), status),
            Err(ConsoleError::UnknownCommand) => {
                log::debug!("unknown command '{}'", cmd.command());
                let _ = out.write_str(" Unknown Command!");
            }
            Err(e) => log::warn!("dispatch failed: {}", e),
        }

        let _ = out.write_str("\n\n");
        result
    }

    fn handle_tab(&mut self) {
        let names = self.registry.names();
        let Some(suffix) = complete(self.line.as_bytes(), &names) else {
            return;
        };

        for &c in suffix {
            if !self.line.push(c) {
                break;
            }
            self.transport.write_bytes(&[c]);
        }
    }

    fn handle_control(&mut self, code: ControlCode) {
        match code {
            ControlCode::Up => self.recall(Direction::Backward),
            ControlCode::Down => self.recall(Direction::Forward),
            ControlCode::Other(_) => {}
        }
    }

    fn recall(&mut self, direction: Direction) {
        self.history.advance(direction);

        self.display_prompt();
        self.display_prompt();

        let shown = self.line.load(self.history.current());
        self.transport.write_bytes(shown);
    }

    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn echo_enabled(&self) -> bool {
        self.echo
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
