//! Command registry and the built-in `help` command
//!
//! Lookup is a full linear scan with exact, case-sensitive comparison.
//! Duplicate names are accepted at registration; the last one registered
//! wins dispatch.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::{self, Write};

use super::parser::ParsedCommand;
use super::ConsoleError;

/// Help text registered for the built-in `help` command
pub const HELP_BRIEF: &str = "To show the full list of commands";

/// Everything a handler gets when its command runs
pub struct Invocation<'a> {
    /// Tokenized line, `argv[0]` is the command name
    pub args: &'a ParsedCommand<'a>,
    /// Every registered command, in registration order
    pub commands: &'a [Command],
    /// Console output
    pub out: &'a mut dyn Write,
}

impl<'a> Invocation<'a> {
    pub fn argc(&self) -> usize {
        self.args.argc()
    }

    pub fn argv(&self) -> &'a [&'a str] {
        self.args.argv()
    }

    /// Argument by index (0-based, command name excluded)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.arg(idx)
    }
}

/// A command body
///
/// The return value is a status code; the dispatcher does not act on it.
pub trait CommandHandler {
    fn invoke(&self, call: &mut Invocation<'_>) -> i32;
}

impl<F> CommandHandler for F
where
    F: Fn(&mut Invocation<'_>) -> i32,
{
    fn invoke(&self, call: &mut Invocation<'_>) -> i32 {
        self(call)
    }
}

/// Command descriptor
pub struct Command {
    name: &'static str,
    help: &'static str,
    handler: Box<dyn CommandHandler>,
}

impl Command {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    pub fn invoke(&self, call: &mut Invocation<'_>) -> i32 {
        self.handler.invoke(call)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

struct Table {
    entries: Vec<Command>,
    capacity: usize,
}

/// Fixed-capacity command table
///
/// Each handle returned by [`Registry::share`] refers to the same table. The
/// table is single-threaded; registering from inside a running handler is
/// rejected with [`ConsoleError::RegistryBusy`].
///
/// The table is only borrowed mutably for the body of
/// [`Registry::register_handler`], which never calls back into a handler.
/// The read accessors (`names`, `len`, `capacity`, `list_sorted_by_name`)
/// therefore always see the table, including from inside a running handler.
/// Should that exclusive borrow ever be observed they report an empty table.
pub struct Registry {
    table: Rc<RefCell<Table>>,
}

impl Registry {
    /// Create an empty registry holding at most `capacity` commands
    pub fn new(capacity: usize) -> Self {
        Self {
            table: Rc::new(RefCell::new(Table {
                entries: Vec::with_capacity(capacity),
                capacity,
            })),
        }
    }

    /// Another handle onto the same table
    pub fn share(&self) -> Self {
        Self {
            table: Rc::clone(&self.table),
        }
    }

    /// Append a closure command
    pub fn register<F>(&self, name: &'static str, help: &'static str, handler: F) -> Result<(), ConsoleError>
    where
        F: Fn(&mut Invocation<'_>) -> i32 + 'static,
    {
        self.register_handler(name, help, handler)
    }

    /// Append a command; fails without side effects when full
    pub fn register_handler<H>(&self, name: &'static str, help: &'static str, handler: H) -> Result<(), ConsoleError>
    where
        H: CommandHandler + 'static,
    {
        let mut table = self
            .table
            .try_borrow_mut()
            .map_err(|_| ConsoleError::RegistryBusy)?;

        if table.entries.len() >= table.capacity {
            log::warn!("registry full ({}), '{}' not added", table.capacity, name);
            return Err(ConsoleError::RegistryFull);
        }

        table.entries.push(Command {
            name,
            help,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Index of the command `name`; the last match wins
    pub fn find(&self, name: &str) -> Option<usize> {
        self.table
            .try_borrow()
            .ok()
            .and_then(|table| find_last(&table.entries, name))
    }

    /// Run the command named by `cmd.command()`, returning the handler status
    pub fn dispatch(&self, cmd: &ParsedCommand<'_>, out: &mut dyn Write) -> Result<i32, ConsoleError> {
        let table = self
            .table
            .try_borrow()
            .map_err(|_| ConsoleError::RegistryBusy)?;

        let index = find_last(&table.entries, cmd.command()).ok_or(ConsoleError::UnknownCommand)?;

        log::debug!("dispatch '{}' (argc={})", cmd.command(), cmd.argc());
        let mut call = Invocation {
            args: cmd,
            commands: &table.entries,
            out,
        };
        Ok(table.entries[index].invoke(&mut call))
    }

    /// All names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.table
            .try_borrow()
            .map(|table| table.entries.iter().map(|c| c.name).collect())
            .unwrap_or_default()
    }

    /// `(name, help)` pairs in ascending name order
    pub fn list_sorted_by_name(&self) -> Vec<(&'static str, &'static str)> {
        self.table
            .try_borrow()
            .map(|table| {
                sorted_indices(&table.entries)
                    .into_iter()
                    .map(|i| (table.entries[i].name, table.entries[i].help))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.table.try_borrow().map(|t| t.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.table.try_borrow().map(|t| t.capacity).unwrap_or(0)
    }
}

fn find_last(commands: &[Command], name: &str) -> Option<usize> {
    let mut found = None;
    for (i, c) in commands.iter().enumerate() {
        if c.name == name {
            found = Some(i);
        }
    }
    found
}

/// Command indices in ascending name order
///
/// Selection sort: each round picks the smallest name strictly greater than
/// the previous pick. When nothing greater is left (duplicate names) the
/// previous pick repeats, so the result always has `commands.len()` entries.
pub fn sorted_indices(commands: &[Command]) -> Vec<usize> {
    let mut order = Vec::with_capacity(commands.len());
    let mut current = "";
    let mut pick = 0;

    for _ in 0..commands.len() {
        let mut best: Option<&str> = None;
        for (j, c) in commands.iter().enumerate() {
            if c.name > current && best.map_or(true, |b| c.name < b) {
                pick = j;
                best = Some(c.name);
            }
        }
        current = commands[pick].name;
        order.push(pick);
    }

    order
}

/// Built-in `help`: one `"{i} {name}: {help}"` row per command, sorted by name
pub fn cmd_help(call: &mut Invocation<'_>) -> i32 {
    for (i, idx) in sorted_indices(call.commands).into_iter().enumerate() {
        let c = &call.commands[idx];
        let _ = write!(call.out, "{} {}: {}\r\n", i, c.name, c.help);
    }
    0
}
