//! # uart-console
//!
//! Interactive command console over any byte-oriented serial link.
//!
//! ## Architecture
//!
//! All input flows through [`Console::process_byte`]. Components are isolated:
//! - [`Transport`] moves bytes, knows nothing about lines
//! - [`LineBuffer`], [`History`] and [`EscapeDetector`] hold editing state
//! - [`Registry`] maps names to handlers, knows nothing about terminals
//!
//! Single-threaded. Each console owns its state; registries are shared
//! only through [`Registry::share`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod console;
pub mod logging;
pub mod transport;

pub use config::{ConsoleConfig, HistoryMode};
pub use console::{
    Console, ConsoleError, EscapeDetector, History, Invocation, LineBuffer, Registry,
};
pub use logging::ConsoleLogger;
pub use transport::{Transport, TransportWriter};
