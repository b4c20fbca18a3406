//! Console error types

use thiserror::Error;

/// Console error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// E01: Registry is at capacity
    #[error("E01: registry full")]
    RegistryFull,
    /// E02: No command with that name
    #[error("E02: unknown command")]
    UnknownCommand,
    /// E03: Registry is borrowed by a running handler
    #[error("E03: registry busy")]
    RegistryBusy,
    /// E04: A global logger is already installed
    #[error("E04: logger already initialized")]
    LoggerInit,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::RegistryFull => "E01",
            Self::UnknownCommand => "E02",
            Self::RegistryBusy => "E03",
            Self::LoggerInit => "E04",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::RegistryFull => "registry full",
            Self::UnknownCommand => "unknown command",
            Self::RegistryBusy => "registry busy",
            Self::LoggerInit => "logger already initialized",
        }
    }

    /// Numeric status for C-style callers: every error is `-1`.
    pub fn status(&self) -> i32 {
        -1
    }
}
