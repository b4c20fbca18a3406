//! `log` backend for the console.
//!
//! Records are formatted on the stack as `[timestamp_us] LEVEL: message\n`
//! and handed to a byte sink. The sink and clock are plain function
//! pointers, so a logger can live in a `static` on any target.
//!
//! # Rules
//!
//! - Formatting never allocates; messages longer than the buffer are cut
//! - The level filter comes from the `LOG` environment variable at build time

use core::fmt::{self, Write};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::console::ConsoleError;

/// Formatting buffer size per record.
pub const RECORD_BUF_LEN: usize = 256;

/// Log sink: receives one formatted record.
pub type Sink = fn(&[u8]);

/// Clock: microseconds since an arbitrary epoch.
pub type Clock = fn() -> i64;

/// Logger writing formatted records to a [`Sink`].
pub struct ConsoleLogger {
    sink: Sink,
    clock: Clock,
}

impl ConsoleLogger {
    pub const fn new(sink: Sink, clock: Clock) -> Self {
        Self { sink, clock }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut buf = [0u8; RECORD_BUF_LEN];
        let len = format_record((self.clock)(), record.level(), record.args(), &mut buf);
        (self.sink)(&buf[..len]);
    }

    fn flush(&self) {}
}

/// Install `logger` as the global logger.
pub fn init(logger: &'static ConsoleLogger) -> Result<(), ConsoleError> {
    log::set_logger(logger).map_err(|_| ConsoleError::LoggerInit)?;
    log::set_max_level(level_from_env(option_env!("LOG")));
    Ok(())
}

/// Map a `LOG` value to a filter; unknown or missing means `Off`.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Format one record into `buf`, returning the number of bytes written.
///
/// Format: `[timestamp_us] LEVEL: message\n`
pub fn format_record(timestamp_us: i64, level: Level, args: &fmt::Arguments<'_>, buf: &mut [u8]) -> usize {
    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl Write for BufWriter<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };

    let _ = writeln!(writer, "[{:10}] {}: {}", timestamp_us, level.as_str(), args);

    writer.pos
}
