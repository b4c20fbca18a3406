//! uart-console - demo entry point
//!
//! On ESP-IDF the console runs on UART0. On a host it runs on
//! stdin/stdout (line-buffered by the terminal, `\n` read as `\r`).
//!
//! Build with `LOG=debug` to see dispatch traces on stderr.

use core::fmt::Write;
use std::cell::Cell;
use std::io::Write as _;
use std::rc::Rc;
use std::sync::OnceLock;
use std::time::Instant;

use uart_console::logging::{self, ConsoleLogger};
use uart_console::{Console, ConsoleConfig, Transport};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger::new(log_sink, uptime_us);

fn log_sink(bytes: &[u8]) {
    let _ = std::io::stderr().write_all(bytes);
}

fn uptime_us() -> i64 {
    START.get_or_init(Instant::now).elapsed().as_micros() as i64
}

fn register_demo_commands<T: Transport>(console: &Console<T>) {
    let _ = console.register_command("echo", "Print the arguments back", |call| {
        let argv = call.argv();
        for (i, a) in argv.iter().enumerate().skip(1) {
            let sep = if i + 1 < argv.len() { " " } else { "" };
            let _ = write!(call.out, "{}{}", a, sep);
        }
        0
    });

    let _ = console.register_command("version", "Show firmware version", |call| {
        let _ = write!(call.out, "{}", uart_console::console::VERSION);
        0
    });

    let calls = Rc::new(Cell::new(0u32));
    let _ = console.register_command("count", "Count invocations of this command", move |call| {
        calls.set(calls.get() + 1);
        let _ = write!(call.out, "count={}", calls.get());
        0
    });
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    use std::io::Read;

    /// Blocking stdin/stdout transport.
    struct Stdio;

    impl Transport for Stdio {
        fn available(&mut self) -> bool {
            true
        }

        fn read_byte(&mut self) -> u8 {
            let mut buf = [0u8; 1];
            match std::io::stdin().read(&mut buf) {
                Ok(1) if buf[0] == b'\n' => b'\r',
                Ok(1) => buf[0],
                _ => std::process::exit(0),
            }
        }

        fn write_bytes(&mut self, bytes: &[u8]) {
            let mut out = std::io::stdout();
            let _ = out.write_all(bytes);
            let _ = out.flush();
        }
    }

    let _ = START.set(Instant::now());
    if let Err(e) = logging::init(&LOGGER) {
        eprintln!("{}", e);
    }

    let mut console = Console::new(Stdio, ConsoleConfig::default());
    register_demo_commands(&console);
    log::info!("console ready, {} commands", console.registry().len());

    console.print_banner();
    console.run();
}

#[cfg(target_os = "espidf")]
fn main() {
    use esp_idf_svc::hal::peripherals::Peripherals;
    use uart_console::transport::{EspUart, EspUartConfig};

    // Initialize ESP-IDF
    esp_idf_svc::sys::link_patches();

    let _ = START.set(Instant::now());
    if let Err(e) = logging::init(&LOGGER) {
        eprintln!("{}", e);
    }

    let peripherals = Peripherals::take().expect("peripherals already taken");
    let uart = EspUart::new(
        peripherals.uart0,
        peripherals.pins.gpio43,
        peripherals.pins.gpio44,
        &EspUartConfig::default(),
    )
    .expect("UART0 init failed");

    let mut console = Console::new(uart, ConsoleConfig::default());
    register_demo_commands(&console);
    log::info!("console ready, {} commands", console.registry().len());

    console.print_banner();
    console.run();
}
