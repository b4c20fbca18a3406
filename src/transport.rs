//! Byte transport the console runs over.
//!
//! Anything that can report "byte available", read one byte and write a
//! slice qualifies: a UART, a USB CDC port, a socket, a test double.
//!
//! # Hardware Setup (ESP-IDF)
//!
//! ```text
//! ESP32-S3 UART0 TX (GPIO43) ──────▶ USB-UART RX
//! ESP32-S3 UART0 RX (GPIO44) ◀────── USB-UART TX
//! ```

use core::fmt;

/// Byte-oriented serial link
pub trait Transport {
    /// True if `read_byte` would return without blocking
    fn available(&mut self) -> bool;

    /// Read one byte; only called after `available` returned true
    fn read_byte(&mut self) -> u8;

    /// Write every byte of `bytes`
    fn write_bytes(&mut self, bytes: &[u8]);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn available(&mut self) -> bool {
        (**self).available()
    }

    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes)
    }
}

/// `core::fmt::Write` over a transport, so handlers can use `write!`
pub struct TransportWriter<'a, T: Transport + ?Sized> {
    transport: &'a mut T,
}

impl<'a, T: Transport + ?Sized> TransportWriter<'a, T> {
    pub fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }
}

impl<T: Transport + ?Sized> fmt::Write for TransportWriter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.transport.write_bytes(s.as_bytes());
        Ok(())
    }
}

#[cfg(target_os = "espidf")]
pub use esp::{EspUart, EspUartConfig};

#[cfg(target_os = "espidf")]
mod esp {
    use super::Transport;
    use esp_idf_svc::hal::delay::{BLOCK, NON_BLOCK};
    use esp_idf_svc::hal::gpio;
    use esp_idf_svc::hal::peripheral::Peripheral;
    use esp_idf_svc::hal::uart::{self, Uart, UartDriver};
    use esp_idf_svc::sys::EspError;

    /// UART configuration for the console.
    pub struct EspUartConfig {
        pub baud_rate: u32,
    }

    impl Default for EspUartConfig {
        fn default() -> Self {
            Self { baud_rate: 115200 }
        }
    }

    /// Console transport over an ESP-IDF UART driver.
    ///
    /// `available` does a non-blocking read and parks the byte until
    /// `read_byte` collects it. Driver errors are logged and dropped.
    pub struct EspUart<'d> {
        driver: UartDriver<'d>,
        pending: Option<u8>,
    }

    impl<'d> EspUart<'d> {
        pub fn new<U: Uart>(
            uart: impl Peripheral<P = U> + 'd,
            tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
            rx_pin: impl Peripheral<P = impl gpio::InputPin> + 'd,
            config: &EspUartConfig,
        ) -> Result<Self, EspError> {
            let uart_config = uart::config::Config::default()
                .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

            let driver = UartDriver::new(
                uart,
                tx_pin,
                rx_pin,
                Option::<gpio::AnyIOPin>::None, // CTS
                Option::<gpio::AnyIOPin>::None, // RTS
                &uart_config,
            )?;

            Ok(Self {
                driver,
                pending: None,
            })
        }
    }

    impl Transport for EspUart<'_> {
        fn available(&mut self) -> bool {
            if self.pending.is_some() {
                return true;
            }
            let mut buf = [0u8; 1];
            match self.driver.read(&mut buf, NON_BLOCK) {
                Ok(1) => {
                    self.pending = Some(buf[0]);
                    true
                }
                Ok(_) => false,
                Err(e) => {
                    log::warn!("uart read failed: {}", e);
                    false
                }
            }
        }

        fn read_byte(&mut self) -> u8 {
            if let Some(b) = self.pending.take() {
                return b;
            }
            let mut buf = [0u8; 1];
            if let Err(e) = self.driver.read(&mut buf, BLOCK) {
                log::warn!("uart read failed: {}", e);
            }
            buf[0]
        }

        fn write_bytes(&mut self, bytes: &[u8]) {
            let mut rest = bytes;
            while !rest.is_empty() {
                match self.driver.write(rest) {
                    Ok(0) => return,
                    Ok(n) => rest = &rest[n..],
                    Err(e) => {
                        log::warn!("uart write failed: {}", e);
                        return;
                    }
                }
            }
        }
    }
}
