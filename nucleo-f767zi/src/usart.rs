// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking USART transmit path.
//!
//! Wraps any serial transmitter implementing `embedded_hal::serial::Write<u8>`
//! and sends bytes one at a time, waiting for the data register to drain
//! between them. Every fault the hardware reports, and every wait that
//! exceeds [`TX_READY_RETRIES`] polls, surfaces as a [`TransmitFault`].
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format
//! string to ensure correct line endings on the terminal.
//!
//! To watch the output on the host machine, connect to the debug USB port
//! and use
//! ```bash
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt;

use embedded_hal::serial::Write;

/// The transmitter stopped accepting data, or the hardware flagged an error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TransmitFault;

/// Polls of the ready flag before a byte is declared stuck.
///
/// A byte at 115 200 Bd occupies the wire for ~87 us, about 1 400 cycles at
/// the 16 MHz reset clock; a million polls exceeds any legitimate wait by
/// several orders of magnitude.
pub const TX_READY_RETRIES: u32 = 1_000_000;

pub struct Usart<TX> {
    tx: TX,
}

impl<TX: Write<u8>> Usart<TX> {
    pub fn new(tx: TX) -> Self {
        Self { tx }
    }

    /// Send one byte, waiting until the transmitter accepts it.
    pub fn write_byte(&mut self, b: u8) -> Result<(), TransmitFault> {
        for _ in 0..TX_READY_RETRIES {
            match self.tx.write(b) {
                Ok(()) => return Ok(()),
                Err(nb::Error::WouldBlock) => (),
                Err(nb::Error::Other(_)) => return Err(TransmitFault),
            }
        }
        Err(TransmitFault)
    }

    /// Send a buffer in order, one byte at a time.
    ///
    /// Stops at the first byte that faults; bytes already accepted by the
    /// hardware stay sent.
    pub fn transmit(&mut self, buffer: &[u8]) -> Result<(), TransmitFault> {
        for &byte in buffer {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), TransmitFault> {
        self.transmit(s.as_bytes())
    }

    /// Write string and CRLF terminator.
    pub fn println(&mut self, s: &str) -> Result<(), TransmitFault> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    /// Block until the last byte has fully left the shift register.
    pub fn flush(&mut self) -> Result<(), TransmitFault> {
        for _ in 0..TX_READY_RETRIES {
            match self.tx.flush() {
                Ok(()) => return Ok(()),
                Err(nb::Error::WouldBlock) => (),
                Err(nb::Error::Other(_)) => return Err(TransmitFault),
            }
        }
        Err(TransmitFault)
    }

    pub fn free(self) -> TX {
        self.tx
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<TX: Write<u8>> fmt::Write for Usart<TX> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Transmitter that needs `polls` not-ready cycles before each byte.
    struct SlowTx {
        polls: u32,
        remaining: u32,
        accepted: Vec<u8>,
    }

    impl SlowTx {
        fn ready() -> Self {
            Self::with_polls(0)
        }

        fn with_polls(polls: u32) -> Self {
            Self {
                polls,
                remaining: polls,
                accepted: Vec::new(),
            }
        }
    }

    impl Write<u8> for SlowTx {
        type Error = ();

        fn write(&mut self, word: u8) -> nb::Result<(), ()> {
            if self.remaining > 0 {
                self.remaining -= 1;
                return Err(nb::Error::WouldBlock);
            }
            self.remaining = self.polls;
            self.accepted.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), ()> {
            Ok(())
        }
    }

    /// Transmitter whose ready flag never comes up.
    struct StuckTx;

    impl Write<u8> for StuckTx {
        type Error = ();

        fn write(&mut self, _word: u8) -> nb::Result<(), ()> {
            Err(nb::Error::WouldBlock)
        }

        fn flush(&mut self) -> nb::Result<(), ()> {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Transmitter that reports a hardware error after `good` bytes.
    struct FaultyTx {
        good: usize,
        accepted: Vec<u8>,
    }

    impl FaultyTx {
        fn after(good: usize) -> Self {
            Self {
                good,
                accepted: Vec::new(),
            }
        }
    }

    impl Write<u8> for FaultyTx {
        type Error = ();

        fn write(&mut self, word: u8) -> nb::Result<(), ()> {
            if self.accepted.len() >= self.good {
                return Err(nb::Error::Other(()));
            }
            self.accepted.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), ()> {
            Err(nb::Error::Other(()))
        }
    }

    #[test]
    fn transmit_sends_every_byte_in_order() {
        let mut console = Usart::new(SlowTx::ready());
        console.transmit(b"Hello World!\r\n").unwrap();
        assert_eq!(console.free().accepted, b"Hello World!\r\n");
    }

    #[test]
    fn transmit_of_empty_buffer_is_a_no_op() {
        let mut console = Usart::new(SlowTx::ready());
        console.transmit(&[]).unwrap();
        assert!(console.free().accepted.is_empty());
    }

    #[test]
    fn write_byte_rides_out_a_busy_transmitter() {
        let mut console = Usart::new(SlowTx::with_polls(17));
        console.write_byte(b'x').unwrap();
        assert_eq!(console.free().accepted, b"x");
    }

    #[test]
    fn write_byte_gives_up_when_never_ready() {
        let mut console = Usart::new(StuckTx);
        assert_eq!(console.write_byte(b'x'), Err(TransmitFault));
    }

    #[test]
    fn transmit_stops_at_the_faulting_byte() {
        let mut console = Usart::new(FaultyTx::after(3));
        assert_eq!(console.transmit(b"abcdef"), Err(TransmitFault));
        assert_eq!(console.free().accepted, b"abc");
    }

    #[test]
    fn println_appends_crlf() {
        let mut console = Usart::new(SlowTx::ready());
        console.println("ping").unwrap();
        assert_eq!(console.free().accepted, b"ping\r\n");
    }

    #[test]
    fn format_writes_go_through_the_same_path() {
        use core::fmt::Write as _;

        let mut console = Usart::new(SlowTx::ready());
        write!(console, "tick {}", 7).unwrap();
        assert_eq!(console.free().accepted, b"tick 7");
    }

    #[test]
    fn flush_reports_hardware_errors() {
        let mut console = Usart::new(FaultyTx::after(0));
        assert_eq!(console.flush(), Err(TransmitFault));
    }
}
