#![no_std]
#![no_main]

use cortex_m::asm;
use cortex_m_rt::entry;
use panic_halt as _;

use nucleo_f767zi::Board;

const BLINK_PERIOD_MS: u32 = 1_000;

/// Printable greeting plus CRLF, no terminator byte.
const GREETING: &[u8] = b"Hello World!\r\n";

#[entry]
fn main() -> ! {
    let board = Board::take().unwrap();

    let mut leds = board.leds;
    let mut console = board.console;
    let mut tick = board.systick.start();

    // One greeting per power cycle, flushed before the blink loop starts.
    let sent = console.transmit(GREETING).and_then(|()| console.flush());
    if sent.is_err() {
        // Console is dead; flag it on LD3 and park.
        leds.red.on();
        loop {
            asm::nop();
        }
    }

    // LD2 (blue): one second off, one second on.
    loop {
        tick.delay_ms(BLINK_PERIOD_MS);
        leds.blue.on();
        tick.delay_ms(BLINK_PERIOD_MS);
        leds.blue.off();
    }
}
