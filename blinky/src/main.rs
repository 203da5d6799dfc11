#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;

use nucleo_f767zi::Board;

const BLINK_PERIOD_MS: u32 = 1_000;

#[entry]
fn main() -> ! {
    let board = Board::take().unwrap();

    let mut leds = board.leds;
    let mut tick = board.systick.start();

    // LD2 (blue): one second off, one second on.
    loop {
        tick.delay_ms(BLINK_PERIOD_MS);
        leds.blue.on();
        tick.delay_ms(BLINK_PERIOD_MS);
        leds.blue.off();
    }
}
