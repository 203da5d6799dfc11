// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board bring-up for the NUCLEO-F767ZI.
//!
//! [`Board::take`] claims the device and core peripherals, freezes the clock
//! tree, and hands out the configured user LEDs, the ST-LINK console, and the
//! unstarted SysTick counter. Peripheral access goes through the returned
//! [`Board`] only; a second `take` returns `None`, so two owners of the same
//! pin or counter cannot exist.

use stm32f7xx_hal::{
    gpio::{gpiob, Output, PushPull},
    pac,
    prelude::*,
    serial::{Config, Serial, Tx},
};

use crate::led::Led;
use crate::pins::BoardPins;
use crate::systick::SysTick;
use crate::usart::Usart;

/// Baud rate of the ST-LINK virtual COM port.
pub const CONSOLE_BAUD: u32 = 115_200;

/// The three user LEDs, ready to drive.
pub struct UserLeds {
    pub green: Led<gpiob::PB0<Output<PushPull>>>,
    pub blue: Led<gpiob::PB7<Output<PushPull>>>,
    pub red: Led<gpiob::PB14<Output<PushPull>>>,
}

/// Every peripheral the firmware uses, claimed and configured.
pub struct Board {
    pub leds: UserLeds,
    pub console: Usart<Tx<pac::USART3>>,
    pub systick: SysTick,
}

impl Board {
    /// Claim and configure the board. Returns `None` after the first call.
    ///
    /// Runs on the 16 MHz HSI reset clock. All LEDs come up OFF; the console
    /// is ready at [`CONSOLE_BAUD`]; SysTick stays stopped until
    /// [`SysTick::start`].
    pub fn take() -> Option<Self> {
        let dp = pac::Peripherals::take()?;
        let cp = cortex_m::Peripherals::take()?;

        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();

        let pins = BoardPins::new(dp.GPIOB, dp.GPIOD);

        let leds = UserLeds {
            green: Led::active_high(pins.leds.green),
            blue: Led::active_high(pins.leds.blue),
            red: Led::active_high(pins.leds.red),
        };

        let config = Config {
            baud_rate: CONSOLE_BAUD.bps(),
            ..Default::default()
        };
        let serial = Serial::new(dp.USART3, (pins.usart3.tx, pins.usart3.rx), &clocks, config);
        let (tx, _rx) = serial.split();

        Some(Self {
            leds,
            console: Usart::new(tx),
            systick: SysTick::new(cp.SYST, &clocks),
        })
    }
}
