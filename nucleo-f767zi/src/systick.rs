// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Millisecond tick timer on the Cortex-M SysTick counter.
//!
//! [`SysTick`] holds the unstarted counter; [`SysTick::start`] programs a 1 ms
//! reload and hands back a [`TickTimer`] that can busy-wait. Keeping the two as
//! separate types means a delay cannot be requested before the counter runs.
//!
//! SysTick counts *down* from the reload value and wraps. [`TickTimer::delay_ms`]
//! therefore accumulates counter deltas across wraps instead of polling the
//! COUNTFLAG bit, so back-to-back delays never lose the ticks spent between
//! calls inside one reload period.

use cortex_m::peripheral::{syst::SystClkSource, SYST};

use stm32f7xx_hal::rcc::Clocks;

/// SysTick counter, configured but not yet running.
pub struct SysTick {
    syst: SYST,
    ticks_per_ms: u32,
}

impl SysTick {
    /// Bind the SysTick peripheral to the core clock frequency.
    pub fn new(syst: SYST, clocks: &Clocks) -> Self {
        Self {
            syst,
            ticks_per_ms: clocks.sysclk().raw() / 1_000,
        }
    }

    /// Start the counter with a 1 ms period and return the running timer.
    ///
    /// `start` consumes the handle, so a counter cannot be started twice:
    ///
    /// ```compile_fail
    /// fn twice(counter: nucleo_f767zi::SysTick) {
    ///     let timer = counter.start();
    ///     let again = counter.start();
    /// }
    /// ```
    pub fn start(mut self) -> TickTimer {
        self.syst.set_clock_source(SystClkSource::Core);
        self.syst.set_reload(self.ticks_per_ms - 1);
        self.syst.clear_current();
        self.syst.enable_counter();

        TickTimer {
            syst: self.syst,
            ticks_per_ms: self.ticks_per_ms,
        }
    }
}

/// Running SysTick counter. Obtained from [`SysTick::start`].
pub struct TickTimer {
    syst: SYST,
    ticks_per_ms: u32,
}

impl TickTimer {
    /// Busy-wait for at least `ms` milliseconds, measured from this call.
    ///
    /// Resolution is one core clock tick; the wait may overshoot by up to one
    /// tick plus loop overhead, never undershoot.
    pub fn delay_ms(&mut self, ms: u32) {
        let target = delay_ticks(ms, self.ticks_per_ms);

        let mut elapsed: u64 = 0;
        let mut previous = self.syst.cvr.read();
        while elapsed < target {
            let current = self.syst.cvr.read();
            elapsed += u64::from(counter_delta(previous, current, self.ticks_per_ms));
            previous = current;
        }
    }

    pub fn free(mut self) -> SYST {
        self.syst.disable_counter();
        self.syst
    }
}

/// Ticks elapsed between two reads of a down-counter with period `period`.
///
/// `current <= previous` means no wrap happened since the last read; otherwise
/// the counter reloaded exactly once. Holds as long as reads are no more than
/// one period apart, which the polling loop guarantees.
fn counter_delta(previous: u32, current: u32, period: u32) -> u32 {
    if current <= previous {
        previous - current
    } else {
        previous + period - current
    }
}

/// Total ticks for an `ms` millisecond wait, widened so large requests cannot
/// overflow.
fn delay_ticks(ms: u32, ticks_per_ms: u32) -> u64 {
    u64::from(ms) * u64::from(ticks_per_ms)
}
