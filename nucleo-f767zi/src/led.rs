use embedded_hal::digital::v2::OutputPin;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction over one GPIO output line.
///
/// The wrapper knows only the wiring polarity; it keeps no shadow copy of
/// the line state. Every call writes the output register, so hardware is
/// always the single source of truth.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, driving the line to its OFF level.
    pub fn new(mut pin: PIN, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low().ok(),
            ActiveLevel::Low => pin.set_high().ok(),
        };
        Self { pin, active }
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the raw line high, regardless of polarity.
    #[inline]
    pub fn set_high(&mut self) {
        self.pin.set_high().ok();
    }

    /// Drive the raw line low, regardless of polarity.
    #[inline]
    pub fn set_low(&mut self) {
        self.pin.set_low().ok();
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high().ok(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low().ok(),
        };
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
