//! GPIO control lines
//!
//! Each panel line is a push-pull output. Lines configured as inverted are
//! driven low when logically high, for boards with inverting level shifters.

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;

use flipdot_core::config::{PinConfig, PinMap};
use flipdot_hal::{ControlLines, OutputPin};

/// One panel control line on an RP2040 GPIO
pub struct GpioLine<'d> {
    output: Output<'d>,
    inverted: bool,
    high: bool,
}

impl<'d> GpioLine<'d> {
    /// Configure `pin` as an output at its inactive level
    pub fn new(pin: Peri<'d, AnyPin>, config: PinConfig) -> Self {
        let idle = if config.inverted { Level::High } else { Level::Low };
        Self {
            output: Output::new(pin, idle),
            inverted: config.inverted,
            high: false,
        }
    }
}

impl OutputPin for GpioLine<'_> {
    fn set_high(&mut self) {
        self.high = true;
        if self.inverted {
            self.output.set_low();
        } else {
            self.output.set_high();
        }
    }

    fn set_low(&mut self) {
        self.high = false;
        if self.inverted {
            self.output.set_high();
        } else {
            self.output.set_low();
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// The five GPIOs wired to the panel, before configuration
pub struct PanelPins<'d> {
    pub column: Peri<'d, AnyPin>,
    pub row: Peri<'d, AnyPin>,
    pub polarity: Peri<'d, AnyPin>,
    pub commit: Peri<'d, AnyPin>,
    pub reset: Peri<'d, AnyPin>,
}

impl<'d> PanelPins<'d> {
    /// Configure every pin as a control line
    ///
    /// `map` supplies the per-line inversion; pin numbers were already used
    /// to pick the pins.
    pub fn into_lines(self, map: &PinMap) -> ControlLines<GpioLine<'d>> {
        ControlLines {
            column: GpioLine::new(self.column, map.column),
            row: GpioLine::new(self.row, map.row),
            polarity: GpioLine::new(self.polarity, map.polarity),
            commit: GpioLine::new(self.commit, map.commit),
            reset: GpioLine::new(self.reset, map.reset),
        }
    }
}
