//! Panel configuration types
//!
//! The firmware reads these from `panel.toml` at build time. Defaults match
//! the 32×16 panel wired to GPIO0-3 and GPIO5.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Shortest coil energize time that reliably flips a dot
pub const MIN_COMMIT_HOLD_US: u32 = 600;

/// Step pulse hold time
pub const DEFAULT_STEP_HOLD_US: u32 = 1;

/// Client frame pacing interval
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 20;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Panel width is zero
    ZeroWidth,
    /// Panel height is zero
    ZeroHeight,
    /// Step pulse hold is zero
    StepHoldZero,
    /// Commit pulse shorter than [`MIN_COMMIT_HOLD_US`]
    CommitHoldTooShort,
    /// Pin number outside 0-29
    InvalidPin(u8),
    /// Same pin assigned to two control lines
    DuplicatePin(u8),
}

/// Pin assignment with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Line is active-low
    #[cfg_attr(feature = "serde", serde(default))]
    pub inverted: bool,
}

impl PinConfig {
    /// Create an active-high pin
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an active-low pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// The five control lines of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinMap {
    /// Column step
    pub column: PinConfig,
    /// Row step
    pub row: PinConfig,
    /// Set/unset polarity
    pub polarity: PinConfig,
    /// Scan head reset
    pub reset: PinConfig,
    /// Coil commit pulse
    pub commit: PinConfig,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            column: PinConfig::new(0),
            row: PinConfig::new(1),
            polarity: PinConfig::new(2),
            reset: PinConfig::new(3),
            commit: PinConfig::new(5),
        }
    }
}

impl PinMap {
    /// All pins in line order: column, row, polarity, reset, commit
    pub fn all(&self) -> [PinConfig; 5] {
        [self.column, self.row, self.polarity, self.reset, self.commit]
    }
}

/// Pulse and pacing timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Column/row step pulse hold in microseconds
    pub step_hold_us: u32,
    /// Coil energize time in microseconds
    pub commit_hold_us: u32,
    /// Delay between frames of the render loop in milliseconds
    pub frame_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            step_hold_us: DEFAULT_STEP_HOLD_US,
            commit_hold_us: MIN_COMMIT_HOLD_US,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    pub geometry: Geometry,
    pub timing: TimingConfig,
    pub pins: PinMap,
}

impl PanelConfig {
    /// Check the configuration can drive a panel safely
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.geometry.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.geometry.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.timing.step_hold_us == 0 {
            return Err(ConfigError::StepHoldZero);
        }
        if self.timing.commit_hold_us < MIN_COMMIT_HOLD_US {
            return Err(ConfigError::CommitHoldTooShort);
        }

        let pins = self.pins.all();
        for (i, pin) in pins.iter().enumerate() {
            if pin.pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(pin.pin));
            }
            if pins[..i].iter().any(|other| other.pin == pin.pin) {
                return Err(ConfigError::DuplicatePin(pin.pin));
            }
        }

        Ok(())
    }
}
