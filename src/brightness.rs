// This library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this library.  If not, see <http://www.gnu.org/licenses/>.

//! Dimmer handling.
//!
//! The potentiometer sample sets the duty cycle of each scan step. Two
//! overrides sit on top of it: the display starts at full brightness and
//! fades to the dimmer setting over the first [`RAMP_SECONDS`], and once the
//! countdown has run out it is always driven at full brightness.

use crate::config::{BRIGHTNESS_MAX, CYCLE_UNITS, RAMP_SECONDS, RAMP_STEP, RESET_TIME};

/// Last completed dimmer conversion.
///
/// The ADC is polled without waiting, so most loop iterations reuse a stale
/// sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimmer {
    sample: u16,
}

impl Dimmer {
    /// Starts at full brightness until the first conversion completes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sample: BRIGHTNESS_MAX,
        }
    }

    /// Take a finished conversion if there is one and return the current
    /// sample. A pending conversion or a failed read keeps the old value.
    pub fn poll<E>(&mut self, reading: nb::Result<u16, E>) -> u16 {
        if let Ok(sample) = reading {
            self.sample = sample.min(BRIGHTNESS_MAX);
        }
        self.sample
    }

    #[must_use]
    pub const fn sample(&self) -> u16 {
        self.sample
    }
}

impl Default for Dimmer {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimum brightness `elapsed` seconds after start.
///
/// Falls by [`RAMP_STEP`] per second from full scale and is zero once the
/// ramp is over.
#[must_use]
pub fn ramp_floor(elapsed: i16) -> u16 {
    if elapsed >= RAMP_SECONDS {
        return 0;
    }
    let Ok(elapsed) = u16::try_from(elapsed) else {
        return BRIGHTNESS_MAX;
    };
    BRIGHTNESS_MAX.saturating_sub(RAMP_STEP.saturating_mul(elapsed))
}

/// Brightness to drive with, given the dimmer `sample` and the seconds left.
#[must_use]
pub fn effective(sample: u16, remaining: i16) -> u16 {
    let sample = sample.min(BRIGHTNESS_MAX);
    let elapsed = RESET_TIME.saturating_sub(remaining);
    if elapsed < RAMP_SECONDS {
        sample.max(ramp_floor(elapsed))
    } else if remaining <= 0 {
        BRIGHTNESS_MAX
    } else {
        sample
    }
}

/// How one scan step splits its time between lit and dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DutyCycle {
    /// Everything dark for a whole cycle; the selector does not move.
    Dark,
    /// The next digit lit for a whole cycle.
    Lit,
    /// The next digit lit for `on` units, then dark for `off` units.
    Dimmed { on: u16, off: u16 },
}

impl DutyCycle {
    #[must_use]
    pub fn from_brightness(brightness: u16) -> Self {
        match brightness {
            0 => Self::Dark,
            b if b >= BRIGHTNESS_MAX => Self::Lit,
            b => Self::Dimmed {
                on: b,
                off: BRIGHTNESS_MAX - b,
            },
        }
    }

    /// Hold units spent with a digit enabled.
    #[must_use]
    pub const fn lit_units(self) -> u16 {
        match self {
            Self::Dark => 0,
            Self::Lit => CYCLE_UNITS,
            Self::Dimmed { on, .. } => on,
        }
    }

    /// Hold units the whole step takes.
    #[must_use]
    pub const fn total_units(self) -> u16 {
        match self {
            Self::Dark | Self::Lit => CYCLE_UNITS,
            Self::Dimmed { on, off } => on + off,
        }
    }

    /// Hold units spent with every digit off.
    #[must_use]
    pub const fn dark_units(self) -> u16 {
        self.total_units() - self.lit_units()
    }

    /// Whether this step moves the selector to the next digit.
    #[must_use]
    pub const fn advances(self) -> bool {
        !matches!(self, Self::Dark)
    }
}
