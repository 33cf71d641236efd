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

//! The display state owned by the main loop.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::brightness::{self, Dimmer, DutyCycle};
use crate::config::HOLD_UNIT_NS;
use crate::countdown::Phase;
use crate::multiplex::{Multiplexer, DIGIT_COUNT, SEGMENT_COUNT};

/// Everything the main loop needs between iterations: the multiplexed
/// display, the busy-wait clock that times it and the last dimmer sample.
pub struct Panel<P, D> {
    display: Multiplexer<P>,
    delay: D,
    dimmer: Dimmer,
}

impl<P: OutputPin, D: DelayNs> Panel<P, D> {
    pub fn new(display: Multiplexer<P>, delay: D) -> Self {
        Self {
            display,
            delay,
            dimmer: Dimmer::new(),
        }
    }

    /// Feed in a non-blocking dimmer read and return the sample in use.
    pub fn sample<E>(&mut self, reading: nb::Result<u16, E>) -> u16 {
        self.dimmer.poll(reading)
    }

    pub fn display(&self) -> &Multiplexer<P> {
        &self.display
    }

    /// One main loop iteration for `remaining` seconds on the clock.
    ///
    /// Updates the digit codes and runs one scan step at the effective
    /// brightness. In [`Phase::Sleeping`] no line is touched; the caller is
    /// expected to [`shutdown`](Self::shutdown) and power down.
    pub fn refresh(&mut self, remaining: i16) -> Result<Phase, P::Error> {
        let phase = Phase::of(remaining);
        let Some(codes) = phase.digit_codes() else {
            return Ok(phase);
        };
        self.display.set_codes(codes);
        let level = brightness::effective(self.dimmer.sample(), remaining);
        self.scan(DutyCycle::from_brightness(level))?;
        Ok(phase)
    }

    /// Run one scan step with the given split between lit and dark.
    pub fn scan(&mut self, duty: DutyCycle) -> Result<(), P::Error> {
        if duty.advances() {
            self.display.step()?;
            self.hold(duty.lit_units());
        }
        let dark = duty.dark_units();
        if dark > 0 {
            self.display.blank()?;
            self.hold(dark);
        }
        Ok(())
    }

    /// Busy-wait for `units` hold units.
    pub fn hold(&mut self, units: u16) {
        self.delay.delay_ns(u32::from(units) * HOLD_UNIT_NS);
    }

    /// Darken every line and hand the pins back.
    pub fn shutdown(self) -> Result<([P; DIGIT_COUNT], [P; SEGMENT_COUNT]), P::Error> {
        self.display.shutdown()
    }
}
