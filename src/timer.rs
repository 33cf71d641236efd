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

//! One-second time base on Timer/Counter 1.
//!
//! The compare match A interrupt fires once per second and counts
//! [`COUNTDOWN`] down. It is the only interrupt the firmware enables.
use segment_countdown::config::{RESET_TIME, TIME_BASE_COMPARE};
use segment_countdown::Countdown;

/// Seconds left, shared between the interrupt and the main loop.
pub static COUNTDOWN: Countdown = Countdown::new(RESET_TIME);

/// Timer/Counter 1 Compare Match A interrupt service routine.
#[avr_device::interrupt(atmega168)]
fn TIMER1_COMPA() {
    COUNTDOWN.tick();
}

/// Timer/Counter 1 while it is generating the one-second tick.
pub struct TimeBase(arduino_hal::pac::TC1);

impl TimeBase {
    /// Configure TC1 in CTC mode with a one second period and enable its
    /// compare interrupt. Global interrupts still have to be enabled.
    pub fn start(tc1: arduino_hal::pac::TC1) -> Self {
        tc1.tccr1a.write(|w| w.wgm1().bits(0b00));
        tc1.tccr1b
            .write(|w| w.wgm1().bits(0b01).cs1().prescale_256());
        // SAFETY: every 16 bit value is a valid compare value
        tc1.ocr1a.write(|w| unsafe { w.bits(TIME_BASE_COMPARE) });
        tc1.timsk1.write(|w| w.ocie1a().set_bit());
        Self(tc1)
    }

    /// Mask the compare interrupt and stop the clock.
    pub fn stop(self) {
        self.0.timsk1.reset();
        self.0.tccr1b.reset();
    }
}
