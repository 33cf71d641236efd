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

//! Pin map and power control.
//!
//! ```text
//! A0-A3  PC0-PC3  digit enable, left to right (active high)
//! A4-A5  PC4-PC5  colon LEDs, held dark
//! D0-D7  PD0-PD7  segment lines, code bit i on PDi
//! A6     ADC6     dimmer potentiometer
//! ```
use arduino_hal::hal::port::Dynamic;
use arduino_hal::port::{mode::Output, Pin};

pub type Line = Pin<Output, Dynamic>;

/// Every output the display uses.
pub struct Lines {
    pub digits: [Line; 4],
    pub segments: [Line; 8],
    pub colons: [Line; 2],
}

impl Lines {
    /// Make all display pins outputs. They start low.
    pub fn take(pins: arduino_hal::Pins) -> Self {
        Self {
            digits: [
                pins.a0.into_output().downgrade(),
                pins.a1.into_output().downgrade(),
                pins.a2.into_output().downgrade(),
                pins.a3.into_output().downgrade(),
            ],
            segments: [
                pins.d0.into_output().downgrade(),
                pins.d1.into_output().downgrade(),
                pins.d2.into_output().downgrade(),
                pins.d3.into_output().downgrade(),
                pins.d4.into_output().downgrade(),
                pins.d5.into_output().downgrade(),
                pins.d6.into_output().downgrade(),
                pins.d7.into_output().downgrade(),
            ],
            colons: [
                pins.a4.into_output().downgrade(),
                pins.a5.into_output().downgrade(),
            ],
        }
    }
}

/// Stop driving the given lines.
pub fn float(lines: impl IntoIterator<Item = Line>) {
    for line in lines {
        let _ = line.into_floating_input();
    }
}

/// Enter power-down and stay there. Only an external reset gets out.
///
/// Interrupts must already be disabled, otherwise a pending one would wake
/// the core.
pub fn power_down(cpu: arduino_hal::pac::CPU) -> ! {
    cpu.smcr.write(|w| w.sm().pdown().se().set_bit());
    loop {
        avr_device::asm::sleep();
    }
}
