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

//! Fixed timing and brightness parameters.
//!
//! There is no runtime configuration: the countdown length, blink window and
//! dimmer scaling are baked into the firmware.

/// Countdown length in seconds at power-on or reset.
pub const RESET_TIME: i16 = 25 * 60;

/// Seconds the expired display keeps blinking before the device sleeps.
pub const BLINK_WINDOW: i16 = 60;

/// Seconds after start during which the display is forced visible.
pub const RAMP_SECONDS: i16 = 10;

/// How far the startup brightness floor drops per elapsed second.
pub const RAMP_STEP: u16 = 100;

/// Full-scale brightness sample (10-bit ADC).
pub const BRIGHTNESS_MAX: u16 = 1023;

/// Length of one scan cycle in hold units.
pub const CYCLE_UNITS: u16 = 1024;

/// CPU clock of the board.
pub const CPU_HZ: u32 = 16_000_000;

/// One hold unit is four CPU cycles.
pub const HOLD_UNIT_NS: u32 = 4 * 1_000_000_000 / CPU_HZ;

/// Timer/Counter 1 clock divider for the one-second time base.
pub const TIME_BASE_PRESCALER: u32 = 256;

const TIME_BASE_COUNTS: u32 = CPU_HZ / TIME_BASE_PRESCALER;
const _: () = assert!(TIME_BASE_COUNTS <= 1 << 16 && CPU_HZ % TIME_BASE_PRESCALER == 0);

/// Compare value for a one second period. CTC mode clears on the count
/// after the match.
pub const TIME_BASE_COMPARE: u16 = (TIME_BASE_COUNTS - 1) as u16;
