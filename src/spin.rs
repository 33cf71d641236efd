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

//! Cycle-level busy-wait for the scan timing.

use embedded_hal::delay::DelayNs;

use crate::config::HOLD_UNIT_NS;

/// A [`DelayNs`] that calls `tick` once per hold unit, rounding up.
///
/// On the board `tick` is a single `nop`. With the 16 bit loop counter one
/// pass takes about four CPU cycles, the same granularity as the hold unit.
pub struct Spin<F> {
    tick: F,
}

impl<F: FnMut()> Spin<F> {
    pub const fn new(tick: F) -> Self {
        Self { tick }
    }
}

impl<F: FnMut()> DelayNs for Spin<F> {
    fn delay_ns(&mut self, ns: u32) {
        let units = u16::try_from(ns.div_ceil(HOLD_UNIT_NS)).unwrap_or(u16::MAX);
        for _ in 0..units {
            (self.tick)();
        }
    }
}
