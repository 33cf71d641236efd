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

//! Countdown timer on a multiplexed four digit seven-segment display.
//!
//! The library holds everything that does not touch registers: the glyph
//! table, the countdown and its display phases, the dimmer logic and the
//! multiplexed driver. Pins and busy-waits come in through `embedded-hal`, so
//! the same code runs on the board and in host tests.
#![cfg_attr(not(test), no_std)]

pub mod brightness;
pub mod config;
pub mod countdown;
pub mod glyph;
pub mod multiplex;
pub mod panel;
pub mod spin;

pub use countdown::{Countdown, Phase};
pub use multiplex::Multiplexer;
pub use panel::Panel;
pub use spin::Spin;
