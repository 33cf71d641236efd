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

//! Four digits on one set of segment lines.
//!
//! Only one digit enable line is high at a time. Each [`Multiplexer::step`]
//! moves on to the next position and puts its code on the segment lines;
//! scanning fast enough makes all four look lit at once.

use embedded_hal::digital::{OutputPin, PinState};

use crate::glyph::BLANK;

pub const DIGIT_COUNT: usize = 4;
pub const SEGMENT_COUNT: usize = 8;

pub struct Multiplexer<P> {
    digits: [P; DIGIT_COUNT],
    segments: [P; SEGMENT_COUNT],
    codes: [u8; DIGIT_COUNT],
    selected: usize,
}

impl<P: OutputPin> Multiplexer<P> {
    /// Takes the digit enable lines left to right and the segment lines by
    /// code bit. Nothing is driven until the first step.
    pub fn new(digits: [P; DIGIT_COUNT], segments: [P; SEGMENT_COUNT]) -> Self {
        Self {
            digits,
            segments,
            codes: [BLANK; DIGIT_COUNT],
            selected: 0,
        }
    }

    /// Replace the codes shown from the next step on.
    pub fn set_codes(&mut self, codes: [u8; DIGIT_COUNT]) {
        self.codes = codes;
    }

    /// Position lit by the most recent step.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Switch the lit digit to the next position.
    pub fn step(&mut self) -> Result<(), P::Error> {
        self.blank()?;
        self.selected = (self.selected + 1) % DIGIT_COUNT;
        let code = self.codes[self.selected];
        self.digits[self.selected].set_high()?;
        self.write_segments(code)
    }

    /// Turn every digit off. The selector stays where it is.
    pub fn blank(&mut self) -> Result<(), P::Error> {
        for digit in &mut self.digits {
            digit.set_low()?;
        }
        Ok(())
    }

    /// Drive every line low and give the pins back.
    pub fn shutdown(mut self) -> Result<([P; DIGIT_COUNT], [P; SEGMENT_COUNT]), P::Error> {
        self.blank()?;
        for segment in &mut self.segments {
            segment.set_low()?;
        }
        Ok((self.digits, self.segments))
    }

    fn write_segments(&mut self, code: u8) -> Result<(), P::Error> {
        let mut bits = code;
        for segment in &mut self.segments {
            segment.set_state(PinState::from(bits & 1 == 1))?;
            bits >>= 1;
        }
        Ok(())
    }
}
