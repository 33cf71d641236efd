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

//! Seven-segment glyphs.
//!
//! Bit `i` of a code drives segment line `i`. Bit 0 is the decimal point, the
//! remaining seven bits are the digit segments as wired on the board.

/// Digit value that encodes to a dark position.
pub const BLANK_DIGIT: u8 = 10;

/// All segments off.
pub const BLANK: u8 = 0b0000_0000;

/// Decimal point only, shown for values outside the table.
pub const ERROR: u8 = 0b0000_0001;

const DIGITS: [u8; 10] = [
    0b0111_1110, // 0
    0b0000_1100, // 1
    0b1011_0110, // 2
    0b1001_1110, // 3
    0b1100_1100, // 4
    0b1101_1010, // 5
    0b1111_1010, // 6
    0b0000_1110, // 7
    0b1111_1110, // 8
    0b1101_1110, // 9
];

/// Segment code for a decimal digit, [`BLANK_DIGIT`] or anything else.
#[must_use]
pub fn encode(digit: u8) -> u8 {
    match DIGITS.get(usize::from(digit)) {
        Some(&code) => code,
        None if digit == BLANK_DIGIT => BLANK,
        None => ERROR,
    }
}
