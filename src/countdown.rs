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

//! The one-second countdown and the display phase derived from it.
//!
//! [`Countdown`] is the only value shared between the timer interrupt and the
//! main loop. Every read and write goes through a critical section so the
//! main loop never sees half of a 16-bit update.

use core::cell::Cell;

use critical_section::Mutex;

use crate::config::BLINK_WINDOW;
use crate::glyph::{self, BLANK_DIGIT};

/// Seconds left on the timer. Negative once it has run out.
pub struct Countdown(Mutex<Cell<i16>>);

impl Countdown {
    #[must_use]
    pub const fn new(start: i16) -> Self {
        Self(Mutex::new(Cell::new(start)))
    }

    /// Count one elapsed second. Called from the time base interrupt.
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let cell = self.0.borrow(cs);
            cell.set(cell.get().saturating_sub(1));
        });
    }

    /// Seconds left, as seen from the main loop.
    #[must_use]
    pub fn remaining(&self) -> i16 {
        critical_section::with(|cs| self.0.borrow(cs).get())
    }
}

/// What the display shows for a given countdown value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Counting down, shown as `MM:SS`.
    Running { minutes: u16, seconds: u16 },
    /// Ran out less than [`BLINK_WINDOW`] seconds ago. `lit` alternates with
    /// the parity of the counter itself: even shows `00:00`, odd is dark.
    Expired { lit: bool },
    /// Terminal. The device powers down until it is reset.
    Sleeping,
}

impl Phase {
    #[must_use]
    pub fn of(remaining: i16) -> Self {
        if remaining >= 0 {
            let remaining = remaining.unsigned_abs();
            Self::Running {
                minutes: remaining / 60,
                seconds: remaining % 60,
            }
        } else if remaining >= -BLINK_WINDOW {
            Self::Expired {
                lit: remaining % 2 == 0,
            }
        } else {
            Self::Sleeping
        }
    }

    /// Segment codes for the four positions, left to right, or `None` once
    /// the display should be shut down.
    #[must_use]
    pub fn digit_codes(self) -> Option<[u8; 4]> {
        match self {
            Self::Running { minutes, seconds } => Some([
                decimal(minutes / 10),
                decimal(minutes % 10),
                decimal(seconds / 10),
                decimal(seconds % 10),
            ]),
            Self::Expired { lit: true } => Some([glyph::encode(0); 4]),
            Self::Expired { lit: false } => Some([glyph::encode(BLANK_DIGIT); 4]),
            Self::Sleeping => None,
        }
    }
}

// More than 99 minutes cannot be shown; the tens position gets the error glyph.
fn decimal(value: u16) -> u8 {
    match u8::try_from(value) {
        Ok(digit) if digit < BLANK_DIGIT => glyph::encode(digit),
        _ => glyph::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RESET_TIME;
    use crate::glyph::{encode, BLANK, ERROR};

    #[test]
    fn splits_minutes_and_seconds() {
        assert_eq!(
            Phase::of(125),
            Phase::Running {
                minutes: 2,
                seconds: 5
            }
        );
        assert_eq!(
            Phase::of(125).digit_codes(),
            Some([encode(0), encode(2), encode(0), encode(5)])
        );
    }

    #[test]
    fn start_shows_full_duration() {
        assert_eq!(
            Phase::of(RESET_TIME).digit_codes(),
            Some([encode(2), encode(5), encode(0), encode(0)])
        );
    }

    #[test]
    fn every_running_value_matches_its_clock_reading() {
        for remaining in 0..=RESET_TIME {
            let minutes = remaining / 60;
            let seconds = remaining % 60;
            let expected = [minutes / 10, minutes % 10, seconds / 10, seconds % 10]
                .map(|d| encode(u8::try_from(d).unwrap()));
            assert_eq!(Phase::of(remaining).digit_codes(), Some(expected));
        }
    }

    #[test]
    fn zero_is_still_running() {
        assert_eq!(Phase::of(0).digit_codes(), Some([encode(0); 4]));
    }

    #[test]
    fn blink_follows_counter_parity() {
        for remaining in -BLINK_WINDOW..0 {
            let expected = if remaining % 2 == 0 {
                [encode(0); 4]
            } else {
                [BLANK; 4]
            };
            assert_eq!(
                Phase::of(remaining).digit_codes(),
                Some(expected),
                "remaining {remaining}"
            );
        }
        assert_eq!(Phase::of(-1), Phase::Expired { lit: false });
        assert_eq!(Phase::of(-2), Phase::Expired { lit: true });
        assert_eq!(Phase::of(-60), Phase::Expired { lit: true });
    }

    #[test]
    fn sleeps_past_the_blink_window() {
        assert_eq!(Phase::of(-61), Phase::Sleeping);
        assert_eq!(Phase::of(i16::MIN), Phase::Sleeping);
        assert_eq!(Phase::Sleeping.digit_codes(), None);
    }

    #[test]
    fn over_99_minutes_shows_error_in_tens() {
        let codes = Phase::of(100 * 60 + 7).digit_codes().unwrap();
        assert_eq!(codes, [ERROR, encode(0), encode(0), encode(7)]);
    }

    #[test]
    fn ticks_count_down_one_second_each() {
        let countdown = Countdown::new(3);
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining(), 1);
        for _ in 0..5 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), -4);
    }

    #[test]
    fn tick_saturates() {
        let countdown = Countdown::new(i16::MIN + 1);
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining(), i16::MIN);
    }
}
