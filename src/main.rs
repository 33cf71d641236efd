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

//! Kitchen-style countdown timer.
//!
//! Counts 25 minutes down on a four digit seven-segment display, blinks
//! `00:00` for a minute once it runs out and then powers down until the reset
//! button is pressed. A potentiometer sets the brightness.
//!
//! Target: ATmega168 on a Nano-style board, clock at 16 MHz.

#![cfg_attr(target_arch = "avr", no_std, no_main, feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod board;
#[cfg(all(target_arch = "avr", feature = "panic-serial"))]
mod panic;
#[cfg(target_arch = "avr")]
mod timer;

#[cfg(all(target_arch = "avr", not(feature = "panic-serial")))]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[arduino_hal::entry]
fn main() -> ! {
    use arduino_hal::adc::channel::ADC6;
    use segment_countdown::{Multiplexer, Panel, Phase, Spin};

    let Some(dp) = arduino_hal::Peripherals::take() else {
        panic!("peripherals already taken");
    };
    let pins = arduino_hal::pins!(dp);
    let board::Lines {
        digits,
        segments,
        colons,
    } = board::Lines::take(pins);

    // AVcc reference and the slowest ADC clock; speed does not matter here.
    let mut adc = arduino_hal::Adc::new(dp.ADC, Default::default());
    let time_base = timer::TimeBase::start(dp.TC1);

    // SAFETY: the countdown is initialised statically, nothing else is shared
    // with the interrupt.
    unsafe { avr_device::interrupt::enable() };

    let mut panel = Panel::new(
        Multiplexer::new(digits, segments),
        Spin::new(avr_device::asm::nop),
    );
    loop {
        panel.sample(adc.read_nonblocking(&ADC6));
        if infallible(panel.refresh(timer::COUNTDOWN.remaining())) == Phase::Sleeping {
            break;
        }
    }

    time_base.stop();
    avr_device::interrupt::disable();
    let (digits, segments) = infallible(panel.shutdown());
    board::float(digits.into_iter().chain(segments).chain(colons));
    board::power_down(dp.CPU)
}

#[cfg(target_arch = "avr")]
fn infallible<T>(result: Result<T, core::convert::Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

// Host builds only exist so the library tests can run.
#[cfg(not(target_arch = "avr"))]
fn main() {}
