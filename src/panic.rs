// Based on https://github.com/Rahix/avr-hal/blob/main/examples/arduino-uno/src/bin/uno-panic.rs
// License MIT

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    // disable interrupts - no longer necessary after panic
    avr_device::interrupt::disable();

    // re-get the peripherals so we can access serial
    // SAFETY: we're never returning so stealing the peripherals is ok
    let dp = unsafe { arduino_hal::Peripherals::steal() };
    let pins = arduino_hal::pins!(dp);

    // Turn the digits off before the USART takes over D0/D1, which are
    // segment lines.
    let mut digits = [
        pins.a0.into_output().downgrade(),
        pins.a1.into_output().downgrade(),
        pins.a2.into_output().downgrade(),
        pins.a3.into_output().downgrade(),
    ];
    for digit in &mut digits {
        digit.set_low();
    }

    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    ufmt::uwriteln!(&mut serial, "countdown panic\r").ok();

    if let Some(loc) = info.location() {
        ufmt::uwriteln!(
            &mut serial,
            " at {}:{}:{}\r",
            loc.file(),
            loc.line(),
            loc.column(),
        )
        .ok();
    }
    loop {}
}
