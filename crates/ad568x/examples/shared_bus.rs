//! Wires the driver to a chip select on a shared SPI bus through
//! `embedded-hal-bus`, the way firmware hands one peripheral its slice of a
//! multi-device bus. Mock bus and pin stand in for real hardware so the
//! example runs anywhere.
//!
//! Run with: cargo run --example shared_bus

#![allow(clippy::unwrap_used)]

use ad568x::{Ad568x, HardwareSpi, DEFAULT_SPI_HZ, MODE};
use embedded_hal_bus::spi::ExclusiveDevice;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

fn main() {
    // One framed write. The device wrapper owns the chip select, so the bus
    // itself only ever sees plain writes and flushes.
    let bus_expectations = [
        SpiTransaction::write_vec(vec![0x30, 0xAB, 0xC0]),
        SpiTransaction::flush(),
    ];
    let cs_expectations = [
        PinTransaction::set(PinState::High), // ExclusiveDevice idles CS on construction
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ];

    let mut bus = SpiMock::new(&bus_expectations);
    let mut cs = PinMock::new(&cs_expectations);

    let device = ExclusiveDevice::new(bus.clone(), cs.clone(), NoopDelay).unwrap();
    let mut dac = Ad568x::ad5683(HardwareSpi::new(device));
    dac.init(&mut NoopDelay).unwrap();
    dac.set_value(0x0ABC).unwrap();

    println!(
        "wrote code 0x0ABC; configure the bus for mode {MODE:?} at up to {DEFAULT_SPI_HZ} Hz"
    );

    bus.done();
    cs.done();
}
