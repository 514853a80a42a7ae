//! Wire-level tests for the hardware SPI transport.
//!
//! Each `SpiDevice` write is one chip-select-framed transaction; the mock
//! checks the triplet TransactionStart + Write + TransactionEnd per frame.

#![allow(clippy::unwrap_used)]

use ad568x::{encode, Ad568x, Command, HardwareSpi, PowerMode};
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the three SPI expectations that correspond to one `spi.write(&frame)`
/// call via the `SpiDevice` trait:
///   1. `TransactionStart`
///   2. `Write(frame)`
///   3. `TransactionEnd`
fn spi_device_write(frame: [u8; 3]) -> [SpiTransaction<u8>; 3] {
    [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(frame.to_vec()),
        SpiTransaction::transaction_end(),
    ]
}

/// Expectations for a sequence of frames, one framed transaction each.
fn framed(frames: &[[u8; 3]]) -> Vec<SpiTransaction<u8>> {
    frames.iter().flat_map(|&f| spi_device_write(f)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn set_value_reaches_the_wire_as_one_framed_transaction() {
    let expectations = spi_device_write([0x30, 0xAB, 0xC0]);
    let mut spi = SpiMock::new(&expectations);

    let mut dac = Ad568x::ad5683(HardwareSpi::new(spi.clone()));
    dac.init(&mut NoopDelay).unwrap();
    dac.set_value(0x0ABC).unwrap();
    assert!(dac.uses_hardware_spi());

    spi.done();
}

#[test]
fn the_wire_image_is_exactly_the_encoded_frame() {
    let expectations = framed(&[
        encode(Command::WriteAndUpdate, 0x0000),
        encode(Command::WriteAndUpdate, 0x8000),
        encode(Command::WriteAndUpdate, 0xFFFF),
    ]);
    let mut spi = SpiMock::new(&expectations);

    let mut dac = Ad568x::ad5683r(HardwareSpi::new(spi.clone()));
    for code in [0x0000, 0x8000, 0xFFFF] {
        dac.set_value(code).unwrap();
    }

    spi.done();
}

#[test]
fn staged_update_sends_a_write_frame_then_an_update_frame() {
    let expectations = framed(&[
        encode(Command::WriteInput, 0x0FFF),
        encode(Command::Update, 0x0000),
    ]);
    let mut spi = SpiMock::new(&expectations);

    let mut dac = Ad568x::ad5681r(HardwareSpi::new(spi.clone()));
    dac.prepare_value(0x0FFF).unwrap();
    dac.update_value().unwrap();
    assert_eq!(dac.value(), 0x0FFF);

    spi.done();
}

#[test]
fn rejected_codes_never_reach_the_bus() {
    // No expectations: the mock fails on any traffic.
    let mut spi = SpiMock::<u8>::new(&[]);

    let mut dac = Ad568x::ad5681r(HardwareSpi::new(spi.clone()));
    assert!(dac.set_value(4096).is_err());
    assert!(dac.set_percentage(101.0).is_err());

    spi.done();
}

#[test]
fn power_down_and_wake_write_control_frames() {
    // 100 kOhm pull-down is control data 0x4000, wake is all-defaults 0x0000.
    let expectations = framed(&[[0x44, 0x00, 0x00], [0x40, 0x00, 0x00]]);
    let mut spi = SpiMock::new(&expectations);

    let mut dac = Ad568x::ad5683(HardwareSpi::new(spi.clone()));
    dac.set_power_mode(PowerMode::PowerDown100k).unwrap();
    dac.set_power_mode(PowerMode::Normal).unwrap();

    spi.done();
}
