//! Frame transports: hardware SPI and bit-banged GPIO.
//!
//! The parts speak SPI mode 1 (clock idle low, data latched on the second
//! edge), MSB first, with an active-low chip-select framing each 24-bit
//! word. Both transports put byte-identical traffic on the wire; they differ
//! only in who toggles the clock.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiDevice;

/// Moves encoded frames onto the wire.
///
/// Implemented by [`HardwareSpi`] and [`BitBang`]; the implementation is
/// picked once at construction and never switched at runtime.
pub trait Interface {
    /// Transport-level error type (pin or bus, HAL-defined).
    type Error;

    /// Puts the control lines into their idle state and readies the
    /// transport. Idempotent.
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Clocks one 3-byte frame out under chip-select framing.
    fn write_frame(&mut self, frame: &[u8; 3]) -> Result<(), Self::Error>;

    /// True when frames go through a hardware SPI peripheral.
    fn is_hardware(&self) -> bool;
}

/// Transport over a hardware SPI peripheral.
///
/// `SPI` is an [`SpiDevice`]: chip-select assertion, mode-1 clocking and
/// arbitration with other devices sharing the bus all live in the device
/// wrapper (for example `embedded_hal_bus::spi::ExclusiveDevice`). Configure
/// the peripheral for [`MODE`](crate::MODE) at the rate reported by
/// [`Ad568x::bus_speed`](crate::Ad568x::bus_speed).
pub struct HardwareSpi<SPI> {
    spi: SPI,
}

impl<SPI> HardwareSpi<SPI> {
    /// Wraps a configured SPI device.
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Releases the SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> Interface for HardwareSpi<SPI> {
    type Error = SPI::Error;

    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        // Settling time after the peripheral comes up.
        delay.delay_ms(1);
        Ok(())
    }

    fn write_frame(&mut self, frame: &[u8; 3]) -> Result<(), Self::Error> {
        self.spi.write(frame)
    }

    fn is_hardware(&self) -> bool {
        true
    }
}

/// Bit-banged transport over three GPIO lines.
///
/// Clocks frames out manually: data line set per bit, clock pulsed high then
/// low, MSB first, no inserted delay. The bit rate is bounded only by the
/// host's pin-toggle latency. All three lines share one pin error type,
/// which they do on any single HAL.
pub struct BitBang<MOSI, SCK, CS> {
    mosi: MOSI,
    sck: SCK,
    cs: CS,
}

impl<MOSI, SCK, CS> BitBang<MOSI, SCK, CS> {
    /// Wraps the data, clock and chip-select lines.
    pub fn new(mosi: MOSI, sck: SCK, cs: CS) -> Self {
        Self { mosi, sck, cs }
    }

    /// Releases the pins as `(data, clock, chip-select)`.
    pub fn release(self) -> (MOSI, SCK, CS) {
        (self.mosi, self.sck, self.cs)
    }
}

impl<MOSI, SCK, CS, E> BitBang<MOSI, SCK, CS>
where
    MOSI: OutputPin<Error = E>,
    SCK: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
{
    // Shift distance stays below 8.
    #[allow(clippy::arithmetic_side_effects)]
    fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        for i in (0..8).rev() {
            let bit = (byte >> i) & 1 != 0;
            self.mosi.set_state(PinState::from(bit))?;
            self.sck.set_high()?;
            self.sck.set_low()?;
        }
        Ok(())
    }
}

impl<MOSI, SCK, CS, E> Interface for BitBang<MOSI, SCK, CS>
where
    MOSI: OutputPin<Error = E>,
    SCK: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
{
    type Error = E;

    fn init<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.cs.set_high()?;
        self.mosi.set_low()?;
        self.sck.set_low()
    }

    fn write_frame(&mut self, frame: &[u8; 3]) -> Result<(), Self::Error> {
        self.cs.set_low()?;
        for &byte in frame {
            self.write_byte(byte)?;
        }
        self.cs.set_high()
    }

    fn is_hardware(&self) -> bool {
        false
    }
}
