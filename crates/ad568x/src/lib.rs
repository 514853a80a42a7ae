//! Platform-agnostic driver for the Analog Devices AD568x SPI DACs
//!
//! Single-channel nanoDAC+ parts sharing one 3-byte command protocol and
//! differing only in resolution:
//!
//! | Part    | Resolution | Reference      |
//! |---------|------------|----------------|
//! | AD5681R | 12 bit     | internal 2.5 V |
//! | AD5682R | 14 bit     | internal 2.5 V |
//! | AD5683R | 16 bit     | internal 2.5 V |
//! | AD5683  | 16 bit     | external       |
//!
//! The driver is blocking and generic over its transport: frames reach the
//! wire either through a hardware SPI peripheral behind an
//! [`embedded_hal::spi::SpiDevice`] ([`HardwareSpi`]) or through three GPIO
//! lines clocked in software ([`BitBang`]). Both transports put
//! byte-identical traffic on the wire.
//!
//! The protocol is write-only. The device never acknowledges, so an `Ok`
//! result means "frame constructed and clocked out", not "device accepted
//! it"; callers needing confirmation must verify out of band.
//!
//! # Example
//!
//! ```
//! use ad568x::{Ad568x, Error, Interface};
//! use embedded_hal::delay::DelayNs;
//!
//! fn ramp<I: Interface>(
//!     dac: &mut Ad568x<I>,
//!     delay: &mut impl DelayNs,
//! ) -> Result<(), Error<I::Error>> {
//!     dac.init(delay)?;
//!     for step in 0..=100u8 {
//!         dac.set_percentage(f32::from(step))?;
//!         delay.delay_ms(10);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Staged updates let several converters switch together: stage each part
//! with [`Ad568x::prepare_value`], then send [`Ad568x::update_value`] to
//! every chip select.
//!
//! # Features
//!
//! - `std`: implement `std::error::Error` for [`Error`]
//! - `defmt`: `defmt::Format` derives on all public types

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

mod command;
mod control;
mod driver;
mod interface;

pub use command::{encode, Command};
pub use control::{Control, PowerMode};
pub use driver::{Ad568x, Resolution};
pub use interface::{BitBang, HardwareSpi, Interface};

use embedded_hal::spi::{Mode, MODE_1};

/// SPI mode the parts speak: clock idle low, data latched on the falling
/// (second) edge. Program the bus peripheral with this mode.
pub const MODE: Mode = MODE_1;

/// Default clock rate for the accelerated transport, 16 MHz.
pub const DEFAULT_SPI_HZ: u32 = 16_000_000;

/// Driver errors
///
/// `E` is the transport's error type; for most HAL pin implementations that
/// is [`core::convert::Infallible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Requested code above the resolution maximum, or percentage outside
    /// 0–100. Nothing was sent and the cached value is unchanged.
    OutOfRange,
    /// The transport reported a host-side pin or bus failure.
    Comm(E),
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

impl<E> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "value outside the device's range"),
            Self::Comm(_) => write!(f, "transport communication error"),
        }
    }
}
