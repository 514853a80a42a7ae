//! Device driver: validation, value bookkeeping and frame dispatch.

use embedded_hal::delay::DelayNs;

use crate::command::{encode, Command};
use crate::control::{Control, PowerMode};
use crate::interface::Interface;
use crate::{Error, DEFAULT_SPI_HZ};

/// Output resolution of a part, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 12-bit parts (AD5681R): codes 0..=4095
    Bits12,
    /// 14-bit parts (AD5682R): codes 0..=16383
    Bits14,
    /// 16-bit parts (AD5683R, AD5683): codes 0..=65535
    Bits16,
}

impl Resolution {
    /// Number of code bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Bits12 => 12,
            Self::Bits14 => 14,
            Self::Bits16 => 16,
        }
    }

    /// Highest representable output code.
    #[must_use]
    pub const fn max_code(self) -> u16 {
        match self {
            Self::Bits12 => 0x0FFF,
            Self::Bits14 => 0x3FFF,
            Self::Bits16 => 0xFFFF,
        }
    }

    /// Output codes per percentage point.
    ///
    /// Historical factors of the family's driver lineage, kept for
    /// compatibility with existing calibrations; not exact
    /// `max_code / 100` scaling.
    const fn codes_per_percent(self) -> f32 {
        match self {
            Self::Bits12 => 40.95,
            Self::Bits14 => 163.83,
            Self::Bits16 => 655.35,
        }
    }
}

/// AD568x driver over an owned transport.
///
/// Construct with [`Ad568x::new`] or one of the part constructors, then
/// call [`init`](Self::init) once before the first transfer.
pub struct Ad568x<I> {
    interface: I,
    resolution: Resolution,
    value: u16,
    spi_hz: u32,
}

impl<I> Ad568x<I> {
    /// Driver over `interface` for a part of the given resolution.
    pub fn new(interface: I, resolution: Resolution) -> Self {
        Self {
            interface,
            resolution,
            value: 0,
            spi_hz: DEFAULT_SPI_HZ,
        }
    }

    /// AD5681R, 12-bit.
    pub fn ad5681r(interface: I) -> Self {
        Self::new(interface, Resolution::Bits12)
    }

    /// AD5682R, 14-bit.
    pub fn ad5682r(interface: I) -> Self {
        Self::new(interface, Resolution::Bits14)
    }

    /// AD5683R, 16-bit, internal reference.
    pub fn ad5683r(interface: I) -> Self {
        Self::new(interface, Resolution::Bits16)
    }

    /// AD5683, 16-bit, external reference.
    pub fn ad5683(interface: I) -> Self {
        Self::new(interface, Resolution::Bits16)
    }

    /// Resolution tag of this instance.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Last code successfully written or staged.
    ///
    /// Pure accessor; nothing is read back from the device.
    #[must_use]
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Percentage of full scale corresponding to [`value`](Self::value).
    ///
    /// Exactly `0.0` for a cached code of zero; zero is therefore not
    /// distinguishable from "never set".
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.value == 0 {
            return 0.0;
        }
        f32::from(self.value) / self.resolution.codes_per_percent()
    }

    /// Clock rate the accelerated transport's bus should be programmed to.
    #[must_use]
    pub fn bus_speed(&self) -> u32 {
        self.spi_hz
    }

    /// Records the clock rate for the accelerated transport.
    ///
    /// Advisory under an injected, pre-configured bus: the rate is consulted
    /// when the caller next configures the SPI peripheral, never applied
    /// retroactively to a live bus.
    pub fn set_bus_speed(&mut self, hz: u32) {
        self.spi_hz = hz;
    }

    /// Consumes the driver and hands the transport back.
    pub fn destroy(self) -> I {
        self.interface
    }
}

impl<I: Interface> Ad568x<I> {
    /// Idles the control lines and readies the transport.
    ///
    /// Call once before the first transfer; safe to call again.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>> {
        self.interface.init(delay).map_err(Error::Comm)
    }

    /// True when this instance drives a hardware SPI peripheral.
    #[must_use]
    pub fn uses_hardware_spi(&self) -> bool {
        self.interface.is_hardware()
    }

    /// Writes `value` and updates the output in one frame.
    pub fn set_value(&mut self, value: u16) -> Result<(), Error<I::Error>> {
        self.checked_send(Command::WriteAndUpdate, value)
    }

    /// Stages `value` in the input register without touching the output.
    ///
    /// The output keeps its old level until [`update_value`](Self::update_value)
    /// or a later [`set_value`](Self::set_value). Staging lets several
    /// converters on one bus switch together.
    pub fn prepare_value(&mut self, value: u16) -> Result<(), Error<I::Error>> {
        self.checked_send(Command::WriteInput, value)
    }

    /// Moves the staged code to the output.
    ///
    /// The update frame carries no data; the cached value is untouched.
    pub fn update_value(&mut self) -> Result<(), Error<I::Error>> {
        self.send(Command::Update, 0)
    }

    /// Maps `pct` (0–100, NaN rejected) to the nearest output code and
    /// writes it. Lossy at the extremes; see [`percentage`](Self::percentage).
    pub fn set_percentage(&mut self, pct: f32) -> Result<(), Error<I::Error>> {
        if !(0.0..=100.0).contains(&pct) {
            return Err(Error::OutOfRange);
        }
        // pct is within 0..=100 here, so the rounded product fits u16.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let code = libm::roundf(self.resolution.codes_per_percent() * pct) as u16;
        self.set_value(code)
    }

    /// Writes the control register verbatim.
    ///
    /// Never validated: all sixteen bits go to the device, don't-care
    /// positions included. [`set_control`](Self::set_control) offers a typed
    /// view.
    pub fn set_control_register(&mut self, raw: u16) -> Result<(), Error<I::Error>> {
        self.send(Command::WriteControl, raw)
    }

    /// Writes the control register from typed settings.
    pub fn set_control(&mut self, control: Control) -> Result<(), Error<I::Error>> {
        self.set_control_register(control.bits())
    }

    /// Selects the output power state; other control bits take their
    /// defaults (the register is write-only, so partial updates are not
    /// possible).
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<I::Error>> {
        self.set_control(Control {
            power_mode: mode,
            ..Control::default()
        })
    }

    /// Power-on reset of the DAC and input registers.
    ///
    /// The parts come out of reset at zero scale, so the cached value drops
    /// to zero with them.
    pub fn reset(&mut self) -> Result<(), Error<I::Error>> {
        self.set_control(Control {
            reset: true,
            ..Control::default()
        })?;
        self.value = 0;
        Ok(())
    }

    /// Range check, transfer, then cache. The cache holds the last code
    /// that actually reached the wire.
    fn checked_send(&mut self, command: Command, value: u16) -> Result<(), Error<I::Error>> {
        if value > self.resolution.max_code() {
            return Err(Error::OutOfRange);
        }
        self.send(command, value)?;
        self.value = value;
        Ok(())
    }

    fn send(&mut self, command: Command, value: u16) -> Result<(), Error<I::Error>> {
        self.interface
            .write_frame(&encode(command, value))
            .map_err(Error::Comm)
    }
}
