//! Typed view of the AD5683-class control register.
//!
//! A control write carries its settings in the top six bits of the 16-bit
//! data field: RESET, the two power-down bits, reference disable, gain and
//! daisy-chain enable. The remaining bits are don't-care and stay clear.

/// Output state selected by the power-down bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerMode {
    /// Normal operation
    #[default]
    Normal = 0x0,
    /// Powered down, output pulled to ground through 1 kΩ
    PowerDown1k = 0x1,
    /// Powered down, output pulled to ground through 100 kΩ
    PowerDown100k = 0x2,
    /// Powered down, output floating
    TriState = 0x3,
}

/// Control-register settings
///
/// `Default` is the power-on state of the parts: normal operation, internal
/// reference on, unity gain, daisy-chaining off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Control {
    /// Perform a power-on reset of the DAC and input registers
    pub reset: bool,
    /// Power state of the output stage
    pub power_mode: PowerMode,
    /// Use the on-chip 2.5 V reference (R-suffix parts; the wire bit is a
    /// *disable*, inverted here)
    pub internal_reference: bool,
    /// Double the output span from 0..Vref to 0..2·Vref
    pub gain_2x: bool,
    /// Forward input data on SDO for daisy-chained devices
    pub daisy_chain: bool,
}

impl Default for Control {
    fn default() -> Self {
        Self {
            reset: false,
            power_mode: PowerMode::Normal,
            internal_reference: true,
            gain_2x: false,
            daisy_chain: false,
        }
    }
}

impl Control {
    /// Packs the settings into the data field of a control frame.
    ///
    /// Bit positions per the AD5683 datasheet control register: RESET at
    /// bit 15, PD1/PD0 at 14..13, REF at 12, GAIN at 11, DCEN at 10.
    // Literal shift distances; every operand fits u16.
    #[allow(clippy::arithmetic_side_effects)]
    #[must_use]
    pub const fn bits(self) -> u16 {
        (self.reset as u16) << 15
            | (self.power_mode as u16) << 13
            | ((!self.internal_reference) as u16) << 12
            | (self.gain_2x as u16) << 11
            | (self.daisy_chain as u16) << 10
    }
}
