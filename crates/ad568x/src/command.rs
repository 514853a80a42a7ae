//! Command codes and wire-frame packing.
//!
//! Every operation reaches the device as one 24-bit word clocked in MSB
//! first: a 4-bit command, a 16-bit data field and four trailing don't-care
//! bits. The field is 16 bits wide regardless of part resolution; the driver
//! keeps out-of-range codes away from this layer, so no validation happens
//! here.

/// AD568x command set
///
/// The 4-bit operation field in the upper nibble of the first frame byte.
/// Codes are shared across the 12/14/16-bit parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// No operation
    Nop = 0x0,
    /// Write the input register without updating the DAC output
    WriteInput = 0x1,
    /// Update the DAC register from the previously written input register
    Update = 0x2,
    /// Write the input register and update the DAC output in one step
    WriteAndUpdate = 0x3,
    /// Write the control register (power mode, reference, gain, daisy-chain)
    WriteControl = 0x4,
}

/// Packs a command and a right-justified 16-bit code into the 3-byte frame
/// clocked into the device.
///
/// The code is left-shifted four bits so its lowest nibble lands in the
/// don't-care positions at the end of the word. Pure function, no failure
/// mode.
///
/// ```
/// use ad568x::{encode, Command};
///
/// assert_eq!(encode(Command::WriteAndUpdate, 0x0ABC), [0x30, 0xAB, 0xC0]);
/// ```
// Shift distances are literals below the operand width and the masks bound
// every narrowing cast; nothing here can overflow or panic.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
#[must_use]
pub const fn encode(command: Command, value: u16) -> [u8; 3] {
    [
        (command as u8) << 4 | (value >> 12) as u8,
        ((value >> 4) & 0xFF) as u8,
        ((value << 4) & 0xF0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_update_packs_command_and_value_nibbles() {
        assert_eq!(encode(Command::WriteAndUpdate, 0x0ABC), [0x30, 0xAB, 0xC0]);
    }

    #[test]
    fn full_scale_fills_the_data_field() {
        assert_eq!(encode(Command::WriteAndUpdate, 0xFFFF), [0x3F, 0xFF, 0xF0]);
    }

    #[test]
    fn zero_value_leaves_only_the_command_nibble() {
        assert_eq!(encode(Command::WriteInput, 0x0000), [0x10, 0x00, 0x00]);
    }

    #[test]
    fn top_value_bits_share_the_first_byte() {
        assert_eq!(encode(Command::Update, 0x8000), [0x28, 0x00, 0x00]);
    }

    #[test]
    fn trailing_nibble_is_always_clear() {
        for value in [0x0001, 0x00FF, 0x5555, 0xAAAA, 0xFFFF] {
            let [_, _, c] = encode(Command::Nop, value);
            assert_eq!(c & 0x0F, 0, "low nibble set for value {value:#06x}");
        }
    }

    #[test]
    fn command_codes_match_the_datasheet() {
        assert_eq!(Command::Nop as u8, 0x0);
        assert_eq!(Command::WriteInput as u8, 0x1);
        assert_eq!(Command::Update as u8, 0x2);
        assert_eq!(Command::WriteAndUpdate as u8, 0x3);
        assert_eq!(Command::WriteControl as u8, 0x4);
    }

    #[test]
    #[allow(clippy::arithmetic_side_effects)]
    fn the_data_field_survives_the_split_across_bytes() {
        for value in [0x0000, 0x0001, 0x0ABC, 0x1234, 0x8000, 0xFFFF] {
            let [a, b, c] = encode(Command::WriteInput, value);
            let rebuilt = u16::from(a & 0x0F) << 12 | u16::from(b) << 4 | u16::from(c >> 4);
            assert_eq!(rebuilt, value, "value {value:#06x} mangled in transit");
        }
    }

    #[test]
    fn encoding_is_independent_of_prior_calls() {
        let first = encode(Command::WriteAndUpdate, 0x0ABC);
        let _ = encode(Command::WriteControl, 0xFFFF);
        let _ = encode(Command::Nop, 0x0000);
        assert_eq!(encode(Command::WriteAndUpdate, 0x0ABC), first);
    }
}
