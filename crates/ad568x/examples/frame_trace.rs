//! Frame Trace Example
//!
//! Drives a 12-bit part over a recording transport and prints every frame
//! that would reach the wire, next to the operation that produced it.
//!
//! Run with: cargo run --example frame_trace

use core::convert::Infallible;

use ad568x::{Ad568x, Error, Interface, PowerMode};
use embedded_hal::delay::DelayNs;
use embedded_hal_mock::eh1::delay::NoopDelay;

/// Transport that records frames instead of clocking them out.
#[derive(Default)]
struct Tracer {
    frames: Vec<[u8; 3]>,
}

impl Interface for Tracer {
    type Error = Infallible;

    fn init<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_frame(&mut self, frame: &[u8; 3]) -> Result<(), Self::Error> {
        self.frames.push(*frame);
        Ok(())
    }

    fn is_hardware(&self) -> bool {
        false
    }
}

type Op = fn(&mut Ad568x<Tracer>) -> Result<(), Error<Infallible>>;

fn main() -> Result<(), Error<Infallible>> {
    let mut dac = Ad568x::ad5681r(Tracer::default());
    dac.init(&mut NoopDelay)?;

    let operations: [(&str, Op); 6] = [
        ("set_percentage(25.0)", |d| d.set_percentage(25.0)),
        ("set_percentage(50.0)", |d| d.set_percentage(50.0)),
        ("set_value(4095)", |d| d.set_value(4095)),
        ("prepare_value(0)", |d| d.prepare_value(0)),
        ("update_value()", |d| d.update_value()),
        ("set_power_mode(TriState)", |d| {
            d.set_power_mode(PowerMode::TriState)
        }),
    ];

    for (_, op) in &operations {
        op(&mut dac)?;
    }

    println!("operation                 -> frame on the wire");
    println!("----------------------------------------------");
    let frames = dac.destroy().frames;
    for ((label, _), [a, b, c]) in operations.iter().zip(&frames) {
        println!("{label:<25} -> {a:02X} {b:02X} {c:02X}");
    }

    Ok(())
}
