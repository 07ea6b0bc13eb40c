//! # Stack Instructions
//!
//! Register pushes and pulls, including the 65C02 X/Y variants. Pulls of A,
//! X, and Y update N/Z; PHP pushes the status byte with Break and the
//! always-1 bit forced set, and PLP restores it forcing only the always-1
//! bit.

use crate::cpu::{Status, CPU};
use crate::memory::MemoryBus;

/// PHA: push the accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_byte(cpu.a());
}

/// PLA: pull the accumulator, updating N/Z.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pop_byte();
    cpu.update_negative_zero(cpu.a);
}

/// PHP: push the status byte with Break and the always-1 bit set.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pushed = cpu.status() | Status::BREAK | Status::UNUSED;
    cpu.push_byte(pushed.bits());
}

/// PLP: pull the status byte, forcing the always-1 bit.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let flags = cpu.pop_byte();
    cpu.set_status(Status::from_bits_retain(flags) | Status::UNUSED);
}

/// PHX: push the X register (65C02).
pub(crate) fn phx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_byte(cpu.x());
}

/// PLX: pull the X register, updating N/Z (65C02).
pub(crate) fn plx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.pop_byte();
    cpu.update_negative_zero(cpu.x);
}

/// PHY: push the Y register (65C02).
pub(crate) fn phy<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_byte(cpu.y());
}

/// PLY: pull the Y register, updating N/Z (65C02).
pub(crate) fn ply<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.pop_byte();
    cpu.update_negative_zero(cpu.y);
}
