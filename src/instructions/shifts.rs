//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, and ROR operate in place on the operand handle, which is
//! either a memory cell or the accumulator. Carry receives the bit shifted
//! off the end; the rotates feed the incoming Carry into the vacated bit.

use crate::addressing::Operand;
use crate::cpu::{Status, CPU};
use crate::memory::MemoryBus;

/// ASL: shift left one bit, Carry from bit 7, zero into bit 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = value << 1;
    cpu.set_flag(Status::CARRY, value & 0x80 != 0);
    cpu.write_operand(operand, result);
    cpu.update_negative_zero(result);
}

/// LSR: shift right one bit, Carry from bit 0, zero into bit 7.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = value >> 1;
    cpu.set_flag(Status::CARRY, value & 0x01 != 0);
    cpu.write_operand(operand, result);
    cpu.update_negative_zero(result);
}

/// ROL: rotate left through Carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let carry_in = cpu.flag_set(Status::CARRY) as u8;
    let result = (value << 1) | carry_in;
    cpu.set_flag(Status::CARRY, value & 0x80 != 0);
    cpu.write_operand(operand, result);
    cpu.update_negative_zero(result);
}

/// ROR: rotate right through Carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let carry_in = (cpu.flag_set(Status::CARRY) as u8) << 7;
    let result = (value >> 1) | carry_in;
    cpu.set_flag(Status::CARRY, value & 0x01 != 0);
    cpu.write_operand(operand, result);
    cpu.update_negative_zero(result);
}
