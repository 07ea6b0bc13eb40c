//! # Increment and Decrement Instructions
//!
//! INC and DEC work through the operand handle, so the 65C02 accumulator
//! forms (opcodes 0x1A and 0x3A) need no special casing here. All six update
//! N/Z from the result.

use crate::addressing::Operand;
use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// INC: increment the operand (memory or accumulator), wrapping.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, result);
    cpu.update_negative_zero(result);
}

/// DEC: decrement the operand (memory or accumulator), wrapping.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, result);
    cpu.update_negative_zero(result);
}

/// INX: increment X.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_negative_zero(cpu.x);
}

/// INY: increment Y.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_negative_zero(cpu.y);
}

/// DEX: decrement X.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_negative_zero(cpu.x);
}

/// DEY: decrement Y.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_negative_zero(cpu.y);
}
