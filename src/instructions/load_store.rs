//! # Load and Store Instructions
//!
//! Loads update N/Z from the loaded value. Stores modify only the addressed
//! byte, never the flags. STZ is the 65C02 store-zero extension.

use crate::addressing::Operand;
use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// LDA: load the accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a = cpu.read_operand(operand);
    cpu.update_negative_zero(cpu.a);
}

/// LDX: load the X register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.x = cpu.read_operand(operand);
    cpu.update_negative_zero(cpu.x);
}

/// LDY: load the Y register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.y = cpu.read_operand(operand);
    cpu.update_negative_zero(cpu.y);
}

/// STA: store the accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, cpu.a);
}

/// STX: store the X register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, cpu.x);
}

/// STY: store the Y register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, cpu.y);
}

/// STZ: store a literal zero, ignoring the previous value and all flags.
pub(crate) fn stz<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, 0);
}
