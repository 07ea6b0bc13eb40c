//! # Branch Instructions
//!
//! The eight conditional branches plus the 65C02 branch-always BRA. Each
//! tests one flag and shares `branch_if`: the operand handle points at the
//! already-consumed offset byte, so a taken branch applies the signed offset
//! relative to the next instruction. Branches never modify flags.

use crate::addressing::Operand;
use crate::cpu::{Status, CPU};
use crate::memory::MemoryBus;

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, taken: bool) {
    let offset = cpu.read_operand(operand) as i8;
    if taken {
        cpu.branch(offset);
    }
}

/// BCC: branch if Carry clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let taken = !cpu.flag_set(Status::CARRY);
    branch_if(cpu, operand, taken);
}

/// BCS: branch if Carry set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let taken = cpu.flag_set(Status::CARRY);
    branch_if(cpu, operand, taken);
}

/// BNE: branch if Zero clear.
pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let taken = !cpu.flag_set(Status::ZERO);
    branch_if(cpu, operand, taken);
}

/// BEQ: branch if Zero set.
pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let taken = cpu.flag_set(Status::ZERO);
    branch_if(cpu, operand, taken);
}

/// BPL: branch if Negative clear.
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let taken = !cpu.flag_set(Status::NEGATIVE);
    branch_if(cpu, operand, taken);
}

/// BMI: branch if Negative set.
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let taken = cpu.flag_set(Status::NEGATIVE);
    branch_if(cpu, operand, taken);
}

/// BVC: branch if Overflow clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let taken = !cpu.flag_set(Status::OVERFLOW);
    branch_if(cpu, operand, taken);
}

/// BVS: branch if Overflow set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let taken = cpu.flag_set(Status::OVERFLOW);
    branch_if(cpu, operand, taken);
}

/// BRA: branch always (65C02).
pub(crate) fn bra<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    branch_if(cpu, operand, true);
}
