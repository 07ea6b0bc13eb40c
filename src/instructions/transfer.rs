//! # Register Transfer Instructions
//!
//! Register-to-register copies. All update N/Z from the transferred value
//! except TXS, which writes the stack pointer without touching flags.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// TAX: copy A to X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.update_negative_zero(cpu.x);
}

/// TAY: copy A to Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.update_negative_zero(cpu.y);
}

/// TXA: copy X to A.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.update_negative_zero(cpu.a);
}

/// TYA: copy Y to A.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.update_negative_zero(cpu.a);
}

/// TSX: copy SP to X, updating N/Z.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp();
    cpu.update_negative_zero(cpu.x);
}

/// TXS: copy X to SP. No flags are affected.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_sp(cpu.x());
}
