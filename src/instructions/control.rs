//! # Control Flow Instructions
//!
//! JMP, JSR/RTS, BRK/RTI, and the undefined-opcode no-op. The addressing
//! resolver has already dereferenced indirect JMP pointers, so every jump
//! target arrives here as a plain memory operand.
//!
//! JSR pushes the address of its own last byte (PC-1) and RTS adds one back
//! after the pop, matching the hardware convention.

use crate::addressing::Operand;
use crate::cpu::{Status, CPU, IRQ_VECTOR};
use crate::memory::MemoryBus;

/// JMP: load PC from the resolved target address.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Memory(addr) = operand {
        cpu.set_pc(addr);
    }
}

/// JSR: push the return address (PC-1, high byte first), then jump.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Memory(addr) = operand {
        let return_addr = cpu.pc().wrapping_sub(1);
        cpu.push_word(return_addr);
        cpu.set_pc(addr);
    }
}

/// RTS: pop the return address and resume at the byte after it.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    let addr = cpu.pop_word();
    cpu.set_pc(addr.wrapping_add(1));
}

/// BRK: software interrupt.
///
/// Pushes PC and the status byte with Break set, clears Break in the live
/// register afterward, and loads PC from the IRQ/BRK vector. The pushed copy
/// keeps Break set so a handler can tell BRK apart from a hardware IRQ.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_flag(Status::BREAK, true);
    cpu.push_word(cpu.pc());
    cpu.push_byte(cpu.status_byte());
    cpu.set_flag(Status::BREAK, false);
    let target = cpu.memory().read_word(IRQ_VECTOR);
    cpu.set_pc(target);
}

/// RTI: pop the status byte (forcing the always-1 bit, never re-asserting
/// Break), then pop PC.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let flags = cpu.pop_byte();
    let restored = (Status::from_bits_retain(flags) | Status::UNUSED) - Status::BREAK;
    cpu.set_status(restored);
    let addr = cpu.pop_word();
    cpu.set_pc(addr);
}

/// Undefined opcode: a one-byte no-op. PC has already advanced past the
/// opcode byte; nothing else changes.
pub(crate) fn undefined<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    log::warn!(
        "undefined opcode {opcode:#04X} at {:#06X}, executed as no-op",
        cpu.pc().wrapping_sub(1)
    );
}
