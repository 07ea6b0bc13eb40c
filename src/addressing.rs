//! # Addressing Modes and Operand Handles
//!
//! This module defines the 15 addressing modes supported by the 65C02 (the
//! 13 NMOS 6502 modes plus the two CMOS additions) and the `Operand` handle
//! the resolver produces for the instruction semantics to consume.
//!
//! The number of operand bytes a mode consumes is a function of the mode tag
//! alone (`operand_len`). Execution, decode-length queries, and the
//! disassembler all derive their byte counts from it, which is what keeps the
//! three code paths consistent for every opcode.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// 65C02 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY, ZeroPageIndirect
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect,
///   AbsoluteIndexedIndirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, INC A
    Accumulator,

    /// 8-bit constant operand in the instruction stream.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register (wraps within zero page).
    ZeroPageX,

    /// Zero page address indexed by Y register (wraps within zero page).
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// of the next instruction.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    AbsoluteY,

    /// Jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Zero-page indirect without index (65C02 addition).
    ///
    /// Example: LDA ($40)
    ZeroPageIndirect,

    /// Absolute address + X used as a pointer (65C02 JMP variant).
    ///
    /// Example: JMP ($1234,X)
    AbsoluteIndexedIndirect,
}

impl AddressingMode {
    /// Number of operand bytes this mode consumes, excluding the opcode byte.
    ///
    /// This is the single source of truth for instruction length: the
    /// resolver consumes exactly this many bytes and `decode_length` returns
    /// `1 + operand_len()`.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::ZeroPageIndirect => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect
            | AddressingMode::AbsoluteIndexedIndirect => 2,
        }
    }
}

/// Ephemeral handle to wherever an instruction's data lives.
///
/// Produced fresh by `CPU::resolve` for each dispatched instruction and
/// discarded when the instruction finishes. The explicit tag keeps the
/// memory-vs-register distinction visible at the call site instead of hiding
/// it behind an accessor object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// A 16-bit memory address; reads and writes go through the bus and may
    /// trigger I/O interception.
    Memory(u16),
    /// The accumulator, the only register-addressed operand.
    Accumulator,
    /// No operand (implied addressing). Reading or writing this handle is a
    /// bug in the opcode table.
    None,
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` into an operand handle, consuming the mode's operand
    /// bytes from the instruction stream.
    ///
    /// All 16-bit address arithmetic wraps modulo 65536; zero-page indexing
    /// wraps modulo 256. Immediate and Relative operands hand back the
    /// operand byte's own address, to be read as a literal.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate | AddressingMode::Relative => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::Memory(addr)
            }
            AddressingMode::ZeroPage => Operand::Memory(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                Operand::Memory(self.fetch_byte().wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                Operand::Memory(self.fetch_byte().wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => Operand::Memory(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                Operand::Memory(self.fetch_word().wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                Operand::Memory(self.fetch_word().wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                Operand::Memory(self.memory.read_word(ptr))
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.x);
                Operand::Memory(self.memory.read_word(zp as u16))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                Operand::Memory(self.memory.read_word(zp as u16).wrapping_add(self.y as u16))
            }
            AddressingMode::ZeroPageIndirect => {
                let zp = self.fetch_byte();
                Operand::Memory(self.memory.read_word(zp as u16))
            }
            AddressingMode::AbsoluteIndexedIndirect => {
                let ptr = self.fetch_word().wrapping_add(self.x as u16);
                Operand::Memory(self.memory.read_word(ptr))
            }
        }
    }

    /// Reads the value an operand handle refers to.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Memory(addr) => self.memory.read(addr),
            Operand::Accumulator => self.a,
            // Every table entry pairs a mnemonic with a mode it supports;
            // validated by the opcode table tests.
            Operand::None => unreachable!("implied operand has no value"),
        }
    }

    /// Writes a value through an operand handle.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Memory(addr) => self.memory.write(addr, value),
            Operand::Accumulator => self.a = value,
            Operand::None => unreachable!("implied operand cannot be written"),
        }
    }
}
