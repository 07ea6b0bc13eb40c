//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 65C02 processor
//! state and the single-step fetch-decode-execute path.
//!
//! ## CPU State
//!
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page
//!   (0x0100-0x01FF), descending
//! - **Status flags** (P): packed `Status` bitflags
//!
//! ## Execution Model
//!
//! `step()` executes exactly one instruction. There is no run loop, cycle
//! accounting, or interrupt line; a driver calls `step()` repeatedly.
//! Undefined opcodes execute as a documented no-op that advances PC past the
//! opcode byte only.

use bitflags::bitflags;

use crate::disassembler;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;

/// Address of the reset vector (little-endian PC loaded on reset).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector (little-endian PC loaded by BRK).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the stack page; the full stack address is
/// `STACK_OFFSET + SP`.
pub const STACK_OFFSET: u16 = 0x0100;

bitflags! {
    /// Processor status flags, bit-mapped as on the hardware (NV-BDIZC).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Carry
        const CARRY     = 0b0000_0001;
        /// Zero
        const ZERO      = 0b0000_0010;
        /// IRQ disable
        const IRQ_DISABLE = 0b0000_0100;
        /// Decimal (BCD) arithmetic mode
        const DECIMAL   = 0b0000_1000;
        /// Break (set in the byte pushed by BRK/PHP)
        const BREAK     = 0b0001_0000;
        /// Undefined, reads as 1 on hardware
        const UNUSED    = 0b0010_0000;
        /// Signed overflow
        const OVERFLOW  = 0b0100_0000;
        /// Negative (bit 7 of the last result)
        const NEGATIVE  = 0b1000_0000;
    }
}

/// 65C02 CPU state and execution context.
///
/// The CPU owns its memory bus exclusively for the lifetime of the session
/// and contains all processor state. It is generic over the memory
/// implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use lib65c02::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80); // PC = 0x8000
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status_byte(), 0x00);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (STACK_OFFSET + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Status flag register
    pub(crate) status: Status,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Bytes dropped because the stack pointer was already at 0
    stack_overflows: u64,

    /// Pops attempted with the stack pointer already at 0xFF
    stack_underflows: u64,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU owning `memory` and applies the power-on reset:
    /// A=X=Y=0, P=0, SP=0xFF, and PC loaded little-endian from the reset
    /// vector at 0xFFFC/0xFFFD.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::empty(),
            memory,
            stack_overflows: 0,
            stack_underflows: 0,
        };
        cpu.reset();
        cpu
    }

    /// Re-applies the reset state without replacing the memory contents.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.status = Status::empty();
        self.sp = 0xFF;
        self.pc = self.memory.read_word(RESET_VECTOR);
    }

    /// Executes exactly one instruction.
    ///
    /// Fetches the opcode at PC (advancing PC by one), resolves the operand
    /// per the opcode's addressing mode (advancing PC by the mode's operand
    /// byte count), and applies the mnemonic's semantics. Undefined opcodes
    /// are a no-op that consumes only the opcode byte.
    pub fn step(&mut self) {
        let opcode = self.fetch_byte();
        let entry = &OPCODE_TABLE[opcode as usize];
        let operand = self.resolve(entry.mode);
        entry.mnemonic.execute(self, operand, opcode);
    }

    // ========== Instruction stream primitives ==========

    /// Reads the byte at PC and increments PC by 1 (wrapping).
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and increments PC by 2 (wrapping).
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let value = self.memory.read_word(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Adds a sign-extended branch offset to PC, wrapping modulo 65536.
    pub(crate) fn branch(&mut self, offset: i8) {
        self.pc = self.pc.wrapping_add_signed(offset as i16);
    }

    // ========== Stack primitives ==========

    /// Pushes a byte onto the descending stack at `STACK_OFFSET + SP`.
    ///
    /// With SP already at 0 the byte is dropped: a stack overflow, counted
    /// and logged but never fatal.
    pub(crate) fn push_byte(&mut self, value: u8) {
        if self.sp > 0 {
            self.memory.write(STACK_OFFSET + self.sp as u16, value);
            self.sp -= 1;
        } else {
            self.stack_overflows += 1;
            log::warn!("stack overflow: dropped byte {value:#04X} at PC {:#06X}", self.pc);
        }
    }

    /// Pops a byte from the stack.
    ///
    /// With SP already at 0xFF this returns 0: a stack underflow, counted
    /// and logged but never fatal.
    pub(crate) fn pop_byte(&mut self) -> u8 {
        if self.sp < 0xFF {
            self.sp += 1;
            self.memory.read(STACK_OFFSET + self.sp as u16)
        } else {
            self.stack_underflows += 1;
            log::warn!("stack underflow at PC {:#06X}", self.pc);
            0
        }
    }

    /// Pushes a word, high byte first, so the low byte pops first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte(value as u8);
    }

    /// Pops a word pushed by `push_word`.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop_byte() as u16;
        let hi = self.pop_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Flag helpers ==========

    /// Sets or clears the given flag(s).
    pub fn set_flag(&mut self, flag: Status, condition: bool) {
        self.status.set(flag, condition);
    }

    /// Returns true if all of the given flag bits are set.
    pub fn flag_set(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Sets Negative from bit 7 of `value` and Zero from `value == 0`.
    pub(crate) fn update_negative_zero(&mut self, value: u8) {
        self.set_flag(Status::NEGATIVE, value & 0x80 != 0);
        self.set_flag(Status::ZERO, value == 0);
    }

    // ========== Decode queries (pure peeks) ==========

    /// Total byte length of the instruction at `addr` (opcode + operands).
    ///
    /// A pure peek: no register state changes and no I/O side effects.
    /// Undefined opcodes have length 1.
    pub fn decode_length(&self, addr: u16) -> u8 {
        let opcode = self.memory.peek(addr);
        1 + OPCODE_TABLE[opcode as usize].mode.operand_len()
    }

    /// Disassembles the instruction at `addr` into `(length, text)`.
    ///
    /// Reads exactly `decode_length(addr)` bytes through the bus's
    /// side-effect-free `peek` path and performs no writes.
    pub fn disassemble_at(&self, addr: u16) -> (u8, String) {
        disassembler::disassemble(&self.memory, addr)
    }

    // ========== Driver access ==========

    /// Reads a byte without I/O side effects, for driver inspection.
    pub fn peek(&self, addr: u16) -> u8 {
        self.memory.peek(addr)
    }

    /// Writes a byte through the bus (port interception applies).
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: the full stack address is 0x0100 + SP; the stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status_byte(&self) -> u8 {
        self.status.bits()
    }

    /// Returns the status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Replaces the status register wholesale.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Number of pushes dropped because the stack was full.
    pub fn stack_overflows(&self) -> u64 {
        self.stack_overflows
    }

    /// Number of pops attempted on an empty stack.
    pub fn stack_underflows(&self) -> u64 {
        self.stack_underflows
    }
}
