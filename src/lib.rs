//! # 6502/65C02 CPU Emulator Core
//!
//! An instruction-set emulator for the MOS 6502 and the WDC 65C02 extensions,
//! designed around a single table-driven decode path shared by execution and
//! disassembly.
//!
//! This crate provides the CPU state structure, a trait-based memory bus
//! abstraction (including memory-mapped serial FIFO ports and a trace
//! observer for conformance tests), and a 256-entry opcode table that drives
//! three mutually consistent queries: decode length, disassembly text, and
//! execution.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib65c02::{FlatMemory, MemoryBus, CPU};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$42
//! memory.write(0x8000, 0xA9);
//! memory.write(0x8001, 0x42);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFF);
//!
//! cpu.step();
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementations via
//!   the `MemoryBus` trait; the serial and trace buses plug in behind it.
//! - **Table-driven design**: `OPCODE_TABLE` is the single source of truth
//!   for every opcode's mnemonic and addressing mode. Operand byte counts are
//!   derived from the mode tag alone, which is what keeps `decode_length`,
//!   `disassemble_at`, and `step` in agreement for all 256 byte values.
//! - **Single-step execution**: `step()` runs exactly one instruction; there
//!   is no run loop, cycle counting, or interrupt line in the core.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, status flags, and execution
//! - `memory` - MemoryBus trait and implementations
//! - `opcodes` - Mnemonic set and the opcode table
//! - `addressing` - Addressing modes and operand handles
//! - `disassembler` - Human-readable instruction rendering

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::{Status, CPU};
pub use memory::{FlatMemory, MemoryBus, SerialMemory, TraceEvent, TracedMemory};
pub use opcodes::{Mnemonic, Opcode, OPCODE_TABLE};
