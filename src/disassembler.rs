//! # Disassembler
//!
//! Renders one instruction as `(length, text)` from the same opcode table
//! that drives execution. Operand bytes are read through the bus's
//! side-effect-free `peek` path, so disassembling an instruction whose
//! operand happens to sit on an I/O port does not drain a FIFO, and
//! disassembly never writes.
//!
//! The length returned is exactly the byte count `CPU::step` would consume
//! for the same memory contents; both derive it from the addressing-mode tag
//! in the shared table.
//!
//! ## Operand Formats
//!
//! | Mode                    | Rendering      |
//! |-------------------------|----------------|
//! | Implicit                | `RTS`          |
//! | Accumulator             | `ASL A`        |
//! | Immediate               | `LDA #$42`     |
//! | Zero page               | `LDA $42`      |
//! | Zero page,X / ,Y        | `LDA $42,X`    |
//! | Relative                | `BEQ *+2`      |
//! | Absolute                | `JMP $1234`    |
//! | Absolute,X / ,Y         | `LDA $1234,X`  |
//! | Indirect                | `JMP ($1234)`  |
//! | (zp,X)                  | `LDA ($40,X)`  |
//! | (zp),Y                  | `LDA ($40),Y`  |
//! | (zp)                    | `LDA ($40)`    |
//! | (abs,X)                 | `JMP ($1234,X)`|
//! | Undefined opcode        | `???`          |
//!
//! Relative offsets are shown as a signed decimal displacement from the
//! address of the next instruction, the value the executor adds to PC.

use crate::addressing::AddressingMode;
use crate::memory::MemoryBus;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};

/// Disassembles the instruction at `addr`, returning its total byte length
/// and its assembly text.
pub fn disassemble<M: MemoryBus>(memory: &M, addr: u16) -> (u8, String) {
    let opcode = memory.peek(addr);
    let entry = &OPCODE_TABLE[opcode as usize];
    let length = 1 + entry.mode.operand_len();

    if entry.mnemonic == Mnemonic::ILL {
        return (length, entry.mnemonic.name().to_string());
    }

    let name = entry.mnemonic.name();
    let operand_addr = addr.wrapping_add(1);
    let text = match entry.mode {
        AddressingMode::Implicit => name.to_string(),
        AddressingMode::Accumulator => format!("{name} A"),
        AddressingMode::Immediate => {
            format!("{name} #${:02X}", memory.peek(operand_addr))
        }
        AddressingMode::ZeroPage => {
            format!("{name} ${:02X}", memory.peek(operand_addr))
        }
        AddressingMode::ZeroPageX => {
            format!("{name} ${:02X},X", memory.peek(operand_addr))
        }
        AddressingMode::ZeroPageY => {
            format!("{name} ${:02X},Y", memory.peek(operand_addr))
        }
        AddressingMode::Relative => {
            let offset = memory.peek(operand_addr) as i8;
            format!("{name} *{offset:+}")
        }
        AddressingMode::Absolute => {
            format!("{name} ${:04X}", memory.peek_word(operand_addr))
        }
        AddressingMode::AbsoluteX => {
            format!("{name} ${:04X},X", memory.peek_word(operand_addr))
        }
        AddressingMode::AbsoluteY => {
            format!("{name} ${:04X},Y", memory.peek_word(operand_addr))
        }
        AddressingMode::Indirect => {
            format!("{name} (${:04X})", memory.peek_word(operand_addr))
        }
        AddressingMode::IndirectX => {
            format!("{name} (${:02X},X)", memory.peek(operand_addr))
        }
        AddressingMode::IndirectY => {
            format!("{name} (${:02X}),Y", memory.peek(operand_addr))
        }
        AddressingMode::ZeroPageIndirect => {
            format!("{name} (${:02X})", memory.peek(operand_addr))
        }
        AddressingMode::AbsoluteIndexedIndirect => {
            format!("{name} (${:04X},X)", memory.peek_word(operand_addr))
        }
    };

    (length, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    fn disasm(bytes: &[u8]) -> (u8, String) {
        let mut memory = FlatMemory::new();
        memory.load(0x8000, bytes);
        disassemble(&memory, 0x8000)
    }

    #[test]
    fn test_immediate_and_zero_page() {
        assert_eq!(disasm(&[0xA9, 0x42]), (2, "LDA #$42".to_string()));
        assert_eq!(disasm(&[0x65, 0x10]), (2, "ADC $10".to_string()));
        assert_eq!(disasm(&[0xB5, 0x10]), (2, "LDA $10,X".to_string()));
        assert_eq!(disasm(&[0xB6, 0x10]), (2, "LDX $10,Y".to_string()));
    }

    #[test]
    fn test_absolute_forms() {
        assert_eq!(disasm(&[0x4C, 0x34, 0x12]), (3, "JMP $1234".to_string()));
        assert_eq!(disasm(&[0xBD, 0x34, 0x12]), (3, "LDA $1234,X".to_string()));
        assert_eq!(disasm(&[0xB9, 0x34, 0x12]), (3, "LDA $1234,Y".to_string()));
    }

    #[test]
    fn test_indirect_forms() {
        assert_eq!(disasm(&[0x6C, 0x34, 0x12]), (3, "JMP ($1234)".to_string()));
        assert_eq!(disasm(&[0xA1, 0x40]), (2, "LDA ($40,X)".to_string()));
        assert_eq!(disasm(&[0xB1, 0x40]), (2, "LDA ($40),Y".to_string()));
        assert_eq!(disasm(&[0xB2, 0x40]), (2, "LDA ($40)".to_string()));
        assert_eq!(disasm(&[0x7C, 0x34, 0x12]), (3, "JMP ($1234,X)".to_string()));
    }

    #[test]
    fn test_relative_signed_decimal() {
        assert_eq!(disasm(&[0xF0, 0x02]), (2, "BEQ *+2".to_string()));
        assert_eq!(disasm(&[0xD0, 0xFE]), (2, "BNE *-2".to_string()));
        assert_eq!(disasm(&[0x80, 0x7F]), (2, "BRA *+127".to_string()));
    }

    #[test]
    fn test_implied_and_accumulator() {
        assert_eq!(disasm(&[0x60]), (1, "RTS".to_string()));
        assert_eq!(disasm(&[0x0A]), (1, "ASL A".to_string()));
        assert_eq!(disasm(&[0x1A]), (1, "INC A".to_string()));
    }

    #[test]
    fn test_undefined_renders_marker() {
        let (length, text) = disasm(&[0xFF, 0x12, 0x34]);
        assert_eq!(length, 1);
        assert_eq!(text, "???");
    }

    #[test]
    fn test_operand_wraps_past_end_of_memory() {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFF, 0xA9); // LDA # at the last byte
        memory.write(0x0000, 0x99); // operand wraps to 0x0000
        assert_eq!(disassemble(&memory, 0xFFFF), (2, "LDA #$99".to_string()));
    }
}
