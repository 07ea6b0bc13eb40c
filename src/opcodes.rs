//! # Opcode Table
//!
//! The complete 256-entry opcode table serving as the single source of truth
//! for instruction decode. Each entry pairs a mnemonic with an addressing
//! mode; everything else (operand byte count, disassembly text, semantic
//! action) is derived from those two tags, so the decode-length query, the
//! disassembler, and the executor can never disagree about instruction
//! boundaries.
//!
//! The table covers the documented NMOS 6502 opcodes plus the 65C02
//! extensions (STZ, TSB, TRB, BRA, PHX/PLX/PHY/PLY, accumulator INC/DEC,
//! BIT immediate/indexed, the zero-page-indirect addressing variants, and
//! JMP absolute-indexed-indirect). Every byte value without a defined
//! instruction maps to the `ILL` catch-all, which executes as a one-byte
//! no-op and disassembles as `???`.

use crate::addressing::AddressingMode;

/// Instruction mnemonic identifier.
///
/// Selects the semantic action for an opcode; the addressing mode in the
/// same table entry selects its operand. `ILL` marks undefined opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRA, BRK, BVC, BVS,
    CLC, CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY,
    JMP, JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PHX, PHY, PLA, PLP,
    PLX, PLY, ROL, ROR, RTI, RTS, SBC, SEC, SED, SEI, STA, STX, STY, STZ,
    TAX, TAY, TRB, TSB, TSX, TXA, TXS, TYA,
    /// Undefined opcode placeholder.
    ILL,
}

impl Mnemonic {
    /// Three-letter assembly name, or `???` for undefined opcodes.
    pub const fn name(self) -> &'static str {
        match self {
            Mnemonic::ADC => "ADC",
            Mnemonic::AND => "AND",
            Mnemonic::ASL => "ASL",
            Mnemonic::BCC => "BCC",
            Mnemonic::BCS => "BCS",
            Mnemonic::BEQ => "BEQ",
            Mnemonic::BIT => "BIT",
            Mnemonic::BMI => "BMI",
            Mnemonic::BNE => "BNE",
            Mnemonic::BPL => "BPL",
            Mnemonic::BRA => "BRA",
            Mnemonic::BRK => "BRK",
            Mnemonic::BVC => "BVC",
            Mnemonic::BVS => "BVS",
            Mnemonic::CLC => "CLC",
            Mnemonic::CLD => "CLD",
            Mnemonic::CLI => "CLI",
            Mnemonic::CLV => "CLV",
            Mnemonic::CMP => "CMP",
            Mnemonic::CPX => "CPX",
            Mnemonic::CPY => "CPY",
            Mnemonic::DEC => "DEC",
            Mnemonic::DEX => "DEX",
            Mnemonic::DEY => "DEY",
            Mnemonic::EOR => "EOR",
            Mnemonic::INC => "INC",
            Mnemonic::INX => "INX",
            Mnemonic::INY => "INY",
            Mnemonic::JMP => "JMP",
            Mnemonic::JSR => "JSR",
            Mnemonic::LDA => "LDA",
            Mnemonic::LDX => "LDX",
            Mnemonic::LDY => "LDY",
            Mnemonic::LSR => "LSR",
            Mnemonic::NOP => "NOP",
            Mnemonic::ORA => "ORA",
            Mnemonic::PHA => "PHA",
            Mnemonic::PHP => "PHP",
            Mnemonic::PHX => "PHX",
            Mnemonic::PHY => "PHY",
            Mnemonic::PLA => "PLA",
            Mnemonic::PLP => "PLP",
            Mnemonic::PLX => "PLX",
            Mnemonic::PLY => "PLY",
            Mnemonic::ROL => "ROL",
            Mnemonic::ROR => "ROR",
            Mnemonic::RTI => "RTI",
            Mnemonic::RTS => "RTS",
            Mnemonic::SBC => "SBC",
            Mnemonic::SEC => "SEC",
            Mnemonic::SED => "SED",
            Mnemonic::SEI => "SEI",
            Mnemonic::STA => "STA",
            Mnemonic::STX => "STX",
            Mnemonic::STY => "STY",
            Mnemonic::STZ => "STZ",
            Mnemonic::TAX => "TAX",
            Mnemonic::TAY => "TAY",
            Mnemonic::TRB => "TRB",
            Mnemonic::TSB => "TSB",
            Mnemonic::TSX => "TSX",
            Mnemonic::TXA => "TXA",
            Mnemonic::TXS => "TXS",
            Mnemonic::TYA => "TYA",
            Mnemonic::ILL => "???",
        }
    }
}

/// Static descriptor for a single opcode value.
///
/// The operand byte count is deliberately not stored: it is recomputed from
/// the mode tag (`mode.operand_len()`) wherever it is needed, which is what
/// keeps decode length and execution in sync by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Instruction mnemonic (semantic action selector).
    pub mnemonic: Mnemonic,
    /// Addressing mode (operand selector).
    pub mode: AddressingMode,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode) -> Opcode {
    Opcode { mnemonic, mode }
}

const ILLEGAL: Opcode = op(Mnemonic::ILL, AddressingMode::Implicit);

/// Complete opcode table indexed by opcode byte value.
///
/// Built by filling an all-`ILL` array with the defined instructions, so the
/// mapping is total: any byte value not listed below decodes as a one-byte
/// undefined opcode.
pub const OPCODE_TABLE: [Opcode; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t = [ILLEGAL; 256];

    // 0x00-0x0F
    t[0x00] = op(BRK, Implicit);
    t[0x01] = op(ORA, IndirectX);
    t[0x04] = op(TSB, ZeroPage);
    t[0x05] = op(ORA, ZeroPage);
    t[0x06] = op(ASL, ZeroPage);
    t[0x08] = op(PHP, Implicit);
    t[0x09] = op(ORA, Immediate);
    t[0x0A] = op(ASL, Accumulator);
    t[0x0C] = op(TSB, Absolute);
    t[0x0D] = op(ORA, Absolute);
    t[0x0E] = op(ASL, Absolute);

    // 0x10-0x1F
    t[0x10] = op(BPL, Relative);
    t[0x11] = op(ORA, IndirectY);
    t[0x12] = op(ORA, ZeroPageIndirect);
    t[0x14] = op(TRB, ZeroPage);
    t[0x15] = op(ORA, ZeroPageX);
    t[0x16] = op(ASL, ZeroPageX);
    t[0x18] = op(CLC, Implicit);
    t[0x19] = op(ORA, AbsoluteY);
    t[0x1A] = op(INC, Accumulator);
    t[0x1C] = op(TRB, Absolute);
    t[0x1D] = op(ORA, AbsoluteX);
    t[0x1E] = op(ASL, AbsoluteX);

    // 0x20-0x2F
    t[0x20] = op(JSR, Absolute);
    t[0x21] = op(AND, IndirectX);
    t[0x24] = op(BIT, ZeroPage);
    t[0x25] = op(AND, ZeroPage);
    t[0x26] = op(ROL, ZeroPage);
    t[0x28] = op(PLP, Implicit);
    t[0x29] = op(AND, Immediate);
    t[0x2A] = op(ROL, Accumulator);
    t[0x2C] = op(BIT, Absolute);
    t[0x2D] = op(AND, Absolute);
    t[0x2E] = op(ROL, Absolute);

    // 0x30-0x3F
    t[0x30] = op(BMI, Relative);
    t[0x31] = op(AND, IndirectY);
    t[0x32] = op(AND, ZeroPageIndirect);
    t[0x34] = op(BIT, ZeroPageX);
    t[0x35] = op(AND, ZeroPageX);
    t[0x36] = op(ROL, ZeroPageX);
    t[0x38] = op(SEC, Implicit);
    t[0x39] = op(AND, AbsoluteY);
    t[0x3A] = op(DEC, Accumulator);
    t[0x3C] = op(BIT, AbsoluteX);
    t[0x3D] = op(AND, AbsoluteX);
    t[0x3E] = op(ROL, AbsoluteX);

    // 0x40-0x4F
    t[0x40] = op(RTI, Implicit);
    t[0x41] = op(EOR, IndirectX);
    t[0x45] = op(EOR, ZeroPage);
    t[0x46] = op(LSR, ZeroPage);
    t[0x48] = op(PHA, Implicit);
    t[0x49] = op(EOR, Immediate);
    t[0x4A] = op(LSR, Accumulator);
    t[0x4C] = op(JMP, Absolute);
    t[0x4D] = op(EOR, Absolute);
    t[0x4E] = op(LSR, Absolute);

    // 0x50-0x5F
    t[0x50] = op(BVC, Relative);
    t[0x51] = op(EOR, IndirectY);
    t[0x52] = op(EOR, ZeroPageIndirect);
    t[0x55] = op(EOR, ZeroPageX);
    t[0x56] = op(LSR, ZeroPageX);
    t[0x58] = op(CLI, Implicit);
    t[0x59] = op(EOR, AbsoluteY);
    t[0x5A] = op(PHY, Implicit);
    t[0x5D] = op(EOR, AbsoluteX);
    t[0x5E] = op(LSR, AbsoluteX);

    // 0x60-0x6F
    t[0x60] = op(RTS, Implicit);
    t[0x61] = op(ADC, IndirectX);
    t[0x64] = op(STZ, ZeroPage);
    t[0x65] = op(ADC, ZeroPage);
    t[0x66] = op(ROR, ZeroPage);
    t[0x68] = op(PLA, Implicit);
    t[0x69] = op(ADC, Immediate);
    t[0x6A] = op(ROR, Accumulator);
    t[0x6C] = op(JMP, Indirect);
    t[0x6D] = op(ADC, Absolute);
    t[0x6E] = op(ROR, Absolute);

    // 0x70-0x7F
    t[0x70] = op(BVS, Relative);
    t[0x71] = op(ADC, IndirectY);
    t[0x72] = op(ADC, ZeroPageIndirect);
    t[0x74] = op(STZ, ZeroPageX);
    t[0x75] = op(ADC, ZeroPageX);
    t[0x76] = op(ROR, ZeroPageX);
    t[0x78] = op(SEI, Implicit);
    t[0x79] = op(ADC, AbsoluteY);
    t[0x7A] = op(PLY, Implicit);
    t[0x7C] = op(JMP, AbsoluteIndexedIndirect);
    t[0x7D] = op(ADC, AbsoluteX);
    t[0x7E] = op(ROR, AbsoluteX);

    // 0x80-0x8F
    t[0x80] = op(BRA, Relative);
    t[0x81] = op(STA, IndirectX);
    t[0x84] = op(STY, ZeroPage);
    t[0x85] = op(STA, ZeroPage);
    t[0x86] = op(STX, ZeroPage);
    t[0x88] = op(DEY, Implicit);
    t[0x89] = op(BIT, Immediate);
    t[0x8A] = op(TXA, Implicit);
    t[0x8C] = op(STY, Absolute);
    t[0x8D] = op(STA, Absolute);
    t[0x8E] = op(STX, Absolute);

    // 0x90-0x9F
    t[0x90] = op(BCC, Relative);
    t[0x91] = op(STA, IndirectY);
    t[0x92] = op(STA, ZeroPageIndirect);
    t[0x94] = op(STY, ZeroPageX);
    t[0x95] = op(STA, ZeroPageX);
    t[0x96] = op(STX, ZeroPageY);
    t[0x98] = op(TYA, Implicit);
    t[0x99] = op(STA, AbsoluteY);
    t[0x9A] = op(TXS, Implicit);
    t[0x9C] = op(STZ, Absolute);
    t[0x9D] = op(STA, AbsoluteX);
    t[0x9E] = op(STZ, AbsoluteX);

    // 0xA0-0xAF
    t[0xA0] = op(LDY, Immediate);
    t[0xA1] = op(LDA, IndirectX);
    t[0xA2] = op(LDX, Immediate);
    t[0xA4] = op(LDY, ZeroPage);
    t[0xA5] = op(LDA, ZeroPage);
    t[0xA6] = op(LDX, ZeroPage);
    t[0xA8] = op(TAY, Implicit);
    t[0xA9] = op(LDA, Immediate);
    t[0xAA] = op(TAX, Implicit);
    t[0xAC] = op(LDY, Absolute);
    t[0xAD] = op(LDA, Absolute);
    t[0xAE] = op(LDX, Absolute);

    // 0xB0-0xBF
    t[0xB0] = op(BCS, Relative);
    t[0xB1] = op(LDA, IndirectY);
    t[0xB2] = op(LDA, ZeroPageIndirect);
    t[0xB4] = op(LDY, ZeroPageX);
    t[0xB5] = op(LDA, ZeroPageX);
    t[0xB6] = op(LDX, ZeroPageY);
    t[0xB8] = op(CLV, Implicit);
    t[0xB9] = op(LDA, AbsoluteY);
    t[0xBA] = op(TSX, Implicit);
    t[0xBC] = op(LDY, AbsoluteX);
    t[0xBD] = op(LDA, AbsoluteX);
    t[0xBE] = op(LDX, AbsoluteY);

    // 0xC0-0xCF
    t[0xC0] = op(CPY, Immediate);
    t[0xC1] = op(CMP, IndirectX);
    t[0xC4] = op(CPY, ZeroPage);
    t[0xC5] = op(CMP, ZeroPage);
    t[0xC6] = op(DEC, ZeroPage);
    t[0xC8] = op(INY, Implicit);
    t[0xC9] = op(CMP, Immediate);
    t[0xCA] = op(DEX, Implicit);
    t[0xCC] = op(CPY, Absolute);
    t[0xCD] = op(CMP, Absolute);
    t[0xCE] = op(DEC, Absolute);

    // 0xD0-0xDF
    t[0xD0] = op(BNE, Relative);
    t[0xD1] = op(CMP, IndirectY);
    t[0xD2] = op(CMP, ZeroPageIndirect);
    t[0xD5] = op(CMP, ZeroPageX);
    t[0xD6] = op(DEC, ZeroPageX);
    t[0xD8] = op(CLD, Implicit);
    t[0xD9] = op(CMP, AbsoluteY);
    t[0xDA] = op(PHX, Implicit);
    t[0xDD] = op(CMP, AbsoluteX);
    t[0xDE] = op(DEC, AbsoluteX);

    // 0xE0-0xEF
    t[0xE0] = op(CPX, Immediate);
    t[0xE1] = op(SBC, IndirectX);
    t[0xE4] = op(CPX, ZeroPage);
    t[0xE5] = op(SBC, ZeroPage);
    t[0xE6] = op(INC, ZeroPage);
    t[0xE8] = op(INX, Implicit);
    t[0xE9] = op(SBC, Immediate);
    t[0xEA] = op(NOP, Implicit);
    t[0xEC] = op(CPX, Absolute);
    t[0xED] = op(SBC, Absolute);
    t[0xEE] = op(INC, Absolute);

    // 0xF0-0xFF
    t[0xF0] = op(BEQ, Relative);
    t[0xF1] = op(SBC, IndirectY);
    t[0xF2] = op(SBC, ZeroPageIndirect);
    t[0xF5] = op(SBC, ZeroPageX);
    t[0xF6] = op(INC, ZeroPageX);
    t[0xF8] = op(SED, Implicit);
    t[0xF9] = op(SBC, AbsoluteY);
    t[0xFA] = op(PLX, Implicit);
    t[0xFD] = op(SBC, AbsoluteX);
    t[0xFE] = op(INC, AbsoluteX);

    t
};
