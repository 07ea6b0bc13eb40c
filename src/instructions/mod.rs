//! # 65C02 Instruction Implementations
//!
//! This module contains the implementations of all instruction semantics,
//! organized by category. Each instruction is a standalone function taking a
//! mutable reference to the CPU and the already-resolved operand handle; the
//! addressing work has been done before the function is called, so the same
//! function serves every addressing mode of its mnemonic.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY,
//!   BIT, TSB, TRB)
//! - **branches**: Conditional branches plus BRA
//! - **shifts**: Shift and rotate (ASL, LSR, ROL, ROR)
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY, STZ
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, BRK, RTI, NOP and the undefined-opcode no-op
//! - **stack**: PHA, PLA, PHP, PLP, PHX, PLX, PHY, PLY
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::Operand;
use crate::cpu::{Status, CPU};
use crate::memory::MemoryBus;
use crate::opcodes::Mnemonic;

impl Mnemonic {
    /// Applies this mnemonic's semantics to `cpu` with the resolved operand.
    ///
    /// `opcode` is only used for diagnostics on undefined opcodes.
    pub(crate) fn execute<M: MemoryBus>(
        self,
        cpu: &mut CPU<M>,
        operand: Operand,
        opcode: u8,
    ) {
        match self {
            Mnemonic::ADC => alu::adc(cpu, operand),
            Mnemonic::SBC => alu::sbc(cpu, operand),
            Mnemonic::AND => alu::and(cpu, operand),
            Mnemonic::ORA => alu::ora(cpu, operand),
            Mnemonic::EOR => alu::eor(cpu, operand),
            Mnemonic::CMP => alu::cmp(cpu, operand),
            Mnemonic::CPX => alu::cpx(cpu, operand),
            Mnemonic::CPY => alu::cpy(cpu, operand),
            Mnemonic::BIT => alu::bit(cpu, operand),
            Mnemonic::TSB => alu::tsb(cpu, operand),
            Mnemonic::TRB => alu::trb(cpu, operand),

            Mnemonic::ASL => shifts::asl(cpu, operand),
            Mnemonic::LSR => shifts::lsr(cpu, operand),
            Mnemonic::ROL => shifts::rol(cpu, operand),
            Mnemonic::ROR => shifts::ror(cpu, operand),

            Mnemonic::LDA => load_store::lda(cpu, operand),
            Mnemonic::LDX => load_store::ldx(cpu, operand),
            Mnemonic::LDY => load_store::ldy(cpu, operand),
            Mnemonic::STA => load_store::sta(cpu, operand),
            Mnemonic::STX => load_store::stx(cpu, operand),
            Mnemonic::STY => load_store::sty(cpu, operand),
            Mnemonic::STZ => load_store::stz(cpu, operand),

            Mnemonic::INC => inc_dec::inc(cpu, operand),
            Mnemonic::DEC => inc_dec::dec(cpu, operand),
            Mnemonic::INX => inc_dec::inx(cpu),
            Mnemonic::INY => inc_dec::iny(cpu),
            Mnemonic::DEX => inc_dec::dex(cpu),
            Mnemonic::DEY => inc_dec::dey(cpu),

            Mnemonic::BCC => branches::bcc(cpu, operand),
            Mnemonic::BCS => branches::bcs(cpu, operand),
            Mnemonic::BNE => branches::bne(cpu, operand),
            Mnemonic::BEQ => branches::beq(cpu, operand),
            Mnemonic::BPL => branches::bpl(cpu, operand),
            Mnemonic::BMI => branches::bmi(cpu, operand),
            Mnemonic::BVC => branches::bvc(cpu, operand),
            Mnemonic::BVS => branches::bvs(cpu, operand),
            Mnemonic::BRA => branches::bra(cpu, operand),

            Mnemonic::JMP => control::jmp(cpu, operand),
            Mnemonic::JSR => control::jsr(cpu, operand),
            Mnemonic::RTS => control::rts(cpu),
            Mnemonic::BRK => control::brk(cpu),
            Mnemonic::RTI => control::rti(cpu),
            Mnemonic::NOP => {}

            Mnemonic::PHA => stack::pha(cpu),
            Mnemonic::PLA => stack::pla(cpu),
            Mnemonic::PHP => stack::php(cpu),
            Mnemonic::PLP => stack::plp(cpu),
            Mnemonic::PHX => stack::phx(cpu),
            Mnemonic::PLX => stack::plx(cpu),
            Mnemonic::PHY => stack::phy(cpu),
            Mnemonic::PLY => stack::ply(cpu),

            Mnemonic::CLC => flags::set(cpu, Status::CARRY, false),
            Mnemonic::SEC => flags::set(cpu, Status::CARRY, true),
            Mnemonic::CLI => flags::set(cpu, Status::IRQ_DISABLE, false),
            Mnemonic::SEI => flags::set(cpu, Status::IRQ_DISABLE, true),
            Mnemonic::CLD => flags::set(cpu, Status::DECIMAL, false),
            Mnemonic::SED => flags::set(cpu, Status::DECIMAL, true),
            Mnemonic::CLV => flags::set(cpu, Status::OVERFLOW, false),

            Mnemonic::TAX => transfer::tax(cpu),
            Mnemonic::TAY => transfer::tay(cpu),
            Mnemonic::TXA => transfer::txa(cpu),
            Mnemonic::TYA => transfer::tya(cpu),
            Mnemonic::TSX => transfer::tsx(cpu),
            Mnemonic::TXS => transfer::txs(cpu),

            Mnemonic::ILL => control::undefined(cpu, opcode),
        }
    }
}
