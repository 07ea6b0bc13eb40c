//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry (binary and BCD)
//! - SBC: Subtract with Carry (binary and BCD)
//! - AND, ORA, EOR: Logical operations
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//! - TSB, TRB: Test and set/reset bits (65C02)
//!
//! ## Decimal Mode
//!
//! With the Decimal flag set, ADC and SBC treat operands as packed BCD and
//! apply nibble-wise correction. The Overflow flag in decimal mode starts
//! from the operand sign comparison and is then cleared when the corrected
//! sum lands inside the signed-representable window; hardware behavior for
//! decimal-mode V is not well documented and this matches the window rule
//! rather than the binary same-sign rule applied to the final accumulator.

use crate::addressing::Operand;
use crate::cpu::{Status, CPU};
use crate::memory::MemoryBus;

/// ADC: adds operand plus Carry to the accumulator.
///
/// Binary mode sets Carry on a result above 0xFF. Decimal mode corrects each
/// nibble to stay within 0-9 and sets Carry on a result above 99.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let a = cpu.a;
    let carry_in = cpu.flag_set(Status::CARRY) as i32;

    // Provisional V from the operand signs; the window checks below clear it
    // when the result is actually representable.
    cpu.set_flag(Status::OVERFLOW, (a ^ value) & 0x80 == 0);

    let sum = if cpu.flag_set(Status::DECIMAL) {
        let mut tmp = (a & 0x0F) as i32 + (value & 0x0F) as i32 + carry_in;
        if tmp >= 10 {
            tmp = 0x10 | ((tmp + 6) & 0x0F);
        }
        tmp += (a & 0xF0) as i32 + (value & 0xF0) as i32;
        if tmp >= 0xA0 {
            cpu.set_flag(Status::CARRY, true);
            if cpu.flag_set(Status::OVERFLOW) && tmp >= 0x180 {
                cpu.set_flag(Status::OVERFLOW, false);
            }
            tmp += 0x60;
        } else {
            cpu.set_flag(Status::CARRY, false);
            if cpu.flag_set(Status::OVERFLOW) && tmp < 0x80 {
                cpu.set_flag(Status::OVERFLOW, false);
            }
        }
        tmp
    } else {
        let tmp = a as i32 + value as i32 + carry_in;
        if tmp >= 0x100 {
            cpu.set_flag(Status::CARRY, true);
            if cpu.flag_set(Status::OVERFLOW) && tmp >= 0x180 {
                cpu.set_flag(Status::OVERFLOW, false);
            }
        } else {
            cpu.set_flag(Status::CARRY, false);
            if cpu.flag_set(Status::OVERFLOW) && tmp < 0x80 {
                cpu.set_flag(Status::OVERFLOW, false);
            }
        }
        tmp
    };

    cpu.a = (sum & 0xFF) as u8;
    cpu.update_negative_zero(cpu.a);
}

/// SBC: subtracts operand and the borrow (inverted Carry) from the
/// accumulator. Carry out means no borrow occurred.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let a = cpu.a;
    let carry_in = cpu.flag_set(Status::CARRY) as i32;

    cpu.set_flag(Status::OVERFLOW, (a ^ value) & 0x80 != 0);

    let diff = if cpu.flag_set(Status::DECIMAL) {
        let mut tmp = 0x0F + (a & 0x0F) as i32 - (value & 0x0F) as i32 + carry_in;
        let mut w;
        if tmp < 0x10 {
            w = 0;
            tmp -= 6;
        } else {
            w = 0x10;
            tmp -= 0x10;
        }
        w += 0xF0 + (a & 0xF0) as i32 - (value & 0xF0) as i32;
        if w < 0x100 {
            cpu.set_flag(Status::CARRY, false);
            if cpu.flag_set(Status::OVERFLOW) && w < 0x80 {
                cpu.set_flag(Status::OVERFLOW, false);
            }
            w -= 0x60;
        } else {
            cpu.set_flag(Status::CARRY, true);
            if cpu.flag_set(Status::OVERFLOW) && w >= 0x180 {
                cpu.set_flag(Status::OVERFLOW, false);
            }
        }
        w + tmp
    } else {
        let w = 0xFF + a as i32 - value as i32 + carry_in;
        if w < 0x100 {
            cpu.set_flag(Status::CARRY, false);
            if cpu.flag_set(Status::OVERFLOW) && w < 0x80 {
                cpu.set_flag(Status::OVERFLOW, false);
            }
        } else {
            cpu.set_flag(Status::CARRY, true);
            if cpu.flag_set(Status::OVERFLOW) && w >= 0x180 {
                cpu.set_flag(Status::OVERFLOW, false);
            }
        }
        w
    };

    cpu.a = (diff & 0xFF) as u8;
    cpu.update_negative_zero(cpu.a);
}

/// ORA: `A = A | M`, N/Z from A.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a |= cpu.read_operand(operand);
    cpu.update_negative_zero(cpu.a);
}

/// AND: `A = A & M`, N/Z from A.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a &= cpu.read_operand(operand);
    cpu.update_negative_zero(cpu.a);
}

/// EOR: `A = A ^ M`, N/Z from A.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a ^= cpu.read_operand(operand);
    cpu.update_negative_zero(cpu.a);
}

/// Shared comparison for CMP/CPX/CPY against `register`.
///
/// Carry = register >= operand; N/Z from the wrapped 8-bit difference. The
/// register itself is not modified and no overflow is computed.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, register: u8) {
    let value = cpu.read_operand(operand);
    cpu.set_flag(Status::CARRY, register >= value);
    cpu.update_negative_zero(register.wrapping_sub(value));
}

/// CMP: compare the accumulator with the operand.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.a;
    compare(cpu, operand, register);
}

/// CPX: compare the X register with the operand.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.x;
    compare(cpu, operand, register);
}

/// CPY: compare the Y register with the operand.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.y;
    compare(cpu, operand, register);
}

/// BIT: Negative and Overflow from the operand's top two bits, Zero from
/// `A & M`. The accumulator is unchanged.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.set_flag(Status::NEGATIVE, value & 0x80 != 0);
    cpu.set_flag(Status::OVERFLOW, value & 0x40 != 0);
    cpu.set_flag(Status::ZERO, cpu.a & value == 0);
}

/// TSB: sets the accumulator's bits in the addressed byte. Zero is the only
/// flag affected, from `A & M` before the write.
pub(crate) fn tsb<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.set_flag(Status::ZERO, cpu.a & value == 0);
    cpu.write_operand(operand, value | cpu.a);
}

/// TRB: clears the accumulator's bits in the addressed byte. Zero is the
/// only flag affected, from `A & M` before the write.
pub(crate) fn trb<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.set_flag(Status::ZERO, cpu.a & value == 0);
    cpu.write_operand(operand, value & !cpu.a);
}
