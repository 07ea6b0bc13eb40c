//! Tests for the load and store instructions across their addressing modes.

use lib65c02::{FlatMemory, MemoryBus, Status, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Loads ==========

#[test]
fn test_lda_immediate_sets_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xA9, 0x00]); // LDA #$00

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_set(Status::ZERO));

    cpu.memory_mut().load(0x8002, &[0xA9, 0x80]);
    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_set(Status::NEGATIVE));
    assert!(!cpu.flag_set(Status::ZERO));
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xB6, 0x40]); // LDX $40,Y
    cpu.memory_mut().write(0x0043, 0x7E);
    cpu.set_y(0x03);

    cpu.step();

    assert_eq!(cpu.x(), 0x7E);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xBC, 0x00, 0x30]); // LDY $3000,X
    cpu.memory_mut().write(0x3002, 0x21);
    cpu.set_x(0x02);

    cpu.step();

    assert_eq!(cpu.y(), 0x21);
}

#[test]
fn test_lda_indirect_y() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xB1, 0x40]); // LDA ($40),Y
    cpu.memory_mut().write(0x0040, 0x00);
    cpu.memory_mut().write(0x0041, 0x20);
    cpu.memory_mut().write(0x2003, 0x99);
    cpu.set_y(0x03);

    cpu.step();

    assert_eq!(cpu.a(), 0x99);
}

// ========== Stores ==========

#[test]
fn test_sta_absolute() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x8D, 0x00, 0x40]); // STA $4000
    cpu.set_a(0x5C);

    cpu.step();

    assert_eq!(cpu.peek(0x4000), 0x5C);
}

#[test]
fn test_stores_do_not_touch_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x85, 0x10]); // STA $10
    cpu.set_a(0x00); // would set Z if stores updated flags

    cpu.step();

    assert_eq!(cpu.status_byte(), 0x00);
}

#[test]
fn test_stx_sty_zero_page() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x86, 0x10, 0x84, 0x11]); // STX $10; STY $11
    cpu.set_x(0xAA);
    cpu.set_y(0xBB);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.peek(0x0010), 0xAA);
    assert_eq!(cpu.peek(0x0011), 0xBB);
}

#[test]
fn test_sta_zero_page_indirect() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x92, 0x40]); // STA ($40)
    cpu.memory_mut().write(0x0040, 0x34);
    cpu.memory_mut().write(0x0041, 0x12);
    cpu.set_a(0x77);

    cpu.step();

    assert_eq!(cpu.peek(0x1234), 0x77);
}

// ========== STZ (65C02) ==========

#[test]
fn test_stz_clears_byte() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x64, 0x10]); // STZ $10
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.set_a(0x55);

    cpu.step();

    assert_eq!(cpu.peek(0x0010), 0x00);
    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cpu.status_byte(), 0x00);
}

#[test]
fn test_stz_absolute_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x9E, 0x00, 0x20]); // STZ $2000,X
    cpu.memory_mut().write(0x2004, 0xAB);
    cpu.set_x(0x04);

    cpu.step();

    assert_eq!(cpu.peek(0x2004), 0x00);
}
