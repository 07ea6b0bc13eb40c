//! Tests for CPU initialization and reset behavior.

use lib65c02::{FlatMemory, MemoryBus, CPU};

#[test]
fn test_reset_loads_pc_from_reset_vector() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_reset_register_state() {
    let cpu = CPU::new(FlatMemory::new());

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.status_byte(), 0x00);
    assert_eq!(cpu.stack_overflows(), 0);
    assert_eq!(cpu.stack_underflows(), 0);
}

#[test]
fn test_reset_preserves_memory() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0x2000, 0x55);

    let mut cpu = CPU::new(memory);
    cpu.set_a(0x99);
    cpu.set_pc(0x4000);
    cpu.reset();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.peek(0x2000), 0x55);
}

#[test]
fn test_construction_from_full_image() {
    let mut image = [0u8; 65536];
    image[0xFFFC] = 0x00;
    image[0xFFFD] = 0xC0;
    image[0xC000] = 0xEA; // NOP

    let mut cpu = CPU::new(FlatMemory::from(image));
    assert_eq!(cpu.pc(), 0xC000);

    cpu.step();
    assert_eq!(cpu.pc(), 0xC001);
}
