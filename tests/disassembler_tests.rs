//! Integration tests for the disassembler, focused on the properties the
//! executor depends on: no side effects, reads confined to the declared
//! instruction bytes, and stable output.

use lib65c02::{FlatMemory, MemoryBus, SerialMemory, TracedMemory, CPU};

#[test]
fn test_disassembly_performs_no_writes() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &[0x8D, 0x02, 0x03]); // STA $0302
    let mut cpu = CPU::new(TracedMemory::new(memory));

    cpu.memory_mut().take_events(); // discard reset-time reads
    cpu.disassemble_at(0x8000);

    let events = cpu.memory_mut().take_events();
    assert!(events.iter().all(|e| e.is_read));
}

#[test]
fn test_disassembly_reads_only_declared_bytes() {
    let mut inner = FlatMemory::new();
    inner.write(0xFFFC, 0x00);
    inner.write(0xFFFD, 0x80);
    inner.load(0x8000, &[0xBD, 0x34, 0x12]); // LDA $1234,X
    let mut cpu = CPU::new(TracedMemory::new(inner));

    cpu.memory_mut().take_events();
    let (length, _) = cpu.disassemble_at(0x8000);

    let events = cpu.memory_mut().take_events();
    assert_eq!(length, 3);
    for event in &events {
        assert!(event.is_read);
        assert!(
            (0x8000..0x8000 + length as u16).contains(&event.address),
            "disassembly read outside the instruction at {:#06X}",
            event.address
        );
    }
}

#[test]
fn test_disassembly_does_not_drain_serial_fifo() {
    let mut memory = SerialMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.push_received(0x41);
    // LDA with its operand byte sitting on the RX port address: put the
    // instruction right before the port so the operand *is* the port
    memory.load(0x0302, &[0xAD, 0x03, 0x03]); // LDA $0303 stored at the TX port area
    let mut cpu = CPU::new(memory);

    // Disassembling must peek, leaving the FIFO untouched
    let (_, text) = cpu.disassemble_at(0x0302);
    assert_eq!(text, "LDA $0303");
    assert_eq!(cpu.memory_mut().read(0x0303), 0x41);
}

#[test]
fn test_disassembly_is_stable() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &[0x7C, 0x00, 0x90]); // JMP ($9000,X)
    let cpu = CPU::new(memory);

    let first = cpu.disassemble_at(0x8000);
    let second = cpu.disassemble_at(0x8000);
    assert_eq!(first, second);
    assert_eq!(first.1, "JMP ($9000,X)");
}

#[test]
fn test_listing_walk() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(
        0x8000,
        &[
            0xA9, 0x00, // LDA #$00
            0x8D, 0x02, 0x03, // STA $0302
            0xD0, 0xF9, // BNE *-7
            0x60, // RTS
        ],
    );
    let cpu = CPU::new(memory);

    let mut addr = 0x8000u16;
    let mut listing = Vec::new();
    while addr < 0x8008 {
        let (length, text) = cpu.disassemble_at(addr);
        listing.push(text);
        addr = addr.wrapping_add(length as u16);
    }

    assert_eq!(
        listing,
        vec!["LDA #$00", "STA $0302", "BNE *-7", "RTS"]
    );
}
