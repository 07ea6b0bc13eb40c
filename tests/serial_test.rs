//! Tests driving the serial FIFO ports from executed programs.

use lib65c02::{MemoryBus, SerialMemory, CPU};

fn setup_cpu() -> CPU<SerialMemory> {
    let mut memory = SerialMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_program_transmits_bytes() {
    let mut cpu = setup_cpu();

    // LDA #'H'; STA $0302; LDA #'i'; STA $0302
    cpu.memory_mut().load(
        0x8000,
        &[0xA9, b'H', 0x8D, 0x02, 0x03, 0xA9, b'i', 0x8D, 0x02, 0x03],
    );

    for _ in 0..4 {
        cpu.step();
    }

    assert_eq!(cpu.memory_mut().pop_transmitted(), Some(b'H'));
    assert_eq!(cpu.memory_mut().pop_transmitted(), Some(b'i'));
    assert_eq!(cpu.memory_mut().pop_transmitted(), None);
    // The transmit port address never shows the byte in RAM
    assert_eq!(cpu.peek(0x0302), 0x00);
}

#[test]
fn test_program_receives_bytes_in_order() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().push_received(0x11);
    cpu.memory_mut().push_received(0x22);

    // LDA $0303; STA $10; LDA $0303; STA $11; LDA $0303; STA $12
    cpu.memory_mut().load(
        0x8000,
        &[
            0xAD, 0x03, 0x03, 0x85, 0x10, //
            0xAD, 0x03, 0x03, 0x85, 0x11, //
            0xAD, 0x03, 0x03, 0x85, 0x12,
        ],
    );

    for _ in 0..6 {
        cpu.step();
    }

    assert_eq!(cpu.peek(0x0010), 0x11);
    assert_eq!(cpu.peek(0x0011), 0x22);
    // Drained FIFO reads the sentinel
    assert_eq!(cpu.peek(0x0012), 0x00);
}

#[test]
fn test_echo_program() {
    let mut cpu = setup_cpu();
    for byte in *b"ok" {
        cpu.memory_mut().push_received(byte);
    }

    // Echo loop: LDA $0303; STA $0302; JMP $8000
    cpu.memory_mut()
        .load(0x8000, &[0xAD, 0x03, 0x03, 0x8D, 0x02, 0x03, 0x4C, 0x00, 0x80]);

    for _ in 0..6 {
        cpu.step();
    }

    assert_eq!(cpu.memory_mut().pop_transmitted(), Some(b'o'));
    assert_eq!(cpu.memory_mut().pop_transmitted(), Some(b'k'));
}

#[test]
fn test_custom_port_addresses() {
    let mut memory = SerialMemory::with_ports(0xD000, 0xD001);
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &[0xA9, 0x5A, 0x8D, 0x00, 0xD0]); // LDA #$5A; STA $D000
    let mut cpu = CPU::new(memory);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.memory_mut().pop_transmitted(), Some(0x5A));
    // The default port addresses are plain RAM on this bus
    cpu.poke(0x0302, 0x77);
    assert_eq!(cpu.peek(0x0302), 0x77);
    assert_eq!(cpu.memory_mut().transmitted_len(), 0);
}
