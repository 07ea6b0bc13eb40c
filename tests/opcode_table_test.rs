//! Whole-table conformance tests: every one of the 256 opcode values must
//! agree between decode-length, disassembly, and execution on how many bytes
//! it consumes, and undefined opcodes must behave identically in all three.

use lib65c02::{FlatMemory, MemoryBus, Mnemonic, CPU, OPCODE_TABLE};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Mnemonics that load PC directly, making the PC-delta measurement
/// meaningless. Branches stay in: with a zero offset a taken branch lands
/// exactly where a not-taken one does.
fn rewrites_pc(mnemonic: Mnemonic) -> bool {
    matches!(
        mnemonic,
        Mnemonic::JMP | Mnemonic::JSR | Mnemonic::RTS | Mnemonic::RTI | Mnemonic::BRK
    )
}

#[test]
fn test_decode_length_matches_execution_for_all_opcodes() {
    for opcode in 0..=255u8 {
        if rewrites_pc(OPCODE_TABLE[opcode as usize].mnemonic) {
            continue;
        }

        let mut cpu = setup_cpu();
        // Zero operand bytes keep branch targets at the fall-through address
        cpu.memory_mut().load(0x8000, &[opcode, 0x00, 0x00]);

        let expected = cpu.decode_length(0x8000) as u16;
        cpu.step();

        assert_eq!(
            cpu.pc().wrapping_sub(0x8000),
            expected,
            "opcode {opcode:#04X} consumed a different byte count than decode_length"
        );
    }
}

#[test]
fn test_decode_length_matches_disassembly_for_all_opcodes() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xEA; 3]);

    for opcode in 0..=255u8 {
        cpu.poke(0x8000, opcode);
        let (disasm_len, _) = cpu.disassemble_at(0x8000);
        assert_eq!(
            disasm_len,
            cpu.decode_length(0x8000),
            "opcode {opcode:#04X}"
        );
    }
}

#[test]
fn test_undefined_opcode_is_single_byte_noop() {
    // 0x02 and 0xFF are undefined on the 65C02
    for opcode in [0x02u8, 0x03, 0xFF] {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, 0x12, 0x34]);
        cpu.set_a(0x42);
        let status_before = cpu.status_byte();

        cpu.step();

        assert_eq!(cpu.pc(), 0x8001, "opcode {opcode:#04X}");
        assert_eq!(cpu.a(), 0x42);
        assert_eq!(cpu.status_byte(), status_before);
        assert_eq!(cpu.sp(), 0xFF);
    }
}

#[test]
fn test_undefined_opcode_disassembly_is_distinct() {
    let mut cpu = setup_cpu();
    cpu.poke(0x8000, 0xFF);

    let (length, text) = cpu.disassemble_at(0x8000);

    assert_eq!(length, 1);
    assert_eq!(text, "???");

    // No defined mnemonic renders the marker
    for entry in OPCODE_TABLE.iter() {
        if entry.mnemonic != Mnemonic::ILL {
            assert_ne!(entry.mnemonic.name(), "???");
        }
    }
}

#[test]
fn test_defined_opcodes_disassemble_with_their_mnemonic() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8001, &[0x00, 0x00]);

    for (value, entry) in OPCODE_TABLE.iter().enumerate() {
        if entry.mnemonic == Mnemonic::ILL {
            continue;
        }
        cpu.poke(0x8000, value as u8);
        let (_, text) = cpu.disassemble_at(0x8000);
        assert!(
            text.starts_with(entry.mnemonic.name()),
            "opcode {value:#04X}: {text:?} does not start with {}",
            entry.mnemonic.name()
        );
    }
}
