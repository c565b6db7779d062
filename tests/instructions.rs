//! Instruction-level behavioral properties, driven through the public
//! `Cpu` surface against a flat test bus.

mod common;

use common::{TestBus, setup};
use sixty502::{
    Access, Bus, BusFault, CARRY, Cpu, Mnemonic, NEGATIVE, OPCODE_TABLE, OVERFLOW, ZERO,
};

/// Control-flow mnemonics rewrite PC outright; everything else must advance
/// it by exactly the documented encoding length.
fn rewrites_pc(mnemonic: Mnemonic) -> bool {
    matches!(
        mnemonic,
        Mnemonic::Jmp
            | Mnemonic::Jsr
            | Mnemonic::Rts
            | Mnemonic::Rti
            | Mnemonic::Brk
            | Mnemonic::Bcc
            | Mnemonic::Bcs
            | Mnemonic::Beq
            | Mnemonic::Bmi
            | Mnemonic::Bne
            | Mnemonic::Bpl
            | Mnemonic::Bvc
            | Mnemonic::Bvs
    )
}

#[test]
fn pc_advances_by_documented_length_for_every_opcode() {
    for opcode in 0u16..=0xFF {
        let entry = &OPCODE_TABLE[usize::from(opcode)];
        if rewrites_pc(entry.mnemonic) {
            continue;
        }
        // Operand byte $10 keeps memory traffic in harmless zero-page /
        // low-memory locations for every mode.
        let (mut cpu, mut bus) = setup(0x4000, &[opcode as u8, 0x10, 0x00]);
        cpu.step(&mut bus).unwrap();
        let expected = 0x4000 + 1 + entry.mode.operand_len();
        assert_eq!(
            cpu.pc(),
            expected,
            "opcode ${opcode:02X} ({:?}) advanced PC wrongly",
            entry.mnemonic
        );
    }
}

/// Reference ADC result for flag cross-checking.
fn adc_reference(a: u8, b: u8, carry_in: bool) -> (u8, bool, bool) {
    let sum = u16::from(a) + u16::from(b) + u16::from(carry_in);
    let result = sum as u8;
    let carry = sum > 0xFF;
    let overflow = (!(a ^ b) & (a ^ result) & 0x80) != 0;
    (result, carry, overflow)
}

#[test]
fn adc_sbc_round_trip_over_sampled_grid() {
    // Sampled 256x256 sweep: CLC; LDA #a; ADC #b; SEC; SBC #b must restore
    // a, and the ADC step's flags must match the reference truth table.
    for a in (0u16..=0xFF).step_by(7) {
        for b in (0u16..=0xFF).step_by(13) {
            let (a, b) = (a as u8, b as u8);
            let (mut cpu, mut bus) = setup(
                0x4000,
                &[0x18, 0xA9, a, 0x69, b, 0x38, 0xE9, b],
            );
            cpu.step(&mut bus).unwrap(); // CLC
            cpu.step(&mut bus).unwrap(); // LDA #a
            cpu.step(&mut bus).unwrap(); // ADC #b
            let (sum, carry, overflow) = adc_reference(a, b, false);
            assert_eq!(cpu.a(), sum, "ADC result for {a:#04X}+{b:#04X}");
            assert_eq!(cpu.flag(CARRY), carry, "ADC carry for {a:#04X}+{b:#04X}");
            assert_eq!(cpu.flag(OVERFLOW), overflow, "ADC overflow for {a:#04X}+{b:#04X}");
            assert_eq!(cpu.flag(ZERO), sum == 0);
            assert_eq!(cpu.flag(NEGATIVE), sum & 0x80 != 0);

            cpu.step(&mut bus).unwrap(); // SEC
            cpu.step(&mut bus).unwrap(); // SBC #b
            assert_eq!(cpu.a(), a, "round trip for {a:#04X}+{b:#04X}");
        }
    }
}

#[test]
fn jmp_indirect_page_wrap_bug() {
    // Opcode $6C with pointer $30FF reads its high byte from $3000.
    let (mut cpu, mut bus) = setup(0x4000, &[0x6C, 0xFF, 0x30]);
    bus.poke(0x30FF, 0x00);
    bus.poke(0x3000, 0x40);
    bus.poke(0x3100, 0xEE); // the address a bug-free fetch would use
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x4000);
}

#[test]
fn jsr_rts_pair_is_stack_neutral() {
    // JSR $4010; ...; at $4010: RTS.
    let (mut cpu, mut bus) = setup(0x4000, &[0x20, 0x10, 0x40]);
    bus.poke(0x4010, 0x60);
    let sp_before = cpu.sp();
    cpu.step(&mut bus).unwrap(); // JSR
    cpu.step(&mut bus).unwrap(); // RTS
    assert_eq!(cpu.pc(), 0x4003, "RTS returns to the byte after the JSR");
    assert_eq!(cpu.sp(), sp_before, "net zero pushes/pulls");
}

#[test]
fn nmi_beats_simultaneous_irq() {
    // CLI first so the IRQ would be eligible too, then assert both lines.
    let (mut cpu, mut bus) = setup(0x4000, &[0x58, 0xEA]);
    bus.poke(0xFFFA, 0x00);
    bus.poke(0xFFFB, 0x90); // NMI handler
    bus.poke(0xFFFE, 0x00);
    bus.poke(0xFFFF, 0x91); // IRQ handler
    cpu.step(&mut bus).unwrap(); // CLI
    cpu.request_irq();
    cpu.request_nmi();
    assert_eq!(cpu.step(&mut bus).unwrap(), 7);
    assert_eq!(cpu.pc(), 0x9000, "NMI vector wins");
}

#[test]
fn lda_immediate_documented_example() {
    // Memory at $0000 = {A9 05}; after one step: A=5, Z=0, N=0, PC=$0002,
    // 2 cycles.
    let (mut cpu, mut bus) = setup(0x0000, &[0xA9, 0x05]);
    assert_eq!(cpu.step(&mut bus).unwrap(), 2);
    assert_eq!(cpu.a(), 5);
    assert!(!cpu.flag(ZERO));
    assert!(!cpu.flag(NEGATIVE));
    assert_eq!(cpu.pc(), 0x0002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn adc_same_sign_operands_set_overflow() {
    // A=$50 + $50 with carry clear: $A0, V set, C clear.
    let (mut cpu, mut bus) = setup(0x4000, &[0xA9, 0x50, 0x69, 0x50]);
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag(OVERFLOW));
    assert!(!cpu.flag(CARRY));
}

#[test]
fn taken_beq_crossing_into_page_one_costs_four_cycles() {
    // LDA #$00 sets Z; the BEQ operand ends at $00FE, so the following
    // instruction sits at $00FF and the +1 target $0100 crosses the page.
    let (mut cpu, mut bus) = setup(0x00FB, &[0xA9, 0x00, 0xF0, 0x01]);
    bus.poke(0x0100, 0xEA);
    cpu.step(&mut bus).unwrap(); // LDA
    assert_eq!(cpu.step(&mut bus).unwrap(), 4); // base 2 + taken 1 + cross 1
    assert_eq!(cpu.pc(), 0x0100);
}

/// Bus decorator that refuses all traffic at or above a cutoff address,
/// modeling a collaborator that detects out-of-range access.
struct RangedBus {
    inner: TestBus,
    limit: u16,
}

impl Bus for RangedBus {
    fn read(&mut self, addr: u16) -> Result<u8, BusFault> {
        if addr >= self.limit && addr < 0xFFFC {
            return Err(BusFault { addr, access: Access::Read });
        }
        self.inner.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusFault> {
        if addr >= self.limit {
            return Err(BusFault { addr, access: Access::Write });
        }
        self.inner.write(addr, value)
    }
}

#[test]
fn bus_fault_surfaces_from_step() {
    let mut inner = TestBus::new();
    inner.load(0x0200, &[0xAD, 0x00, 0x30]); // LDA $3000
    inner.poke(0xFFFC, 0x00);
    inner.poke(0xFFFD, 0x02);
    let mut bus = RangedBus { inner, limit: 0x1000 };
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus).unwrap();
    let err = cpu.step(&mut bus).unwrap_err();
    assert_eq!(err, BusFault { addr: 0x3000, access: Access::Read });
}

#[test]
fn illegal_opcodes_are_total_across_the_space() {
    // Every undocumented opcode must execute as a 1-byte, 1-cycle no-op.
    for opcode in 0u16..=0xFF {
        let entry = &OPCODE_TABLE[usize::from(opcode)];
        if entry.mnemonic != Mnemonic::Ill {
            continue;
        }
        let (mut cpu, mut bus) = setup(0x4000, &[opcode as u8, 0xEA]);
        assert_eq!(cpu.step(&mut bus).unwrap(), 1, "opcode ${opcode:02X}");
        assert_eq!(cpu.pc(), 0x4001, "opcode ${opcode:02X}");
    }
}
