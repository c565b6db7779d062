/*!
arithmetic.rs - ADC / SBC opcode family handler.

Both are read-type accesses and pay the +1 page-cross penalty on indexed
forms. Whether the decimal path is reachable at all is decided by the core
configuration; the D flag alone is not enough.
*/

use crate::bus::{Bus, BusFault};
use crate::cpu::addressing::{Operand, operand_value};
use crate::cpu::config::CpuConfig;
use crate::cpu::dispatch::add_page_cross_penalty;
use crate::cpu::execute::{adc, sbc};
use crate::cpu::state::CpuState;
use crate::cpu::table::Mnemonic;

/// Attempt to execute an ADC or SBC. Returns false for other mnemonics.
pub(super) fn handle<B: Bus>(
    mnemonic: Mnemonic,
    state: &mut CpuState,
    bus: &mut B,
    operand: Operand,
    config: &CpuConfig,
    cycles: &mut u32,
) -> Result<bool, BusFault> {
    match mnemonic {
        Mnemonic::Adc => {
            let v = operand_value(state, bus, operand)?;
            adc(state, v, config.decimal);
            add_page_cross_penalty(cycles, operand.page_crossed());
        }
        Mnemonic::Sbc => {
            let v = operand_value(state, bus, operand)?;
            sbc(state, v, config.decimal);
            add_page_cross_penalty(cycles, operand.page_crossed());
        }
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, OVERFLOW};
    use crate::test_utils::{FlatBus, bus_with_program};
    use crate::Cpu;

    fn setup(prg: &[u8]) -> (Cpu, FlatBus) {
        let mut bus = bus_with_program(0x8000, prg);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus).unwrap();
        (cpu, bus)
    }

    #[test]
    fn adc_immediate_basic() {
        // CLC; LDA #$01; ADC #$02
        let (mut cpu, mut bus) = setup(&[0x18, 0xA9, 0x01, 0x69, 0x02]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a(), 0x03);
        assert!(!cpu.flag(CARRY));
    }

    #[test]
    fn adc_same_sign_overflow() {
        // CLC; LDA #$50; ADC #$50 -> $A0, V set, C clear
        let (mut cpu, mut bus) = setup(&[0x18, 0xA9, 0x50, 0x69, 0x50]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a(), 0xA0);
        assert!(cpu.flag(OVERFLOW));
        assert!(!cpu.flag(CARRY));
    }

    #[test]
    fn sbc_immediate_basic() {
        // LDA #$05; SEC; SBC #$02 -> $03
        let (mut cpu, mut bus) = setup(&[0xA9, 0x05, 0x38, 0xE9, 0x02]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a(), 0x03);
        assert!(cpu.flag(CARRY));
    }

    #[test]
    fn adc_abs_x_page_cross_penalty() {
        // LDX #$01; ADC $12FF,X
        let (mut cpu, mut bus) = setup(&[0xA2, 0x01, 0x7D, 0xFF, 0x12]);
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.step(&mut bus).unwrap(), 5); // 4 + 1 page cross
    }

    #[test]
    fn decimal_adc_when_configured() {
        // SED; CLC; LDA #$09; ADC #$01 -> BCD $10
        let (mut cpu, mut bus) = setup(&[0xF8, 0x18, 0xA9, 0x09, 0x69, 0x01]);
        for _ in 0..4 {
            cpu.step(&mut bus).unwrap();
        }
        assert_eq!(cpu.a(), 0x10);
    }
}
