/*!
logical.rs - Logical / bit-test opcode family handler (AND/ORA/EOR/BIT).

AND/ORA/EOR are read-type accesses and pay the +1 page-cross penalty on
their indexed forms. BIT only exists in zero-page and absolute encodings, so
no penalty can apply.
*/

use crate::bus::{Bus, BusFault};
use crate::cpu::addressing::{Operand, operand_value};
use crate::cpu::dispatch::add_page_cross_penalty;
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::state::CpuState;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a logical mnemonic. Returns false if the mnemonic
/// does not belong to this family.
pub(super) fn handle<B: Bus>(
    mnemonic: Mnemonic,
    state: &mut CpuState,
    bus: &mut B,
    operand: Operand,
    cycles: &mut u32,
) -> Result<bool, BusFault> {
    match mnemonic {
        Mnemonic::And => {
            let v = operand_value(state, bus, operand)?;
            and(state, v);
            add_page_cross_penalty(cycles, operand.page_crossed());
        }
        Mnemonic::Ora => {
            let v = operand_value(state, bus, operand)?;
            ora(state, v);
            add_page_cross_penalty(cycles, operand.page_crossed());
        }
        Mnemonic::Eor => {
            let v = operand_value(state, bus, operand)?;
            eor(state, v);
            add_page_cross_penalty(cycles, operand.page_crossed());
        }
        Mnemonic::Bit => {
            let v = operand_value(state, bus, operand)?;
            bit(state, v);
        }
        _ => return Ok(false),
    }
    Ok(true)
}
