/*!
load_store.rs - Load / store opcode family handler.

Loads (LDA/LDX/LDY) set Z/N and pay the +1 page-cross penalty on their
indexed forms. Stores (STA/STX/STY) change no flags and never take the
discount: their indexed base cycle counts already include the fixed indexed
cost.
*/

use crate::bus::{Bus, BusFault};
use crate::cpu::addressing::{Operand, operand_value};
use crate::cpu::dispatch::add_page_cross_penalty;
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::state::CpuState;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a load/store mnemonic against its resolved operand.
/// Returns false if the mnemonic does not belong to this family.
pub(super) fn handle<B: Bus>(
    mnemonic: Mnemonic,
    state: &mut CpuState,
    bus: &mut B,
    operand: Operand,
    cycles: &mut u32,
) -> Result<bool, BusFault> {
    match mnemonic {
        Mnemonic::Lda => {
            let v = operand_value(state, bus, operand)?;
            lda(state, v);
            add_page_cross_penalty(cycles, operand.page_crossed());
        }
        Mnemonic::Ldx => {
            let v = operand_value(state, bus, operand)?;
            ldx(state, v);
            add_page_cross_penalty(cycles, operand.page_crossed());
        }
        Mnemonic::Ldy => {
            let v = operand_value(state, bus, operand)?;
            ldy(state, v);
            add_page_cross_penalty(cycles, operand.page_crossed());
        }
        Mnemonic::Sta => bus.write(operand.address(), state.a)?,
        Mnemonic::Stx => bus.write(operand.address(), state.x)?,
        Mnemonic::Sty => bus.write(operand.address(), state.y)?,
        _ => return Ok(false),
    }
    Ok(true)
}
