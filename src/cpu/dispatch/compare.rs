/*!
compare.rs - Compare opcode family handler (CMP/CPX/CPY).

Unsigned 9-bit subtraction without storing the result: C means no borrow
(register >= operand), N/Z come from the truncated difference. CMP's indexed
forms pay the +1 page-cross penalty; CPX/CPY have no indexed encodings.
*/

use crate::bus::{Bus, BusFault};
use crate::cpu::addressing::{Operand, operand_value};
use crate::cpu::dispatch::add_page_cross_penalty;
use crate::cpu::execute::compare;
use crate::cpu::state::CpuState;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a compare mnemonic. Returns false for other families.
pub(super) fn handle<B: Bus>(
    mnemonic: Mnemonic,
    state: &mut CpuState,
    bus: &mut B,
    operand: Operand,
    cycles: &mut u32,
) -> Result<bool, BusFault> {
    let reg = match mnemonic {
        Mnemonic::Cmp => state.a,
        Mnemonic::Cpx => state.x,
        Mnemonic::Cpy => state.y,
        _ => return Ok(false),
    };
    let v = operand_value(state, bus, operand)?;
    compare(state, reg, v);
    add_page_cross_penalty(cycles, operand.page_crossed());
    Ok(true)
}
