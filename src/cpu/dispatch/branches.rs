/*!
branches.rs - Relative branch opcode handler
(BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ).

The resolver has already fetched the displacement (the hardware fetches it
whether or not the branch is taken) and produced the target address plus a
page-cross report relative to the instruction following the branch. This
handler evaluates the condition and, when taken, commits the target and adds
+1 cycle, plus one more for the page cross.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::state::{CARRY, CpuState, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::table::Mnemonic;

/// Attempt to execute a branch mnemonic. Returns false for other families.
/// Needs no bus: the operand already carries the resolved target.
pub(super) fn handle(
    mnemonic: Mnemonic,
    state: &mut CpuState,
    operand: Operand,
    cycles: &mut u32,
) -> bool {
    let take = match mnemonic {
        Mnemonic::Bpl => !state.is_flag_set(NEGATIVE),
        Mnemonic::Bmi => state.is_flag_set(NEGATIVE),
        Mnemonic::Bvc => !state.is_flag_set(OVERFLOW),
        Mnemonic::Bvs => state.is_flag_set(OVERFLOW),
        Mnemonic::Bcc => !state.is_flag_set(CARRY),
        Mnemonic::Bcs => state.is_flag_set(CARRY),
        Mnemonic::Bne => !state.is_flag_set(ZERO),
        Mnemonic::Beq => state.is_flag_set(ZERO),
        _ => return false,
    };
    if take {
        state.pc = operand.address();
        *cycles += 1;
        if operand.page_crossed() {
            *cycles += 1;
        }
    }
    true
}
