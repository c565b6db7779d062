/*!
misc.rs - Transfers / stack / flag / register inc-dec opcode family handler.

Small fixed-cycle instructions:

Transfers:  TAX TAY TXA TYA TSX TXS
Stack:      PHA PLA PHP PLP
Flags:      CLC SEC CLI SEI CLD SED CLV
Registers:  INX INY DEX DEY

None of these consume operand bytes, pay penalties, or touch memory outside
the page-one stack.
*/

use crate::bus::{Bus, BusFault};
use crate::cpu::execute::{
    dex, dey, inx, iny, pha, php, pla, plp, tax, tay, tsx, txa, txs, tya,
};
use crate::cpu::state::{CARRY, CpuState, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::cpu::table::Mnemonic;

/// Attempt to execute a transfer/stack/flag/register mnemonic. Returns
/// false for other families.
pub(super) fn handle<B: Bus>(
    mnemonic: Mnemonic,
    state: &mut CpuState,
    bus: &mut B,
) -> Result<bool, BusFault> {
    match mnemonic {
        // Transfers
        Mnemonic::Tax => tax(state),
        Mnemonic::Tay => tay(state),
        Mnemonic::Txa => txa(state),
        Mnemonic::Tya => tya(state),
        Mnemonic::Tsx => tsx(state),
        Mnemonic::Txs => txs(state),

        // Stack
        Mnemonic::Pha => pha(state, bus)?,
        Mnemonic::Pla => pla(state, bus)?,
        Mnemonic::Php => php(state, bus)?,
        Mnemonic::Plp => plp(state, bus)?,

        // Flags
        Mnemonic::Clc => state.assign_flag(CARRY, false),
        Mnemonic::Sec => state.assign_flag(CARRY, true),
        Mnemonic::Cli => state.assign_flag(IRQ_DISABLE, false),
        Mnemonic::Sei => state.assign_flag(IRQ_DISABLE, true),
        Mnemonic::Cld => state.assign_flag(DECIMAL, false),
        Mnemonic::Sed => state.assign_flag(DECIMAL, true),
        Mnemonic::Clv => state.assign_flag(OVERFLOW, false),

        // Register increment / decrement
        Mnemonic::Inx => inx(state),
        Mnemonic::Iny => iny(state),
        Mnemonic::Dex => dex(state),
        Mnemonic::Dey => dey(state),

        _ => return Ok(false),
    }
    Ok(true)
}
