/*!
rmw.rs - Read-modify-write / shift opcode family handler
(ASL/LSR/ROL/ROR/INC/DEC).

Shifts and rotates run against either the accumulator or a resolved memory
address; INC/DEC are memory-only. Memory forms read once, transform, and
write once. The indexed forms (abs,X) carry their fixed 7-cycle base cost;
no page-cross penalty ever applies in this family.
*/

use crate::bus::{Bus, BusFault};
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{asl, dec, inc, lsr, rol, ror};
use crate::cpu::state::CpuState;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a shift/rotate/inc/dec mnemonic. Returns false for
/// other families.
pub(super) fn handle<B: Bus>(
    mnemonic: Mnemonic,
    state: &mut CpuState,
    bus: &mut B,
    operand: Operand,
) -> Result<bool, BusFault> {
    let transform: fn(&mut CpuState, u8) -> u8 = match mnemonic {
        Mnemonic::Asl => asl,
        Mnemonic::Lsr => lsr,
        Mnemonic::Rol => rol,
        Mnemonic::Ror => ror,
        Mnemonic::Inc => inc,
        Mnemonic::Dec => dec,
        _ => return Ok(false),
    };
    match operand {
        Operand::Accumulator => {
            let result = transform(state, state.a);
            state.a = result;
        }
        Operand::Address { addr, .. } => {
            let old = bus.read(addr)?;
            let new = transform(state, old);
            bus.write(addr, new)?;
        }
        _ => unreachable!("read-modify-write operand is accumulator or memory"),
    }
    Ok(true)
}
