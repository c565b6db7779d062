/*!
dispatch - Orchestrator for a single 6502 instruction step.

State machine
=============
Fetch -> Decode -> AddressResolve -> Execute -> Retire, one instruction per
call, never batched:

1. Sample the interrupt request line (boundary only). A serviced interrupt
   consumes the step: 7 cycles, no opcode fetch.
2. Fetch the opcode byte at PC and advance PC by one.
3. Decode via a direct index into the 256-entry opcode table.
4. Resolve the addressing mode (consumes the operand bytes; a no-op for
   implied/accumulator modes).
5. Execute through the family-handler chain. Handlers may add the +1
   page-cross penalty; the branch handler adds +1 taken / +1 cross.
6. Retire: add the final count to the cycle counter and return it.

Undocumented opcodes decode to the `Ill` fallback (a 1-byte, 1-cycle no-op
logged at trace level), so the dispatcher is total over all 256 opcode
values.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use log::trace;

use crate::bus::{Bus, BusFault};
use crate::cpu::addressing::resolve;
use crate::cpu::config::CpuConfig;
use crate::cpu::interrupt::{self, InterruptLine};
use crate::cpu::state::CpuState;
use crate::cpu::table::{Mnemonic, OPCODE_TABLE};

/// Execute one CPU step (including any pending interrupt) and return the
/// cycles consumed.
pub(crate) fn step<B: Bus>(
    state: &mut CpuState,
    config: &CpuConfig,
    line: &mut InterruptLine,
    bus: &mut B,
) -> Result<u32, BusFault> {
    // Interrupts are observed only between instructions.
    if let Some(vector) = line.sample(state) {
        interrupt::service(state, bus, vector)?;
        state.cycles += u64::from(interrupt::INTERRUPT_CYCLES);
        return Ok(interrupt::INTERRUPT_CYCLES);
    }

    // Fetch + decode.
    let opcode = state.fetch_u8(bus)?;
    let entry = &OPCODE_TABLE[usize::from(opcode)];

    // Resolve the operand, then run the family chain.
    let operand = resolve(state, bus, entry.mode)?;
    let mut cycles = u32::from(entry.cycles);
    let mnemonic = entry.mnemonic;

    let handled = load_store::handle(mnemonic, state, bus, operand, &mut cycles)?
        || logical::handle(mnemonic, state, bus, operand, &mut cycles)?
        || arithmetic::handle(mnemonic, state, bus, operand, config, &mut cycles)?
        || compare::handle(mnemonic, state, bus, operand, &mut cycles)?
        || branches::handle(mnemonic, state, operand, &mut cycles)
        || rmw::handle(mnemonic, state, bus, operand)?
        || control_flow::handle(mnemonic, state, bus, operand)?
        || misc::handle(mnemonic, state, bus)?;

    if !handled {
        // Only NOP and the undocumented fallback reach here: no state
        // change beyond the opcode fetch.
        debug_assert!(matches!(mnemonic, Mnemonic::Nop | Mnemonic::Ill));
        if mnemonic == Mnemonic::Ill {
            trace!("undocumented opcode ${opcode:02X} executed as no-op");
        }
    }

    // Retire.
    state.cycles += u64::from(cycles);
    Ok(cycles)
}

/// Shared +1 page-cross penalty rule for read-type indexed access.
#[inline]
pub(super) fn add_page_cross_penalty(cycles: &mut u32, crossed: bool) {
    if crossed {
        *cycles += 1;
    }
}
