/*!
interrupt.rs - Interrupt request line, vector constants, and the
entry/reset sequences.

State machine
=============
Running -> (sampled NMI, or IRQ with the I flag clear) -> ServicingInterrupt
-> Running. Sampling happens only at instruction boundaries, in the
dispatcher, before the next opcode fetch.

Entry sequence (7 cycles): push PC high, PC low, then status with BREAK
clear (hardware interrupts never set BREAK on the pushed copy); set
IRQ_DISABLE; load PC from the vector. BRK shares the same stack choreography
but pushes with BREAK set and lives in the control-flow family.

RESET is deliberately simpler: it forces I, forces the UNUSED bit, sets
SP to $FD, and loads PC from $FFFC/$FFFD. It touches neither memory nor the
stack, leaves A/X/Y alone, and never rewinds the cycle counter.
*/

use log::trace;

use crate::bus::{Bus, BusFault};
use crate::cpu::state::{CpuState, IRQ_DISABLE, UNUSED};

pub(crate) const NMI_VECTOR: u16 = 0xFFFA;
pub(crate) const RESET_VECTOR: u16 = 0xFFFC;
pub(crate) const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycle cost of one hardware interrupt entry.
pub(crate) const INTERRUPT_CYCLES: u32 = 7;

/// The external interrupt request line, sampled once per instruction
/// boundary. Tri-state: at most one request is pending at a time, and NMI
/// always wins the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum InterruptLine {
    #[default]
    None,
    Irq,
    Nmi,
}

impl InterruptLine {
    /// Assert IRQ. Does not displace a pending NMI.
    pub(crate) fn raise_irq(&mut self) {
        if *self == InterruptLine::None {
            *self = InterruptLine::Irq;
        }
    }

    /// Assert NMI. Always takes the slot (NMI priority).
    pub(crate) fn raise_nmi(&mut self) {
        *self = InterruptLine::Nmi;
    }

    /// Sample at an instruction boundary: returns the vector to service, if
    /// any. NMI is taken regardless of the I flag and is consumed (edge
    /// semantics). IRQ is taken only with I clear; while masked it stays
    /// pending (level semantics).
    pub(crate) fn sample(&mut self, state: &CpuState) -> Option<u16> {
        match *self {
            InterruptLine::Nmi => {
                *self = InterruptLine::None;
                Some(NMI_VECTOR)
            }
            InterruptLine::Irq if !state.is_flag_set(IRQ_DISABLE) => {
                *self = InterruptLine::None;
                Some(IRQ_VECTOR)
            }
            _ => None,
        }
    }
}

/// Hardware interrupt entry: push PC and status (BREAK clear), mask IRQs,
/// vector. The caller accounts the 7 cycles.
pub(crate) fn service<B: Bus>(
    state: &mut CpuState,
    bus: &mut B,
    vector: u16,
) -> Result<(), BusFault> {
    let pc = state.pc;
    state.push_u16(bus, pc)?;
    let status = state.status_for_push(false);
    state.push_u8(bus, status)?;
    state.set_flag_bit(IRQ_DISABLE);
    state.pc = bus.read_word(vector)?;
    trace!("interrupt: vector ${vector:04X} -> ${:04X}", state.pc);
    Ok(())
}

/// RESET: architectural defaults only, no stack or memory traffic.
pub(crate) fn reset<B: Bus>(state: &mut CpuState, bus: &mut B) -> Result<(), BusFault> {
    state.set_flag_bit(IRQ_DISABLE);
    state.set_flag_bit(UNUSED);
    state.sp = 0xFD;
    state.pc = bus.read_word(RESET_VECTOR)?;
    trace!("reset: pc <- ${:04X}", state.pc);
    Ok(())
}
