/*!
core.rs - `Cpu`, the public façade over the 6502 core.

Owns the architectural state, the construction-time configuration, and the
interrupt request line. The memory bus is *not* owned: every operation that
touches memory borrows a `&mut impl Bus` for exactly one call, so a host can
interleave CPU steps with its own device logic, and any number of cores can
be constructed independently.

A `step` executes exactly one instruction (or one interrupt entry) to
completion and returns the cycles consumed; there are no internal suspension
points. State is fully materialized between calls, so a caller can simply
stop stepping and resume later.
*/

use crate::bus::{Bus, BusFault};
use crate::cpu::config::{ConfigError, CpuConfig};
use crate::cpu::dispatch;
use crate::cpu::interrupt::{self, InterruptLine};
use crate::cpu::state::{CpuState, UNUSED};

/// The MOS 6502 instruction-execution core.
#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
    config: CpuConfig,
    line: InterruptLine,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a core with NMOS defaults (decimal mode available).
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
            config: CpuConfig::default(),
            line: InterruptLine::default(),
        }
    }

    /// Construct a core with an explicit configuration. Misconfiguration is
    /// reported here, never at instruction-execution time.
    pub fn with_config(config: CpuConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CpuState::new(),
            config,
            line: InterruptLine::default(),
        })
    }

    /// RESET: force I, SP = $FD, and load PC from the reset vector at
    /// $FFFC/$FFFD. Does not touch memory or the stack, and never rewinds
    /// the cycle counter.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) -> Result<(), BusFault> {
        interrupt::reset(&mut self.state, bus)
    }

    /// Execute exactly one instruction (or one pending interrupt entry) and
    /// return the cycles it consumed.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, BusFault> {
        dispatch::step(&mut self.state, &self.config, &mut self.line, bus)
    }

    /// Convenience: step up to `max_instructions` times, returning the total
    /// cycles consumed.
    pub fn run<B: Bus>(&mut self, bus: &mut B, max_instructions: usize) -> Result<u64, BusFault> {
        let mut total = 0u64;
        for _ in 0..max_instructions {
            total += u64::from(self.step(bus)?);
        }
        Ok(total)
    }

    /// Assert the maskable interrupt line, sampled at the next instruction
    /// boundary. Stays pending while the I flag masks it.
    pub fn request_irq(&mut self) {
        self.line.raise_irq();
    }

    /// Assert the non-maskable interrupt line, sampled at the next
    /// instruction boundary. Takes priority over a pending IRQ.
    pub fn request_nmi(&mut self) {
        self.line.raise_nmi();
    }

    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------

    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    /// Status register; the UNUSED bit always reads back as set.
    pub fn status(&self) -> u8 {
        self.state.status | UNUSED
    }

    /// Elapsed machine cycles since construction.
    pub fn cycles(&self) -> u64 {
        self.state.cycles
    }

    /// Test a status flag by mask (see the flag constants).
    pub fn flag(&self, mask: u8) -> bool {
        (self.status() & mask) != 0
    }

    // ---------------------------------------------------------------------
    // Snapshot access
    // ---------------------------------------------------------------------

    /// The raw register snapshot (for persistence or inspection).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Mutable snapshot access, for hosts restoring persisted state or test
    /// harnesses arranging a precise starting point.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }
}
