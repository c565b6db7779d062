/*!
cpu - The 6502 instruction-execution core.

Module layout:

```text
    state.rs        - Architectural registers, flags, cycle counter.
    config.rs       - Construction-time configuration (variant, decimal).
    addressing.rs   - Addressing modes and operand resolution.
    execute.rs      - Instruction semantic helpers (ALU, flags, stack).
    table.rs        - The 256-entry opcode decode table.
    interrupt.rs    - Interrupt request line, vectors, entry/reset.
    dispatch/       - Per-instruction orchestrator + opcode family handlers.
    core.rs         - The public `Cpu` façade.
```

The public surface is the `Cpu` façade plus the decode-table metadata
(useful to disassemblers and test drivers); everything else is an internal
implementation detail of the core.
*/

pub mod addressing;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod execute;
pub mod interrupt;
pub mod state;
pub mod table;

pub use crate::cpu::addressing::AddrMode;
pub use crate::cpu::config::{ConfigError, CpuConfig, Variant};
pub use crate::cpu::core::Cpu;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{Mnemonic, OPCODE_TABLE, OpcodeEntry};
