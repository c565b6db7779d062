#![doc = r#"
sixty502 - a MOS 6502 instruction-execution core.

The crate emulates the 6502's register file, status flags, full
addressing-mode set, 256-entry opcode dispatch, and interrupt/stack
behavior (RESET, IRQ, NMI, BRK/RTI), with per-instruction cycle counts.
Memory is supplied by the host through the `Bus` trait; the core never owns
it.

```rust
use sixty502::{Bus, Cpu};

struct Ram([u8; 0x10000]);

impl Bus for Ram {
    fn read(&mut self, addr: u16) -> Result<u8, sixty502::BusFault> {
        Ok(self.0[usize::from(addr)])
    }
    fn write(&mut self, addr: u16, value: u8) -> Result<(), sixty502::BusFault> {
        self.0[usize::from(addr)] = value;
        Ok(())
    }
}

let mut ram = Ram([0; 0x10000]);
ram.0[0xFFFC] = 0x00; // reset vector -> $8000
ram.0[0xFFFD] = 0x80;
ram.0[0x8000] = 0xA9; // LDA #$05
ram.0[0x8001] = 0x05;

let mut cpu = Cpu::new();
cpu.reset(&mut ram).unwrap();
let cycles = cpu.step(&mut ram).unwrap();
assert_eq!(cycles, 2);
assert_eq!(cpu.a(), 0x05);
```
"#]

pub mod bus;
pub mod cpu;

// Re-export the working surface at the crate root.
pub use bus::{Access, Bus, BusFault};
pub use cpu::config::{ConfigError, CpuConfig, Variant};
pub use cpu::core::Cpu;
pub use cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use cpu::table::{Mnemonic, OPCODE_TABLE, OpcodeEntry};
pub use cpu::AddrMode;

// Shared test utilities (only compiled for tests).
#[cfg(test)]
pub mod test_utils;
