/*!
test_utils - Shared unit-test helpers.

`FlatBus` is a 64 KiB flat RAM behind the `Bus` trait, with `peek`/`poke`
accessors that bypass the fallible trait surface for test setup and
assertions. `bus_with_program` arranges a program image plus a reset vector
pointing at it.
*/

use crate::bus::{Bus, BusFault};

/// Flat 64 KiB RAM bus. Total over the whole address space, so it never
/// faults.
pub struct FlatBus {
    ram: Box<[u8; 0x10000]>,
}

impl FlatBus {
    pub fn new() -> Self {
        Self {
            ram: Box::new([0u8; 0x10000]),
        }
    }

    /// Copy `bytes` into memory starting at `addr`.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            self.ram[usize::from(addr) + i] = b;
        }
    }

    /// Read without going through the trait (no side effects, no Result).
    pub fn peek(&self, addr: u16) -> u8 {
        self.ram[usize::from(addr)]
    }

    /// Write without going through the trait.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.ram[usize::from(addr)] = value;
    }
}

impl Default for FlatBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for FlatBus {
    fn read(&mut self, addr: u16) -> Result<u8, BusFault> {
        Ok(self.ram[usize::from(addr)])
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusFault> {
        self.ram[usize::from(addr)] = value;
        Ok(())
    }
}

/// A flat bus with `prg` loaded at `org` and the reset vector pointing at
/// `org`.
pub fn bus_with_program(org: u16, prg: &[u8]) -> FlatBus {
    let mut bus = FlatBus::new();
    bus.load(org, prg);
    bus.poke(0xFFFC, org as u8);
    bus.poke(0xFFFD, (org >> 8) as u8);
    bus
}
