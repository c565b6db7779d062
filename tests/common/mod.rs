//! Shared integration-test fixtures: a flat 64 KiB bus and program builders.

#![allow(dead_code)]

use sixty502::{Bus, BusFault, Cpu};

/// Flat 64 KiB RAM bus for integration tests. Total over the whole address
/// space, so it never faults.
pub struct TestBus {
    ram: Box<[u8; 0x10000]>,
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            ram: Box::new([0u8; 0x10000]),
        }
    }

    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            self.ram[usize::from(addr) + i] = b;
        }
    }

    pub fn peek(&self, addr: u16) -> u8 {
        self.ram[usize::from(addr)]
    }

    pub fn poke(&mut self, addr: u16, value: u8) {
        self.ram[usize::from(addr)] = value;
    }
}

impl Bus for TestBus {
    fn read(&mut self, addr: u16) -> Result<u8, BusFault> {
        Ok(self.ram[usize::from(addr)])
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusFault> {
        self.ram[usize::from(addr)] = value;
        Ok(())
    }
}

/// A reset CPU plus a bus holding `prg` at `org`, with the reset vector
/// pointing at `org`.
pub fn setup(org: u16, prg: &[u8]) -> (Cpu, TestBus) {
    let mut bus = TestBus::new();
    bus.load(org, prg);
    bus.poke(0xFFFC, org as u8);
    bus.poke(0xFFFD, (org >> 8) as u8);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus).expect("flat bus cannot fault");
    (cpu, bus)
}
