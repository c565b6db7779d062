/*!
table.rs - The 256-entry opcode decode table.

Each opcode byte maps to an immutable `{ addressing mode, mnemonic, base
cycle count }` triple. The table is built once in a const block and never
mutated; decode is a direct array index, so no opcode value can miss or
crash. Base cycle counts exclude the dynamic penalties (+1 page cross on
read-type indexed access, +1 branch taken, +1 taken branch page cross),
which the dispatcher adds.

Every opcode byte not listed below is an undocumented instruction and
resolves to the `Ill` fallback: a 1-byte, 1-cycle no-op. The documented NOP
($EA) keeps its real 2-cycle cost.
*/

use crate::cpu::addressing::AddrMode;

/// Instruction mnemonic tags for the documented 6502 set, plus the
/// undocumented-opcode fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    /// Undocumented opcode: executes as a 1-byte no-op.
    Ill,
}

/// One decoded opcode: the immutable triple the dispatcher works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub mode: AddrMode,
    pub mnemonic: Mnemonic,
    pub cycles: u8,
}

const fn op(mode: AddrMode, mnemonic: Mnemonic, cycles: u8) -> OpcodeEntry {
    OpcodeEntry { mode, mnemonic, cycles }
}

/// Decode table for all 256 opcode bytes.
pub static OPCODE_TABLE: [OpcodeEntry; 256] = {
    use AddrMode::*;
    use Mnemonic::*;

    let mut t = [op(Implied, Ill, 1); 256];

    // Loads
    t[0xA9] = op(Immediate, Lda, 2);
    t[0xA5] = op(ZeroPage, Lda, 3);
    t[0xB5] = op(ZeroPageX, Lda, 4);
    t[0xAD] = op(Absolute, Lda, 4);
    t[0xBD] = op(AbsoluteX, Lda, 4);
    t[0xB9] = op(AbsoluteY, Lda, 4);
    t[0xA1] = op(IndexedIndirect, Lda, 6);
    t[0xB1] = op(IndirectIndexed, Lda, 5);
    t[0xA2] = op(Immediate, Ldx, 2);
    t[0xA6] = op(ZeroPage, Ldx, 3);
    t[0xB6] = op(ZeroPageY, Ldx, 4);
    t[0xAE] = op(Absolute, Ldx, 4);
    t[0xBE] = op(AbsoluteY, Ldx, 4);
    t[0xA0] = op(Immediate, Ldy, 2);
    t[0xA4] = op(ZeroPage, Ldy, 3);
    t[0xB4] = op(ZeroPageX, Ldy, 4);
    t[0xAC] = op(Absolute, Ldy, 4);
    t[0xBC] = op(AbsoluteX, Ldy, 4);

    // Stores (indexed forms pay the fixed cost; no page-cross discount)
    t[0x85] = op(ZeroPage, Sta, 3);
    t[0x95] = op(ZeroPageX, Sta, 4);
    t[0x8D] = op(Absolute, Sta, 4);
    t[0x9D] = op(AbsoluteX, Sta, 5);
    t[0x99] = op(AbsoluteY, Sta, 5);
    t[0x81] = op(IndexedIndirect, Sta, 6);
    t[0x91] = op(IndirectIndexed, Sta, 6);
    t[0x86] = op(ZeroPage, Stx, 3);
    t[0x96] = op(ZeroPageY, Stx, 4);
    t[0x8E] = op(Absolute, Stx, 4);
    t[0x84] = op(ZeroPage, Sty, 3);
    t[0x94] = op(ZeroPageX, Sty, 4);
    t[0x8C] = op(Absolute, Sty, 4);

    // Transfers
    t[0xAA] = op(Implied, Tax, 2);
    t[0xA8] = op(Implied, Tay, 2);
    t[0x8A] = op(Implied, Txa, 2);
    t[0x98] = op(Implied, Tya, 2);
    t[0xBA] = op(Implied, Tsx, 2);
    t[0x9A] = op(Implied, Txs, 2);

    // Stack
    t[0x48] = op(Implied, Pha, 3);
    t[0x68] = op(Implied, Pla, 4);
    t[0x08] = op(Implied, Php, 3);
    t[0x28] = op(Implied, Plp, 4);

    // Register increment / decrement
    t[0xE8] = op(Implied, Inx, 2);
    t[0xC8] = op(Implied, Iny, 2);
    t[0xCA] = op(Implied, Dex, 2);
    t[0x88] = op(Implied, Dey, 2);

    // Memory increment / decrement
    t[0xE6] = op(ZeroPage, Inc, 5);
    t[0xF6] = op(ZeroPageX, Inc, 6);
    t[0xEE] = op(Absolute, Inc, 6);
    t[0xFE] = op(AbsoluteX, Inc, 7);
    t[0xC6] = op(ZeroPage, Dec, 5);
    t[0xD6] = op(ZeroPageX, Dec, 6);
    t[0xCE] = op(Absolute, Dec, 6);
    t[0xDE] = op(AbsoluteX, Dec, 7);

    // Logical
    t[0x29] = op(Immediate, And, 2);
    t[0x25] = op(ZeroPage, And, 3);
    t[0x35] = op(ZeroPageX, And, 4);
    t[0x2D] = op(Absolute, And, 4);
    t[0x3D] = op(AbsoluteX, And, 4);
    t[0x39] = op(AbsoluteY, And, 4);
    t[0x21] = op(IndexedIndirect, And, 6);
    t[0x31] = op(IndirectIndexed, And, 5);
    t[0x09] = op(Immediate, Ora, 2);
    t[0x05] = op(ZeroPage, Ora, 3);
    t[0x15] = op(ZeroPageX, Ora, 4);
    t[0x0D] = op(Absolute, Ora, 4);
    t[0x1D] = op(AbsoluteX, Ora, 4);
    t[0x19] = op(AbsoluteY, Ora, 4);
    t[0x01] = op(IndexedIndirect, Ora, 6);
    t[0x11] = op(IndirectIndexed, Ora, 5);
    t[0x49] = op(Immediate, Eor, 2);
    t[0x45] = op(ZeroPage, Eor, 3);
    t[0x55] = op(ZeroPageX, Eor, 4);
    t[0x4D] = op(Absolute, Eor, 4);
    t[0x5D] = op(AbsoluteX, Eor, 4);
    t[0x59] = op(AbsoluteY, Eor, 4);
    t[0x41] = op(IndexedIndirect, Eor, 6);
    t[0x51] = op(IndirectIndexed, Eor, 5);

    // Bit test
    t[0x24] = op(ZeroPage, Bit, 3);
    t[0x2C] = op(Absolute, Bit, 4);

    // Shifts / rotates
    t[0x0A] = op(Accumulator, Asl, 2);
    t[0x06] = op(ZeroPage, Asl, 5);
    t[0x16] = op(ZeroPageX, Asl, 6);
    t[0x0E] = op(Absolute, Asl, 6);
    t[0x1E] = op(AbsoluteX, Asl, 7);
    t[0x4A] = op(Accumulator, Lsr, 2);
    t[0x46] = op(ZeroPage, Lsr, 5);
    t[0x56] = op(ZeroPageX, Lsr, 6);
    t[0x4E] = op(Absolute, Lsr, 6);
    t[0x5E] = op(AbsoluteX, Lsr, 7);
    t[0x2A] = op(Accumulator, Rol, 2);
    t[0x26] = op(ZeroPage, Rol, 5);
    t[0x36] = op(ZeroPageX, Rol, 6);
    t[0x2E] = op(Absolute, Rol, 6);
    t[0x3E] = op(AbsoluteX, Rol, 7);
    t[0x6A] = op(Accumulator, Ror, 2);
    t[0x66] = op(ZeroPage, Ror, 5);
    t[0x76] = op(ZeroPageX, Ror, 6);
    t[0x6E] = op(Absolute, Ror, 6);
    t[0x7E] = op(AbsoluteX, Ror, 7);

    // Flag operations
    t[0x18] = op(Implied, Clc, 2);
    t[0x38] = op(Implied, Sec, 2);
    t[0x58] = op(Implied, Cli, 2);
    t[0x78] = op(Implied, Sei, 2);
    t[0xD8] = op(Implied, Cld, 2);
    t[0xF8] = op(Implied, Sed, 2);
    t[0xB8] = op(Implied, Clv, 2);

    // Compare
    t[0xC9] = op(Immediate, Cmp, 2);
    t[0xC5] = op(ZeroPage, Cmp, 3);
    t[0xD5] = op(ZeroPageX, Cmp, 4);
    t[0xCD] = op(Absolute, Cmp, 4);
    t[0xDD] = op(AbsoluteX, Cmp, 4);
    t[0xD9] = op(AbsoluteY, Cmp, 4);
    t[0xC1] = op(IndexedIndirect, Cmp, 6);
    t[0xD1] = op(IndirectIndexed, Cmp, 5);
    t[0xE0] = op(Immediate, Cpx, 2);
    t[0xE4] = op(ZeroPage, Cpx, 3);
    t[0xEC] = op(Absolute, Cpx, 4);
    t[0xC0] = op(Immediate, Cpy, 2);
    t[0xC4] = op(ZeroPage, Cpy, 3);
    t[0xCC] = op(Absolute, Cpy, 4);

    // Branches (base cost only; taken / page-cross penalties are dynamic)
    t[0x10] = op(Relative, Bpl, 2);
    t[0x30] = op(Relative, Bmi, 2);
    t[0x50] = op(Relative, Bvc, 2);
    t[0x70] = op(Relative, Bvs, 2);
    t[0x90] = op(Relative, Bcc, 2);
    t[0xB0] = op(Relative, Bcs, 2);
    t[0xD0] = op(Relative, Bne, 2);
    t[0xF0] = op(Relative, Beq, 2);

    // Jumps / subroutines / returns
    t[0x4C] = op(Absolute, Jmp, 3);
    t[0x6C] = op(Indirect, Jmp, 5);
    t[0x20] = op(Absolute, Jsr, 6);
    t[0x60] = op(Implied, Rts, 6);

    // Arithmetic
    t[0x69] = op(Immediate, Adc, 2);
    t[0x65] = op(ZeroPage, Adc, 3);
    t[0x75] = op(ZeroPageX, Adc, 4);
    t[0x6D] = op(Absolute, Adc, 4);
    t[0x7D] = op(AbsoluteX, Adc, 4);
    t[0x79] = op(AbsoluteY, Adc, 4);
    t[0x61] = op(IndexedIndirect, Adc, 6);
    t[0x71] = op(IndirectIndexed, Adc, 5);
    t[0xE9] = op(Immediate, Sbc, 2);
    t[0xE5] = op(ZeroPage, Sbc, 3);
    t[0xF5] = op(ZeroPageX, Sbc, 4);
    t[0xED] = op(Absolute, Sbc, 4);
    t[0xFD] = op(AbsoluteX, Sbc, 4);
    t[0xF9] = op(AbsoluteY, Sbc, 4);
    t[0xE1] = op(IndexedIndirect, Sbc, 6);
    t[0xF1] = op(IndirectIndexed, Sbc, 5);

    // Interrupt / system
    t[0x00] = op(Implied, Brk, 7);
    t[0x40] = op(Implied, Rti, 6);
    t[0xEA] = op(Implied, Nop, 2);

    t
};
