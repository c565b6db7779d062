/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack).

Centralizes the side-effect logic for instructions so every dispatch family
shares a single implementation. Helpers are pure over `CpuState` except the
stack ops, which take the bus. Each helper applies exactly one instruction's
flag-update rule; flags are assigned from the operation's actual inputs and
outputs, never re-derived afterwards.
*/

use crate::bus::{Bus, BusFault};
use crate::cpu::state::{BREAK, CARRY, CpuState, DECIMAL, NEGATIVE, OVERFLOW, UNUSED, ZERO};

// ---------------------------------------------------------------------------
// Loads / transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda(state: &mut CpuState, v: u8) {
    state.a = v;
    state.update_zn(v);
}

#[inline]
pub(crate) fn ldx(state: &mut CpuState, v: u8) {
    state.x = v;
    state.update_zn(v);
}

#[inline]
pub(crate) fn ldy(state: &mut CpuState, v: u8) {
    state.y = v;
    state.update_zn(v);
}

#[inline]
pub(crate) fn tax(state: &mut CpuState) {
    state.x = state.a;
    state.update_zn(state.x);
}

#[inline]
pub(crate) fn tay(state: &mut CpuState) {
    state.y = state.a;
    state.update_zn(state.y);
}

#[inline]
pub(crate) fn txa(state: &mut CpuState) {
    state.a = state.x;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn tya(state: &mut CpuState) {
    state.a = state.y;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn tsx(state: &mut CpuState) {
    state.x = state.sp;
    state.update_zn(state.x);
}

/// TXS is the one transfer that updates no flags.
#[inline]
pub(crate) fn txs(state: &mut CpuState) {
    state.sp = state.x;
}

// ---------------------------------------------------------------------------
// Logical / bit test
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and(state: &mut CpuState, v: u8) {
    state.a &= v;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn ora(state: &mut CpuState, v: u8) {
    state.a |= v;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn eor(state: &mut CpuState, v: u8) {
    state.a ^= v;
    state.update_zn(state.a);
}

/// BIT: Z from A AND M (result discarded); N and V copied from operand bits
/// 7 and 6, not from the AND result.
#[inline]
pub(crate) fn bit(state: &mut CpuState, v: u8) {
    state.assign_flag(ZERO, (state.a & v) == 0);
    state.assign_flag(NEGATIVE, (v & 0x80) != 0);
    state.assign_flag(OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Register increment / decrement
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx(state: &mut CpuState) {
    state.x = state.x.wrapping_add(1);
    state.update_zn(state.x);
}

#[inline]
pub(crate) fn iny(state: &mut CpuState) {
    state.y = state.y.wrapping_add(1);
    state.update_zn(state.y);
}

#[inline]
pub(crate) fn dex(state: &mut CpuState) {
    state.x = state.x.wrapping_sub(1);
    state.update_zn(state.x);
}

#[inline]
pub(crate) fn dey(state: &mut CpuState) {
    state.y = state.y.wrapping_sub(1);
    state.update_zn(state.y);
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

/// Add with carry. `decimal_enabled` comes from the core configuration; the
/// D flag is consulted only when it is true.
#[inline]
pub(crate) fn adc(state: &mut CpuState, v: u8, decimal_enabled: bool) {
    if decimal_enabled && state.is_flag_set(DECIMAL) {
        adc_decimal(state, v);
    } else {
        adc_binary(state, v);
    }
}

/// Subtract with borrow: in binary mode exactly ADC of the one's complement.
#[inline]
pub(crate) fn sbc(state: &mut CpuState, v: u8, decimal_enabled: bool) {
    if decimal_enabled && state.is_flag_set(DECIMAL) {
        sbc_decimal(state, v);
    } else {
        adc_binary(state, !v);
    }
}

fn adc_binary(state: &mut CpuState, v: u8) {
    let a = state.a;
    let carry_in = u16::from(state.is_flag_set(CARRY));
    let sum16 = u16::from(a) + u16::from(v) + carry_in;
    let result = sum16 as u8;

    state.assign_flag(CARRY, sum16 > 0xFF);
    // Signed overflow: operands share a sign and the result's sign differs.
    state.assign_flag(OVERFLOW, (!(a ^ v) & (a ^ result) & 0x80) != 0);
    state.a = result;
    state.update_zn(result);
}

fn adc_decimal(state: &mut CpuState, v: u8) {
    let a = state.a;
    let carry_in = u8::from(state.is_flag_set(CARRY));

    // V is defined on the binary sum even in decimal mode.
    let bin = (u16::from(a) + u16::from(v) + u16::from(carry_in)) as u8;
    state.assign_flag(OVERFLOW, (!(a ^ v) & (a ^ bin) & 0x80) != 0);

    let mut lo = (a & 0x0F) + (v & 0x0F) + carry_in;
    let mut hi = (a >> 4) + (v >> 4);
    if lo > 9 {
        lo += 6;
        hi += 1;
    }
    if hi > 9 {
        hi += 6;
    }

    state.assign_flag(CARRY, hi > 0x0F);
    let result = (hi << 4) | (lo & 0x0F);
    state.a = result;
    state.update_zn(result);
}

fn sbc_decimal(state: &mut CpuState, v: u8) {
    let a = state.a;
    let borrow = i16::from(!state.is_flag_set(CARRY));

    let bin = i16::from(a) - i16::from(v) - borrow;
    state.assign_flag(CARRY, bin >= 0);
    state.assign_flag(
        OVERFLOW,
        ((i16::from(a) ^ bin) & (i16::from(a) ^ i16::from(v)) & 0x80) != 0,
    );

    let mut lo = i16::from(a & 0x0F) - i16::from(v & 0x0F) - borrow;
    let mut hi = i16::from(a >> 4) - i16::from(v >> 4);
    if lo < 0 {
        lo -= 6;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 6;
    }

    let result = ((hi as u8) << 4) | (lo as u8 & 0x0F);
    state.a = result;
    state.update_zn(result);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// CMP/CPX/CPY: unsigned 9-bit subtraction. C set when no borrow occurred
/// (register >= operand); N/Z from the truncated 8-bit difference.
#[inline]
pub(crate) fn compare(state: &mut CpuState, reg: u8, v: u8) {
    state.assign_flag(CARRY, reg >= v);
    state.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Shifts / rotates (value-in, value-out; used for both A and memory forms)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl(state: &mut CpuState, v: u8) -> u8 {
    state.assign_flag(CARRY, (v & 0x80) != 0);
    let result = v << 1;
    state.update_zn(result);
    result
}

#[inline]
pub(crate) fn lsr(state: &mut CpuState, v: u8) -> u8 {
    state.assign_flag(CARRY, (v & 0x01) != 0);
    let result = v >> 1;
    state.update_zn(result);
    result
}

#[inline]
pub(crate) fn rol(state: &mut CpuState, v: u8) -> u8 {
    // Carry-in is the C value from before this instruction overwrites it.
    let carry_in = u8::from(state.is_flag_set(CARRY));
    state.assign_flag(CARRY, (v & 0x80) != 0);
    let result = (v << 1) | carry_in;
    state.update_zn(result);
    result
}

#[inline]
pub(crate) fn ror(state: &mut CpuState, v: u8) -> u8 {
    let carry_in = if state.is_flag_set(CARRY) { 0x80 } else { 0 };
    state.assign_flag(CARRY, (v & 0x01) != 0);
    let result = (v >> 1) | carry_in;
    state.update_zn(result);
    result
}

#[inline]
pub(crate) fn inc(state: &mut CpuState, v: u8) -> u8 {
    let result = v.wrapping_add(1);
    state.update_zn(result);
    result
}

#[inline]
pub(crate) fn dec(state: &mut CpuState, v: u8) -> u8 {
    let result = v.wrapping_sub(1);
    state.update_zn(result);
    result
}

// ---------------------------------------------------------------------------
// Stack instructions
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn pha<B: Bus>(state: &mut CpuState, bus: &mut B) -> Result<(), BusFault> {
    let a = state.a;
    state.push_u8(bus, a)
}

#[inline]
pub(crate) fn pla<B: Bus>(state: &mut CpuState, bus: &mut B) -> Result<(), BusFault> {
    let v = state.pop_u8(bus)?;
    state.a = v;
    state.update_zn(v);
    Ok(())
}

/// PHP always pushes with BREAK set (software push semantics).
#[inline]
pub(crate) fn php<B: Bus>(state: &mut CpuState, bus: &mut B) -> Result<(), BusFault> {
    let v = state.status_for_push(true);
    state.push_u8(bus, v)
}

/// PLP ignores the pushed BREAK bit and forces UNUSED on.
#[inline]
pub(crate) fn plp<B: Bus>(state: &mut CpuState, bus: &mut B) -> Result<(), BusFault> {
    let v = state.pop_u8(bus)?;
    state.status = (v | UNUSED) & !BREAK;
    Ok(())
}
