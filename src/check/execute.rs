//! Straight-line transfer function
//!
//! Models the effect of one non-branch instruction on the constant domain.
//! The result is always joined into the destination accumulator, never
//! assigned, so a program point fed by several predecessors converges on
//! the union of everything that can reach it.

use crate::alu::do_const_alu;
use crate::state::abs_state::AbsState;
use crate::state::abs_value::AbsValue;
use crate::types::*;

/// Semantic effect of one instruction on the constant domain
///
/// Classification is exhaustive and ordered; each instruction lands in
/// exactly the first case that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsnEffect {
    /// `LDDW`: destination becomes a known 64-bit constant
    LoadImm64,
    /// Helper call: clobbers r0 and the argument registers
    Call,
    /// Not an arithmetic instruction; the domain is unaffected
    Untracked,
    /// Arithmetic over at least one unknown operand: destination becomes top
    ClobberDst,
    /// Arithmetic over known operands: destination becomes a known constant
    Compute,
}

fn classify(insn: &BpfInsn, state: &AbsState) -> InsnEffect {
    if insn.is_lddw() {
        return InsnEffect::LoadImm64;
    }
    if insn.is_call() {
        return InsnEffect::Call;
    }
    if !insn.is_alu() {
        return InsnEffect::Untracked;
    }
    // Source unknown-ness is tested before destination unknown-ness; keep
    // that order if either arm ever starts preserving partial information.
    if insn.code & BPF_X != 0 && !state.reg(insn.src_reg).is_known() {
        return InsnEffect::ClobberDst;
    }
    if !state.reg(insn.dst_reg).is_known() && !insn.is_mov() {
        // A move depends only on its source; everything else also consumes
        // the destination's prior value.
        return InsnEffect::ClobberDst;
    }
    InsnEffect::Compute
}

/// Apply one non-branch instruction to `from` and accumulate the result
/// into `to`
///
/// `next_imm` carries the high 32 immediate bits from the second encoding
/// slot of `LDDW`; it is ignored for every other opcode. Returns whether
/// `to` changed.
pub fn execute(to: &mut AbsState, from: &AbsState, insn: &BpfInsn, next_imm: i32) -> bool {
    let mut state = *from;

    match classify(insn, from) {
        InsnEffect::LoadImm64 => {
            let value = insn.imm as u32 as u64 | (next_imm as u32 as u64) << 32;
            state.set_reg(insn.dst_reg, AbsValue::Known(value));
        }
        InsnEffect::Call => {
            // Calls are opaque: arguments are consumed, the return value
            // depends on the callee, callee-saved registers survive.
            for r in BPF_REG_1..=BPF_REG_5 {
                state.set_reg(r, AbsValue::Top);
            }
            state.set_reg(BPF_REG_0, AbsValue::Top);
        }
        InsnEffect::Untracked => {}
        InsnEffect::ClobberDst => {
            state.set_reg(insn.dst_reg, AbsValue::Top);
        }
        InsnEffect::Compute => {
            // A top destination reaches here only for moves, which ignore
            // the prior destination value; a top source only for
            // immediate-operand forms, which ignore the source register.
            let dst = state.reg(insn.dst_reg).value().unwrap_or(0);
            let src = state.reg(insn.src_reg).value().unwrap_or(0);
            let value = do_const_alu(insn.code, insn.imm, dst, src);
            state.set_reg(insn.dst_reg, AbsValue::Known(value));
        }
    }

    to.join(&state)
}
