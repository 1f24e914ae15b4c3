//! Branch-assumption transfer function
//!
//! Models the knowledge gained on one side of a conditional branch: after
//! an equality test succeeds (or an inequality test fails), the tested
//! register is pinned to the compared value on that successor.

use crate::state::abs_state::AbsState;
use crate::state::abs_value::AbsValue;
use crate::types::*;

const JEQ_IMM: u8 = BPF_JMP | BPF_K | BPF_JEQ;
const JEQ_REG: u8 = BPF_JMP | BPF_X | BPF_JEQ;
const JNE_IMM: u8 = BPF_JMP | BPF_K | BPF_JNE;
const JNE_REG: u8 = BPF_JMP | BPF_X | BPF_JNE;

/// Apply the outcome of a conditional branch to `from` and accumulate the
/// result into `to`
///
/// `taken` selects which successor this call models. Only the four
/// equality/inequality forms refine anything; every other jump leaves the
/// state untouched. Returns whether `to` changed.
pub fn execute_assume(to: &mut AbsState, from: &AbsState, insn: &BpfInsn, taken: bool) -> bool {
    let mut state = *from;

    if (taken && insn.code == JEQ_IMM) || (!taken && insn.code == JNE_IMM) {
        let value = insn.imm as i64 as u64;
        state.set_reg(insn.dst_reg, AbsValue::Known(value));
    }
    if (taken && insn.code == JEQ_REG) || (!taken && insn.code == JNE_REG) {
        // The source's abstract value is copied, not linked: later writes
        // to the source do not flow back. Register correlations are not
        // tracked, a deliberate precision gap.
        state.set_reg(insn.dst_reg, state.reg(insn.src_reg));
    }

    to.join(&state)
}
