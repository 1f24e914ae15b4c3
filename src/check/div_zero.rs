//! Division-by-zero safety predicate

use crate::error::{Result, VerifierError};
use crate::state::abs_state::AbsState;
use crate::state::abs_value::AbsValue;
use crate::types::*;

/// Check that a division or modulo has a provably non-zero register divisor
///
/// Applies to `BPF_DIV` and `BPF_MOD` in either arithmetic class, with the
/// source-operand bit ignored; every other opcode passes vacuously. The
/// divisor is compared at the operation's width: the ALU class masks to the
/// low 32 bits, so a divisor that is zero in the low word fails even when
/// its high bits are set. Only the source register is inspected; rejecting
/// a literal zero immediate is the caller's responsibility.
pub fn check_div_zero(state: &AbsState, insn: &BpfInsn, pc: usize) -> Result<()> {
    if !insn.is_alu() || !matches!(insn.op(), BPF_DIV | BPF_MOD) {
        return Ok(());
    }

    let zero = match state.reg(insn.src_reg) {
        AbsValue::Top => true,
        AbsValue::Known(v) => {
            if insn.class() == BPF_ALU64 {
                v == 0
            } else {
                v as u32 == 0
            }
        }
    };

    if zero {
        return Err(VerifierError::DivisionByZero { pc });
    }
    Ok(())
}
