//! Bounds checking of memory accesses
//!
//! Decides whether a load or store can be statically proven in-bounds from
//! the instruction's offset and width alone, given the fixed register-role
//! convention: r10 is the frame pointer and r1 is assumed to still hold the
//! context pointer. No abstract value is consulted.

use crate::error::{AccessDir, Result, VerifierError};
use crate::state::abs_state::AbsState;
use crate::types::*;

/// Access width in bytes, for memory instructions only
fn access_width(insn: &BpfInsn) -> Option<i32> {
    if !matches!(insn.class(), BPF_LDX | BPF_ST | BPF_STX) || insn.mode() != BPF_MEM {
        return None;
    }
    Some(match insn.size() {
        BPF_B => 1,
        BPF_H => 2,
        BPF_W => 4,
        _ => 8,
    })
}

/// Check that a memory access stays inside the stack frame or the context
/// region
///
/// Loads address memory through the source register, stores through the
/// destination register. Through the frame pointer the whole access must
/// land in the stack region ending at r10; through r1 it must land in the
/// first [`CTX_SIZE`] bytes — an unverified trust that r1 still holds the
/// original context pointer, since provenance is not tracked. No other
/// base register is ever valid. Non-memory opcodes pass vacuously.
pub fn check_mem_access(_state: &AbsState, insn: &BpfInsn, pc: usize) -> Result<()> {
    let width = match access_width(insn) {
        Some(w) => w,
        None => return Ok(()),
    };

    let is_load = matches!(insn.class(), BPF_LD | BPF_LDX);
    let regno = if is_load { insn.src_reg } else { insn.dst_reg };
    let offset = insn.off as i32;

    let fail = match regno {
        BPF_REG_FP => offset + width > 0 || offset < -MAX_BPF_STACK,
        BPF_REG_1 => offset < 0 || offset + width > CTX_SIZE,
        _ => true,
    };

    if fail {
        return Err(VerifierError::OutOfBoundsAccess {
            access: if is_load {
                AccessDir::Load
            } else {
                AccessDir::Store
            },
            pc,
            regno,
            offset: insn.off,
        });
    }
    Ok(())
}
