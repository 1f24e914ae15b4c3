//! Concrete evaluation of ALU opcodes over known operands
//!
//! Called by the transfer function once both operands of an arithmetic
//! instruction are exact constants. Semantics match the eBPF runtime:
//! 32-bit results are zero-extended, shift amounts are masked to the
//! operand width, and the divide-by-zero cases follow the runtime's
//! defined results (the verifier proves divisors non-zero before any
//! program runs, so those arms are never the last line of defense).

use crate::types::*;

/// Compute the concrete result of an ALU or ALU64 instruction
///
/// Register-source instructions (`BPF_X` set) take the operand from `src`;
/// immediate instructions take `imm`, sign-extended to 64 bits in the
/// ALU64 class and truncated to 32 bits in the ALU class.
pub fn do_const_alu(code: u8, imm: i32, dst: u64, src: u64) -> u64 {
    let op = code & 0xf0;

    // Byte swaps encode the width in the immediate, not the size bits.
    if op == BPF_END {
        let to_be = code & BPF_X != 0;
        return match (to_be, imm) {
            (true, 16) => (dst as u16).swap_bytes() as u64,
            (true, 32) => (dst as u32).swap_bytes() as u64,
            (true, 64) => dst.swap_bytes(),
            (false, 16) => dst as u16 as u64,
            (false, 32) => dst as u32 as u64,
            _ => dst,
        };
    }

    if code & 0x07 == BPF_ALU64 {
        let src = if code & BPF_X != 0 {
            src
        } else {
            imm as i64 as u64
        };
        match op {
            BPF_ADD => dst.wrapping_add(src),
            BPF_SUB => dst.wrapping_sub(src),
            BPF_MUL => dst.wrapping_mul(src),
            BPF_DIV => {
                if src == 0 {
                    0
                } else {
                    dst / src
                }
            }
            BPF_OR => dst | src,
            BPF_AND => dst & src,
            BPF_LSH => dst.wrapping_shl(src as u32 & 63),
            BPF_RSH => dst.wrapping_shr(src as u32 & 63),
            BPF_NEG => dst.wrapping_neg(),
            BPF_MOD => {
                if src == 0 {
                    dst
                } else {
                    dst % src
                }
            }
            BPF_XOR => dst ^ src,
            BPF_MOV => src,
            BPF_ARSH => ((dst as i64) >> (src & 63)) as u64,
            _ => dst,
        }
    } else {
        let dst = dst as u32;
        let src = if code & BPF_X != 0 {
            src as u32
        } else {
            imm as u32
        };
        let result = match op {
            BPF_ADD => dst.wrapping_add(src),
            BPF_SUB => dst.wrapping_sub(src),
            BPF_MUL => dst.wrapping_mul(src),
            BPF_DIV => {
                if src == 0 {
                    0
                } else {
                    dst / src
                }
            }
            BPF_OR => dst | src,
            BPF_AND => dst & src,
            BPF_LSH => dst.wrapping_shl(src & 31),
            BPF_RSH => dst.wrapping_shr(src & 31),
            BPF_NEG => dst.wrapping_neg(),
            BPF_MOD => {
                if src == 0 {
                    dst
                } else {
                    dst % src
                }
            }
            BPF_XOR => dst ^ src,
            BPF_MOV => src,
            BPF_ARSH => ((dst as i32) >> (src & 31)) as u32,
            _ => dst,
        };
        result as u64
    }
}
