// SPDX-License-Identifier: GPL-2.0
//! Tests for bpf_abs_verifier::check::execute (straight-line transfer)

use bpf_abs_verifier::prelude::*;

const MOV64_REG: u8 = BPF_ALU64 | BPF_X | BPF_MOV;
const MOV64_IMM: u8 = BPF_ALU64 | BPF_K | BPF_MOV;
const ADD64_REG: u8 = BPF_ALU64 | BPF_X | BPF_ADD;
const ADD64_IMM: u8 = BPF_ALU64 | BPF_K | BPF_ADD;
const LDDW: u8 = BPF_LD | BPF_IMM | BPF_DW;
const CALL: u8 = BPF_JMP | BPF_CALL;
const STXDW: u8 = BPF_STX | BPF_MEM | BPF_DW;

fn run(from: &AbsState, insn: &BpfInsn, next_imm: i32) -> AbsState {
    let mut to = AbsState::unreached();
    execute(&mut to, from, insn, next_imm);
    to
}

#[test]
fn test_mov_reg_precision() {
    let mut from = AbsState::entry();
    from.set_reg(2, AbsValue::Known(42));

    // dst top
    let insn = BpfInsn::new(MOV64_REG, 3, 2, 0, 0);
    assert_eq!(run(&from, &insn, 0).reg(3), AbsValue::Known(42));

    // dst already known; a move still only depends on its source
    from.set_reg(3, AbsValue::Known(99));
    assert_eq!(run(&from, &insn, 0).reg(3), AbsValue::Known(42));
}

#[test]
fn test_mov_imm() {
    let from = AbsState::entry();
    let insn = BpfInsn::new(MOV64_IMM, 4, 0, 0, -1);
    assert_eq!(run(&from, &insn, 0).reg(4), AbsValue::Known(u64::MAX));
}

#[test]
fn test_lddw_combines_both_slots() {
    let from = AbsState::entry();
    let insn = BpfInsn::new(LDDW, 1, 0, 0, 0x11223344_u32 as i32);
    let to = run(&from, &insn, 0x55667788);
    assert_eq!(to.reg(1), AbsValue::Known(0x5566778811223344));
}

#[test]
fn test_lddw_negative_low_word_not_sign_extended() {
    let from = AbsState::entry();
    let insn = BpfInsn::new(LDDW, 1, 0, 0, -1);
    let to = run(&from, &insn, 0);
    assert_eq!(to.reg(1), AbsValue::Known(0xffff_ffff));
}

#[test]
fn test_call_clobbers_caller_saved() {
    let mut from = AbsState::entry();
    for r in 0..MAX_BPF_REG as u8 {
        from.set_reg(r, AbsValue::Known(r as u64 + 100));
    }

    let insn = BpfInsn::new(CALL, 0, 0, 0, 1);
    let to = run(&from, &insn, 0);
    for r in 0..=5 {
        assert_eq!(to.reg(r), AbsValue::Top, "r{} must be clobbered", r);
    }
    for r in 6..MAX_BPF_REG as u8 {
        assert_eq!(to.reg(r), AbsValue::Known(r as u64 + 100), "r{} must survive", r);
    }
}

#[test]
fn test_non_alu_has_no_effect() {
    let mut from = AbsState::entry();
    from.set_reg(2, AbsValue::Known(7));

    let insn = BpfInsn::new(STXDW, 10, 2, -8, 0);
    let to = run(&from, &insn, 0);
    assert_eq!(to, from);
}

#[test]
fn test_unknown_src_reg_clobbers_dst() {
    let mut from = AbsState::entry();
    from.set_reg(3, AbsValue::Known(1));
    // r2 is top

    let insn = BpfInsn::new(ADD64_REG, 3, 2, 0, 0);
    assert_eq!(run(&from, &insn, 0).reg(3), AbsValue::Top);
}

#[test]
fn test_unknown_dst_clobbers_non_mov() {
    let mut from = AbsState::entry();
    from.set_reg(2, AbsValue::Known(1));
    // dst r3 is top and add consumes it

    let insn = BpfInsn::new(ADD64_REG, 3, 2, 0, 0);
    assert_eq!(run(&from, &insn, 0).reg(3), AbsValue::Top);
}

#[test]
fn test_known_operands_compute() {
    let mut from = AbsState::entry();
    from.set_reg(2, AbsValue::Known(3));
    from.set_reg(3, AbsValue::Known(4));

    let insn = BpfInsn::new(ADD64_REG, 3, 2, 0, 0);
    assert_eq!(run(&from, &insn, 0).reg(3), AbsValue::Known(7));

    let insn = BpfInsn::new(ADD64_IMM, 3, 0, 0, 10);
    assert_eq!(run(&from, &insn, 0).reg(3), AbsValue::Known(14));
}

#[test]
fn test_execute_accumulates_over_predecessors() {
    // Two predecessor states reaching the same successor through the same
    // instruction: the successor must over-approximate both.
    let mut a = AbsState::entry();
    a.set_reg(2, AbsValue::Known(1));
    a.set_reg(4, AbsValue::Known(50));
    let mut b = AbsState::entry();
    b.set_reg(2, AbsValue::Known(2));
    b.set_reg(4, AbsValue::Known(50));

    let insn = BpfInsn::new(ADD64_IMM, 2, 0, 0, 1);
    let mut to = AbsState::unreached();
    assert!(execute(&mut to, &a, &insn, 0));
    assert!(execute(&mut to, &b, &insn, 0));

    assert_eq!(to.reg(2), AbsValue::Top);
    assert_eq!(to.reg(4), AbsValue::Known(50));

    // And a third pass changes nothing
    assert!(!execute(&mut to, &b, &insn, 0));
}
