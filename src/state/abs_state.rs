//! Abstract register state and the lattice join
//!
//! One `AbsState` per program point, owned by the fixed-point driver. The
//! transfer functions never mutate a state shared between program points;
//! every flow of information into a point goes through [`AbsState::join`].

use core::fmt;

use crate::state::abs_value::AbsValue;
use crate::types::MAX_BPF_REG;

/// Abstract state of the register file at one program point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsState {
    /// One cell per register, indexed 0-10
    regs: [AbsValue; MAX_BPF_REG],
    /// Lattice bottom: no concrete execution reaches this point yet.
    /// Register contents are meaningless while set.
    unreachable: bool,
}

impl AbsState {
    /// State for the program entry point: reachable, nothing known
    pub fn entry() -> Self {
        Self {
            regs: [AbsValue::Top; MAX_BPF_REG],
            unreachable: false,
        }
    }

    /// Bottom state, seeding points with no known predecessor yet
    pub fn unreached() -> Self {
        Self {
            regs: [AbsValue::Top; MAX_BPF_REG],
            unreachable: true,
        }
    }

    /// Check if this state is still bottom
    pub fn is_unreachable(&self) -> bool {
        self.unreachable
    }

    /// Get the abstract value of a register
    pub fn reg(&self, regno: u8) -> AbsValue {
        self.regs[regno as usize]
    }

    /// Set the abstract value of a register
    pub fn set_reg(&mut self, regno: u8, value: AbsValue) {
        self.regs[regno as usize] = value;
    }

    /// Merge `other` into this state in place, returning whether anything
    /// changed
    ///
    /// Bottom is the identity: joining into an unreachable accumulator
    /// yields a wholesale copy of `other`. Otherwise registers 1-10 are
    /// joined cell by cell and the state stays reachable; register 0 is the
    /// call return slot and is reestablished at every call site, so it is
    /// not merged. The changed flag is the convergence signal for the
    /// driver's worklist.
    pub fn join(&mut self, other: &AbsState) -> bool {
        if self.unreachable {
            let changed = !other.unreachable;
            *self = *other;
            return changed;
        }
        let mut changed = false;
        for r in 1..MAX_BPF_REG {
            let merged = self.regs[r].join(other.regs[r]);
            if merged != self.regs[r] {
                self.regs[r] = merged;
                changed = true;
            }
        }
        changed
    }
}

impl fmt::Display for AbsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unreachable {
            return write!(f, "<unreachable>");
        }
        for r in 0..MAX_BPF_REG {
            if r > 0 {
                write!(f, " ")?;
            }
            match self.regs[r] {
                AbsValue::Known(v) => write!(f, "R{}={}", r, v)?,
                AbsValue::Top => write!(f, "R{}=?", r)?,
            }
        }
        Ok(())
    }
}
