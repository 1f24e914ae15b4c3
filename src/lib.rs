// SPDX-License-Identifier: GPL-2.0

//! # Abstract-interpretation core for an eBPF verifier
//!
//! This crate computes, for every program point of an eBPF program, a sound
//! over-approximation of register contents using a flat constant-propagation
//! domain, and answers the two safety questions a loader must settle before
//! letting untrusted bytecode run:
//!
//! - **Memory safety**: every load and store stays inside the stack frame or
//!   the fixed-size context region
//! - **Division safety**: every register divisor is provably non-zero
//!
//! The crate is a pure function library. The fixed-point driver that walks
//! the control-flow graph owns one [`state::AbsState`] per program point and
//! threads them through the transfer functions; this core keeps no state of
//! its own between calls.
//!
//! ## Module Structure
//!
//! - [`types`]: Instruction representation and eBPF opcode constants
//! - [`error`]: Error definitions for safety-check failures
//! - [`log`]: Verbose logging of abstract states
//! - [`alu`]: Concrete evaluation of ALU opcodes over known operands
//! - [`state`]: Abstract values, abstract register states, and the lattice join
//! - [`check`]: Transfer functions and the division-by-zero check
//! - [`mem`]: Memory access bounds check

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Instruction representation and opcode constants
pub mod types;

/// Error types for safety-check failures
pub mod error;

/// Verbose logging
pub mod log;

/// Concrete ALU evaluation
pub mod alu;

/// Abstract values and abstract register states
pub mod state;

/// Transfer functions and division checking
pub mod check;

/// Memory access verification
pub mod mem;

/// Commonly used types and functions
pub mod prelude {
    pub use crate::alu::do_const_alu;
    pub use crate::check::branch::execute_assume;
    pub use crate::check::div_zero::check_div_zero;
    pub use crate::check::execute::execute;
    pub use crate::error::{AccessDir, Result, VerifierError};
    pub use crate::log::{log_state, LogLevel, VerifierLog};
    pub use crate::mem::bounds::check_mem_access;
    pub use crate::state::abs_state::AbsState;
    pub use crate::state::abs_value::AbsValue;
    pub use crate::types::*;
}
