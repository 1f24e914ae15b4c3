//! Error types for safety-check failures

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Result type alias for safety checks
pub type Result<T> = core::result::Result<T, VerifierError>;

/// Direction of a memory access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDir {
    /// Read through the source register
    Load,
    /// Write through the destination register
    Store,
}

impl core::fmt::Display for AccessDir {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccessDir::Load => write!(f, "load"),
            AccessDir::Store => write!(f, "store"),
        }
    }
}

/// Errors reported by the safety predicates
///
/// A failure is a verdict, not a transient condition: the driver must reject
/// the whole program. Each variant carries enough context to localize the
/// fault in the source program.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum VerifierError {
    /// Memory access that cannot be proven in-bounds
    #[cfg_attr(
        feature = "std",
        error("out of bounds memory {access} at PC {pc} [r{regno}{offset:+}]")
    )]
    OutOfBoundsAccess {
        /// Whether the faulting instruction was a load or a store
        access: AccessDir,
        /// Program counter of the faulting instruction
        pc: usize,
        /// Register used as the address base
        regno: u8,
        /// Signed byte offset of the access
        offset: i16,
    },

    /// Division or modulo whose divisor may be zero
    #[cfg_attr(feature = "std", error("division by zero at PC {pc}"))]
    DivisionByZero {
        /// Program counter of the faulting instruction
        pc: usize,
    },
}

// Manual Display implementation for no_std
#[cfg(not(feature = "std"))]
impl fmt::Display for VerifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifierError::OutOfBoundsAccess {
                access,
                pc,
                regno,
                offset,
            } => write!(
                f,
                "out of bounds memory {} at PC {} [r{}{:+}]",
                access, pc, regno, offset
            ),
            VerifierError::DivisionByZero { pc } => {
                write!(f, "division by zero at PC {}", pc)
            }
        }
    }
}
