//! The flat constant lattice over 64-bit values
//!
//! One cell per register: either an exact 64-bit constant or `Top` ("any
//! value possible"). There is no ordering among distinct constants and no
//! per-cell bottom; unreachability is modeled once at the state level.

/// Abstract value of a single register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsValue {
    /// The register holds exactly this value
    Known(u64),
    /// Any value is possible
    #[default]
    Top,
}

impl AbsValue {
    /// Least upper bound of two cells
    ///
    /// Equal constants stay known; everything else collapses to `Top`.
    pub fn join(self, other: AbsValue) -> AbsValue {
        match (self, other) {
            (AbsValue::Known(a), AbsValue::Known(b)) if a == b => self,
            _ => AbsValue::Top,
        }
    }

    /// Check if this cell is an exact constant
    pub fn is_known(&self) -> bool {
        matches!(self, AbsValue::Known(_))
    }

    /// Get the constant, if any
    pub fn value(&self) -> Option<u64> {
        match self {
            AbsValue::Known(v) => Some(*v),
            AbsValue::Top => None,
        }
    }
}
