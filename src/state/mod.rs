//! Abstract values and abstract register states

pub mod abs_state;
pub mod abs_value;

pub use abs_state::AbsState;
pub use abs_value::AbsValue;
