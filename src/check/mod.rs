//! Transfer functions and the division-by-zero check

pub mod branch;
pub mod div_zero;
pub mod execute;

pub use branch::execute_assume;
pub use div_zero::check_div_zero;
pub use execute::execute;
