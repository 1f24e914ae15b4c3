//! Memory access verification

pub mod bounds;

pub use bounds::check_mem_access;
