//! Low-level helpers used by resource implementations.
pub mod fs;
