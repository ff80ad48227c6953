//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, I/O or engine failure.
pub const ERROR: i32 = 2;

/// A run stopped before finishing its requested work.
pub const INTERRUPTED: i32 = 130;
