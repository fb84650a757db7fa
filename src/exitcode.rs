//! Process exit codes

/// Successful termination, with or without a save
pub const OK: i32 = 0;

/// Any failure: usage, file access, navigation or write error
pub const FAILURE: i32 = 1;
