//! Process exit codes.
//!
//! One convention across every subcommand, so scripts and tests can rely
//! on it: zero for success, two for anything refused or failed.

/// Command completed normally.
pub const SUCCESS: i32 = 0;

/// Command failed, or its arguments or input were refused.
pub const ERROR: i32 = 2;
