//! Stable exit codes for `tutorials` CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid config or catalog, or any other error.
pub const INVALID: i32 = 1;
/// A tutorial, step or diff binding lookup missed.
pub const NOT_FOUND: i32 = 2;
