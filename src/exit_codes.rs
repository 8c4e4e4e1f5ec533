//! Exit code constants for the idlconf CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed manifest)
//! - 2: Validation failure (duplicate dependency)
//! - 3: Encode failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable file, or a manifest that fails to decode.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the manifest decoded but violates a semantic rule.
pub const VALIDATION_FAILURE: i32 = 2;

/// Encode failure: the manifest could not be written back out.
pub const ENCODE_FAILURE: i32 = 3;
