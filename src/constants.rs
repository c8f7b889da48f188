//! Global constants for sendkeys
//!
//! Consolidates timing defaults and pseudo-key names
//! to eliminate magic numbers throughout the codebase.

use std::time::Duration;

// ============================================================================
// Timing Constants
// ============================================================================

/// Default delay after each emitted key, in seconds
pub const DEFAULT_DELAY_SECS: f64 = 0.1;

/// Fixed pause performed by the `wait` pseudo-key
pub const WAIT_PAUSE: Duration = Duration::from_secs(1);

// ============================================================================
// Key Names
// ============================================================================

/// Pseudo-key that pauses instead of emitting anything
pub const WAIT_KEY: &str = "wait";

/// Modifier prefix used to express uppercase letters
pub const SHIFT_PREFIX: &str = "shift-";

/// Monitor command verb prefixed to every key name
pub const SENDKEY_VERB: &str = "sendkey";
