//! Terminal profile detection.
//!
//! Structure:
//! - Constants: the environment override and the OS heuristic
//! - Pure functions: name → profile
//! - Effect functions: read the process environment
//!
//! Detection runs once, at the top of the program. The resulting
//! [`Profile`] is then passed to decoders and view constructors; nothing
//! caches it globally.

use crate::types::Profile;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Environment variable that forces a profile (`legacy` or `modern`).
pub const PROFILE_ENV: &str = "TERMPROMPT_PROFILE";

/// Substring of an OS name that marks a legacy console.
///
/// Matched case-insensitively, so "windows" and "Windows 10" both hit.
pub const LEGACY_OS_MARKER: &str = "win";

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Map an OS name to a profile.
///
/// Pure function: no I/O.
pub fn profile_for_os(os: &str) -> Profile {
    if os.to_ascii_lowercase().contains(LEGACY_OS_MARKER) {
        Profile::Legacy
    } else {
        Profile::Modern
    }
}

/// Resolve a profile from an optional override and the OS name.
///
/// An override that doesn't parse is ignored.
pub fn resolve_profile(override_value: Option<&str>, os: &str) -> Profile {
    override_value
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| profile_for_os(os))
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Detect the profile for the running process.
pub fn detect_profile() -> Profile {
    let override_value = std::env::var(PROFILE_ENV).ok();
    let profile = resolve_profile(override_value.as_deref(), std::env::consts::OS);
    tracing::debug!(%profile, os = std::env::consts::OS, "detected terminal profile");
    profile
}

// ============================================================================
// TESTS
// ============================================================================
