//! Default values for Numina configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Traversal Defaults
// ============================================================================

/// Maximum number of hops from a seed.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Edges lighter than this are pruned from traversal.
pub const DEFAULT_MIN_WEIGHT: u8 = 5;

// ============================================================================
// Synthesis Defaults
// ============================================================================

/// Traversal depth used when synthesizing a pattern.
pub const DEFAULT_SYNTHESIS_DEPTH: usize = 2;

// ============================================================================
// Narrative Defaults
// ============================================================================

/// Token budget for a generated narrative.
pub const DEFAULT_TOKEN_BUDGET: usize = 300;

/// Characters per token used by the token estimate.
pub const DEFAULT_CHARS_PER_TOKEN: usize = 4;

// ============================================================================
// Config Locations
// ============================================================================

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "numina.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "numina";

/// File name inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.toml";
