// ============================================================================
// Utilities Module
// Ambient helpers that are not part of the operable contract
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;
