// ============================================================================
// Logging Setup
// tracing-subscriber initialisation for binaries and demos
// ============================================================================
//
// The library itself only emits `tracing` events:
// - DEBUG when a model's operable fields change
// - WARN when a selection ends up with no fields
// - TRACE for every combine / scale call
//
// Nothing is printed until a subscriber is installed.

use tracing::Level;

/// Install a global formatting subscriber at `level`.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}
