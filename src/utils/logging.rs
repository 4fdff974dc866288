// ============================================================================
// Logging Setup
// Installs a tracing subscriber for the `logging` feature
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `directive` (e.g. `"numeric_guard=debug"`).
///
/// # Errors
/// Returns an error if the directive does not parse or a global subscriber
/// is already installed.
pub fn init_logging(directive: &str) -> Result<(), String> {
    let filter = EnvFilter::try_new(directive).map_err(|e| e.to_string())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| e.to_string())
}
