//! Error handling utilities

use crate::error::EdgeCopyError;
use tracing::error;

/// Report a fatal error and exit with a status derived from its kind
///
/// Library errors exit with [`EdgeCopyError::exit_code`]; anything else
/// exits with 1. With `verbose >= 1` the full source chain is printed too.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("Error: {error}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    let exit_code = error
        .downcast_ref::<EdgeCopyError>()
        .map(EdgeCopyError::exit_code)
        .unwrap_or(1);

    std::process::exit(exit_code)
}
