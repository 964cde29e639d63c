//! Logging setup shared by CalcPro binaries.
//!
//! Everything goes to stderr so that headless output on stdout stays
//! machine-readable.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` is used
/// (e.g. `"calcpro=info,calccore=info"`). Calling this twice is harmless:
/// the second call keeps the first subscriber.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if !installed {
        tracing::debug!("logging already initialised");
    }
}
