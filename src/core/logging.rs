//! Logging initialization

fn builder() -> env_logger::Builder {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
}

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable.
/// Panics if a logger is already installed.
///
/// # Example
/// ```
/// cubebeast::core::logging::init();
/// log::info!("Editor started");
/// ```
pub fn init() {
    builder().init();
}

/// Like [`init`], but returns `false` instead of panicking when a logger
/// has already been installed (hosts that re-create the editor, tests).
pub fn try_init() -> bool {
    builder().try_init().is_ok()
}
