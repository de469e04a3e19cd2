//! Startup error taxonomy.
//!
//! Every variant is fatal: startup failures are logged and the process
//! exits with a nonzero status. Nothing here is retried.

/// Errors that can abort service startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Pool construction or the startup liveness ping failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The HTTP listener could not bind or serve.
    #[error("listener error: {0}")]
    Bind(#[from] std::io::Error),
}
