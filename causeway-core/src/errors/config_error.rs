/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {reason}")]
    Parse { reason: String },

    #[error("config read failed: {path}: {reason}")]
    Read { path: String, reason: String },
}
