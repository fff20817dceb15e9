mod config_error;
mod model_error;
mod report_error;

pub use config_error::ConfigError;
pub use model_error::ModelError;
pub use report_error::ReportError;

/// Top-level error for every fallible Causeway operation.
///
/// Missing or undetermined data is not an error: it only makes a relation
/// fail to match.
#[derive(Debug, thiserror::Error)]
pub enum CausewayError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

pub type CausewayResult<T> = Result<T, CausewayError>;
