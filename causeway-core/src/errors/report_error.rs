/// Evidence report errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("evidence collection was disabled for this searcher")]
    EvidenceNotCollected,
}
