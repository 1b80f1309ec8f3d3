use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unknown report format '{0}'. Expected 'text' or 'json' in PRICE_REPORT_FORMAT")]
    UnknownFormat(String),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode report snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
