use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}
