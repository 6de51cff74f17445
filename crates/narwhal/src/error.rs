#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("must assign nonzero width to at least one node")]
    DegenerateWidth,
    #[error("invalid configuration for `{operator}`: {message}")]
    Configuration {
        operator: &'static str,
        message: String,
    },
    #[error("unknown coordinate operator: {name}")]
    UnknownOperator { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
