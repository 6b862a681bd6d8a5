use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HeaderError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("conversion error: {0}")]
    Conversion(#[from] http::Error),
}

impl HeaderError {
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    #[inline]
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }
}

pub type Result<T> = std::result::Result<T, HeaderError>;
