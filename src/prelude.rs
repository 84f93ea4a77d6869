use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorsIcbrt{
    #[error("invalid input range: {0}")]
    InvalidInputRange(&'static str),
    #[error("misconfiguration: {0}")]
    Misconfiguration(&'static str),
}
