use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiError {
    //==================================================
    // Parsing errors
    //==================================================
    #[error("Invalid {0} expression '{1}'")]
    InvalidExpression(&'static str, String),

    #[error("Unknown {0} unit '{1}'")]
    UnknownUnit(&'static str, String),
}

pub type SiResult<T> = Result<T, SiError>;
