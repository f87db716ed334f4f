use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconsprite operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconsprite::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(iconsprite::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(iconsprite::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SpriteError>;
