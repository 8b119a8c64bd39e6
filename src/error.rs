use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hexmap operations.
///
/// Compiling map source never fails; these errors come from the file,
/// manifest and command line layers around the compiler.
#[derive(Error, Diagnostic, Debug)]
pub enum HexMapError {
    #[error("IO error: {0}")]
    #[diagnostic(code(hexmap::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(hexmap::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(hexmap::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(hexmap::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, HexMapError>;
