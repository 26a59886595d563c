use thiserror::Error;

#[derive(Error, Debug)]
pub enum CafeError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal too small: {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CafeError>;
