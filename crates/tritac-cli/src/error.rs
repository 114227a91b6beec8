//! Console shell errors.

/// Errors that can occur while running the console game loop.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The human entered something that is not a number.
    #[error("malformed move input: \"{input}\"")]
    MalformedInput {
        /// The offending input line.
        input: String,
    },

    /// Input closed before the game reached a terminal state.
    #[error("input closed before the game finished")]
    InputClosed,

    /// The engine produced no move for an ongoing position.
    #[error("engine produced no move for an ongoing position")]
    NoMove,
}
