use thiserror::Error;

/// Canonical result for the whole workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required sequence or transform argument was absent.
    #[error("argument `{0}` must not be null")]
    ArgumentNull(&'static str),

    /// An unseeded reduction was applied to an empty source.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// Checked summation left the representable range of the accumulator.
    #[error("arithmetic overflow while summing {0} values")]
    Overflow(&'static str),

    // Producers fault their cursors through this variant. Operators never
    // construct, catch, or rewrap it; it crosses them untouched via `?`.
    #[error(transparent)]
    Source(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wrap an arbitrary producer failure so it can travel through a cursor.
    pub fn source<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Error::Source(err.into())
    }
}
