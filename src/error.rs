/// Result alias carrying the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The strip or the configuration cannot be used at all, e.g. zero pixels.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// An effect's geometry or a pixel index does not fit the strip.
    #[error("{what} {value} out of range (limit {limit})")]
    OutOfRange {
        what: &'static str,
        value: usize,
        limit: usize,
    },
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("cannot load config: {0}")]
    Config(String),
}
