use thiserror::Error;

/// Unified error type for the chatbox crate.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No catalog entry carries the requested tag.
    #[error("no intent tagged `{tag}` in the catalog")]
    UnknownTag { tag: String },
    /// The first entry for the tag has nothing to choose from.
    #[error("intent `{tag}` has no responses")]
    EmptyResponses { tag: String },
    /// The classifier found no evidence for any tag.
    #[error("could not classify input")]
    Unclassified,
    /// A line of input could not be used at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The intent catalog could not be read or parsed.
    #[error("catalog error: {0}")]
    Catalog(String),
    /// Configuration could not be read, parsed, or overridden.
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`ChatError`].
pub type ChatResult<T> = Result<T, ChatError>;
