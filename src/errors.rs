use thiserror::Error;

/// Result type for call parser operations
pub type ParserResult<T> = Result<T, ParserError>;

/// Errors that can occur while extracting a function call
#[derive(Debug, Error)]
pub enum ParserError {
    /// A marker is missing, or the begin marker does not come strictly
    /// before the end marker. Each field holds the byte index of the last
    /// occurrence of that marker, or `None` when it was not found.
    #[error(
        "could not find function call markers in text: begin marker at {begin:?}, end marker at {end:?}"
    )]
    MalformedCall {
        begin: Option<usize>,
        end: Option<usize>,
    },

    /// The call section between the markers yielded no segments at all.
    #[error("function call section is empty")]
    EmptyCall,
}
