//! Parser implementations for the supported call formats

pub mod delimited;

// Re-export parser types for convenience
pub use delimited::DelimitedParser;
