//! Parser for the delimited function-call format used by tool-calling LLMs.
//!
//! A model that follows [`constants::RESPONSE_FORMAT`] ends its response with
//! exactly one function call framed by fixed string markers, with any
//! reasoning text before the call block. [`DelimitedParser`] extracts that
//! final call into a [`ParsedCall`] holding the leading thought, the function
//! name, and an ordered map of argument name/value pairs.

pub mod constants;
pub mod errors;
pub mod parsers;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use constants::{ARG_SEP, BEGIN_CALL, END_CALL, RESPONSE_FORMAT, VALUE_SEP};
pub use errors::{ParserError, ParserResult};
pub use parsers::DelimitedParser;
pub use traits::CallParser;
pub use types::ParsedCall;
