use crate::{errors::ParserResult, types::ParsedCall};

/// Core trait for function-call format parsers
pub trait CallParser: Send + Sync {
    /// Parse a single function call from complete model output
    fn parse_complete(&self, output: &str) -> ParserResult<ParsedCall>;

    /// Check if text contains this parser's call markers
    fn has_call_markers(&self, text: &str) -> bool;
}
