use indexmap::IndexMap;

use crate::{
    constants::{ARG_SEP, BEGIN_CALL, END_CALL, VALUE_SEP},
    errors::{ParserError, ParserResult},
    traits::CallParser,
    types::ParsedCall,
};

/// Delimited format parser for function calls
///
/// Handles the plain-text delimiter format:
/// `{thought}----BEGIN_FUNCTION_CALL----{name}----ARG----{arg_name}----VALUE----{arg_value}...----END_FUNCTION_CALL----`
///
/// Features:
/// - Fixed string delimiters, no JSON or XML payload
/// - Multiline argument values
/// - Last-occurrence marker search, so reasoning text that mentions the
///   markers does not disturb extraction
pub struct DelimitedParser;

impl DelimitedParser {
    /// Create a new delimited format parser
    pub fn new() -> Self {
        Self
    }
}

impl Default for DelimitedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CallParser for DelimitedParser {
    fn parse_complete(&self, output: &str) -> ParserResult<ParsedCall> {
        // Only the final marker pair is authoritative; earlier occurrences
        // may be the model restating the format.
        let begin = output.rfind(BEGIN_CALL);
        let end = output.rfind(END_CALL);
        let (begin_idx, end_idx) = match (begin, end) {
            (Some(b), Some(e)) if b < e => (b, e),
            _ => return Err(ParserError::MalformedCall { begin, end }),
        };

        let thought = output[..begin_idx].trim().to_string();

        // Overlapping markers leave an empty call section.
        let call_section = output
            .get(begin_idx + BEGIN_CALL.len()..end_idx)
            .unwrap_or_default()
            .trim();

        let mut segments = call_section.split(ARG_SEP);
        let name = segments
            .next()
            .ok_or(ParserError::EmptyCall)?
            .trim()
            .to_string();

        let mut arguments = IndexMap::new();
        for segment in segments {
            let Some((arg_name, arg_value)) = segment.split_once(VALUE_SEP) else {
                tracing::warn!("Argument segment without value separator - skipping");
                continue;
            };
            arguments.insert(arg_name.trim().to_string(), arg_value.trim().to_string());
        }

        Ok(ParsedCall {
            thought,
            name,
            arguments,
        })
    }

    fn has_call_markers(&self, text: &str) -> bool {
        text.contains(BEGIN_CALL)
    }
}
