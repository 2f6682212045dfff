use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Parsed function call from model output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedCall {
    /// Free-form reasoning text preceding the call block, outer whitespace
    /// trimmed
    pub thought: String,
    /// Name of the function to call
    pub name: String,
    /// Argument name/value pairs in order of first appearance. A repeated
    /// name keeps its position and takes the last value.
    pub arguments: IndexMap<String, String>,
}
