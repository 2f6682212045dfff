//! Fixed wire markers for the delimited function-call format.
//!
//! The four marker strings are part of the public contract between the
//! prompt and the parser and must match byte-for-byte on both sides.

/// Opens the function call block. Located via last-occurrence search.
pub const BEGIN_CALL: &str = "----BEGIN_FUNCTION_CALL----";

/// Closes the function call block. Located via last-occurrence search.
pub const END_CALL: &str = "----END_FUNCTION_CALL----";

/// Separates the function name and each argument record inside the block.
pub const ARG_SEP: &str = "----ARG----";

/// Separates an argument's name from its value inside one record. Only the
/// first occurrence within a record is significant.
pub const VALUE_SEP: &str = "----VALUE----";

/// Human-readable template of the wire format, for inclusion in the system
/// prompt of the model that produces the calls.
pub const RESPONSE_FORMAT: &str = "\
your_thoughts_here
...
----BEGIN_FUNCTION_CALL----
function_name
----ARG----
arg1_name
----VALUE----
arg1_value (can be multiline)
----ARG----
arg2_name
----VALUE----
arg2_value (can be multiline)
...
----END_FUNCTION_CALL----
";
