//! Latest-ref resolution over a remote's tag set

use crate::audit::formats::FormatRegistry;

/// Placeholder returned when no registered strategy recognizes any tag.
///
/// This is a reporting value, not an error: the caller still prints a
/// diagnostic comparison line, and since the sentinel can never equal a real
/// ref the dependency will show up as outdated, which is itself diagnostic.
pub const UNDETERMINED_REF: &str = "undef (tags do not follow any known pattern)";

/// Resolves the latest ref from `tags` by trying each registered strategy in
/// registration order and returning the first non-empty result verbatim.
///
/// Results from different strategies are never blended within one call.
/// Returns [`UNDETERMINED_REF`] when every strategy yields nothing, including
/// for an empty tag set.
pub fn resolve_latest(formats: &FormatRegistry, tags: &[String]) -> String {
    formats
        .iter()
        .find_map(|(_, format)| format(tags))
        .unwrap_or_else(|| UNDETERMINED_REF.to_string())
}
