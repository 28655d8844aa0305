//! Version-format strategies and their registration-ordered registry

use indexmap::IndexMap;
use semver::Version;

/// A named rule for picking the "latest" entry out of a set of tag strings.
///
/// Returns `None` when no tag matches the format, which tells the resolver
/// to try the next registered strategy.
pub type VersionFormat = Box<dyn Fn(&[String]) -> Option<String> + Send + Sync>;

/// Registration-ordered mapping from format name to strategy.
///
/// Strategies are tried in registration order, built-ins first. Registering
/// under an existing name replaces the strategy but keeps its original
/// position. The registry is meant to be fully populated before any
/// resolution pass begins; it is read-only afterwards.
pub struct FormatRegistry {
    formats: IndexMap<String, VersionFormat>,
}

impl FormatRegistry {
    /// Creates a registry with no strategies registered.
    pub fn empty() -> Self {
        Self {
            formats: IndexMap::new(),
        }
    }

    /// Registers a strategy under `name`. Last write wins.
    pub fn register<F>(&mut self, name: impl Into<String>, format: F)
    where
        F: Fn(&[String]) -> Option<String> + Send + Sync + 'static,
    {
        self.formats.insert(name.into(), Box::new(format));
    }

    /// Iterates `(name, strategy)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionFormat)> {
        self.formats.iter().map(|(name, f)| (name.as_str(), f))
    }
}

impl Default for FormatRegistry {
    /// Registry with the built-in `"semver"` strategy.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("semver", semver_format);
        registry
    }
}

/// The built-in semver strategy.
///
/// Strips an optional leading `v` from each tag and parses the remainder as a
/// semantic version. Tags that fail to parse are excluded from consideration,
/// not reported. Among the parsed versions the maximum under semver
/// precedence wins; the returned value is the *first* original tag string
/// that normalizes to that maximum, so with e.g. `["1.2.0", "v1.2.0"]` the
/// result depends on input order. That tie-break is a known simplification.
pub fn semver_format(tags: &[String]) -> Option<String> {
    let max = tags.iter().filter_map(|tag| parse_tag(tag)).max()?;
    tags.iter()
        .find(|tag| parse_tag(tag).as_ref() == Some(&max))
        .cloned()
}

fn parse_tag(tag: &str) -> Option<Version> {
    Version::parse(tag.strip_prefix('v').unwrap_or(tag)).ok()
}
