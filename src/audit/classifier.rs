//! Declared-ref classification against a remote's advertised references

use indexmap::IndexMap;

use crate::audit::formats::FormatRegistry;
use crate::audit::resolver::resolve_latest;

/// Metadata for a single advertised reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefInfo {
    /// Commit hash the reference points at.
    pub sha: String,
}

impl RefInfo {
    pub fn new(sha: impl Into<String>) -> Self {
        Self { sha: sha.into() }
    }
}

/// Snapshot of a remote repository's advertised references.
///
/// Produced fresh per dependency check and read-only once obtained.
#[derive(Debug, Clone, Default)]
pub struct RemoteRefSet {
    pub branches: IndexMap<String, RefInfo>,
    pub tags: IndexMap<String, RefInfo>,
    /// Default-branch metadata, including its commit hash.
    pub head: RefInfo,
}

/// Outcome of classifying a declared ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefCheck {
    /// No version pin to audit (no ref declared, or the ref is a branch;
    /// branch tracking is an intentional floating reference).
    Skip,
    /// The declared ref is a tag; compare it to the resolved latest tag.
    CompareToTag(String),
    /// The declared ref looks like a commit hash; compare it to the remote
    /// head commit.
    CompareToHeadCommit(String),
    /// Neither a known branch, a known tag, nor a commit-hash pattern.
    Unresolvable,
}

/// Classifies `declared` against the remote's refs.
///
/// Rules are applied in order: absent ref → skip, branch → skip, tag →
/// resolve latest over the remote's tag names, 40-char lowercase hex →
/// compare against head, anything else is unresolvable and must be surfaced
/// as a hard per-dependency error by the caller. The branch check precedes
/// the tag check, so a ref naming both is treated as a branch.
pub fn classify(
    declared: Option<&str>,
    refs: &RemoteRefSet,
    formats: &FormatRegistry,
) -> RefCheck {
    let Some(declared) = declared.filter(|r| !r.is_empty()) else {
        return RefCheck::Skip;
    };

    if refs.branches.contains_key(declared) {
        return RefCheck::Skip;
    }

    if refs.tags.contains_key(declared) {
        let tags: Vec<String> = refs.tags.keys().cloned().collect();
        return RefCheck::CompareToTag(resolve_latest(formats, &tags));
    }

    if is_commit_sha(declared) {
        return RefCheck::CompareToHeadCommit(refs.head.sha.clone());
    }

    RefCheck::Unresolvable
}

/// A full 40-character lowercase hexadecimal string.
fn is_commit_sha(reference: &str) -> bool {
    reference.len() == 40
        && reference
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
