//! In-memory collaborator fakes for audit tests

use std::collections::HashMap;

use async_trait::async_trait;

use modaudit::audit::classifier::{RefInfo, RemoteRefSet};
use modaudit::remote::error::RemoteError;
use modaudit::remote::forge::ReleaseRegistry;
use modaudit::remote::git::RemoteRefProvider;

/// Fake forge registry serving canned current-release versions
#[derive(Default)]
pub struct FakeForge {
    releases: HashMap<String, String>,
}

impl FakeForge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_release(mut self, module: &str, version: &str) -> Self {
        self.releases.insert(module.to_string(), version.to_string());
        self
    }
}

#[async_trait]
impl ReleaseRegistry for FakeForge {
    async fn current_release(&self, module: &str) -> Result<String, RemoteError> {
        self.releases
            .get(module)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(module.to_string()))
    }
}

/// Fake Git ref provider serving canned `RemoteRefSet`s keyed by URL
#[derive(Default)]
pub struct FakeGit {
    remotes: HashMap<String, RemoteRefSet>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote(mut self, url: &str, refs: RemoteRefSet) -> Self {
        self.remotes.insert(url.to_string(), refs);
        self
    }
}

#[async_trait]
impl RemoteRefProvider for FakeGit {
    async fn ls_remote(&self, url: &str) -> Result<RemoteRefSet, RemoteError> {
        self.remotes.get(url).cloned().ok_or_else(|| RemoteError::GitCommand {
            stderr: format!("fatal: unable to access '{url}'"),
        })
    }
}

/// Builds a `RemoteRefSet` from branch names, tag names and a head sha.
pub fn remote_refs(branches: &[&str], tags: &[&str], head_sha: &str) -> RemoteRefSet {
    RemoteRefSet {
        branches: branches
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), RefInfo::new(format!("{i:040x}"))))
            .collect(),
        tags: tags
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), RefInfo::new(format!("{i:040x}"))))
            .collect(),
        head: RefInfo::new(head_sha),
    }
}
