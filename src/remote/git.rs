//! Remote ref listing via the `git ls-remote` CLI

#[cfg(test)]
use mockall::automock;

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::audit::classifier::{RefInfo, RemoteRefSet};
use crate::remote::error::RemoteError;

/// Trait for fetching the advertised references of a remote repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RemoteRefProvider: Send + Sync {
    /// Returns a fresh snapshot of the remote's branches, tags and head
    async fn ls_remote(&self, url: &str) -> Result<RemoteRefSet, RemoteError>;
}

/// Ref provider backed by the system `git` binary
pub struct GitLsRemote {
    program: PathBuf,
    timeout: Duration,
}

impl GitLsRemote {
    pub fn new(timeout: Duration) -> Self {
        Self::with_program("git", timeout)
    }

    /// Uses `program` instead of the `git` found on PATH.
    pub fn with_program(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl Default for GitLsRemote {
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::config::GIT_TIMEOUT_SECS))
    }
}

#[async_trait::async_trait]
impl RemoteRefProvider for GitLsRemote {
    async fn ls_remote(&self, url: &str) -> Result<RemoteRefSet, RemoteError> {
        debug!("running git ls-remote for {}", url);

        // kill_on_drop so a timed-out command does not leave the child
        // running after the audit moves on.
        let output = Command::new(&self.program)
            .args(["ls-remote", url])
            .stdin(Stdio::null())
            .env("GIT_TERMINAL_PROMPT", "0")
            .kill_on_drop(true)
            .output();

        let output = timeout(self.timeout, output)
            .await
            .map_err(|_| RemoteError::Timeout {
                secs: self.timeout.as_secs(),
            })??;

        if !output.status.success() {
            return Err(RemoteError::GitCommand {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(parse_ls_remote(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parses `git ls-remote` output into a [`RemoteRefSet`].
///
/// Each line is `<sha>\t<refname>`. `HEAD` becomes the head entry,
/// `refs/heads/*` become branches and `refs/tags/*` become tags. For
/// annotated tags the peeled `<tag>^{}` line carries the commit hash and
/// overrides the tag-object hash advertised on the plain line.
pub fn parse_ls_remote(output: &str) -> RemoteRefSet {
    let mut refs = RemoteRefSet::default();

    for line in output.lines() {
        let Some((sha, name)) = line.split_once('\t') else {
            continue;
        };

        if name == "HEAD" {
            refs.head = RefInfo::new(sha);
        } else if let Some(branch) = name.strip_prefix("refs/heads/") {
            refs.branches.insert(branch.to_string(), RefInfo::new(sha));
        } else if let Some(tag) = name.strip_prefix("refs/tags/") {
            let tag = tag.strip_suffix("^{}").unwrap_or(tag);
            refs.tags.insert(tag.to_string(), RefInfo::new(sha));
        }
    }

    refs
}
