//! Audit driver: checks declared dependencies and collects findings

use std::collections::HashSet;

use tracing::debug;

use crate::audit::classifier::{RefCheck, classify};
use crate::audit::error::AuditError;
use crate::audit::formats::FormatRegistry;
use crate::manifest::{Dependency, Source};
use crate::remote::forge::ReleaseRegistry;
use crate::remote::git::RemoteRefProvider;

/// A reported mismatch between a declared/installed reference and the
/// resolved latest available one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedFinding {
    pub name: String,
    /// Declared ref or installed version from the manifest.
    pub declared: String,
    /// Latest resolved upstream value.
    pub latest: String,
}

/// Everything one audit pass produced.
///
/// Findings and errors are both in manifest order. Errors never abort the
/// run; every non-ignored dependency is checked.
#[derive(Debug, Default)]
pub struct AuditOutcome {
    pub findings: Vec<OutdatedFinding>,
    pub errors: Vec<AuditError>,
}

impl AuditOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Checks declared dependencies against their upstream sources.
pub struct Auditor<R, G> {
    forge: R,
    git: G,
    formats: FormatRegistry,
    ignore: HashSet<String>,
}

impl<R, G> Auditor<R, G>
where
    R: ReleaseRegistry,
    G: RemoteRefProvider,
{
    pub fn new(forge: R, git: G, formats: FormatRegistry, ignore: HashSet<String>) -> Self {
        Self {
            forge,
            git,
            formats,
            ignore,
        }
    }

    /// Audits `dependencies`, checking independent entries concurrently.
    ///
    /// Results are collected back into manifest order so output stays
    /// reproducible regardless of completion order.
    pub async fn audit(&self, dependencies: &[Dependency]) -> AuditOutcome {
        let checks = dependencies
            .iter()
            .filter(|dep| {
                let ignored = self.ignore.contains(&dep.name);
                if ignored {
                    debug!("skipping ignored dependency {}", dep.name);
                }
                !ignored
            })
            .map(|dep| self.check_dependency(dep));

        let mut outcome = AuditOutcome::default();
        for result in futures::future::join_all(checks).await {
            match result {
                Ok(Some(finding)) => outcome.findings.push(finding),
                Ok(None) => {}
                Err(err) => outcome.errors.push(err),
            }
        }
        outcome
    }

    async fn check_dependency(
        &self,
        dep: &Dependency,
    ) -> Result<Option<OutdatedFinding>, AuditError> {
        match &dep.source {
            Source::Registry { installed } => self.check_registry(dep, installed).await,
            Source::Git { url, reference } => {
                self.check_git(dep, url, reference.as_deref()).await
            }
        }
    }

    async fn check_registry(
        &self,
        dep: &Dependency,
        installed: &str,
    ) -> Result<Option<OutdatedFinding>, AuditError> {
        let current = self
            .forge
            .current_release(&dep.name)
            .await
            .map_err(|source| AuditError::Registry {
                name: dep.name.clone(),
                source,
            })?;

        Ok(finding(dep, installed, current))
    }

    async fn check_git(
        &self,
        dep: &Dependency,
        url: &str,
        reference: Option<&str>,
    ) -> Result<Option<OutdatedFinding>, AuditError> {
        let refs = self
            .git
            .ls_remote(url)
            .await
            .map_err(|source| AuditError::GitRemote {
                name: dep.name.clone(),
                source,
            })?;

        match classify(reference, &refs, &self.formats) {
            RefCheck::Skip => Ok(None),
            // A compare outcome implies a declared ref was present.
            RefCheck::CompareToTag(latest) | RefCheck::CompareToHeadCommit(latest) => {
                let declared = reference.unwrap_or_default();
                Ok(finding(dep, declared, latest))
            }
            RefCheck::Unresolvable => Err(AuditError::UnresolvableRef(dep.name.clone())),
        }
    }
}

fn finding(dep: &Dependency, declared: &str, latest: String) -> Option<OutdatedFinding> {
    (declared != latest).then(|| OutdatedFinding {
        name: dep.name.clone(),
        declared: declared.to_string(),
        latest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::error::RemoteError;
    use crate::remote::forge::MockReleaseRegistry;
    use crate::remote::git::MockRemoteRefProvider;

    fn registry_dep(name: &str, installed: &str) -> Dependency {
        Dependency {
            name: name.to_string(),
            source: Source::Registry {
                installed: installed.to_string(),
            },
        }
    }

    fn auditor(
        forge: MockReleaseRegistry,
        git: MockRemoteRefProvider,
        ignore: &[&str],
    ) -> Auditor<MockReleaseRegistry, MockRemoteRefProvider> {
        Auditor::new(
            forge,
            git,
            FormatRegistry::default(),
            ignore.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[tokio::test]
    async fn outdated_registry_dependency_produces_finding() {
        let mut forge = MockReleaseRegistry::new();
        forge
            .expect_current_release()
            .returning(|_| Ok("9.4.0".to_string()));

        let outcome = auditor(forge, MockRemoteRefProvider::new(), &[])
            .audit(&[registry_dep("acme/stdlib", "9.0.0")])
            .await;

        assert_eq!(
            outcome.findings,
            vec![OutdatedFinding {
                name: "acme/stdlib".to_string(),
                declared: "9.0.0".to_string(),
                latest: "9.4.0".to_string(),
            }]
        );
        assert!(!outcome.has_errors());
    }

    #[tokio::test]
    async fn up_to_date_registry_dependency_produces_no_finding() {
        let mut forge = MockReleaseRegistry::new();
        forge
            .expect_current_release()
            .returning(|_| Ok("9.4.0".to_string()));

        let outcome = auditor(forge, MockRemoteRefProvider::new(), &[])
            .audit(&[registry_dep("acme/stdlib", "9.4.0")])
            .await;

        assert!(outcome.findings.is_empty());
        assert!(!outcome.has_errors());
    }

    #[tokio::test]
    async fn ignored_dependency_is_never_checked() {
        let mut forge = MockReleaseRegistry::new();
        forge.expect_current_release().never();

        let outcome = auditor(forge, MockRemoteRefProvider::new(), &["acme/stdlib"])
            .audit(&[registry_dep("acme/stdlib", "9.0.0")])
            .await;

        assert!(outcome.findings.is_empty());
        assert!(!outcome.has_errors());
    }

    #[tokio::test]
    async fn registry_failure_is_collected_and_run_continues() {
        let mut forge = MockReleaseRegistry::new();
        forge.expect_current_release().returning(|name| {
            if name == "acme/broken" {
                Err(RemoteError::NotFound(name.to_string()))
            } else {
                Ok("2.0.0".to_string())
            }
        });

        let outcome = auditor(forge, MockRemoteRefProvider::new(), &[])
            .audit(&[
                registry_dep("acme/broken", "1.0.0"),
                registry_dep("acme/stdlib", "1.0.0"),
            ])
            .await;

        // The failure does not stop the second dependency from being checked.
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].name, "acme/stdlib");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].dependency(), "acme/broken");
    }

    #[tokio::test]
    async fn git_remote_failure_is_collected() {
        let mut git = MockRemoteRefProvider::new();
        git.expect_ls_remote().returning(|_| {
            Err(RemoteError::GitCommand {
                stderr: "fatal: could not read from remote repository".to_string(),
            })
        });

        let dep = Dependency {
            name: "consul".to_string(),
            source: Source::Git {
                url: "https://github.com/acme/consul.git".to_string(),
                reference: Some("v1.0.0".to_string()),
            },
        };

        let outcome = auditor(MockReleaseRegistry::new(), git, &[]).audit(&[dep]).await;

        assert!(outcome.findings.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].dependency(), "consul");
    }

    #[tokio::test]
    async fn findings_preserve_manifest_order() {
        let mut forge = MockReleaseRegistry::new();
        forge
            .expect_current_release()
            .returning(|_| Ok("9.9.9".to_string()));

        let deps = vec![
            registry_dep("acme/a", "1.0.0"),
            registry_dep("acme/b", "1.0.0"),
            registry_dep("acme/c", "1.0.0"),
        ];

        let outcome = auditor(forge, MockRemoteRefProvider::new(), &[]).audit(&deps).await;

        let names: Vec<&str> = outcome.findings.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["acme/a", "acme/b", "acme/c"]);
    }
}
