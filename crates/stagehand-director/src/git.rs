use stagehand_core::error::Error;
use stagehand_core::play::GitValidation;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A snapshot of the repository state as seen by the status provider.
#[derive(Debug, Clone)]
pub struct RepoStatus {
    pub current_branch: String,
    pub clean: bool,
}

/// Boundary to the repository-status collaborator. The production
/// implementation shells out to git; tests script it.
pub trait StatusProvider {
    fn status(&self) -> Result<RepoStatus, Error>;
}

/// Status provider backed by `git status --porcelain --branch`.
pub struct GitCli {
    cwd: PathBuf,
}

impl GitCli {
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
        }
    }
}

impl StatusProvider for GitCli {
    fn status(&self) -> Result<RepoStatus, Error> {
        let output = Command::new("git")
            .args(["status", "--porcelain", "--branch"])
            .current_dir(&self.cwd)
            .output()
            .map_err(Error::GitStatus)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not a git repository") {
                return Err(Error::NotARepository);
            }
            return Err(Error::GitStatus(std::io::Error::other(
                stderr.trim().to_string(),
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut lines = stdout.lines();
        let branch = parse_branch_header(lines.next().unwrap_or_default());
        let clean = lines.all(|line| line.trim().is_empty());

        tracing::debug!(branch = %branch, clean, "queried repository status");

        Ok(RepoStatus {
            current_branch: branch,
            clean,
        })
    }
}

/// Extract the branch name from a porcelain `## ` header such as
/// `## main...origin/main [ahead 1]` or `## No commits yet on main`.
fn parse_branch_header(header: &str) -> String {
    let header = header.strip_prefix("## ").unwrap_or(header);
    let header = header.strip_prefix("No commits yet on ").unwrap_or(header);
    header
        .split("...")
        .next()
        .unwrap_or(header)
        .trim()
        .to_string()
}

/// Run a play's git preconditions in fixed order: repository existence,
/// then cleanliness, then branch. Each check issues its own status
/// query; a no-op spec issues none and succeeds without touching git.
pub fn validate(spec: &GitValidation, provider: &dyn StatusProvider) -> Result<(), Error> {
    if spec.is_noop() {
        return Ok(());
    }

    // Repository existence: any spec with a meaningful field requires a
    // status to be obtainable at all.
    provider.status()?;

    if spec.clean == Some(true) {
        let status = provider.status()?;
        if !status.clean {
            return Err(Error::DirtyWorkingTree);
        }
    }

    if let Some(expected) = spec.branch.as_deref() {
        let status = provider.status()?;
        if status.current_branch != expected {
            return Err(Error::BranchMismatch {
                expected: expected.to_string(),
                actual: status.current_branch,
            });
        }
    }

    Ok(())
}
