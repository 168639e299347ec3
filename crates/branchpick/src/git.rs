use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{BranchpickError, Result};
use crate::session::BranchBackend;

/// Runs `git branch --no-color` and returns its stdout.
pub fn list_branches(work_dir: Option<&Path>) -> Result<String> {
    let args = vec![OsString::from("branch"), OsString::from("--no-color")];
    let output = run_git_capture(work_dir, args)?;
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Runs `git checkout <branch>` and returns what git printed.
///
/// git reports the switch on stderr, so stdout and stderr are joined.
pub fn checkout_branch(work_dir: Option<&Path>, branch: &str) -> Result<String> {
    let args = vec![OsString::from("checkout"), OsString::from(branch)];
    let output = run_git_capture(work_dir, args)?;
    Ok(joined_output(&output))
}

/// git run from a fixed directory, or from the process working directory.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    work_dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(path.into()),
        }
    }

    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }
}

impl BranchBackend for GitCli {
    fn list_branches(&self) -> Result<String> {
        list_branches(self.work_dir())
    }

    fn checkout(&self, branch: &str) -> Result<String> {
        checkout_branch(self.work_dir(), branch)
    }
}

fn joined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut text = stdout.trim_end().to_string();
    let stderr = stderr.trim_end();
    if !stderr.is_empty() {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(stderr);
    }
    text
}

fn run_git_capture(work_dir: Option<&Path>, args: Vec<OsString>) -> Result<Output> {
    let command_line = format!("git {}", args_to_string(&args));
    tracing::debug!(command = %command_line, work_dir = ?work_dir, "running git");

    let output = git_command(work_dir)
        .args(&args)
        .output()
        .map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                BranchpickError::GitMissing
            } else {
                BranchpickError::Io(err)
            }
        })?;
    if output.status.success() {
        return Ok(output);
    }

    tracing::debug!(command = %command_line, status = %output.status, "git failed");
    Err(BranchpickError::GitCommand {
        command: command_line,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

fn args_to_string(args: &[OsString]) -> String {
    args.iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

fn git_command(work_dir: Option<&Path>) -> Command {
    let mut command = Command::new("git");
    if let Some(dir) = work_dir {
        command.arg("-C").arg(dir);
    }
    command
}
