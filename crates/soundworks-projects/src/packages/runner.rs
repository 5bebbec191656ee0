//! External command execution

use async_trait::async_trait;
use camino::Utf8Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Runs external commands inside a project
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, failing on a non-zero exit status
    async fn run(&self, cwd: &Utf8Path, program: &str, args: &[String]) -> Result<()>;
}

/// Runs commands as child processes sharing the terminal
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill commands still running after `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, cwd: &Utf8Path, program: &str, args: &[String]) -> Result<()> {
        let executable = which::which(program).map_err(|_| Error::command_not_found(program))?;
        let command_line = command_line(program, args);

        info!("Running `{}` in {}", command_line, cwd);
        debug!("Resolved {} to {}", program, executable.display());

        let mut child = Command::new(executable)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::process_execution(format!("Failed to spawn `{}`: {}", command_line, e)))?;

        let status = match self.timeout {
            Some(limit) => {
                let waited = tokio::time::timeout(limit, child.wait()).await;
                match waited {
                    Ok(status) => status?,
                    Err(_) => {
                        child.kill().await?;
                        return Err(Error::timeout(command_line, limit.as_secs()));
                    }
                }
            }
            None => child.wait().await?,
        };

        if status.success() {
            Ok(())
        } else {
            Err(Error::process_execution(format!(
                "`{}` failed with exit code: {:?}",
                command_line,
                status.code()
            )))
        }
    }
}

/// Printable form of a command
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
