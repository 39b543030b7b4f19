//! Development dependency installation through the project's package manager
//!
//! Shows the command being executed and streams its output, killing the
//! process if it runs past the timeout.

use super::check::{check_package_manager, PackageManager};
use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for installation (5 minutes)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(300);

/// Install `packages` as development dependencies of the project in `root`
pub async fn install_dev_dependencies(
    root: &Path,
    manager: PackageManager,
    packages: &[&str],
) -> Result<()> {
    let cmd = manager.install_command(packages);
    let fail = |detail: String| ScaffoldError::Install {
        command: cmd.clone(),
        detail,
    };

    let probe = check_package_manager(manager);
    if !probe.available {
        return Err(fail(format!("{} is not installed or not on PATH", probe.name)));
    }
    tracing::debug!(manager = %manager, version = ?probe.version, "installing {:?}", packages);

    println!();
    println!("{} {}", "Running:".dimmed(), cmd.yellow());
    println!();

    let mut child = TokioCommand::new(manager.binary())
        .args(manager.install_args(packages))
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| fail(e.to_string()))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| fail("failed to capture stdout".to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| fail("failed to capture stderr".to_string()))?;

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    // Stream output until stdout closes
    let output_task = async {
        let mut stderr_open = true;
        loop {
            tokio::select! {
                line = stdout_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => break,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            break;
                        }
                    }
                }
                line = stderr_reader.next_line(), if stderr_open => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => stderr_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_open = false;
                        }
                    }
                }
            }
        }
    };

    if timeout(INSTALL_TIMEOUT, output_task).await.is_err() {
        let _ = child.kill().await;
        println!();
        return Err(fail(format!(
            "timed out after {} seconds",
            INSTALL_TIMEOUT.as_secs()
        )));
    }

    match timeout(Duration::from_secs(5), child.wait()).await {
        Ok(Ok(status)) => {
            println!();
            if status.success() {
                Ok(())
            } else {
                Err(fail(format!(
                    "exited with code {}",
                    status.code().unwrap_or(-1)
                )))
            }
        }
        Ok(Err(e)) => Err(fail(format!("failed to wait for installer: {}", e))),
        Err(_) => {
            let _ = child.kill().await;
            Err(fail("installer process hung".to_string()))
        }
    }
}
