//! Child process supervision.
//!
//! Tracks spawned service processes and tears them down on shutdown:
//! graceful termination first, then a forced kill for any child that has
//! not exited within the grace period. Shutdown is idempotent.

use std::path::Path;
use std::time::Duration;

use tokio::process::{Child, Command};

/// How long a child may take to exit after the termination signal before
/// it is killed.
pub const GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Tracked service processes with ordered, idempotent shutdown.
#[derive(Default)]
pub struct Supervisor {
    children: Vec<(String, Child)>,
    shut_down: bool,
}

impl Supervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `program` with `args` and track it for shutdown.
    pub fn spawn(&mut self, name: &str, program: &Path, args: &[&str]) -> std::io::Result<()> {
        let child = Command::new(program).args(args).spawn()?;
        tracing::info!(name, pid = child.id(), "Started process");
        self.children.push((name.to_string(), child));
        Ok(())
    }

    /// Number of tracked children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Terminate every tracked child. A second call while or after a
    /// shutdown is a no-op.
    pub async fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        tracing::info!("Shutting down processes");
        for (name, child) in &mut self.children {
            if let Ok(Some(status)) = child.try_wait() {
                tracing::info!(name = name.as_str(), %status, "Process already exited");
                continue;
            }
            terminate(name, child).await;
        }
        tracing::info!("All processes stopped");
    }
}

/// Signal the child to terminate, wait up to [`GRACE_PERIOD`], then kill.
async fn terminate(name: &str, child: &mut Child) {
    send_term(child);

    match tokio::time::timeout(GRACE_PERIOD, child.wait()).await {
        Ok(Ok(status)) => {
            tracing::info!(name, %status, "Process exited");
        }
        Ok(Err(e)) => {
            tracing::error!(name, error = %e, "Failed to wait for process");
        }
        Err(_) => {
            tracing::warn!(name, "Process unresponsive, killing");
            if let Err(e) = child.kill().await {
                tracing::error!(name, error = %e, "Failed to kill process");
            }
        }
    }
}

/// Ask the child to exit: SIGTERM on Unix so it can shut down cleanly.
#[cfg(unix)]
fn send_term(child: &mut Child) {
    if let Some(pid) = child.id() {
        unsafe {
            libc::kill(pid as libc::pid_t, libc::SIGTERM);
        }
    }
}

/// No graceful termination signal on this platform; start the kill and
/// let `terminate` collect the exit status.
#[cfg(not(unix))]
fn send_term(child: &mut Child) {
    let _ = child.start_kill();
}
