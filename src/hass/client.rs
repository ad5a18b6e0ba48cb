/// Bounded invocation of the `hass-cli` binary.
///
/// Every call spawns a fresh process with the caller's environment inherited
/// untouched, drains stdout and stderr on helper threads so a chatty child can
/// never block on a full pipe, and polls for exit until the deadline passes.
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use super::errors::HassError;

/// Binary looked up on PATH when no override is given.
pub const DEFAULT_BINARY: &str = "hass-cli";

/// Default bound on a single `hass-cli` call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// How often a running child is checked for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Handle to the external `hass-cli` tool.
#[derive(Debug, Clone)]
pub struct HassCli {
    binary: PathBuf,
    timeout: Duration,
}

impl HassCli {
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    /// The binary this handle invokes.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run `hass-cli -o json <args>` and parse stdout as JSON.
    ///
    /// # Errors
    ///
    /// Any [`HassError`]: missing binary, timeout, non-zero exit, or stdout
    /// that is not JSON.
    pub fn json(&self, args: &[&str]) -> Result<serde_json::Value, HassError> {
        let mut full = vec!["-o", "json"];
        full.extend_from_slice(args);
        let stdout = self.run(&full)?;
        serde_json::from_str(&stdout).map_err(HassError::InvalidJson)
    }

    /// Report the version line printed by `hass-cli --version`.
    ///
    /// # Errors
    ///
    /// Same process-level failures as [`HassCli::json`].
    pub fn version(&self) -> Result<String, HassError> {
        let stdout = self.run(&["--version"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("unknown version")
            .to_owned())
    }

    /// Run the binary with `args`, returning stdout on a zero exit.
    ///
    /// # Errors
    ///
    /// Returns [`HassError::NotInstalled`] when the binary cannot be found,
    /// [`HassError::Timeout`] when the deadline passes (the child is killed),
    /// and a stderr-classified error on non-zero exit.
    pub fn run(&self, args: &[&str]) -> Result<String, HassError> {
        let start = Instant::now();
        debug!(binary = %self.binary.display(), ?args, "spawning hass-cli");

        let mut child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => HassError::NotInstalled,
                _ => HassError::Io(e),
            })?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let Some(status) = wait_with_deadline(&mut child, self.timeout)? else {
            let _ = child.kill();
            let _ = child.wait();
            debug!(timeout = ?self.timeout, "hass-cli timed out, killed");
            return Err(HassError::timeout());
        };

        let stdout = collect(stdout);
        let stderr = collect(stderr);
        debug!(
            status = ?status.code(),
            elapsed = ?start.elapsed(),
            stdout_bytes = stdout.len(),
            "hass-cli finished"
        );

        if !status.success() {
            return Err(HassError::from_stderr(&stderr));
        }
        Ok(stdout)
    }
}

/// Poll `child` until it exits or `timeout` elapses. `None` means timed out.
///
/// A timeout too large to represent as an `Instant` means no deadline.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Result<Option<ExitStatus>, HassError> {
    let deadline = Instant::now().checked_add(timeout);
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

// Reader threads are detached on timeout; a grandchild still holding the pipe
// must not keep us waiting past the deadline.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn collect(handle: JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}
