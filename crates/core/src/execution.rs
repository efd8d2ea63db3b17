use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::config::DEFAULT_SHELL;
use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs one directive command and returns its standard output.
///
/// Implementations must give up once `deadline` has passed.
pub trait CommandRunner {
    /// # Errors
    ///
    /// Returns an error if the command cannot be started, exits unsuccessfully
    /// or is still running at `deadline`.
    fn run(&self, command: &str, deadline: Instant) -> Result<Vec<u8>>;
}

impl<F> CommandRunner for F
where
    F: Fn(&str, Instant) -> Result<Vec<u8>>,
{
    fn run(&self, command: &str, deadline: Instant) -> Result<Vec<u8>> {
        self(command, deadline)
    }
}

/// Runs commands through `<shell> -c <command>`.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, deadline: Instant) -> Result<Vec<u8>> {
        let Some(budget) = deadline.checked_duration_since(Instant::now()) else {
            return Err(Error::DeadlineElapsed);
        };

        debug!("Running `{}` with `{} -c`", command, self.shell);
        let mut child = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Drain both pipes while waiting so a chatty command cannot block on a full pipe.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match wait_until(&mut child, deadline)? {
            Some(status) => status,
            None => {
                warn!("Command `{}` exceeded its deadline, killing it", command);
                // The child may have exited between the last poll and the kill.
                let _ = child.kill();
                child.wait()?;
                return Err(Error::DeadlineExceeded { timeout: budget });
            }
        };

        // Background processes can hold the pipes open after the shell exits.
        let stdout = collect(stdout, deadline, budget)?;
        let stderr = collect(stderr, deadline, budget)?;

        if status.success() {
            Ok(stdout)
        } else {
            Err(Error::SubProcessExit {
                status: status.to_string(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            })
        }
    }
}

fn wait_until(child: &mut Child, deadline: Instant) -> Result<Option<std::process::ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }

        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }

        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<Receiver<std::io::Result<Vec<u8>>>> {
    pipe.map(|mut pipe| {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let result = pipe.read_to_end(&mut buffer).map(|_| buffer);
            // The receiver is gone once the deadline has been reported.
            let _ = sender.send(result);
        });
        receiver
    })
}

fn collect(
    receiver: Option<Receiver<std::io::Result<Vec<u8>>>>,
    deadline: Instant,
    budget: Duration,
) -> Result<Vec<u8>> {
    let Some(receiver) = receiver else {
        return Ok(Vec::new());
    };

    match receiver.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(result) => Ok(result?),
        Err(RecvTimeoutError::Timeout) => {
            warn!("Command output still open at the deadline");
            Err(Error::DeadlineExceeded { timeout: budget })
        }
        Err(RecvTimeoutError::Disconnected) => Err(Error::SubProcess(std::io::Error::other(
            "output reader thread panicked",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_seconds(seconds: u64) -> Instant {
        Instant::now() + Duration::from_secs(seconds)
    }

    #[test]
    fn test_shell_runner_captures_stdout() {
        let output = ShellRunner::default().run("echo hello", in_seconds(5)).unwrap();
        assert_eq!(output, b"hello\n");
    }

    #[test]
    fn test_shell_runner_ignores_stderr_on_success() {
        let output = ShellRunner::default()
            .run("echo visible; echo hidden 1>&2", in_seconds(5))
            .unwrap();
        assert_eq!(output, b"visible\n");
    }

    #[test]
    fn test_shell_runner_reports_failed_exit() {
        let result = ShellRunner::default().run("echo oops 1>&2; exit 3", in_seconds(5));
        match result {
            Err(Error::SubProcessExit { stderr, .. }) => assert_eq!(stderr, "oops"),
            other => panic!("Expected SubProcessExit, got {other:?}"),
        }
    }

    #[test]
    fn test_shell_runner_kills_command_at_deadline() {
        let started = Instant::now();
        let result = ShellRunner::default().run(
            "sleep 5",
            Instant::now() + Duration::from_millis(200),
        );

        assert!(matches!(result, Err(Error::DeadlineExceeded { .. })));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_shell_runner_times_out_on_background_output_holder() {
        let started = Instant::now();
        let result = ShellRunner::default().run(
            "sleep 3 & echo hi",
            Instant::now() + Duration::from_millis(300),
        );

        assert!(matches!(result, Err(Error::DeadlineExceeded { .. })));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_shell_runner_expired_deadline_fails_fast() {
        let deadline = Instant::now();
        thread::sleep(Duration::from_millis(5));
        let result = ShellRunner::default().run("echo never", deadline);
        assert!(matches!(result, Err(Error::DeadlineElapsed)));
    }

    #[test]
    fn test_shell_runner_missing_shell() {
        let result = ShellRunner::new("/no/such/shell").run("echo hi", in_seconds(5));
        assert!(matches!(result, Err(Error::SubProcess(_))));
    }

    #[test]
    fn test_closure_runner() {
        let runner =
            |command: &str, _deadline: Instant| -> Result<Vec<u8>> { Ok(command.as_bytes().to_vec()) };
        assert_eq!(runner.run("abc", in_seconds(1)).unwrap(), b"abc");
    }
}
