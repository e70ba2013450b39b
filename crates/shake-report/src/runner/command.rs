//! Invocation of the shake binary.

use crate::utils::config::{DEFAULT_OPTIONS, DEFAULT_PROGRAM};
use crate::utils::error::RunnerError;
use log::{debug, info};
use std::io::BufReader;
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};

/// How to run the tool against one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShakeCommand {
    /// Program name or path
    pub program: String,

    /// Option string passed through verbatim, split on whitespace
    pub options: String,

    /// File or directory to scan; also the prefix of the tool's error lines
    pub target: String,
}

impl ShakeCommand {
    /// Default program and options for a target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            options: DEFAULT_OPTIONS.to_string(),
            target: target.into(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }

    /// Arguments after the program name: `<options...> -- <target>`
    pub fn args(&self) -> Vec<String> {
        self.options
            .split_whitespace()
            .map(str::to_string)
            .chain(["--".to_string(), self.target.clone()])
            .collect()
    }

    /// Start the tool with stdout piped back to us
    ///
    /// stderr is inherited so the tool's own messages reach the terminal.
    ///
    /// # Errors
    /// * `RunnerError::SpawnFailed` - program missing or not executable
    /// * `RunnerError::MissingStdout` - pipe was not set up
    pub fn spawn(&self) -> Result<ShakeProcess, RunnerError> {
        let args = self.args();
        info!("Running: {} {}", self.program, args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| RunnerError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        let Some(stdout) = child.stdout.take() else {
            // Reap before bailing out
            let _ = child.kill();
            let _ = child.wait();
            return Err(RunnerError::MissingStdout);
        };

        debug!("Spawned {} (pid {})", self.program, child.id());

        Ok(ShakeProcess {
            child,
            stdout: Some(BufReader::new(stdout)),
        })
    }
}

/// A running tool whose stdout is the report stream
#[derive(Debug)]
pub struct ShakeProcess {
    child: Child,
    stdout: Option<BufReader<ChildStdout>>,
}

impl ShakeProcess {
    /// Take the buffered stdout; `None` once taken
    pub fn take_stdout(&mut self) -> Option<BufReader<ChildStdout>> {
        self.stdout.take()
    }

    /// Wait for the tool to exit, closing our end of stdout first
    pub fn wait(mut self) -> Result<ExitStatus, RunnerError> {
        drop(self.stdout.take());
        self.child.wait().map_err(RunnerError::WaitFailed)
    }
}
