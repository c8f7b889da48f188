//! Key command emission
//!
//! Resolves tokens to key names and delivers one `sendkey` command
//! per key, either to a stream (stdout) or to an external command,
//! pausing between keys.

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::constants::{SENDKEY_VERB, WAIT_KEY, WAIT_PAUSE};
use crate::error::Result;
use crate::keys::{resolve, tokenize, with_shift};

// ============================================================================
// Sinks
// ============================================================================

/// Destination for key commands
pub trait KeySink {
    /// Deliver one complete command line (without trailing newline)
    fn send(&mut self, command: &str) -> Result<()>;
}

/// Writes each command as a line and flushes immediately,
/// so a process reading the other end of a pipe sees it at once.
pub struct StreamSink<W: Write> {
    out: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> KeySink for StreamSink<W> {
    fn send(&mut self, command: &str) -> Result<()> {
        writeln!(self.out, "{}", command)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Pipes each command into a fresh run of a shell command.
///
/// Equivalent to `echo '<command>' | <shell_command>`. The command string
/// is handed to `sh -c` unchanged so it may itself be a pipeline; the key
/// command travels over stdin and is never interpolated into the shell text.
/// Failures of the child are logged and otherwise ignored.
pub struct CommandSink {
    shell_command: String,
}

impl CommandSink {
    pub fn new(shell_command: impl Into<String>) -> Self {
        Self {
            shell_command: shell_command.into(),
        }
    }
}

impl KeySink for CommandSink {
    fn send(&mut self, command: &str) -> Result<()> {
        let mut child = match Command::new("sh")
            .arg("-c")
            .arg(&self.shell_command)
            .stdin(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to run '{}': {}", self.shell_command, e);
                return Ok(());
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            // Child may exit without reading (broken pipe)
            if let Err(e) = writeln!(stdin, "{}", command) {
                debug!("'{}' did not take input: {}", self.shell_command, e);
            }
            // stdin dropped here so the child sees EOF
        }

        match child.wait() {
            Ok(status) if !status.success() => {
                warn!("'{}' exited with {}", self.shell_command, status);
            }
            Ok(_) => {}
            Err(e) => warn!("Failed to wait for '{}': {}", self.shell_command, e),
        }
        Ok(())
    }
}

// ============================================================================
// Pacing
// ============================================================================

/// Blocking pause between keys
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread
pub struct Sleep;

impl Pause for Sleep {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

// ============================================================================
// Sender
// ============================================================================

/// Drives tokenization, resolution and emission for one input string
pub struct Sender<S: KeySink, P: Pause = Sleep> {
    sink: S,
    pause: P,
    /// Delay after each emitted key
    delay: Duration,
}

impl<S: KeySink> Sender<S, Sleep> {
    pub fn new(sink: S, delay: Duration) -> Self {
        Self::with_pause(sink, Sleep, delay)
    }
}

impl<S: KeySink, P: Pause> Sender<S, P> {
    pub fn with_pause(sink: S, pause: P, delay: Duration) -> Self {
        Self { sink, pause, delay }
    }

    /// Emit a single key.
    ///
    /// `wait` pauses for a fixed second and emits nothing. Any other
    /// key is sent as `sendkey <name>` followed by the inter-key delay.
    /// Returns whether a command was emitted.
    pub fn sendkey(&mut self, key_name: &str) -> Result<bool> {
        if key_name == WAIT_KEY {
            debug!("wait {:?}", WAIT_PAUSE);
            self.pause.pause(WAIT_PAUSE);
            return Ok(false);
        }

        let command = format!("{} {}", SENDKEY_VERB, with_shift(key_name));
        debug!("{}", command);
        self.sink.send(&command)?;
        self.pause.pause(self.delay);
        Ok(true)
    }

    /// Translate and emit a whole input string in order.
    /// Returns the number of key commands emitted.
    pub fn run(&mut self, input: &str) -> Result<usize> {
        let mut sent = 0;
        for token in tokenize(input) {
            if self.sendkey(&resolve(token))? {
                sent += 1;
            }
        }
        Ok(sent)
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (S, P) {
        (self.sink, self.pause)
    }
}
