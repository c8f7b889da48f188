//! Command line interface

use std::time::Duration;

use clap::Parser;

use crate::constants::DEFAULT_DELAY_SECS;
use crate::error::Error;

const AFTER_HELP: &str = "\
STRING may contain <name> escapes naming monitor keys directly:
    <enter> <ret> <tab> <esc> <ctrl-alt-f1> ...
    <lt> <gt>   literal '<' and '>'
    <wait>      pause one second

EXAMPLES:
    sendkeys 'ls<enter>ls<gt>/dev/null<enter>'
    sendkeys -d 0.05 -c 'socat - UNIX-CONNECT:/tmp/qemu-monitor' 'root<enter>'

Logging goes to stderr and is controlled by RUST_LOG.";

/// Translate a string to "sendkey" commands for QEMU
#[derive(Parser, Debug)]
#[command(name = "sendkeys")]
#[command(about = "Translate a string to \"sendkey\" commands for the QEMU monitor")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Pipe each sendkey command to this command, individually
    #[arg(short, long, value_name = "COMMAND")]
    pub command: Option<String>,

    /// Delay SECONDS after each key [default: 0.1]
    #[arg(short, long, value_name = "SECONDS", value_parser = parse_delay)]
    pub delay: Option<f64>,

    /// Text to type; may contain <name> escapes
    #[arg(value_name = "STRING")]
    pub input: Option<String>,
}

/// Parse a delay in seconds.
/// Accepts any finite, non-negative float.
pub fn parse_delay(s: &str) -> Result<f64, Error> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidDelay(s.to_string()))
        .and_then(validate_delay)
}

/// Reject delays that cannot be slept for
fn validate_delay(secs: f64) -> Result<f64, Error> {
    // Negative, NaN, infinite and overflowing values all fail here
    if Duration::try_from_secs_f64(secs).is_ok() {
        Ok(secs)
    } else {
        Err(Error::InvalidDelay(secs.to_string()))
    }
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub command: Option<String>,
    pub delay: Duration,
    pub input: String,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            command: args.command,
            // parse_delay already rejected anything Duration cannot hold
            delay: Duration::from_secs_f64(args.delay.unwrap_or(DEFAULT_DELAY_SECS)),
            // Missing input types nothing
            input: args.input.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay("0.2").unwrap(), 0.2);
        assert_eq!(parse_delay("1").unwrap(), 1.0);
        assert_eq!(parse_delay("0").unwrap(), 0.0);
        assert!(parse_delay("abc").is_err());
        assert!(parse_delay("-1").is_err());
        assert!(parse_delay("inf").is_err());
        assert!(parse_delay("NaN").is_err());
        assert!(parse_delay("1e300").is_err());
    }

    #[test]
    fn test_args_full() {
        let args =
            Args::try_parse_from(["sendkeys", "-c", "nc -U sock", "-d", "0.5", "ls<enter>"])
                .unwrap();
        assert_eq!(args.command.as_deref(), Some("nc -U sock"));
        assert_eq!(args.delay, Some(0.5));
        assert_eq!(args.input.as_deref(), Some("ls<enter>"));
    }

    #[test]
    fn test_args_long_flags() {
        let args =
            Args::try_parse_from(["sendkeys", "--command", "cat", "--delay", "0", "x"]).unwrap();
        assert_eq!(args.command.as_deref(), Some("cat"));
        assert_eq!(args.delay, Some(0.0));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["sendkeys"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.delay.is_none());
        assert!(args.input.is_none());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from(Args::try_parse_from(["sendkeys", "abc"]).unwrap());
        assert_eq!(settings.delay, Duration::from_millis(100));
        assert!(settings.command.is_none());
        assert_eq!(settings.input, "abc");
    }

    #[test]
    fn test_settings_missing_input_is_empty() {
        let settings = Settings::from(Args::try_parse_from(["sendkeys"]).unwrap());
        assert_eq!(settings.input, "");
    }

    #[test]
    fn test_settings_from_flags() {
        let settings = Settings::from(
            Args::try_parse_from(["sendkeys", "-d", "0.5", "-c", "tee", "x"]).unwrap(),
        );
        assert_eq!(settings.delay, Duration::from_millis(500));
        assert_eq!(settings.command.as_deref(), Some("tee"));
    }

    #[test]
    fn test_args_rejects_bad_delay() {
        assert!(Args::try_parse_from(["sendkeys", "-d", "abc", "x"]).is_err());
    }

    #[test]
    fn test_args_rejects_unknown_flag() {
        assert!(Args::try_parse_from(["sendkeys", "--bogus", "x"]).is_err());
    }
}
