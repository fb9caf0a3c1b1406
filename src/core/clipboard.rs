/// Best-effort clipboard copy through the platform's clipboard utility.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard utility found (tried {0})")]
    NotFound(String),
    #[error("{program} exited with {status}")]
    Failed {
        program: &'static str,
        status: std::process::ExitStatus,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A clipboard utility invocation: program plus arguments.
pub type ClipboardCommand = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[("pbcopy", &[])];

#[cfg(windows)]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", windows)))]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Utilities to try, in order, for the current platform.
pub fn clipboard_commands() -> &'static [ClipboardCommand] {
    CLIPBOARD_COMMANDS
}

/// Copy `text` to the system clipboard using the first utility that
/// accepts it.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    copy_with(clipboard_commands(), text)
}

/// Pipe `text` into each command in `commands` until one succeeds.
///
/// Missing commands are skipped. A command that spawns but fails (for
/// example `wl-copy` outside a Wayland session) is logged and the next one
/// is tried. If every candidate fails the last failure is returned;
/// if none could be spawned the result is [`ClipboardError::NotFound`].
pub fn copy_with(commands: &[ClipboardCommand], text: &str) -> Result<(), ClipboardError> {
    let mut last_failure = None;
    for &(program, args) in commands {
        match pipe_into(program, args, text) {
            Ok(()) => {
                debug!(program, bytes = text.len(), "copied to clipboard");
                return Ok(());
            }
            Err(ClipboardError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(program, "clipboard utility not found");
            }
            Err(e) => {
                debug!(program, error = %e, "clipboard utility failed");
                last_failure = Some(e);
            }
        }
    }

    if let Some(e) = last_failure {
        warn!(error = %e, "every clipboard utility failed");
        return Err(e);
    }
    let tried: Vec<&str> = commands.iter().map(|(program, _)| *program).collect();
    Err(ClipboardError::NotFound(tried.join(", ")))
}

/// Run one utility with `text` on its stdin. The child is always reaped,
/// even when the write fails.
fn pipe_into(program: &'static str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin drops with the match arm so the child sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    if !status.success() {
        return Err(ClipboardError::Failed { program, status });
    }
    written?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_has_candidates() {
        assert!(!clipboard_commands().is_empty());
    }

    #[test]
    fn missing_utilities_report_not_found() {
        let commands: [ClipboardCommand; 2] = [
            ("idea-spark-no-such-clipboard-a", &[]),
            ("idea-spark-no-such-clipboard-b", &["--flag"]),
        ];
        match copy_with(&commands, "hello") {
            Err(ClipboardError::NotFound(tried)) => {
                assert_eq!(
                    tried,
                    "idea-spark-no-such-clipboard-a, idea-spark-no-such-clipboard-b"
                );
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn no_candidates_is_not_found() {
        assert!(matches!(copy_with(&[], "x"), Err(ClipboardError::NotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn failing_utility_reports_status() {
        let commands: [ClipboardCommand; 1] = [("false", &[])];
        assert!(matches!(
            copy_with(&commands, "x"),
            Err(ClipboardError::Failed { program: "false", .. }) | Err(ClipboardError::Io(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn successful_utility_consumes_text() {
        let commands: [ClipboardCommand; 1] = [("cat", &[])];
        assert!(copy_with(&commands, "report text").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn failed_utility_falls_through_to_next() {
        let commands: [ClipboardCommand; 3] = [
            ("idea-spark-no-such-clipboard", &[]),
            ("false", &[]),
            ("cat", &[]),
        ];
        assert!(copy_with(&commands, "report text").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn last_failure_is_reported_when_all_fail() {
        let commands: [ClipboardCommand; 2] =
            [("false", &[]), ("idea-spark-no-such-clipboard", &[])];
        assert!(matches!(
            copy_with(&commands, "x"),
            Err(ClipboardError::Failed { program: "false", .. }) | Err(ClipboardError::Io(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn reader_that_exits_early_is_reaped_and_skipped() {
        // `true` never reads, so a payload larger than the pipe buffer breaks
        // the write
        let text = "x".repeat(1 << 20);
        let commands: [ClipboardCommand; 1] = [("true", &[])];
        assert!(matches!(copy_with(&commands, &text), Err(ClipboardError::Io(_))));

        let commands: [ClipboardCommand; 2] = [("true", &[]), ("cat", &[])];
        assert!(copy_with(&commands, &text).is_ok());
    }
}
