/*!
 * System clipboard access
 *
 * clipmd never links a clipboard library. It pipes the document into
 * whichever copy command the host provides.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    /// A copy command could not be run or reported failure
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// None of the copy commands for this host is installed
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Destination for the rendered document
pub trait Clipboard {
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}

/// Host clipboard, reached through the first working copy command
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Host families with distinct copy commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Host {
    MacOs,
    Windows,
    Linux,
    Android,
    Other,
}

impl Host {
    fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "linux") {
            // WSL reaches the Windows clipboard through clip.exe
            if env::var_os("WSL_DISTRO_NAME").is_some() {
                Self::Windows
            } else {
                Self::Linux
            }
        } else {
            Self::Other
        }
    }

    /// Copy commands native to this host, most preferred first
    fn copy_commands(self) -> &'static [CopyCommand] {
        match self {
            Self::MacOs => &[CopyCommand::Pbcopy],
            Self::Windows => &[CopyCommand::ClipExe],
            Self::Linux => &[CopyCommand::WlCopy, CopyCommand::Xsel, CopyCommand::Xclip],
            Self::Android => &[CopyCommand::Termux],
            Self::Other => &[],
        }
    }
}

static HOST: OnceLock<Host> = OnceLock::new();

fn host() -> Host {
    *HOST.get_or_init(Host::detect)
}

/// External programs that accept text on stdin and place it on a clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyCommand {
    TmuxBuffer,
    WlCopy,
    Xsel,
    Xclip,
    Pbcopy,
    ClipExe,
    Termux,
}

impl CopyCommand {
    fn program(self) -> &'static str {
        match self {
            Self::TmuxBuffer => "tmux",
            Self::WlCopy => "wl-copy",
            Self::Xsel => "xsel",
            Self::Xclip => "xclip",
            Self::Pbcopy => "pbcopy",
            Self::ClipExe => "clip.exe",
            Self::Termux => "termux-clipboard-set",
        }
    }

    fn args(self) -> &'static [&'static str] {
        match self {
            Self::TmuxBuffer => &["load-buffer", "-w", "-"],
            Self::Xsel => &["-b", "-i"],
            Self::Xclip => &["-selection", "clipboard", "-in"],
            Self::WlCopy | Self::Pbcopy | Self::ClipExe | Self::Termux => &[],
        }
    }

    /// Whether the command can be used in the current session
    fn usable(self) -> bool {
        match self {
            Self::TmuxBuffer => command_exists("tmux") && tmux_server_reachable(),
            Self::WlCopy => env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy"),
            other => command_exists(other.program()),
        }
    }

    fn run(self, text: &str) -> Result<()> {
        pipe_into(self.program(), self.args(), text)
    }
}

/// Put `text` on the clipboard
///
/// Candidates are a reachable tmux server first, then the host's own copy
/// commands. The first one that succeeds wins; if all fail the last error is
/// returned.
///
/// ```no_run
/// clipmd::clipboard::copy_to_clipboard("fn main() {}").unwrap();
/// ```
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_error = None;

    for command in candidate_commands() {
        match command.run(text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                debug!("{} could not take the clipboard: {}", command.program(), e);
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or(ClipboardError::NoClipboardFound))
}

/// Whether `command` can be found on `PATH` or spawned directly
pub fn command_exists(command: &str) -> bool {
    let on_path = env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(command).is_file()))
        .unwrap_or(false);

    on_path
        || Command::new(command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
}

fn candidate_commands() -> Vec<CopyCommand> {
    std::iter::once(CopyCommand::TmuxBuffer)
        .chain(host().copy_commands().iter().copied())
        .filter(|command| command.usable())
        .collect()
}

fn tmux_server_reachable() -> bool {
    env::var_os("TMUX").is_some()
        || Command::new("tmux")
            .arg("list-buffers")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
}

/// Run `program`, write `text` to its stdin, close it and wait for exit
fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("{}: {}", program, e)))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| ClipboardError::CommandFailed(format!("{}: stdin unavailable", program)))?;
    let written = stdin.write_all(text.as_bytes());
    drop(stdin);

    let status = child.wait()?;
    written.map_err(|e| ClipboardError::CommandFailed(format!("{}: {}", program, e)))?;

    if !status.success() {
        return Err(ClipboardError::CommandFailed(format!(
            "{} exited with {}",
            program, status
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("ls"));
        assert!(!command_exists("clipmd-no-such-command"));
    }

    #[test]
    fn test_host_is_stable() {
        assert_eq!(host(), host());
        assert_eq!(host(), Host::detect());
    }

    #[test]
    fn test_linux_prefers_wayland_then_x11() {
        assert_eq!(
            Host::Linux.copy_commands(),
            &[CopyCommand::WlCopy, CopyCommand::Xsel, CopyCommand::Xclip]
        );
        assert!(Host::Other.copy_commands().is_empty());
    }

    #[test]
    fn test_command_lines() {
        assert_eq!(CopyCommand::Xclip.program(), "xclip");
        assert_eq!(
            CopyCommand::Xclip.args(),
            &["-selection", "clipboard", "-in"]
        );
        assert!(CopyCommand::Pbcopy.args().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_an_error() {
        let result = pipe_into("false", &[], "text");
        assert!(matches!(result, Err(ClipboardError::CommandFailed(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command_consumes_input() {
        assert!(pipe_into("cat", &[], "text").is_ok());
    }

    #[test]
    #[ignore] // Needs a tmux session
    fn test_tmux_buffer_round_trip() {
        if env::var_os("TMUX").is_none() {
            return;
        }

        let text = "clipmd tmux buffer";
        CopyCommand::TmuxBuffer
            .run(text)
            .expect("tmux load-buffer failed");

        let output = Command::new("tmux")
            .arg("show-buffer")
            .output()
            .expect("tmux show-buffer failed");
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), text);
    }
}
