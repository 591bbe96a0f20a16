//! Copy text to the terminal's clipboard with an OSC 52 escape sequence.
//! Works over SSH and inside tmux without any native clipboard tool.

use anyhow::{Context, Result};
use base64::Engine;
use std::io::Write;

/// Build the OSC 52 sequence for `text`, wrapped for tmux passthrough when needed.
pub fn osc52_sequence(text: &str, in_tmux: bool) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    if in_tmux {
        format!("\x1bPtmux;\x1b\x1b]52;c;{}\x07\x1b\\", encoded)
    } else {
        format!("\x1b]52;c;{}\x07", encoded)
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let sequence = osc52_sequence(text, std::env::var_os("TMUX").is_some());
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(sequence.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write clipboard escape sequence")
}
