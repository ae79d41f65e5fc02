//! Terminal capability detection.
//!
//! The environment is captured once into a [`TermEnv`] snapshot; everything
//! after that is pure, so the rules can be tested without a terminal.

use crossterm::terminal;
use crossterm::tty::IsTty;
use log::debug;
use serde::Serialize;
use std::process::{Command, Stdio};

const FALLBACK_SIZE: (u16, u16) = (80, 24);

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSupport {
    None,
    Ansi8,
    Ansi256,
    TrueColor,
}

impl ColorSupport {
    /// Interprets a color count as reported by terminfo.
    pub fn from_count(colors: i64) -> Self {
        match colors {
            n if n >= 1 << 24 => Self::TrueColor,
            n if n >= 256 => Self::Ansi256,
            n if n >= 8 => Self::Ansi8,
            _ => Self::None,
        }
    }
}

/// The environment variables and terminfo answers detection looks at.
#[derive(Clone, Debug, Default)]
pub struct TermEnv {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub term_program: Option<String>,
    pub lc_terminal: Option<String>,
    pub tput_colors: Option<i64>,
}

impl TermEnv {
    pub fn capture() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        let term = var("TERM");
        let tput_colors = term.as_ref().and_then(|_| query_tput_colors());
        Self {
            term,
            colorterm: var("COLORTERM"),
            term_program: var("TERM_PROGRAM"),
            lc_terminal: var("LC_TERMINAL"),
            tput_colors,
        }
    }

    pub fn colors(&self) -> ColorSupport {
        if matches!(self.colorterm.as_deref(), Some("truecolor" | "24bit")) {
            return ColorSupport::TrueColor;
        }
        if let Some(count) = self.tput_colors {
            return ColorSupport::from_count(count);
        }
        match self.term.as_deref() {
            Some(term) if term.contains("256color") => ColorSupport::Ansi256,
            Some("dumb") | None => ColorSupport::None,
            Some(_) => ColorSupport::Ansi8,
        }
    }

    pub fn inline_images(&self) -> bool {
        matches!(self.term_program.as_deref(), Some("iTerm.app"))
            || matches!(self.lc_terminal.as_deref(), Some("iTerm2"))
    }
}

fn query_tput_colors() -> Option<i64> {
    let output = Command::new("tput")
        .arg("colors")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TerminalInfo {
    pub columns: u16,
    pub rows: u16,
    pub is_tty: bool,
    pub colors: ColorSupport,
    pub inline_images: bool,
}

impl TerminalInfo {
    pub fn detect() -> Self {
        let env = TermEnv::capture();
        let is_tty = std::io::stdout().is_tty();
        let size = terminal::size().ok();
        let info = Self::from_env(&env, is_tty, size);
        debug!("terminal: {:?} (env {:?})", info, env);
        info
    }

    pub fn from_env(env: &TermEnv, is_tty: bool, size: Option<(u16, u16)>) -> Self {
        let (columns, rows) = size
            .filter(|&(cols, rows)| cols > 0 && rows > 0)
            .unwrap_or(FALLBACK_SIZE);
        Self {
            columns,
            rows,
            is_tty,
            colors: env.colors(),
            inline_images: env.inline_images(),
        }
    }
}
