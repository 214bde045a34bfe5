//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

/// Flags and config values that influence the UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiPreferences {
    pub plain: bool,
    pub no_color: bool,
    pub ascii: bool,
    /// `[ui] color` from the config file
    pub color: Option<bool>,
    /// `[ui] unicode` from the config file
    pub unicode: Option<bool>,
}

impl UiContext {
    /// Create context from environment, CLI flags and config.
    pub fn from_env(prefs: UiPreferences) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Flags win over config; NO_COLOR and TERM=dumb win over both.
        let color = is_tty
            && !prefs.no_color
            && prefs.color.unwrap_or(true)
            && !no_color_env
            && !term_is_dumb;
        let unicode = !prefs.ascii && prefs.unicode.unwrap_or(true);
        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::resolve(prefs.plain, is_tty, term_is_dumb);

        Self {
            is_tty,
            color,
            unicode,
            width,
            mode,
        }
    }

    /// Plain, colorless context for non-interactive output and tests.
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Get terminal width, falling back to 80.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: ioctl with TIOCGWINSZ only writes into winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
