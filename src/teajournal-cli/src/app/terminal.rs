//! Terminal setup and teardown.
//!
//! [`JournalTerminal`] owns a RAII guard, so the terminal is restored when
//! it is dropped, including on early returns through `?`. A panic hook
//! covers the remaining case.

use std::io::{Stdout, stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Which terminal features to turn on.
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    pub alternate_screen: bool,
    /// Needed for clicking pills and buttons.
    pub mouse_capture: bool,
    pub bracketed_paste: bool,
    pub title: Option<String>,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            mouse_capture: true,
            bracketed_paste: true,
            title: None,
        }
    }
}

impl TerminalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Restores the features it was created with on drop.
pub struct TerminalGuard {
    alternate_screen: bool,
    mouse_capture: bool,
    bracketed_paste: bool,
}

impl TerminalGuard {
    fn new(options: &TerminalOptions) -> Self {
        Self {
            alternate_screen: options.alternate_screen,
            mouse_capture: options.mouse_capture,
            bracketed_paste: options.bracketed_paste,
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal_impl(self.alternate_screen, self.mouse_capture, self.bracketed_paste);
    }
}

/// Full-screen ratatui terminal over crossterm.
pub struct JournalTerminal {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl JournalTerminal {
    pub fn new(options: TerminalOptions) -> Result<Self> {
        install_panic_hook();

        // Built before raw mode so a failure below still restores it.
        let guard = TerminalGuard::new(&options);
        enable_raw_mode()?;

        let mut out = stdout();
        if options.alternate_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        if options.mouse_capture {
            execute!(out, EnableMouseCapture)?;
        }
        if options.bracketed_paste {
            execute!(out, EnableBracketedPaste)?;
        }
        execute!(out, cursor::Hide)?;
        if let Some(ref title) = options.title {
            execute!(out, SetTitle(title))?;
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

fn restore_terminal_impl(alternate_screen: bool, mouse_capture: bool, bracketed_paste: bool) -> Result<()> {
    let mut out = stdout();

    execute!(out, cursor::Show)?;
    if bracketed_paste {
        execute!(out, DisableBracketedPaste)?;
    }
    if mouse_capture {
        execute!(out, DisableMouseCapture)?;
    }
    if alternate_screen {
        execute!(out, LeaveAlternateScreen)?;
    }
    disable_raw_mode()?;
    Ok(())
}

/// Restore the terminal assuming every feature was enabled.
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl(true, true, true)
}

/// Restore the terminal before the default panic message is printed.
/// Installed once.
fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
